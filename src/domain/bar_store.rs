use std::collections::VecDeque;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::ENGINE;
use crate::domain::candle::Bar;

/// What `BarStore::upsert` did with a bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarUpdate {
    /// A bar with the same time existed and was overwritten (in-progress period)
    Revised,
    /// Newer than every stored bar
    Appended,
    /// Older than the newest bar but missing from the store (late backfill)
    Inserted,
}

/// Owned, time-ordered, capacity-bounded bar sequence.
/// Bars are unique by `time`; the oldest are dropped once `capacity` is exceeded.
#[derive(Debug, Clone)]
pub struct BarStore {
    bars: VecDeque<Bar>,
    capacity: usize,
}

impl Default for BarStore {
    fn default() -> Self {
        Self::new(ENGINE.bar_capacity)
    }
}

impl BarStore {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            bars: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Seed from historical bars (any order; duplicate times keep the last one)
    pub fn from_history(history: impl IntoIterator<Item = Bar>, capacity: usize) -> Self {
        let mut store = Self::new(capacity);
        for bar in history {
            store.upsert(bar);
        }
        store
    }

    /// Replace-by-time, otherwise insert in time order. Trims to capacity.
    pub fn upsert(&mut self, bar: Bar) -> BarUpdate {
        // Fast path: live updates almost always touch the newest bar
        let update = match self.bars.back().map(|b| b.time) {
            Some(last_time) if last_time == bar.time => {
                if let Some(slot) = self.bars.back_mut() {
                    *slot = bar;
                }
                BarUpdate::Revised
            }
            Some(last_time) if last_time > bar.time => {
                match self.bars.binary_search_by_key(&bar.time, |b| b.time) {
                    Ok(idx) => {
                        self.bars[idx] = bar;
                        BarUpdate::Revised
                    }
                    Err(idx) => {
                        self.bars.insert(idx, bar);
                        BarUpdate::Inserted
                    }
                }
            }
            _ => {
                self.bars.push_back(bar);
                BarUpdate::Appended
            }
        };

        while self.bars.len() > self.capacity {
            self.bars.pop_front();
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_bar_revisions && update == BarUpdate::Revised {
            log::debug!("BarStore: revised bar at {}", bar.time);
        }

        update
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.back()
    }

    /// Borrow the bars as one contiguous, time-ordered slice
    pub fn as_slice(&mut self) -> &[Bar] {
        self.bars.make_contiguous()
    }

    /// Owned copy of the current window (for handing to a worker)
    pub fn snapshot(&self) -> Vec<Bar> {
        self.bars.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(time: i64, close: f64) -> Bar {
        Bar::new(time, close, close + 1.0, close - 1.0, close, 10.0)
    }

    #[test]
    fn test_revision_replaces_in_place() {
        let mut store = BarStore::new(10);
        assert_eq!(store.upsert(bar(60, 1.0)), BarUpdate::Appended);
        assert_eq!(store.upsert(bar(120, 2.0).partial()), BarUpdate::Appended);
        assert_eq!(store.upsert(bar(120, 3.0)), BarUpdate::Revised);

        assert_eq!(store.len(), 2);
        let last = store.last().unwrap();
        assert_eq!(last.close, 3.0);
        assert!(last.is_final);
    }

    #[test]
    fn test_late_bar_inserted_in_time_order() {
        let mut store = BarStore::new(10);
        store.upsert(bar(60, 1.0));
        store.upsert(bar(180, 3.0));
        assert_eq!(store.upsert(bar(120, 2.0)), BarUpdate::Inserted);
        assert_eq!(store.upsert(bar(60, 9.0)), BarUpdate::Revised);

        let times: Vec<i64> = store.as_slice().iter().map(|b| b.time).collect();
        assert_eq!(times, vec![60, 120, 180]);
        assert_eq!(store.as_slice()[0].close, 9.0);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut store = BarStore::new(3);
        for t in 1..=5 {
            store.upsert(bar(t * 60, t as f64));
        }
        let times: Vec<i64> = store.snapshot().iter().map(|b| b.time).collect();
        assert_eq!(times, vec![180, 240, 300], "Only the 3 most recent bars should remain");
    }

    #[test]
    fn test_default_capacity_is_engine_capacity() {
        let store = BarStore::default();
        assert_eq!(store.capacity(), ENGINE.bar_capacity);
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_history_dedups_by_time() {
        let history = vec![bar(120, 2.0), bar(60, 1.0), bar(120, 5.0)];
        let store = BarStore::from_history(history, 10);
        assert_eq!(store.len(), 2);
        assert_eq!(store.last().unwrap().close, 5.0);
    }
}
