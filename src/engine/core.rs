use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

use crate::advisory::AdvisoryRequest;
use crate::analysis::{self, ZoneSummary};
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{ENGINE, EngineConfig};
use crate::domain::{Bar, BarStore};
use crate::models::Zone;

use super::messages::{JobRequest, JobResult};
use super::state::ZoneState;
use super::worker;

/// Worker Communication
struct WorkerLink {
    job_tx: Sender<JobRequest>,
    result_rx: Receiver<JobResult>,
    in_flight: usize,
}

/// Owns the bar window and the published zone set.
///
/// Every recompute is a full pass over the current window. By default it runs
/// inline; after `spawn_worker` it runs on a background thread and `update`
/// swaps finished results in.
pub struct ZoneEngine {
    store: BarStore,
    state: ZoneState,
    config: EngineConfig,
    seen_live_update: bool,
    next_generation: u64,
    worker: Option<WorkerLink>,
}

impl ZoneEngine {
    /// Seed with historical bars and compute the initial zone set.
    pub fn new(history: Vec<Bar>) -> Self {
        Self::with_config(history, ENGINE)
    }

    pub fn with_config(history: Vec<Bar>, config: EngineConfig) -> Self {
        let store = BarStore::from_history(history, config.bar_capacity);
        log::info!("ZoneEngine: seeded with {} bars", store.len());

        let mut engine = Self {
            store,
            state: ZoneState::new(),
            config,
            seen_live_update: false,
            next_generation: 0,
            worker: None,
        };
        engine.request_recalc();
        engine
    }

    /// Move subsequent recomputes onto a background thread.
    pub fn spawn_worker(mut self) -> Self {
        let (job_tx, job_rx) = channel::<JobRequest>();
        let (result_tx, result_rx) = channel::<JobResult>();

        worker::spawn_worker_thread(job_rx, result_tx);

        self.worker = Some(WorkerLink {
            job_tx,
            result_rx,
            in_flight: 0,
        });
        self
    }

    /// Feed one bar from the live feed (new bar or revision of the newest one).
    ///
    /// Recomputes on closed bars, on the first live update after seeding, and on
    /// partial revisions when `recalc_on_partial` is set. Returns true if a
    /// recompute was started.
    pub fn on_bar(&mut self, bar: Bar) -> bool {
        let first_live = !self.seen_live_update;
        self.seen_live_update = true;
        self.store.upsert(bar);

        if bar.is_final || first_live || self.config.recalc_on_partial {
            self.request_recalc();
            true
        } else {
            false
        }
    }

    /// Schedule a full recompute over the current window.
    pub fn request_recalc(&mut self) {
        self.next_generation += 1;
        let generation = self.next_generation;

        if let Some(link) = self.worker.as_mut() {
            let req = JobRequest {
                generation,
                bars: self.store.snapshot(),
            };
            if link.job_tx.send(req).is_ok() {
                link.in_flight += 1;
                self.state.is_calculating = true;
                return;
            }
            log::warn!("ZoneEngine: worker thread gone, falling back to inline analysis");
            self.worker = None;
        }

        let start = Instant::now();
        let bars = self.store.as_slice();
        let zones = analysis::analyze(bars);
        let result = JobResult {
            generation,
            bar_count: bars.len(),
            duration_ms: start.elapsed().as_millis(),
            result: Ok(Arc::new(zones)),
        };
        self.handle_job_result(result);
    }

    /// Drain finished worker results into the front buffer.
    /// Returns TRUE while a worker job is still outstanding.
    pub fn update(&mut self) -> bool {
        let mut finished = Vec::new();
        if let Some(link) = self.worker.as_mut() {
            while let Ok(result) = link.result_rx.try_recv() {
                link.in_flight = link.in_flight.saturating_sub(1);
                finished.push(result);
            }
        }
        for result in finished {
            self.handle_job_result(result);
        }

        self.state.is_calculating = self.worker.as_ref().is_some_and(|l| l.in_flight > 0);
        self.state.is_calculating
    }

    /// Block until every outstanding job has been applied, or `timeout` passes.
    /// Returns true if the engine is idle.
    pub fn wait_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.update() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let Some(link) = self.worker.as_mut() else {
                return true;
            };
            match link.result_rx.recv_timeout(remaining) {
                Ok(result) => {
                    link.in_flight = link.in_flight.saturating_sub(1);
                    self.handle_job_result(result);
                }
                Err(_) => return false,
            }
        }
        true
    }

    // --- ACCESSORS ---

    /// Current front buffer (cheap clone)
    pub fn zones(&self) -> Arc<Vec<Zone>> {
        self.state.zones.clone()
    }

    pub fn active_zones(&self) -> Vec<Zone> {
        self.state
            .zones
            .iter()
            .filter(|z| z.is_active())
            .cloned()
            .collect()
    }

    pub fn summary(&self) -> ZoneSummary {
        ZoneSummary::from_zones(&self.state.zones)
    }

    pub fn bars(&self) -> Vec<Bar> {
        self.store.snapshot()
    }

    pub fn bar_count(&self) -> usize {
        self.store.len()
    }

    pub fn state(&self) -> &ZoneState {
        &self.state
    }

    pub fn is_calculating(&self) -> bool {
        self.state.is_calculating
    }

    /// Package a published zone with its recent bars for the advisory service
    pub fn advisory_request(&self, zone_id: &str) -> Option<AdvisoryRequest> {
        let zone = self.state.zones.iter().find(|z| z.id == zone_id)?;
        let bars = self.store.snapshot();
        Some(AdvisoryRequest::with_context(
            zone,
            &bars,
            self.config.advisory_context_bars,
        ))
    }

    // --- INTERNAL LOGIC ---

    fn handle_job_result(&mut self, result: JobResult) {
        match result.result {
            Ok(zones) => {
                if self.state.update_buffer(result.generation, zones) {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_engine_swaps {
                        log::debug!(
                            "ZoneEngine: gen {} over {} bars in {} ms -> {}",
                            result.generation,
                            result.bar_count,
                            result.duration_ms,
                            self.summary()
                        );
                    }
                }
            }
            Err(e) => {
                log::error!("Zone analysis failed (gen {}): {}", result.generation, e);
                self.state.last_error = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Five quiet bars then a high-volume breakout: one bullish order block
    /// (`ob-bull-5`, 100.5..102, anchored at t=300)
    fn breakout_history() -> Vec<Bar> {
        vec![
            Bar::new(0, 100.0, 101.0, 99.5, 100.5, 100.0),
            Bar::new(60, 100.5, 101.5, 100.0, 101.0, 100.0),
            Bar::new(120, 101.0, 102.0, 100.5, 100.8, 100.0),
            Bar::new(180, 100.8, 101.2, 100.2, 101.0, 100.0),
            Bar::new(240, 101.0, 101.4, 100.6, 101.2, 100.0),
            Bar::new(300, 101.2, 105.0, 101.0, 104.5, 200.0),
        ]
    }

    fn find<'a>(zones: &'a [Zone], id: &str) -> &'a Zone {
        zones
            .iter()
            .find(|z| z.id == id)
            .unwrap_or_else(|| panic!("missing zone {}", id))
    }

    #[test]
    fn test_initial_zones_computed_on_seed() {
        let engine = ZoneEngine::new(breakout_history());
        let zones = engine.zones();
        assert_eq!(zones.len(), 1);
        assert!(find(&zones, "ob-bull-5").is_active());
        assert_eq!(engine.state().generation, 1);
        assert!(!engine.is_calculating());
    }

    #[test]
    fn test_recalc_triggers() {
        let mut engine = ZoneEngine::new(breakout_history());

        // First live update always recomputes, even if partial
        assert!(engine.on_bar(Bar::new(360, 104.5, 106.0, 103.0, 105.0, 50.0).partial()));
        assert!(find(&engine.zones(), "ob-bull-5").is_active());

        // Further partial revisions do not
        assert!(!engine.on_bar(Bar::new(360, 104.5, 106.0, 101.5, 105.0, 80.0).partial()));
        assert!(
            find(&engine.zones(), "ob-bull-5").is_active(),
            "Published set is from before the revision"
        );
        assert_eq!(engine.bar_count(), 7, "Revision replaced the bar in place");

        // The close does
        assert!(engine.on_bar(Bar::new(360, 104.5, 106.0, 101.5, 105.0, 90.0)));
        let zones = engine.zones();
        let ob = find(&zones, "ob-bull-5");
        assert!(ob.is_mitigated);
        assert_eq!(ob.end_time, Some(360));
        assert_eq!(engine.state().generation, 3);
    }

    #[test]
    fn test_recalc_on_partial_config() {
        let config = EngineConfig {
            recalc_on_partial: true,
            ..ENGINE
        };
        let mut engine = ZoneEngine::with_config(breakout_history(), config);
        assert!(engine.on_bar(Bar::new(360, 104.5, 106.0, 103.0, 105.0, 50.0).partial()));
        assert!(engine.on_bar(Bar::new(360, 104.5, 106.0, 101.5, 105.0, 80.0).partial()));
        assert!(find(&engine.zones(), "ob-bull-5").is_mitigated);
    }

    #[test]
    fn test_capacity_bounds_the_window() {
        let config = EngineConfig {
            bar_capacity: 3,
            ..ENGINE
        };
        let mut engine = ZoneEngine::with_config(breakout_history(), config);
        assert!(engine.zones().is_empty(), "Three bars are too few for an order block");

        engine.on_bar(Bar::new(360, 104.5, 105.0, 104.0, 104.8, 50.0));
        let times: Vec<i64> = engine.bars().iter().map(|b| b.time).collect();
        assert_eq!(times, vec![240, 300, 360]);
    }

    #[test]
    fn test_worker_results_match_inline() {
        let mut engine = ZoneEngine::new(breakout_history()).spawn_worker();
        assert!(engine.on_bar(Bar::new(360, 104.5, 106.0, 103.0, 105.0, 50.0)));
        assert!(engine.on_bar(Bar::new(420, 105.0, 105.5, 101.5, 102.0, 60.0)));
        assert!(engine.wait_idle(Duration::from_secs(10)), "Worker should finish");

        assert_eq!(engine.state().generation, 3);
        assert_eq!(*engine.zones(), analysis::analyze(&engine.bars()));
        assert_eq!(find(&engine.zones(), "ob-bull-5").end_time, Some(420));
        assert!(!engine.update());
    }

    #[test]
    fn test_advisory_request_for_known_zone() {
        let engine = ZoneEngine::new(breakout_history());
        let req = engine.advisory_request("ob-bull-5").unwrap();
        assert_eq!(req.zone.id, "ob-bull-5");
        assert_eq!(req.recent_bars.len(), 6);
        assert!(engine.advisory_request("nope").is_none());
    }
}
