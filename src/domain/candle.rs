use serde::{Deserialize, Serialize};

/// One OHLCV period. `time` is the period open in seconds since epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,

    /// False while the period is still in progress (feed revisions)
    #[serde(default = "closed_by_default")]
    pub is_final: bool,
}

fn closed_by_default() -> bool {
    true
}

impl Bar {
    // A constructor for convenience (closed bar)
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Bar {
            time,
            open,
            high,
            low,
            close,
            volume,
            is_final: true,
        }
    }

    /// Same bar, flagged as an in-progress revision
    pub fn partial(self) -> Self {
        Bar {
            is_final: false,
            ..self
        }
    }

    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Strictly closed below its open. A doji is neither up nor down.
    pub fn is_down(&self) -> bool {
        self.close < self.open
    }

    /// Strictly closed above its open.
    pub fn is_up(&self) -> bool {
        self.close > self.open
    }
}
