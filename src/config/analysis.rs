//! Detector thresholds and scoring constants.
//!
//! The fallback strengths and the volume surge multiplier are empirical
//! heuristics. They are kept as named constants so they can be tuned without
//! touching the detectors.

/// Settings for the Fair Value Gap (imbalance) detector
#[derive(Debug, Clone, Copy)]
pub struct ImbalanceSettings {
    // Substituted for a zero average bar range to avoid dividing by zero
    pub min_avg_range: f64,
    // A gap equal to the average bar range scores this much (double size hits the cap)
    pub strength_per_avg_range: f64,
    pub min_strength: f64,
    pub max_strength: f64,
}

/// Settings for the order block detector
#[derive(Debug, Clone, Copy)]
pub struct OrderBlockSettings {
    // Bars before the breakout bar used for the recent high/low
    pub lookback: usize,
    // How far back (from the bar before the breakout) to search for the base bar
    pub base_search_depth: usize,
    // Breakout volume must exceed the previous bar's volume times this
    pub volume_surge: f64,
    pub expansion_multiplier: f64,
    pub max_strength: f64,
    // Used when the computed strength is not positive (e.g. zero-range base bar)
    pub fallback_strength: f64,
}

/// Settings for the liquidity sweep detector
#[derive(Debug, Clone, Copy)]
pub struct SweepSettings {
    pub lookback: usize,
    pub depth_multiplier: f64,
    pub max_strength: f64,
    // Used when the computed strength is zero or undefined
    pub fallback_strength: f64,
}

/// The Master Detection Configuration
#[derive(Debug, Clone, Copy)]
pub struct SmcConfig {
    pub imbalance: ImbalanceSettings,
    pub order_block: OrderBlockSettings,
    pub sweep: SweepSettings,
}

pub const SMC: SmcConfig = SmcConfig {
    imbalance: ImbalanceSettings {
        min_avg_range: 0.000_001,
        strength_per_avg_range: 5.0,
        min_strength: 1.0,
        max_strength: 10.0,
    },

    order_block: OrderBlockSettings {
        lookback: 5,
        base_search_depth: 4,
        volume_surge: 1.3,
        expansion_multiplier: 2.0,
        max_strength: 10.0,
        fallback_strength: 5.0,
    },

    sweep: SweepSettings {
        lookback: 30,
        depth_multiplier: 10.0,
        max_strength: 10.0,
        fallback_strength: 7.0,
    },
};
