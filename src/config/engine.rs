//! Live engine configuration

/// Settings for the bar store and the recompute triggers
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    // Most recent bars kept in the store (older ones are dropped from the front)
    pub bar_capacity: usize,
    // Recompute on in-progress bar revisions too, not only on closed bars
    pub recalc_on_partial: bool,
    // Recent bars handed to the advisory service alongside a zone
    pub advisory_context_bars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        ENGINE
    }
}

pub const ENGINE: EngineConfig = EngineConfig {
    bar_capacity: 500,
    recalc_on_partial: false,
    advisory_context_bars: 100,
};
