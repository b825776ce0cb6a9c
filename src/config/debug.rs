//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

pub struct DebugFlags {
    /// Emit per-detector zone counts after every detection pass.
    pub print_detector_counts: bool,
    /// Emit a line whenever the engine swaps in a freshly computed zone set.
    pub print_engine_swaps: bool,
    /// Emit worker thread job start/finish timings.
    pub print_worker_jobs: bool,
    /// Emit bar store revisions of the in-progress bar.
    pub print_bar_revisions: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_detector_counts: false,
    print_engine_swaps: false,
    print_worker_jobs: false,
    print_bar_revisions: false,
};
