use std::sync::Arc;

use crate::domain::Bar;
use crate::models::Zone;

/// A request to recompute zones over a bar window
#[derive(Debug, Clone)]
pub struct JobRequest {
    /// Monotonic request counter; results older than the applied one are dropped
    pub generation: u64,
    // Owned snapshot so the store can keep mutating while the worker runs
    pub bars: Vec<Bar>,
}

/// The result returned by the worker
#[derive(Debug, Clone)]
pub struct JobResult {
    pub generation: u64,
    pub bar_count: usize,
    pub duration_ms: u128,

    // Success: The new Front Buffer
    // Failure: The error string
    pub result: Result<Arc<Vec<Zone>>, String>,
}
