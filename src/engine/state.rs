use std::sync::Arc;
use std::time::Instant;

use crate::models::Zone;

/// The published zone set plus bookkeeping for the recompute loop.
#[derive(Debug, Clone)]
pub struct ZoneState {
    /// THE FRONT BUFFER.
    /// Readers clone this Arc; a new result replaces the pointer.
    pub zones: Arc<Vec<Zone>>,

    /// Generation of the request that produced `zones`
    pub generation: u64,
    pub last_update_time: Instant,

    /// Is a worker currently crunching a request?
    pub is_calculating: bool,

    /// Last error (if any)
    pub last_error: Option<String>,
}

impl ZoneState {
    pub fn new() -> Self {
        Self {
            zones: Arc::new(Vec::new()),
            generation: 0,
            last_update_time: Instant::now(),
            is_calculating: false,
            last_error: None,
        }
    }

    /// Promotes a finished result to the front buffer.
    /// Returns false (and keeps the current buffer) if the result is stale.
    pub fn update_buffer(&mut self, generation: u64, zones: Arc<Vec<Zone>>) -> bool {
        if generation < self.generation {
            return false;
        }
        self.zones = zones;
        self.generation = generation;
        self.last_update_time = Instant::now();
        self.last_error = None;
        true
    }
}

impl Default for ZoneState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_results_are_ignored() {
        let mut state = ZoneState::new();
        assert!(state.update_buffer(2, Arc::new(Vec::new())));
        assert!(!state.update_buffer(1, Arc::new(Vec::new())));
        assert_eq!(state.generation, 2);
    }
}
