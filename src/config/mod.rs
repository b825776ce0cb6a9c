//! Configuration module for the zone detection engine.

pub mod analysis;
pub mod engine;

mod debug; // Private: use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use analysis::{ImbalanceSettings, OrderBlockSettings, SMC, SmcConfig, SweepSettings};
pub use engine::{ENGINE, EngineConfig};
