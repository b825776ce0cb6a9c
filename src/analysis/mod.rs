// Zone detectors, mitigation and the combined pass
pub mod imbalance;
pub mod liquidity_sweep;
pub mod mitigation;
pub mod order_block;
pub mod zone_analysis;
pub mod zone_summary;

// Re-export commonly used items
pub use imbalance::detect_imbalances;
pub use liquidity_sweep::detect_liquidity_sweeps;
pub use mitigation::mitigate;
pub use order_block::detect_order_blocks;
pub use zone_analysis::{analyze, detect};
pub use zone_summary::{ZoneSummary, active_zones};
