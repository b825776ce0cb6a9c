use crate::domain::Bar;
use crate::models::Zone;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

use super::imbalance::detect_imbalances;
use super::liquidity_sweep::detect_liquidity_sweeps;
use super::mitigation::mitigate;
use super::order_block::detect_order_blocks;

/// Runs the three detectors over the same bars and concatenates their output
/// (imbalances, then order blocks, then sweeps). Zones come back unmitigated.
///
/// The detectors share nothing but the borrowed slice, so they run in parallel.
pub fn detect(bars: &[Bar]) -> Vec<Zone> {
    let (imbalances, (order_blocks, sweeps)) = rayon::join(
        || detect_imbalances(bars),
        || rayon::join(|| detect_order_blocks(bars), || detect_liquidity_sweeps(bars)),
    );

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_detector_counts {
        log::debug!(
            "detect: {} bars -> {} FVG, {} OB, {} sweeps",
            bars.len(),
            imbalances.len(),
            order_blocks.len(),
            sweeps.len()
        );
    }

    let mut zones = imbalances;
    zones.reserve(order_blocks.len() + sweeps.len());
    zones.extend(order_blocks);
    zones.extend(sweeps);
    zones
}

/// Full pass: detect, then mark mitigations against the same bars.
pub fn analyze(bars: &[Bar]) -> Vec<Zone> {
    mitigate(bars, detect(bars))
}
