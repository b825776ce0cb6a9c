use crate::config::SMC;
use crate::domain::Bar;
use crate::models::{Direction, Zone, ZoneKind};
use crate::utils::maths_utils::{mean, window_low_high};

/// Finds liquidity sweeps: a wick beyond the rolling `lookback` extreme whose close
/// reverses back inside it.
///
/// Highs and lows are checked independently, so one bar can sweep both sides.
/// Strength = relative volume * (sweep depth / bar range) * 10, capped at 10.
pub fn detect_liquidity_sweeps(bars: &[Bar]) -> Vec<Zone> {
    let cfg = &SMC.sweep;
    let mut zones = Vec::new();

    for i in cfg.lookback..bars.len() {
        let current = &bars[i];
        let window = &bars[i - cfg.lookback..i];
        let (local_low, local_high) = window_low_high(window);
        let volumes: Vec<f64> = window.iter().map(|b| b.volume).collect();
        let relative_volume = current.volume / mean(&volumes);

        // Sweep of the old high
        if current.high > local_high && current.close < local_high {
            let depth = current.high - local_high;
            zones.push(Zone::new(
                ZoneKind::LiquiditySweep,
                Direction::Bearish,
                i,
                current.high,
                local_high,
                current.time,
                sweep_strength(relative_volume, depth, current.range()),
            ));
        }

        // Sweep of the old low
        if current.low < local_low && current.close > local_low {
            let depth = local_low - current.low;
            zones.push(Zone::new(
                ZoneKind::LiquiditySweep,
                Direction::Bullish,
                i,
                local_low,
                current.low,
                current.time,
                sweep_strength(relative_volume, depth, current.range()),
            ));
        }
    }

    zones
}

fn sweep_strength(relative_volume: f64, depth: f64, bar_range: f64) -> f64 {
    let cfg = &SMC.sweep;
    let raw = relative_volume * (depth / bar_range) * cfg.depth_multiplier;
    // f64::min would turn NaN into the cap, so resolve it first
    if raw == 0.0 || raw.is_nan() {
        cfg.fallback_strength
    } else {
        raw.min(cfg.max_strength)
    }
}
