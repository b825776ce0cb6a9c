use crate::config::SMC;
use crate::domain::Bar;
use crate::models::{Direction, Zone, ZoneKind};
use crate::utils::maths_utils::window_low_high;

/// Finds order blocks: the last opposite-coloured bar before a high-volume breakout
/// of the previous `lookback` bars' high (bullish) or low (bearish).
///
/// A breakout always emits a zone. If no opposite bar is found within
/// `base_search_depth` bars, the bar immediately before the breakout is the base.
pub fn detect_order_blocks(bars: &[Bar]) -> Vec<Zone> {
    let cfg = &SMC.order_block;
    let mut zones = Vec::new();

    for i in cfg.lookback..bars.len() {
        let current = &bars[i];
        let prev = &bars[i - 1];
        let (recent_low, recent_high) = window_low_high(&bars[i - cfg.lookback..i]);

        if current.volume <= prev.volume * cfg.volume_surge {
            continue;
        }

        if current.close > recent_high {
            let base = find_base(bars, i, Bar::is_down);
            let expansion = current.close - base.high;
            zones.push(Zone::new(
                ZoneKind::OrderBlock,
                Direction::Bullish,
                i,
                base.high,
                base.low,
                current.time,
                block_strength(expansion, base.range()),
            ));
        } else if current.close < recent_low {
            let base = find_base(bars, i, Bar::is_up);
            let expansion = base.low - current.close;
            zones.push(Zone::new(
                ZoneKind::OrderBlock,
                Direction::Bearish,
                i,
                base.high,
                base.low,
                current.time,
                block_strength(expansion, base.range()),
            ));
        }
    }

    zones
}

/// Nearest bar matching `is_opposite`, scanning from `breakout - 1` back `base_search_depth` bars.
fn find_base<'a>(bars: &'a [Bar], breakout: usize, is_opposite: fn(&Bar) -> bool) -> &'a Bar {
    let depth = SMC.order_block.base_search_depth.min(breakout);
    (breakout - depth..breakout)
        .rev()
        .map(|j| &bars[j])
        .find(|bar| is_opposite(bar))
        .unwrap_or(&bars[breakout - 1])
}

/// Expansion measured in base-bar ranges. Non-positive or undefined results fall back.
fn block_strength(expansion: f64, base_range: f64) -> f64 {
    let cfg = &SMC.order_block;
    let raw = expansion / base_range * cfg.expansion_multiplier;
    if raw > 0.0 {
        raw.min(cfg.max_strength)
    } else {
        cfg.fallback_strength
    }
}
