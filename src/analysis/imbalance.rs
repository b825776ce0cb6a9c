use crate::config::SMC;
use crate::domain::Bar;
use crate::models::{Direction, Zone, ZoneKind};
use crate::utils::maths_utils::nonzero_or;

/// Finds Fair Value Gaps: 3-bar sequences where bar i-2 and bar i don't overlap.
///
/// The zone spans the void between them and is anchored at the middle bar's time.
/// Strength is the gap size relative to the average range of the three bars:
/// a gap equal to the average range scores 5, double that hits the cap of 10.
pub fn detect_imbalances(bars: &[Bar]) -> Vec<Zone> {
    let cfg = &SMC.imbalance;
    let mut zones = Vec::new();

    for i in 2..bars.len() {
        let prev2 = &bars[i - 2];
        let prev1 = &bars[i - 1];
        let current = &bars[i];

        let avg_range = nonzero_or(
            (prev2.range() + prev1.range() + current.range()) / 3.0,
            cfg.min_avg_range,
        );
        let strength = |gap: f64| {
            (gap / avg_range * cfg.strength_per_avg_range).clamp(cfg.min_strength, cfg.max_strength)
        };

        // The two conditions can't both hold for well-formed bars; bullish wins otherwise
        if current.low > prev2.high {
            let gap = current.low - prev2.high;
            zones.push(Zone::new(
                ZoneKind::Imbalance,
                Direction::Bullish,
                i,
                current.low,
                prev2.high,
                prev1.time,
                strength(gap),
            ));
        } else if current.high < prev2.low {
            let gap = prev2.low - current.high;
            zones.push(Zone::new(
                ZoneKind::Imbalance,
                Direction::Bearish,
                i,
                prev2.low,
                current.high,
                prev1.time,
                strength(gap),
            ));
        }
    }

    zones
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hl(time: i64, high: f64, low: f64) -> Bar {
        Bar::new(time, low, high, low, high, 100.0)
    }

    #[test]
    fn test_bullish_gap() {
        let bars = vec![hl(0, 10.0, 9.0), hl(60, 11.0, 10.0), hl(120, 15.0, 13.0)];
        let zones = detect_imbalances(&bars);

        assert_eq!(zones.len(), 1, "Should find exactly one FVG");
        let z = &zones[0];
        assert_eq!(z.id, "fvg-bull-2");
        assert_eq!(z.direction, Direction::Bullish);
        assert_eq!(z.top, 13.0);
        assert_eq!(z.bottom, 10.0);
        assert_eq!(z.equilibrium, 11.5);
        assert_eq!(z.start_time, 60, "Anchored at the middle bar");
        // gap 3 / avg range (1+1+2)/3 * 5 = 11.25 -> capped
        assert_eq!(z.strength_score, 10.0);
        assert!(!z.is_mitigated);
        assert_eq!(z.end_time, None);
    }

    #[test]
    fn test_bearish_gap_strength() {
        // avg range = (2 + 2 + 2) / 3 = 2; gap = 20 - 19.6 = 0.4 -> 0.4/2*5 = 1.0
        let bars = vec![hl(0, 22.0, 20.0), hl(60, 21.0, 19.0), hl(120, 19.6, 17.6)];
        let zones = detect_imbalances(&bars);

        assert_eq!(zones.len(), 1);
        let z = &zones[0];
        assert_eq!(z.id, "fvg-bear-2");
        assert_eq!(z.direction, Direction::Bearish);
        assert_eq!(z.top, 20.0);
        assert_eq!(z.bottom, 19.6);
        assert!((z.strength_score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_tiny_gap_floors_at_one() {
        let bars = vec![hl(0, 10.0, 0.0), hl(60, 10.0, 0.0), hl(120, 20.0, 10.01)];
        let zones = detect_imbalances(&bars);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].strength_score, 1.0);
    }

    #[test]
    fn test_zero_range_bars_do_not_divide_by_zero() {
        let bars = vec![hl(0, 10.0, 10.0), hl(60, 11.0, 11.0), hl(120, 12.0, 12.0)];
        let zones = detect_imbalances(&bars);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].strength_score, 10.0);
        assert!(zones[0].strength_score.is_finite());
    }

    #[test]
    fn test_overlapping_bars_emit_nothing() {
        // cur.low <= prev2.high and cur.high >= prev2.low at every index
        let bars: Vec<Bar> = (0..20)
            .map(|i| {
                let mid = 100.0 + (i % 3) as f64 * 0.5;
                hl(i * 60, mid + 1.0, mid - 1.0)
            })
            .collect();
        assert!(detect_imbalances(&bars).is_empty());
    }

    #[test]
    fn test_touching_bars_are_not_a_gap() {
        let bars = vec![hl(0, 10.0, 9.0), hl(60, 12.0, 10.0), hl(120, 14.0, 10.0)];
        assert!(detect_imbalances(&bars).is_empty(), "Equal levels leave no void");
    }

    #[test]
    fn test_short_input() {
        assert!(detect_imbalances(&[]).is_empty());
        assert!(detect_imbalances(&[hl(0, 1.0, 0.5), hl(60, 3.0, 2.0)]).is_empty());
    }
}
