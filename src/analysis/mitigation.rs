use rayon::prelude::*;

use crate::domain::Bar;
use crate::models::{Direction, Zone};

/// Marks each zone mitigated at the first bar strictly after its `start_time` that
/// trades back into it: `low <= top` for bullish zones, `high >= bottom` for bearish.
///
/// Zones that are already mitigated pass through untouched, so re-running over a
/// longer bar window can add mitigations but never remove or move one.
pub fn mitigate(bars: &[Bar], zones: Vec<Zone>) -> Vec<Zone> {
    zones
        .into_par_iter()
        .map(|zone| mitigate_zone(bars, zone))
        .collect()
}

fn mitigate_zone(bars: &[Bar], mut zone: Zone) -> Zone {
    if zone.is_mitigated {
        return zone;
    }

    let first_touch = bars
        .iter()
        .filter(|bar| bar.time > zone.start_time)
        .find(|bar| match zone.direction {
            Direction::Bullish => bar.low <= zone.top,
            Direction::Bearish => bar.high >= zone.bottom,
        });

    if let Some(bar) = first_touch {
        zone.is_mitigated = true;
        zone.end_time = Some(bar.time);
    }
    zone
}
