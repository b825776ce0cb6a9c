use std::fmt::Write;

use crate::models::Zone;
use crate::utils::time_utils::epoch_sec_to_utc;

/// Fixed-width table of zones, one per line, with a header
pub fn render_table<'a>(zones: impl IntoIterator<Item = &'a Zone>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<16} {:<16} {:<8} {:>12} {:>12} {:>12} {:>6}  {:<16}  {:<16}",
        "ID", "TYPE", "DIR", "BOTTOM", "TOP", "EQ", "STR", "START (UTC)", "MITIGATED"
    );
    for z in zones {
        let mitigated = z.end_time.map(epoch_sec_to_utc).unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<16} {:<16} {:<8} {:>12.5} {:>12.5} {:>12.5} {:>6.2}  {:<16}  {:<16}",
            z.id,
            z.kind.to_string(),
            z.direction.to_string(),
            z.bottom,
            z.top,
            z.equilibrium,
            z.strength_score,
            epoch_sec_to_utc(z.start_time),
            mitigated
        );
    }
    out
}
