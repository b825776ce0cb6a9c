use crate::models::{Zone, ZoneKind};

/// Headline numbers for a zone set (status line / report footer)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneSummary {
    pub total: usize,
    pub active: usize,
    pub imbalances: usize,
    pub order_blocks: usize,
    pub sweeps: usize,
    /// The highest scoring zone that has not been mitigated yet
    pub strongest_active: Option<Zone>,
}

impl ZoneSummary {
    pub fn from_zones(zones: &[Zone]) -> Self {
        let count = |kind: ZoneKind| zones.iter().filter(|z| z.kind == kind).count();

        let strongest_active = zones
            .iter()
            .filter(|z| z.is_active())
            .max_by(|a, b| a.strength_score.total_cmp(&b.strength_score))
            .cloned();

        Self {
            total: zones.len(),
            active: zones.iter().filter(|z| z.is_active()).count(),
            imbalances: count(ZoneKind::Imbalance),
            order_blocks: count(ZoneKind::OrderBlock),
            sweeps: count(ZoneKind::LiquiditySweep),
            strongest_active,
        }
    }
}

impl std::fmt::Display for ZoneSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} zones ({} active): {} FVG, {} OB, {} sweeps",
            self.total, self.active, self.imbalances, self.order_blocks, self.sweeps
        )?;
        if let Some(z) = &self.strongest_active {
            write!(f, " | strongest active: {} {:.1}", z.id, z.strength_score)?;
        }
        Ok(())
    }
}

/// Zones price has not returned to yet
pub fn active_zones(zones: &[Zone]) -> Vec<&Zone> {
    zones.iter().filter(|z| z.is_active()).collect()
}
