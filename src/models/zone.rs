use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Which detector produced a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum ZoneKind {
    #[serde(rename = "FVG")]
    #[strum(serialize = "FVG")]
    Imbalance,
    #[serde(rename = "Order Block")]
    #[strum(serialize = "Order Block")]
    OrderBlock,
    #[serde(rename = "Liquidity Sweep")]
    #[strum(serialize = "Liquidity Sweep")]
    LiquiditySweep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Direction {
    Bullish,
    Bearish,
}

impl ZoneKind {
    /// Prefix of the zone id, e.g. `fvg-bull` or `sweep-high`
    fn id_prefix(&self, direction: Direction) -> &'static str {
        match (self, direction) {
            (ZoneKind::Imbalance, Direction::Bullish) => "fvg-bull",
            (ZoneKind::Imbalance, Direction::Bearish) => "fvg-bear",
            (ZoneKind::OrderBlock, Direction::Bullish) => "ob-bull",
            (ZoneKind::OrderBlock, Direction::Bearish) => "ob-bear",
            // A bullish sweep takes out the lows, a bearish one the highs
            (ZoneKind::LiquiditySweep, Direction::Bullish) => "sweep-low",
            (ZoneKind::LiquiditySweep, Direction::Bearish) => "sweep-high",
        }
    }
}

/// A detected smart-money zone.
/// `top`/`bottom` are fixed at creation; only the mitigation fields ever change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ZoneKind,
    pub direction: Direction,
    pub top: f64,
    pub bottom: f64,
    /// Midpoint of the zone (the 50% level)
    pub equilibrium: f64,
    pub start_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    pub strength_score: f64,
    #[serde(default)]
    pub is_mitigated: bool,
}

impl Zone {
    /// `index` is the bar index the detector fired on; it only feeds the id.
    pub fn new(
        kind: ZoneKind,
        direction: Direction,
        index: usize,
        top: f64,
        bottom: f64,
        start_time: i64,
        strength_score: f64,
    ) -> Self {
        Self {
            id: format!("{}-{}", kind.id_prefix(direction), index),
            kind,
            direction,
            top,
            bottom,
            equilibrium: (top + bottom) / 2.0,
            start_time,
            end_time: None,
            strength_score,
            is_mitigated: false,
        }
    }

    /// Not yet revisited by price
    pub fn is_active(&self) -> bool {
        !self.is_mitigated
    }
}
