//! Boundary with the external advisory service that narrates a zone.
//!
//! The engine never depends on a verdict; this module only shapes the request,
//! parses the reply and supplies the fallback used when the service fails.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::Display;

use crate::config::ENGINE;
use crate::domain::Bar;
use crate::models::Zone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// The advisory service's judgement on one zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryVerdict {
    /// 0.0 ..= 1.0
    #[serde(deserialize_with = "unit_interval")]
    pub score: f64,
    pub reasoning: String,
    pub confidence: Confidence,
    /// Actionable advice for the trader
    pub suggestion: String,
}

fn unit_interval<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let score = f64::deserialize(deserializer)?;
    Ok(if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) })
}

impl AdvisoryVerdict {
    /// Baseline verdict when the service can't be reached or replies with garbage
    pub fn fallback() -> Self {
        Self {
            score: 0.5,
            reasoning: "Advisory unavailable. Defaulting to baseline structure analysis.".to_string(),
            confidence: Confidence::Low,
            suggestion: "Wait for order flow confirmation.".to_string(),
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse advisory verdict")
    }
}

/// One zone plus the recent price action it is judged against
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryRequest {
    pub zone: Zone,
    pub recent_bars: Vec<Bar>,
}

impl AdvisoryRequest {
    pub fn new(zone: &Zone, bars: &[Bar]) -> Self {
        Self::with_context(zone, bars, ENGINE.advisory_context_bars)
    }

    /// Keeps only the last `context_bars` bars
    pub fn with_context(zone: &Zone, bars: &[Bar], context_bars: usize) -> Self {
        let start = bars.len().saturating_sub(context_bars);
        Self {
            zone: zone.clone(),
            recent_bars: bars[start..].to_vec(),
        }
    }

    /// JSON body for the service
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize advisory request")
    }
}

#[async_trait]
pub trait ZoneAdvisor: Send + Sync {
    async fn validate(&self, request: &AdvisoryRequest) -> Result<AdvisoryVerdict>;

    /// A unique identifier for this implementation (for logs).
    fn signature(&self) -> &'static str;
}

/// Ask the advisor, falling back to the baseline verdict on any error.
pub async fn validate_or_fallback(
    advisor: &dyn ZoneAdvisor,
    request: &AdvisoryRequest,
) -> AdvisoryVerdict {
    match advisor.validate(request).await {
        Ok(verdict) => verdict,
        Err(e) => {
            log::warn!(
                "Advisory {} failed for {}: {:#}",
                advisor.signature(),
                request.zone.id,
                e
            );
            AdvisoryVerdict::fallback()
        }
    }
}
