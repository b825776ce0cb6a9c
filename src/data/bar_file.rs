use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::Bar;

/// One entry of a bar file: either a bar object or a Binance REST kline row
/// (`[openTimeMs, "open", "high", "low", "close", "volume", closeTimeMs, ...]`).
#[derive(Deserialize)]
#[serde(untagged)]
enum BarRecord {
    Object(Bar),
    Kline(Vec<Value>),
}

fn kline_field(row: &[Value], idx: usize) -> Result<f64> {
    let value = row
        .get(idx)
        .ok_or_else(|| anyhow!("Kline row has no field {}", idx))?;
    match value {
        Value::String(s) => s
            .parse::<f64>()
            .with_context(|| format!("Kline field {} is not a number: {:?}", idx, s)),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| anyhow!("Kline field {} out of range", idx)),
        other => bail!("Kline field {} has unexpected type: {}", idx, other),
    }
}

impl BarRecord {
    fn into_bar(self) -> Result<Bar> {
        match self {
            BarRecord::Object(bar) => Ok(bar),
            BarRecord::Kline(row) => {
                let open_time_ms = row
                    .first()
                    .and_then(Value::as_i64)
                    .ok_or_else(|| anyhow!("Kline row has no integer open time"))?;
                Ok(Bar::new(
                    open_time_ms / 1000,
                    kline_field(&row, 1)?,
                    kline_field(&row, 2)?,
                    kline_field(&row, 3)?,
                    kline_field(&row, 4)?,
                    kline_field(&row, 5)?,
                ))
            }
        }
    }
}

/// Parse a JSON array of bars, returned sorted by time with duplicate times
/// collapsed to the last occurrence.
pub fn parse_bars(json: &str) -> Result<Vec<Bar>> {
    let records: Vec<BarRecord> =
        serde_json::from_str(json).context("Bar file must be a JSON array of bars")?;

    let mut bars = records
        .into_iter()
        .enumerate()
        .map(|(i, r)| r.into_bar().with_context(|| format!("Bad bar at position {}", i)))
        .collect::<Result<Vec<Bar>>>()?;

    // Stable sort keeps file order among equal times, so the last one wins below
    bars.sort_by_key(|b| b.time);
    let mut deduped: Vec<Bar> = Vec::with_capacity(bars.len());
    for bar in bars {
        match deduped.last_mut() {
            Some(last) if last.time == bar.time => *last = bar,
            _ => deduped.push(bar),
        }
    }
    Ok(deduped)
}

pub fn load_bars(path: &Path) -> Result<Vec<Bar>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read bar file {:?}", path))?;
    let bars = parse_bars(&text).with_context(|| format!("Failed to parse {:?}", path))?;
    log::info!("Loaded {} bars from {:?}", bars.len(), path);
    Ok(bars)
}
