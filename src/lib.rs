#![allow(clippy::collapsible_if)]

// Core modules
pub mod advisory;
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use analysis::{ZoneSummary, analyze, detect, mitigate};
pub use domain::{Bar, BarStore};
pub use engine::ZoneEngine;
pub use models::{Direction, Zone, ZoneKind};

use std::path::PathBuf;

use anyhow::{Context, Result};
// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file with an array of bars (objects or Binance kline rows)
    #[arg(long)]
    pub bars: PathBuf,

    /// Only list zones price has not returned to yet
    #[arg(long, default_value_t = false)]
    pub active_only: bool,

    /// Print zones as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Hide zones scoring below this strength
    #[arg(long)]
    pub min_strength: Option<f64>,
}

/// Load bars, run the full zone pass and print the result.
/// This is the public API for the binary to call
pub fn run_report(args: &Cli) -> Result<()> {
    let bars = data::load_bars(&args.bars)?;
    let zones = analyze(&bars);
    let summary = ZoneSummary::from_zones(&zones);
    log::info!("{}", summary);

    let shown: Vec<&Zone> = zones
        .iter()
        .filter(|z| !args.active_only || z.is_active())
        .filter(|z| args.min_strength.is_none_or(|min| z.strength_score >= min))
        .collect();

    if args.json {
        let text = serde_json::to_string_pretty(&shown).context("Failed to serialize zones")?;
        println!("{}", text);
    } else {
        print!("{}", report::render_table(shown));
        println!("{}", summary);
    }
    Ok(())
}
