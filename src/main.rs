use clap::Parser;
use smc_sniper::{Cli, run_report};

fn main() -> anyhow::Result<()> {
    // A. Init Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::debug!("Parsed arguments: {:?}", args);

    // C. Run
    if let Err(e) = run_report(&args) {
        log::error!("⚠️  {:#}", e);
        return Err(e);
    }
    Ok(())
}
