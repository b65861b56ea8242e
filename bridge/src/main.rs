use anyhow::Result;
use clap::Parser;
use tracing::info;

use bridge::{load_scenario, run_scenario, Args};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let scenario = load_scenario(&args.scenario)?;
    info!(name = %scenario.name, tug = %scenario.tug, entries = scenario.entries.len(), "Scenario loaded");

    let report = run_scenario(&scenario, &args)?;
    info!(
        position = ?report.final_position,
        heading_deg = report.final_heading_deg,
        ticks = report.ticks,
        rejected_orders = report.rejected_orders,
        "Scenario complete"
    );
    Ok(())
}
