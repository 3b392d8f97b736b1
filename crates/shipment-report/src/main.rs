mod bootstrap;

use anyhow::Result;
use clap::Parser;
use report_core::settings::Settings;
use report_data::pipeline::run_pipeline;
use report_data::profile::profile_shipments;
use report_data::reader::{read_customers, read_shipments};
use report_data::writer::{write_gold, write_silver};

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("shipment-report v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "inputs: {} and {}",
        settings.shipments.display(),
        settings.customers.display()
    );

    // Both inputs must load before any transformation starts; a structural
    // problem in either file aborts the run with nothing written.
    let shipments = read_shipments(&settings.shipments)?;
    let customers = read_customers(&settings.customers)?;

    profile_shipments(&shipments).log_summary();

    let result = run_pipeline(shipments, customers);

    write_silver(&settings.silver_out, &result.silver)?;
    write_gold(&settings.gold_out, &result.gold)?;

    let meta = &result.metadata;
    tracing::info!(
        "run complete: {} silver rows, {} report groups (silver {:?}, gold {:?})",
        meta.silver_rows,
        meta.gold_groups,
        meta.silver_duration,
        meta.gold_duration
    );

    Ok(())
}
