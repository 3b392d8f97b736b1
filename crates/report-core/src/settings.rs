use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Command-line settings for the reporting pipeline.
///
/// Every flag has a default matching the conventional warehouse layout,
/// so running the binary with no arguments processes `Raw Data/` into
/// `Output Data/` in place.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "shipment-report",
    about = "Builds the cleaned shipment dataset and the monthly per-customer performance report",
    version
)]
pub struct Settings {
    /// Raw shipments CSV to process
    #[arg(long, default_value = "Raw Data/shipments_raw.csv")]
    pub shipments: PathBuf,

    /// Customer reference CSV
    #[arg(long, default_value = "Raw Data/customers_raw.csv")]
    pub customers: PathBuf,

    /// Output path for the cleaned per-shipment dataset
    #[arg(long, default_value = "Output Data/shipment_transformed.csv")]
    pub silver_out: PathBuf,

    /// Output path for the monthly per-customer report
    #[arg(long, default_value = "Output Data/shipment_performance.csv")]
    pub gold_out: PathBuf,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,
}
