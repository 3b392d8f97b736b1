//! CSV writers for the two output datasets.
//!
//! Both outputs are written to a sibling temp file first and renamed
//! into place, so a failed run never leaves a half-written report where
//! a consumer might pick it up.

use std::fs;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::info;

use report_core::error::Result;
use report_core::models::{CustomerMonthStats, EnrichedShipment};

/// Column order of the cleaned per-shipment output.
pub const SILVER_COLUMNS: &[&str] = &[
    "shipment_id",
    "customer_id",
    "booked_date",
    "delivered_date",
    "estimated_delivery_date",
    "status",
    "delivery_duration_days",
    "delivery_delay_days",
    "is_delayed",
];

/// Column order of the monthly report output.
pub const GOLD_COLUMNS: &[&str] = &[
    "customer_id",
    "customer_name",
    "month_year",
    "total_shipments",
    "delivered_shipments",
    "on_process_shipments",
    "cancelled_shipments",
    "avg_delivery_days",
    "delayed_shipments",
    "delayed_rate",
];

/// Writes the cleaned per-shipment dataset.
pub fn write_silver(path: &Path, rows: &[EnrichedShipment]) -> Result<()> {
    write_atomic(path, SILVER_COLUMNS, rows)?;
    info!("wrote {} silver rows to {}", rows.len(), path.display());
    Ok(())
}

/// Writes the monthly per-customer report.
pub fn write_gold(path: &Path, rows: &[CustomerMonthStats]) -> Result<()> {
    write_atomic(path, GOLD_COLUMNS, rows)?;
    info!("wrote {} report rows to {}", rows.len(), path.display());
    Ok(())
}

/// Serializes rows to `path` through a temp file in the same directory.
/// The header row is written explicitly so an empty dataset still
/// produces a well-formed file.
fn write_atomic<T: serde::Serialize>(path: &Path, columns: &[&str], rows: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = tmp_path(path);
    if let Err(err) = write_rows(&tmp, columns, rows) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

fn write_rows<T: serde::Serialize>(tmp: &Path, columns: &[&str], rows: &[T]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(tmp)?;
    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
