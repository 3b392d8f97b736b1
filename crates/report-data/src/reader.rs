//! CSV readers for the two raw input files.
//!
//! Reading is strict about structure and lenient about values: an
//! unreadable file or a missing required column aborts the run, while
//! malformed cell values pass through untouched for the cleaning stage
//! to judge.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use report_core::error::{ReportError, Result};
use report_core::models::{Customer, RawShipment};

// ── Public API ────────────────────────────────────────────────────────────────

/// Columns the shipments file must provide.
pub const REQUIRED_SHIPMENT_COLUMNS: &[&str] = &[
    "shipment_id",
    "customer_id",
    "booked_date",
    "delivered_date",
    "estimated_delivery_date",
    "status",
];

/// Columns the customers file must provide.
pub const REQUIRED_CUSTOMER_COLUMNS: &[&str] = &["customer_id", "customer_name"];

/// Reads the raw shipments extract, keeping every cell as text.
pub fn read_shipments(path: &Path) -> Result<Vec<RawShipment>> {
    let mut reader = open_csv(path)?;
    ensure_columns(&mut reader, path, REQUIRED_SHIPMENT_COLUMNS)?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: RawShipment = record?;
        rows.push(row);
    }

    info!("read {} shipment rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Reads the customer reference file.
pub fn read_customers(path: &Path) -> Result<Vec<Customer>> {
    let mut reader = open_csv(path)?;
    ensure_columns(&mut reader, path, REQUIRED_CUSTOMER_COLUMNS)?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: Customer = record?;
        rows.push(row);
    }

    info!("read {} customer rows from {}", rows.len(), path.display());
    Ok(rows)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn open_csv(path: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|source| ReportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ReaderBuilder::new().from_reader(file))
}

/// Fails with the full list of absent columns, not just the first, so a
/// bad extract can be fixed in one pass.
fn ensure_columns(
    reader: &mut csv::Reader<File>,
    path: &Path,
    required: &[&str],
) -> Result<()> {
    let headers = reader.headers()?;
    let missing: Vec<String> = required
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ReportError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
