//! Pre-clean diagnostics over the raw shipment extract.
//!
//! Profiling is read-only operator visibility: it reports duplicate and
//! invalid-date ratios before cleaning runs, and never alters what the
//! pipeline produces.

use std::collections::HashSet;

use tracing::{info, warn};

use report_core::dates::parse_mixed_date;
use report_core::models::RawShipment;

/// Missing and unparseable tallies for one raw date column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateColumnProfile {
    /// Cells that are empty after trimming.
    pub missing: usize,
    /// Non-empty cells no known date format accepts.
    pub unparseable: usize,
}

impl DateColumnProfile {
    fn observe(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.missing += 1;
        } else if parse_mixed_date(trimmed).is_none() {
            self.unparseable += 1;
        }
    }
}

/// Diagnostic summary of the raw shipment extract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipmentProfile {
    pub row_count: usize,
    /// Rows that are an exact copy of an earlier row.
    pub duplicate_rows: usize,
    /// Rows where both endpoints parse and delivery precedes booking.
    pub invalid_order_rows: usize,
    pub booked: DateColumnProfile,
    pub delivered: DateColumnProfile,
    pub estimated: DateColumnProfile,
}

impl ShipmentProfile {
    /// Duplicate rows as a percentage of all rows.
    pub fn duplicate_percent(&self) -> f64 {
        percent(self.duplicate_rows, self.row_count)
    }

    /// Invalid-order rows as a percentage of all rows.
    pub fn invalid_order_percent(&self) -> f64 {
        percent(self.invalid_order_rows, self.row_count)
    }

    /// Writes the profile to the log at the level operators watch.
    pub fn log_summary(&self) {
        info!(
            "profiled {} raw shipment rows: {:.2}% duplicates, {:.2}% with delivery before booking",
            self.row_count,
            self.duplicate_percent(),
            self.invalid_order_percent()
        );
        info!(
            "missing date cells: booked {}, delivered {}, estimated {}",
            self.booked.missing, self.delivered.missing, self.estimated.missing
        );
        let unparseable =
            self.booked.unparseable + self.delivered.unparseable + self.estimated.unparseable;
        if unparseable > 0 {
            warn!(
                "{} date cells match no known format (booked {}, delivered {}, estimated {})",
                unparseable,
                self.booked.unparseable,
                self.delivered.unparseable,
                self.estimated.unparseable
            );
        }
    }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Profiles the raw extract in a single pass.
pub fn profile_shipments(rows: &[RawShipment]) -> ShipmentProfile {
    let mut profile = ShipmentProfile {
        row_count: rows.len(),
        ..ShipmentProfile::default()
    };

    let mut seen: HashSet<&RawShipment> = HashSet::with_capacity(rows.len());
    for row in rows {
        if !seen.insert(row) {
            profile.duplicate_rows += 1;
        }

        profile.booked.observe(&row.booked_date);
        profile.delivered.observe(&row.delivered_date);
        profile.estimated.observe(&row.estimated_delivery_date);

        if let (Some(delivered), Some(booked)) = (
            parse_mixed_date(&row.delivered_date),
            parse_mixed_date(&row.booked_date),
        ) {
            if delivered < booked {
                profile.invalid_order_rows += 1;
            }
        }
    }

    profile
}
