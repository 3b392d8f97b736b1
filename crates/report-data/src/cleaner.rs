//! Stage-one cleaning: deduplication, date parsing, the date-validity
//! filter, and status normalization.
//!
//! Row-level anomalies never abort the run. Every dropped row is counted
//! in [`CleanStats`] so the log can say exactly where the data went.

use std::collections::HashSet;

use tracing::{debug, info};

use report_core::dates::parse_mixed_date;
use report_core::models::{normalize_status, RawShipment, Shipment};

/// Row-level tallies from one cleaning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    pub input_rows: usize,
    /// Exact copies of an earlier row, discarded before anything else.
    pub duplicate_rows: usize,
    /// Rows dropped because a required date was missing or matched no
    /// known format.
    pub unusable_date_rows: usize,
    /// Rows dropped because delivery preceded booking.
    pub invalid_order_rows: usize,
    pub output_rows: usize,
}

/// Removes exact duplicates, keeping the first occurrence of each row.
/// Rows are compared on all fields as raw text. Idempotent.
pub fn dedup_shipments(rows: Vec<RawShipment>) -> Vec<RawShipment> {
    let mut seen: HashSet<RawShipment> = HashSet::with_capacity(rows.len());
    rows.into_iter().filter(|row| seen.insert(row.clone())).collect()
}

/// Runs the full cleaning pass over the raw extract.
///
/// Order matters: duplicates go first so a duplicated corrupt row counts
/// once, then dates are parsed, rows without three usable dates or with
/// delivery before booking are dropped, and finally the status text is
/// canonicalized. Survivors carry the invariant that the delivered date
/// is never earlier than the booked date.
pub fn clean_shipments(rows: Vec<RawShipment>) -> (Vec<Shipment>, CleanStats) {
    let mut stats = CleanStats {
        input_rows: rows.len(),
        ..CleanStats::default()
    };

    let deduped = dedup_shipments(rows);
    stats.duplicate_rows = stats.input_rows - deduped.len();

    let mut cleaned = Vec::with_capacity(deduped.len());
    for row in deduped {
        let parsed = (
            parse_mixed_date(&row.booked_date),
            parse_mixed_date(&row.delivered_date),
            parse_mixed_date(&row.estimated_delivery_date),
        );
        let (booked, delivered, estimated) = match parsed {
            (Some(booked), Some(delivered), Some(estimated)) => (booked, delivered, estimated),
            _ => {
                stats.unusable_date_rows += 1;
                debug!(
                    "dropping shipment {}: missing or unparseable date",
                    row.shipment_id
                );
                continue;
            }
        };

        if delivered < booked {
            stats.invalid_order_rows += 1;
            debug!(
                "dropping shipment {}: delivered {} precedes booked {}",
                row.shipment_id, delivered, booked
            );
            continue;
        }

        cleaned.push(Shipment {
            shipment_id: row.shipment_id,
            customer_id: row.customer_id,
            booked_date: booked,
            delivered_date: delivered,
            estimated_delivery_date: estimated,
            status: normalize_status(&row.status),
        });
    }

    stats.output_rows = cleaned.len();
    info!(
        "cleaned shipments: {} in, {} out ({} duplicates, {} unusable dates, {} delivered before booked)",
        stats.input_rows,
        stats.output_rows,
        stats.duplicate_rows,
        stats.unusable_date_rows,
        stats.invalid_order_rows
    );

    (cleaned, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn raw(id: &str, booked: &str, delivered: &str, estimated: &str, status: &str) -> RawShipment {
        RawShipment {
            shipment_id: id.to_string(),
            customer_id: "C1".to_string(),
            booked_date: booked.to_string(),
            delivered_date: delivered.to_string(),
            estimated_delivery_date: estimated.to_string(),
            status: status.to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_exact_duplicates_collapse_to_first() {
        let rows = vec![
            raw("S1", "2024-03-01", "2024-03-05", "2024-03-04", "delivered"),
            raw("S1", "2024-03-01", "2024-03-05", "2024-03-04", "delivered"),
            raw("S2", "2024-03-02", "2024-03-06", "2024-03-05", "pending"),
        ];

        let (cleaned, stats) = clean_shipments(rows);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(stats.duplicate_rows, 1);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let rows = vec![
            raw("S1", "2024-03-01", "2024-03-05", "2024-03-04", "delivered"),
            raw("S1", "2024-03-01", "2024-03-05", "2024-03-04", "delivered"),
            raw("S2", "2024-03-02", "2024-03-06", "2024-03-05", "pending"),
        ];

        let once = dedup_shipments(rows);
        let twice = dedup_shipments(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_near_duplicates_survive() {
        // One field differs, so both rows are kept.
        let rows = vec![
            raw("S1", "2024-03-01", "2024-03-05", "2024-03-04", "delivered"),
            raw("S1", "2024-03-01", "2024-03-05", "2024-03-04", "Delivered"),
        ];

        let (cleaned, stats) = clean_shipments(rows);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(stats.duplicate_rows, 0);
    }

    #[test]
    fn test_delivered_before_booked_is_dropped() {
        let rows = vec![
            raw("S1", "2024-03-10", "2024-03-05", "2024-03-12", "delivered"),
            raw("S2", "2024-03-02", "2024-03-06", "2024-03-05", "delivered"),
        ];

        let (cleaned, stats) = clean_shipments(rows);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].shipment_id, "S2");
        assert_eq!(stats.invalid_order_rows, 1);
    }

    #[test]
    fn test_same_day_delivery_survives() {
        let rows = vec![raw(
            "S1",
            "2024-03-05",
            "2024-03-05",
            "2024-03-05",
            "delivered",
        )];

        let (cleaned, _) = clean_shipments(rows);
        assert_eq!(cleaned.len(), 1);
    }

    #[test]
    fn test_rows_without_usable_dates_are_dropped() {
        let rows = vec![
            raw("S1", "", "2024-03-05", "2024-03-04", "delivered"),
            raw("S2", "2024-03-01", "soon", "2024-03-04", "in-transit"),
            raw("S3", "2024-03-01", "2024-03-05", "", "delivered"),
            raw("S4", "2024-03-01", "2024-03-05", "2024-03-04", "delivered"),
        ];

        let (cleaned, stats) = clean_shipments(rows);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].shipment_id, "S4");
        assert_eq!(stats.unusable_date_rows, 3);
    }

    #[test]
    fn test_status_is_normalized() {
        let rows = vec![
            raw("S1", "2024-03-01", "2024-03-05", "2024-03-04", "in-transit"),
            raw("S2", "2024-03-01", "2024-03-05", "2024-03-04", "DELIVERED"),
        ];

        let (cleaned, _) = clean_shipments(rows);
        assert_eq!(cleaned[0].status, "In Transit");
        assert_eq!(cleaned[1].status, "Delivered");
    }

    #[test]
    fn test_mixed_date_formats_in_one_extract() {
        let rows = vec![
            raw("S1", "2024-03-01", "03/05/2024", "March 4, 2024", "delivered"),
            raw("S2", "2024/03/02", "2024-03-06 08:00:00", "2024-03-05", "pending"),
        ];

        let (cleaned, stats) = clean_shipments(rows);
        assert_eq!(stats.output_rows, 2);
        assert_eq!(cleaned[0].booked_date, date(2024, 3, 1));
        assert_eq!(cleaned[0].delivered_date, date(2024, 3, 5));
        assert_eq!(cleaned[0].estimated_delivery_date, date(2024, 3, 4));
        assert_eq!(cleaned[1].delivered_date, date(2024, 3, 6));
    }

    #[test]
    fn test_stats_account_for_every_row() {
        let rows = vec![
            raw("S1", "2024-03-01", "2024-03-05", "2024-03-04", "delivered"),
            raw("S1", "2024-03-01", "2024-03-05", "2024-03-04", "delivered"),
            raw("S2", "2024-03-10", "2024-03-05", "2024-03-12", "delivered"),
            raw("S3", "", "", "", "pending"),
        ];

        let (_, stats) = clean_shipments(rows);
        assert_eq!(
            stats.input_rows,
            stats.output_rows
                + stats.duplicate_rows
                + stats.unusable_date_rows
                + stats.invalid_order_rows
        );
    }
}
