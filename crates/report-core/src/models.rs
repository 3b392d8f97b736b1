use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Status vocabulary ───────────────────────────────────────────────────────

/// Canonical status for a shipment that reached its destination.
pub const STATUS_DELIVERED: &str = "Delivered";
/// Canonical status for a shipment moving through the network.
pub const STATUS_IN_TRANSIT: &str = "In Transit";
/// Canonical status for a shipment booked but not yet picked up.
pub const STATUS_PENDING: &str = "Pending";
/// Canonical status for a shipment that was called off.
pub const STATUS_CANCELLED: &str = "Cancelled";

/// Canonicalizes a raw status value.
///
/// Hyphens become spaces, then the value is title-cased with Python
/// `str.title()` word rules: a letter is uppercased when it follows a
/// non-letter and lowercased otherwise. Values outside the known
/// vocabulary are canonicalized the same way, never dropped. The
/// function is idempotent, so already-canonical values pass through
/// unchanged.
pub fn normalize_status(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_letter = false;
    for ch in raw.chars() {
        let ch = if ch == '-' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(ch);
            prev_letter = false;
        }
    }
    out
}

/// True when a canonical status counts as in-process for the monthly
/// report ("In Transit" or "Pending").
pub fn is_on_process(status: &str) -> bool {
    status == STATUS_IN_TRANSIT || status == STATUS_PENDING
}

// ── Records ─────────────────────────────────────────────────────────────────

/// A shipment row exactly as it appears in the raw CSV, every field as
/// uninterpreted text. Duplicate detection runs on this form, so two rows
/// are duplicates only when all six fields match byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawShipment {
    pub shipment_id: String,
    pub customer_id: String,
    pub booked_date: String,
    pub delivered_date: String,
    pub estimated_delivery_date: String,
    pub status: String,
}

/// A cleaned shipment: all three dates parsed and mutually consistent
/// (delivered never precedes booked), status canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    pub shipment_id: String,
    pub customer_id: String,
    pub booked_date: NaiveDate,
    pub delivered_date: NaiveDate,
    pub estimated_delivery_date: NaiveDate,
    pub status: String,
}

/// A cleaned shipment extended with the derived timing fields. This is
/// one row of the silver output, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedShipment {
    pub shipment_id: String,
    pub customer_id: String,
    pub booked_date: NaiveDate,
    pub delivered_date: NaiveDate,
    pub estimated_delivery_date: NaiveDate,
    pub status: String,
    /// Whole days from booking to delivery.
    pub delivery_duration_days: i64,
    /// Whole days from the estimate to actual delivery, negative when the
    /// shipment arrived early. Only populated for delivered shipments.
    pub delivery_delay_days: Option<i64>,
    /// Whether actual delivery fell after the estimated date.
    pub is_delayed: bool,
}

/// A customer reference row. Reference data is read, never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub customer_name: String,
}

/// An enriched shipment paired with its customer's display name, or
/// `None` when the customer id has no row in the reference set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedShipment {
    pub shipment: EnrichedShipment,
    pub customer_name: Option<String>,
}

/// One row of the gold report: shipment statistics for one customer in
/// one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerMonthStats {
    pub customer_id: String,
    /// Empty in the output when the customer id was never matched.
    pub customer_name: Option<String>,
    /// Booking-month label, e.g. "March 2024".
    pub month_year: String,
    pub total_shipments: u32,
    pub delivered_shipments: u32,
    pub on_process_shipments: u32,
    pub cancelled_shipments: u32,
    /// Mean delivery duration over all shipments in the group, rounded to
    /// two decimals.
    pub avg_delivery_days: f64,
    pub delayed_shipments: u32,
    /// Share of delivered shipments that arrived late, rounded to two
    /// decimals. `None` when the group has no delivered shipments, which
    /// the output renders as an empty cell rather than a fake zero.
    pub delayed_rate: Option<f64>,
}
