//! Stage-two aggregation of joined shipments into the monthly
//! per-customer report.

use std::collections::BTreeMap;

use tracing::info;

use report_core::dates::month_label;
use report_core::models::{
    is_on_process, CustomerMonthStats, JoinedShipment, STATUS_CANCELLED, STATUS_DELIVERED,
};

// ── GroupAccumulator ──────────────────────────────────────────────────────────

/// Running totals for one (customer, month) group.
#[derive(Debug, Clone, Default)]
struct GroupAccumulator {
    total: u32,
    delivered: u32,
    on_process: u32,
    cancelled: u32,
    delayed: u32,
    duration_sum: i64,
}

impl GroupAccumulator {
    fn add(&mut self, row: &JoinedShipment) {
        self.total += 1;

        let status = row.shipment.status.as_str();
        if status == STATUS_DELIVERED {
            self.delivered += 1;
        } else if is_on_process(status) {
            self.on_process += 1;
        } else if status == STATUS_CANCELLED {
            self.cancelled += 1;
        }

        if row.shipment.is_delayed {
            self.delayed += 1;
        }
        self.duration_sum += row.shipment.delivery_duration_days;
    }

    fn into_stats(
        self,
        customer_id: String,
        customer_name: Option<String>,
        month_year: String,
    ) -> CustomerMonthStats {
        // A group exists only because at least one row landed in it, so
        // the mean is always defined. The rate is not: a group with no
        // delivered shipments has no denominator and stays undefined.
        let avg_delivery_days = round2(self.duration_sum as f64 / f64::from(self.total));
        let delayed_rate = if self.delivered > 0 {
            Some(round2(f64::from(self.delayed) / f64::from(self.delivered)))
        } else {
            None
        };

        CustomerMonthStats {
            customer_id,
            customer_name,
            month_year,
            total_shipments: self.total,
            delivered_shipments: self.delivered,
            on_process_shipments: self.on_process,
            cancelled_shipments: self.cancelled,
            avg_delivery_days,
            delayed_shipments: self.delayed,
            delayed_rate,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ── aggregate_monthly ─────────────────────────────────────────────────────────

/// Groups joined shipments by customer and booking month and computes
/// the per-group statistics.
///
/// The grouping key is the formatted month label, so the same month in
/// different years never collides. Output rows are sorted by customer
/// id, then customer name, then label, which keeps repeated runs over
/// the same data byte-identical.
pub fn aggregate_monthly(rows: &[JoinedShipment]) -> Vec<CustomerMonthStats> {
    let mut groups: BTreeMap<(String, Option<String>, String), GroupAccumulator> = BTreeMap::new();

    for row in rows {
        let key = (
            row.shipment.customer_id.clone(),
            row.customer_name.clone(),
            month_label(row.shipment.booked_date),
        );
        groups.entry(key).or_default().add(row);
    }

    let report: Vec<CustomerMonthStats> = groups
        .into_iter()
        .map(|((customer_id, customer_name, month_year), acc)| {
            acc.into_stats(customer_id, customer_name, month_year)
        })
        .collect();

    info!(
        "aggregated {} shipments into {} customer-month groups",
        rows.len(),
        report.len()
    );

    report
}

// ── Tests ─────────────────────────────────────────────────────────────────────
