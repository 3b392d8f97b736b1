//! Stage-two join of enriched shipments onto customer reference data.

use std::collections::HashMap;

use tracing::{info, warn};

use report_core::models::{Customer, EnrichedShipment, JoinedShipment};

/// Left-joins shipments onto customers by customer id.
///
/// Every shipment appears in the output exactly once. A shipment whose
/// customer id has no reference row keeps `None` for the name instead
/// of being dropped. Customer ids are expected to be unique; if the
/// reference set repeats one, the later row wins and the collision is
/// logged.
pub fn join_customers(
    shipments: Vec<EnrichedShipment>,
    customers: &[Customer],
) -> Vec<JoinedShipment> {
    let mut by_id: HashMap<&str, &str> = HashMap::with_capacity(customers.len());
    for customer in customers {
        let replaced = by_id.insert(
            customer.customer_id.as_str(),
            customer.customer_name.as_str(),
        );
        if replaced.is_some() {
            warn!(
                "duplicate customer id {} in reference set, keeping the later row",
                customer.customer_id
            );
        }
    }

    let mut unmatched = 0usize;
    let joined: Vec<JoinedShipment> = shipments
        .into_iter()
        .map(|shipment| {
            let customer_name = by_id
                .get(shipment.customer_id.as_str())
                .copied()
                .map(String::from);
            if customer_name.is_none() {
                unmatched += 1;
            }
            JoinedShipment {
                shipment,
                customer_name,
            }
        })
        .collect();

    if unmatched > 0 {
        warn!(
            "{} shipments reference customer ids absent from the reference set",
            unmatched
        );
    }
    info!(
        "joined {} shipments against {} customer rows",
        joined.len(),
        customers.len()
    );

    joined
}
