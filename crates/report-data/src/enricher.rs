//! Stage-one derivation of per-shipment timing fields.

use tracing::info;

use report_core::models::{EnrichedShipment, Shipment, STATUS_DELIVERED};

/// Derives the timing fields for one cleaned shipment.
///
/// `delivery_duration_days` is always defined because cleaning already
/// guaranteed both endpoints. `delivery_delay_days` is only meaningful
/// once a shipment is delivered; any other status records an absent
/// value, not zero. `is_delayed` compares delivered against estimated
/// for every status, including non-terminal ones where the delivered
/// timestamp is notional.
pub fn enrich_shipment(shipment: Shipment) -> EnrichedShipment {
    let duration = (shipment.delivered_date - shipment.booked_date).num_days();
    let delay = if shipment.status == STATUS_DELIVERED {
        Some((shipment.delivered_date - shipment.estimated_delivery_date).num_days())
    } else {
        None
    };
    let is_delayed = shipment.delivered_date > shipment.estimated_delivery_date;

    EnrichedShipment {
        shipment_id: shipment.shipment_id,
        customer_id: shipment.customer_id,
        booked_date: shipment.booked_date,
        delivered_date: shipment.delivered_date,
        estimated_delivery_date: shipment.estimated_delivery_date,
        status: shipment.status,
        delivery_duration_days: duration,
        delivery_delay_days: delay,
        is_delayed,
    }
}

/// Enriches the whole cleaned collection, preserving order.
pub fn enrich_shipments(shipments: Vec<Shipment>) -> Vec<EnrichedShipment> {
    let enriched: Vec<EnrichedShipment> = shipments.into_iter().map(enrich_shipment).collect();
    info!("derived timing fields for {} shipments", enriched.len());
    enriched
}
