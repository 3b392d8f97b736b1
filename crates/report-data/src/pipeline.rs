//! End-to-end composition of the pipeline stages.

use std::time::{Duration, Instant};

use tracing::info;

use report_core::models::{Customer, CustomerMonthStats, EnrichedShipment, RawShipment};

use crate::aggregator::aggregate_monthly;
use crate::cleaner::{clean_shipments, CleanStats};
use crate::enricher::enrich_shipments;
use crate::joiner::join_customers;

/// Run-level accounting for one pipeline pass.
#[derive(Debug, Clone)]
pub struct PipelineMetadata {
    pub clean_stats: CleanStats,
    pub customer_rows: usize,
    pub silver_rows: usize,
    /// Shipments whose customer id had no row in the reference set.
    pub unmatched_shipments: usize,
    pub gold_groups: usize,
    /// Time spent cleaning and enriching.
    pub silver_duration: Duration,
    /// Time spent joining and aggregating.
    pub gold_duration: Duration,
}

/// Everything one run produces: both datasets plus accounting.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub silver: Vec<EnrichedShipment>,
    pub gold: Vec<CustomerMonthStats>,
    pub metadata: PipelineMetadata,
}

/// Runs the full pipeline over in-memory inputs.
///
/// Stages run strictly in sequence, each consuming the previous
/// snapshot. File I/O stays outside this function; callers load the raw
/// collections and write the results, which keeps every stage testable
/// on plain data. Identical inputs always produce identical outputs.
pub fn run_pipeline(shipments: Vec<RawShipment>, customers: Vec<Customer>) -> PipelineResult {
    let silver_started = Instant::now();
    let (cleaned, clean_stats) = clean_shipments(shipments);
    let silver = enrich_shipments(cleaned);
    let silver_duration = silver_started.elapsed();

    let gold_started = Instant::now();
    let joined = join_customers(silver.clone(), &customers);
    let unmatched_shipments = joined.iter().filter(|j| j.customer_name.is_none()).count();
    let gold = aggregate_monthly(&joined);
    let gold_duration = gold_started.elapsed();

    info!(
        "pipeline complete: {} silver rows and {} report groups in {:?}",
        silver.len(),
        gold.len(),
        silver_duration + gold_duration
    );

    PipelineResult {
        metadata: PipelineMetadata {
            clean_stats,
            customer_rows: customers.len(),
            silver_rows: silver.len(),
            unmatched_shipments,
            gold_groups: gold.len(),
            silver_duration,
            gold_duration,
        },
        silver,
        gold,
    }
}
