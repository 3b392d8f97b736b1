//! Data layer for the shipment reporting pipeline: reading the raw
//! extracts, profiling them, the cleaning and derivation stages, the
//! customer join, monthly aggregation, and writing both outputs.

pub mod aggregator;
pub mod cleaner;
pub mod enricher;
pub mod joiner;
pub mod pipeline;
pub mod profile;
pub mod reader;
pub mod writer;

pub use report_core as core;
