//! Core domain types and pure helpers for the shipment reporting
//! pipeline: record models, status vocabulary, mixed-format date
//! parsing, error types, and command-line settings.

pub mod dates;
pub mod error;
pub mod models;
pub mod settings;
