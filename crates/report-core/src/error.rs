use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the reporting pipeline.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A source file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV file or row could not be decoded.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An input file lacks columns the pipeline depends on. This is fatal:
    /// no downstream stage can run without the full schema.
    #[error("{path}: missing required column(s): {}", .columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    /// General IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the reporting crates.
pub type Result<T> = std::result::Result<T, ReportError>;
