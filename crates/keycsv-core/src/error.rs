// Rust guideline compliant 2026-02-06

//! Error types for the keycsv core library.

use thiserror::Error;

/// Result type alias for keycsv operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for keycsv operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Data row with fewer columns than the export layout requires.
    #[error("row {line} has {found} columns, expected at least {expected}")]
    ShortRow {
        /// 1-based line number of the offending row.
        line: usize,
        /// Number of columns found.
        found: usize,
        /// Minimum number of columns required.
        expected: usize,
    },

    /// Input file with no header row.
    #[error("{0}: file has no header row")]
    EmptyFile(String),

    /// Merge run aborted by the operator.
    #[error("merge canceled by operator")]
    Cancelled,
}
