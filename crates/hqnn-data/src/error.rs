//! Error types for the data crate.

use thiserror::Error;

/// Errors produced while loading or preparing tabular data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataError {
    /// The input file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        /// Path of the file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The input has no header line.
    #[error("CSV input is empty: no header line")]
    MissingHeader,

    /// The requested column does not exist.
    #[error("Column '{0}' not found in header")]
    MissingColumn(String),

    /// A row has a different number of fields than the header.
    #[error("Line {line}: expected {expected} fields, got {got}")]
    RaggedRow {
        /// 1-based line number.
        line: usize,
        /// Number of header fields.
        expected: usize,
        /// Number of fields in the row.
        got: usize,
    },

    /// A field is not a number.
    #[error("Line {line}, column '{column}': cannot parse '{value}' as a number")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// Column name.
        column: String,
        /// Raw field text.
        value: String,
    },

    /// No data rows.
    #[error("Dataset has no rows")]
    EmptyDataset,

    /// Array shapes do not agree.
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// The test fraction cannot produce non-empty train and test sets.
    #[error("Invalid test size {test_size} for {n_samples} samples")]
    InvalidTestSize {
        /// Requested fraction.
        test_size: f64,
        /// Number of samples available.
        n_samples: usize,
    },
}

/// Result type for data operations.
pub type DataResult<T> = Result<T, DataError>;
