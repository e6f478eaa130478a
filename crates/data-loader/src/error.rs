//! Error types for the data-loader crate.
//!
//! Only a handful of these are fatal to a load: an unreadable source, an
//! empty source and a header without the required columns. Everything
//! raised while handling a single row is caught by the loader, reported
//! and skipped.

use thiserror::Error;

/// Errors that can occur during data loading and parsing
///
/// The `#[derive(Error)]` macro from thiserror implements `std::error::Error`
/// and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the source
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The tabular reader rejected the input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The source has no header line at all
    #[error("Source is empty: no header line found")]
    EmptySource,

    /// The header line lacks one or more required columns
    #[error("Header is missing required columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// A row couldn't be turned into a work
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: u64, reason: String },

    /// A field had an invalid value
    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: String, value: String },
}

impl DataLoadError {
    /// Attach a line number to a row-level failure.
    ///
    /// Errors that already carry a line are returned unchanged.
    pub fn at_line(self, line: u64) -> Self {
        match self {
            DataLoadError::ParseError { .. } => self,
            other => DataLoadError::ParseError {
                line,
                reason: other.to_string(),
            },
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
