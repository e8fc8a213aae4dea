//! Error types for the preorder library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dataset generation and analysis.
#[derive(Debug, Error)]
pub enum PreorderError {
    /// Error reading, writing, or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A cell could not be converted to its schema type.
    #[error("Parse error at row {row}, column '{column}': {message}")]
    Parse {
        row: usize,
        column: String,
        message: String,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The dataset header lacks a required column.
    #[error("Missing column: '{0}'")]
    MissingColumn(String),

    /// Empty file or no rows left to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A comparison group has no members.
    #[error("Comparison group '{0}' has no observations")]
    EmptyGroup(String),

    /// The sample cannot support the requested statistic.
    #[error("Degenerate sample: {0}")]
    DegenerateSample(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PreorderError {
    /// Wrap an IO error with the path it concerns.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PreorderError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this error means the input file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PreorderError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Result type alias for preorder operations.
pub type Result<T> = std::result::Result<T, PreorderError>;
