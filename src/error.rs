//! Error types for catalog loading and index construction.

use thiserror::Error;

/// Result type alias for georoi operations.
pub type Result<T> = std::result::Result<T, GeoRoiError>;

/// Errors raised while loading a catalog and building an index.
///
/// Queries never return errors: once a [`RoiIndex`](crate::RoiIndex) exists,
/// the worst outcome of a query is an empty result.
#[derive(Error, Debug)]
pub enum GeoRoiError {
    /// A dataset record failed validation. Loading stops at the first bad
    /// record and no partial catalog is produced.
    #[error("invalid record {record}: {reason}")]
    Validation {
        /// Zero-based position of the record in the dataset.
        record: usize,
        /// Human-readable description of the violation.
        reason: String,
    },

    /// The dataset could not be parsed as JSON.
    #[error("dataset parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
