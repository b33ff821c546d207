//! Error types for the canvas crate.

use std::fmt;

/// Failure reported by a [`crate::storage::KeyValueStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no `window`, or storage disabled).
    #[error("local storage is unavailable")]
    Unavailable,
    /// The backend rejected the operation (quota exceeded, security error, ...).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Which date field of the shape form a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start date"),
            Self::End => f.write_str("end date"),
        }
    }
}

/// Errors surfaced by editor operations.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// Reading or writing the key-value store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The shape list could not be encoded.
    #[error("failed to encode shapes: {0}")]
    Serialize(#[source] serde_json::Error),
    /// The stored blob is not a valid shape list.
    #[error("saved shapes are malformed: {0}")]
    MalformedSnapshot(#[source] serde_json::Error),
    /// A save would replace a saved blob that failed to load.
    #[error("saved shapes could not be loaded; saving now would overwrite them")]
    OverwriteBlocked,
    /// A date field did not hold a `YYYY-MM-DD` calendar date.
    #[error("invalid {field}: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { field: DateField, value: String },
}
