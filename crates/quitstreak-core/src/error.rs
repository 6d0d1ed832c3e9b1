//! Core error types for quitstreak-core.
//!
//! Registry and engine failures are local and recoverable: an operation
//! that returns an error has performed no partial mutation.

use thiserror::Error;

/// Core error type for quitstreak-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A habit name was empty or whitespace-only after trimming.
    #[error("habit name must not be empty")]
    EmptyName,

    /// An operation referenced an id not present in the registry.
    #[error("no habit with id {id}")]
    UnknownHabit { id: i64 },

    /// IO errors (storage boundary).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors (storage boundary).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
