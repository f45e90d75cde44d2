//! Errors raised by settings repositories
//!
//! Repository errors never leave the persistence helpers in [`super`]: the
//! load/save helpers log them and fall back to defaults. They surface only
//! when a caller talks to a repository directly, e.g. when opening the
//! on-disk store at startup.

use thiserror::Error;

/// Settings repository errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// A stored value is not valid UTF-8
    #[error("Stored value for '{0}' is not valid UTF-8")]
    InvalidUtf8(String),

    /// Error while encoding a value as JSON
    #[error("Error during serialization: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// The repository cannot be used (e.g. a poisoned lock)
    #[error("Settings store unavailable: {0}")]
    Unavailable(String),
}
