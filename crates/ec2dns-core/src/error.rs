//! Error types for the record synchronization system
//!
//! Collaborator failures are wrapped and propagated uncaught; expected
//! absences (no matching instance, no zone tag, empty plan) are never
//! represented as errors.

use thiserror::Error;

/// Result type alias for synchronization operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the record synchronization system
#[derive(Error, Debug)]
pub enum Error {
    /// Instance metadata provider errors
    #[error("instance source error: {0}")]
    InstanceSource(String),

    /// DNS zone store errors (zone lookup, record listing, batch apply)
    #[error("zone store error: {0}")]
    ZoneStore(String),

    /// Malformed event payload
    #[error("invalid event: {0}")]
    InvalidEvent(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an instance source error
    pub fn instance_source(msg: impl Into<String>) -> Self {
        Self::InstanceSource(msg.into())
    }

    /// Create a zone store error
    pub fn zone_store(msg: impl Into<String>) -> Self {
        Self::ZoneStore(msg.into())
    }

    /// Create an invalid event error
    pub fn invalid_event(msg: impl Into<String>) -> Self {
        Self::InvalidEvent(msg.into())
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
