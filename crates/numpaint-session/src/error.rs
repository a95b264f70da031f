//! Error types for numpaint-session

use thiserror::Error;

/// Errors that can occur while saving or loading a session document
#[derive(Debug, Error)]
pub enum SessionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] numpaint_core::Error),

    /// JSON encode/decode error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A base64 payload could not be decoded
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The document was written by an incompatible format version
    #[error("unsupported session version: {0}")]
    UnsupportedVersion(u32),

    /// A packed region map payload is not a whole number of ids
    #[error("region map payload of {0} bytes is not a multiple of 4")]
    MalformedRegionMap(usize),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
