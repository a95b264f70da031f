//! Error types for numpaint-core
//!
//! Provides the shared error type for the processing pipeline. Each
//! variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Numpaint error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel buffer length disagrees with the stated dimensions
    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: u64, actual: u64 },

    /// Requested palette size is too small
    #[error("invalid palette size: {0} (at least 2 colors required)")]
    InvalidMaxColors(u32),

    /// A scratch buffer could not be allocated
    #[error("memory allocation failed")]
    AllocationFailed,

    /// Cooperative cancellation was requested by the host
    #[error("processing cancelled")]
    Cancelled,
}

/// Result type alias for numpaint operations
pub type Result<T> = std::result::Result<T, Error>;
