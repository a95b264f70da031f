//! Error types for numpaint-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] numpaint_core::Error),

    /// Assignment buffer length disagrees with the image dimensions
    #[error("assignment buffer size mismatch: expected {expected}, got {actual}")]
    AssignmentSizeMismatch { expected: usize, actual: usize },

    /// A region references a palette index that does not exist
    #[error("color id {color_id} out of range for palette of {palette_len} entries")]
    ColorIdOutOfRange { color_id: u32, palette_len: usize },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
