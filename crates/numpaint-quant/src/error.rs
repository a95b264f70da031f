//! Error types for numpaint-quant

use thiserror::Error;

/// Errors that can occur during color quantization
#[derive(Debug, Error)]
pub enum QuantError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] numpaint_core::Error),

    /// Assignment array length disagrees with the cluster count
    #[error("assignment {assignment} out of range for {clusters} clusters")]
    AssignmentOutOfRange { assignment: u32, clusters: usize },
}

/// Result type for quantization operations
pub type QuantResult<T> = Result<T, QuantError>;
