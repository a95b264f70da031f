//! Error types for numpaint-pipeline

use thiserror::Error;

/// Errors that can surface from a processing run
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Core library error (dimensions, allocation, cancellation)
    #[error("core error: {0}")]
    Core(#[from] numpaint_core::Error),

    /// Quantization stage error
    #[error("quantization error: {0}")]
    Quant(#[from] numpaint_quant::QuantError),

    /// Region stage error
    #[error("region error: {0}")]
    Region(#[from] numpaint_region::RegionError),
}

impl ProcessError {
    /// Whether this error is a cooperative cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            ProcessError::Core(numpaint_core::Error::Cancelled)
                | ProcessError::Quant(numpaint_quant::QuantError::Core(
                    numpaint_core::Error::Cancelled
                ))
                | ProcessError::Region(numpaint_region::RegionError::Core(
                    numpaint_core::Error::Cancelled
                ))
        )
    }
}

/// Result type for processing operations
pub type ProcessResult<T> = Result<T, ProcessError>;
