//! Error types for logomark-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] logomark_core::Error),

    /// Image too small for the kernel's interior region
    #[error("image too small to filter: {width}x{height}, need at least {min}x{min}")]
    ImageTooSmall { width: u32, height: u32, min: u32 },

    /// Invalid kernel geometry or weights
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
