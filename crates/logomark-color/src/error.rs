//! Error types for logomark-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] logomark_core::Error),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
