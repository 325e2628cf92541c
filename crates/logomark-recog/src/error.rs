//! Error types for logomark-recog

use thiserror::Error;

/// Errors that can occur during recognition
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] logomark_core::Error),

    /// Filtering stage error
    #[error("filter error: {0}")]
    Filter(#[from] logomark_filter::FilterError),

    /// Color processing stage error
    #[error("color error: {0}")]
    Color(#[from] logomark_color::ColorError),

    /// Segmentation stage error
    #[error("region error: {0}")]
    Region(#[from] logomark_region::RegionError),

    /// Moment computation on an empty pixel set
    #[error("cannot compute moments of an empty shape")]
    EmptyShape,
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
