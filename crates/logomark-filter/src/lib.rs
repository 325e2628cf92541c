//! logomark-filter - Smoothing filters
//!
//! This crate provides the convolution machinery for the recognition
//! pipeline:
//!
//! - [`Kernel`] - odd-sized 2D convolution kernels
//! - [`convolve_interior`] - per-channel interior convolution with a
//!   copy-unchanged border policy
//! - [`smooth`] - the fixed 3x3 lowpass filter applied before
//!   thresholding

mod error;
pub mod kernel;
pub mod smooth;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;
pub use smooth::{convolve_interior, smooth};
