//! logomark-color - Color processing
//!
//! This crate isolates the logo's colored regions:
//!
//! - **Color space conversion** - RGB to HSV on a compact integer scale
//! - **Foreground bands** - the three trained HSV ranges (blue, red,
//!   orange) that define logo foreground
//! - **Thresholding** - HSV image to pure white/black binary buffer

pub mod bands;
pub mod colorspace;
mod error;
pub mod threshold;

pub use bands::{BLUE_BAND, ColorBand, FOREGROUND_BANDS, ORANGE_BAND, RED_BAND, is_foreground};
pub use colorspace::{Hsv, hsv_at, pix_convert_rgb_to_hsv, rgb_to_hsv};
pub use error::{ColorError, ColorResult};
pub use threshold::{BACKGROUND, FOREGROUND, threshold_bands};
