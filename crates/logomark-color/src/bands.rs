//! Foreground color bands
//!
//! A pixel belongs to the logo foreground when its HSV sample falls
//! inside any of three fixed color bands. The bounds are trained
//! constants, not runtime configuration.

use crate::colorspace::Hsv;

/// An inclusive HSV range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBand {
    /// Lower bound on all three channels
    pub lo: Hsv,
    /// Upper bound on all three channels
    pub hi: Hsv,
}

impl ColorBand {
    /// Create a new band from channel bounds
    pub const fn new(lo: Hsv, hi: Hsv) -> Self {
        Self { lo, hi }
    }

    /// Check whether a sample falls inside the band.
    ///
    /// All three channels must be within their bounds simultaneously.
    pub fn contains(&self, sample: Hsv) -> bool {
        sample.h >= self.lo.h
            && sample.h <= self.hi.h
            && sample.s >= self.lo.s
            && sample.s <= self.hi.s
            && sample.v >= self.lo.v
            && sample.v <= self.hi.v
    }
}

/// Blue band of the logo mark
pub const BLUE_BAND: ColorBand = ColorBand::new(Hsv::new(110, 38, 66), Hsv::new(145, 255, 160));

/// Red band of the logo mark
pub const RED_BAND: ColorBand = ColorBand::new(Hsv::new(0, 125, 153), Hsv::new(7, 255, 255));

/// Orange band of the logo mark
pub const ORANGE_BAND: ColorBand = ColorBand::new(Hsv::new(10, 170, 115), Hsv::new(18, 243, 180));

/// The three trained bands, in test order
pub const FOREGROUND_BANDS: [ColorBand; 3] = [BLUE_BAND, RED_BAND, ORANGE_BAND];

/// Check whether a sample belongs to any foreground band.
pub fn is_foreground(sample: Hsv) -> bool {
    FOREGROUND_BANDS.iter().any(|band| band.contains(sample))
}
