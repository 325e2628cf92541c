//! Color space conversion
//!
//! Converts RGB samples and whole images to HSV. Hue is kept on a
//! half-degree integer scale so it fits an 8-bit channel:
//!
//! - 0: red
//! - 30: yellow
//! - 60: green
//! - 90: cyan
//! - 120: blue
//! - 150: magenta
//!
//! Saturation and value are on [0, 255].

use crate::ColorResult;
use logomark_core::{Pix, color};

/// HSV color sample
///
/// - `h`: hue in [0, 180) (180 wraps to 0)
/// - `s`: saturation in [0, 255]
/// - `v`: value in [0, 255]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: i32,
    pub s: i32,
    pub v: i32,
}

impl Hsv {
    /// Create a new HSV sample
    pub const fn new(h: i32, s: i32, v: i32) -> Self {
        Self { h, s, v }
    }
}

/// Convert RGB samples to HSV.
///
/// Achromatic inputs (zero delta) report hue and saturation 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let ri = r as i32;
    let gi = g as i32;
    let bi = b as i32;

    let min = ri.min(gi).min(bi);
    let max = ri.max(gi).max(bi);
    let delta = max - min;

    let v = max;
    if delta == 0 {
        return Hsv { h: 0, s: 0, v };
    }

    let s = (255.0 * delta as f32 / max as f32 + 0.5) as i32;
    let h_raw = if ri == max {
        (gi - bi) as f32 / delta as f32
    } else if gi == max {
        2.0 + (bi - ri) as f32 / delta as f32
    } else {
        4.0 + (ri - gi) as f32 / delta as f32
    };

    let mut h = h_raw * 30.0;
    if h < 0.0 {
        h += 180.0;
    }
    if h >= 179.5 {
        h = 0.0;
    }
    let h = (h + 0.5) as i32;

    Hsv { h, s, v }
}

/// Convert an RGB image to its HSV representation.
///
/// The result stores H, S, V in the R, G, B channels respectively, so
/// the HSV image travels through the same [`Pix`] container as every
/// other stage buffer.
pub fn pix_convert_rgb_to_hsv(pix: &Pix) -> ColorResult<Pix> {
    let w = pix.width();
    let h = pix.height();

    let mut out = pix
        .create_template()
        .try_into_mut()
        .unwrap_or_else(|p| p.to_mut());

    for y in 0..h {
        for x in 0..w {
            let (r, g, b) = color::extract_rgb(pix.get_pixel_unchecked(x, y));
            let hsv = rgb_to_hsv(r, g, b);
            out.set_pixel_unchecked(
                x,
                y,
                color::compose_rgb(hsv.h as u8, hsv.s as u8, hsv.v as u8),
            );
        }
    }

    Ok(out.into())
}

/// Read the HSV sample encoded at (x, y) of an HSV image.
#[inline]
pub fn hsv_at(pix: &Pix, x: u32, y: u32) -> Hsv {
    let (h, s, v) = color::extract_rgb(pix.get_pixel_unchecked(x, y));
    Hsv {
        h: h as i32,
        s: s as i32,
        v: v as i32,
    }
}
