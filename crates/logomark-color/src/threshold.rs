//! Binary thresholding
//!
//! Converts an HSV image into a binary buffer by the foreground band
//! rules. The binary buffer stays a 3-channel image whose pixels are
//! pure white or pure black, so it travels through the same container
//! as every other stage.

use crate::ColorResult;
use crate::bands::is_foreground;
use crate::colorspace::hsv_at;
use logomark_core::{Color, Pix};

/// Packed word of a binary foreground pixel
pub const FOREGROUND: u32 = Color::WHITE.to_pixel();

/// Packed word of a binary background pixel
pub const BACKGROUND: u32 = Color::BLACK.to_pixel();

/// Threshold an HSV image into a binary buffer.
///
/// Pixels inside any foreground band become pure white, all others
/// pure black. Dimensions are preserved.
pub fn threshold_bands(hsv: &Pix) -> ColorResult<Pix> {
    let w = hsv.width();
    let h = hsv.height();

    let mut out = hsv
        .create_template()
        .try_into_mut()
        .unwrap_or_else(|p| p.to_mut());

    for y in 0..h {
        for x in 0..w {
            let word = if is_foreground(hsv_at(hsv, x, y)) {
                FOREGROUND
            } else {
                BACKGROUND
            };
            out.set_pixel_unchecked(x, y, word);
        }
    }

    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorspace::pix_convert_rgb_to_hsv;

    #[test]
    fn test_threshold_splits_foreground_and_background() {
        // Left pixel strong blue, right pixel gray
        let pix = Pix::new(2, 1).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.set_rgb(0, 0, 0, 0, 150).unwrap();
        pm.set_rgb(1, 0, 180, 180, 180).unwrap();
        let hsv = pix_convert_rgb_to_hsv(&pm.into()).unwrap();

        let bin = threshold_bands(&hsv).unwrap();
        assert_eq!(bin.get_pixel_unchecked(0, 0), FOREGROUND);
        assert_eq!(bin.get_pixel_unchecked(1, 0), BACKGROUND);
    }

    #[test]
    fn test_output_is_strictly_binary() {
        let pix = Pix::new(4, 4).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        for y in 0..4 {
            for x in 0..4 {
                pm.set_rgb(x, y, (x * 60) as u8, (y * 60) as u8, 150).unwrap();
            }
        }
        let hsv = pix_convert_rgb_to_hsv(&pm.into()).unwrap();
        let bin = threshold_bands(&hsv).unwrap();

        for &word in bin.data() {
            assert!(word == FOREGROUND || word == BACKGROUND);
        }
    }
}
