//! Interior convolution and noise smoothing
//!
//! Convolves the interior of a color image with a kernel, copying the
//! border unchanged. This border policy keeps every output sample a
//! true weighted average of in-image samples; callers must tolerate an
//! unfiltered frame as wide as the kernel's half-size.

use crate::{FilterError, FilterResult, Kernel};
use logomark_core::{Pix, color};

/// Convolve the interior of a color image with a kernel.
///
/// Each interior output sample is the per-channel weighted sum of the
/// kernel neighborhood, clamped to [0, 255]. Pixels within the kernel
/// half-size of an edge are copied byte-identical from the input.
///
/// # Errors
///
/// Returns [`FilterError::ImageTooSmall`] if the image has no interior
/// for this kernel (width or height below the kernel size).
pub fn convolve_interior(pix: &Pix, kernel: &Kernel) -> FilterResult<Pix> {
    let w = pix.width();
    let h = pix.height();
    let kw = kernel.width();
    let kh = kernel.height();
    let min = kw.max(kh);

    if w < kw || h < kh {
        return Err(FilterError::ImageTooSmall {
            width: w,
            height: h,
            min,
        });
    }

    let kcx = kernel.center_x();
    let kcy = kernel.center_y();

    // Start from a copy so the border comes over unchanged.
    let mut out = pix.to_mut();

    for y in kcy..h - kcy {
        for x in kcx..w - kcx {
            let mut sum_r = 0.0f32;
            let mut sum_g = 0.0f32;
            let mut sum_b = 0.0f32;

            for ky in 0..kh {
                for kx in 0..kw {
                    let sx = x + kx - kcx;
                    let sy = y + ky - kcy;

                    let (r, g, b) = color::extract_rgb(pix.get_pixel_unchecked(sx, sy));
                    let k = kernel.get(kx, ky).unwrap_or(0.0);

                    sum_r += r as f32 * k;
                    sum_g += g as f32 * k;
                    sum_b += b as f32 * k;
                }
            }

            let r = sum_r.round().clamp(0.0, 255.0) as u8;
            let g = sum_g.round().clamp(0.0, 255.0) as u8;
            let b = sum_b.round().clamp(0.0, 255.0) as u8;

            out.set_pixel_unchecked(x, y, color::compose_rgb(r, g, b));
        }
    }

    Ok(out.into())
}

/// Apply the fixed 3x3 lowpass smoothing filter.
///
/// This is the pipeline's first stage; it damps single-pixel noise
/// before color thresholding.
///
/// # Errors
///
/// Returns [`FilterError::ImageTooSmall`] for images narrower or
/// shorter than 3 pixels.
pub fn smooth(pix: &Pix) -> FilterResult<Pix> {
    convolve_interior(pix, &Kernel::lowpass_3x3())
}

#[cfg(test)]
mod tests {
    use super::*;
    use logomark_core::{Color, Pix};

    fn solid(w: u32, h: u32, c: Color) -> Pix {
        let mut pm = Pix::new(w, h).unwrap().try_into_mut().unwrap();
        for y in 0..h {
            for x in 0..w {
                pm.set_pixel_unchecked(x, y, c.to_pixel());
            }
        }
        pm.into()
    }

    #[test]
    fn test_too_small_rejected() {
        let pix = solid(2, 5, Color::WHITE);
        assert!(matches!(
            smooth(&pix),
            Err(FilterError::ImageTooSmall { .. })
        ));
        let pix = solid(5, 2, Color::WHITE);
        assert!(smooth(&pix).is_err());
    }

    #[test]
    fn test_flat_region_is_preserved() {
        let pix = solid(8, 6, Color::new(40, 90, 200));
        let out = smooth(&pix).unwrap();
        for y in 0..6 {
            for x in 0..8 {
                assert_eq!(out.get_rgb(x, y), Some((40, 90, 200)));
            }
        }
    }

    #[test]
    fn test_single_bright_pixel_is_damped() {
        let pix = solid(5, 5, Color::BLACK);
        let mut pm = pix.try_into_mut().unwrap();
        pm.set_rgb(2, 2, 250, 0, 0).unwrap();
        let out = smooth(&pm.into()).unwrap();

        // Center keeps 2/10 of its own value, neighbors pick up 1/10
        assert_eq!(out.get_rgb(2, 2), Some((50, 0, 0)));
        assert_eq!(out.get_rgb(1, 2), Some((25, 0, 0)));
        assert_eq!(out.get_rgb(1, 1), Some((25, 0, 0)));
        assert_eq!(out.get_rgb(2, 2).unwrap().1, 0);
    }

    #[test]
    fn test_border_copied_unchanged() {
        let pix = solid(6, 6, Color::BLACK);
        let mut pm = pix.try_into_mut().unwrap();
        for i in 0..6 {
            pm.set_rgb(i, 0, 200, 10, 10).unwrap();
            pm.set_rgb(0, i, 10, 200, 10).unwrap();
        }
        let input: Pix = pm.into();
        let out = smooth(&input).unwrap();

        for i in 0..6 {
            assert_eq!(out.get_pixel(i, 0), input.get_pixel(i, 0));
            assert_eq!(out.get_pixel(0, i), input.get_pixel(0, i));
            assert_eq!(out.get_pixel(i, 5), input.get_pixel(i, 5));
            assert_eq!(out.get_pixel(5, i), input.get_pixel(5, i));
        }
    }

    #[test]
    fn test_dimensions_preserved() {
        let pix = solid(13, 7, Color::WHITE);
        let out = smooth(&pix).unwrap();
        assert!(out.sizes_equal(&pix));
    }
}
