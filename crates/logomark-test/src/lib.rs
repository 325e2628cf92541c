//! logomark-test - Shared test support
//!
//! Synthetic image constructors used by the member crates' integration
//! tests. Nothing here ships in a release build; the crate exists so
//! the test suites agree on how binary and colored fixtures are built.

use logomark_color::FOREGROUND;
use logomark_core::{Color, Pix};

/// Create an image filled with a single color.
pub fn solid(width: u32, height: u32, color: Color) -> Pix {
    let mut pm = Pix::new(width, height).unwrap().try_into_mut().unwrap();
    let word = color.to_pixel();
    for y in 0..height {
        for x in 0..width {
            pm.set_pixel_unchecked(x, y, word);
        }
    }
    pm.into()
}

/// Create a black binary buffer with white pixels at the given
/// coordinates.
pub fn binary_with_white(width: u32, height: u32, white: &[(u32, u32)]) -> Pix {
    let mut pm = Pix::new(width, height).unwrap().try_into_mut().unwrap();
    for &(x, y) in white {
        pm.set_pixel_unchecked(x, y, FOREGROUND);
    }
    pm.into()
}

/// Enumerate the pixels of a filled axis-aligned rectangle.
pub fn filled_rect(x0: u32, y0: u32, w: u32, h: u32) -> Vec<(u32, u32)> {
    (y0..y0 + h)
        .flat_map(|y| (x0..x0 + w).map(move |x| (x, y)))
        .collect()
}

/// Paint a filled rectangle onto an image, returning the modified image.
pub fn with_rect(pix: Pix, x0: u32, y0: u32, w: u32, h: u32, color: Color) -> Pix {
    let mut pm = pix.try_into_mut().unwrap_or_else(|p| p.to_mut());
    let word = color.to_pixel();
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            pm.set_pixel_unchecked(x, y, word);
        }
    }
    pm.into()
}
