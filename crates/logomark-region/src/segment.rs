//! Connected-component segmentation
//!
//! Scans a binary buffer in raster order and grows one [`Part`] per
//! connected foreground region with a breadth-first flood fill over the
//! 4-neighborhood. Claimed pixels are recolored with the part's tag, so
//! the white test doubles as the visited test. Regions below
//! [`MIN_PART_PIXELS`] are discarded afterwards; moment computation is
//! numerically unstable on tiny regions.

use crate::error::RegionResult;
use crate::part::Part;
use crate::tag::TagColors;
use logomark_color::{BACKGROUND, FOREGROUND};
use logomark_core::{Color, Pix, PixMut};
use std::collections::VecDeque;

/// Minimum pixel count for a part to survive the speckle filter
pub const MIN_PART_PIXELS: usize = 90;

/// Result of one segmentation run
#[derive(Debug)]
pub struct Segmentation {
    /// Segmentation buffer: every surviving part recolored with its tag,
    /// discarded regions recolored black
    pub pix: Pix,
    /// Surviving parts, in raster order of their seed pixels
    pub parts: Vec<Part>,
    /// Number of regions removed by the speckle filter
    pub discarded: usize,
}

/// Partition the foreground of a binary buffer into connected parts.
///
/// Every white pixel ends up in exactly one part; parts smaller than
/// [`MIN_PART_PIXELS`] are then dropped and blacked out in the buffer.
/// Component membership depends only on the input; the seed affects
/// tag colors past the first three components.
pub fn segment(binary: &Pix, seed: u64) -> RegionResult<Segmentation> {
    let w = binary.width();
    let h = binary.height();

    let mut seg = binary.to_mut();
    let mut tags = TagColors::new(seed);
    let mut parts = Vec::new();

    for y in 0..h {
        for x in 0..w {
            if seg.get_pixel_unchecked(x, y) == FOREGROUND {
                parts.push(flood_fill(&mut seg, x, y, tags.next_color()));
            }
        }
    }

    let mut discarded = 0;
    parts.retain(|part| {
        if part.len() < MIN_PART_PIXELS {
            for &(px, py) in part.pixels() {
                seg.set_pixel_unchecked(px, py, BACKGROUND);
            }
            discarded += 1;
            false
        } else {
            true
        }
    });

    Ok(Segmentation {
        pix: seg.into(),
        parts,
        discarded,
    })
}

/// Grow one part from a seed pixel, claiming still-white pixels.
fn flood_fill(seg: &mut PixMut, seed_x: u32, seed_y: u32, tag: Color) -> Part {
    let w = seg.width();
    let h = seg.height();
    let tag_word = tag.to_pixel();

    let mut part = Part::new(tag);
    let mut queue = VecDeque::new();
    queue.push_back((seed_x, seed_y));

    while let Some((x, y)) = queue.pop_front() {
        // A pixel already claimed by this fill is no longer white.
        if seg.get_pixel_unchecked(x, y) != FOREGROUND {
            continue;
        }

        seg.set_pixel_unchecked(x, y, tag_word);
        part.push(x, y);

        if x > 0 {
            queue.push_back((x - 1, y));
        }
        if x + 1 < w {
            queue.push_back((x + 1, y));
        }
        if y > 0 {
            queue.push_back((x, y - 1));
        }
        if y + 1 < h {
            queue.push_back((x, y + 1));
        }
    }

    part
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::DEFAULT_TAG_SEED;

    /// Build a black binary buffer with white pixels at the given
    /// coordinates.
    fn binary_with_white(w: u32, h: u32, white: &[(u32, u32)]) -> Pix {
        let mut pm = Pix::new(w, h).unwrap().try_into_mut().unwrap();
        for &(x, y) in white {
            pm.set_pixel_unchecked(x, y, FOREGROUND);
        }
        pm.into()
    }

    fn filled_rect(x0: u32, y0: u32, w: u32, h: u32) -> Vec<(u32, u32)> {
        (y0..y0 + h)
            .flat_map(|y| (x0..x0 + w).map(move |x| (x, y)))
            .collect()
    }

    #[test]
    fn test_single_region_is_tagged_red() {
        let pix = binary_with_white(20, 20, &filled_rect(5, 5, 10, 10));
        let seg = segment(&pix, DEFAULT_TAG_SEED).unwrap();

        assert_eq!(seg.parts.len(), 1);
        assert_eq!(seg.parts[0].len(), 100);
        assert_eq!(seg.parts[0].tag(), Color::RED);
        assert_eq!(seg.discarded, 0);
        assert_eq!(
            seg.pix.get_pixel_unchecked(5, 5),
            Color::RED.to_pixel()
        );
        assert_eq!(seg.pix.get_pixel_unchecked(0, 0), BACKGROUND);
    }

    #[test]
    fn test_diagonal_pixels_are_separate_regions() {
        // 4-connectivity does not bridge diagonals; both specks get
        // filtered, leaving an all-black buffer.
        let pix = binary_with_white(4, 4, &[(1, 1), (2, 2)]);
        let seg = segment(&pix, DEFAULT_TAG_SEED).unwrap();

        assert!(seg.parts.is_empty());
        assert_eq!(seg.discarded, 2);
        assert_eq!(seg.pix.get_pixel_unchecked(1, 1), BACKGROUND);
        assert_eq!(seg.pix.get_pixel_unchecked(2, 2), BACKGROUND);
    }

    #[test]
    fn test_speckle_filter_boundary() {
        // 89 pixels is below the cutoff, 90 survives
        let small = binary_with_white(100, 3, &filled_rect(0, 1, 89, 1));
        let seg = segment(&small, DEFAULT_TAG_SEED).unwrap();
        assert!(seg.parts.is_empty());
        assert_eq!(seg.discarded, 1);

        let large = binary_with_white(100, 3, &filled_rect(0, 1, 90, 1));
        let seg = segment(&large, DEFAULT_TAG_SEED).unwrap();
        assert_eq!(seg.parts.len(), 1);
        assert_eq!(seg.parts[0].len(), 90);
    }

    #[test]
    fn test_input_buffer_untouched() {
        let pix = binary_with_white(20, 20, &filled_rect(0, 0, 10, 10));
        let _ = segment(&pix, DEFAULT_TAG_SEED).unwrap();
        assert_eq!(pix.get_pixel_unchecked(0, 0), FOREGROUND);
    }
}
