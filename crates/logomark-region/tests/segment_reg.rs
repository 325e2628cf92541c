//! Segmentation regression tests
//!
//! Covers the partition guarantees of flood-fill segmentation and the
//! speckle filter on hand-built binary buffers.

use std::collections::HashSet;

use logomark_color::{BACKGROUND, FOREGROUND};
use logomark_core::{Box, Pix};
use logomark_region::{DEFAULT_TAG_SEED, MIN_PART_PIXELS, segment};
use logomark_test::{binary_with_white, filled_rect};

fn white_set(pix: &Pix) -> HashSet<(u32, u32)> {
    let mut set = HashSet::new();
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            if pix.get_pixel_unchecked(x, y) == FOREGROUND {
                set.insert((x, y));
            }
        }
    }
    set
}

#[test]
fn test_all_black_buffer_yields_no_parts() {
    let pix = binary_with_white(5, 5, &[]);
    let seg = segment(&pix, DEFAULT_TAG_SEED).unwrap();

    assert!(seg.parts.is_empty());
    assert_eq!(seg.discarded, 0);
    for &word in seg.pix.data() {
        assert_eq!(word, BACKGROUND);
    }
}

#[test]
fn test_single_square_is_one_part_with_exact_bbox() {
    let pix = binary_with_white(20, 20, &filled_rect(5, 5, 10, 10));
    let seg = segment(&pix, DEFAULT_TAG_SEED).unwrap();

    assert_eq!(seg.parts.len(), 1);
    assert_eq!(seg.parts[0].len(), 100);
    assert_eq!(
        seg.parts[0].bounding_box().unwrap(),
        Box::new_unchecked(5, 5, 10, 10)
    );
}

#[test]
fn test_two_separated_squares_are_two_parts() {
    // Two 10x10 squares stacked with a black gap between them
    let mut white = filled_rect(0, 0, 10, 10);
    white.extend(filled_rect(0, 20, 10, 10));
    let pix = binary_with_white(10, 30, &white);

    let seg = segment(&pix, DEFAULT_TAG_SEED).unwrap();

    assert_eq!(seg.parts.len(), 2);
    assert_eq!(seg.parts[0].len(), 100);
    assert_eq!(seg.parts[1].len(), 100);

    let a: HashSet<_> = seg.parts[0].pixels().iter().copied().collect();
    let b: HashSet<_> = seg.parts[1].pixels().iter().copied().collect();
    assert!(a.is_disjoint(&b));
}

#[test]
fn test_parts_partition_the_foreground() {
    // Three regions of differing shape, all above the size filter
    let mut white = filled_rect(0, 0, 10, 10);
    white.extend(filled_rect(15, 3, 5, 20));
    white.extend(filled_rect(25, 0, 12, 9));
    let pix = binary_with_white(40, 30, &white);

    let seg = segment(&pix, DEFAULT_TAG_SEED).unwrap();
    assert_eq!(seg.parts.len(), 3);

    let mut union = HashSet::new();
    for part in &seg.parts {
        for &p in part.pixels() {
            // No pixel may appear in two parts
            assert!(union.insert(p));
        }
    }
    assert_eq!(union, white_set(&pix));
}

#[test]
fn test_membership_is_seed_independent() {
    let mut white = filled_rect(0, 0, 10, 10);
    white.extend(filled_rect(0, 20, 10, 10));
    white.extend(filled_rect(15, 0, 10, 10));
    white.extend(filled_rect(15, 20, 10, 10));
    let pix = binary_with_white(30, 30, &white);

    let a = segment(&pix, DEFAULT_TAG_SEED).unwrap();
    let b = segment(&pix, 0xdead_beef).unwrap();

    assert_eq!(a.parts.len(), b.parts.len());
    for (pa, pb) in a.parts.iter().zip(&b.parts) {
        assert_eq!(pa.pixels(), pb.pixels());
    }
}

#[test]
fn test_speckle_filter_blacks_out_small_regions() {
    // One region exactly at the cutoff, one just below it
    let keep = filled_rect(0, 0, MIN_PART_PIXELS as u32, 1);
    let mut white = keep.clone();
    white.extend(filled_rect(0, 4, MIN_PART_PIXELS as u32 - 1, 1));
    let pix = binary_with_white(MIN_PART_PIXELS as u32 + 2, 8, &white);

    let seg = segment(&pix, DEFAULT_TAG_SEED).unwrap();

    assert_eq!(seg.parts.len(), 1);
    assert_eq!(seg.parts[0].len(), MIN_PART_PIXELS);
    assert_eq!(seg.discarded, 1);

    // The discarded row is black in the buffer, the kept row is not
    assert_eq!(seg.pix.get_pixel_unchecked(0, 4), BACKGROUND);
    assert_ne!(seg.pix.get_pixel_unchecked(0, 0), BACKGROUND);
    assert_ne!(seg.pix.get_pixel_unchecked(0, 0), FOREGROUND);
}
