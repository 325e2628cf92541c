//! Word assembly
//!
//! Groups the detected glyphs of each logo instance into one word
//! rectangle. The leading and trailing glyph boxes are ordered
//! left-to-right and paired positionally; each pair's union box is the
//! word extent. With unequal counts only the first `min(len)` pairs are
//! formed and the surplus is reported, never indexed out of bounds.

use logomark_core::{Box, Boxa, Color, PixMut};

/// Outline color of word rectangles on the annotated output
pub const WORD_BOX_COLOR: Color = Color::new(0, 100, 0);

/// Result of pairing leading and trailing glyph boxes
#[derive(Debug, Clone)]
pub struct WordAssembly {
    /// One union rectangle per matched pair
    pub words: Boxa,
    /// Leading boxes left without a trailing partner
    pub unpaired_leading: usize,
    /// Trailing boxes left without a leading partner
    pub unpaired_trailing: usize,
}

/// Order boxes left-to-right by left edge, ties broken by top edge.
fn reading_order(boxes: &[Box]) -> Vec<Box> {
    let mut sorted = boxes.to_vec();
    sorted.sort_by_key(|b| (b.x, b.y));
    sorted
}

/// Pair leading and trailing glyph boxes into word rectangles.
pub fn assemble_words(leading: &[Box], trailing: &[Box]) -> WordAssembly {
    let leading = reading_order(leading);
    let trailing = reading_order(trailing);

    let pairs = leading.len().min(trailing.len());
    let mut words = Boxa::with_capacity(pairs);
    for i in 0..pairs {
        words.push(leading[i].union(&trailing[i]));
    }

    WordAssembly {
        words,
        unpaired_leading: leading.len() - pairs,
        unpaired_trailing: trailing.len() - pairs,
    }
}

/// Draw every word rectangle as a 1-pixel outline.
pub fn draw_word_boxes(pix: &mut PixMut, words: &Boxa) {
    for b in words.boxes() {
        pix.draw_box_outline(b, WORD_BOX_COLOR);
    }
}
