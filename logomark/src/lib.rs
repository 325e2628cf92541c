//! Logomark - Logo glyph recognition in color photographs
//!
//! Logomark isolates colored regions of a photograph, extracts their
//! shapes with connected-component analysis, computes moment
//! invariants per shape, and matches them against three trained glyph
//! classes. Matched glyphs are grouped into word rectangles drawn on
//! the output image.
//!
//! # Pipeline
//!
//! 1. Lowpass smoothing of the input
//! 2. RGB to HSV conversion
//! 3. Color band thresholding into a binary buffer
//! 4. Flood-fill segmentation into parts
//! 5. Moment invariant computation per part
//! 6. Fixed-range classification
//! 7. Word assembly and annotation
//!
//! # Example
//!
//! ```
//! use logomark::recog::{DiscardSink, Recognizer};
//! use logomark::Pix;
//!
//! let input = Pix::new(320, 240).unwrap();
//! let recognition = Recognizer::new(input).recognize(&mut DiscardSink).unwrap();
//! assert!(recognition.words.is_empty());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use logomark_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use logomark_color as color;
pub use logomark_filter as filter;
pub use logomark_recog as recog;
pub use logomark_region as region;
