//! logomark-recog - Shape classification and the recognition pipeline
//!
//! This crate turns segmented parts into labeled glyphs and word
//! rectangles:
//!
//! - [`MomentInvariants`] - translation/scale/rotation invariant shape
//!   descriptors
//! - [`classify`] - fixed-range rules mapping descriptors to the three
//!   glyph classes, with explicit ambiguity reporting
//! - [`assemble_words`] - pairing of leading and trailing glyph boxes
//!   into word rectangles
//! - [`Recognizer`] - the end-to-end pipeline, emitting every
//!   intermediate buffer through a [`StageSink`]
//!
//! # Quick start
//!
//! ```
//! use logomark_core::Pix;
//! use logomark_recog::{DiscardSink, Recognizer};
//!
//! let input = Pix::new(64, 48).unwrap();
//! let recognition = Recognizer::new(input).recognize(&mut DiscardSink).unwrap();
//! assert!(recognition.words.is_empty());
//! ```

pub mod assemble;
pub mod classify;
mod error;
pub mod moments;
pub mod pipeline;

pub use assemble::{WORD_BOX_COLOR, WordAssembly, assemble_words, draw_word_boxes};
pub use classify::{
    ClassRanges, Classification, GlyphClass, LEADING_RANGES, MIDDLE_RANGES, TRAILING_RANGES,
    classify, matching_classes, ranges,
};
pub use error::{RecogError, RecogResult};
pub use moments::MomentInvariants;
pub use pipeline::{
    Candidate, DiscardSink, Recognition, RecognitionReport, Recognizer, Stage, StageSink,
};
