//! The recognition pipeline
//!
//! Runs the full image-to-classification pass: smoothing, HSV
//! conversion, thresholding, segmentation, moment computation,
//! classification, and word assembly. Every stage fully consumes its
//! input before the next stage starts, and each intermediate buffer is
//! handed to the caller's [`StageSink`] for persistence; the core never
//! touches the filesystem.

use crate::assemble::{assemble_words, draw_word_boxes};
use crate::classify::{Classification, GlyphClass, classify};
use crate::error::RecogResult;
use crate::moments::MomentInvariants;
use logomark_color::{pix_convert_rgb_to_hsv, threshold_bands};
use logomark_core::{Boxa, Color, Pix};
use logomark_filter::smooth;
use logomark_region::{DEFAULT_TAG_SEED, Part, segment};

/// Identifies an intermediate buffer handed to a [`StageSink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Output of the lowpass filter
    Smoothed,
    /// Binary foreground buffer
    Thresholded,
    /// Components recolored with their tags
    Segmented,
    /// Input image with word rectangles drawn
    Annotated,
}

/// Receives each stage buffer as it is produced.
///
/// Implementations typically persist the buffers keyed by
/// [`Pix::name`]; the pipeline itself does no I/O.
pub trait StageSink {
    fn accept(&mut self, stage: Stage, pix: &Pix);
}

/// A sink that drops every buffer
#[derive(Debug, Default)]
pub struct DiscardSink;

impl StageSink for DiscardSink {
    fn accept(&mut self, _stage: Stage, _pix: &Pix) {}
}

/// One segmented part with its computed shape data
#[derive(Debug, Clone)]
pub struct Candidate {
    /// The underlying region
    pub part: Part,
    /// Shape descriptors, computed once
    pub invariants: MomentInvariants,
    /// Classification outcome
    pub classification: Classification,
}

/// Counts summarizing one recognition pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecognitionReport {
    /// Parts matched as the leading glyph
    pub leading: usize,
    /// Parts matched as the middle glyph
    pub middle: usize,
    /// Parts matched as the trailing glyph
    pub trailing: usize,
    /// Parts matching several classes at once
    pub ambiguous: usize,
    /// Parts matching no class
    pub unrecognized: usize,
    /// Regions removed by the speckle filter
    pub discarded_regions: usize,
    /// Leading glyphs left without a trailing partner
    pub unpaired_leading: usize,
    /// Trailing glyphs left without a leading partner
    pub unpaired_trailing: usize,
}

/// Result of one recognition pass
#[derive(Debug)]
pub struct Recognition {
    /// Input image with one rectangle drawn per detected word
    pub annotated: Pix,
    /// Segmentation buffer with unmatched parts blacked out
    pub recognition: Pix,
    /// The detected word rectangles
    pub words: Boxa,
    /// Every surviving part with its invariants and label
    pub candidates: Vec<Candidate>,
    /// Summary counts
    pub report: RecognitionReport,
}

/// Single-pass glyph recognizer
///
/// Owns the input buffer for the duration of the pass; parts and
/// buffers do not survive past one call to [`Recognizer::recognize`].
#[derive(Debug)]
pub struct Recognizer {
    input: Pix,
    seed: u64,
}

impl Recognizer {
    /// Create a recognizer for one input image.
    pub fn new(input: Pix) -> Self {
        Self {
            input,
            seed: DEFAULT_TAG_SEED,
        }
    }

    /// Override the tag color seed for this run.
    ///
    /// Component membership never depends on the seed, only the
    /// cosmetic tag colors past the first three components do.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Run the full pipeline.
    ///
    /// # Errors
    ///
    /// Fails if the input is smaller than the smoothing kernel or if a
    /// stage produces structurally invalid data; no partial results are
    /// handed out on failure.
    pub fn recognize(&self, sink: &mut dyn StageSink) -> RecogResult<Recognition> {
        let smoothed = smooth(&self.input)?;
        sink.accept(Stage::Smoothed, &smoothed);

        let hsv = pix_convert_rgb_to_hsv(&smoothed)?;
        let binary = threshold_bands(&hsv)?;
        sink.accept(Stage::Thresholded, &binary);

        let seg = segment(&binary, self.seed)?;
        sink.accept(Stage::Segmented, &seg.pix);

        let mut candidates = Vec::with_capacity(seg.parts.len());
        for part in seg.parts {
            let invariants = MomentInvariants::from_pixels(part.pixels())?;
            let classification = classify(&invariants);
            candidates.push(Candidate {
                part,
                invariants,
                classification,
            });
        }

        // Parts that matched nothing (or several things) are noise as
        // far as the output is concerned; black them out.
        let mut recog = seg.pix.to_mut();
        for cand in &candidates {
            if !matches!(cand.classification, Classification::Match(_)) {
                for &(x, y) in cand.part.pixels() {
                    recog.set_pixel_unchecked(x, y, Color::BLACK.to_pixel());
                }
            }
        }
        let recognition: Pix = recog.into();

        let mut report = RecognitionReport {
            discarded_regions: seg.discarded,
            ..Default::default()
        };

        let mut leading_boxes = Vec::new();
        let mut trailing_boxes = Vec::new();
        for cand in &candidates {
            match &cand.classification {
                Classification::Match(GlyphClass::Leading) => {
                    report.leading += 1;
                    if let Some(b) = cand.part.bounding_box() {
                        leading_boxes.push(b);
                    }
                }
                Classification::Match(GlyphClass::Middle) => report.middle += 1,
                Classification::Match(GlyphClass::Trailing) => {
                    report.trailing += 1;
                    if let Some(b) = cand.part.bounding_box() {
                        trailing_boxes.push(b);
                    }
                }
                Classification::Ambiguous(_) => report.ambiguous += 1,
                Classification::Unrecognized => report.unrecognized += 1,
            }
        }

        let assembly = assemble_words(&leading_boxes, &trailing_boxes);
        report.unpaired_leading = assembly.unpaired_leading;
        report.unpaired_trailing = assembly.unpaired_trailing;

        let mut annotated = self.input.to_mut();
        draw_word_boxes(&mut annotated, &assembly.words);
        let annotated: Pix = annotated.into();
        sink.accept(Stage::Annotated, &annotated);

        Ok(Recognition {
            annotated,
            recognition,
            words: assembly.words,
            candidates,
            report,
        })
    }
}
