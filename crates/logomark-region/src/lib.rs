//! logomark-region - Connected-component segmentation
//!
//! This crate partitions the binary foreground into connected regions:
//!
//! - [`segment`] - raster scan plus breadth-first flood fill over the
//!   4-neighborhood, one [`Part`] per region
//! - [`Part`] - a region's tag color, pixel set, and bounding box
//! - [`TagColors`] - deterministic per-run tag color generation
//!
//! # Examples
//!
//! ```
//! use logomark_color::FOREGROUND;
//! use logomark_core::Pix;
//! use logomark_region::{DEFAULT_TAG_SEED, segment};
//!
//! // A 20x20 buffer with a 10x10 white square
//! let mut pm = Pix::new(20, 20).unwrap().try_into_mut().unwrap();
//! for y in 5..15 {
//!     for x in 5..15 {
//!         pm.set_pixel_unchecked(x, y, FOREGROUND);
//!     }
//! }
//! let binary: Pix = pm.into();
//!
//! let seg = segment(&binary, DEFAULT_TAG_SEED).unwrap();
//! assert_eq!(seg.parts.len(), 1);
//! assert_eq!(seg.parts[0].len(), 100);
//! ```

mod error;
pub mod part;
pub mod segment;
pub mod tag;

pub use error::{RegionError, RegionResult};
pub use part::Part;
pub use segment::{MIN_PART_PIXELS, Segmentation, segment};
pub use tag::{DEFAULT_TAG_SEED, TagColors};
