//! Tag color generation
//!
//! Each connected component gets a distinct color in the segmentation
//! buffer. The first three components use pure red, green, and blue;
//! later components draw pseudorandom colors from a generator seeded
//! per run, so a run is reproducible. Pure white and pure black are
//! never produced: white is the not-yet-claimed marker during flood
//! fill, and black marks discarded regions.

use logomark_core::Color;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Seed used when the caller does not supply one
pub const DEFAULT_TAG_SEED: u64 = 0;

/// Per-run tag color generator
#[derive(Debug)]
pub struct TagColors {
    rng: StdRng,
    index: usize,
}

impl TagColors {
    /// Create a generator for one segmentation run.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            index: 0,
        }
    }

    /// Produce the tag color for the next component.
    pub fn next_color(&mut self) -> Color {
        const FIRST: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];

        let color = if self.index < FIRST.len() {
            FIRST[self.index]
        } else {
            loop {
                let candidate = Color::new(
                    self.rng.random::<u8>(),
                    self.rng.random::<u8>(),
                    self.rng.random::<u8>(),
                );
                if candidate != Color::WHITE && candidate != Color::BLACK {
                    break candidate;
                }
            }
        };

        self.index += 1;
        color
    }
}
