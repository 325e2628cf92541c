//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//! Bounds-checked accessors return `Option` / `Result`; the unchecked
//! variants index directly and are meant for inner loops that have
//! already validated their ranges.

use super::{Color, Pix, PixMut};
use crate::error::{Error, Result};

impl Pix {
    /// Get the packed pixel word at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get the packed pixel word without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[(y as usize) * (self.width() as usize) + x as usize]
    }

    /// Get the RGB samples at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(crate::color::extract_rgb)
    }
}

impl PixMut {
    /// Get the packed pixel word at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get the packed pixel word without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[(y as usize) * (self.width() as usize) + x as usize]
    }

    /// Get the RGB samples at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(crate::color::extract_rgb)
    }

    /// Set the packed pixel word at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordinateOutOfBounds`] if (x, y) is outside the
    /// image.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::CoordinateOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set the packed pixel word without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let w = self.width() as usize;
        self.data_mut()[(y as usize) * w + x as usize] = val;
    }

    /// Set the RGB samples at (x, y).
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, crate::color::compose_rgb(r, g, b))
    }

    /// Set the pixel at (x, y) to a [`Color`].
    pub fn set_color(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        self.set_pixel(x, y, color.to_pixel())
    }
}
