//! Graphics rendering
//!
//! Drawing primitives used for annotation output: the [`Color`] type and
//! axis-aligned rectangle outlines. Coordinates are clipped to the image,
//! so callers may pass boxes that extend past the edges.

use super::PixMut;
use crate::box_::Box;

/// RGB color for rendering and region tagging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// White color
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Red color
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    /// Green color
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    /// Blue color
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    /// Compose as a packed 32-bit pixel word
    #[inline]
    pub const fn to_pixel(self) -> u32 {
        crate::color::compose_rgb(self.r, self.g, self.b)
    }

    /// Extract from a packed 32-bit pixel word
    #[inline]
    pub const fn from_pixel(pixel: u32) -> Self {
        let (r, g, b) = crate::color::extract_rgb(pixel);
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl PixMut {
    /// Draw a 1-pixel-wide rectangle outline.
    ///
    /// The outline follows the box perimeter: rows `y` and `y + h - 1`,
    /// columns `x` and `x + w - 1`. Parts of the outline outside the
    /// image are skipped. Empty boxes draw nothing.
    pub fn draw_box_outline(&mut self, b: &Box, color: Color) {
        if b.w <= 0 || b.h <= 0 {
            return;
        }

        let word = color.to_pixel();
        let width = self.width() as i32;
        let height = self.height() as i32;

        let x0 = b.x.max(0);
        let x1 = (b.right() - 1).min(width - 1);
        let y0 = b.y.max(0);
        let y1 = (b.bottom() - 1).min(height - 1);

        if x0 > x1 || y0 > y1 {
            return;
        }

        for x in x0..=x1 {
            if b.y >= 0 && b.y < height {
                self.set_pixel_unchecked(x as u32, b.y as u32, word);
            }
            let yb = b.bottom() - 1;
            if yb >= 0 && yb < height {
                self.set_pixel_unchecked(x as u32, yb as u32, word);
            }
        }
        for y in y0..=y1 {
            if b.x >= 0 && b.x < width {
                self.set_pixel_unchecked(b.x as u32, y as u32, word);
            }
            let xr = b.right() - 1;
            if xr >= 0 && xr < width {
                self.set_pixel_unchecked(xr as u32, y as u32, word);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pix::Pix;

    #[test]
    fn test_color_pixel_round_trip() {
        let c = Color::new(17, 99, 201);
        assert_eq!(Color::from_pixel(c.to_pixel()), c);
    }

    #[test]
    fn test_outline_perimeter_only() {
        let pix = Pix::new(10, 10).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.draw_box_outline(&Box::new_unchecked(2, 3, 4, 3), Color::GREEN);
        let pix: Pix = pm.into();

        // Corners and edges are painted
        assert_eq!(pix.get_rgb(2, 3), Some((0, 255, 0)));
        assert_eq!(pix.get_rgb(5, 3), Some((0, 255, 0)));
        assert_eq!(pix.get_rgb(2, 5), Some((0, 255, 0)));
        assert_eq!(pix.get_rgb(5, 5), Some((0, 255, 0)));
        assert_eq!(pix.get_rgb(3, 3), Some((0, 255, 0)));
        assert_eq!(pix.get_rgb(2, 4), Some((0, 255, 0)));

        // Interior and exterior stay black
        assert_eq!(pix.get_rgb(3, 4), Some((0, 0, 0)));
        assert_eq!(pix.get_rgb(1, 3), Some((0, 0, 0)));
        assert_eq!(pix.get_rgb(6, 6), Some((0, 0, 0)));
    }

    #[test]
    fn test_outline_clipped_at_edges() {
        let pix = Pix::new(5, 5).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.draw_box_outline(&Box::new_unchecked(-2, -2, 6, 6), Color::RED);
        let pix: Pix = pm.into();

        // Only the visible right and bottom edges land in the image
        assert_eq!(pix.get_rgb(3, 0), Some((255, 0, 0)));
        assert_eq!(pix.get_rgb(0, 3), Some((255, 0, 0)));
        assert_eq!(pix.get_rgb(0, 0), Some((0, 0, 0)));
    }
}
