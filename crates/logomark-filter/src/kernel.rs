//! Convolution kernels
//!
//! Defines the kernel structure for image convolution. Kernels are
//! odd-sized so every output pixel has a well-defined center sample.

use crate::{FilterError, FilterResult};

/// A 2D convolution kernel
#[derive(Debug, Clone)]
pub struct Kernel {
    /// Width of the kernel (odd)
    width: u32,
    /// Height of the kernel (odd)
    height: u32,
    /// Kernel weights (row-major order)
    data: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from a slice of weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if either dimension is even
    /// or zero, or if the slice length does not match the dimensions.
    pub fn from_slice(width: u32, height: u32, data: &[f32]) -> FilterResult<Self> {
        if width == 0 || height == 0 || width % 2 == 0 || height % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be odd and non-zero: {}x{}",
                width, height
            )));
        }
        if data.len() != (width as usize) * (height as usize) {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} weights for a {}x{} kernel, got {}",
                width * height,
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data: data.to_vec(),
        })
    }

    /// Create the fixed 3x3 lowpass kernel used for noise smoothing.
    ///
    /// The eight neighbors are weighted 1/10 each and the center 2/10,
    /// so the weights sum to 1 and the filter preserves flat regions.
    pub fn lowpass_3x3() -> Self {
        const N: f32 = 0.1;
        Self {
            width: 3,
            height: 3,
            data: vec![N, N, N, N, 2.0 * N, N, N, N, N],
        }
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.width / 2
    }

    /// Get the center Y coordinate.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.height / 2
    }

    /// Get the kernel weights.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get the weight at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_validates_geometry() {
        assert!(Kernel::from_slice(2, 3, &[0.0; 6]).is_err());
        assert!(Kernel::from_slice(3, 0, &[]).is_err());
        assert!(Kernel::from_slice(3, 3, &[0.0; 8]).is_err());
        assert!(Kernel::from_slice(3, 3, &[0.0; 9]).is_ok());
    }

    #[test]
    fn test_lowpass_weights_sum_to_one() {
        let k = Kernel::lowpass_3x3();
        let sum: f32 = k.data().iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert_eq!(k.get(1, 1), Some(0.2));
        assert_eq!(k.get(0, 2), Some(0.1));
        assert_eq!(k.get(3, 0), None);
    }

    #[test]
    fn test_center() {
        let k = Kernel::lowpass_3x3();
        assert_eq!((k.center_x(), k.center_y()), (1, 1));
    }
}
