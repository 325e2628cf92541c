//! Normalized moment invariants
//!
//! Treats a part's pixel set as a uniform-density binary shape and
//! derives four scalars that are invariant under translation, scaling,
//! and rotation. Central moments are taken about the centroid and
//! normalized by the pixel count raised to `1 + (p + q) / 2`, which
//! removes scale; the invariant combinations then remove rotation.

use crate::error::{RecogError, RecogResult};

/// The four shape descriptors used for glyph classification
///
/// Conventional indices 1, 2, 4, and 7 of the normalized-moment
/// invariant family; indices 3, 5, and 6 separate these glyph classes
/// poorly and are not computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentInvariants {
    /// Spread: eta20 + eta02
    pub m1: f64,
    /// Directional imbalance: (eta20 - eta02)^2 + 4 * eta11^2
    pub m2: f64,
    /// Third-order asymmetry: (eta30 + eta12)^2 + (eta21 + eta03)^2
    pub m4: f64,
    /// Second-order determinant: eta20 * eta02 - eta11^2
    pub m7: f64,
}

impl MomentInvariants {
    /// Compute the invariants of a pixel set.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::EmptyShape`] for an empty set; the speckle
    /// filter makes that structurally impossible in the pipeline, but
    /// the guard keeps NaN out of the classifier if a caller slips.
    pub fn from_pixels(pixels: &[(u32, u32)]) -> RecogResult<Self> {
        if pixels.is_empty() {
            return Err(RecogError::EmptyShape);
        }

        let n = pixels.len() as f64;

        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        for &(x, y) in pixels {
            sum_x += x as f64;
            sum_y += y as f64;
        }
        let cx = sum_x / n;
        let cy = sum_y / n;

        let mut mu20 = 0.0;
        let mut mu02 = 0.0;
        let mut mu11 = 0.0;
        let mut mu30 = 0.0;
        let mut mu03 = 0.0;
        let mut mu21 = 0.0;
        let mut mu12 = 0.0;

        for &(x, y) in pixels {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            mu20 += dx * dx;
            mu02 += dy * dy;
            mu11 += dx * dy;
            mu30 += dx * dx * dx;
            mu03 += dy * dy * dy;
            mu21 += dx * dx * dy;
            mu12 += dx * dy * dy;
        }

        // eta_pq = mu_pq / n^(1 + (p + q) / 2)
        let n2 = n * n;
        let n25 = n2 * n.sqrt();

        let eta20 = mu20 / n2;
        let eta02 = mu02 / n2;
        let eta11 = mu11 / n2;
        let eta30 = mu30 / n25;
        let eta03 = mu03 / n25;
        let eta21 = mu21 / n25;
        let eta12 = mu12 / n25;

        Ok(Self {
            m1: eta20 + eta02,
            m2: (eta20 - eta02).powi(2) + 4.0 * eta11.powi(2),
            m4: (eta30 + eta12).powi(2) + (eta21 + eta03).powi(2),
            m7: eta20 * eta02 - eta11.powi(2),
        })
    }
}
