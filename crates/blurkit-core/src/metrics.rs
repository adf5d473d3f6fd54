//! Luminance, perceptual brightness, and darkness classification.
//!
//! Brightness maps luminance through a power curve calibrated so that a
//! luminance equal to `midpoint` lands on brightness 0.5:
//!
//! ```text
//! exponent   = -log2(midpoint)
//! brightness = luminance ^ (1 / exponent)
//! ```
//!
//! Every metric works on a plain [`Rgb`] or on any [`Region`] of a grid.

use crate::grid::CoefficientGrid;
use crate::rgb::Rgb;
use crate::sample::Region;

/// Luminance that maps to brightness 0.5 unless stated otherwise.
pub const DEFAULT_MIDPOINT: f32 = 0.3;

/// Luminance below which a colour counts as dark.
pub const DEFAULT_DARK_THRESHOLD: f32 = 0.3;

/// Exponent of the brightness curve for `midpoint`.
#[inline]
pub fn brightness_exponent(midpoint: f32) -> f32 {
    -midpoint.log2()
}

/// Linear-light luminance, `0.299 r + 0.587 g + 0.114 b`.
#[inline]
pub fn luminance(rgb: Rgb) -> f32 {
    rgb.luminance()
}

/// Perceptual brightness of `rgb`.
///
/// # Example
///
/// ```rust
/// use blurkit_core::{metrics::brightness, Rgb};
///
/// let b = brightness(Rgb::splat(0.3), 0.3);
/// assert!((b - 0.5).abs() < 1e-5);
/// ```
#[inline]
pub fn brightness(rgb: Rgb, midpoint: f32) -> f32 {
    luminance_to_brightness(rgb.luminance(), midpoint)
}

/// Maps a luminance value onto the brightness curve.
#[inline]
pub fn luminance_to_brightness(luminance: f32, midpoint: f32) -> f32 {
    luminance.powf(1.0 / brightness_exponent(midpoint))
}

/// Inverse of [`luminance_to_brightness`].
#[inline]
pub fn brightness_to_luminance(brightness: f32, midpoint: f32) -> f32 {
    brightness.powf(brightness_exponent(midpoint))
}

/// True if the luminance of `rgb` is below `threshold`.
#[inline]
pub fn is_dark(rgb: Rgb, threshold: f32) -> bool {
    rgb.luminance() < threshold
}

impl CoefficientGrid {
    /// Luminance of the average colour.
    pub fn luminance(&self) -> f32 {
        self.average().luminance()
    }

    /// Brightness of the average colour.
    pub fn brightness(&self, midpoint: f32) -> f32 {
        brightness(self.average(), midpoint)
    }

    /// True if the average colour is darker than `threshold`.
    pub fn is_dark(&self, threshold: f32) -> bool {
        is_dark(self.average(), threshold)
    }

    /// Luminance of `region`.
    pub fn luminance_in(&self, region: Region) -> f32 {
        self.sample(region).luminance()
    }

    /// Brightness of `region`.
    pub fn brightness_in(&self, region: Region, midpoint: f32) -> f32 {
        brightness(self.sample(region), midpoint)
    }

    /// True if `region` is darker than `threshold`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blurkit_core::{CoefficientGrid, Region, Rgb};
    /// use blurkit_core::metrics::DEFAULT_DARK_THRESHOLD;
    ///
    /// let grid = CoefficientGrid::blending_top_colours(Rgb::ZERO, Rgb::ONE);
    /// assert!(grid.is_dark_in(Region::TOP_EDGE, DEFAULT_DARK_THRESHOLD));
    /// assert!(!grid.is_dark_in(Region::BOTTOM_EDGE, DEFAULT_DARK_THRESHOLD));
    /// ```
    pub fn is_dark_in(&self, region: Region, threshold: f32) -> bool {
        is_dark(self.sample(region), threshold)
    }

    /// Left edge darker than the default threshold.
    pub fn is_left_edge_dark(&self) -> bool {
        self.is_dark_in(Region::LEFT_EDGE, DEFAULT_DARK_THRESHOLD)
    }

    /// Right edge darker than the default threshold.
    pub fn is_right_edge_dark(&self) -> bool {
        self.is_dark_in(Region::RIGHT_EDGE, DEFAULT_DARK_THRESHOLD)
    }

    /// Top edge darker than the default threshold.
    pub fn is_top_edge_dark(&self) -> bool {
        self.is_dark_in(Region::TOP_EDGE, DEFAULT_DARK_THRESHOLD)
    }

    /// Bottom edge darker than the default threshold.
    pub fn is_bottom_edge_dark(&self) -> bool {
        self.is_dark_in(Region::BOTTOM_EDGE, DEFAULT_DARK_THRESHOLD)
    }

    /// Top-left corner darker than the default threshold.
    pub fn is_top_left_corner_dark(&self) -> bool {
        self.is_dark_in(Region::TOP_LEFT, DEFAULT_DARK_THRESHOLD)
    }

    /// Top-right corner darker than the default threshold.
    pub fn is_top_right_corner_dark(&self) -> bool {
        self.is_dark_in(Region::TOP_RIGHT, DEFAULT_DARK_THRESHOLD)
    }

    /// Bottom-left corner darker than the default threshold.
    pub fn is_bottom_left_corner_dark(&self) -> bool {
        self.is_dark_in(Region::BOTTOM_LEFT, DEFAULT_DARK_THRESHOLD)
    }

    /// Bottom-right corner darker than the default threshold.
    pub fn is_bottom_right_corner_dark(&self) -> bool {
        self.is_dark_in(Region::BOTTOM_RIGHT, DEFAULT_DARK_THRESHOLD)
    }
}
