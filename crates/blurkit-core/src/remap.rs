//! Brightness remapping.
//!
//! # Darken and lighten
//!
//! [`darken`](CoefficientGrid::darken) scales the average by `1 - f` and the
//! detail by `1 - f^2`, so detail fades more slowly than the mean.
//! [`lighten`](CoefficientGrid::lighten) is a darken performed on the
//! inverted image (`white - grid`) with a quartic falloff on the detail.
//!
//! # Setting a target brightness
//!
//! Both strategies move the average luminance `L` to `L' = target^exponent`
//! and rescale the AC terms by the slope ratio of the brightness curve,
//! `(L' / L)^(exponent - 1)`. They differ in how the DC term is moved:
//!
//! - multiplying: `dc * L' / L`, well behaved as `L -> 0`, unbounded as `L -> 1`
//! - screening: `1 - (1 - dc) * (1 - L') / (1 - L)`, the mirror image
//!
//! [`set_brightness`](CoefficientGrid::set_brightness) multiplies when
//! darkening and screens when lightening, so neither singularity is reached.

use tracing::trace;

use crate::grid::CoefficientGrid;
use crate::metrics::{brightness_exponent, brightness_to_luminance};
use crate::rgb::Rgb;

/// Target luminance and the AC slope ratio for a brightness change.
struct Rescale {
    luminance: f32,
    new_luminance: f32,
    ac_scale: f32,
}

impl Rescale {
    fn new(grid: &CoefficientGrid, target: f32, midpoint: f32) -> Self {
        let exponent = brightness_exponent(midpoint);
        let luminance = grid.luminance();
        let new_luminance = brightness_to_luminance(target, midpoint);
        let derivative = luminance.powf(exponent - 1.0);
        let new_derivative = new_luminance.powf(exponent - 1.0);
        // A black average has no slope to match; its detail is dropped.
        let ratio = new_derivative / derivative;
        let ac_scale = if luminance > 0.0 && ratio.is_finite() { ratio } else { 0.0 };
        Self {
            luminance,
            new_luminance,
            ac_scale,
        }
    }
}

impl CoefficientGrid {
    fn white() -> Self {
        Self::from_colour(Rgb::ONE)
    }

    /// Darkens by `factor` in [0, 1]: `dc * (1 - f) + ac * (1 - f^2)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blurkit_core::{CoefficientGrid, Rgb};
    ///
    /// let grid = CoefficientGrid::from_colour(Rgb::splat(0.8));
    /// assert_eq!(grid.darken(0.5).average(), Rgb::splat(0.4));
    /// ```
    pub fn darken(&self, factor: f32) -> Self {
        self.dc() * (1.0 - factor) + self.ac() * (1.0 - factor * factor)
    }

    /// Darken with a quartic falloff on the detail.
    fn darken_quartic(&self, factor: f32) -> Self {
        self.dc() * (1.0 - factor) + self.ac() * (1.0 - factor.powi(4))
    }

    /// Lightens by `factor` in [0, 1], pulling the image toward white.
    pub fn lighten(&self, factor: f32) -> Self {
        let white = Self::white();
        &white - (&white - self).darken_quartic(factor)
    }

    /// Mirrors the brightness of the average colour around 0.5.
    pub fn invert_brightness(&self, midpoint: f32) -> Self {
        self.set_brightness(1.0 - self.brightness(midpoint), midpoint)
    }

    /// Moves the average to brightness `target` by scaling the DC term.
    ///
    /// Diverges when the current luminance approaches 1 and the target is
    /// brighter; prefer [`set_brightness`](Self::set_brightness). A black
    /// average is left in place.
    pub fn set_brightness_by_multiplying(&self, target: f32, midpoint: f32) -> Self {
        let r = Rescale::new(self, target, midpoint);
        if r.luminance <= 0.0 {
            trace!(target, "black average cannot be scaled");
            return self.dc() + self.ac() * r.ac_scale;
        }
        let dc_scale = r.new_luminance / r.luminance;
        self.dc() * dc_scale + self.ac() * r.ac_scale
    }

    /// Moves the average to brightness `target` by screening the DC term
    /// toward white.
    ///
    /// Diverges when the current luminance approaches 0 and the target is
    /// darker; prefer [`set_brightness`](Self::set_brightness).
    pub fn set_brightness_by_screening(&self, target: f32, midpoint: f32) -> Self {
        let r = Rescale::new(self, target, midpoint);
        // 1 - (1 - L) * c = L'
        let c = (1.0 - r.new_luminance) / (1.0 - r.luminance);
        let white = Self::white();
        let dc = &white - (&white - self.dc()) * c;
        dc + self.ac() * r.ac_scale
    }

    /// Moves the average colour to perceptual brightness `target`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blurkit_core::{CoefficientGrid, Rgb};
    /// use blurkit_core::metrics::DEFAULT_MIDPOINT;
    ///
    /// let grid = CoefficientGrid::blending_top_colours(Rgb::splat(0.1), Rgb::splat(0.6));
    /// let brighter = grid.set_brightness(0.8, DEFAULT_MIDPOINT);
    /// assert!((brighter.brightness(DEFAULT_MIDPOINT) - 0.8).abs() < 1e-4);
    /// ```
    pub fn set_brightness(&self, target: f32, midpoint: f32) -> Self {
        let current = self.brightness(midpoint);
        if target < current {
            trace!(current, target, "darkening by multiplying");
            self.set_brightness_by_multiplying(target, midpoint)
        } else {
            trace!(current, target, "lightening by screening");
            self.set_brightness_by_screening(target, midpoint)
        }
    }
}
