//! Grids built from plain colours.
//!
//! A two-row grid `[avg, diff]` reconstructs to `avg + diff * cos(pi*y)`,
//! which is `avg + diff` at the top and `avg - diff` at the bottom. Setting
//! `avg = (top + bottom) / 2` and `diff = (top - bottom) / 2` gives a smooth
//! vertical gradient between two colours (or two horizontal profiles).
//! Horizontal gradients are the transposed construction, and a four-corner
//! blend stacks two horizontal gradients vertically.

use crate::error::{GridError, GridResult};
use crate::grid::{check_components, CoefficientGrid};
use crate::rgb::Rgb;

impl CoefficientGrid {
    /// 1x1 grid of a single linear colour.
    pub fn from_colour(colour: Rgb) -> Self {
        Self::from_parts(1, 1, vec![colour])
    }

    /// Two-row gradient between two single-row profiles.
    ///
    /// Profiles of different widths are zero-padded to the wider one.
    fn stack_profiles(top: &[Rgb], bottom: &[Rgb]) -> Self {
        let width = top.len().max(bottom.len());
        let at = |row: &[Rgb], i: usize| row.get(i).copied().unwrap_or(Rgb::ZERO);
        Self::from_fn(width, 2, |row, col| {
            let (t, b) = (at(top, col), at(bottom, col));
            if row == 0 { (t + b) / 2.0 } else { (t - b) / 2.0 }
        })
    }

    /// Blends two single-row grids from top to bottom.
    ///
    /// # Errors
    ///
    /// [`GridError::PreconditionViolation`] if either input has more than
    /// one vertical component.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blurkit_core::{CoefficientGrid, Rgb};
    ///
    /// let red = CoefficientGrid::from_colour(Rgb::new(1.0, 0.0, 0.0));
    /// let blue = CoefficientGrid::from_colour(Rgb::new(0.0, 0.0, 1.0));
    /// let grid = CoefficientGrid::blending_top(&red, &blue)?;
    /// assert_eq!(grid[(0, 0)], Rgb::new(0.5, 0.0, 0.5));
    /// assert_eq!(grid[(1, 0)], Rgb::new(0.5, 0.0, -0.5));
    /// # Ok::<(), blurkit_core::GridError>(())
    /// ```
    pub fn blending_top(top: &Self, bottom: &Self) -> GridResult<Self> {
        for (name, grid) in [("top", top), ("bottom", bottom)] {
            if grid.vertical_components() != 1 {
                return Err(GridError::PreconditionViolation(format!(
                    "{name} grid must have one vertical component, has {}",
                    grid.vertical_components()
                )));
            }
        }
        Ok(Self::stack_profiles(top.row(0), bottom.row(0)))
    }

    /// Blends two single-column grids from left to right.
    ///
    /// # Errors
    ///
    /// [`GridError::PreconditionViolation`] if either input has more than
    /// one horizontal component.
    pub fn blending_left(left: &Self, right: &Self) -> GridResult<Self> {
        for (name, grid) in [("left", left), ("right", right)] {
            if grid.horizontal_components() != 1 {
                return Err(GridError::PreconditionViolation(format!(
                    "{name} grid must have one horizontal component, has {}",
                    grid.horizontal_components()
                )));
            }
        }
        let top = left.transposed();
        let bottom = right.transposed();
        Ok(Self::stack_profiles(top.row(0), bottom.row(0)).transposed())
    }

    /// Vertical gradient from `top` to `bottom`.
    pub fn blending_top_colours(top: Rgb, bottom: Rgb) -> Self {
        Self::stack_profiles(&[top], &[bottom])
    }

    /// Horizontal gradient from `left` to `right`.
    pub fn blending_left_colours(left: Rgb, right: Rgb) -> Self {
        Self::stack_profiles(&[left], &[right]).transposed()
    }

    /// Bilinear-like blend of four corner colours.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blurkit_core::{CoefficientGrid, Rgb};
    ///
    /// let (tl, tr) = (Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 1.0, 0.0));
    /// let (bl, br) = (Rgb::new(0.0, 0.0, 1.0), Rgb::ONE);
    /// let grid = CoefficientGrid::blending_corners(tl, tr, bl, br);
    /// assert_eq!(grid.dimensions(), (2, 2));
    /// assert!((grid.top_right_corner().g - 1.0).abs() < 1e-5);
    /// ```
    pub fn blending_corners(top_left: Rgb, top_right: Rgb, bottom_left: Rgb, bottom_right: Rgb) -> Self {
        let top = Self::blending_left_colours(top_left, top_right);
        let bottom = Self::blending_left_colours(bottom_left, bottom_right);
        Self::stack_profiles(top.row(0), bottom.row(0))
    }

    /// Projects a left-to-right series of colours onto the first
    /// `components` horizontal cosine bases.
    ///
    /// Colour `x` of `n` is placed at position `x / (n - 1)`, and
    ///
    /// ```text
    /// c[i] = norm(i) / n * sum_x colours[x] * cos(pi * i * x / (n - 1))
    /// norm(0) = 1, norm(i > 0) = 2
    /// ```
    ///
    /// A single colour has no variation and yields a flat grid.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidComponentCount`] if `components` is outside `1..=9`
    /// - [`GridError::PreconditionViolation`] if `colours` is empty
    pub fn from_horizontal_colours(colours: &[Rgb], components: usize) -> GridResult<Self> {
        check_components(components, 1)?;
        let n = colours.len();
        if n == 0 {
            return Err(GridError::PreconditionViolation(
                "horizontal colour series is empty".to_string(),
            ));
        }
        if n == 1 {
            return Ok(Self::from_fn(components, 1, |_, col| {
                if col == 0 { colours[0] } else { Rgb::ZERO }
            }));
        }

        let span = (n - 1) as f32;
        Ok(Self::from_fn(components, 1, |_, i| {
            let norm = if i == 0 { 1.0 } else { 2.0 };
            let sum: Rgb = colours
                .iter()
                .enumerate()
                .map(|(x, &c)| c * (std::f32::consts::PI * i as f32 * x as f32 / span).cos())
                .sum();
            sum * (norm / n as f32)
        }))
    }
}
