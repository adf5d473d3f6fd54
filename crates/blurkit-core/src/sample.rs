//! Reconstruction of colours from coefficients.
//!
//! The grid is an inverse DCT evaluated at continuous coordinates. Positions
//! are normalized: `x` runs 0 (left) to 1 (right), `y` runs 0 (top) to 1
//! (bottom).
//!
//! # Point sampling
//!
//! ```text
//! rgb(x, y) = sum_j sum_i c[j][i] * cos(pi*i*x) * cos(pi*j*y)
//! ```
//!
//! # Area sampling
//!
//! The average of `cos(pi*i*x)` over `[x0, x1]` has a closed form, so the mean
//! colour of a rectangle is the same sum with each cosine replaced by its
//! box average:
//!
//! ```text
//! h(i) = 1                                                 if i == 0
//!      = (sin(pi*i*x1) - sin(pi*i*x0)) / (pi*i*(x1 - x0))   otherwise
//! ```
//!
//! A zero-extent axis has no defined box average; its factor falls back to
//! the cosine at that coordinate, which is the limit of the formula. A
//! rectangle collapsed on both axes is therefore a point sample.

use std::f32::consts::PI;

use tracing::trace;

use crate::grid::{CoefficientGrid, MAX_COMPONENTS};
use crate::rgb::Rgb;

/// Extents below this are treated as zero when box-averaging.
const MIN_EXTENT: f32 = 1e-6;

/// A region of the image to reconstruct a colour for.
///
/// Named edges and corners are provided as constants.
///
/// # Example
///
/// ```rust
/// use blurkit_core::{CoefficientGrid, Region, Rgb};
///
/// let grid = CoefficientGrid::blending_left_colours(Rgb::ZERO, Rgb::ONE);
/// let left = grid.sample(Region::LEFT_EDGE);
/// assert!(left.luminance() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    /// The whole image. Reads the DC coefficient directly.
    Whole,
    /// A single point.
    Point {
        /// Horizontal position in [0, 1]
        x: f32,
        /// Vertical position in [0, 1]
        y: f32,
    },
    /// The mean over the rectangle spanned by two corners.
    Area {
        /// Upper-left corner `(x0, y0)`
        from: (f32, f32),
        /// Lower-right corner `(x1, y1)`
        to: (f32, f32),
    },
    /// The profile at horizontal position `x`, reconstructed from the first
    /// row of coefficients only.
    AtX(f32),
    /// The profile at vertical position `y`, reconstructed from the first
    /// column of coefficients only.
    AtY(f32),
}

impl Region {
    /// Left edge, `AtX(0)`.
    pub const LEFT_EDGE: Self = Self::AtX(0.0);
    /// Right edge, `AtX(1)`.
    pub const RIGHT_EDGE: Self = Self::AtX(1.0);
    /// Top edge, `AtY(0)`.
    pub const TOP_EDGE: Self = Self::AtY(0.0);
    /// Bottom edge, `AtY(1)`.
    pub const BOTTOM_EDGE: Self = Self::AtY(1.0);
    /// Top-left corner point.
    pub const TOP_LEFT: Self = Self::Point { x: 0.0, y: 0.0 };
    /// Top-right corner point.
    pub const TOP_RIGHT: Self = Self::Point { x: 1.0, y: 0.0 };
    /// Bottom-left corner point.
    pub const BOTTOM_LEFT: Self = Self::Point { x: 0.0, y: 1.0 };
    /// Bottom-right corner point.
    pub const BOTTOM_RIGHT: Self = Self::Point { x: 1.0, y: 1.0 };

    /// Rectangle from an upper-left origin and a size.
    pub fn sized(origin: (f32, f32), size: (f32, f32)) -> Self {
        Self::Area {
            from: origin,
            to: (origin.0 + size.0, origin.1 + size.1),
        }
    }
}

/// `cos(pi*k*t)` for each frequency `k` below `n`.
fn cosine_factors(n: usize, t: f32) -> [f32; MAX_COMPONENTS] {
    let mut factors = [0.0; MAX_COMPONENTS];
    for (k, f) in factors.iter_mut().enumerate().take(n) {
        *f = (PI * k as f32 * t).cos();
    }
    factors
}

/// Box average of `cos(pi*k*t)` over `[t0, t1]` for each frequency below `n`.
fn box_factors(n: usize, t0: f32, t1: f32) -> [f32; MAX_COMPONENTS] {
    let extent = t1 - t0;
    if extent.abs() < MIN_EXTENT {
        trace!(t0, t1, "zero-extent axis, sampling cosine at midpoint");
        return cosine_factors(n, 0.5 * (t0 + t1));
    }

    // sin(a) - sin(b) = 2 cos((a+b)/2) sin((a-b)/2), free of cancellation
    // for narrow boxes.
    let mid = 0.5 * (t0 + t1);
    let mut factors = [0.0; MAX_COMPONENTS];
    factors[0] = 1.0;
    for (k, f) in factors.iter_mut().enumerate().take(n).skip(1) {
        let w = PI * k as f32;
        let half = 0.5 * w * extent;
        *f = (w * mid).cos() * half.sin() / half;
    }
    factors
}

impl CoefficientGrid {
    /// Sums every coefficient weighted by a separable horizontal/vertical factor.
    fn weighted_sum(
        &self,
        horizontal: &[f32; MAX_COMPONENTS],
        vertical: &[f32; MAX_COMPONENTS],
    ) -> Rgb {
        self.rows()
            .zip(vertical)
            .map(|(row, &v)| {
                row.iter()
                    .zip(horizontal)
                    .map(|(&c, &h)| c * (h * v))
                    .sum::<Rgb>()
            })
            .sum()
    }

    /// Linear colour at `(x, y)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blurkit_core::{CoefficientGrid, Rgb};
    ///
    /// let grid = CoefficientGrid::blending_top_colours(Rgb::ONE, Rgb::ZERO);
    /// assert!((grid.point_sample(0.3, 0.0).r - 1.0).abs() < 1e-6);
    /// assert!(grid.point_sample(0.3, 1.0).r.abs() < 1e-6);
    /// ```
    pub fn point_sample(&self, x: f32, y: f32) -> Rgb {
        let h = cosine_factors(self.horizontal_components(), x);
        let v = cosine_factors(self.vertical_components(), y);
        self.weighted_sum(&h, &v)
    }

    /// Mean linear colour over the rectangle from `(x0, y0)` to `(x1, y1)`.
    ///
    /// Corners may be given in either order. A zero-width or zero-height
    /// rectangle degrades to sampling the line (or point) it collapses to.
    pub fn area_sample(&self, from: (f32, f32), to: (f32, f32)) -> Rgb {
        let h = box_factors(self.horizontal_components(), from.0, to.0);
        let v = box_factors(self.vertical_components(), from.1, to.1);
        self.weighted_sum(&h, &v)
    }

    /// Mean linear colour over the rectangle at `origin` with `size`.
    pub fn area_sample_sized(&self, origin: (f32, f32), size: (f32, f32)) -> Rgb {
        self.area_sample(origin, (origin.0 + size.0, origin.1 + size.1))
    }

    /// Horizontal profile at `x`, from the first row of coefficients.
    pub fn sample_at_x(&self, x: f32) -> Rgb {
        let h = cosine_factors(self.horizontal_components(), x);
        self.row(0).iter().zip(&h).map(|(&c, &f)| c * f).sum()
    }

    /// Vertical profile at `y`, from the first column of coefficients.
    pub fn sample_at_y(&self, y: f32) -> Rgb {
        let v = cosine_factors(self.vertical_components(), y);
        self.rows().zip(&v).map(|(row, &f)| row[0] * f).sum()
    }

    /// Linear colour of `region`.
    pub fn sample(&self, region: Region) -> Rgb {
        match region {
            Region::Whole => self.average(),
            Region::Point { x, y } => self.point_sample(x, y),
            Region::Area { from, to } => self.area_sample(from, to),
            Region::AtX(x) => self.sample_at_x(x),
            Region::AtY(y) => self.sample_at_y(y),
        }
    }

    /// Left edge colour.
    pub fn left_edge(&self) -> Rgb {
        self.sample(Region::LEFT_EDGE)
    }

    /// Right edge colour.
    pub fn right_edge(&self) -> Rgb {
        self.sample(Region::RIGHT_EDGE)
    }

    /// Top edge colour.
    pub fn top_edge(&self) -> Rgb {
        self.sample(Region::TOP_EDGE)
    }

    /// Bottom edge colour.
    pub fn bottom_edge(&self) -> Rgb {
        self.sample(Region::BOTTOM_EDGE)
    }

    /// Top-left corner colour.
    pub fn top_left_corner(&self) -> Rgb {
        self.sample(Region::TOP_LEFT)
    }

    /// Top-right corner colour.
    pub fn top_right_corner(&self) -> Rgb {
        self.sample(Region::TOP_RIGHT)
    }

    /// Bottom-left corner colour.
    pub fn bottom_left_corner(&self) -> Rgb {
        self.sample(Region::BOTTOM_LEFT)
    }

    /// Bottom-right corner colour.
    pub fn bottom_right_corner(&self) -> Rgb {
        self.sample(Region::BOTTOM_RIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn textured() -> CoefficientGrid {
        CoefficientGrid::from_rows(vec![
            vec![Rgb::new(0.4, 0.3, 0.2), Rgb::new(0.1, -0.05, 0.0), Rgb::new(0.02, 0.0, -0.03)],
            vec![Rgb::new(-0.08, 0.04, 0.1), Rgb::new(0.03, 0.03, 0.03), Rgb::ZERO],
        ])
        .unwrap()
    }

    #[test]
    fn test_point_sample_matches_direct_sum() {
        let grid = textured();
        let (x, y) = (0.37, 0.81);
        let mut expected = Rgb::ZERO;
        for j in 0..2 {
            for i in 0..3 {
                let basis = (PI * i as f32 * x).cos() * (PI * j as f32 * y).cos();
                expected += grid[(j, i)] * basis;
            }
        }
        assert_abs_diff_eq!(grid.point_sample(x, y), expected, epsilon = 1e-6);
    }

    #[test]
    fn test_full_area_is_dc() {
        let grid = textured();
        assert_abs_diff_eq!(grid.area_sample((0.0, 0.0), (1.0, 1.0)), grid.average(), epsilon = 1e-6);
        assert_eq!(grid.sample(Region::Whole), grid.average());
    }

    #[test]
    fn test_zero_extent_area_is_point() {
        let grid = textured();
        for &(x, y) in &[(0.0, 0.0), (0.25, 0.75), (1.0, 0.5), (0.6, 1.0)] {
            assert_abs_diff_eq!(
                grid.area_sample((x, y), (x, y)),
                grid.point_sample(x, y),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn test_zero_width_area_is_vertical_line_mean() {
        let grid = textured();
        // Mean over the column x = 0.3 from y = 0 to 1 only keeps row 0.
        let line = grid.area_sample((0.3, 0.0), (0.3, 1.0));
        let mut expected = Rgb::ZERO;
        for i in 0..3 {
            expected += grid[(0, i)] * (PI * i as f32 * 0.3).cos();
        }
        assert_abs_diff_eq!(line, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_small_area_approaches_point() {
        let grid = textured();
        let area = grid.area_sample_sized((0.5, 0.5), (0.001, 0.001));
        assert_abs_diff_eq!(area, grid.point_sample(0.5005, 0.5005), epsilon = 1e-3);
    }

    #[test]
    fn test_narrow_area_continuous_across_cutoff() {
        let row: Vec<Rgb> = (0..MAX_COMPONENTS)
            .map(|i| Rgb::new(0.3, -0.2, 0.1) / (1 + i) as f32)
            .collect();
        let grid = CoefficientGrid::new(MAX_COMPONENTS, 1, row).unwrap();
        let x0 = 0.37;
        for extent in [1e-7, 5e-7, 9e-7, 1.1e-6, 2e-6, 5e-6, 1e-5, 1e-4] {
            let area = grid.area_sample((x0, 0.5), (x0 + extent, 0.5));
            let centre = grid.sample_at_x(x0 + 0.5 * extent);
            assert_abs_diff_eq!(area, centre, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_halves_average_to_whole() {
        let grid = textured();
        let left = grid.area_sample((0.0, 0.0), (0.5, 1.0));
        let right = grid.area_sample((0.5, 0.0), (1.0, 1.0));
        assert_abs_diff_eq!((left + right) / 2.0, grid.average(), epsilon = 1e-6);
    }

    #[test]
    fn test_reversed_corners() {
        let grid = textured();
        let a = grid.area_sample((0.2, 0.1), (0.7, 0.9));
        let b = grid.area_sample((0.7, 0.9), (0.2, 0.1));
        assert_abs_diff_eq!(a, b, epsilon = 1e-6);
    }

    #[test]
    fn test_edges_use_first_row_and_column() {
        let grid = textured();
        let dc = grid[(0, 0)];
        assert_abs_diff_eq!(grid.left_edge(), dc + grid[(0, 1)] + grid[(0, 2)], epsilon = 1e-6);
        assert_abs_diff_eq!(grid.right_edge(), dc - grid[(0, 1)] + grid[(0, 2)], epsilon = 1e-6);
        assert_abs_diff_eq!(grid.top_edge(), dc + grid[(1, 0)], epsilon = 1e-6);
        assert_abs_diff_eq!(grid.bottom_edge(), dc - grid[(1, 0)], epsilon = 1e-6);
    }

    #[test]
    fn test_corners() {
        let grid = textured();
        assert_eq!(grid.top_left_corner(), grid.point_sample(0.0, 0.0));
        assert_eq!(grid.top_right_corner(), grid.point_sample(1.0, 0.0));
        assert_eq!(grid.bottom_left_corner(), grid.point_sample(0.0, 1.0));
        assert_eq!(grid.bottom_right_corner(), grid.point_sample(1.0, 1.0));
    }

    #[test]
    fn test_region_sized() {
        assert_eq!(
            Region::sized((0.25, 0.5), (0.5, 0.25)),
            Region::Area {
                from: (0.25, 0.5),
                to: (0.75, 0.75)
            }
        );
    }
}
