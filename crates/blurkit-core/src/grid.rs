//! The coefficient grid data model.
//!
//! A [`CoefficientGrid`] holds the cosine-basis coefficients of an image as
//! linear-light [`Rgb`] triples, indexed by `(row, col)` where the row is the
//! vertical frequency `j` and the column is the horizontal frequency `i`.
//!
//! # Invariants
//!
//! - Rectangular, with `1..=9` columns and `1..=9` rows
//! - Coefficient `(0, 0)` (the DC term) is the average colour of the image
//! - Every other coefficient (AC) is an unconstrained real triple
//!
//! Grids are values: every operation in this crate returns a new grid.
//!
//! # Layout
//!
//! Coefficients are stored row-major in a flat buffer:
//!
//! ```text
//! index = row * horizontal_components + col
//! ```

use std::ops::Index;

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{GridError, GridResult};
use crate::rgb::Rgb;

/// Maximum number of components along either axis.
pub const MAX_COMPONENTS: usize = 9;

/// A 2D grid of linear-light cosine coefficients.
///
/// # Example
///
/// ```rust
/// use blurkit_core::{CoefficientGrid, Rgb};
///
/// let grid = CoefficientGrid::from_rows(vec![
///     vec![Rgb::splat(0.5), Rgb::new(0.1, 0.0, -0.1)],
/// ])?;
/// assert_eq!(grid.dimensions(), (2, 1));
/// assert_eq!(grid.average(), Rgb::splat(0.5));
/// # Ok::<(), blurkit_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vec<Rgb>>", into = "Vec<Vec<Rgb>>"))]
pub struct CoefficientGrid {
    horizontal: usize,
    vertical: usize,
    coefficients: Vec<Rgb>,
}

/// Checks that both component counts are within `1..=MAX_COMPONENTS`.
pub(crate) fn check_components(horizontal: usize, vertical: usize) -> GridResult<()> {
    let valid = 1..=MAX_COMPONENTS;
    if valid.contains(&horizontal) && valid.contains(&vertical) {
        Ok(())
    } else {
        Err(GridError::InvalidComponentCount {
            horizontal,
            vertical,
        })
    }
}

impl CoefficientGrid {
    /// Creates a grid from a row-major coefficient buffer.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidComponentCount`] if either count is outside `1..=9`
    /// - [`GridError::NonRectangular`] if the buffer length is not
    ///   `horizontal * vertical`
    pub fn new(horizontal: usize, vertical: usize, coefficients: Vec<Rgb>) -> GridResult<Self> {
        check_components(horizontal, vertical)?;
        if coefficients.len() != horizontal * vertical {
            // Report the first row that comes up short (or the overflow row).
            let row = (coefficients.len() / horizontal).min(vertical);
            let found = coefficients.len().saturating_sub(row * horizontal);
            return Err(GridError::NonRectangular {
                row,
                expected: horizontal,
                found,
            });
        }
        Ok(Self::from_parts(horizontal, vertical, coefficients))
    }

    /// Creates a grid from nested rows, `rows[row][col]`.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidComponentCount`] if there are no rows, no
    ///   columns, or more than 9 of either
    /// - [`GridError::NonRectangular`] if rows differ in length
    pub fn from_rows(rows: Vec<Vec<Rgb>>) -> GridResult<Self> {
        let vertical = rows.len();
        let horizontal = rows.first().map_or(0, Vec::len);
        check_components(horizontal, vertical)?;

        let mut coefficients = Vec::with_capacity(horizontal * vertical);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != horizontal {
                return Err(GridError::NonRectangular {
                    row,
                    expected: horizontal,
                    found: values.len(),
                });
            }
            coefficients.extend(values);
        }
        Ok(Self::from_parts(horizontal, vertical, coefficients))
    }

    /// Builds a grid whose shape the caller has already validated.
    #[inline]
    pub(crate) fn from_parts(horizontal: usize, vertical: usize, coefficients: Vec<Rgb>) -> Self {
        debug_assert!(check_components(horizontal, vertical).is_ok());
        debug_assert_eq!(coefficients.len(), horizontal * vertical);
        Self {
            horizontal,
            vertical,
            coefficients,
        }
    }

    /// Builds a grid by evaluating `f(row, col)` for every position.
    pub(crate) fn from_fn(
        horizontal: usize,
        vertical: usize,
        mut f: impl FnMut(usize, usize) -> Rgb,
    ) -> Self {
        let mut coefficients = Vec::with_capacity(horizontal * vertical);
        for row in 0..vertical {
            for col in 0..horizontal {
                coefficients.push(f(row, col));
            }
        }
        Self::from_parts(horizontal, vertical, coefficients)
    }

    /// Number of horizontal components (columns).
    #[inline]
    pub fn horizontal_components(&self) -> usize {
        self.horizontal
    }

    /// Number of vertical components (rows).
    #[inline]
    pub fn vertical_components(&self) -> usize {
        self.vertical
    }

    /// `(horizontal, vertical)` component counts.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.horizontal, self.vertical)
    }

    /// Coefficient at `(row, col)`, or `None` if out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb> {
        (row < self.vertical && col < self.horizontal)
            .then(|| self.coefficients[row * self.horizontal + col])
    }

    /// The DC coefficient, i.e. the average linear colour.
    #[inline]
    pub fn average(&self) -> Rgb {
        self.coefficients[0]
    }

    /// Row-major coefficient buffer.
    #[inline]
    pub fn as_slice(&self) -> &[Rgb] {
        &self.coefficients
    }

    /// Iterates over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> + '_ {
        self.coefficients.chunks_exact(self.horizontal)
    }

    /// Row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= vertical_components()`.
    #[inline]
    pub fn row(&self, row: usize) -> &[Rgb] {
        let start = row * self.horizontal;
        &self.coefficients[start..start + self.horizontal]
    }

    /// Copies the coefficients out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Rgb>> {
        self.rows().map(<[Rgb]>::to_vec).collect()
    }
}

/// Indexes by `(row, col)`.
impl Index<(usize, usize)> for CoefficientGrid {
    type Output = Rgb;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Rgb {
        assert!(
            row < self.vertical && col < self.horizontal,
            "coefficient ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.horizontal,
            self.vertical
        );
        &self.coefficients[row * self.horizontal + col]
    }
}

impl TryFrom<Vec<Vec<Rgb>>> for CoefficientGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Rgb>>) -> GridResult<Self> {
        Self::from_rows(rows)
    }
}

impl From<CoefficientGrid> for Vec<Vec<Rgb>> {
    fn from(grid: CoefficientGrid) -> Self {
        grid.to_rows()
    }
}

impl AbsDiffEq for CoefficientGrid {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .coefficients
                .iter()
                .zip(&other.coefficients)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for CoefficientGrid {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .coefficients
                .iter()
                .zip(&other.coefficients)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<Vec<Rgb>> {
        vec![
            vec![Rgb::splat(0.5), Rgb::new(0.1, 0.2, 0.3)],
            vec![Rgb::new(-0.1, 0.0, 0.1), Rgb::new(0.0, -0.2, 0.0)],
            vec![Rgb::new(0.05, 0.05, 0.05), Rgb::ZERO],
        ]
    }

    #[test]
    fn test_from_rows() {
        let grid = CoefficientGrid::from_rows(sample_rows()).unwrap();
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid[(1, 0)], Rgb::new(-0.1, 0.0, 0.1));
        assert_eq!(grid.get(0, 1), Some(Rgb::new(0.1, 0.2, 0.3)));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.to_rows(), sample_rows());
    }

    #[test]
    fn test_component_count_limits() {
        assert!(CoefficientGrid::new(9, 9, vec![Rgb::ZERO; 81]).is_ok());
        assert_eq!(
            CoefficientGrid::new(0, 1, vec![]),
            Err(GridError::InvalidComponentCount {
                horizontal: 0,
                vertical: 1
            })
        );
        assert_eq!(
            CoefficientGrid::new(1, 10, vec![Rgb::ZERO; 10]),
            Err(GridError::InvalidComponentCount {
                horizontal: 1,
                vertical: 10
            })
        );
        assert!(matches!(
            CoefficientGrid::from_rows(vec![]),
            Err(GridError::InvalidComponentCount { .. })
        ));
        assert!(matches!(
            CoefficientGrid::from_rows(vec![vec![]]),
            Err(GridError::InvalidComponentCount { .. })
        ));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let mut rows = sample_rows();
        rows[2].pop();
        assert_eq!(
            CoefficientGrid::from_rows(rows),
            Err(GridError::NonRectangular {
                row: 2,
                expected: 2,
                found: 1
            })
        );
        assert!(matches!(
            CoefficientGrid::new(3, 2, vec![Rgb::ZERO; 5]),
            Err(GridError::NonRectangular { row: 1, found: 2, .. })
        ));
    }

    #[test]
    fn test_rows_iter() {
        let grid = CoefficientGrid::from_rows(sample_rows()).unwrap();
        let rows: Vec<&[Rgb]> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], grid.row(1));
        assert_eq!(grid.as_slice().len(), 6);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let grid = CoefficientGrid::from_rows(sample_rows()).unwrap();
        let _ = grid[(0, 2)];
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_nested_rows() {
        use approx::assert_abs_diff_eq;

        let grid = CoefficientGrid::from_rows(sample_rows()).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert!(json.starts_with("[[[0.5,0.5,0.5],"));
        let back: CoefficientGrid = serde_json::from_str(&json).unwrap();
        assert_abs_diff_eq!(back, grid, epsilon = 1e-7);

        let ragged = "[[[0,0,0],[1,1,1]],[[0,0,0]]]";
        assert!(serde_json::from_str::<CoefficientGrid>(ragged).is_err());
    }
}
