//! Elementwise operators on coefficient grids.
//!
//! Because reconstruction is linear in the coefficients, many image edits
//! can be expressed directly on the grid:
//!
//! | Operation | Effect on the image |
//! |-----------|---------------------|
//! | `a + b`, `a - b` | Pixelwise sum/difference |
//! | `g * k`, `g / k` | Scale every pixel |
//! | [`punch`](CoefficientGrid::punch) | Scale contrast around the average |
//! | [`mirrored_horizontally`](CoefficientGrid::mirrored_horizontally) | Flip left/right |
//! | [`mirrored_vertically`](CoefficientGrid::mirrored_vertically) | Flip top/bottom |
//! | [`transposed`](CoefficientGrid::transposed) | Swap axes |
//!
//! # Combining mismatched shapes
//!
//! Grids of different sizes are combined by zero-padding both to the larger
//! size on each axis. Padding with zero adds no frequency content, so the
//! smaller grid reconstructs identically; note however that `a - b` with a
//! larger `b` keeps `b`'s extra high-frequency terms (negated) in the result.

use std::ops::{Add, Div, Mul, Neg, Sub};

use tracing::trace;

use crate::error::GridResult;
use crate::grid::{check_components, CoefficientGrid, MAX_COMPONENTS};
use crate::rgb::Rgb;

impl CoefficientGrid {
    /// Applies `f` to every coefficient.
    pub fn transform(&self, f: impl Fn(Rgb) -> Rgb) -> Self {
        let (h, v) = self.dimensions();
        Self::from_parts(h, v, self.as_slice().iter().map(|&c| f(c)).collect())
    }

    /// Applies `dc` to the DC coefficient and `ac` to every other one.
    pub fn transform_split(&self, dc: impl Fn(Rgb) -> Rgb, ac: impl Fn(Rgb) -> Rgb) -> Self {
        let (h, v) = self.dimensions();
        let coefficients = self
            .as_slice()
            .iter()
            .enumerate()
            .map(|(idx, &c)| if idx == 0 { dc(c) } else { ac(c) })
            .collect();
        Self::from_parts(h, v, coefficients)
    }

    /// Combines two grids coefficient by coefficient.
    ///
    /// The result has the larger row count and the larger column count of
    /// the two; missing coefficients on either side read as zero.
    pub fn combine(&self, other: &Self, f: impl Fn(Rgb, Rgb) -> Rgb) -> Self {
        let h = self.horizontal_components().max(other.horizontal_components());
        let v = self.vertical_components().max(other.vertical_components());
        if self.dimensions() != other.dimensions() {
            trace!(
                lhs = ?self.dimensions(),
                rhs = ?other.dimensions(),
                "zero-padding mismatched grids"
            );
        }

        Self::from_fn(h, v, |row, col| {
            let a = self.get(row, col).unwrap_or(Rgb::ZERO);
            let b = other.get(row, col).unwrap_or(Rgb::ZERO);
            f(a, b)
        })
    }

    /// 1x1 grid holding only the DC coefficient.
    pub fn dc(&self) -> Self {
        Self::from_colour(self.average())
    }

    /// Same shape with the DC coefficient zeroed.
    pub fn ac(&self) -> Self {
        self.transform_split(|_| Rgb::ZERO, |c| c)
    }

    /// Scales every AC coefficient by `factor`, keeping the average colour.
    ///
    /// Equivalent to `dc() + ac() * factor`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blurkit_core::{CoefficientGrid, Rgb};
    ///
    /// let grid = CoefficientGrid::blending_top_colours(Rgb::ONE, Rgb::ZERO);
    /// let flat = grid.punch(0.0);
    /// assert_eq!(flat.point_sample(0.5, 0.0), grid.average());
    /// ```
    pub fn punch(&self, factor: f32) -> Self {
        self.transform_split(|c| c, |c| c * factor)
    }

    /// Negates coefficients at odd horizontal frequencies.
    pub fn mirrored_horizontally(&self) -> Self {
        let (h, v) = self.dimensions();
        Self::from_fn(h, v, |row, col| {
            let c = self[(row, col)];
            if col % 2 == 1 { -c } else { c }
        })
    }

    /// Negates coefficients at odd vertical frequencies.
    pub fn mirrored_vertically(&self) -> Self {
        let (h, v) = self.dimensions();
        Self::from_fn(h, v, |row, col| {
            let c = self[(row, col)];
            if row % 2 == 1 { -c } else { c }
        })
    }

    /// Swaps rows and columns.
    pub fn transposed(&self) -> Self {
        let (h, v) = self.dimensions();
        Self::from_fn(v, h, |row, col| self[(col, row)])
    }

    /// Keeps only the leading `max_horizontal x max_vertical` coefficients.
    ///
    /// Limits larger than the grid leave that axis untouched.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidComponentCount`](crate::GridError::InvalidComponentCount)
    /// if either limit is zero.
    pub fn simplify(&self, max_horizontal: usize, max_vertical: usize) -> GridResult<Self> {
        check_components(
            max_horizontal.min(MAX_COMPONENTS),
            max_vertical.min(MAX_COMPONENTS),
        )?;
        let h = self.horizontal_components().min(max_horizontal);
        let v = self.vertical_components().min(max_vertical);
        Ok(Self::from_fn(h, v, |row, col| self[(row, col)]))
    }
}

impl Neg for &CoefficientGrid {
    type Output = CoefficientGrid;

    fn neg(self) -> CoefficientGrid {
        self.transform(|c| -c)
    }
}

impl Neg for CoefficientGrid {
    type Output = CoefficientGrid;

    fn neg(self) -> CoefficientGrid {
        -&self
    }
}

impl Mul<f32> for &CoefficientGrid {
    type Output = CoefficientGrid;

    fn mul(self, rhs: f32) -> CoefficientGrid {
        self.transform(|c| c * rhs)
    }
}

impl Mul<f32> for CoefficientGrid {
    type Output = CoefficientGrid;

    fn mul(self, rhs: f32) -> CoefficientGrid {
        &self * rhs
    }
}

impl Div<f32> for &CoefficientGrid {
    type Output = CoefficientGrid;

    fn div(self, rhs: f32) -> CoefficientGrid {
        self.transform(|c| c / rhs)
    }
}

impl Div<f32> for CoefficientGrid {
    type Output = CoefficientGrid;

    fn div(self, rhs: f32) -> CoefficientGrid {
        &self / rhs
    }
}

/// Implements a padded binary grid operator for every owned/borrowed pairing.
macro_rules! grid_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<&CoefficientGrid> for &CoefficientGrid {
            type Output = CoefficientGrid;

            fn $method(self, rhs: &CoefficientGrid) -> CoefficientGrid {
                self.combine(rhs, |a, b| a $op b)
            }
        }

        impl $trait<CoefficientGrid> for CoefficientGrid {
            type Output = CoefficientGrid;

            fn $method(self, rhs: CoefficientGrid) -> CoefficientGrid {
                &self $op &rhs
            }
        }

        impl $trait<&CoefficientGrid> for CoefficientGrid {
            type Output = CoefficientGrid;

            fn $method(self, rhs: &CoefficientGrid) -> CoefficientGrid {
                &self $op rhs
            }
        }

        impl $trait<CoefficientGrid> for &CoefficientGrid {
            type Output = CoefficientGrid;

            fn $method(self, rhs: CoefficientGrid) -> CoefficientGrid {
                self $op &rhs
            }
        }
    };
}

grid_binop!(Add, add, +);
grid_binop!(Sub, sub, -);
