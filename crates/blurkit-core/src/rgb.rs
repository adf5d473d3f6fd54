//! Linear-light RGB triple.
//!
//! [`Rgb`] is both the value stored in every grid coefficient and the colour
//! returned by every reconstruction query. Components are unconstrained while
//! doing arithmetic (AC coefficients are routinely negative); clamping only
//! happens when encoding to sRGB.
//!
//! # Usage
//!
//! ```rust
//! use blurkit_core::Rgb;
//!
//! let red = Rgb::new(1.0, 0.0, 0.0);
//! let blue = Rgb::new(0.0, 0.0, 1.0);
//! let half = (red + blue) / 2.0;
//! assert_eq!(half, Rgb::new(0.5, 0.0, 0.5));
//! assert_eq!(red.to_hex(), "#ff0000");
//! ```

use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Index, Mul, Neg, Sub};
use std::str::FromStr;

use approx::{AbsDiffEq, RelativeEq};
use blurkit_transfer::srgb;

use crate::error::ColourParseError;

/// Rec.601 luma weights applied to linear-light components.
pub const LUMA_WEIGHTS: Rgb = Rgb::new(0.299, 0.587, 0.114);

/// A linear-light colour triple.
///
/// # Components
///
/// Access via `.r`, `.g`, `.b` or index `[0]`, `[1]`, `[2]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f32; 3]", into = "[f32; 3]"))]
#[repr(C)]
pub struct Rgb {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
}

impl Rgb {
    /// Black, and the padding value used when combining grids.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// White.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new triple.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a grey triple with all components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.r * other.r + self.g * other.g + self.b * other.b
    }

    /// Weighted sum `0.299 r + 0.587 g + 0.114 b`.
    #[inline]
    pub fn luminance(self) -> f32 {
        self.dot(LUMA_WEIGHTS)
    }

    /// Clamps each component to [0, 1].
    #[inline]
    pub fn clamp01(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Applies `f` to each component.
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Decodes a normalized sRGB triple to linear light.
    #[inline]
    pub fn from_srgb(encoded: [f32; 3]) -> Self {
        Self::from_array(srgb::to_linear_rgb(encoded))
    }

    /// Decodes 8-bit sRGB channels to linear light.
    #[inline]
    pub fn from_srgb8(encoded: [u8; 3]) -> Self {
        Self::new(
            srgb::to_linear_u8(encoded[0]),
            srgb::to_linear_u8(encoded[1]),
            srgb::to_linear_u8(encoded[2]),
        )
    }

    /// Encodes to normalized sRGB, clamping out-of-gamut components.
    #[inline]
    pub fn to_srgb(self) -> [f32; 3] {
        srgb::from_linear_rgb(self.to_array())
    }

    /// Encodes to 8-bit sRGB, clamping out-of-gamut components.
    #[inline]
    pub fn to_srgb8(self) -> [u8; 3] {
        [
            srgb::from_linear_u8(self.r),
            srgb::from_linear_u8(self.g),
            srgb::from_linear_u8(self.b),
        ]
    }

    /// Parses an sRGB hex colour (`#rrggbb` or `rrggbb`) into linear light.
    pub fn from_hex(s: &str) -> Result<Self, ColourParseError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColourParseError::Length(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColourParseError::Digit(s.to_string()))
        };
        Ok(Self::from_srgb8([channel(0)?, channel(2)?, channel(4)?]))
    }

    /// Formats as an sRGB hex colour `#rrggbb`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_srgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Rgb {
    type Err = ColourParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Index<usize> for Rgb {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("Rgb index out of bounds: {}", i),
        }
    }
}

impl Add for Rgb {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Rgb {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Rgb {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Neg for Rgb {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.r, -self.g, -self.b)
    }
}

// Rgb * Rgb (component-wise)
impl Mul for Rgb {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Mul<f32> for Rgb {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Mul<Rgb> for f32 {
    type Output = Rgb;

    #[inline]
    fn mul(self, rhs: Rgb) -> Rgb {
        rhs * self
    }
}

impl Div<f32> for Rgb {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.r / rhs, self.g / rhs, self.b / rhs)
    }
}

impl Sum for Rgb {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<[f32; 3]> for Rgb {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Rgb> for [f32; 3] {
    #[inline]
    fn from(c: Rgb) -> [f32; 3] {
        c.to_array()
    }
}

impl From<glam::Vec3> for Rgb {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Rgb> for glam::Vec3 {
    #[inline]
    fn from(c: Rgb) -> glam::Vec3 {
        glam::Vec3::new(c.r, c.g, c.b)
    }
}

impl AbsDiffEq for Rgb {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon)
            && self.g.abs_diff_eq(&other.g, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
    }
}

impl RelativeEq for Rgb {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.r.relative_eq(&other.r, epsilon, max_relative)
            && self.g.relative_eq(&other.g, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rgb_ops() {
        let a = Rgb::new(1.0, 2.0, 3.0);
        let b = Rgb::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Rgb::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Rgb::splat(3.0));
        assert_eq!(a * 2.0, Rgb::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Rgb::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Rgb::new(-1.0, -2.0, -3.0));
        assert_eq!([a, b].into_iter().sum::<Rgb>(), a + b);
    }

    #[test]
    fn test_luminance() {
        assert_abs_diff_eq!(Rgb::new(1.0, 0.0, 0.0).luminance(), 0.299);
        assert_abs_diff_eq!(Rgb::ONE.luminance(), 1.0, epsilon = 1e-6);
        assert_eq!(Rgb::ZERO.luminance(), 0.0);
    }

    #[test]
    fn test_clamp01() {
        let c = Rgb::new(-0.5, 0.5, 1.5).clamp01();
        assert_eq!(c, Rgb::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_hex_roundtrip() {
        for hex in ["#000000", "#ffffff", "#ff8000", "#123abc"] {
            let c: Rgb = hex.parse().unwrap();
            assert_eq!(c.to_hex(), hex);
        }
        assert_abs_diff_eq!(
            Rgb::from_hex("ff0000").unwrap(),
            Rgb::new(1.0, 0.0, 0.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_hex_errors() {
        assert!(matches!(Rgb::from_hex("#fff"), Err(ColourParseError::Length(_))));
        assert!(matches!(Rgb::from_hex("#gg0000"), Err(ColourParseError::Digit(_))));
        assert!(matches!(Rgb::from_hex("#ff00ü"), Err(ColourParseError::Length(_))));
    }

    #[test]
    fn test_srgb_out_of_gamut() {
        let c = Rgb::new(-0.25, 0.5, 3.0);
        assert_eq!(c.to_srgb8()[0], 0);
        assert_eq!(c.to_srgb8()[2], 255);
    }

    #[test]
    fn test_glam_conversion() {
        let c = Rgb::new(0.1, 0.2, 0.3);
        let v: glam::Vec3 = c.into();
        assert_eq!(Rgb::from(v), c);
    }
}
