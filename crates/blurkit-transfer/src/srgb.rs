//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! # Range
//!
//! - Encoded side: [0, 1], or 0..=255 for the 8-bit helpers
//! - Linear side: unbounded during arithmetic, clamped to [0, 1] on encode
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Decodes a normalized sRGB value to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use blurkit_transfer::srgb::to_linear;
///
/// let linear = to_linear(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn to_linear(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Decodes an 8-bit sRGB channel to linear light.
#[inline]
pub fn to_linear_u8(v: u8) -> f32 {
    to_linear(v as f32 / 255.0)
}

/// Encodes linear light to normalized sRGB.
///
/// The input is clamped to [0, 1] first, so out-of-gamut values produced
/// by coefficient arithmetic encode to black or white rather than NaN.
///
/// # Formula
///
/// ```text
/// L = clamp(L, 0, 1)
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn from_linear(l: f32) -> f32 {
    let l = l.clamp(0.0, 1.0);
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Encodes linear light to an 8-bit sRGB channel, rounding to nearest.
#[inline]
pub fn from_linear_u8(l: f32) -> u8 {
    // from_linear is already in [0, 1], so the cast cannot overflow
    (from_linear(l) * 255.0).round() as u8
}

/// Decodes a normalized sRGB triplet.
#[inline]
pub fn to_linear_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [to_linear(rgb[0]), to_linear(rgb[1]), to_linear(rgb[2])]
}

/// Encodes a linear triplet to normalized sRGB.
#[inline]
pub fn from_linear_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [from_linear(rgb[0]), from_linear(rgb[1]), from_linear(rgb[2])]
}
