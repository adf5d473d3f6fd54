//! # blurkit-transfer
//!
//! The sRGB transfer function used at the boundary of a coefficient grid.
//!
//! Coefficient grids store and combine colours in linear light. Anything
//! coming in from a display-referred source (hex strings, 8-bit channels)
//! is decoded first, and anything going out to a renderer is clamped and
//! encoded last.
//!
//! # Usage
//!
//! ```rust
//! use blurkit_transfer::srgb;
//!
//! let linear = srgb::to_linear(0.5);
//! let encoded = srgb::from_linear(linear);
//! assert!((encoded - 0.5).abs() < 1e-5);
//!
//! assert_eq!(srgb::from_linear_u8(1.0), 255);
//! ```
//!
//! # Used By
//!
//! - `blurkit-core` - colour constructors and sRGB outputs

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

pub use srgb::{from_linear as srgb_from_linear, to_linear as srgb_to_linear};
