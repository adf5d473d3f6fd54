//! # blurkit-core
//!
//! Compact image signatures as grids of cosine coefficients.
//!
//! A [`CoefficientGrid`] describes an image by at most 9x9 linear-light DCT
//! coefficients, the representation behind BlurHash-style placeholders. This
//! crate reconstructs colour from the grid and edits it without ever going
//! through a pixel buffer:
//!
//! - [`sample`] - point, area, edge, and corner reconstruction
//! - [`metrics`] - luminance, perceptual brightness, darkness
//! - [`probes`] - average and contrast colour
//! - [`algebra`] - sum, difference, scaling, DC/AC split, punch, mirror, transpose
//! - [`remap`] - darken, lighten, set/invert brightness
//! - [`blend`] - grids from plain colours and colour series
//!
//! ## Usage
//!
//! ```rust
//! use blurkit_core::prelude::*;
//!
//! let grid = CoefficientGrid::blending_corners(
//!     Rgb::from_hex("#ff8080")?,
//!     Rgb::from_hex("#ffb3ff")?,
//!     Rgb::from_hex("#0080ff")?,
//!     Rgb::from_hex("#80b3ff")?,
//! );
//!
//! let edited = grid.punch(1.5).darken(0.2).mirrored_horizontally();
//! let text_on_dark = edited.is_dark(DEFAULT_DARK_THRESHOLD);
//! let accent = edited.contrast_linear().to_hex();
//! # let _ = (text_on_dark, accent);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! blurkit-transfer (sRGB <-> linear)
//!    ^
//!    |
//!    +-- blurkit-core (this crate)
//!           ^
//!           |
//!           +-- blurkit-cli
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize grids as nested `[[[r, g, b], ...], ...]` rows

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod algebra;
pub mod blend;
pub mod error;
pub mod grid;
pub mod metrics;
pub mod probes;
pub mod remap;
pub mod rgb;
pub mod sample;

pub use error::{ColourParseError, GridError, GridResult};
pub use grid::{CoefficientGrid, MAX_COMPONENTS};
pub use rgb::Rgb;
pub use sample::Region;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{GridError, GridResult};
    pub use crate::grid::{CoefficientGrid, MAX_COMPONENTS};
    pub use crate::metrics::{DEFAULT_DARK_THRESHOLD, DEFAULT_MIDPOINT};
    pub use crate::probes::DEFAULT_PROBES;
    pub use crate::rgb::Rgb;
    pub use crate::sample::Region;
}
