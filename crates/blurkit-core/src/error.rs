//! Error types for coefficient-grid construction.
//!
//! Every numeric operation on a valid grid is total. Errors only arise when a
//! grid would be built with the wrong shape, or when a blend constructor is
//! handed an input it cannot blend without discarding information.
//!
//! # Usage
//!
//! ```rust
//! use blurkit_core::{CoefficientGrid, GridError, Rgb};
//!
//! let err = CoefficientGrid::new(10, 1, vec![Rgb::ZERO; 10]).unwrap_err();
//! assert!(matches!(err, GridError::InvalidComponentCount { horizontal: 10, vertical: 1 }));
//! ```

use thiserror::Error;

/// Result type alias using [`GridError`] as the error type.
pub type GridResult<T> = std::result::Result<T, GridError>;

/// Errors raised when building or reshaping a [`crate::CoefficientGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Component counts fall outside `1..=9` on either axis.
    #[error("invalid component count {horizontal}x{vertical}, both axes must be within 1..=9")]
    InvalidComponentCount {
        /// Number of horizontal components (columns)
        horizontal: usize,
        /// Number of vertical components (rows)
        vertical: usize,
    },

    /// Rows of differing length were supplied.
    #[error("row {row} has {found} components, expected {expected}")]
    NonRectangular {
        /// Index of the first offending row
        row: usize,
        /// Length of row 0
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// An operation's input does not have the shape it requires.
    ///
    /// Raised by the two-grid blend constructors when an input has more than
    /// one component along the blend axis.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),
}

/// Error returned when a hex colour string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColourParseError {
    /// String is not 6 hex digits, with or without a leading `#`.
    #[error("expected 6 hex digits, got {0:?}")]
    Length(String),

    /// String contains a non-hex character.
    #[error("invalid hex digit in {0:?}")]
    Digit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GridError::InvalidComponentCount {
            horizontal: 0,
            vertical: 4,
        };
        assert!(err.to_string().contains("0x4"));

        let err = GridError::NonRectangular {
            row: 2,
            expected: 3,
            found: 1,
        };
        assert_eq!(err.to_string(), "row 2 has 1 components, expected 3");
    }
}
