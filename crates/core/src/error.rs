//! Error types for paperbox.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result type alias for paperbox operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Page axis a fit check was performed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Horizontal extent (box width plus side faces).
    Width,
    /// Vertical extent (the stacked main column).
    Length,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Length => f.write_str("length"),
        }
    }
}

/// Errors that can occur while planning or rendering a box net.
#[derive(Debug, Error)]
pub enum Error {
    /// A box dimension is zero, negative or not a number.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// The net does not fit on the page along the given axis.
    #[error(
        "Dimensions exceed page {axis}: occupied space is {required:.2} cm, \
         page allows {available:.2} cm"
    )]
    DimensionsExceedPage {
        /// Axis that overflowed.
        axis: Axis,
        /// Extent the net needs, in centimeters.
        required: f64,
        /// Extent the page offers, in centimeters.
        available: f64,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A canvas backend failed to encode its output.
    #[error("Render error: {0}")]
    Render(String),

    /// I/O error while writing an output document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the overflowing axis for [`Error::DimensionsExceedPage`].
    pub fn exceeded_axis(&self) -> Option<Axis> {
        match self {
            Error::DimensionsExceedPage { axis, .. } => Some(*axis),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exceed_message_mentions_axis() {
        let err = Error::DimensionsExceedPage {
            axis: Axis::Length,
            required: 63.0,
            available: 29.7,
        };
        let msg = err.to_string();
        assert!(msg.contains("length"), "{msg}");
        assert!(msg.contains("63.00"), "{msg}");
        assert_eq!(err.exceeded_axis(), Some(Axis::Length));
    }

    #[test]
    fn test_other_errors_have_no_axis() {
        let err = Error::InvalidDimension("height must be positive".into());
        assert_eq!(err.exceeded_axis(), None);
    }
}
