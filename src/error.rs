//! Error types for frame viewer operations.

use thiserror::Error;

/// Errors raised while mapping or editing markers on a frame.
///
/// `OutOfBounds` and `UnrecognizedShortcut` describe events that simply did
/// not apply; the event handlers swallow them. `InvalidArgument` is a caller
/// contract violation and is always returned to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewerError {
    /// A display point lies outside the displayed frame area
    #[error("Point ({x:.1}, {y:.1}) is outside the displayed frame")]
    OutOfBounds {
        /// Display X coordinate
        x: f64,
        /// Display Y coordinate
        y: f64,
    },

    /// A typed character has no marker template bound to it
    #[error("No marker shortcut bound to {0:?}")]
    UnrecognizedShortcut(char),

    /// An argument broke the caller contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ViewerError {
    /// Create an out-of-bounds error for a display point.
    pub fn out_of_bounds(x: f64, y: f64) -> Self {
        Self::OutOfBounds { x, y }
    }

    /// Create an invalid argument error with a message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Whether this error only means "the event did not apply".
    pub fn is_discardable(&self) -> bool {
        matches!(
            self,
            ViewerError::OutOfBounds { .. } | ViewerError::UnrecognizedShortcut(_)
        )
    }
}
