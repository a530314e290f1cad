//! Error handling for GlyphKit
//!
//! Provides the error types for the geometry layer:
//! - Geometry errors (offset engine failures, invalid buffer parameters)
//! - A unified [`Error`] used by public APIs
//!
//! Empty input, orphan holes and degenerate rings are normalized locally by
//! the outline crate and never surface as errors.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Represents failures of the delegated polygon offsetting engine and
/// parameter validation ahead of it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The offset engine could not produce a result
    #[error("Offset failed: {reason}")]
    OffsetFailed {
        /// The reason the offset operation failed.
        reason: String,
    },

    /// A buffer or flattening parameter is out of range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Generic geometry error
    #[error("Geometry error: {message}")]
    Other {
        /// The error message.
        message: String,
    },
}

impl GeometryError {
    /// Shorthand for [`GeometryError::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        GeometryError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Main error type for GlyphKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if the geometry engine failed (as opposed to bad input)
    pub fn is_offset_failure(&self) -> bool {
        matches!(self, Error::Geometry(GeometryError::OffsetFailed { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_error_display() {
        let err = GeometryError::OffsetFailed {
            reason: "self-intersecting ring".to_string(),
        };
        assert_eq!(err.to_string(), "Offset failed: self-intersecting ring");

        let err = GeometryError::invalid_parameter("tolerance", "must be > 0");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'tolerance': must be > 0"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = GeometryError::OffsetFailed {
            reason: "panic".to_string(),
        }
        .into();
        assert!(err.is_geometry_error());
        assert!(err.is_offset_failure());
        assert_eq!(err.to_string(), "Offset failed: panic");

        let err: Error = GeometryError::invalid_parameter("distance", "not finite").into();
        assert!(err.is_geometry_error());
        assert!(!err.is_offset_failure());

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "font.ttf");
        let err: Error = io_err.into();
        assert!(!err.is_geometry_error());
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_other_error() {
        let err = Error::other("something odd");
        assert_eq!(err.to_string(), "something odd");
    }
}
