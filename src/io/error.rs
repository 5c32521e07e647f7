//! Error types for the CLI and render boundary
//!
//! The layout pass itself cannot fail: given positive dimensions it always
//! produces a fully laid grid. Errors arise only from invalid command-line
//! arguments and from writing to the terminal.

use std::fmt;
use std::io;

/// Main error type for pattern generation runs
#[derive(Debug)]
pub enum PatternError {
    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Writing the rendered pattern to the output failed
    Render {
        /// Underlying I/O error
        source: io::Error,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Render { source } => {
                write!(f, "Failed to write pattern output: {source}")
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render { source } => Some(source),
            Self::InvalidParameter { .. } => None,
        }
    }
}

impl From<io::Error> for PatternError {
    fn from(err: io::Error) -> Self {
        Self::Render { source: err }
    }
}

/// Convenience type alias for pattern generation results
pub type Result<T> = std::result::Result<T, PatternError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("rows", &0, &"must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'rows' = '0': must be at least 1"
        );
    }

    #[test]
    fn test_render_error_preserves_source() {
        let err = PatternError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        match err {
            PatternError::Render { ref source } => {
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
            }
            PatternError::InvalidParameter { .. } => {
                unreachable!("Expected Render error type")
            }
        }
        assert!(std::error::Error::source(&err).is_some());
    }
}
