//! Error types for recomendar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for recomendar operations.
///
/// Provides detailed context about failures: ragged rating rows, label
/// mismatches, out-of-range target users, and unreadable input data.
///
/// # Examples
///
/// ```
/// use recomendar::error::RecomendarError;
///
/// let err = RecomendarError::TargetOutOfRange { index: 7, n_users: 3 };
/// assert!(err.to_string().contains("out of range"));
/// ```
#[derive(Debug)]
pub enum RecomendarError {
    /// Rating rows or label sequences whose lengths disagree.
    ShapeMismatch {
        /// Expected length description
        expected: String,
        /// Actual length found
        actual: String,
    },

    /// Target user index outside `[0, n_users)`.
    TargetOutOfRange {
        /// Requested user index
        index: usize,
        /// Number of users in the matrix
        n_users: usize,
    },

    /// Input with no usable rows.
    EmptyInput {
        /// What was empty
        context: String,
    },

    /// Unparseable cell in tabular rating data.
    Parse {
        /// 1-based line number in the input
        line: usize,
        /// Error description
        message: String,
    },

    /// I/O error while reading rating data.
    Io(std::io::Error),
}

impl fmt::Display for RecomendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecomendarError::ShapeMismatch { expected, actual } => {
                write!(f, "Shape mismatch: expected {expected}, got {actual}")
            }
            RecomendarError::TargetOutOfRange { index, n_users } => {
                write!(
                    f,
                    "Target user index {index} out of range: matrix has {n_users} users"
                )
            }
            RecomendarError::EmptyInput { context } => {
                write!(f, "Empty input: {context}")
            }
            RecomendarError::Parse { line, message } => {
                write!(f, "Parse error on line {line}: {message}")
            }
            RecomendarError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for RecomendarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecomendarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RecomendarError {
    fn from(err: std::io::Error) -> Self {
        RecomendarError::Io(err)
    }
}

impl RecomendarError {
    /// Create a shape mismatch error with descriptive context
    #[must_use]
    pub fn shape_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput {
            context: context.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RecomendarError>;
