//! Error types for matriz operations.
//!
//! Shape and range conditions that the hot element-access paths report
//! through sentinel values are promoted to real errors here for the
//! allocating operations (construction, algebra, I/O), so that callers
//! can tell a failed operation apart from a legitimately empty matrix.

use std::fmt;

/// Main error type for matrix operations.
///
/// # Examples
///
/// ```
/// use matriz::error::Error;
///
/// let err = Error::ShapeMismatch {
///     expected: "2x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("shape mismatch"));
/// ```
#[derive(Debug)]
pub enum Error {
    /// Operand shapes violate the operation's compatibility rule.
    ShapeMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// A checked element access landed outside the matrix.
    IndexOutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Row count of the matrix
        rows: usize,
        /// Column count of the matrix
        cols: usize,
    },

    /// The operation is undefined on an empty matrix.
    EmptyMatrix,

    /// I/O error while loading or saving (file not found, broken pipe, ...).
    Io(std::io::Error),

    /// The input stream held no usable numeric data.
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShapeMismatch { expected, actual } => {
                write!(f, "Matrix shape mismatch: expected {expected}, got {actual}")
            }
            Error::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Index ({row}, {col}) out of bounds for {rows}x{cols} matrix"
                )
            }
            Error::EmptyMatrix => write!(f, "Operation undefined on an empty matrix"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Parse(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

/// Convenience result type for matrix operations.
pub type Result<T> = std::result::Result<T, Error>;
