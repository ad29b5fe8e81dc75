//! Error types for sparse matrix operations

use thiserror::Error;

/// Result type alias using [`MatrixError`]
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors that can occur while building, combining or parsing matrices
#[derive(Error, Debug)]
pub enum MatrixError {
    /// A matrix was constructed with a zero row or column count
    #[error("Invalid dimensions {rows}x{cols}: rows and cols must be positive")]
    InvalidDimension {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// An entry coordinate lies outside the matrix extent
    #[error("Entry ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    OutOfBounds {
        /// Row of the rejected entry
        row: usize,
        /// Column of the rejected entry
        col: usize,
        /// Matrix row count
        rows: usize,
        /// Matrix column count
        cols: usize,
    },

    /// An appended entry does not follow the last stored coordinate
    #[error("Entry ({row}, {col}) must come after ({last_row}, {last_col})")]
    Unordered {
        /// Row of the rejected entry
        row: usize,
        /// Column of the rejected entry
        col: usize,
        /// Row of the last stored entry
        last_row: usize,
        /// Column of the last stored entry
        last_col: usize,
    },

    /// Two entries share a coordinate
    #[error("Duplicate entry at ({row}, {col})")]
    DuplicateEntry {
        /// Row of the duplicated coordinate
        row: usize,
        /// Column of the duplicated coordinate
        col: usize,
    },

    /// Operand shapes are incompatible for an operation
    #[error("Dimension mismatch in {op}: {}x{} vs {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        /// The operation name
        op: &'static str,
        /// Shape of the left operand
        left: (usize, usize),
        /// Shape of the right operand
        right: (usize, usize),
    },

    /// An entry's result is not representable in the value type
    #[error("Arithmetic overflow in {op} at ({row}, {col})")]
    Overflow {
        /// The operation name
        op: &'static str,
        /// Row of the offending cell
        row: usize,
        /// Column of the offending cell
        col: usize,
    },

    /// Malformed matrix text
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// Unknown operation selector
    #[error("Invalid choice '{0}'")]
    InvalidChoice(String),

    /// Underlying I/O failure while reading or writing a matrix file
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MatrixError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        MatrixError::Parse {
            line,
            message: message.into(),
        }
    }
}
