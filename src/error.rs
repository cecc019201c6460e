//! Error types for matrix operations.
//!
//! Every failure in this crate is a programmer-error signal: it is reported
//! synchronously at the offending call and never recovered from internally.

use std::fmt;

/// Main error type for matrix operations.
///
/// # Examples
///
/// ```
/// use matriz::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "2x3".to_string(),
///     actual: "3x3".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrizError {
    /// Operand shapes are incompatible for the requested operation, or a row
    /// appended during construction does not match the established width.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// A coordinate fell outside `[0, len)` for its axis.
    IndexOutOfRange {
        /// Axis name, "row" or "column"
        axis: &'static str,
        /// Offending index
        index: usize,
        /// Number of valid indices on that axis
        len: usize,
    },

    /// An accessor was called with too few coordinates.
    InvalidArguments {
        /// What was missing
        message: String,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            MatrizError::IndexOutOfRange { axis, index, len } => {
                write!(f, "{axis} index {index} out of range ({axis}s={len})")
            }
            MatrizError::InvalidArguments { message } => {
                write!(f, "invalid arguments: {message}")
            }
        }
    }
}

impl std::error::Error for MatrizError {}

impl MatrizError {
    /// Dimension mismatch between two whole shapes (elementwise operations).
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Incompatible inner dimensions for a matrix product; names both shapes.
    #[must_use]
    pub fn incompatible_product(lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("rhs with {} rows to multiply {}x{}", lhs.1, lhs.0, lhs.1),
            actual: format!("{}x{}", rhs.0, rhs.1),
        }
    }

    /// A row appended during construction differs from the established width.
    #[must_use]
    pub fn row_length_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("row of length {expected}"),
            actual: format!("length {actual}"),
        }
    }

    /// Flat data length does not cover `rows * cols`.
    #[must_use]
    pub fn data_length_mismatch(rows: usize, cols: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{} values for a {rows}x{cols} matrix", rows * cols),
            actual: format!("{actual}"),
        }
    }

    /// Row index outside `[0, rows)`.
    #[must_use]
    pub fn row_out_of_range(index: usize, rows: usize) -> Self {
        Self::IndexOutOfRange {
            axis: "row",
            index,
            len: rows,
        }
    }

    /// Column index outside `[0, cols)`.
    #[must_use]
    pub fn column_out_of_range(index: usize, cols: usize) -> Self {
        Self::IndexOutOfRange {
            axis: "column",
            index,
            len: cols,
        }
    }

    /// Coordinate-slice accessor called with fewer than two coordinates.
    #[must_use]
    pub fn missing_coordinates(got: usize) -> Self {
        Self::InvalidArguments {
            message: format!("x and y indexes must be provided (got {got})"),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for MatrizError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<MatrizError> for &str {
    fn eq(&self, other: &MatrizError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
