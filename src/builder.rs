//! One-shot construction phase for [`Matrix`].
//!
//! A builder only ever exists inside the closure passed to
//! [`Matrix::build`]; once that closure returns, the matrix is frozen and no
//! further rows can be appended from anywhere.

use crate::error::{MatrizError, Result};
use crate::matrix::Matrix;

/// Row-insertion capability handed to the [`Matrix::build`] closure.
///
/// The first appended row fixes the column count for the matrix under
/// construction; every later row must have the same length. The builder has
/// no public constructor and no public finalizer, so construction cannot be
/// resumed after the matrix has been handed out.
///
/// # Examples
///
/// ```
/// use matriz::Matrix;
///
/// let m = Matrix::build(|b| {
///     b.row([1, 2, 3])?.row([4, 5, 6])?;
///     Ok(())
/// })?;
/// assert_eq!(m.shape(), (2, 3));
/// # Ok::<(), matriz::MatrizError>(())
/// ```
#[derive(Debug)]
pub struct MatrixBuilder {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl MatrixBuilder {
    pub(crate) fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// Appends one row to the matrix under construction.
    ///
    /// Accepts any sequence whose items convert losslessly into `f64`, so
    /// integer and float literals both work at the call site. Returns
    /// `&mut Self` for chaining with `?`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] when the row length differs
    /// from the length established by the first row. A failed call leaves the
    /// builder exactly as it was.
    pub fn row<I>(&mut self, columns: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<f64>,
    {
        let start = self.data.len();
        self.data.extend(columns.into_iter().map(Into::into));
        let appended = self.data.len() - start;
        if self.rows == 0 {
            self.cols = appended;
        } else if appended != self.cols {
            self.data.truncate(start);
            return Err(MatrizError::row_length_mismatch(self.cols, appended));
        }
        self.rows += 1;
        Ok(self)
    }

    pub(crate) fn finish(self) -> Matrix {
        Matrix::from_parts(self.rows, self.cols, self.data)
    }
}

#[cfg(test)]
mod tests {
    use crate::matrix::Matrix;
    use crate::MatrizError;

    #[test]
    fn test_first_row_fixes_column_count() {
        let m = Matrix::build(|b| {
            b.row([1, 2, 3, 4])?;
            b.row([5, 6, 7, 8])?;
            b.row([9, 10, 11, 12])?;
            Ok(())
        })
        .expect("all rows share one length");
        assert_eq!(m.shape(), (3, 4));
    }

    #[test]
    fn test_unequal_row_length_is_rejected() {
        let result = Matrix::build(|b| {
            b.row([1, 2, 3, 4])?;
            b.row([1, 2, 3])?;
            Ok(())
        });
        assert_eq!(
            result.unwrap_err(),
            MatrizError::row_length_mismatch(4, 3)
        );
    }

    #[test]
    fn test_failed_row_leaves_builder_untouched() {
        // A rejected row must not alter the data appended so far, so
        // construction can continue with a correctly sized row.
        let m = Matrix::build(|b| {
            b.row([1.0, 2.0])?;
            assert!(b.row([3.0, 4.0, 5.0]).is_err());
            b.row([3.0, 4.0])?;
            Ok(())
        })
        .expect("recovered construction is valid");
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_zero_rows_builds_empty_matrix() {
        let m = Matrix::build(|_| Ok(())).expect("empty construction is valid");
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_empty());
    }

    #[test]
    fn test_zero_length_rows_are_allowed() {
        // The first row may be empty; that fixes the column count at zero.
        let m = Matrix::build(|b| {
            b.row(std::iter::empty::<f64>())?;
            b.row(std::iter::empty::<f64>())?;
            Ok(())
        })
        .expect("zero-width rows are valid");
        assert_eq!(m.shape(), (2, 0));
        assert!(m.is_empty());
    }

    #[test]
    fn test_rows_chain_with_question_mark() {
        let m = Matrix::build(|b| {
            b.row([1, 2])?.row([3, 4])?.row([5, 6])?;
            Ok(())
        })
        .expect("chained rows share one length");
        assert_eq!(m.shape(), (3, 2));
    }

    #[test]
    fn test_row_accepts_vec_of_floats() {
        let m = Matrix::build(|b| {
            b.row(vec![0.5, 1.5, 2.5])?;
            Ok(())
        })
        .expect("single-row construction is valid");
        assert_eq!(m.get_row(0).expect("row 0 exists"), vec![0.5, 1.5, 2.5]);
    }

    #[test]
    fn test_closure_error_propagates() {
        let result = Matrix::build(|b| {
            b.row([1, 2])?;
            Err(MatrizError::missing_coordinates(0))
        });
        assert_eq!(result.unwrap_err(), MatrizError::missing_coordinates(0));
    }
}
