//! Matrix type for 2D numeric data.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::builder::MatrixBuilder;
use crate::error::{MatrizError, Result};

/// A dense 2D matrix of `f64` values (row-major storage).
///
/// Coordinates are `(x, y)` pairs where `x` addresses the column and `y` the
/// row; element `(x, y)` lives at flat offset `y * cols + x`. A matrix is
/// immutable once constructed: every transformation returns a new value and
/// no two live instances share backing storage.
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
/// assert_eq!(m.get(2, 1)?, 6.0);
/// # Ok::<(), matriz::MatrizError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Unvalidated wire form; every deserialized payload is routed through
/// [`Matrix::from_vec`] so the shape invariant holds for hand-crafted input
/// too, not just values this crate serialized.
#[derive(Deserialize)]
struct RawMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = MatrizError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Self::from_vec(raw.rows, raw.cols, raw.data)
    }
}

impl Matrix {
    /// Constructs a matrix by appending rows inside a one-shot closure.
    ///
    /// The closure receives the only handle through which rows can ever be
    /// inserted; once it returns, the matrix is frozen. Appending no rows
    /// yields the valid empty 0x0 matrix.
    ///
    /// # Errors
    ///
    /// Propagates any error returned from the closure, including
    /// [`MatrizError::DimensionMismatch`] from a row whose length differs
    /// from the first row's.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::Matrix;
    ///
    /// let m = Matrix::build(|b| {
    ///     b.row([1.0, 2.0])?;
    ///     b.row([3.0, 4.0])?;
    ///     Ok(())
    /// })?;
    /// assert_eq!(m.shape(), (2, 2));
    /// # Ok::<(), matriz::MatrizError>(())
    /// ```
    pub fn build<F>(fill: F) -> Result<Self>
    where
        F: FnOnce(&mut MatrixBuilder) -> Result<()>,
    {
        let mut builder = MatrixBuilder::new();
        fill(&mut builder)?;
        Ok(builder.finish())
    }

    /// Creates a matrix directly from a flat row-major vector.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if `data.len()` doesn't
    /// equal `rows * cols`.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
    /// assert_eq!(m.get(0, 1)?, 4.0);
    /// # Ok::<(), matriz::MatrizError>(())
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrizError::data_length_mismatch(rows, cols, data.len()));
        }
        Ok(Self { data, rows, cols })
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the matrix holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns an owned copy of the row-major data.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Gets the element at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] naming the violated axis;
    /// the row bound is checked before the column bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0])?;
    /// assert_eq!(m.get(1, 0)?, 1.0);
    /// assert_eq!(m.get(1, 1)?, 4.0);
    /// assert!(m.get(3, 0).is_err());
    /// # Ok::<(), matriz::MatrizError>(())
    /// ```
    pub fn get(&self, x: usize, y: usize) -> Result<f64> {
        if y >= self.rows {
            return Err(MatrizError::row_out_of_range(y, self.rows));
        }
        if x >= self.cols {
            return Err(MatrizError::column_out_of_range(x, self.cols));
        }
        Ok(self.data[y * self.cols + x])
    }

    /// Gets an element from a coordinate slice, `[x, y, ..]`.
    ///
    /// Coordinates past the first two are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidArguments`] when fewer than two
    /// coordinates are supplied, or [`MatrizError::IndexOutOfRange`] when
    /// either coordinate is outside the matrix.
    pub fn get_at(&self, location: &[usize]) -> Result<f64> {
        match location {
            [x, y, ..] => self.get(*x, *y),
            _ => Err(MatrizError::missing_coordinates(location.len())),
        }
    }

    /// Returns the row at `index` as an owned vector of length `cols`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] if `index >= rows`.
    pub fn get_row(&self, index: usize) -> Result<Vec<f64>> {
        if index >= self.rows {
            return Err(MatrizError::row_out_of_range(index, self.rows));
        }
        let start = index * self.cols;
        Ok(self.data[start..start + self.cols].to_vec())
    }

    /// Returns the column at `index` as an owned vector of length `rows`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] if `index >= cols`.
    pub fn get_column(&self, index: usize) -> Result<Vec<f64>> {
        if index >= self.cols {
            return Err(MatrizError::column_out_of_range(index, self.cols));
        }
        Ok((0..self.rows)
            .map(|row| self.data[row * self.cols + index])
            .collect())
    }

    /// Transposes the matrix.
    ///
    /// Element `(x, y)` of the result equals element `(y, x)` of the source.
    /// Total for every shape, including 0x0.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t.get(1, 0)?, m.get(0, 1)?);
    /// # Ok::<(), matriz::MatrizError>(())
    /// ```
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for y in 0..self.rows {
            for x in 0..self.cols {
                data[x * self.rows + y] = self.data[y * self.cols + x];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Matrix-matrix multiplication.
    ///
    /// The result has shape `(self.rows, other.cols)`; its element at
    /// `(x, y)` is the dot product of row `y` of `self` and column `x` of
    /// `other`. The output buffer is filled in row-major order, so the flat
    /// result is deterministic for identical inputs.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] describing both shapes
    /// when `self.cols != other.rows`.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::Matrix;
    ///
    /// let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])?;
    /// let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0])?;
    /// let c = a.matmul(&b)?;
    /// assert_eq!(c.to_vec(), vec![19.0, 22.0, 43.0, 50.0]);
    /// # Ok::<(), matriz::MatrizError>(())
    /// ```
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::incompatible_product(
                self.shape(),
                other.shape(),
            ));
        }

        let mut data = vec![0.0; self.rows * other.cols];
        for y in 0..self.rows {
            for x in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[y * self.cols + k] * other.data[k * other.cols + x];
                }
                data[y * other.cols + x] = sum;
            }
        }

        Ok(Self {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Sums all elements by plain left-to-right accumulation.
    ///
    /// The empty matrix sums to `0.0`.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Applies `transform` to every element, preserving shape.
    ///
    /// Elements are visited in flat row-major order, which an `FnMut`
    /// closure can observe.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])?;
    /// let doubled = m.map(|v| v * 2.0);
    /// assert_eq!(doubled.to_vec(), vec![2.0, 4.0, 6.0, 8.0]);
    /// # Ok::<(), matriz::MatrizError>(())
    /// ```
    #[must_use]
    pub fn map<F>(&self, transform: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        Self {
            data: self.data.iter().copied().map(transform).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Returns `true` if `element` appears anywhere in the matrix.
    ///
    /// Comparison is exact `==` on `f64`, with no tolerance; `NaN` is never
    /// contained.
    #[must_use]
    pub fn contains(&self, element: f64) -> bool {
        self.data.contains(&element)
    }

    /// Returns `true` if every element of `elements` is contained.
    ///
    /// Vacuously true for an empty slice.
    #[must_use]
    pub fn contains_all(&self, elements: &[f64]) -> bool {
        elements.iter().all(|&e| self.contains(e))
    }

    /// Returns the `(x, y)` coordinates of the first occurrence of
    /// `element` in flat row-major order, or `None` if absent.
    #[must_use]
    pub fn index_of(&self, element: f64) -> Option<(usize, usize)> {
        self.data
            .iter()
            .position(|&v| v == element)
            .map(|flat| self.coordinates_of(flat))
    }

    /// Returns the `(x, y)` coordinates of the last occurrence of
    /// `element` in flat row-major order, or `None` if absent.
    #[must_use]
    pub fn last_index_of(&self, element: f64) -> Option<(usize, usize)> {
        self.data
            .iter()
            .rposition(|&v| v == element)
            .map(|flat| self.coordinates_of(flat))
    }

    // Only reachable with a flat index into non-empty data, so cols > 0.
    fn coordinates_of(&self, flat: usize) -> (usize, usize) {
        (flat % self.cols, flat / self.cols)
    }

    /// Iterates over all elements in flat row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Iterates over `(x, y, value)` triples in flat row-major order.
    ///
    /// The reported coordinates always agree with [`Matrix::get`].
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0])?;
    /// for (x, y, value) in m.iter_indexed() {
    ///     assert_eq!(m.get(x, y)?, value);
    /// }
    /// # Ok::<(), matriz::MatrizError>(())
    /// ```
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        // cols == 0 implies empty data, so the divisor is never zero here.
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(flat, &value)| (flat % cols, flat / cols, value))
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// Consistent with PartialEq: 0.0 and -0.0 compare equal, so they must hash
// alike. NaN never compares equal to anything, so its bits may hash as-is.
impl Hash for Matrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.cols.hash(state);
        for value in &self.data {
            let canonical = if *value == 0.0 { 0.0_f64 } else { *value };
            canonical.to_bits().hash(state);
        }
    }
}

/// Renders the matrix as a bordered grid, one matrix row per line.
///
/// Column widths track the widest cell in each column; empty matrices render
/// as a bare border. Formatting is cosmetic only and nothing in the algebra
/// depends on it.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 0 || self.cols == 0 {
            return write!(f, "┌┐\n└┘");
        }

        let cells: Vec<String> = self.data.iter().map(f64::to_string).collect();
        let mut widths = vec![0usize; self.cols];
        for (flat, cell) in cells.iter().enumerate() {
            let x = flat % self.cols;
            widths[x] = widths[x].max(cell.len());
        }

        let border = |left: char, mid: char, right: char| {
            let mut line = String::new();
            line.push(left);
            for (x, width) in widths.iter().enumerate() {
                if x > 0 {
                    line.push(mid);
                }
                line.push_str(&"─".repeat(width + 2));
            }
            line.push(right);
            line
        };

        writeln!(f, "{}", border('┌', '┬', '┐'))?;
        for y in 0..self.rows {
            if y > 0 {
                writeln!(f, "{}", border('├', '┼', '┤'))?;
            }
            write!(f, "│")?;
            for x in 0..self.cols {
                write!(
                    f,
                    " {:<width$} │",
                    cells[y * self.cols + x],
                    width = widths[x]
                )?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", border('└', '┴', '┘'))
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
