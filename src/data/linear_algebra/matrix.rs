//! # Sparse matrix
//!
//! Row-major: a matrix is a map from row index to a sparse `Vector`. Rows that were never touched
//! are not stored and read as zero. Columns are not stored, they are collected from the rows when
//! needed.
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Display;

use itertools::Itertools;
use num_traits::ToPrimitive;

use crate::algorithm::decomposition::Decomposition;
use crate::algorithm::decomposition::cholesky::Cholesky;
use crate::algorithm::decomposition::eigen::{Eigen, EigenSettings};
use crate::algorithm::decomposition::qr::QR;
use crate::algorithm::solve::qr_solver;
use crate::data::linear_algebra::tolerance::Tolerance;
use crate::data::linear_algebra::vector::Vector;
use crate::error::{LinearAlgebraError, Result};

/// A sparse matrix of `f64` values. Indices start at `0`.
///
/// The dimensions only ever grow: setting a value outside of the current bounds enlarges the
/// matrix. Each stored row always has a length equal to the current number of columns.
#[derive(Clone, Debug, Default)]
pub struct Matrix {
    rows: BTreeMap<usize, Vector>,
    nr_rows: usize,
    nr_columns: usize,

    tolerance: Tolerance,
}

impl Matrix {
    /// Create a matrix of zeros of dimension `nr_rows` x `nr_columns`.
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            rows: BTreeMap::new(),
            nr_rows,
            nr_columns,

            tolerance: Tolerance::default(),
        }
    }

    /// Create a square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        let mut matrix = Self::new(len, len);
        for i in 0..len {
            matrix.put(i, i, 1_f64);
        }

        matrix
    }

    /// Create a `Matrix` from dense rows.
    ///
    /// Rows may have different lengths; the number of columns is the length of the longest row.
    ///
    /// # Return value
    ///
    /// `InvalidArgument` if a value can't be represented as an `f64`.
    pub fn from_dense<T: ToPrimitive>(data: &[Vec<T>]) -> Result<Self> {
        let nr_columns = data.iter().map(Vec::len).max().unwrap_or(0);
        let mut matrix = Self::new(data.len(), nr_columns);

        for (i, row) in data.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                let value = value.to_f64().ok_or_else(|| LinearAlgebraError::InvalidArgument(
                    format!("value at ({i}, {j}) can't be represented as a float"),
                ))?;
                matrix.put(i, j, value);
            }
        }

        Ok(matrix)
    }

    /// Use a different tolerance for this matrix and everything derived from it.
    #[must_use]
    pub fn with_tolerance(self, tolerance: Tolerance) -> Self {
        let rows = self.rows.into_iter()
            .map(|(i, row)| (i, row.with_tolerance(tolerance)))
            .collect();

        Self { rows, tolerance, ..self }
    }

    /// The comparator used by this matrix.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the number of non-zero values in this matrix.
    pub fn size(&self) -> usize {
        self.rows.values().map(Vector::size).sum()
    }

    fn zero_row(&self, i: usize) -> Vector {
        let mut row = Vector::new(self.nr_columns).with_tolerance(self.tolerance);
        row.set_id(i);
        row
    }

    /// Dimension needed to hold `index`.
    fn end_of(index: usize) -> Result<usize> {
        index.checked_add(1)
            .ok_or(LinearAlgebraError::IndexOutOfRange { index, len: usize::MAX })
    }

    fn grow(&mut self, nr_rows: usize, nr_columns: usize) {
        if nr_columns > self.nr_columns {
            let extra = nr_columns - self.nr_columns;
            for row in self.rows.values_mut() {
                row.extend(extra);
            }
            self.nr_columns = nr_columns;
        }
        self.nr_rows = self.nr_rows.max(nr_rows);
    }

    /// Get the value at coordinate (`i`, `j`).
    ///
    /// Coordinates outside of the matrix read as zero.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows.get(&i).map_or(0_f64, |row| row.get(j))
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    ///
    /// The matrix grows when the coordinate lies outside of it.
    ///
    /// # Return value
    ///
    /// `IndexOutOfRange` if a coordinate is `usize::MAX`, as the matrix can't grow to fit it.
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<()> {
        let nr_rows = Self::end_of(i)?;
        let nr_columns = Self::end_of(j)?;
        self.grow(nr_rows, nr_columns);

        self.put(i, j, value);
        Ok(())
    }

    /// Set a value at a coordinate that is known to lie inside the matrix.
    pub(crate) fn put(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(i < self.nr_rows && j < self.nr_columns);

        if self.tolerance.is_zero(value) {
            if let Some(row) = self.rows.get_mut(&i) {
                row.put(j, value);
            }
        } else {
            let zero_row = self.zero_row(i);
            self.rows.entry(i).or_insert(zero_row).put(j, value);
        }
    }

    /// Get row `i`.
    ///
    /// # Return value
    ///
    /// The stored row, or a zero row of the current width if nothing is stored for `i`.
    pub fn row(&self, i: usize) -> Cow<'_, Vector> {
        match self.rows.get(&i) {
            Some(row) => Cow::Borrowed(row),
            None => Cow::Owned(self.zero_row(i)),
        }
    }

    /// Replace row `i`.
    ///
    /// The matrix grows to fit the row, a row that is shorter than the matrix is padded with
    /// zeros. The row takes over the tolerance of the matrix.
    ///
    /// # Return value
    ///
    /// `IndexOutOfRange` if `i` is `usize::MAX`.
    pub fn set_row(&mut self, i: usize, row: Vector) -> Result<()> {
        let nr_rows = Self::end_of(i)?;
        self.grow(nr_rows, row.len());

        self.insert_row(i, row);
        Ok(())
    }

    fn insert_row(&mut self, i: usize, row: Vector) {
        debug_assert!(i < self.nr_rows && row.len() <= self.nr_columns);

        let mut row = row.with_tolerance(self.tolerance);
        row.extend(self.nr_columns - row.len());
        row.set_id(i);
        self.rows.insert(i, row);
    }

    /// Iterate over the stored rows in increasing row order.
    pub fn rows(&self) -> impl Iterator<Item=(usize, &Vector)> {
        self.rows.iter().map(|(&i, row)| (i, row))
    }

    /// Collect column `j`.
    pub fn column(&self, j: usize) -> Vector {
        let mut column = Vector::new(self.nr_rows).with_tolerance(self.tolerance);
        column.set_id(j);
        for (&i, row) in &self.rows {
            column.put(i, row.get(j));
        }

        column
    }

    /// Collect all columns in a single pass over the stored values.
    pub fn column_vectors(&self) -> Vec<Vector> {
        let mut columns = (0..self.nr_columns)
            .map(|j| {
                let mut column = Vector::new(self.nr_rows).with_tolerance(self.tolerance);
                column.set_id(j);
                column
            })
            .collect::<Vec<_>>();

        for (&i, row) in &self.rows {
            for &(j, value) in row.iter() {
                columns[j].put(i, value);
            }
        }

        columns
    }

    /// Matrix product `self * other`.
    ///
    /// # Return value
    ///
    /// `DimensionMismatch` if the number of columns of `self` differs from the number of rows of
    /// `other`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.nr_columns != other.nr_rows {
            return Err(LinearAlgebraError::DimensionMismatch {
                expected: self.nr_columns,
                found: other.nr_rows,
            });
        }

        let mut result = Matrix::new(self.nr_rows, other.nr_columns).with_tolerance(self.tolerance);
        let columns = other.column_vectors();
        for (&i, row) in &self.rows {
            for (j, column) in columns.iter().enumerate() {
                result.put(i, j, row.dot(column));
            }
        }

        Ok(result)
    }

    /// Matrix vector product `self * vector`.
    ///
    /// # Return value
    ///
    /// `DimensionMismatch` if the number of columns of `self` differs from the length of `vector`.
    pub fn multiply_vector(&self, vector: &Vector) -> Result<Vector> {
        if self.nr_columns != vector.len() {
            return Err(LinearAlgebraError::DimensionMismatch {
                expected: self.nr_columns,
                found: vector.len(),
            });
        }

        let mut result = Vector::new(self.nr_rows).with_tolerance(self.tolerance);
        for (&i, row) in &self.rows {
            result.put(i, row.dot(vector));
        }

        Ok(result)
    }

    /// Transpose of this matrix.
    ///
    /// A column whose values sum to zero (see `Vector::is_zero`) is not copied, so the
    /// corresponding row of the result reads as zero. Callers that need an exact transpose of
    /// such matrices should place the values themselves.
    #[must_use]
    pub fn transpose(&self) -> Matrix {
        let mut transposed = Matrix::new(self.nr_columns, self.nr_rows).with_tolerance(self.tolerance);
        for (j, column) in self.column_vectors().into_iter().enumerate() {
            if !column.is_zero() {
                transposed.insert_row(j, column);
            }
        }

        transposed
    }

    /// Whether the matrix is square and equal to its transpose under the tolerance.
    pub fn is_symmetric(&self) -> bool {
        if self.nr_rows != self.nr_columns {
            return false;
        }

        for (&i, row) in &self.rows {
            for &(j, value) in row.iter() {
                if i != j && !self.tolerance.approx_equal(value, self.get(j, i)) {
                    return false;
                }
            }
        }

        true
    }

    /// Inverse of this square matrix, computed using a QR decomposition.
    ///
    /// # Return value
    ///
    /// `DimensionMismatch` if the matrix is not square, `SingularMatrix` if it is singular.
    pub fn inverse(&self) -> Result<Matrix> {
        qr_solver::invert(self)
    }

    /// Solve `self x = b` using a QR decomposition.
    ///
    /// For rank deficient systems, free variables are left at zero.
    pub fn solve(&self, b: &Vector) -> Result<Vector> {
        qr_solver::solve(self, b)
    }

    /// Decompose a symmetric positive definite matrix as `L L^T`.
    pub fn cholesky(&self) -> Result<Cholesky> {
        Cholesky::decompose(self)
    }

    /// Decompose as `Q R` using Gram-Schmidt.
    pub fn qr(&self) -> Result<QR> {
        QR::decompose(self)
    }

    /// Eigenvalue estimates using QR iteration with the default settings.
    pub fn eigens(&self) -> Result<Eigen> {
        Eigen::decompose(self)
    }

    /// Eigenvalue estimates using QR iteration.
    ///
    /// # Arguments
    ///
    /// * `settings`: Iteration cap and convergence threshold.
    pub fn eigens_with(&self, settings: EigenSettings) -> Result<Eigen> {
        Eigen::decompose_with(self, settings)
    }
}

/// Equal when the dimensions match and all rows are equal, each row pair compared under the
/// coarser of the two tolerances.
///
/// Rows stored on only one of the two sides are compared against a zero row.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.nr_rows == other.nr_rows
            && self.nr_columns == other.nr_columns
            && self.rows.keys().merge(other.rows.keys()).dedup()
                .all(|&i| *self.row(i) == *other.row(i))
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..self.nr_rows {
            let row = self.row(i);
            writeln!(f, "{}", (0..self.nr_columns).map(|j| row.get(j)).join("\t"))?;
        }
        Ok(())
    }
}
