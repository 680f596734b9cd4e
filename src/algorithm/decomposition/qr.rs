//! # QR decomposition
//!
//! Gram-Schmidt orthogonalization of the columns of a matrix. The projection coefficients of each
//! column on the previously accepted basis vectors form the column of `R` above the diagonal, the
//! norm of what remains is the diagonal value.
//!
//! `Q` has the same dimensions as the input, and its columns are the basis vectors: column `i` of
//! `Q` is `q_i`. Values are placed directly, so no transpose is involved.
use log::trace;

use crate::algorithm::decomposition::Decomposition;
use crate::algorithm::solve::TriangularSolve;
use crate::algorithm::solve::backward_substitution::BackwardSubstitution;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::Vector;
use crate::error::{LinearAlgebraError, Result};

/// Decomposition `A = Q R` with orthonormal columns in `Q` (or zero columns, for columns of `A`
/// that depend linearly on the ones before) and an upper triangular `R`.
#[derive(Clone, Debug, PartialEq)]
pub struct QR {
    q: Matrix,
    r: Matrix,
}

impl Decomposition for QR {
    /// Decompose an `m` x `n` matrix into an `m` x `n` matrix `Q` and an `n` x `n` matrix `R`.
    ///
    /// A column that lies in the span of the columns before it gets a zero diagonal value in `R`
    /// and a zero column in `Q`.
    fn decompose(matrix: &Matrix) -> Result<Self> {
        let tolerance = matrix.tolerance();
        let (nr_rows, nr_columns) = (matrix.nr_rows(), matrix.nr_columns());

        let mut q = Matrix::new(nr_rows, nr_columns).with_tolerance(tolerance);
        let mut r = Matrix::new(nr_columns, nr_columns).with_tolerance(tolerance);
        let mut basis = Vec::with_capacity(nr_columns);

        for (i, column) in matrix.column_vectors().into_iter().enumerate() {
            let (residual, coefficients) = column.project_orthogonal_with_coefficients(&basis)?;
            for (j, coefficient) in coefficients.into_iter().enumerate() {
                r.put(j, i, coefficient);
            }

            let norm = residual.norm(2)?;
            if tolerance.is_zero(norm) {
                trace!("Column {i} lies in the span of the columns before it");
                basis.push(Vector::new(nr_rows).with_tolerance(tolerance));
            } else {
                r.put(i, i, norm);
                let direction = residual.normalize();
                for &(row, value) in direction.iter() {
                    q.put(row, i, value);
                }
                basis.push(direction);
            }
        }

        Ok(Self { q, r })
    }
}

impl QR {
    /// The factor with orthonormal (or zero) columns.
    pub fn q(&self) -> &Matrix {
        &self.q
    }

    /// The upper triangular factor.
    pub fn r(&self) -> &Matrix {
        &self.r
    }

    /// Take ownership of `Q` and `R`, in that order.
    pub fn into_parts(self) -> (Matrix, Matrix) {
        (self.q, self.r)
    }

    /// Compute `Q^T b` without forming the transpose.
    fn transpose_q_times(&self, b: &Vector) -> Vector {
        let mut values = vec![0_f64; self.q.nr_columns()];
        for (i, row) in self.q.rows() {
            let factor = b.get(i);
            for &(j, value) in row.iter() {
                values[j] += value * factor;
            }
        }

        // Filtered under the tolerance of `Q`, which may be finer than the default
        let mut product = Vector::new(values.len()).with_tolerance(self.q.tolerance());
        for (j, value) in values.into_iter().enumerate() {
            product.put(j, value);
        }

        product
    }

    /// Solve `A x = b` through `R x = Q^T b`.
    ///
    /// For an overdetermined system this is the least squares solution. Variables belonging to a
    /// zero diagonal value of `R` are left at zero.
    ///
    /// # Return value
    ///
    /// `DimensionMismatch` if the length of `b` differs from the number of rows of `A`.
    pub fn solve(&self, b: &Vector) -> Result<Vector> {
        if b.len() != self.q.nr_rows() {
            return Err(LinearAlgebraError::DimensionMismatch {
                expected: self.q.nr_rows(),
                found: b.len(),
            });
        }

        BackwardSubstitution::solve(&self.r, &self.transpose_q_times(b))
    }
}
