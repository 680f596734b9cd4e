//! # Cholesky decomposition
//!
//! Decomposes a symmetric positive definite matrix `A` into `L L^T` where `L` is lower triangular
//! with a positive diagonal.
use crate::algorithm::decomposition::Decomposition;
use crate::algorithm::solve::TriangularSolve;
use crate::algorithm::solve::backward_substitution::BackwardSubstitution;
use crate::algorithm::solve::forward_substitution::ForwardSubstitution;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::Vector;
use crate::error::{LinearAlgebraError, Result};

/// Lower triangular factor `L` of `A = L L^T`.
#[derive(Clone, Debug, PartialEq)]
pub struct Cholesky {
    l: Matrix,
}

impl Decomposition for Cholesky {
    /// Compute `L` row by row.
    ///
    /// # Return value
    ///
    /// `DimensionMismatch` if the matrix is not square. `NotPositiveDefinite` if it is not
    /// symmetric, or when a diagonal value would be the square root of a number that is negative
    /// or zero.
    fn decompose(matrix: &Matrix) -> Result<Self> {
        let n = matrix.nr_rows();
        if matrix.nr_columns() != n {
            return Err(LinearAlgebraError::DimensionMismatch { expected: matrix.nr_columns(), found: n });
        }

        let tolerance = matrix.tolerance();
        let asymmetric_row = matrix.rows()
            .find(|&(i, row)| row.iter().any(|&(j, value)| !tolerance.approx_equal(value, matrix.get(j, i))))
            .map(|(i, _)| i);
        if let Some(index) = asymmetric_row {
            return Err(LinearAlgebraError::NotPositiveDefinite { index });
        }

        let mut l = Matrix::new(n, n).with_tolerance(tolerance);
        for i in 0..n {
            for j in 0..i {
                // Row `i` of `l` only holds values left of column `j` at this point
                let sum = l.row(i).dot(&l.row(j));
                l.put(i, j, (matrix.get(i, j) - sum) / l.get(j, j));
            }

            let radicand = matrix.get(i, i) - l.row(i).squared_norm();
            if radicand < 0_f64 || tolerance.is_zero(radicand) {
                return Err(LinearAlgebraError::NotPositiveDefinite { index: i });
            }
            l.put(i, i, radicand.sqrt());
        }

        Ok(Self { l })
    }
}

impl Cholesky {
    /// The lower triangular factor.
    pub fn l(&self) -> &Matrix {
        &self.l
    }

    /// Take ownership of the lower triangular factor.
    pub fn into_l(self) -> Matrix {
        self.l
    }

    /// Solve `A x = b` by solving `L y = b` and then `L^T x = y`.
    ///
    /// # Return value
    ///
    /// `DimensionMismatch` if the length of `b` differs from the size of `A`.
    pub fn solve(&self, b: &Vector) -> Result<Vector> {
        let y = ForwardSubstitution::solve(&self.l, b)?;

        let n = self.l.nr_rows();
        let mut upper = Matrix::new(n, n).with_tolerance(self.l.tolerance());
        for (i, row) in self.l.rows() {
            for &(j, value) in row.iter() {
                upper.put(j, i, value);
            }
        }

        BackwardSubstitution::solve(&upper, &y)
    }
}
