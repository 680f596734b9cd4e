//! # Solving through QR
//!
//! With `A = Q R`, `A^-1 = R^-1 Q^T`. Column `i` of the inverse is `R^-1` applied to row `i` of
//! `Q`, so no transpose needs to be formed.
use log::debug;

use crate::algorithm::decomposition::Decomposition;
use crate::algorithm::decomposition::qr::QR;
use crate::algorithm::solve::TriangularSolve;
use crate::algorithm::solve::backward_substitution::BackwardSubstitution;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::Vector;
use crate::error::{LinearAlgebraError, Result};

/// Invert a square matrix.
///
/// # Arguments
///
/// * `matrix`: Square matrix to invert.
///
/// # Return value
///
/// The inverse, `DimensionMismatch` if the matrix is not square or `SingularMatrix` with the first
/// column that depends on the columns before it.
pub fn invert(matrix: &Matrix) -> Result<Matrix> {
    let n = matrix.nr_rows();
    if matrix.nr_columns() != n {
        return Err(LinearAlgebraError::DimensionMismatch { expected: matrix.nr_columns(), found: n });
    }

    let (q, r) = QR::decompose(matrix)?.into_parts();
    let tolerance = matrix.tolerance();
    if let Some(index) = (0..n).find(|&i| tolerance.is_zero(r.get(i, i))) {
        debug!("Can't invert, column {index} depends on the columns before it");
        return Err(LinearAlgebraError::SingularMatrix { index });
    }

    let mut inverse = Matrix::new(n, n).with_tolerance(tolerance);
    for i in 0..n {
        let column = BackwardSubstitution::solve(&r, &q.row(i))?;
        for &(j, value) in column.iter() {
            inverse.put(j, i, value);
        }
    }

    Ok(inverse)
}

/// Solve `A x = b`, in the least squares sense if `A` has more rows than columns.
///
/// # Return value
///
/// `DimensionMismatch` if the length of `b` differs from the number of rows of `A`.
pub fn solve(matrix: &Matrix, b: &Vector) -> Result<Vector> {
    QR::decompose(matrix)?.solve(b)
}
