//! # Backward substitution
//!
//! Solving an upper triangular system from the last row up.
use crate::algorithm::solve::TriangularSolve;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::Vector;
use crate::error::{LinearAlgebraError, Result};

/// Solves `R x = c` for upper triangular `R`.
pub struct BackwardSubstitution;

impl TriangularSolve for BackwardSubstitution {
    fn solve(triangle: &Matrix, rhs: &Vector) -> Result<Vector> {
        let n = triangle.nr_rows();
        if rhs.len() != n {
            return Err(LinearAlgebraError::DimensionMismatch { expected: n, found: rhs.len() });
        }

        let tolerance = triangle.tolerance();
        let mut x = Vector::new(n).with_tolerance(tolerance);
        for i in (0..n).rev() {
            let pivot = triangle.get(i, i);
            if !tolerance.is_zero(pivot) {
                // Only values right of the diagonal meet a non-zero in `x`
                let value = (rhs.get(i) - triangle.row(i).dot(&x)) / pivot;
                x.put(i, value);
            }
        }

        Ok(x)
    }
}
