//! # Forward substitution
//!
//! Solving a lower triangular system from the first row down. Same zero pivot policy as
//! `BackwardSubstitution`.
use crate::algorithm::solve::TriangularSolve;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::Vector;
use crate::error::{LinearAlgebraError, Result};

/// Solves `L y = b` for lower triangular `L`.
pub struct ForwardSubstitution;

impl TriangularSolve for ForwardSubstitution {
    fn solve(triangle: &Matrix, rhs: &Vector) -> Result<Vector> {
        let n = triangle.nr_rows();
        if rhs.len() != n {
            return Err(LinearAlgebraError::DimensionMismatch { expected: n, found: rhs.len() });
        }

        let tolerance = triangle.tolerance();
        let mut y = Vector::new(n).with_tolerance(tolerance);
        for i in 0..n {
            let pivot = triangle.get(i, i);
            if !tolerance.is_zero(pivot) {
                let value = (rhs.get(i) - triangle.row(i).dot(&y)) / pivot;
                y.put(i, value);
            }
        }

        Ok(y)
    }
}
