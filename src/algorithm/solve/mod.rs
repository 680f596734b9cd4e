//! # Solving linear systems
//!
//! Triangular solves, and solving or inverting general systems through a QR decomposition.
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::Vector;
use crate::error::Result;

pub mod backward_substitution;
pub mod forward_substitution;
pub mod qr_solver;

/// Solve `T x = b` for a triangular matrix `T`.
///
/// A (close to) zero diagonal value is not an error: the corresponding variable is left at zero
/// and the result is a particular solution, which is what rank deficient decompositions need.
pub trait TriangularSolve {
    /// Compute `x`.
    ///
    /// # Arguments
    ///
    /// * `triangle`: Triangular matrix; its number of rows is the number of variables.
    /// * `rhs`: Right hand side, its length should equal the number of rows of `triangle`.
    ///
    /// # Return value
    ///
    /// A vector with one value for each row of `triangle`, or `DimensionMismatch`.
    fn solve(triangle: &Matrix, rhs: &Vector) -> Result<Vector>;
}
