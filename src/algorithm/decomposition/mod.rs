//! # Matrix decompositions
//!
//! Each decomposition owns the matrices it computes and reads the tolerance of the matrix it was
//! computed from.
use crate::data::linear_algebra::matrix::Matrix;
use crate::error::Result;

pub mod cholesky;
pub mod eigen;
pub mod qr;

/// A factorization that can be computed from a single matrix.
pub trait Decomposition: Sized {
    /// Compute the factorization.
    ///
    /// # Return value
    ///
    /// An error if the matrix doesn't meet the preconditions of the factorization.
    fn decompose(matrix: &Matrix) -> Result<Self>;
}
