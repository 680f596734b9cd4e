//! # Eigenvalues through QR iteration
//!
//! Repeatedly decompose the iterate as `Q R` and continue with `R Q`, which is similar to it. The
//! iterate tends to an upper triangular matrix with the eigenvalues on its diagonal, while the
//! product of all `Q`'s tends to a matrix whose columns are eigenvectors (for real eigenvalues).
//!
//! Matrices with complex conjugate eigenvalue pairs keep 2 x 2 blocks on the diagonal and don't
//! converge; the iteration cap guarantees termination.
use log::debug;

use crate::algorithm::decomposition::Decomposition;
use crate::algorithm::decomposition::qr::QR;
use crate::data::linear_algebra::EPSILON;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::Vector;
use crate::error::{LinearAlgebraError, Result};

/// Stopping criteria of the QR iteration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EigenSettings {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Iteration stops once the sum of the absolute values below the diagonal is smaller.
    pub epsilon: f64,
}

impl Default for EigenSettings {
    fn default() -> Self {
        Self {
            max_iterations: 1_000,
            epsilon: EPSILON,
        }
    }
}

/// Result of the QR iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct Eigen {
    triangular: Matrix,
    transform: Matrix,

    iterations: usize,
    converged: bool,
}

/// Sum of the absolute values strictly below the diagonal.
fn lower_mass(matrix: &Matrix) -> f64 {
    matrix.rows()
        .map(|(i, row)| row.iter()
            .take_while(|&&(j, _)| j < i)
            .map(|(_, value)| value.abs())
            .sum::<f64>())
        .sum()
}

impl Decomposition for Eigen {
    /// Iterate with the default settings.
    fn decompose(matrix: &Matrix) -> Result<Self> {
        Self::decompose_with(matrix, EigenSettings::default())
    }
}

impl Eigen {
    /// Iterate until the iterate is close to upper triangular, or the iteration cap is hit.
    ///
    /// # Return value
    ///
    /// `DimensionMismatch` if the matrix is not square. Not converging is not an error, see
    /// `converged`.
    pub fn decompose_with(matrix: &Matrix, settings: EigenSettings) -> Result<Self> {
        let n = matrix.nr_rows();
        if matrix.nr_columns() != n {
            return Err(LinearAlgebraError::DimensionMismatch { expected: matrix.nr_columns(), found: n });
        }

        let mut iterate = matrix.clone();
        let mut transform = Matrix::identity(n).with_tolerance(matrix.tolerance());

        let mut iterations = 0;
        let mut converged = lower_mass(&iterate) < settings.epsilon;
        while !converged && iterations < settings.max_iterations {
            let (q, r) = QR::decompose(&iterate)?.into_parts();
            iterate = r.multiply(&q)?;
            transform = transform.multiply(&q)?;

            iterations += 1;
            converged = lower_mass(&iterate) < settings.epsilon;
        }

        if converged {
            debug!("QR iteration converged after {iterations} iterations");
        } else {
            debug!(
                "QR iteration stopped after {iterations} iterations, mass below the diagonal is {}",
                lower_mass(&iterate),
            );
        }

        Ok(Self { triangular: iterate, transform, iterations, converged })
    }

    /// The final, (nearly) upper triangular iterate.
    pub fn triangular(&self) -> &Matrix {
        &self.triangular
    }

    /// Product of all orthogonal factors.
    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    /// Eigenvalue estimates: the diagonal of the final iterate.
    pub fn eigenvalues(&self) -> Vec<f64> {
        (0..self.triangular.nr_rows())
            .map(|i| self.triangular.get(i, i))
            .collect()
    }

    /// Eigenvector estimates: the columns of the transform, in the order of `eigenvalues`.
    ///
    /// Only accurate for symmetric matrices; otherwise these are Schur vectors.
    pub fn eigenvectors(&self) -> Vec<Vector> {
        self.transform.column_vectors()
    }

    /// Number of QR steps taken.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the iteration stopped because the mass below the diagonal became small enough.
    pub fn converged(&self) -> bool {
        self.converged
    }
}
