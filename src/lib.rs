//! # Sparse linear algebra
//!
//! Sparse vectors and matrices of `f64` values with a configurable tolerance, and the dense
//! algorithms built on top of them: Gram-Schmidt QR decomposition, inversion and least squares
//! solving through QR, Cholesky decomposition and eigenvalue estimation by QR iteration.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

#[cfg(test)]
mod tests;
