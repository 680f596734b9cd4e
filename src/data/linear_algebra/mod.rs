//! # Linear algebra primitives
//!
//! Sparse vectors and matrices. Only values that are not (close to) zero are stored, everything
//! else reads as exactly `0.0`.

pub mod matrix;
pub mod tolerance;
pub mod vector;
pub(crate) mod utilities;

/// Default threshold below which a value is considered to be zero.
pub const EPSILON: f64 = 1e-10;

/// A single non-zero value together with its index.
pub type SparseTuple = (usize, f64);
