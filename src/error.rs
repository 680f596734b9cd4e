//! # Error reporting for linear algebra operations
//!
//! Shape and precondition violations are reported as a `LinearAlgebraError`. Numerically
//! degenerate situations that are expected for rank-deficient input (a zero pivot during
//! substitution, projecting on a zero vector) are not errors; they have a documented fallback
//! at the place where they occur.
use thiserror::Error;

/// Everything that can go wrong when calling into this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinearAlgebraError {
    /// An index was used that is not smaller than the length of a fixed size vector.
    #[error("index {index} is out of range for a vector of length {len}")]
    IndexOutOfRange {
        /// The index that was used.
        index: usize,
        /// The length of the vector.
        len: usize,
    },
    /// The shapes of the operands don't fit together.
    ///
    /// For products, `expected` is the inner dimension of the left operand and `found` that of
    /// the right operand. For operations requiring a square matrix, `expected` is the number of
    /// columns and `found` the number of rows.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension required by the left operand.
        expected: usize,
        /// Dimension offered by the right operand.
        found: usize,
    },
    /// A pivot was (close to) zero while inverting a matrix.
    #[error("matrix is singular: zero pivot at index {index}")]
    SingularMatrix {
        /// Diagonal index of the first zero pivot.
        index: usize,
    },
    /// The input to a Cholesky decomposition was not symmetric positive definite.
    #[error("matrix is not symmetric positive definite (detected at index {index})")]
    NotPositiveDefinite {
        /// Row at which the violation was detected.
        index: usize,
    },
    /// A malformed argument, such as a non-positive norm order.
    ///
    /// The contained `String` is a message for the end user.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, LinearAlgebraError>;
