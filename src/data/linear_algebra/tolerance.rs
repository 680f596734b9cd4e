//! # Comparing floats with a fixed threshold
//!
//! All components compare against the same epsilon: a value smaller in absolute value is exactly
//! zero, two values closer than it are equal. A `Tolerance` is owned by every vector and matrix,
//! and the results of an operation carry over the tolerance of the left operand.
use crate::data::linear_algebra::EPSILON;
use crate::error::{LinearAlgebraError, Result};

/// Fixed-epsilon comparator for `f64` values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// Create a comparator with a custom threshold.
    ///
    /// # Arguments
    ///
    /// * `epsilon`: Positive and finite threshold.
    ///
    /// # Return value
    ///
    /// `InvalidArgument` if the threshold is not positive or not finite.
    pub fn new(epsilon: f64) -> Result<Self> {
        if epsilon.is_finite() && epsilon > 0_f64 {
            Ok(Self { epsilon })
        } else {
            Err(LinearAlgebraError::InvalidArgument(format!(
                "tolerance should be positive and finite, got {epsilon}",
            )))
        }
    }

    /// The threshold.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Whether `x` is treated as exactly zero.
    pub fn is_zero(&self, x: f64) -> bool {
        x.abs() < self.epsilon
    }

    /// Whether `a` and `b` are treated as equal.
    pub fn approx_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.epsilon
    }

    /// The tolerance with the larger threshold of the two.
    #[must_use]
    pub fn coarser(self, other: Tolerance) -> Tolerance {
        if other.epsilon > self.epsilon { other } else { self }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}
