//! # Sparse vector
//!
//! Wrapping a `Vec<(usize, f64)>` that is kept sorted by index, with a length that is fixed at
//! creation. Values that the vector's `Tolerance` considers zero are never stored.
use std::fmt;
use std::fmt::Display;
use std::slice::Iter;

use itertools::Itertools;
use num_traits::ToPrimitive;

use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_algebra::tolerance::Tolerance;
use crate::data::linear_algebra::utilities::union_of_indices;
use crate::error::{LinearAlgebraError, Result};

/// A sparse vector using a `Vec` with (index, value) combinations as back-end. Indices start at
/// `0`.
#[derive(Clone, Debug)]
pub struct Vector {
    data: Vec<SparseTuple>,
    len: usize,

    /// Row or column label, set when the vector is taken from or put into a matrix.
    id: Option<usize>,
    tolerance: Tolerance,
}

impl Vector {
    /// Create a vector of length `len` with all values zero.
    pub fn new(len: usize) -> Self {
        Self {
            data: Vec::new(),
            len,

            id: None,
            tolerance: Tolerance::default(),
        }
    }

    /// Create a vector from (index, value) tuples.
    ///
    /// Tuples may come in any order; when an index appears more than once, the last value wins.
    ///
    /// # Arguments
    ///
    /// * `data`: Values to set. Values close to zero are skipped.
    /// * `len`: Length of the vector represented (and not of the internal data structure).
    ///
    /// # Return value
    ///
    /// `IndexOutOfRange` if one of the indices is not smaller than `len`.
    pub fn from_tuples(data: impl IntoIterator<Item=SparseTuple>, len: usize) -> Result<Self> {
        let mut vector = Self::new(len);
        for (index, value) in data {
            vector.set(index, value)?;
        }

        Ok(vector)
    }

    /// Create a vector from a dense slice of numbers.
    ///
    /// # Return value
    ///
    /// `InvalidArgument` if a value can't be represented as an `f64`.
    pub fn from_dense<T: ToPrimitive>(values: &[T]) -> Result<Self> {
        let mut vector = Self::new(values.len());
        for (index, value) in values.iter().enumerate() {
            let value = value.to_f64().ok_or_else(|| LinearAlgebraError::InvalidArgument(
                format!("value at index {index} can't be represented as a float"),
            ))?;
            vector.set(index, value)?;
        }

        Ok(vector)
    }

    /// Create a `Vector` representation of standard basis unit vector e_i.
    ///
    /// # Arguments
    ///
    /// * `i`: Only index where there should be a 1. Note that indexing starts at zero, and runs
    /// until (not through) `len`.
    /// * `len`: Size of the `Vector`.
    ///
    /// # Return value
    ///
    /// `IndexOutOfRange` if `i` is not smaller than `len`.
    pub fn standard_basis_vector(i: usize, len: usize) -> Result<Self> {
        if i >= len {
            return Err(LinearAlgebraError::IndexOutOfRange { index: i, len });
        }

        Ok(Self {
            data: vec![(i, 1_f64)],
            ..Self::new(len)
        })
    }

    /// Wrap already sorted tuples, dropping values that are zero under `tolerance`.
    fn from_sorted(mut data: Vec<SparseTuple>, len: usize, tolerance: Tolerance) -> Self {
        debug_assert!(data.is_sorted_by_key(|&(i, _)| i));
        debug_assert!(data.iter().all(|&(i, _)| i < len));

        data.retain(|&(_, value)| !tolerance.is_zero(value));

        Self {
            data,
            len,

            id: None,
            tolerance,
        }
    }

    /// Use a different tolerance for this vector and everything derived from it.
    ///
    /// Stored values that are zero under the new tolerance are removed.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.data.retain(|&(_, value)| !tolerance.is_zero(value));
        self.tolerance = tolerance;
        self
    }

    /// The comparator used by this vector.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Row or column label of this vector, if it has one.
    pub fn id(&self) -> Option<usize> {
        self.id
    }

    /// Label this vector.
    pub fn set_id(&mut self, id: usize) {
        self.id = Some(id);
    }

    fn get_data_index(&self, i: usize) -> std::result::Result<usize, usize> {
        self.data.binary_search_by_key(&i, |&(index, _)| index)
    }

    fn set_zero(&mut self, i: usize) {
        if let Ok(index) = self.get_data_index(i) {
            self.data.remove(index);
        }
    }

    fn check_len(&self, other: &Vector) -> Result<()> {
        if self.len == other.len {
            Ok(())
        } else {
            Err(LinearAlgebraError::DimensionMismatch { expected: self.len, found: other.len })
        }
    }

    /// Retrieve the value at an index.
    ///
    /// Any index that is not stored reads as `0.0`, including indices beyond the length.
    pub fn get(&self, i: usize) -> f64 {
        match self.get_data_index(i) {
            Ok(index) => self.data[index].1,
            Err(_) => 0_f64,
        }
    }

    /// Set the value at index `i` to `value`.
    ///
    /// # Arguments
    ///
    /// * `i`: Index of the value. New tuple will be inserted, potentially causing many values to
    /// be shifted.
    /// * `value`: Value to be taken at index `i`. If it is zero under this vector's tolerance,
    /// the entry is removed instead.
    ///
    /// # Return value
    ///
    /// `IndexOutOfRange` if `i` is not smaller than the length of this vector.
    pub fn set(&mut self, i: usize, value: f64) -> Result<()> {
        if i >= self.len {
            return Err(LinearAlgebraError::IndexOutOfRange { index: i, len: self.len });
        }

        self.put(i, value);
        Ok(())
    }

    /// Set a value at an index that is known to be in range.
    pub(crate) fn put(&mut self, i: usize, value: f64) {
        debug_assert!(i < self.len);

        if self.tolerance.is_zero(value) {
            self.set_zero(i);
        } else {
            match self.get_data_index(i) {
                Ok(index) => self.data[index].1 = value,
                Err(index) => self.data.insert(index, (i, value)),
            }
        }
    }

    /// Increase the length of the vector by padding with zeros.
    ///
    /// Only a matrix that grows changes the length of its rows.
    pub(crate) fn extend(&mut self, extra_len: usize) {
        self.len += extra_len;
    }

    /// Iterate over the stored (index, value) tuples in increasing index order.
    pub fn iter(&self) -> Iter<'_, SparseTuple> {
        self.data.iter()
    }

    /// Number of items represented by the vector.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this vector has zero length.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of values stored (and not the length of the represented vector).
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Calculate the inner product between two vectors.
    ///
    /// Only the values stored in `self` are visited; every other index contributes zero.
    #[must_use]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.data.iter()
            .map(|&(i, value)| value * other.get(i))
            .sum()
    }

    /// Inner product of this vector with itself.
    #[must_use]
    pub fn squared_norm(&self) -> f64 {
        self.data.iter()
            .map(|(_, value)| value * value)
            .sum()
    }

    fn combine(&self, other: &Vector, operation: impl Fn(f64, f64) -> f64) -> Vector {
        let data = union_of_indices(&self.data, &other.data)
            .map(|(i, left, right)| (i, operation(left, right)))
            .collect();

        Self::from_sorted(data, self.len, self.tolerance)
    }

    /// Element wise sum, over the union of the stored indices of both vectors.
    ///
    /// # Return value
    ///
    /// `DimensionMismatch` if the lengths differ.
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.check_len(other)?;

        Ok(self.combine(other, |left, right| left + right))
    }

    /// Element wise difference, over the union of the stored indices of both vectors.
    ///
    /// # Return value
    ///
    /// `DimensionMismatch` if the lengths differ.
    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.check_len(other)?;

        Ok(self.combine(other, |left, right| left - right))
    }

    /// Multiply each element of the vector by a value.
    #[must_use]
    pub fn scale(&self, scalar: f64) -> Vector {
        let mut scaled = self.clone();
        for (_, value) in &mut scaled.data {
            *value *= scalar;
        }
        let tolerance = self.tolerance;
        scaled.data.retain(|&(_, value)| !tolerance.is_zero(value));

        scaled
    }

    /// Raise each stored element to a power.
    ///
    /// Values that are not stored stay zero.
    #[must_use]
    pub fn pow(&self, exponent: f64) -> Vector {
        let data = self.data.iter()
            .map(|&(i, value)| (i, value.powf(exponent)))
            .collect();

        Self::from_sorted(data, self.len, self.tolerance)
    }

    /// Sum of all elements.
    pub fn sum(&self) -> f64 {
        self.data.iter().map(|(_, value)| value).sum()
    }

    /// Whether the elements of this vector sum to zero.
    ///
    /// Note that this is not a test on the norm: `[1, -1]` is zero in this sense. `Matrix::transpose`
    /// relies on exactly this behavior.
    pub fn is_zero(&self) -> bool {
        self.tolerance.is_zero(self.sum())
    }

    /// The component of this vector that is parallel to `direction`.
    ///
    /// # Return value
    ///
    /// `(self · v / v · v) v`, or the zero vector if `direction` has a zero norm.
    #[must_use]
    pub fn project_along(&self, direction: &Vector) -> Vector {
        let squared_norm = direction.squared_norm();
        if self.tolerance.is_zero(squared_norm) {
            return Vector::new(self.len).with_tolerance(self.tolerance);
        }

        direction.scale(self.dot(direction) / squared_norm).with_tolerance(self.tolerance)
    }

    /// Remove the components along each of the `directions`, one after the other.
    ///
    /// Each projection is computed on the residual of the previous step, as in modified
    /// Gram-Schmidt.
    ///
    /// # Return value
    ///
    /// The residual, or `DimensionMismatch` if one of the directions has a different length.
    pub fn project_orthogonal<'a>(
        &self,
        directions: impl IntoIterator<Item=&'a Vector>,
    ) -> Result<Vector> {
        let mut residual = self.clone();
        for direction in directions {
            self.check_len(direction)?;
            residual = residual.subtract(&residual.project_along(direction))?;
        }

        Ok(residual)
    }

    /// Remove the components along each of the `directions`, and report the coefficients used.
    ///
    /// # Return value
    ///
    /// The residual, and for each position `i` in `directions` the coefficient
    /// `b · v_i / v_i · v_i` where `b` is the residual before step `i`. A direction with a zero
    /// norm is skipped and gets coefficient zero.
    pub fn project_orthogonal_with_coefficients(
        &self,
        directions: &[Vector],
    ) -> Result<(Vector, Vec<f64>)> {
        let mut residual = self.clone();
        let mut coefficients = Vec::with_capacity(directions.len());

        for direction in directions {
            self.check_len(direction)?;

            let squared_norm = direction.squared_norm();
            let coefficient = if self.tolerance.is_zero(squared_norm) {
                0_f64
            } else {
                residual.dot(direction) / squared_norm
            };

            residual = residual.subtract(&direction.scale(coefficient))?;
            coefficients.push(coefficient);
        }

        Ok((residual, coefficients))
    }

    /// The `p`-norm of this vector.
    ///
    /// # Arguments
    ///
    /// * `p`: Order of the norm, `1` is the sum of absolute values, `2` the Euclidean norm.
    ///
    /// # Return value
    ///
    /// `InvalidArgument` if `p` is not positive.
    pub fn norm(&self, p: i32) -> Result<f64> {
        match p {
            p if p <= 0 => Err(LinearAlgebraError::InvalidArgument(
                format!("norm order should be positive, got {p}"),
            )),
            1 => Ok(self.data.iter().map(|(_, value)| value.abs()).sum()),
            2 => Ok(self.squared_norm().sqrt()),
            p => {
                // Scaled by the largest absolute value so that `powi` doesn't overflow
                let largest = self.data.iter()
                    .map(|(_, value)| value.abs())
                    .fold(0_f64, f64::max);
                if largest == 0_f64 {
                    return Ok(0_f64);
                }

                let sum = self.data.iter()
                    .map(|(_, value)| (value.abs() / largest).powi(p))
                    .sum::<f64>();
                Ok(largest * sum.powf(1_f64 / f64::from(p)))
            },
        }
    }

    /// Divide by the Euclidean norm.
    ///
    /// # Return value
    ///
    /// A vector of unit length, or the zero vector if this vector has a zero norm.
    #[must_use]
    pub fn normalize(&self) -> Vector {
        let norm = self.squared_norm().sqrt();
        if self.tolerance.is_zero(norm) {
            return Vector::new(self.len).with_tolerance(self.tolerance);
        }

        let data = self.data.iter()
            .map(|&(i, value)| (i, value / norm))
            .collect();

        Self::from_sorted(data, self.len, self.tolerance)
    }
}

/// Equal when the lengths match and all values are equal under the coarser of the two
/// tolerances, so that the comparison doesn't depend on the order of the operands.
///
/// The label is not compared.
impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        let tolerance = self.tolerance.coarser(other.tolerance);

        self.len == other.len
            && union_of_indices(&self.data, &other.data)
                .all(|(_, left, right)| tolerance.approx_equal(left, right))
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item=f64>>(iter: I) -> Self {
        let mut data = Vec::new();
        let mut counter = 0;

        for item in iter {
            data.push((counter, item));
            counter += 1;
        }

        Self::from_sorted(data, counter, Tolerance::default())
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        write!(f, "{}", self.data.iter().map(|(index, value)| format!("({index} {value})")).join(", "))?;
        write!(f, "]")
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::data::linear_algebra::tolerance::Tolerance;
    use crate::data::linear_algebra::vector::Vector;
    use crate::error::LinearAlgebraError;

    fn test_vector() -> Vector {
        Vector::from_dense(&[0, 5, 6]).unwrap()
    }

    #[test]
    fn new() {
        let v = Vector::from_tuples(vec![(2, 6f64), (1, 5f64)], 3).unwrap();
        assert_eq!(v.get(0), 0f64);
        assert_eq!(v.get(1), 5f64);
        assert_eq!(v.get(2), 6f64);
        assert_eq!(v.len(), 3);
        assert_eq!(v.size(), 2);
        assert_eq!(v, test_vector());

        assert!(Vector::new(0).is_empty());
        assert_eq!(Vector::new(4).size(), 0);
    }

    #[test]
    fn get_set() {
        let mut v = test_vector();

        // Getting a zero value
        assert_eq!(v.get(0), 0f64);
        // Getting beyond the length is not an error
        assert_eq!(v.get(400), 0f64);

        // Changing a value
        v.set(1, 3f64).unwrap();
        assert_eq!(v.get(1), 3f64);

        // Setting a zero removes the value
        v.set(2, 0f64).unwrap();
        assert_eq!(v.get(2), 0f64);
        assert_eq!(v.size(), 1);

        // Values very close to zero are removed as well
        v.set(1, 1e-12).unwrap();
        assert_eq!(v.get(1), 0f64);
        assert_eq!(v.size(), 0);

        v.set(0, -2f64).unwrap();
        assert_eq!(v.get(0), -2f64);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![(0, -2f64)]);
    }

    #[test]
    fn out_of_bounds_set() {
        let mut v = test_vector();
        assert_eq!(v.set(3, 45f64), Err(LinearAlgebraError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(v, test_vector());

        assert!(Vector::from_tuples(vec![(5, 1f64)], 5).is_err());
    }

    #[test]
    fn id() {
        let mut v = test_vector();
        assert_eq!(v.id(), None);
        v.set_id(7);
        assert_eq!(v.id(), Some(7));
        assert_eq!(v.scale(2f64).id(), Some(7));
    }

    #[test]
    fn dot() {
        let v = test_vector();
        assert_eq!(v.dot(&test_vector()), 5f64 * 5f64 + 6f64 * 6f64);

        let v = Vector::from_dense(&[2, 0]).unwrap();
        let w = Vector::from_dense(&[0, 3]).unwrap();
        assert_eq!(v.dot(&w), 0f64);
        assert_eq!(w.dot(&v), 0f64);

        let v = Vector::from_dense(&[1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0]).unwrap();
        let w = Vector::from_dense(&[-1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0]).unwrap();
        assert_eq!(v.dot(&w), 0f64);

        let v = Vector::from_dense(&[2, 3, 0]).unwrap();
        let w = Vector::from_dense(&[5, 7, 0]).unwrap();
        assert_eq!(v.dot(&w), 31f64);
    }

    #[test]
    fn add_subtract_disjoint() {
        let v = Vector::from_tuples(vec![(0, 1f64), (3, 2f64)], 5).unwrap();
        let w = Vector::from_tuples(vec![(1, 4f64), (4, -1f64)], 5).unwrap();

        let sum = v.add(&w).unwrap();
        assert_eq!(sum, Vector::from_dense(&[1, 4, 0, 2, -1]).unwrap());

        let difference = v.subtract(&w).unwrap();
        assert_eq!(difference, Vector::from_dense(&[1, -4, 0, 2, 1]).unwrap());

        let difference = w.subtract(&v).unwrap();
        assert_eq!(difference, Vector::from_dense(&[-1, 4, 0, -2, -1]).unwrap());
    }

    #[test]
    fn add_subtract_cancel() {
        let v = Vector::from_dense(&[1, 2, 3]).unwrap();
        let zero = v.subtract(&v).unwrap();
        assert_eq!(zero.size(), 0);
        assert_eq!(zero.len(), 3);

        let w = Vector::from_dense(&[-1, 0, 1]).unwrap();
        let sum = v.add(&w).unwrap();
        assert_eq!(sum.size(), 2);
        assert_eq!(sum, Vector::from_dense(&[0, 2, 4]).unwrap());
    }

    #[test]
    fn add_dimension_mismatch() {
        let v = Vector::new(3);
        let w = Vector::new(4);
        assert_eq!(v.add(&w), Err(LinearAlgebraError::DimensionMismatch { expected: 3, found: 4 }));
        assert!(v.subtract(&w).is_err());
    }

    #[test]
    fn scale() {
        let v = test_vector();
        assert_eq!(v.scale(2f64), Vector::from_dense(&[0, 10, 12]).unwrap());
        assert_eq!(v.scale(0f64).size(), 0);
    }

    #[test]
    fn sum_pow_is_zero() {
        let v = Vector::from_dense(&[1, -2, 3]).unwrap();
        assert_eq!(v.sum(), 2f64);
        assert_eq!(v.pow(2f64), Vector::from_dense(&[1, 4, 9]).unwrap());
        assert!(!v.is_zero());

        // A sum test, not a norm test
        let v = Vector::from_dense(&[1, -1]).unwrap();
        assert!(v.is_zero());
        assert!(Vector::new(5).is_zero());
    }

    #[test]
    fn norm() {
        let v = Vector::from_tuples(vec![(0, 3f64), (1, 4f64)], 3).unwrap();
        assert_abs_diff_eq!(v.norm(2).unwrap(), 5f64);
        assert_abs_diff_eq!(v.norm(1).unwrap(), 7f64);
        assert_abs_diff_eq!(v.norm(3).unwrap(), 91f64.powf(1f64 / 3f64), epsilon = 1e-12);

        let w = Vector::from_dense(&[-3, 0, 4]).unwrap();
        assert_abs_diff_eq!(w.norm(1).unwrap(), 7f64);

        assert!(matches!(v.norm(0), Err(LinearAlgebraError::InvalidArgument(_))));
        assert!(matches!(v.norm(-2), Err(LinearAlgebraError::InvalidArgument(_))));
    }

    #[test]
    fn normalize() {
        let v = Vector::from_tuples(vec![(0, 3f64), (1, 4f64)], 3).unwrap();
        let normalized = v.normalize();
        assert_abs_diff_eq!(normalized.get(0), 0.6f64, epsilon = 1e-12);
        assert_abs_diff_eq!(normalized.get(1), 0.8f64, epsilon = 1e-12);
        assert_eq!(normalized.get(2), 0f64);
        assert_abs_diff_eq!(normalized.norm(2).unwrap(), 1f64, epsilon = 1e-12);

        let zero = Vector::new(3).normalize();
        assert_eq!(zero.size(), 0);
        assert_eq!(zero.len(), 3);
    }

    #[test]
    fn project_along() {
        let v = Vector::from_dense(&[1, 2, 2]).unwrap();
        assert_eq!(v.project_along(&v), v);

        let x = Vector::from_dense(&[3, 0, 0]).unwrap();
        assert_eq!(v.project_along(&x), Vector::from_dense(&[1, 0, 0]).unwrap());

        // Along a zero vector
        let projection = v.project_along(&Vector::new(3));
        assert_eq!(projection.size(), 0);
        assert_eq!(projection.len(), 3);
    }

    #[test]
    fn project_orthogonal() {
        let v = Vector::from_dense(&[1, 2, 2]).unwrap();
        assert_eq!(v.project_orthogonal([&v]).unwrap().size(), 0);

        let v1 = Vector::from_tuples(vec![(1, 2f64), (5, 2f64), (7, 4f64)], 10).unwrap();
        let v2 = Vector::from_tuples(vec![(1, 1f64), (4, 2f64)], 10).unwrap();
        let v3 = v1.project_orthogonal([&v2]).unwrap();
        let v4 = v1.project_orthogonal([&v2, &v3]).unwrap();

        assert_abs_diff_eq!(v3.dot(&v2), 0f64, epsilon = 1e-6);
        assert_abs_diff_eq!(v4.dot(&v2), 0f64, epsilon = 1e-6);
        assert_abs_diff_eq!(v4.dot(&v3), 0f64, epsilon = 1e-6);

        let short = Vector::new(2);
        assert!(v1.project_orthogonal([&short]).is_err());
    }

    #[test]
    fn project_orthogonal_with_coefficients() {
        let b = Vector::from_dense(&[2, 3, 4]).unwrap();
        let directions = vec![
            Vector::from_dense(&[1, 0, 0]).unwrap(),
            Vector::new(3),
            Vector::from_dense(&[0, 2, 0]).unwrap(),
        ];
        let (residual, coefficients) = b.project_orthogonal_with_coefficients(&directions).unwrap();

        assert_eq!(residual, Vector::from_dense(&[0, 0, 4]).unwrap());
        assert_eq!(coefficients.len(), 3);
        assert_abs_diff_eq!(coefficients[0], 2f64);
        assert_eq!(coefficients[1], 0f64);
        assert_abs_diff_eq!(coefficients[2], 1.5f64);
    }

    #[test]
    fn equality_under_tolerance() {
        let v = Vector::from_dense(&[1f64, 2f64]).unwrap();
        let w = Vector::from_dense(&[1f64 + 1e-12, 2f64]).unwrap();
        assert_eq!(v, w);

        let w = Vector::from_dense(&[1f64, 2.1f64]).unwrap();
        assert_ne!(v, w);

        // Different lengths
        assert_ne!(Vector::new(2), Vector::new(3));
    }

    #[test]
    fn with_tolerance() {
        let v = Vector::from_dense(&[1e-5, 1f64]).unwrap();
        assert_eq!(v.size(), 2);

        let coarse = Tolerance::new(1e-3).unwrap();
        let v = v.with_tolerance(coarse);
        assert_eq!(v.size(), 1);
        assert_eq!(v.tolerance(), coarse);
        assert_eq!(v.scale(1e-4).size(), 0);
    }

    #[test]
    fn from_iterator_and_display() {
        let v = vec![0f64, 1f64, 0f64, 2.5f64].into_iter().collect::<Vector>();
        assert_eq!(v.len(), 4);
        assert_eq!(v.size(), 2);
        assert_eq!(v.to_string(), "[(1 1), (3 2.5)]");

    }

    #[test]
    fn standard_basis_vector() {
        let e = Vector::standard_basis_vector(2, 4).unwrap();
        assert_eq!(e, Vector::from_dense(&[0, 0, 1, 0]).unwrap());
        assert_eq!(e.size(), 1);

        assert_eq!(
            Vector::standard_basis_vector(4, 4),
            Err(LinearAlgebraError::IndexOutOfRange { index: 4, len: 4 }),
        );
        assert!(Vector::standard_basis_vector(0, 0).is_err());
    }

    #[test]
    fn extend() {
        let mut v = test_vector();
        v.extend(2);
        assert_eq!(v.len(), 5);
        assert_eq!(v.size(), 2);
        assert_eq!(v, Vector::from_dense(&[0, 5, 6, 0, 0]).unwrap());
    }

    #[test]
    fn norm_large_order() {
        let v = Vector::from_dense(&[2]).unwrap();
        assert_abs_diff_eq!(v.norm(2000).unwrap(), 2f64, epsilon = 1e-12);

        // Tends to the largest absolute value
        let v = Vector::from_dense(&[1, -3, 2]).unwrap();
        assert_abs_diff_eq!(v.norm(1000).unwrap(), 3f64, epsilon = 1e-9);

        let v = Vector::from_dense(&[1e200, 1e200]).unwrap();
        assert_abs_diff_eq!(v.norm(4).unwrap(), 2f64.powf(0.25) * 1e200, epsilon = 1e188);

        assert_eq!(Vector::new(3).norm(5).unwrap(), 0f64);
    }

    #[test]
    fn projection_against_long_direction() {
        let b = Vector::from_dense(&[1e-5, 1f64]).unwrap();
        let v = Vector::from_dense(&[1e6, 0f64]).unwrap();

        let plain = b.project_orthogonal([&v]).unwrap();
        let (residual, coefficients) = b.project_orthogonal_with_coefficients(&[v.clone()]).unwrap();

        assert_abs_diff_eq!(coefficients[0], 1e-11, epsilon = 1e-20);
        assert_eq!(residual, plain);
        assert_abs_diff_eq!(residual.dot(&v), 0f64, epsilon = 1e-9);
        assert_abs_diff_eq!(residual.get(1), 1f64);
    }

    #[test]
    fn equality_is_symmetric() {
        let coarse = Tolerance::new(1e-3).unwrap();
        let a = Vector::from_dense(&[1f64, 2f64]).unwrap().with_tolerance(coarse);
        let b = Vector::from_dense(&[1.0001, 2f64]).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, a);

        let c = Vector::from_dense(&[1.01, 2f64]).unwrap();
        assert_ne!(a, c);
        assert_ne!(c, a);
    }
}
