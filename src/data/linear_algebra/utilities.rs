//! Helper algorithms for the `linear_algebra` module.
use itertools::{EitherOrBoth, Itertools};

use crate::data::linear_algebra::SparseTuple;

/// Walk over the union of the indices of two sparse slices.
///
/// An index that is absent on one side reads as zero on that side, so operands with disjoint
/// sparsity patterns combine safely.
///
/// # Arguments
///
/// * `left`: Tuples sorted by index.
/// * `right`: Tuples sorted by index.
///
/// # Return value
///
/// Triples `(index, left_value, right_value)` in increasing index order.
pub(crate) fn union_of_indices<'a>(
    left: &'a [SparseTuple],
    right: &'a [SparseTuple],
) -> impl Iterator<Item=(usize, f64, f64)> + 'a {
    debug_assert!(left.is_sorted_by_key(|&(i, _)| i));
    debug_assert!(right.is_sorted_by_key(|&(i, _)| i));

    left.iter()
        .merge_join_by(right.iter(), |l, r| l.0.cmp(&r.0))
        .map(|pair| match pair {
            EitherOrBoth::Both(&(i, l), &(_, r)) => (i, l, r),
            EitherOrBoth::Left(&(i, l)) => (i, l, 0_f64),
            EitherOrBoth::Right(&(i, r)) => (i, 0_f64, r),
        })
}
