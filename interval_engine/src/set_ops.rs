//! Set operations between two collections of intervals.
//!
//! ```text
//!      A:  [-----]     [---------]
//!      B:      [----------]    [------]
//!
//!          [----------------------------]    union
//!              [-]     [--]    [-]           intersection
//!          [--]           [---]              difference (A - B)
//!          [--]   [---]   [---]  [----]      symmetric difference
//! ```

use crate::gaps::window_gaps;
use crate::intervals::Interval;
use crate::normalize::{is_normalized, normalize_vec};
use crate::scalar::Scalar;

/// Returns the values that are in both collections, as a normalized list.
///
/// Both inputs must be normalized (checked only in debug builds).  Runs in
/// `O(n + m)`.
#[must_use]
pub fn intersect<T: Scalar>(
    sorted_a: &[Interval<T>],
    sorted_b: &[Interval<T>],
) -> Vec<Interval<T>> {
    debug_assert!(is_normalized(sorted_a), "intersect: left not normalized");
    debug_assert!(is_normalized(sorted_b), "intersect: right not normalized");

    let mut result = Vec::new();
    let mut left = sorted_a.iter().peekable();
    let mut right = sorted_b.iter().peekable();

    while let (Some(&&a), Some(&&b)) = (left.peek(), right.peek()) {
        if let Some(common) = a.intersection(&b) {
            result.push(common);
        }

        // The interval that ends first cannot overlap anything else on the
        // other side.
        if a.end() < b.end() {
            left.next();
        } else {
            right.next();
        }
    }

    log::trace!(
        "intersect: {} x {} intervals gave {}",
        sorted_a.len(),
        sorted_b.len(),
        result.len()
    );
    result
}

/// Returns the values that are in either collection, as a normalized list.
/// Inputs do not need to be sorted.
#[must_use]
pub fn union<T: Scalar>(a: &[Interval<T>], b: &[Interval<T>]) -> Vec<Interval<T>> {
    let mut all = Vec::with_capacity(a.len() + b.len());
    all.extend_from_slice(a);
    all.extend_from_slice(b);
    normalize_vec(all)
}

/// Returns the values of `a` that are not in `b` (A - B).
///
/// Both inputs must be normalized (checked only in debug builds).  Each
/// interval of `a` is split around the intervals of `b` it overlaps.
#[must_use]
pub fn difference<T: Scalar>(
    a: &[Interval<T>],
    b: &[Interval<T>],
) -> Vec<Interval<T>> {
    debug_assert!(is_normalized(a), "difference: left not normalized");
    debug_assert!(is_normalized(b), "difference: right not normalized");

    let mut result = Vec::with_capacity(a.len());
    let mut holes = b.iter().peekable();

    for source in a {
        while holes.next_if(|h| h.end() < source.start()).is_some() {}

        // Not consumed: a hole may extend over the next source too.
        let overlapping = holes
            .clone()
            .take_while(|h| h.start() <= source.end());
        result.extend(window_gaps(overlapping, source));
    }
    result
}

/// Returns the values that are in exactly one of the two collections.
/// Both inputs must be normalized.
#[must_use]
pub fn symmetric_difference<T: Scalar>(
    a: &[Interval<T>],
    b: &[Interval<T>],
) -> Vec<Interval<T>> {
    union(&difference(a, b), &difference(b, a))
}
