use crate::intervals::Interval;
use crate::normalize::is_normalized;
use crate::scalar::Scalar;
use itertools::Itertools;

/// All intervals that contain the point, in their original order.
#[must_use]
pub fn point_query<T: Scalar>(
    intervals: &[Interval<T>],
    point: &T,
) -> Vec<Interval<T>> {
    intervals
        .iter()
        .filter(|i| i.contains_point(point))
        .copied()
        .collect()
}

/// Same as [`point_query`], for intervals sorted by start (they may
/// overlap).  Intervals starting after the point are skipped with a binary
/// search.
#[must_use]
pub fn point_query_sorted<T: Scalar>(
    intervals: &[Interval<T>],
    point: &T,
) -> Vec<Interval<T>> {
    debug_assert!(
        intervals.iter().tuple_windows().all(|(a, b)| a <= b),
        "point_query_sorted requires sorted input"
    );
    let candidates = intervals.partition_point(|i| i.start() <= *point);
    intervals
        .iter()
        .take(candidates)
        .filter(|i| i.end() >= *point)
        .copied()
        .collect()
}

/// The interval of the normalized list that contains all of target, if any.
///
/// This requires a single interval to cover target: in a list that was not
/// normalized, `[1, 3]` and `[3, 6]` together cover `[2, 5]` but neither
/// does on its own.  Normalizing first merges them.
#[must_use]
pub fn covering_interval<'a, T: Scalar>(
    normalized: &'a [Interval<T>],
    target: &Interval<T>,
) -> Option<&'a Interval<T>> {
    debug_assert!(is_normalized(normalized), "covers requires normalized input");
    let after = normalized.partition_point(|i| i.start() <= target.start());
    let candidate = normalized.get(after.checked_sub(1)?)?;
    candidate.contains(target).then_some(candidate)
}

/// Whether target is fully contained in one interval of the normalized list.
#[must_use]
pub fn covers<T: Scalar>(normalized: &[Interval<T>], target: &Interval<T>) -> bool {
    covering_interval(normalized, target).is_some()
}

/// Whether the point is in one interval of the normalized list.
#[must_use]
pub fn covers_point<T: Scalar>(normalized: &[Interval<T>], point: &T) -> bool {
    covers(normalized, &Interval::new_single(*point))
}
