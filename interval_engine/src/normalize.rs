use crate::intervals::Interval;
use crate::scalar::Scalar;
use itertools::Itertools;

/// Whether the intervals are in canonical form: sorted by start, and with
/// at least one value between any two consecutive intervals.
/// This is the precondition of most operations in this crate.
#[must_use]
pub fn is_normalized<T: Scalar>(intervals: &[Interval<T>]) -> bool {
    intervals
        .iter()
        .tuple_windows()
        .all(|(left, right)| left.strictly_left_of(right))
}

/// Sorts and merges the intervals into their canonical form.
///
/// Intervals that overlap are merged, including those that only share a
/// bound (`[1, 3]` and `[3, 5]` give `[1, 5]`).  Adjacent intervals with no
/// common value (`[1, 3]` and `[4, 5]`) are kept separate.
///
/// ```
///    use interval_engine::{normalize, Interval};
///    let merged = normalize(&[
///        Interval::new(8, 10).unwrap(),
///        Interval::new(1, 3).unwrap(),
///        Interval::new(2, 6).unwrap(),
///    ]);
///    assert_eq!(
///        merged,
///        vec![Interval::new(1, 6).unwrap(), Interval::new(8, 10).unwrap()],
///    );
/// ```
#[must_use]
pub fn normalize<T: Scalar>(intervals: &[Interval<T>]) -> Vec<Interval<T>> {
    normalize_vec(intervals.to_vec())
}

/// Same as [`normalize`], but reuses the vector's storage.
#[must_use]
pub fn normalize_vec<T: Scalar>(
    mut intervals: Vec<Interval<T>>,
) -> Vec<Interval<T>> {
    let count = intervals.len();
    intervals.sort_unstable();

    // `current` is removed when it overlaps the last kept interval, which
    // absorbs it.
    intervals.dedup_by(|current, candidate| {
        if candidate.overlaps(current) {
            *candidate = candidate.convex_hull(current);
            true
        } else {
            false
        }
    });

    log::trace!("normalize: {} intervals into {}", count, intervals.len());
    intervals
}

/// Inserts a new interval into a normalized list, merging it with every
/// interval it overlaps.  The input is not modified.
///
/// `sorted` must already be normalized (see [`is_normalized`]).  This is
/// only checked in debug builds; other inputs give unspecified results.
/// Runs in linear time.
#[must_use]
pub fn insert_and_merge<T: Scalar>(
    sorted: &[Interval<T>],
    new: Interval<T>,
) -> Vec<Interval<T>> {
    debug_assert!(
        is_normalized(sorted),
        "insert_and_merge requires normalized input"
    );

    let mut result = Vec::with_capacity(sorted.len() + 1);
    let mut rest = sorted.iter().copied().peekable();

    while let Some(before) = rest.next_if(|i| i.end() < new.start()) {
        result.push(before);
    }

    let mut merged = new;
    while let Some(overlapping) = rest.next_if(|i| i.start() <= merged.end()) {
        merged = merged.convex_hull(&overlapping);
    }
    result.push(merged);

    result.extend(rest);
    result
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::{
        covered, init_logging, iv, ivs, pairs, random_intervals, rng,
    };

    #[test]
    fn test_normalize() {
        init_logging();
        assert_eq!(
            pairs(&normalize(&ivs(&[(1, 3), (2, 6), (8, 10), (15, 18)]))),
            vec![(1, 6), (8, 10), (15, 18)],
        );
        assert_eq!(
            pairs(&normalize(&ivs(&[(15, 18), (8, 10), (2, 6), (1, 3)]))),
            vec![(1, 6), (8, 10), (15, 18)],
        );
        assert_eq!(
            pairs(&normalize(&ivs(&[(1, 4), (2, 3)]))),
            vec![(1, 4)],
        );
        assert_eq!(
            pairs(&normalize(&ivs(&[(1, 10), (2, 3), (4, 12), (11, 11)]))),
            vec![(1, 12)],
        );
    }

    #[test]
    fn test_touching() {
        assert_eq!(
            pairs(&normalize(&ivs(&[(1, 3), (3, 5), (5, 7)]))),
            vec![(1, 7)],
        );

        // Adjacent, but no common value
        assert_eq!(
            pairs(&normalize(&ivs(&[(4, 5), (1, 3)]))),
            vec![(1, 3), (4, 5)],
        );
    }

    #[test]
    fn test_trivial() {
        assert_eq!(normalize::<i64>(&[]), vec![]);
        assert_eq!(normalize(&[iv(3, 7)]), vec![iv(3, 7)]);
        assert_eq!(normalize(&[iv(3, 7), iv(3, 7)]), vec![iv(3, 7)]);
    }

    #[test]
    fn test_is_normalized() {
        assert!(is_normalized::<i64>(&[]));
        assert!(is_normalized(&ivs(&[(1, 3)])));
        assert!(is_normalized(&ivs(&[(1, 3), (4, 5)])));
        assert!(!is_normalized(&ivs(&[(1, 3), (3, 5)])));
        assert!(!is_normalized(&ivs(&[(4, 5), (1, 3)])));
    }

    #[test]
    fn test_normalize_properties() {
        let mut rng = rng(7);
        for _ in 0..200 {
            let input = random_intervals(&mut rng, 12, 60, 10);
            let result = normalize(&input);

            assert!(is_normalized(&result), "{input:?} gave {result:?}");
            assert_eq!(normalize(&result), result, "not idempotent");
            for point in -1..=61 {
                assert_eq!(
                    covered(&input, point),
                    covered(&result, point),
                    "coverage of {point} differs for {input:?}",
                );
            }
        }
    }

    #[test]
    fn test_insert_and_merge() {
        let sorted = ivs(&[(1, 2), (3, 5), (6, 7), (8, 10), (12, 16)]);
        assert_eq!(
            pairs(&insert_and_merge(&sorted, iv(4, 8))),
            vec![(1, 2), (3, 10), (12, 16)],
        );
        assert_eq!(sorted.len(), 5);

        let sorted = ivs(&[(1, 3), (6, 9)]);
        assert_eq!(
            pairs(&insert_and_merge(&sorted, iv(2, 5))),
            vec![(1, 5), (6, 9)],
        );
        assert_eq!(
            pairs(&insert_and_merge(&sorted, iv(4, 5))),
            vec![(1, 3), (4, 5), (6, 9)],
        );
        assert_eq!(
            pairs(&insert_and_merge(&sorted, iv(3, 6))),
            vec![(1, 9)],
        );
        assert_eq!(
            pairs(&insert_and_merge(&sorted, iv(-5, -1))),
            vec![(-5, -1), (1, 3), (6, 9)],
        );
        assert_eq!(
            pairs(&insert_and_merge(&sorted, iv(20, 21))),
            vec![(1, 3), (6, 9), (20, 21)],
        );
        assert_eq!(
            pairs(&insert_and_merge(&sorted, iv(0, 30))),
            vec![(0, 30)],
        );
        assert_eq!(pairs(&insert_and_merge(&[], iv(2, 4))), vec![(2, 4)]);
    }

    #[test]
    fn test_insert_matches_normalize() {
        let mut rng = rng(11);
        for _ in 0..200 {
            let sorted = normalize(&random_intervals(&mut rng, 8, 50, 6));
            let extra = random_intervals(&mut rng, 1, 50, 15);
            for new in extra {
                let mut all = sorted.clone();
                all.push(new);
                assert_eq!(insert_and_merge(&sorted, new), normalize(&all));
            }
        }
    }
}
