use crate::intervals::Interval;
use crate::scalar::Scalar;
use crate::sweep::Handoff;

/// The result of a greedy selection: a largest possible subset of
/// non-conflicting intervals, and everything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection<T> {
    /// The selected intervals, sorted by end.
    pub kept: Vec<Interval<T>>,

    /// The intervals that had to be dropped, sorted by end.
    pub removed: Vec<Interval<T>>,
}

impl<T> Selection<T> {
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// Selects as many non-conflicting intervals as possible (activity
/// selection).
///
/// Intervals are considered by increasing end, and kept when they start
/// after the last kept one ends.  Picking the interval that frees up first
/// is always optimal, so `removed_count()` is the minimum number of
/// intervals to drop for the rest to be conflict-free.
///
/// With [`Handoff::Shared`], an interval may start exactly where the
/// previous one ends.  A zero-length interval `[A, A]` still conflicts with
/// any interval running across `A`.
#[must_use]
pub fn max_non_overlapping<T: Scalar>(
    intervals: &[Interval<T>],
    handoff: Handoff,
) -> Selection<T> {
    let mut by_end = intervals.to_vec();
    by_end.sort_unstable_by_key(|i| (i.end(), i.start()));

    let mut kept = Vec::with_capacity(by_end.len());
    let mut removed = Vec::new();
    let mut last_end: Option<T> = None;

    for intv in by_end {
        let fits = match (last_end, handoff) {
            (None, _) => true,
            (Some(end), Handoff::Shared) => intv.start() >= end,
            (Some(end), Handoff::Exclusive) => intv.start() > end,
        };
        if fits {
            last_end = Some(intv.end());
            kept.push(intv);
        } else {
            removed.push(intv);
        }
    }

    log::debug!(
        "max_non_overlapping: kept {} of {} intervals",
        kept.len(),
        intervals.len()
    );
    Selection { kept, removed }
}

/// The minimum number of intervals to remove so that none of the others
/// overlap, along with the intervals that are kept.
/// Intervals that merely touch (`[1, 2]` and `[2, 3]`) are compatible.
#[must_use]
pub fn min_removal_for_no_overlap<T: Scalar>(
    intervals: &[Interval<T>],
) -> (usize, Vec<Interval<T>>) {
    let selection = max_non_overlapping(intervals, Handoff::Shared);
    (selection.removed_count(), selection.kept)
}

/// Whether a single person can attend all the meetings, i.e. no two of them
/// overlap.  Back-to-back meetings are fine.
#[must_use]
pub fn can_attend_all<T: Scalar>(intervals: &[Interval<T>]) -> bool {
    max_non_overlapping(intervals, Handoff::Shared).removed.is_empty()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sweep::min_meeting_rooms;
    use crate::test_utils::{
        init_logging, iv, ivs, pairs, random_intervals, rng,
    };

    fn compatible(
        a: &Interval<i64>,
        b: &Interval<i64>,
        handoff: Handoff,
    ) -> bool {
        match handoff {
            Handoff::Exclusive => !a.overlaps(b),
            Handoff::Shared => a.end() <= b.start() || b.end() <= a.start(),
        }
    }

    /// Size of the largest pairwise-compatible subset, by trying them all.
    fn brute_force_max(intervals: &[Interval<i64>], handoff: Handoff) -> usize {
        let n = intervals.len();
        (0_u32..(1 << n))
            .filter(|mask| {
                let chosen: Vec<_> = intervals
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| mask & (1 << idx) != 0)
                    .map(|(_, i)| i)
                    .collect();
                chosen.iter().enumerate().all(|(idx, a)| {
                    chosen
                        .iter()
                        .skip(idx + 1)
                        .all(|b| compatible(a, b, handoff))
                })
            })
            .map(|mask| mask.count_ones() as usize)
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_min_removal() {
        init_logging();
        let (removed, kept) =
            min_removal_for_no_overlap(&ivs(&[(1, 2), (2, 3), (3, 4), (1, 3)]));
        assert_eq!(removed, 1);
        assert_eq!(pairs(&kept), vec![(1, 2), (2, 3), (3, 4)]);

        let (removed, kept) =
            min_removal_for_no_overlap(&ivs(&[(1, 2), (1, 2), (1, 2)]));
        assert_eq!(removed, 2);
        assert_eq!(pairs(&kept), vec![(1, 2)]);

        let (removed, _) = min_removal_for_no_overlap(&ivs(&[(1, 2), (2, 3)]));
        assert_eq!(removed, 0);

        assert_eq!(min_removal_for_no_overlap::<i64>(&[]), (0, vec![]));
    }

    #[test]
    fn test_selection() {
        let meetings = ivs(&[
            (1, 4), (3, 5), (0, 6), (5, 7), (3, 9), (5, 9),
            (6, 10), (8, 11), (8, 12), (2, 14), (12, 16),
        ]);
        let shared = max_non_overlapping(&meetings, Handoff::Shared);
        assert_eq!(
            pairs(&shared.kept),
            vec![(1, 4), (5, 7), (8, 11), (12, 16)],
        );
        assert_eq!(shared.removed_count(), 7);

        let exclusive = max_non_overlapping(
            &ivs(&[(1, 2), (2, 3), (3, 4)]),
            Handoff::Exclusive,
        );
        assert_eq!(pairs(&exclusive.kept), vec![(1, 2), (3, 4)]);
        assert_eq!(pairs(&exclusive.removed), vec![(2, 3)]);
    }

    #[test]
    fn test_can_attend_all() {
        assert!(can_attend_all(&ivs(&[(7, 10), (2, 4)])));
        assert!(can_attend_all(&ivs(&[(9, 10), (10, 11)])));
        assert!(!can_attend_all(&ivs(&[(0, 30), (5, 10), (15, 20)])));
        assert!(can_attend_all::<i64>(&[]));
        assert!(can_attend_all(&[iv(5, 5)]));
        assert!(can_attend_all(&ivs(&[(3, 3), (3, 3)])));
        assert!(can_attend_all(&ivs(&[(2, 3), (3, 3), (3, 5)])));
        assert!(!can_attend_all(&ivs(&[(3, 3), (2, 5)])));
    }

    #[test]
    fn test_zero_length() {
        let (removed, kept) = min_removal_for_no_overlap(&ivs(&[(2, 5), (3, 3)]));
        assert_eq!(removed, 1);
        assert_eq!(pairs(&kept), vec![(3, 3)]);

        let selection = max_non_overlapping(
            &ivs(&[(1, 4), (4, 4), (4, 6), (5, 5)]),
            Handoff::Shared,
        );
        assert_eq!(pairs(&selection.kept), vec![(1, 4), (4, 4), (5, 5)]);
        assert_eq!(pairs(&selection.removed), vec![(4, 6)]);
    }

    #[test]
    fn test_against_brute_force() {
        let mut rng = rng(17);
        for _ in 0..300 {
            let intervals = random_intervals(&mut rng, 10, 30, 8);
            for handoff in [Handoff::Shared, Handoff::Exclusive] {
                let selection = max_non_overlapping(&intervals, handoff);
                assert_eq!(
                    selection.kept.len(),
                    brute_force_max(&intervals, handoff),
                    "{handoff:?} {intervals:?}",
                );
                assert_eq!(
                    selection.kept.len() + selection.removed_count(),
                    intervals.len(),
                );
                assert!(selection.kept.iter().enumerate().all(|(idx, a)| {
                    selection
                        .kept
                        .iter()
                        .skip(idx + 1)
                        .all(|b| compatible(a, b, handoff))
                }));
            }

            // One room is enough exactly when nothing needs to be removed.
            // Zero-length intervals need no room but still block a meeting
            // running across them.
            if intervals.iter().all(|i| i.start() < i.end()) {
                let rooms = min_meeting_rooms(&intervals, Handoff::Shared);
                assert_eq!(
                    can_attend_all(&intervals),
                    rooms <= 1,
                    "{intervals:?}",
                );
            }
        }
    }
}
