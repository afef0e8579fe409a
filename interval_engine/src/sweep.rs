//! Sweep-line counts: how many intervals are active at the same time.
//!
//! Each interval contributes a `+1` event where it starts and a `-1` event
//! where it stops.  Events are sorted once, then scanned while keeping a
//! running count.

use crate::intervals::Interval;
use crate::scalar::Scalar;
use std::collections::BTreeMap;

/// What happens when one interval ends at T and another one starts at T.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Handoff {
    /// Both intervals hold T, so they conflict.  Intervals are closed on both
    /// ends, the closing event is at `end + 1`.  This is consistent with
    /// normalization, which merges `[1, 3]` and `[3, 5]`.
    #[default]
    Exclusive,

    /// T is released by the first interval and taken by the second, so they
    /// do not conflict: intervals are treated as half-open `[start, end)`.
    /// A meeting from 9 to 10 and another from 10 to 11 need a single room.
    /// Zero-length intervals `[A, A]` then occupy nothing.
    Shared,
}

/// The highest number of simultaneous intervals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Peak<T> {
    pub count: usize,

    /// The first point where `count` intervals are active.
    pub point: T,
}

/// Sorted `(point, delta)` events.  At a given point, closing events come
/// first since -1 sorts before +1.
fn events<T: Scalar>(
    intervals: &[Interval<T>],
    handoff: Handoff,
) -> Vec<(T, isize)> {
    let mut events = Vec::with_capacity(intervals.len() * 2);
    for intv in intervals {
        match handoff {
            Handoff::Exclusive => {
                events.push((intv.start(), 1));

                // Nothing after the end of the domain, the interval simply
                // never closes.
                if let Some(after) = intv.end().successor() {
                    events.push((after, -1));
                }
            }
            Handoff::Shared => {
                if intv.start() < intv.end() {
                    events.push((intv.start(), 1));
                    events.push((intv.end(), -1));
                }
            }
        }
    }
    events.sort_unstable();
    events
}

/// For each event point `p`, the number of intervals that cover all values
/// from `p` up to (excluding) the next point in the map.  The last point
/// always has a count of zero, unless an interval reaches the end of the
/// domain.
///
/// Intervals are closed (see [`Handoff::Exclusive`]).
#[must_use]
pub fn overlap_counts<T: Scalar>(intervals: &[Interval<T>]) -> BTreeMap<T, usize> {
    overlap_counts_with(intervals, Handoff::Exclusive)
}

/// Same as [`overlap_counts`], with an explicit handoff policy.
#[must_use]
pub fn overlap_counts_with<T: Scalar>(
    intervals: &[Interval<T>],
    handoff: Handoff,
) -> BTreeMap<T, usize> {
    let mut counts = BTreeMap::new();
    let mut running = 0_usize;
    for (point, delta) in events(intervals, handoff) {
        running = running.saturating_add_signed(delta);
        counts.insert(point, running);
    }
    counts
}

/// The maximum number of intervals active at the same time, and where this
/// first happens.  None for an empty input.
///
/// Intervals are closed (see [`Handoff::Exclusive`]).
///
/// ```
///    use interval_engine::{peak_concurrency, Interval, Peak};
///    let meetings: Vec<_> = [(1, 5), (2, 6), (3, 7), (8, 10), (4, 9)]
///        .into_iter()
///        .map(|(start, end)| Interval::new(start, end).unwrap())
///        .collect();
///    assert_eq!(
///        peak_concurrency(&meetings),
///        Some(Peak { count: 4, point: 4 }),
///    );
/// ```
#[must_use]
pub fn peak_concurrency<T: Scalar>(intervals: &[Interval<T>]) -> Option<Peak<T>> {
    peak_concurrency_with(intervals, Handoff::Exclusive)
}

/// Same as [`peak_concurrency`], with an explicit handoff policy.
/// With [`Handoff::Shared`], this is None when all intervals have a zero
/// length.
#[must_use]
pub fn peak_concurrency_with<T: Scalar>(
    intervals: &[Interval<T>],
    handoff: Handoff,
) -> Option<Peak<T>> {
    let mut peak: Option<Peak<T>> = None;
    let mut running = 0_usize;

    for (point, delta) in events(intervals, handoff) {
        running = running.saturating_add_signed(delta);
        if peak.map_or(true, |p| running > p.count) {
            peak = Some(Peak {
                count: running,
                point,
            });
        }
    }

    log::debug!("peak concurrency of {} intervals: {peak:?}", intervals.len());
    peak
}

/// Minimum number of rooms (or any other resource) so that every interval
/// gets one for its whole duration.
#[must_use]
pub fn min_meeting_rooms<T: Scalar>(
    intervals: &[Interval<T>],
    handoff: Handoff,
) -> usize {
    peak_concurrency_with(intervals, handoff).map_or(0, |p| p.count)
}

/// Number of intervals that contain the point.
#[must_use]
pub fn coverage_depth_at<T: Scalar>(intervals: &[Interval<T>], point: &T) -> usize {
    intervals.iter().filter(|i| i.contains_point(point)).count()
}
