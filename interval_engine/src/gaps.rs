use crate::intervals::Interval;
use crate::normalize::{is_normalized, normalize_vec};
use crate::scalar::Scalar;
use itertools::Itertools;
use std::ops::Sub;

/// Returns the ranges not covered by any of the intervals.
///
/// Without a window, these are the holes between consecutive intervals:
/// ```text
///      [---]  [----]     [--]
///           ()     [---]             gaps
/// ```
/// Since `[1, 3]` and `[4, 6]` leave no value between them, there is no gap
/// there.
///
/// With a window, the leading and trailing free ranges of the window are
/// included, and every gap is clipped to the window:
/// ```text
///  window  [-----------------------]
///           [---]  [----]     [--------]
///          []   [--]    [-----]          gaps
/// ```
///
/// `normalized` must be in canonical form (checked only in debug builds).
#[must_use]
pub fn gaps<T: Scalar>(
    normalized: &[Interval<T>],
    window: Option<&Interval<T>>,
) -> Vec<Interval<T>> {
    debug_assert!(is_normalized(normalized), "gaps requires normalized input");
    let result = match window {
        None => normalized
            .iter()
            .tuple_windows()
            .filter_map(|(left, right)| {
                let first = left.end().successor()?;
                let last = right.start().predecessor()?;
                (first <= last).then(|| Interval::new_unchecked(first, last))
            })
            .collect(),
        Some(window) => window_gaps(normalized, window),
    };
    log::trace!("gaps: {} intervals, {} gaps", normalized.len(), result.len());
    result
}

/// The free ranges of `window`, given sorted intervals that may extend
/// beyond it.
pub(crate) fn window_gaps<'a, T, I>(
    intervals: I,
    window: &Interval<T>,
) -> Vec<Interval<T>>
where
    T: Scalar + 'a,
    I: IntoIterator<Item = &'a Interval<T>>,
{
    let mut result = Vec::new();

    // None once we went past the last value of the domain.
    let mut cursor = Some(window.start());

    for intv in intervals {
        let Some(from) = cursor else {
            break;
        };
        if from > window.end() {
            break;
        }
        if intv.end() < from {
            continue;
        }
        if from < intv.start() {
            if let Some(before) = intv.start().predecessor() {
                result.push(Interval::new_unchecked(
                    from,
                    before.min(window.end()),
                ));
            }
        }
        cursor = intv.end().successor();
    }

    if let Some(from) = cursor {
        if from <= window.end() {
            result.push(Interval::new_unchecked(from, window.end()));
        }
    }
    result
}

/// Calendar availability: the ranges of `window` where none of the
/// calendars is busy.  Each calendar can be in any order.
#[must_use]
pub fn free_slots<T: Scalar>(
    calendars: &[Vec<Interval<T>>],
    window: &Interval<T>,
) -> Vec<Interval<T>> {
    let busy = normalize_vec(calendars.concat());
    let free = window_gaps(&busy, window);
    log::debug!(
        "free_slots: {} calendars, {} busy ranges, {} free slots",
        calendars.len(),
        busy.len(),
        free.len()
    );
    free
}

/// Same as [`free_slots`], but only keeps the slots whose
/// [`Interval::length`] is at least `min_length`.
#[must_use]
pub fn free_slots_at_least<T>(
    calendars: &[Vec<Interval<T>>],
    window: &Interval<T>,
    min_length: <T as Sub>::Output,
) -> Vec<Interval<T>>
where
    T: Scalar + Sub,
    <T as Sub>::Output: PartialOrd,
{
    let mut slots = free_slots(calendars, window);
    slots.retain(|slot| slot.length() >= min_length);
    slots
}
