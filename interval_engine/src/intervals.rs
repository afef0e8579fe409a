use crate::errors::{Error, Result};
use crate::scalar::Scalar;
use std::ops::{RangeInclusive, Sub};

/// A closed interval `[start, end]`, where both bounds are part of the
/// interval.
///
/// An interval is never empty: the constructor rejects `start > end`, and
/// `[A, A]` contains exactly one value.  Intervals compare by start first,
/// then by end, which is the order used by normalization.
///
/// ```
///    use interval_engine::Interval;
///    let intv = Interval::new(1, 5).unwrap();
///    assert!(intv.contains_point(&5));
///    assert!(Interval::new(5, 1).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawInterval<T>",
        bound(deserialize = "T: Scalar + serde::Deserialize<'de>")
    )
)]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T: Scalar> Interval<T> {
    /// Construct the interval `[start, end]`.
    /// Bounds given in the wrong order are an error, they are never swapped.
    pub fn new(start: T, end: T) -> Result<Self> {
        if start > end {
            log::debug!("rejected interval [{start:?}, {end:?}]");
            return Err(Error::Validation(format!(
                "start {start:?} is after end {end:?}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Returns an interval that contains a single value (`[value, value]`)
    #[must_use]
    pub fn new_single(value: T) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    /// Used by the algorithms, which only ever derive valid bounds from
    /// existing intervals.
    pub(crate) fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(start <= end, "[{start:?}, {end:?}] is inverted");
        Self { start, end }
    }

    /// The lower bound, included in the interval.
    #[must_use]
    pub fn start(&self) -> T {
        self.start
    }

    /// The upper bound, included in the interval.
    #[must_use]
    pub fn end(&self) -> T {
        self.end
    }

    /// Whether the two intervals have at least one value in common.
    /// Since bounds are inclusive, `[1, 3]` and `[3, 5]` overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Whether self contains all values of the second interval (and possibly
    /// more).
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether value is contained in the interval
    #[must_use]
    pub fn contains_point(&self, value: &T) -> bool {
        self.start <= *value && *value <= self.end
    }

    /// Whether the two intervals do not overlap, but leave no value between
    /// them, like `[1, 3]` and `[4, 6]`.
    #[must_use]
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.end.successor() == Some(other.start)
            || other.end.successor() == Some(self.start)
    }

    /// Whether every value in self is strictly less than every value in
    /// other.
    #[must_use]
    pub fn strictly_left_of(&self, other: &Self) -> bool {
        self.end < other.start
    }

    /// Returns the values common to both intervals, if any.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(Self { start, end })
    }

    /// Returns the convex hull of the two intervals, i.e. the smallest
    /// interval that contains the values of both intervals.
    #[must_use]
    pub fn convex_hull(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl<T: Scalar + Sub> Interval<T> {
    /// `end - start`.  Note that `[A, A]` has a length of zero even though
    /// it contains one value.
    #[must_use]
    pub fn length(&self) -> <T as Sub>::Output {
        self.end - self.start
    }
}

impl<T: Scalar> TryFrom<(T, T)> for Interval<T> {
    type Error = Error;

    fn try_from((start, end): (T, T)) -> Result<Self> {
        Interval::new(start, end)
    }
}

impl<T: Scalar> TryFrom<RangeInclusive<T>> for Interval<T> {
    type Error = Error;

    fn try_from(range: RangeInclusive<T>) -> Result<Self> {
        let (start, end) = range.into_inner();
        Interval::new(start, end)
    }
}

impl<T: ::core::fmt::Debug> ::core::fmt::Debug for Interval<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "[{:?}, {:?}]", self.start, self.end)
    }
}

impl<T: ::core::fmt::Display> ::core::fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Deserialization goes through this, so that invalid bounds coming from
/// outside are rejected like any other construction.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInterval<T> {
    start: T,
    end: T,
}

#[cfg(feature = "serde")]
impl<T: Scalar> TryFrom<RawInterval<T>> for Interval<T> {
    type Error = Error;

    fn try_from(raw: RawInterval<T>) -> Result<Self> {
        Interval::new(raw.start, raw.end)
    }
}
