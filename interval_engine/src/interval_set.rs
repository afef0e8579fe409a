use crate::gaps::gaps;
use crate::intervals::Interval;
use crate::normalize::{insert_and_merge, normalize_vec};
use crate::query::{covering_interval, covers, covers_point};
use crate::scalar::Scalar;
use crate::set_ops::{difference, intersect, symmetric_difference, union};
use itertools::Itertools;

/// A set of values, stored as normalized intervals.
///
/// The intervals are always sorted and never overlap or touch, so the
/// operations that require normalized input can be used without checks.
///
/// ```
///    use interval_engine::{Interval, IntervalSet};
///    let busy: IntervalSet<i64> = [(1, 3), (2, 6), (8, 10)]
///        .into_iter()
///        .map(|(start, end)| Interval::new(start, end).unwrap())
///        .collect();
///    assert_eq!(busy.to_string(), "{[1, 6], [8, 10]}");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "Vec<Interval<T>>",
        into = "Vec<Interval<T>>",
        bound(
            serialize = "T: Scalar + serde::Serialize",
            deserialize = "T: Scalar + serde::Deserialize<'de>"
        )
    )
)]
pub struct IntervalSet<T> {
    intervals: Vec<Interval<T>>,
}

impl<T: Scalar> IntervalSet<T> {
    /// An empty set
    #[must_use]
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Wraps a list already known to be normalized.
    fn from_normalized(intervals: Vec<Interval<T>>) -> Self {
        Self { intervals }
    }

    /// Adds all values of the interval to the set.
    pub fn insert(&mut self, intv: Interval<T>) {
        self.intervals = insert_and_merge(&self.intervals, intv);
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_normalized(union(&self.intervals, &other.intervals))
    }

    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self::from_normalized(intersect(&self.intervals, &other.intervals))
    }

    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self::from_normalized(difference(&self.intervals, &other.intervals))
    }

    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        Self::from_normalized(symmetric_difference(
            &self.intervals,
            &other.intervals,
        ))
    }

    /// The values missing from the set, either between its intervals or,
    /// when a window is given, anywhere in the window.
    #[must_use]
    pub fn gaps(&self, window: Option<&Interval<T>>) -> Self {
        Self::from_normalized(gaps(&self.intervals, window))
    }

    /// Whether a single interval of the set contains all of target.
    #[must_use]
    pub fn covers(&self, target: &Interval<T>) -> bool {
        covers(&self.intervals, target)
    }

    #[must_use]
    pub fn covering_interval(&self, target: &Interval<T>) -> Option<&Interval<T>> {
        covering_interval(&self.intervals, target)
    }

    #[must_use]
    pub fn covers_point(&self, point: &T) -> bool {
        covers_point(&self.intervals, point)
    }

    /// The smallest interval containing the whole set.
    #[must_use]
    pub fn span(&self) -> Option<Interval<T>> {
        let first = self.intervals.first()?;
        let last = self.intervals.last()?;
        Some(first.convex_hull(last))
    }
}

impl<T> IntervalSet<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.intervals
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Interval<T>> {
        self.intervals
    }

    /// Number of disjoint intervals (not of values).
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl<T: Scalar> Default for IntervalSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> From<Vec<Interval<T>>> for IntervalSet<T> {
    fn from(intervals: Vec<Interval<T>>) -> Self {
        Self::from_normalized(normalize_vec(intervals))
    }
}

impl<T> From<IntervalSet<T>> for Vec<Interval<T>> {
    fn from(set: IntervalSet<T>) -> Self {
        set.intervals
    }
}

impl<T: Scalar> FromIterator<Interval<T>> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Scalar> Extend<Interval<T>> for IntervalSet<T> {
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        let mut all = std::mem::take(&mut self.intervals);
        all.extend(iter);
        self.intervals = normalize_vec(all);
    }
}

impl<T> IntoIterator for IntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

///  &IntervalSet | &IntervalSet
impl<T: Scalar> std::ops::BitOr<&IntervalSet<T>> for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn bitor(self, rhs: &IntervalSet<T>) -> Self::Output {
        self.union(rhs)
    }
}

///  &IntervalSet & &IntervalSet
impl<T: Scalar> std::ops::BitAnd<&IntervalSet<T>> for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn bitand(self, rhs: &IntervalSet<T>) -> Self::Output {
        self.intersection(rhs)
    }
}

///  &IntervalSet - &IntervalSet
impl<T: Scalar> core::ops::Sub<&IntervalSet<T>> for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn sub(self, rhs: &IntervalSet<T>) -> Self::Output {
        self.difference(rhs)
    }
}

///  &IntervalSet ^ &IntervalSet
impl<T: Scalar> std::ops::BitXor<&IntervalSet<T>> for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn bitxor(self, rhs: &IntervalSet<T>) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl<T: ::core::fmt::Debug> ::core::fmt::Debug for IntervalSet<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.debug_set().entries(self.intervals.iter()).finish()
    }
}

impl<T: ::core::fmt::Display> ::core::fmt::Display for IntervalSet<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{{{}}}", self.intervals.iter().join(", "))
    }
}
