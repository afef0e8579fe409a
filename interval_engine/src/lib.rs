//! This crate provides an algebra of closed intervals `[start, end]` over a
//! discrete ordered domain (integers, timestamps, dates), along with the
//! scheduling questions usually asked about them: what is covered, where
//! intervals collide, what is free, and how many resources are needed at
//! the same time.
//!
//!  |Operation                     |Function                           |Complexity
//!  |------------------------------|-----------------------------------|-----------
//!  |canonical form                |[`normalize()`]                    |O(n log n)
//!  |insert into canonical form    |[`insert_and_merge()`]             |O(n)
//!  |intersection                  |[`intersect()`]                    |O(n + m)
//!  |union                         |[`union()`]                        |O((n + m) log(n + m))
//!  |difference                    |[`difference()`]                   |O(n + m)
//!  |free ranges                   |[`gaps()`], [`free_slots()`]       |O(n)
//!  |overlap counts                |[`overlap_counts()`]               |O(n log n)
//!  |meeting rooms                 |[`peak_concurrency()`]             |O(n log n)
//!  |activity selection            |[`min_removal_for_no_overlap()`]   |O(n log n)
//!  |point lookup                  |[`point_query()`]                  |O(n)
//!  |containment                   |[`covers()`]                       |O(log n)
//!
//! Bounds must implement [`Scalar`], which gives the values right before
//! and after a bound (so that the gap after `[1, 5]` starts at `6`).  It is
//! implemented for all primitive integer types, and for `chrono` dates and
//! UTC timestamps when the `chrono` feature is enabled.
//!
//! Given the inclusive bounds, two intervals that share a bound overlap:
//! ```text
//!      [1---3]              [1---3]
//!          [3---5]                 [4---5]
//!      [1-------5] merged   [1---3][4---5] kept separate, no gap either
//! ```
//!
//! A list is *normalized* when it is sorted and no two intervals overlap or
//! touch.  Several operations expect normalized input, and only check it in
//! debug builds.  [`IntervalSet`] keeps its intervals normalized at all
//! times, and is the simplest way to combine collections.
//!
//! Sweep-line operations need to decide whether a meeting ending at T
//! conflicts with one starting at T; see [`Handoff`].
//!
//! All functions are pure: they borrow their input and return new vectors.

mod errors;
mod gaps;
mod interval_set;
mod intervals;
mod normalize;
mod query;
mod scalar;
mod schedule;
mod set_ops;
mod sweep;

#[cfg(test)]
mod test_utils;

pub use crate::errors::{Error, Result};
pub use crate::gaps::{free_slots, free_slots_at_least, gaps};
pub use crate::interval_set::IntervalSet;
pub use crate::intervals::Interval;
pub use crate::normalize::{
    insert_and_merge, is_normalized, normalize, normalize_vec,
};
pub use crate::query::{
    covering_interval, covers, covers_point, point_query, point_query_sorted,
};
pub use crate::scalar::Scalar;
pub use crate::schedule::{
    can_attend_all, max_non_overlapping, min_removal_for_no_overlap,
    Selection,
};
pub use crate::set_ops::{difference, intersect, symmetric_difference, union};
pub use crate::sweep::{
    coverage_depth_at, min_meeting_rooms, overlap_counts, overlap_counts_with,
    peak_concurrency, peak_concurrency_with, Handoff, Peak,
};
