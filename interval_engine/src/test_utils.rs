//! Helpers shared by the unit tests of the various modules.

use crate::intervals::Interval;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn iv(start: i64, end: i64) -> Interval<i64> {
    Interval::new(start, end).expect("valid test interval")
}

pub fn ivs(bounds: &[(i64, i64)]) -> Vec<Interval<i64>> {
    bounds.iter().map(|&(start, end)| iv(start, end)).collect()
}

pub fn pairs(intervals: &[Interval<i64>]) -> Vec<(i64, i64)> {
    intervals.iter().map(|i| (i.start(), i.end())).collect()
}

/// Brute force membership, to check the algorithms point by point.
pub fn covered(intervals: &[Interval<i64>], point: i64) -> bool {
    intervals.iter().any(|i| i.contains_point(&point))
}

/// A deterministic generator, so that failures can be reproduced.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Up to `max_count` random intervals with bounds in `[0, domain]`.
pub fn random_intervals(
    rng: &mut StdRng,
    max_count: usize,
    domain: i64,
    max_length: i64,
) -> Vec<Interval<i64>> {
    let count = rng.gen_range(0..=max_count);
    (0..count)
        .map(|_| {
            let start = rng.gen_range(0..=domain);
            let end = (start + rng.gen_range(0..=max_length)).min(domain);
            iv(start, end)
        })
        .collect()
}
