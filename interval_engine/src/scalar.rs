use std::fmt::Debug;

/// The values that can be used as interval bounds.
///
/// Intervals are closed on both ends, so the engine needs to know which value
/// comes right after (or right before) a bound: the gap after `[1, 5]` starts
/// at `6`, not at "something larger than 5".  This is only meaningful for
/// discrete domains, which is why floats do not implement this trait.
///
/// Both functions return None at the edge of the domain, e.g.
/// `i64::MAX.successor()`.  Operations then behave as if the domain simply
/// stopped there (no trailing gap, no closing sweep event), and never
/// overflow.
pub trait Scalar: Ord + Copy + Debug {
    /// The value immediately after self.
    fn successor(&self) -> Option<Self>;

    /// The value immediately before self.
    fn predecessor(&self) -> Option<Self>;
}

macro_rules! impl_scalar_for_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn successor(&self) -> Option<Self> {
                    self.checked_add(1)
                }
                fn predecessor(&self) -> Option<Self> {
                    self.checked_sub(1)
                }
            }
        )*
    };
}

impl_scalar_for_int!(i8, i16, i32, i64, i128, isize);
impl_scalar_for_int!(u8, u16, u32, u64, u128, usize);

/// Calendar dates, one day apart.
#[cfg(feature = "chrono")]
impl Scalar for chrono::NaiveDate {
    fn successor(&self) -> Option<Self> {
        self.succ_opt()
    }
    fn predecessor(&self) -> Option<Self> {
        self.pred_opt()
    }
}

/// UTC timestamps, with a resolution of one second.  Callers that need a
/// finer resolution should convert to integer timestamps first.
#[cfg(feature = "chrono")]
impl Scalar for chrono::DateTime<chrono::Utc> {
    fn successor(&self) -> Option<Self> {
        self.checked_add_signed(chrono::Duration::seconds(1))
    }
    fn predecessor(&self) -> Option<Self> {
        self.checked_sub_signed(chrono::Duration::seconds(1))
    }
}
