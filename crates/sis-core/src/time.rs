//! Simulation time model.
//!
//! Time is a monotonically increasing `Step` counter, one step per simulated
//! day.  Using an integer step as the canonical time unit means all interval
//! arithmetic is exact (no floating-point drift) and comparisons are O(1).
//! The epidemiological timescales (`t_immunity`, `t_recovery`) are expressed
//! in the same day units.

use std::fmt;

/// An absolute simulation step (day) counter.
///
/// Stored as `u64` to avoid overflow: at one step per day a u64 lasts far
/// longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// Return the step `n` days after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Step {
        Step(self.0 + n)
    }

    /// Steps elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Step) -> u64 {
        self.0 - earlier.0
    }

    /// The step index as a signed integer, for arithmetic against the
    /// immune-naive recovery sentinel (a large negative value).
    #[inline]
    pub fn signed(self) -> i64 {
        self.0 as i64
    }
}

impl std::ops::Add<u64> for Step {
    type Output = Step;
    #[inline]
    fn add(self, rhs: u64) -> Step {
        Step(self.0 + rhs)
    }
}

impl std::ops::Sub for Step {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Step) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}
