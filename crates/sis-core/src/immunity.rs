//! Exponentially waning post-recovery immunity.

use crate::Step;

/// Maps (current step, last recovery step) to an immunity level.
///
/// The level is `exp(-(t - last_recovery) / timescale)`: 1 immediately after
/// recovery, decaying toward 0 as elapsed time grows.  For immune-naive
/// agents the recovery sentinel lies so far in the past that the exponential
/// underflows to exactly 0.
///
/// Pure and stateless apart from the timescale; a non-positive timescale is
/// a configuration error caught by [`SimParams::validate`] at setup, never
/// checked per call.
///
/// [`SimParams::validate`]: crate::SimParams::validate
#[derive(Copy, Clone, Debug)]
pub struct ImmunityModel {
    timescale: f64,
}

impl ImmunityModel {
    /// Build a model with the given decay timescale (days, strictly positive).
    pub fn new(timescale: f64) -> Self {
        Self { timescale }
    }

    /// Immunity level in [0, 1] for an agent whose last recovery happened at
    /// step `last_recovery` (signed, to admit the immune-naive sentinel).
    #[inline]
    pub fn level(&self, now: Step, last_recovery: i64) -> f64 {
        let elapsed = (now.signed() - last_recovery) as f64;
        (-elapsed / self.timescale).exp()
    }
}
