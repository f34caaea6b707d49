//! Run parameters and their validation.

use crate::{SisError, SisResult, Step};

/// Parameters of one simulation run, immutable for its duration.
///
/// Typically constructed in the application crate (or deserialized from a
/// TOML/JSON file with the `serde` feature) and passed by reference into the
/// run controller.  All timescales are in days (one step = one day).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Population size N.
    pub agents: usize,

    /// Initial-infected count N0, chosen uniformly without replacement.
    pub initial_infected: usize,

    /// Per-contact transmission probability β.  For a fully-mixed population
    /// this is usually specified as `multiplier / N`.
    pub beta: f64,

    /// Timescale (days) at which post-recovery immunity decays.
    pub t_immunity: f64,

    /// Mean recovery time (days); per-step recovery probability is
    /// `1 / t_recovery`.
    pub t_recovery: f64,

    /// Horizon length: the run executes steps `0..t_max` and reports
    /// sequences of length `t_max + 1` (the t=0 snapshot included).
    pub t_max: u64,

    /// Step at which the run is assumed to have reached equilibrium;
    /// inter-infection intervals are recorded only from this step on.
    pub t_equilibrium: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimParams {
    /// The step at which the run ends (exclusive upper bound of the loop).
    #[inline]
    pub fn end_step(&self) -> Step {
        Step(self.t_max)
    }

    /// Per-step recovery probability, `1 / t_recovery`.
    #[inline]
    pub fn recovery_probability(&self) -> f64 {
        1.0 / self.t_recovery
    }

    /// Reject invalid parameter ranges before any simulation state exists.
    ///
    /// A failed check is a fatal configuration defect, never a condition to
    /// recover from mid-run.
    pub fn validate(&self) -> SisResult<()> {
        if self.agents == 0 {
            return Err(SisError::Config("population size must be positive".into()));
        }
        if self.initial_infected == 0 || self.initial_infected > self.agents {
            return Err(SisError::Config(format!(
                "initial infected count {} outside 1..={}",
                self.initial_infected, self.agents
            )));
        }
        if !(self.beta >= 0.0) {
            return Err(SisError::Config(format!(
                "transmission probability beta {} must be non-negative",
                self.beta
            )));
        }
        if !(self.t_immunity > 0.0) {
            return Err(SisError::Config(format!(
                "immunity decay timescale {} must be strictly positive",
                self.t_immunity
            )));
        }
        // Recovery probability 1/t_recovery must lie in (0, 1].
        if !(self.t_recovery >= 1.0) {
            return Err(SisError::Config(format!(
                "mean recovery time {} must be at least one step",
                self.t_recovery
            )));
        }
        if self.t_max == 0 {
            return Err(SisError::Config("horizon t_max must be positive".into()));
        }
        Ok(())
    }
}
