//! Run observer trait for progress reporting and data collection.

use sis_core::Step;

use crate::StepOutcome;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observation is a side channel: nothing
/// in the functional results depends on it.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl RunObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: Step, infected_total: u64, _outcome: &StepOutcome) {
///         if step.0 % self.interval == 0 {
///             println!("{step}: {infected_total} infected");
///         }
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called at the very start of each step, before any transitions.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called at the end of each step with the post-step infected total and
    /// the step's transition counts.
    fn on_step_end(&mut self, _step: Step, _infected_total: u64, _outcome: &StepOutcome) {}

    /// Called once after the final step completes.
    fn on_run_end(&mut self, _final_step: Step) {}
}

/// A [`RunObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
