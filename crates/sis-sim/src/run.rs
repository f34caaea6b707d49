//! The `Sim` run controller and its result bundle.

use sis_agent::{AgentRngs, Population, PopulationBuilder};
use sis_core::{SimParams, Step};

use crate::{RunObserver, SimResult, TransitionEngine};

// ── RunResult ─────────────────────────────────────────────────────────────────

/// Everything one run produces, extracted once the population is discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunResult {
    /// Total infected after each step; length `t_max + 1`, `[0] == N0`.
    pub infected_total: Vec<u64>,

    /// New infections per step; length `t_max + 1`, `[0] == 0` by definition
    /// (nothing is "new" before the simulation starts).
    pub new_infections: Vec<u64>,

    /// Final `last_recovery` array (one entry per agent; the immune-naive
    /// sentinel survives for agents that never recovered).
    pub last_recovery: Vec<i64>,

    /// Equilibrium-phase inter-infection intervals, in recording order.
    /// One entry per infection occurring at `t >= t_equilibrium`, valued
    /// `t - last_recovery[agent]`.
    pub intervals: Vec<u64>,
}

impl RunResult {
    /// Mean infected count over the last `k` steps (or all of them if the
    /// run is shorter) — the usual steady-state prevalence summary.
    pub fn mean_last(&self, k: usize) -> f64 {
        let tail = &self.infected_total[self.infected_total.len().saturating_sub(k)..];
        tail.iter().sum::<u64>() as f64 / tail.len() as f64
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The run controller: owns one population and drives the transition engine
/// across the fixed horizon, accumulating the per-step sequences.
///
/// A run is atomic — it either completes all `t_max` steps or fails with the
/// error that aborted it; there is no partial-run recovery (any mid-run
/// failure is a programming or configuration defect, not a transient
/// condition).
pub struct Sim {
    /// Run parameters, immutable for the life of the run.
    pub params: SimParams,

    /// The current step — advanced once per [`step`][Self::step] call.
    pub now: Step,

    /// Agent state (SoA arrays), mutated in place every step.
    pub population: Population,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    engine: TransitionEngine,

    pub(crate) infected_total: Vec<u64>,
    pub(crate) new_infections: Vec<u64>,
    pub(crate) intervals:      Vec<u64>,
}

impl Sim {
    /// Validate `params`, build a fresh population (N0 infected chosen
    /// uniformly without replacement from `run_seed`'s stream), and seed the
    /// t=0 snapshot (total = N0, new = 0).
    ///
    /// `run_seed` is the per-run seed; ensembles derive one per run from the
    /// master seed, a standalone run passes `params.seed` directly.
    pub fn new(params: &SimParams, run_seed: u64) -> SimResult<Self> {
        params.validate()?;

        let (population, rngs) = PopulationBuilder::new(params.agents, run_seed)
            .initial_infected(params.initial_infected)
            .build()?;

        Ok(Self {
            engine:         TransitionEngine::new(params),
            params:         params.clone(),
            now:            Step::ZERO,
            population,
            rngs,
            infected_total: vec![params.initial_infected as u64],
            new_infections: vec![0],
            intervals:      Vec::new(),
        })
    }

    /// Execute one step and append the post-step totals.
    ///
    /// Exposed for incremental stepping in tests; [`run`][Self::run] is the
    /// usual entry point.
    pub fn step<O: RunObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.now;
        observer.on_step_start(now);

        let outcome =
            self.engine
                .step(now, &mut self.population, &mut self.rngs, &mut self.intervals)?;

        let total = self.population.infected_count();
        self.infected_total.push(total);
        self.new_infections.push(outcome.new_infections);
        observer.on_step_end(now, total, &outcome);

        self.now = self.now.offset(1);
        Ok(())
    }

    /// Run from the current step to `params.end_step()`.
    pub fn run<O: RunObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.now < self.params.end_step() {
            self.step(observer)?;
        }
        observer.on_run_end(self.now);
        Ok(())
    }

    /// Extract the run's results, discarding the population.
    pub fn into_result(self) -> RunResult {
        RunResult {
            infected_total: self.infected_total,
            new_infections: self.new_infections,
            last_recovery:  self.population.last_recovery,
            intervals:      self.intervals,
        }
    }
}
