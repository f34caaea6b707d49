//! The ensemble driver: independent repeated runs, assembled into tables.

use sis_core::{RunId, SimParams, SimRng};

use crate::{NoopObserver, RunObserver, RunResult, Sim, SimResult};

// ── EnsembleTables ────────────────────────────────────────────────────────────

/// Results of a whole ensemble, one column per run.
///
/// This is the hand-off boundary to persistence/plotting collaborators
/// (see `sis-output`); the driver decides no file formats itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnsembleTables {
    /// Total-infected count by (step, run); every column has `t_max + 1`
    /// entries.
    pub infected_total_by_run: Vec<Vec<u64>>,

    /// New-infection count by (step, run); same shape.
    pub new_infections_by_run: Vec<Vec<u64>>,

    /// Time since last recovery at horizon end, `t_max - last_recovery`, by
    /// (agent, run); every column has N entries.  Never-recovered agents
    /// show `t_max` plus the naive sentinel's magnitude.
    pub recovery_age_by_run: Vec<Vec<i64>>,

    /// Equilibrium-phase inter-infection intervals per run (ragged — one
    /// entry per recorded infection).
    pub intervals_by_run: Vec<Vec<u64>>,
}

impl EnsembleTables {
    /// Number of runs (columns).
    pub fn runs(&self) -> usize {
        self.infected_total_by_run.len()
    }

    /// Number of rows in the time-indexed tables (`t_max + 1`).
    pub fn steps(&self) -> usize {
        self.infected_total_by_run.first().map_or(0, Vec::len)
    }

    fn assemble(results: Vec<RunResult>, t_max: u64) -> Self {
        let mut tables = Self {
            infected_total_by_run: Vec::with_capacity(results.len()),
            new_infections_by_run: Vec::with_capacity(results.len()),
            recovery_age_by_run:   Vec::with_capacity(results.len()),
            intervals_by_run:      Vec::with_capacity(results.len()),
        };
        for result in results {
            let ages = result.last_recovery.iter().map(|&t| t_max as i64 - t).collect();
            tables.infected_total_by_run.push(result.infected_total);
            tables.new_infections_by_run.push(result.new_infections);
            tables.recovery_age_by_run.push(ages);
            tables.intervals_by_run.push(result.intervals);
        }
        tables
    }
}

// ── Ensemble ──────────────────────────────────────────────────────────────────

/// Executes R independent runs of one parameter set and aggregates their
/// results by run index.
///
/// Each run draws from its own seed, derived deterministically from the
/// master seed before any run starts — so runs are independent, reproducible,
/// and (with the `parallel` feature) free to execute concurrently without
/// sharing any mutable state.
pub struct Ensemble {
    params: SimParams,
    runs:   usize,
}

impl Ensemble {
    pub fn new(params: SimParams, runs: usize) -> Self {
        Self { params, runs }
    }

    /// The per-run seeds, derived from `params.seed`.  Deterministic and
    /// independent of run execution order.
    pub fn run_seeds(&self) -> Vec<u64> {
        let mut root = SimRng::new(self.params.seed);
        (0..self.runs as u64).map(|r| root.derive_seed(r)).collect()
    }

    /// Run the whole ensemble without progress callbacks.
    pub fn run_all(&self) -> SimResult<EnsembleTables> {
        self.run_with(|_| NoopObserver)
    }

    /// Run the whole ensemble, constructing one observer per run.
    ///
    /// With the `parallel` feature the runs execute on Rayon's thread pool;
    /// results are still assembled in ascending run order, so the tables are
    /// bit-identical to a sequential execution.
    pub fn run_with<O, F>(&self, make_observer: F) -> SimResult<EnsembleTables>
    where
        O: RunObserver + Send,
        F: Fn(RunId) -> O + Sync,
    {
        let seeds = self.run_seeds();

        #[cfg(not(feature = "parallel"))]
        let results: SimResult<Vec<RunResult>> = seeds
            .iter()
            .enumerate()
            .map(|(r, &seed)| self.one_run(RunId(r as u32), seed, &make_observer))
            .collect();

        #[cfg(feature = "parallel")]
        let results: SimResult<Vec<RunResult>> = {
            use rayon::prelude::*;
            seeds
                .par_iter()
                .enumerate()
                .map(|(r, &seed)| self.one_run(RunId(r as u32), seed, &make_observer))
                .collect()
        };

        Ok(EnsembleTables::assemble(results?, self.params.t_max))
    }

    fn one_run<O, F>(&self, run: RunId, seed: u64, make_observer: &F) -> SimResult<RunResult>
    where
        O: RunObserver,
        F: Fn(RunId) -> O,
    {
        let mut sim = Sim::new(&self.params, seed)?;
        let mut observer = make_observer(run);
        sim.run(&mut observer)?;
        Ok(sim.into_result())
    }
}
