//! The per-step transition engine — the core of the simulator.

use sis_agent::{AgentRngs, Health, Population};
use sis_core::{AgentId, AgentRng, ImmunityModel, SimParams, Step};

use crate::{SimError, SimResult};

// ── Per-agent decision ────────────────────────────────────────────────────────

/// Outcome of one agent's stochastic draw, produced by the decide phase and
/// consumed by the apply phase.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Transition {
    Stay,
    Infect,
    Recover,
}

/// Transition counts for one step.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct StepOutcome {
    /// SUSCEPTIBLE → INFECTED transitions this step.
    pub new_infections: u64,
    /// INFECTED → SUSCEPTIBLE transitions this step.
    pub recoveries: u64,
}

// ── TransitionEngine ──────────────────────────────────────────────────────────

/// Applies one step of immunity-adjusted stochastic SIS transitions to a
/// whole population.
///
/// Each step is two-phase:
///
/// 1. **Decide** (side-effect-free, parallel with the `parallel` feature):
///    every agent draws its transition from its own prior state, its own RNG
///    substream, and the step-start infected count `n_I` — never from another
///    agent's mutable state.
/// 2. **Apply** (sequential, ascending agent index): states and recovery
///    times are written, new infections counted, and equilibrium-phase
///    inter-infection intervals recorded.
///
/// The `n_I` snapshot is the key correctness invariant: all agents observe
/// the same infection pressure for the step, so processing order cannot
/// change the outcome.
pub struct TransitionEngine {
    beta:          f64,
    recovery_p:    f64,
    t_equilibrium: u64,
    immunity:      ImmunityModel,
}

impl TransitionEngine {
    pub fn new(params: &SimParams) -> Self {
        Self {
            beta:          params.beta,
            recovery_p:    params.recovery_probability(),
            t_equilibrium: params.t_equilibrium,
            immunity:      ImmunityModel::new(params.t_immunity),
        }
    }

    /// Advance `population` by one step at time `now`.
    ///
    /// Intervals recorded at infections with `now >= t_equilibrium` are
    /// appended to `intervals`.  Errors abort the step with no partial
    /// writes (the apply phase only runs on a fully-decided step).
    pub fn step(
        &self,
        now:        Step,
        population: &mut Population,
        rngs:       &mut AgentRngs,
        intervals:  &mut Vec<u64>,
    ) -> SimResult<StepOutcome> {
        // ── Phase 1: snapshot infection pressure ──────────────────────────
        let n_i = population.infected_count() as f64;

        // ── Phase 2: decide (split borrow: &Population + &mut AgentRngs) ──
        let decisions = self.decide_all(now, population, rngs, n_i)?;

        // ── Phase 3: apply, ascending agent index ─────────────────────────
        let mut outcome = StepOutcome::default();
        for (i, transition) in decisions.into_iter().enumerate() {
            match transition {
                Transition::Stay => {}
                Transition::Infect => {
                    population.health[i] = Health::Infected;
                    outcome.new_infections += 1;
                    if now.0 >= self.t_equilibrium {
                        intervals.push((now.signed() - population.last_recovery[i]) as u64);
                    }
                }
                Transition::Recover => {
                    population.health[i] = Health::Susceptible;
                    population.last_recovery[i] = now.signed();
                    outcome.recoveries += 1;
                }
            }
        }
        Ok(outcome)
    }

    /// One agent's draw against the frozen infection pressure.
    fn decide(
        &self,
        agent:         AgentId,
        now:           Step,
        health:        Health,
        last_recovery: i64,
        n_i:           f64,
        rng:           &mut AgentRng,
    ) -> SimResult<Transition> {
        match health {
            Health::Susceptible => {
                let imm = self.immunity.level(now, last_recovery);
                let beta_n = self.beta * (1.0 - imm);
                // Probability of catching it from any of the n_I infected
                // contacts, under the rare-independent-contact approximation
                // (1 - beta_n)^n_I ≈ exp(-beta_n * n_I) for small beta_n.
                let p_infect = 1.0 - (-beta_n * n_i).exp();
                if !(0.0..=1.0).contains(&p_infect) {
                    return Err(SimError::NumericAnomaly {
                        step:  now,
                        agent,
                        value: p_infect,
                    });
                }
                if rng.random::<f64>() < p_infect {
                    Ok(Transition::Infect)
                } else {
                    Ok(Transition::Stay)
                }
            }
            Health::Infected => {
                // Poisson recovery with mean time t_recovery.
                if rng.random::<f64>() < self.recovery_p {
                    Ok(Transition::Recover)
                } else {
                    Ok(Transition::Stay)
                }
            }
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn decide_all(
        &self,
        now:        Step,
        population: &Population,
        rngs:       &mut AgentRngs,
        n_i:        f64,
    ) -> SimResult<Vec<Transition>> {
        population
            .health
            .iter()
            .zip(population.last_recovery.iter())
            .zip(rngs.inner.iter_mut())
            .enumerate()
            .map(|(i, ((&health, &last_recovery), rng))| {
                self.decide(AgentId(i as u32), now, health, last_recovery, n_i, rng)
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn decide_all(
        &self,
        now:        Step,
        population: &Population,
        rngs:       &mut AgentRngs,
        n_i:        f64,
    ) -> SimResult<Vec<Transition>> {
        use rayon::prelude::*;

        // Shared-read / partitioned-write: each worker reads the frozen
        // snapshot and one agent's own slots, and owns that agent's RNG.
        population
            .health
            .par_iter()
            .zip(population.last_recovery.par_iter())
            .zip(rngs.inner.par_iter_mut())
            .enumerate()
            .map(|(i, ((&health, &last_recovery), rng))| {
                self.decide(AgentId(i as u32), now, health, last_recovery, n_i, rng)
            })
            .collect()
    }
}
