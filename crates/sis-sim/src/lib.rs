//! `sis-sim` — step loop orchestrator for the `rust_sis` epidemic simulator.
//!
//! # Two-phase step loop
//!
//! ```text
//! for t in 0..params.t_max:
//!   ① Snapshot — count infected agents (n_I), frozen for the whole step.
//!   ② Decide   — per agent, from only its own prior state, its own RNG,
//!                and the frozen n_I (parallel with the `parallel` feature):
//!                  susceptible → Infect with p = 1 − exp(−β·(1−imm)·n_I)
//!                  infected    → Recover with p = 1 / t_recovery
//!   ③ Apply    — sequential, ascending agent index: write states, count
//!                new infections, record equilibrium-phase intervals.
//! ```
//!
//! Because `n_I` is snapshotted before any agent updates, every agent's
//! transition depends only on its own prior state plus the snapshot — the
//! decide phase may run in any order, or in parallel, without changing the
//! outcome distribution (or, given the per-agent RNG substreams, a single
//! draw).
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the decide phase and the ensemble's runs on Rayon.|
//!
//! # Quick-start
//!
//! ```rust
//! use sis_core::SimParams;
//! use sis_sim::{Ensemble, NoopObserver, Sim};
//!
//! let params = SimParams {
//!     agents: 100, initial_infected: 1, beta: 0.002,
//!     t_immunity: 200.0, t_recovery: 20.0,
//!     t_max: 30, t_equilibrium: 20, seed: 42,
//! };
//!
//! let mut sim = Sim::new(&params, params.seed).unwrap();
//! sim.run(&mut NoopObserver).unwrap();
//! let result = sim.into_result();
//! assert_eq!(result.infected_total.len(), 31);
//!
//! let tables = Ensemble::new(params, 3).run_all().unwrap();
//! assert_eq!(tables.runs(), 3);
//! ```

pub mod engine;
pub mod ensemble;
pub mod error;
pub mod observer;
pub mod run;


pub use engine::{StepOutcome, TransitionEngine};
pub use ensemble::{Ensemble, EnsembleTables};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RunObserver};
pub use run::{RunResult, Sim};
