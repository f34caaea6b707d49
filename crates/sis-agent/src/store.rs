//! Core population storage: `Population` (SoA data) and `AgentRngs`
//! (per-agent RNG).
//!
//! # Why two structs?
//!
//! The parallel transition phase needs `&mut AgentRngs` (exclusive mutable
//! access to each agent's RNG) and `&Population` (shared read access to
//! epidemiological state) simultaneously.  Rust's borrow checker forbids this
//! if both live inside a single struct.  Keeping RNGs in a separate
//! `AgentRngs` struct resolves the conflict cleanly:
//!
//! ```ignore
//! // sis-sim transition phase (simplified):
//! let population: &Population = &sim.population;
//! let decisions = sim.rngs.inner
//!     .par_iter_mut()
//!     .enumerate()
//!     .map(|(i, rng)| decide(AgentId(i as u32), population, rng))
//!     .collect::<Vec<_>>();
//! ```

use sis_core::{AgentId, AgentRng};

/// `last_recovery` sentinel for agents that have never recovered.
///
/// Far enough in the past that the immunity exponential underflows to 0 for
/// any reasonable decay timescale — the population starts immune-naive.
pub const NEVER_RECOVERED: i64 = -1_000_000;

// ── Health ────────────────────────────────────────────────────────────────────

/// Binary epidemiological state of one agent.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Health {
    #[default]
    Susceptible,
    Infected,
}

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`Population`] to enable
/// simultaneous `&mut AgentRngs` + `&Population` borrows in the parallel
/// transition phase.
///
/// `AgentRngs` is `Send` (the inner `SmallRng` is `Send`) but intentionally
/// not `Sync` — per-agent RNG state must never be shared between threads.
/// Rayon's `par_iter_mut()` handles the exclusive-per-thread access pattern.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `run_seed`.
    pub(crate) fn new(count: usize, run_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(run_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let h = population.health[agent.index()];  // O(1), cache-friendly
/// ```
///
/// A `Population` is created once per run, mutated in place every step, and
/// discarded once the run's results have been extracted.  Each run owns an
/// independent instance, so ensembles may execute runs concurrently.
pub struct Population {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Epidemiological state, mutated each step by the transition engine.
    pub health: Vec<Health>,

    /// Step index of the agent's last INFECTED → SUSCEPTIBLE transition;
    /// [`NEVER_RECOVERED`] until the first recovery.  Never exceeds the
    /// current step.
    pub last_recovery: Vec<i64>,
}

impl Population {
    pub(crate) fn new(count: usize) -> Self {
        Self {
            count,
            health: vec![Health::Susceptible; count],
            last_recovery: vec![NEVER_RECOVERED; count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Current number of infected agents.  O(count) scan — called once per
    /// step to snapshot the infection pressure before any agent updates.
    pub fn infected_count(&self) -> u64 {
        self.health.iter().filter(|&&h| h == Health::Infected).count() as u64
    }

    /// Current number of susceptible agents.
    pub fn susceptible_count(&self) -> u64 {
        self.count as u64 - self.infected_count()
    }
}
