//! Fluent builder for constructing `Population` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use sis_agent::PopulationBuilder;
//!
//! let (population, rngs) = PopulationBuilder::new(10_000, /*run_seed=*/ 42)
//!     .initial_infected(5)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(population.count, 10_000);
//! assert_eq!(population.infected_count(), 5);
//! assert_eq!(rngs.len(), 10_000);
//! ```

use rand::seq::index;

use sis_core::{SimRng, SisError, SisResult};

use crate::{AgentRngs, Population};
use crate::store::Health;

/// Fluent builder for [`Population`] + [`AgentRngs`].
///
/// All arrays are pre-allocated at sentinel values; the only non-trivial
/// initialization is the uniform without-replacement choice of the initially
/// infected agents, drawn from the run-level RNG so the selection is part of
/// the run's reproducible stream.
pub struct PopulationBuilder {
    count: usize,
    run_seed: u64,
    initial_infected: usize,
}

impl PopulationBuilder {
    /// Create a builder for `count` agents using `run_seed` as this run's
    /// RNG seed.
    pub fn new(count: usize, run_seed: u64) -> Self {
        Self {
            count,
            run_seed,
            initial_infected: 0,
        }
    }

    /// Number of agents seeded INFECTED at step 0 (default 0).
    pub fn initial_infected(mut self, n0: usize) -> Self {
        self.initial_infected = n0;
        self
    }

    /// Construct `Population` and `AgentRngs`.
    ///
    /// Everyone starts susceptible and immune-naive; `initial_infected`
    /// agents are then flipped to INFECTED, chosen uniformly without
    /// replacement.
    pub fn build(self) -> SisResult<(Population, AgentRngs)> {
        if self.initial_infected > self.count {
            return Err(SisError::Config(format!(
                "cannot seed {} infected into a population of {}",
                self.initial_infected, self.count
            )));
        }

        let mut population = Population::new(self.count);
        let mut rng = SimRng::new(self.run_seed);
        for i in index::sample(rng.inner(), self.count, self.initial_infected) {
            population.health[i] = Health::Infected;
        }

        let rngs = AgentRngs::new(self.count, self.run_seed);
        Ok((population, rngs))
    }
}
