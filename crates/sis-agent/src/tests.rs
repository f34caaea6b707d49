//! Unit tests for sis-agent.

#[cfg(test)]
mod store {
    use crate::{Health, Population, NEVER_RECOVERED};

    #[test]
    fn fresh_population_is_susceptible_and_naive() {
        let p = Population::new(8);
        assert_eq!(p.count, 8);
        assert!(p.health.iter().all(|&h| h == Health::Susceptible));
        assert!(p.last_recovery.iter().all(|&t| t == NEVER_RECOVERED));
        assert_eq!(p.infected_count(), 0);
        assert_eq!(p.susceptible_count(), 8);
    }

    #[test]
    fn counts_are_conserved() {
        let mut p = Population::new(10);
        p.health[2] = Health::Infected;
        p.health[7] = Health::Infected;
        assert_eq!(p.infected_count() + p.susceptible_count(), 10);
        assert_eq!(p.infected_count(), 2);
    }

    #[test]
    fn agent_ids_ascending() {
        let p = Population::new(3);
        let ids: Vec<u32> = p.agent_ids().map(|a| a.0).collect();
        assert_eq!(ids, [0, 1, 2]);
    }
}

#[cfg(test)]
mod builder {
    use crate::{Health, PopulationBuilder, NEVER_RECOVERED};

    #[test]
    fn seeds_exact_initial_infected() {
        let (p, rngs) = PopulationBuilder::new(100, 42).initial_infected(7).build().unwrap();
        assert_eq!(p.infected_count(), 7);
        assert_eq!(rngs.len(), 100);
        // Initial infections are not recoveries — everyone stays naive.
        assert!(p.last_recovery.iter().all(|&t| t == NEVER_RECOVERED));
    }

    #[test]
    fn zero_initial_infected_ok() {
        let (p, _) = PopulationBuilder::new(5, 1).build().unwrap();
        assert_eq!(p.infected_count(), 0);
    }

    #[test]
    fn whole_population_infected_ok() {
        let (p, _) = PopulationBuilder::new(5, 1).initial_infected(5).build().unwrap();
        assert_eq!(p.infected_count(), 5);
        assert_eq!(p.susceptible_count(), 0);
    }

    #[test]
    fn oversized_initial_infected_errors() {
        let result = PopulationBuilder::new(5, 1).initial_infected(6).build();
        assert!(result.is_err());
    }

    #[test]
    fn selection_is_deterministic_per_seed() {
        let (a, _) = PopulationBuilder::new(50, 9).initial_infected(10).build().unwrap();
        let (b, _) = PopulationBuilder::new(50, 9).initial_infected(10).build().unwrap();
        assert_eq!(a.health, b.health);
    }

    #[test]
    fn selection_varies_with_seed() {
        let (a, _) = PopulationBuilder::new(200, 1).initial_infected(20).build().unwrap();
        let (b, _) = PopulationBuilder::new(200, 2).initial_infected(20).build().unwrap();
        // Same count either way; the chosen subset should differ.
        assert_eq!(a.infected_count(), b.infected_count());
        assert_ne!(a.health, b.health);
    }

    #[test]
    fn infected_flag_matches_count() {
        let (p, _) = PopulationBuilder::new(30, 3).initial_infected(12).build().unwrap();
        let flagged = p.health.iter().filter(|&&h| h == Health::Infected).count();
        assert_eq!(flagged as u64, p.infected_count());
    }
}
