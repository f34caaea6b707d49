//! The `OutputWriter` trait implemented by all backend writers.

use sis_sim::EnsembleTables;

use crate::OutputResult;

/// Trait implemented by ensemble result writers.
///
/// Each table method takes one column per run; the time-indexed tables are
/// rectangular, the interval collections are ragged.
pub trait OutputWriter {
    /// Write the total-infected table (one row per step, one column per run).
    fn write_infected_total(&mut self, columns: &[Vec<u64>]) -> OutputResult<()>;

    /// Write the new-infections table (same shape).
    fn write_new_infections(&mut self, columns: &[Vec<u64>]) -> OutputResult<()>;

    /// Write the time-since-recovery-at-horizon table (one row per agent).
    fn write_recovery_ages(&mut self, columns: &[Vec<i64>]) -> OutputResult<()>;

    /// Write the equilibrium-phase inter-infection intervals per run.
    fn write_intervals(&mut self, intervals: &[Vec<u64>]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;

    /// Write every table of an ensemble in one call.
    fn write_tables(&mut self, tables: &EnsembleTables) -> OutputResult<()> {
        self.write_infected_total(&tables.infected_total_by_run)?;
        self.write_new_infections(&tables.new_infections_by_run)?;
        self.write_recovery_ages(&tables.recovery_age_by_run)?;
        self.write_intervals(&tables.intervals_by_run)?;
        Ok(())
    }
}
