//! `sis-output` — ensemble result writers for the rust_sis simulator.
//!
//! The simulation core hands over an [`EnsembleTables`] bundle; this crate
//! decides file formats.  The only provided backend is CSV:
//!
//! | File                     | Layout                                         |
//! |--------------------------|------------------------------------------------|
//! | `infected_total.csv`     | wide: `time,run_0,…,run_{R-1}`                 |
//! | `new_infections.csv`     | wide: `time,run_0,…,run_{R-1}`                 |
//! | `recovery_age.csv`       | wide: `agent,run_0,…,run_{R-1}`                |
//! | `intervals.csv`          | long: `run,interval` (ragged per run)          |
//!
//! All backends implement [`OutputWriter`]; additional formats slot in
//! without touching the simulation crates.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sis_output::{CsvWriter, OutputWriter};
//!
//! let tables = Ensemble::new(params, 5).run_all()?;
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_tables(&tables)?;
//! writer.finish()?;
//! ```
//!
//! [`EnsembleTables`]: sis_sim::EnsembleTables

pub mod csv;
pub mod error;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use writer::OutputWriter;
