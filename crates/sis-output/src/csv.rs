//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `infected_total.csv`
//! - `new_infections.csv`
//! - `recovery_age.csv`
//! - `intervals.csv`
//!
//! Headers are written lazily by the table methods because the run count
//! (the number of `run_*` columns) is only known once the tables arrive.

use std::fmt::Display;
use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Writes ensemble results to four CSV files.
pub struct CsvWriter {
    infected_total: Writer<File>,
    new_infections: Writer<File>,
    recovery_ages:  Writer<File>,
    intervals:      Writer<File>,
    finished:       bool,
}

impl CsvWriter {
    /// Open (or create) the four CSV files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Ok(Self {
            infected_total: Writer::from_path(dir.join("infected_total.csv"))?,
            new_infections: Writer::from_path(dir.join("new_infections.csv"))?,
            recovery_ages:  Writer::from_path(dir.join("recovery_age.csv"))?,
            intervals:      Writer::from_path(dir.join("intervals.csv"))?,
            finished:       false,
        })
    }
}

/// Write a rectangular per-run table: `index_name,run_0,…` then one row per
/// index with the run columns side by side.
fn write_wide<T: Display>(
    writer:     &mut Writer<File>,
    index_name: &str,
    columns:    &[Vec<T>],
) -> OutputResult<()> {
    let mut header = vec![index_name.to_owned()];
    header.extend((0..columns.len()).map(|r| format!("run_{r}")));
    writer.write_record(&header)?;

    let rows = columns.first().map_or(0, Vec::len);
    for i in 0..rows {
        let mut record = vec![i.to_string()];
        record.extend(columns.iter().map(|column| column[i].to_string()));
        writer.write_record(&record)?;
    }
    Ok(())
}

impl OutputWriter for CsvWriter {
    fn write_infected_total(&mut self, columns: &[Vec<u64>]) -> OutputResult<()> {
        write_wide(&mut self.infected_total, "time", columns)
    }

    fn write_new_infections(&mut self, columns: &[Vec<u64>]) -> OutputResult<()> {
        write_wide(&mut self.new_infections, "time", columns)
    }

    fn write_recovery_ages(&mut self, columns: &[Vec<i64>]) -> OutputResult<()> {
        write_wide(&mut self.recovery_ages, "agent", columns)
    }

    fn write_intervals(&mut self, intervals: &[Vec<u64>]) -> OutputResult<()> {
        self.intervals.write_record(["run", "interval"])?;
        for (run, column) in intervals.iter().enumerate() {
            for interval in column {
                self.intervals
                    .write_record(&[run.to_string(), interval.to_string()])?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.infected_total.flush()?;
        self.new_infections.flush()?;
        self.recovery_ages.flush()?;
        self.intervals.flush()?;
        Ok(())
    }
}
