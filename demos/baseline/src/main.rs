//! baseline — the reference ensemble for the rust_sis epidemic simulator.
//!
//! Five independent runs of a fully-mixed SIS epidemic with waning immunity:
//! 10 000 agents, transmission multiplier 0.2 (β = 0.2 / N), two simulated
//! years per run.  Writes the four ensemble tables as CSV and prints the
//! steady-state prevalence summary per run.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use sis_core::{RunId, SimParams, Step};
use sis_output::{CsvWriter, OutputWriter};
use sis_sim::{Ensemble, RunObserver, StepOutcome};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:   usize = 10_000;
const INITIAL_INFECTED: usize = 1;
const MULTIPLIER:    f64   = 0.2;   // β = MULTIPLIER / N
const T_IMMUNITY:    f64   = 200.0; // immunity decay timescale (days)
const T_RECOVERY:    f64   = 20.0;  // mean recovery time (days)
const T_EQUILIBRIUM: u64   = 500;   // interval recording starts here
const T_MAX:         u64   = 730;   // two years of daily steps
const RUNS:          usize = 5;
const SEED:          u64   = 0;

// ── Progress observer ─────────────────────────────────────────────────────────

/// Prints a progress line every `interval` steps of one run.
struct ProgressPrinter {
    run:      RunId,
    agents:   u64,
    interval: u64,
}

impl RunObserver for ProgressPrinter {
    fn on_step_end(&mut self, step: Step, infected_total: u64, _outcome: &StepOutcome) {
        if step.0 % self.interval == 0 {
            println!(
                "run {}: {:.0}%: {step}, {} infected ({:.1}%)",
                self.run.0,
                100.0 * step.0 as f64 / T_MAX as f64,
                infected_total,
                100.0 * infected_total as f64 / self.agents as f64,
            );
        }
    }
}

fn mean_last(column: &[u64], k: usize) -> f64 {
    let tail = &column[column.len().saturating_sub(k)..];
    tail.iter().sum::<u64>() as f64 / tail.len() as f64
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let params = SimParams {
        agents:           AGENT_COUNT,
        initial_infected: INITIAL_INFECTED,
        beta:             MULTIPLIER / AGENT_COUNT as f64,
        t_immunity:       T_IMMUNITY,
        t_recovery:       T_RECOVERY,
        t_max:            T_MAX,
        t_equilibrium:    T_EQUILIBRIUM,
        seed:             SEED,
    };

    println!("=== baseline — rust_sis SIS ensemble ===");
    println!(
        "N = {}, beta * N = {:.1}, runs = {}, seed = {}",
        params.agents,
        params.beta * params.agents as f64,
        RUNS,
        params.seed,
    );
    println!();

    let t0 = Instant::now();
    let tables = Ensemble::new(params, RUNS).run_with(|run| ProgressPrinter {
        run,
        agents:   AGENT_COUNT as u64,
        interval: T_MAX / 10,
    })?;
    let elapsed = t0.elapsed();

    println!();
    println!("Ensemble complete in {:.3} s", elapsed.as_secs_f64());
    for (run, column) in tables.infected_total_by_run.iter().enumerate() {
        println!(
            "run {run}: {:.0} infected on average (last 100 steps)",
            mean_last(column, 100),
        );
    }

    std::fs::create_dir_all("output/baseline")?;
    let mut writer = CsvWriter::new(Path::new("output/baseline"))?;
    writer.write_tables(&tables)?;
    writer.finish()?;

    println!();
    println!("Tables written to output/baseline/");
    println!("  infected_total.csv : {} rows x {} runs", tables.steps(), tables.runs());
    println!("  new_infections.csv : {} rows x {} runs", tables.steps(), tables.runs());
    println!("  recovery_age.csv   : {} rows x {} runs", AGENT_COUNT, tables.runs());
    println!(
        "  intervals.csv      : {} recorded intervals",
        tables.intervals_by_run.iter().map(Vec::len).sum::<usize>(),
    );

    Ok(())
}
