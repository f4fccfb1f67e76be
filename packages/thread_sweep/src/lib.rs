#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Measures how the array summing worker scales with its thread count.
//!
//! A sweep generates one input file per configured [`InputShape`], runs the worker executable
//! on each of them once per configured thread count and reports the speedup and efficiency of
//! every run relative to the single-thread run of the same input:
//!
//! ```text
//! Results for 10 arrays of size 100:
//! Threads: 1, Time: 0.002311 sec, Speedup: 1.00, Efficiency: 1.00
//! Threads: 2, Time: 0.001702 sec, Speedup: 1.36, Efficiency: 0.68
//! ```
//!
//! The worker is invoked as `<executable> <input_file> <num_threads> <output_file>` and must
//! exit with code 0 on success. Runs happen one at a time; all parallelism being measured lives
//! inside the worker. A worker that exits with a non-zero code is reported and its run is
//! recorded as [`Timing::Failed`] without stopping the sweep.
//!
//! Inputs go to `input_data/input_{K}_{M}.txt` and worker outputs to
//! `output_data/input_{K}_{M}_output_{threads}.txt` unless a [`SweepPlan`] says otherwise.
//!
//! The binary entry point is in `main.rs`.

mod error;
mod experiment;
mod pal;
mod plan;
mod report;
mod timing;

use std::fs;
use std::path::{Path, PathBuf};

pub use array_gen::InputShape;
use tracing::info;

pub use error::*;
pub use experiment::*;
pub use plan::*;
pub use report::*;
pub use timing::*;

use crate::pal::{ProcessLauncher, ProcessLauncherFacade};

/// Runs every configuration of `plan` with every thread count of `plan`.
///
/// All input files are generated before the first worker run. The returned timings are in the
/// order of [`SweepPlan::configurations()`].
///
/// # Errors
///
/// Returns an error if a directory or input file cannot be written or the worker cannot be
/// launched. A worker exiting with a non-zero code is not an error.
pub fn run_sweep(plan: &SweepPlan) -> Result<Vec<ConfigurationTimings>> {
    run_sweep_with(plan, &ProcessLauncherFacade::target())
}

fn run_sweep_with(
    plan: &SweepPlan,
    launcher: &impl ProcessLauncher,
) -> Result<Vec<ConfigurationTimings>> {
    create_directory(plan.input_dir())?;
    create_directory(plan.output_dir())?;

    info!(
        executable = %plan.executable().display(),
        configurations = plan.configurations().len(),
        thread_counts = ?plan.thread_counts(),
        "starting sweep"
    );

    let mut input_files = Vec::with_capacity(plan.configurations().len());

    for &shape in plan.configurations() {
        let input_file = plan.input_path(shape);
        generate_input_file(&input_file, shape.arrays().get(), shape.elements().get())?;
        input_files.push((shape, input_file));
    }

    let mut results = Vec::with_capacity(input_files.len());

    for (shape, input_file) in input_files {
        let mut timings = ConfigurationTimings::new(shape);

        for &threads in plan.thread_counts() {
            let output_file = plan.output_path(shape, threads);
            let timing = run_experiment_with(
                launcher,
                plan.executable(),
                &input_file,
                threads,
                &output_file,
            )?;

            timings.record(threads, timing);
        }

        results.push(timings);
    }

    info!("sweep finished");

    Ok(results)
}

fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| Error::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })
}

/// Input parameters for the `run` function.
///
/// Every field left as `None` keeps the value from the configuration file, or the default if
/// there is no configuration file.
#[doc(hidden)]
#[derive(Debug, Default)]
#[allow(
    clippy::exhaustive_structs,
    reason = "This is a hidden struct for internal/test use only"
)]
pub struct RunInput {
    /// TOML file describing the sweep.
    pub config: Option<PathBuf>,
    /// Worker executable, overriding the configuration.
    pub executable: Option<PathBuf>,
    /// Directory for generated input files, overriding the configuration.
    pub input_dir: Option<PathBuf>,
    /// Directory for worker output files, overriding the configuration.
    pub output_dir: Option<PathBuf>,
}

/// Core logic of the tool, extracted for testability.
///
/// Resolves the sweep plan, runs the sweep and prints the report of each configuration to
/// stdout. Reports are printed in configuration order; if a configuration has no single-thread
/// baseline, the reports before it are printed and its [`Error::MissingBaseline`] is returned.
#[doc(hidden)]
pub fn run(input: &RunInput) -> Result<()> {
    run_with_launcher(input, &ProcessLauncherFacade::target())
}

fn run_with_launcher(input: &RunInput, launcher: &impl ProcessLauncher) -> Result<()> {
    let plan = resolve_plan(input)?;

    let results = run_sweep_with(&plan, launcher)?;

    for configuration in &results {
        let report = configuration.report()?;
        print!("{report}");
    }

    Ok(())
}

fn resolve_plan(input: &RunInput) -> Result<SweepPlan> {
    let mut plan = match &input.config {
        Some(path) => SweepPlan::load(path)?,
        None => SweepPlan::default(),
    };

    if let Some(executable) = &input.executable {
        plan = plan.with_executable(executable.clone());
    }

    if let Some(input_dir) = &input.input_dir {
        plan = plan.with_input_dir(input_dir.clone());
    }

    if let Some(output_dir) = &input.output_dir {
        plan = plan.with_output_dir(output_dir.clone());
    }

    Ok(plan)
}
