// A single step of the sweep: writing one input file or timing one worker run.

use std::ffi::OsString;
use std::num::NonZero;
use std::path::Path;
use std::time::Instant;

use array_gen::{InputShape, Numbering, generate_file};
use tracing::{debug, warn};

use crate::pal::{ProcessLauncher, ProcessLauncherFacade};
use crate::{Error, Result, Timing};

/// Writes an input file for the sweep, replacing any existing file.
///
/// Every array holds `1..=elements_per_array`. This differs from the standalone generator,
/// which numbers elements continuously across arrays.
///
/// # Errors
///
/// Returns [`Error::Generate`] if either dimension is zero or the file cannot be written.
pub fn generate_input_file(
    filename: &Path,
    num_arrays: u64,
    elements_per_array: u64,
) -> Result<()> {
    let shape = InputShape::try_new(num_arrays, elements_per_array)?;

    generate_file(filename, shape, Numbering::PerArray)?;

    Ok(())
}

/// Runs the worker once as `<executable> <input_file> <num_threads> <output_file>` and measures
/// the wall-clock time until it exits.
///
/// If the worker exits with a non-zero code, its captured stderr is printed as
/// `Error: <stderr>` and [`Timing::Failed`] is returned; whatever it wrote to stdout is
/// ignored.
///
/// # Errors
///
/// Returns [`Error::Launch`] if the executable cannot be started at all.
pub fn run_experiment(
    executable: &Path,
    input_file: &Path,
    num_threads: NonZero<u32>,
    output_file: &Path,
) -> Result<Timing> {
    run_experiment_with(
        &ProcessLauncherFacade::target(),
        executable,
        input_file,
        num_threads,
        output_file,
    )
}

pub(crate) fn run_experiment_with(
    launcher: &impl ProcessLauncher,
    executable: &Path,
    input_file: &Path,
    num_threads: NonZero<u32>,
    output_file: &Path,
) -> Result<Timing> {
    let args = [
        input_file.as_os_str().to_owned(),
        OsString::from(num_threads.to_string()),
        output_file.as_os_str().to_owned(),
    ];

    debug!(
        executable = %executable.display(),
        input_file = %input_file.display(),
        num_threads,
        "launching worker"
    );

    let started = Instant::now();
    let output = launcher
        .run_to_completion(executable, &args)
        .map_err(|source| Error::Launch {
            executable: executable.to_path_buf(),
            source,
        })?;
    let elapsed = started.elapsed();

    if !output.succeeded() {
        println!("Error: {}", output.stderr);

        warn!(
            executable = %executable.display(),
            input_file = %input_file.display(),
            num_threads,
            exit_code = ?output.exit_code,
            stdout = %output.stdout.trim_end(),
            "worker failed"
        );

        return Ok(Timing::Failed);
    }

    debug!(
        num_threads,
        elapsed_secs = elapsed.as_secs_f64(),
        "worker completed"
    );

    Ok(Timing::Completed(elapsed))
}
