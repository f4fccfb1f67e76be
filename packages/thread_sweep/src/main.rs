#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Binary entry point for the thread sweep tool.
//!
//! This module is excluded from mutation testing because testing process entry/exit behavior
//! is impractical - it requires spawning subprocesses and checking exit codes.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use argh::FromArgs;
use thread_sweep::{RunInput, run};
use tracing::Level;

/// Runs the array summing worker with every configured input size and thread count, then
/// reports the speedup and efficiency of each run.
#[derive(FromArgs)]
struct Args {
    /// TOML file describing the sweep (keys: `executable`, `input_dir`, `output_dir`,
    /// `thread_counts`, `configurations`)
    #[argh(option)]
    config: Option<PathBuf>,

    /// worker executable to benchmark (default: `./main`)
    #[argh(option)]
    executable: Option<PathBuf>,

    /// directory for generated input files (default: `input_data`)
    #[argh(option)]
    input_dir: Option<PathBuf>,

    /// directory for worker output files (default: `output_data`)
    #[argh(option)]
    output_dir: Option<PathBuf>,

    /// log diagnostics to stderr
    #[argh(switch, short = 'v')]
    verbose: bool,
}

// Binary entry point - mutations would require subprocess testing which is impractical.
#[cfg_attr(test, mutants::skip)]
fn main() -> ExitCode {
    let args: Args = argh::from_env();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .init();

    let input = RunInput {
        config: args.config,
        executable: args.executable,
        input_dir: args.input_dir,
        output_dir: args.output_dir,
    };

    match run(&input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
