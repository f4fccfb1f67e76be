#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Binary entry point for the standalone input generator.
//!
//! Without arguments this writes `data.txt` with 20000 arrays of 20000 continuously numbered
//! integers each.

use std::io;
use std::num::NonZero;
use std::path::PathBuf;
use std::process::ExitCode;

use argh::FromArgs;
use array_gen::{InputShape, Numbering, generate_file};
use tracing::Level;

const DEFAULT_ARRAYS: NonZero<u64> = NonZero::new(20_000).expect("literal is non-zero");
const DEFAULT_ELEMENTS: NonZero<u64> = NonZero::new(20_000).expect("literal is non-zero");
const DEFAULT_OUTPUT: &str = "data.txt";

/// Writes a file of equally sized integer arrays for the array summing worker.
#[derive(FromArgs)]
struct Args {
    /// number of arrays to write (default: 20000)
    #[argh(option, default = "DEFAULT_ARRAYS")]
    arrays: NonZero<u64>,

    /// number of elements in each array (default: 20000)
    #[argh(option, default = "DEFAULT_ELEMENTS")]
    elements: NonZero<u64>,

    /// path of the file to write, replaced if it exists (default: `data.txt`)
    #[argh(option, default = "PathBuf::from(DEFAULT_OUTPUT)")]
    output: PathBuf,

    /// how to number the elements: continuous or per-array (default: continuous)
    #[argh(option, default = "Numbering::Continuous")]
    numbering: Numbering,

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

    let shape = InputShape::new(args.arrays, args.elements);

    match generate_file(&args.output, shape, args.numbering) {
        Ok(()) => {
            println!(
                "File '{}' created with {} arrays of {} elements.",
                args.output.display(),
                shape.arrays(),
                shape.elements()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
