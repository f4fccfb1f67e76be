use std::io;
use std::path::PathBuf;
use std::result;

use array_gen::InputShape;
use thiserror::Error;
use toml::de;

/// Errors that stop a thread sweep.
///
/// A worker that exits with a non-zero code is not an error; it is recorded as
/// [`Timing::Failed`][crate::Timing::Failed] and the sweep continues.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// An input file could not be generated.
    #[error(transparent)]
    Generate(#[from] array_gen::Error),

    /// The input or output directory could not be created.
    #[error("failed to create directory '{}': {source}", .path.display())]
    CreateDirectory {
        /// The directory that was being created.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The worker executable could not be started at all.
    #[error("failed to launch worker '{}': {source}", .executable.display())]
    Launch {
        /// The executable that was being launched.
        executable: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The single-thread run of a configuration has no timing, so speedup cannot be computed.
    #[error(
        "no single-thread baseline for {} arrays of size {}: speedup cannot be computed",
        .shape.arrays(),
        .shape.elements()
    )]
    MissingBaseline {
        /// The configuration whose baseline is missing.
        shape: InputShape,
    },

    /// The sweep configuration file could not be read.
    #[error("failed to read sweep configuration '{}': {source}", .path.display())]
    ReadConfig {
        /// The configuration file.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The sweep configuration file is not valid TOML.
    #[error("failed to parse sweep configuration '{}': {source}", .path.display())]
    ParseConfig {
        /// The configuration file.
        path: PathBuf,

        /// The TOML parse error.
        #[source]
        source: de::Error,
    },

    /// The sweep configuration file is valid TOML but does not describe a valid sweep.
    #[error("invalid sweep configuration '{}': {problem}", .path.display())]
    InvalidConfig {
        /// The configuration file.
        path: PathBuf,

        /// A human-readable description of the problem.
        problem: String,
    },
}

/// A specialized `Result` type for sweep operations, returning the crate's [`Error`] type as the
/// error value.
pub(crate) type Result<T> = result::Result<T, Error>;
