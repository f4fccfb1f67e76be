use std::io;
use std::path::PathBuf;
use std::result;

use thiserror::Error;

/// Errors that can occur when generating input files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input file could not be created or written.
    #[error("failed to write input file '{}': {source}", .path.display())]
    Write {
        /// The file that was being written.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// One of the dimensions of a requested input shape was zero.
    #[error("invalid input shape {arrays}x{elements}: both dimensions must be positive")]
    ZeroDimension {
        /// The requested number of arrays.
        arrays: u64,

        /// The requested number of elements per array.
        elements: u64,
    },
}

/// A specialized `Result` type for input generation, returning the crate's [`Error`] type as the
/// error value.
pub(crate) type Result<T> = result::Result<T, Error>;
