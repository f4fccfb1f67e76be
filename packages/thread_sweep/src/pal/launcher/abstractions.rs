// Process launcher trait, mocked in tests.

use std::ffi::OsString;
use std::fmt::Debug;
use std::io;
use std::path::Path;

/// What a finished child process left behind.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct CapturedOutput {
    /// The exit code, or `None` if the process was terminated by a signal.
    pub(crate) exit_code: Option<i32>,

    /// Everything the process wrote to stdout, decoded lossily as UTF-8.
    pub(crate) stdout: String,

    /// Everything the process wrote to stderr, decoded lossily as UTF-8.
    pub(crate) stderr: String,
}

impl CapturedOutput {
    /// Whether the process exited with code 0.
    pub(crate) fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Abstraction over launching a child process and waiting for it.
///
/// This trait is automatically mocked by mockall in test builds, generating
/// `MockProcessLauncher`.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait ProcessLauncher: Debug + Send + Sync + 'static {
    /// Starts `program` with `args`, waits for it to exit and returns its captured output.
    ///
    /// There is no timeout. Returns an error only if the process could not be started or
    /// waited for; a non-zero exit code is reported through [`CapturedOutput::exit_code`].
    fn run_to_completion(&self, program: &Path, args: &[OsString]) -> io::Result<CapturedOutput>;
}
