// Real process launcher that delegates to std::process::Command.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::Command;

use crate::pal::{CapturedOutput, ProcessLauncher};

/// Process launcher that starts real operating system processes.
#[derive(Debug)]
pub(crate) struct BuildTargetProcessLauncher;

// Mutations to process execution cause subprocess hangs in tests.
#[cfg_attr(test, mutants::skip)]
impl ProcessLauncher for BuildTargetProcessLauncher {
    fn run_to_completion(&self, program: &Path, args: &[OsString]) -> io::Result<CapturedOutput> {
        let output = Command::new(program).args(args).output()?;

        Ok(CapturedOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
