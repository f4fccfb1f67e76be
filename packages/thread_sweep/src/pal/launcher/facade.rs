// Facade that dispatches to either the real process launcher or a mock in tests.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::Path;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::pal::MockProcessLauncher;
use crate::pal::{BuildTargetProcessLauncher, CapturedOutput, ProcessLauncher};

/// Facade over process launching, dispatching to real or mock implementation.
///
/// In production, this always uses `BuildTargetProcessLauncher`. In tests, it can also wrap a
/// `MockProcessLauncher` to script worker behavior.
#[derive(Clone)]
pub(crate) enum ProcessLauncherFacade {
    /// Real process launcher.
    Target(&'static BuildTargetProcessLauncher),

    /// Mock process launcher for testing.
    #[cfg(test)]
    Mock(Arc<MockProcessLauncher>),
}

// Debug implementations have no API contract to test.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl fmt::Debug for ProcessLauncherFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Target(_) => f.debug_struct("ProcessLauncherFacade::Target").finish(),
            #[cfg(test)]
            Self::Mock(_) => f.debug_struct("ProcessLauncherFacade::Mock").finish(),
        }
    }
}

static BUILD_TARGET_PROCESS_LAUNCHER: BuildTargetProcessLauncher = BuildTargetProcessLauncher;

// Facade types are trivial pass-through layers - not worth testing.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl ProcessLauncherFacade {
    /// Creates a facade that launches real processes.
    pub(crate) const fn target() -> Self {
        Self::Target(&BUILD_TARGET_PROCESS_LAUNCHER)
    }

    /// Creates a facade wrapping a mock launcher (test builds only).
    #[cfg(test)]
    pub(crate) fn from_mock(mock: MockProcessLauncher) -> Self {
        Self::Mock(Arc::new(mock))
    }
}

// Facade types are trivial pass-through layers - not worth testing.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl ProcessLauncher for ProcessLauncherFacade {
    fn run_to_completion(&self, program: &Path, args: &[OsString]) -> io::Result<CapturedOutput> {
        match self {
            Self::Target(launcher) => launcher.run_to_completion(program, args),
            #[cfg(test)]
            Self::Mock(mock) => mock.run_to_completion(program, args),
        }
    }
}
