use std::time::Duration;

/// The outcome of one worker run.
///
/// A failed run has no usable duration; it stands in for an infinitely slow run and is left out
/// of reports.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Timing {
    /// The worker exited with code 0 after this much wall-clock time.
    Completed(Duration),

    /// The worker exited with a non-zero code or was terminated by a signal.
    Failed,
}

impl Timing {
    /// The elapsed time of a completed run, or `None` if the run failed.
    #[must_use]
    pub const fn elapsed(&self) -> Option<Duration> {
        match self {
            Self::Completed(elapsed) => Some(*elapsed),
            Self::Failed => None,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn completed_reports_elapsed() {
        let timing = Timing::Completed(Duration::from_millis(1500));

        assert_eq!(timing.elapsed(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn failed_has_no_elapsed_time() {
        assert_eq!(Timing::Failed.elapsed(), None);
    }
}
