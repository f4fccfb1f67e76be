// Speedup and efficiency of one configuration relative to its single-thread run.

use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZero;
use std::time::Duration;

use array_gen::InputShape;

use crate::{Error, Result, Timing};

const BASELINE_THREADS: NonZero<u32> = NonZero::<u32>::MIN;

/// The timings of every thread count that one configuration was run with.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigurationTimings {
    shape: InputShape,
    timings: BTreeMap<NonZero<u32>, Timing>,
}

impl ConfigurationTimings {
    /// Creates an empty set of timings for `shape`.
    #[must_use]
    pub fn new(shape: InputShape) -> Self {
        Self {
            shape,
            timings: BTreeMap::new(),
        }
    }

    /// Records the timing of the run with `threads` threads, replacing any earlier one.
    pub fn record(&mut self, threads: NonZero<u32>, timing: Timing) {
        self.timings.insert(threads, timing);
    }

    /// The configuration these timings belong to.
    #[must_use]
    pub fn shape(&self) -> InputShape {
        self.shape
    }

    /// The timing of the run with `threads` threads, if there was one.
    #[must_use]
    pub fn timing(&self, threads: NonZero<u32>) -> Option<Timing> {
        self.timings.get(&threads).copied()
    }

    /// All recorded timings in ascending thread count order.
    pub fn runs(&self) -> impl Iterator<Item = (NonZero<u32>, Timing)> + '_ {
        self.timings
            .iter()
            .map(|(&threads, &timing)| (threads, timing))
    }

    /// Computes speedup and efficiency of every successful run against the single-thread run.
    ///
    /// Failed runs are left out of the report.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingBaseline`] if there is no successful single-thread run: it either
    /// failed or was never part of the sweep.
    pub fn report(&self) -> Result<ConfigurationReport> {
        let baseline = self
            .timing(BASELINE_THREADS)
            .and_then(|timing| timing.elapsed())
            .ok_or(Error::MissingBaseline { shape: self.shape })?;

        let rows = self
            .runs()
            .filter_map(|(threads, timing)| {
                let elapsed = timing.elapsed()?;
                let speedup = baseline.as_secs_f64() / elapsed.as_secs_f64();

                Some(ReportRow {
                    threads,
                    elapsed,
                    speedup,
                    efficiency: speedup / f64::from(threads.get()),
                })
            })
            .collect();

        Ok(ConfigurationReport {
            shape: self.shape,
            rows,
        })
    }
}

/// One line of a [`ConfigurationReport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReportRow {
    threads: NonZero<u32>,
    elapsed: Duration,
    speedup: f64,
    efficiency: f64,
}

impl ReportRow {
    /// The number of threads the worker was asked to use.
    #[must_use]
    pub fn threads(&self) -> NonZero<u32> {
        self.threads
    }

    /// The wall-clock time of the run.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Single-thread time divided by the time of this run.
    #[must_use]
    pub fn speedup(&self) -> f64 {
        self.speedup
    }

    /// Speedup divided by the thread count.
    #[must_use]
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }
}

/// Speedup and efficiency of every successful run of one configuration.
///
/// The `Display` implementation renders the report printed at the end of a sweep:
///
/// ```text
///
/// Results for 5 arrays of size 5:
/// Threads: 1, Time: 0.001234 sec, Speedup: 1.00, Efficiency: 1.00
/// Threads: 2, Time: 0.000800 sec, Speedup: 1.54, Efficiency: 0.77
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigurationReport {
    shape: InputShape,
    rows: Vec<ReportRow>,
}

impl ConfigurationReport {
    /// The configuration the report is about.
    #[must_use]
    pub fn shape(&self) -> InputShape {
        self.shape
    }

    /// One row per successful run, in ascending thread count order.
    #[must_use]
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }
}

impl fmt::Display for ConfigurationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "Results for {} arrays of size {}:",
            self.shape.arrays(),
            self.shape.elements()
        )?;

        for row in &self.rows {
            writeln!(
                f,
                "Threads: {}, Time: {:.6} sec, Speedup: {:.2}, Efficiency: {:.2}",
                row.threads,
                row.elapsed.as_secs_f64(),
                row.speedup,
                row.efficiency
            )?;
        }

        Ok(())
    }
}
