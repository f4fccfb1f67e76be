// Sweep configuration: what to run, where to put files, and how to override the defaults.

use std::collections::HashSet;
use std::fs;
use std::num::NonZero;
use std::path::{Path, PathBuf};
use std::result;

use array_gen::InputShape;
use toml::Value;
use tracing::debug;

use crate::{Error, Result};

/// Worker executable launched when nothing else is configured.
pub const DEFAULT_EXECUTABLE: &str = "./main";

/// Directory that receives the generated input files by default.
pub const DEFAULT_INPUT_DIR: &str = "input_data";

/// Directory passed to the worker for its output files by default.
pub const DEFAULT_OUTPUT_DIR: &str = "output_data";

/// Thread counts swept by default.
pub const DEFAULT_THREAD_COUNTS: [u32; 4] = [1, 2, 6, 10];

/// Input shapes swept by default, as `(arrays, elements per array)`.
pub const DEFAULT_CONFIGURATIONS: [(u64, u64); 3] = [(5, 5), (10, 100), (100, 1000)];

/// Everything a sweep needs to know: the worker to launch, the input shapes and thread counts
/// to run it with, and the directories for input and output files.
///
/// [`SweepPlan::default()`] is the standard sweep. A TOML file loaded with [`SweepPlan::load()`]
/// can override any part of it:
///
/// ```toml
/// executable = "./target/release/sum_arrays"
/// input_dir = "input_data"
/// output_dir = "output_data"
/// thread_counts = [1, 2, 4, 8]
/// configurations = [[5, 5], [1000, 1000]]
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SweepPlan {
    executable: PathBuf,
    input_dir: PathBuf,
    output_dir: PathBuf,
    configurations: Vec<InputShape>,
    thread_counts: Vec<NonZero<u32>>,
}

impl SweepPlan {
    /// Loads a plan from a TOML file. Keys missing from the file keep their default values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadConfig`], [`Error::ParseConfig`] or [`Error::InvalidConfig`] if the
    /// file cannot be read, is not TOML or does not describe a valid sweep.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;

        let mut plan = Self::default();
        plan.apply_toml(&contents, path)?;

        debug!(path = %path.display(), ?plan, "loaded sweep configuration");

        Ok(plan)
    }

    /// Replaces the worker executable.
    #[must_use]
    pub fn with_executable(mut self, executable: PathBuf) -> Self {
        self.executable = executable;
        self
    }

    /// Replaces the directory that receives the generated input files.
    #[must_use]
    pub fn with_input_dir(mut self, input_dir: PathBuf) -> Self {
        self.input_dir = input_dir;
        self
    }

    /// Replaces the directory that receives the worker output files.
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// The worker executable.
    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// The directory that receives the generated input files.
    #[must_use]
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// The directory that receives the worker output files.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The input shapes to sweep, in the order they are run and reported.
    #[must_use]
    pub fn configurations(&self) -> &[InputShape] {
        &self.configurations
    }

    /// The thread counts each configuration is run with, in the order they are run.
    #[must_use]
    pub fn thread_counts(&self) -> &[NonZero<u32>] {
        &self.thread_counts
    }

    /// Path of the input file generated for `shape`: `<input_dir>/input_{K}_{M}.txt`.
    #[must_use]
    pub fn input_path(&self, shape: InputShape) -> PathBuf {
        let file_name = format!("input_{}_{}.txt", shape.arrays(), shape.elements());
        self.input_dir.join(file_name)
    }

    /// Path of the output file the worker writes for `shape` when running with `threads`
    /// threads: `<output_dir>/input_{K}_{M}_output_{threads}.txt`.
    #[must_use]
    pub fn output_path(&self, shape: InputShape, threads: NonZero<u32>) -> PathBuf {
        let file_name = format!(
            "input_{}_{}_output_{threads}.txt",
            shape.arrays(),
            shape.elements()
        );
        self.output_dir.join(file_name)
    }

    /// Overrides parts of the plan with the keys found in TOML `contents`.
    ///
    /// `origin` is only used in error messages.
    pub(crate) fn apply_toml(&mut self, contents: &str, origin: &Path) -> Result<()> {
        let invalid = |problem: String| Error::InvalidConfig {
            path: origin.to_path_buf(),
            problem,
        };

        let value: Value = toml::from_str(contents).map_err(|source| Error::ParseConfig {
            path: origin.to_path_buf(),
            source,
        })?;

        let Some(table) = value.as_table() else {
            return Err(invalid("expected a table at the top level".to_string()));
        };

        for (key, item) in table {
            match key.as_str() {
                "executable" => self.executable = parse_path(key, item).map_err(invalid)?,
                "input_dir" => self.input_dir = parse_path(key, item).map_err(invalid)?,
                "output_dir" => self.output_dir = parse_path(key, item).map_err(invalid)?,
                "thread_counts" => self.thread_counts = parse_thread_counts(item).map_err(invalid)?,
                "configurations" => {
                    self.configurations = parse_configurations(item).map_err(invalid)?;
                }
                other => return Err(invalid(format!("unknown key '{other}'"))),
            }
        }

        Ok(())
    }
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self {
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            configurations: DEFAULT_CONFIGURATIONS
                .iter()
                .filter_map(|&(arrays, elements)| {
                    InputShape::try_new(arrays, elements).ok()
                })
                .collect(),
            thread_counts: DEFAULT_THREAD_COUNTS
                .iter()
                .copied()
                .filter_map(NonZero::new)
                .collect(),
        }
    }
}

/// Outcome of parsing one configuration value; the error describes the problem.
type ParseResult<T> = result::Result<T, String>;

fn parse_path(key: &str, item: &Value) -> ParseResult<PathBuf> {
    item.as_str()
        .map(PathBuf::from)
        .ok_or_else(|| format!("'{key}' must be a string"))
}

fn parse_positive(item: &Value, what: &str) -> ParseResult<NonZero<u64>> {
    item.as_integer()
        .and_then(|value| u64::try_from(value).ok())
        .and_then(NonZero::new)
        .ok_or_else(|| format!("{what} must be a positive integer, got {item}"))
}

fn parse_thread_counts(item: &Value) -> ParseResult<Vec<NonZero<u32>>> {
    let entries = item
        .as_array()
        .ok_or_else(|| "'thread_counts' must be an array".to_string())?;

    if entries.is_empty() {
        return Err("'thread_counts' must not be empty".to_string());
    }

    let mut seen = HashSet::new();
    let mut thread_counts = Vec::with_capacity(entries.len());

    for entry in entries {
        let requested = parse_positive(entry, "thread count")?;
        let threads = NonZero::<u32>::try_from(requested)
            .map_err(|err| format!("thread count {requested} too large: {err}"))?;

        if !seen.insert(threads) {
            return Err(format!("thread count {threads} is listed more than once"));
        }

        thread_counts.push(threads);
    }

    Ok(thread_counts)
}

fn parse_configurations(item: &Value) -> ParseResult<Vec<InputShape>> {
    let entries = item
        .as_array()
        .ok_or_else(|| "'configurations' must be an array".to_string())?;

    if entries.is_empty() {
        return Err("'configurations' must not be empty".to_string());
    }

    let mut seen = HashSet::new();
    let mut configurations = Vec::with_capacity(entries.len());

    for entry in entries {
        let Some([arrays, elements]) = entry.as_array().map(Vec::as_slice) else {
            return Err(format!(
                "configuration must be an [arrays, elements] pair, got {entry}"
            ));
        };

        let shape = InputShape::new(
            parse_positive(arrays, "array count")?,
            parse_positive(elements, "array size")?,
        );

        if !seen.insert(shape) {
            return Err(format!("configuration [{shape}] is listed more than once"));
        }

        configurations.push(shape);
    }

    Ok(configurations)
}
