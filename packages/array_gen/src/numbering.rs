use std::fmt;
use std::str::FromStr;

/// Which integers fill the arrays of an input file.
///
/// The standalone generator and the sweep harness have always disagreed on this: the former
/// counts across the whole file, the latter restarts every array. Both are kept so existing
/// data sets can be reproduced exactly.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Numbering {
    /// A single counter starting at 1 runs across all arrays, so the second array continues
    /// where the first one ended.
    #[default]
    Continuous,

    /// Every array holds `1..=M`.
    PerArray,
}

impl FromStr for Numbering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "continuous" => Ok(Self::Continuous),
            "per-array" | "per_array" => Ok(Self::PerArray),
            _ => Err(format!(
                "Invalid numbering: '{s}'. Valid options are: continuous, per-array"
            )),
        }
    }
}

impl fmt::Display for Numbering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continuous => f.write_str("continuous"),
            Self::PerArray => f.write_str("per-array"),
        }
    }
}
