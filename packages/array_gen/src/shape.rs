use std::fmt;
use std::num::NonZero;

use crate::{Error, Result};

/// The dimensions of an input file: how many arrays it holds and how many elements are in
/// each array.
///
/// Both dimensions are always positive.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct InputShape {
    arrays: NonZero<u64>,
    elements: NonZero<u64>,
}

impl InputShape {
    /// Creates a shape of `arrays` arrays with `elements` elements each.
    #[must_use]
    pub const fn new(arrays: NonZero<u64>, elements: NonZero<u64>) -> Self {
        Self { arrays, elements }
    }

    /// Creates a shape from plain integers, as found in configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDimension`] if either dimension is zero.
    pub fn try_new(arrays: u64, elements: u64) -> Result<Self> {
        match (NonZero::new(arrays), NonZero::new(elements)) {
            (Some(arrays), Some(elements)) => Ok(Self::new(arrays, elements)),
            _ => Err(Error::ZeroDimension { arrays, elements }),
        }
    }

    /// The number of arrays (`K`).
    #[must_use]
    pub const fn arrays(&self) -> NonZero<u64> {
        self.arrays
    }

    /// The number of elements in each array (`M`).
    #[must_use]
    pub const fn elements(&self) -> NonZero<u64> {
        self.elements
    }
}

/// Formats the shape as the header line of an input file: `K M`.
impl fmt::Display for InputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.arrays, self.elements)
    }
}
