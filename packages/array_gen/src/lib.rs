#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Writes the input files consumed by the array summing worker.
//!
//! An input file starts with a header line `K M` (the number of arrays and the number of
//! elements in each array), followed by `K` lines of `M` space-separated integers:
//!
//! ```text
//! 2 3
//! 1 2 3
//! 4 5 6
//! ```
//!
//! Two [`Numbering`] schemes exist for the integers. The standalone generator keeps one counter
//! running across all arrays ([`Numbering::Continuous`], shown above), whereas the thread sweep
//! harness restarts every array at 1 ([`Numbering::PerArray`]).
//!
//! # Example
//!
//! ```
//! use std::num::NonZero;
//!
//! use array_gen::{InputShape, Numbering, write_input};
//!
//! let shape = InputShape::new(NonZero::new(2).unwrap(), NonZero::new(3).unwrap());
//!
//! let mut buffer = Vec::new();
//! write_input(&mut buffer, shape, Numbering::PerArray).unwrap();
//!
//! assert_eq!(String::from_utf8(buffer).unwrap(), "2 3\n1 2 3\n1 2 3\n");
//! ```

mod error;
mod numbering;
mod shape;
mod writer;

pub use error::*;
pub use numbering::*;
pub use shape::*;
pub use writer::*;
