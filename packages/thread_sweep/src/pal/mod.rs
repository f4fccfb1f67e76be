// Platform abstraction layer for thread_sweep.
//
// Launching the worker goes through a trait so that sweeps can be tested against a mock process
// launcher. Same three layers as elsewhere: abstraction (trait) → facade (enum) → real
// implementation.

mod launcher;

pub(crate) use launcher::*;
