//! Course demos: a single-balance account and a guarded integer division.
//!
//! The binaries in `src/bin` are thin wrappers that set up logging and run
//! one demo against stdout.

pub mod domain;
pub mod logging;

pub use domain::*;
