//! Random greedy floor tiling pattern generator
//!
//! Lays non-overlapping tiles of four fixed sizes across a rectangular grid
//! in a single row-major pass, preferring tile kinds that differ from the
//! left and above neighbors, and renders the result as colored digits.

#![forbid(unsafe_code)]

/// Placement engine: candidate computation and the greedy layout pass
pub mod algorithm;
/// Terminal output, CLI handling, and error types
pub mod io;
/// Grid storage and tile shape definitions
pub mod spatial;

pub use io::error::{PatternError, Result};
