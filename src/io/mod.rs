//! Presentation and ambient concerns around the layout core
//!
//! The core pass is infallible by construction; everything that can fail
//! (argument validation, terminal writes) lives here.

/// Command-line interface and run orchestration
pub mod cli;
/// Default dimensions and safety limits
pub mod configuration;
/// Error types for the CLI and render boundary
pub mod error;
/// Colorized terminal rendering of grids and tallies
pub mod render;
