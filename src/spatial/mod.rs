//! Spatial data structures for the tiling pass
//!
//! This module contains the fixed-size floor grid and the closed set of
//! tile shapes that can be laid on it.

/// Floor grid storage and neighbor queries
pub mod grid;
/// Tile kinds, footprints, and placement tallies
pub mod tiles;

pub use grid::FloorGrid;
pub use tiles::TileKind;
