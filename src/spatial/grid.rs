//! Floor grid storage with neighbor queries
//!
//! The grid is a fixed-size rectangle of [`TileKind`] cells, fully unlaid
//! at construction and written exactly once per cell during the layout
//! pass. Cells are monotonic: once laid they are never rewritten, so a
//! finished grid is a consistent record of every placement.

use ndarray::Array2;

use crate::spatial::tiles::{PlacementTally, TileKind};

/// Direction of an adjacency query relative to a scan cell
///
/// Only the left and above neighbors are ever consulted: cells below and
/// to the right have not been laid yet when the scan reaches a cell, and
/// diagonals are deliberately outside the adjacency rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Neighbor {
    /// The cell at (row, col - 1)
    Left,
    /// The cell at (row - 1, col)
    Above,
}

/// Fixed-size rectangular grid of tile-kind cells plus the placement tally
///
/// Created fully unlaid, mutated only through [`FloorGrid::lay`] during a
/// single generation pass, and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloorGrid {
    cells: Array2<TileKind>,
    tally: PlacementTally,
    dimensions: (usize, usize),
}

impl FloorGrid {
    /// Create an unlaid grid with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), TileKind::Unlaid),
            tally: PlacementTally::new(),
            dimensions: (rows, cols),
        }
    }

    /// Number of rows in the grid
    pub const fn rows(&self) -> usize {
        self.dimensions.0
    }

    /// Number of columns in the grid
    pub const fn cols(&self) -> usize {
        self.dimensions.1
    }

    /// Check whether a coordinate lies on the grid
    pub const fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols()
    }

    /// Check whether a cell already carries a tile
    ///
    /// Out-of-bounds coordinates report as not laid; callers that care
    /// about the distinction guard with [`FloorGrid::in_bounds`] first.
    pub fn is_laid(&self, row: usize, col: usize) -> bool {
        self.kind_at(row, col) != TileKind::Unlaid
    }

    /// Check whether a tile cell could be written at this coordinate
    pub fn can_lay(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && !self.is_laid(row, col)
    }

    /// Kind occupying the left or above neighbor of a cell
    ///
    /// Returns [`TileKind::Unlaid`] when the neighbor is off the grid, so
    /// an edge cell never reads as matching a non-existent neighbor.
    pub fn neighbor_kind(&self, row: usize, col: usize, neighbor: Neighbor) -> TileKind {
        let target = match neighbor {
            Neighbor::Left => col.checked_sub(1).map(|left| (row, left)),
            Neighbor::Above => row.checked_sub(1).map(|above| (above, col)),
        };

        target.map_or(TileKind::Unlaid, |(r, c)| self.kind_at(r, c))
    }

    /// Kind currently occupying a cell
    ///
    /// Out-of-bounds coordinates read as [`TileKind::Unlaid`].
    pub fn kind_at(&self, row: usize, col: usize) -> TileKind {
        self.cells
            .get([row, col])
            .copied()
            .unwrap_or(TileKind::Unlaid)
    }

    /// Write a tile of the given kind with its origin at (row, col)
    ///
    /// Every cell in the kind's footprint receives the kind, and the tally
    /// is incremented once. The caller is responsible for legality; a
    /// violation means the scan logic is broken and the grid state can no
    /// longer be trusted, so this fails fast rather than recovering.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is `Unlaid`, or if any covered cell is out of
    /// bounds or already laid.
    pub fn lay(&mut self, row: usize, col: usize, kind: TileKind) {
        assert!(kind != TileKind::Unlaid, "cannot lay the unlaid marker");

        for &(dr, dc) in kind.footprint() {
            assert!(
                self.can_lay(row + dr, col + dc),
                "illegal {kind} placement at ({row}, {col}): cell ({}, {}) unavailable",
                row + dr,
                col + dc,
            );
        }

        for &(dr, dc) in kind.footprint() {
            if let Some(cell) = self.cells.get_mut([row + dr, col + dc]) {
                *cell = kind;
            }
        }

        self.tally.record(kind);
    }

    /// Per-kind placement counts accumulated so far
    pub const fn tally(&self) -> &PlacementTally {
        &self.tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_sentinel_at_edges() {
        let grid = FloorGrid::new(3, 3);
        assert_eq!(grid.neighbor_kind(0, 0, Neighbor::Left), TileKind::Unlaid);
        assert_eq!(grid.neighbor_kind(0, 0, Neighbor::Above), TileKind::Unlaid);
    }

    #[test]
    fn test_lay_covers_full_footprint() {
        let mut grid = FloorGrid::new(2, 2);
        grid.lay(0, 0, TileKind::TwoByTwo);

        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(grid.kind_at(row, col), TileKind::TwoByTwo);
            }
        }
        assert_eq!(grid.tally().count(TileKind::TwoByTwo), 1);
    }

    #[test]
    #[should_panic(expected = "illegal")]
    fn test_lay_rejects_occupied_cells() {
        let mut grid = FloorGrid::new(2, 2);
        grid.lay(0, 0, TileKind::OneByTwo);
        grid.lay(0, 1, TileKind::OneByOne);
    }

    #[test]
    #[should_panic(expected = "illegal")]
    fn test_lay_rejects_out_of_bounds_footprint() {
        let mut grid = FloorGrid::new(1, 4);
        grid.lay(0, 3, TileKind::OneByTwo);
    }
}
