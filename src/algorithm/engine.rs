//! Greedy single-pass layout over the floor grid
//!
//! Visits every cell once in row-major order. Cells already covered by an
//! earlier placement are skipped; at every other cell one tile is laid, so
//! the pass always terminates after rows × cols visits with a fully laid
//! grid. There is no backtracking: the adjacency preference is applied
//! locally at each decision and never revisited.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::candidates::{candidate_kinds, problematic_kinds};
use crate::spatial::FloorGrid;

/// Single-run layout engine owning the grid and an injected random source
///
/// The random source is a type parameter so tests and callers can supply a
/// seeded generator for reproducible patterns.
#[derive(Debug)]
pub struct GreedyLayout<R: Rng> {
    grid: FloorGrid,
    rng: R,
}

impl<R: Rng> GreedyLayout<R> {
    /// Create an engine over a fresh unlaid grid
    pub fn new(rows: usize, cols: usize, rng: R) -> Self {
        Self {
            grid: FloorGrid::new(rows, cols),
            rng,
        }
    }

    /// Run the full row-major pass and return the laid grid
    pub fn lay_pattern(mut self) -> FloorGrid {
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                self.visit(row, col);
            }
        }

        self.grid
    }

    /// Decide and commit the placement for one scan cell
    fn visit(&mut self, row: usize, col: usize) {
        let mut candidates = candidate_kinds(&self.grid, row, col);
        if candidates.is_empty() {
            // Covered by a tile laid from an earlier scan cell.
            return;
        }

        let problematic = problematic_kinds(&self.grid, row, col, &candidates);

        // Drop repeats of the left/above neighbor only while a safe kind
        // survives; when every candidate repeats, accept a repeat rather
        // than leave the cell unlaid.
        if candidates.len() > problematic.len() {
            candidates.subtract(&problematic);
        }

        let pick = self.rng.random_range(0..candidates.len());
        if let Some(kind) = candidates.nth(pick) {
            self.grid.lay(row, col, kind);
        }
    }
}

/// Lay a full pattern with a deterministic seed
///
/// Two calls with identical dimensions and seed produce identical grids.
pub fn generate_seeded(rows: usize, cols: usize, seed: u64) -> FloorGrid {
    GreedyLayout::new(rows, cols, StdRng::seed_from_u64(seed)).lay_pattern()
}
