//! Candidate computation for the layout scan
//!
//! For a scan cell, a candidate is any tile kind whose full footprint fits
//! on unlaid in-bounds cells with its origin there. A problematic candidate
//! additionally matches the kind immediately to the left or above; the
//! engine drops those only while a safe alternative survives.

use bitvec::prelude::{BitVec, bitvec};

use crate::spatial::FloorGrid;
use crate::spatial::grid::Neighbor;
use crate::spatial::tiles::TileKind;

/// Small ordered set of placeable tile kinds
///
/// One bit per entry of [`TileKind::PLACEABLE`]; iteration always yields
/// kinds in that fixed order, so selection by index is reproducible under
/// a seeded random source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    bits: BitVec,
}

impl CandidateSet {
    /// Create a set with no kinds present
    pub fn new() -> Self {
        Self {
            bits: bitvec![0; TileKind::PLACEABLE.len()],
        }
    }

    /// Insert a placeable kind
    ///
    /// `Unlaid` has no slot and is ignored.
    pub fn insert(&mut self, kind: TileKind) {
        if let Some(slot) = kind.ordinal() {
            self.bits.set(slot, true);
        }
    }

    /// Test kind membership
    pub fn contains(&self, kind: TileKind) -> bool {
        kind.ordinal()
            .is_some_and(|slot| self.bits.get(slot).as_deref() == Some(&true))
    }

    /// Remove every kind present in `other` from this set
    pub fn subtract(&mut self, other: &Self) {
        for slot in other.bits.iter_ones() {
            self.bits.set(slot, false);
        }
    }

    /// Number of kinds in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no kinds are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Iterate kinds in the fixed candidate order
    pub fn iter(&self) -> impl Iterator<Item = TileKind> + '_ {
        self.bits
            .iter_ones()
            .filter_map(|slot| TileKind::PLACEABLE.get(slot).copied())
    }

    /// Kind at the given position in iteration order
    pub fn nth(&self, index: usize) -> Option<TileKind> {
        self.iter().nth(index)
    }

    /// Extract the kinds as a vector in iteration order
    pub fn to_vec(&self) -> Vec<TileKind> {
        self.iter().collect()
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Kinds that can legally be laid with their origin at (row, col)
///
/// Each kind is tested independently against the same footprint table the
/// grid lays with: every covered cell must be in bounds and unlaid. An
/// already-covered scan cell yields an empty set.
pub fn candidate_kinds(grid: &FloorGrid, row: usize, col: usize) -> CandidateSet {
    let mut candidates = CandidateSet::new();

    for kind in TileKind::PLACEABLE {
        let fits = kind
            .footprint()
            .iter()
            .all(|&(dr, dc)| grid.can_lay(row + dr, col + dc));

        if fits {
            candidates.insert(kind);
        }
    }

    candidates
}

/// Candidates whose kind repeats the left or above neighbor of (row, col)
///
/// Only the origin cell's left and above neighbors are consulted; cells
/// below and to the right are still unlaid at decision time and diagonals
/// are outside the rule. The result is always a subset of `candidates`.
pub fn problematic_kinds(
    grid: &FloorGrid,
    row: usize,
    col: usize,
    candidates: &CandidateSet,
) -> CandidateSet {
    let left = grid.neighbor_kind(row, col, Neighbor::Left);
    let above = grid.neighbor_kind(row, col, Neighbor::Above);

    let mut problematic = CandidateSet::new();
    for kind in candidates.iter() {
        if kind == left || kind == above {
            problematic.insert(kind);
        }
    }

    problematic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_offers_all_kinds() {
        let grid = FloorGrid::new(4, 4);
        let candidates = candidate_kinds(&grid, 0, 0);
        assert_eq!(candidates.to_vec(), TileKind::PLACEABLE.to_vec());
    }

    #[test]
    fn test_single_row_excludes_tall_kinds() {
        let grid = FloorGrid::new(1, 4);
        let candidates = candidate_kinds(&grid, 0, 0);
        assert!(candidates.contains(TileKind::OneByOne));
        assert!(candidates.contains(TileKind::OneByTwo));
        assert!(!candidates.contains(TileKind::TwoByOne));
        assert!(!candidates.contains(TileKind::TwoByTwo));
    }

    #[test]
    fn test_covered_cell_has_no_candidates() {
        let mut grid = FloorGrid::new(2, 2);
        grid.lay(0, 0, TileKind::TwoByTwo);
        assert!(candidate_kinds(&grid, 0, 1).is_empty());
        assert!(candidate_kinds(&grid, 1, 1).is_empty());
    }

    #[test]
    fn test_problematic_matches_left_and_above() {
        let mut grid = FloorGrid::new(3, 3);
        grid.lay(0, 0, TileKind::OneByOne);
        grid.lay(0, 1, TileKind::TwoByOne);

        // (1, 0): above repeats the 1x1, left is off the grid.
        let at_origin = candidate_kinds(&grid, 1, 0);
        let below = problematic_kinds(&grid, 1, 0, &at_origin);
        assert_eq!(below.to_vec(), vec![TileKind::OneByOne]);

        // (1, 2): left repeats the vertical pair, above is unlaid.
        let at_edge = candidate_kinds(&grid, 1, 2);
        let beside = problematic_kinds(&grid, 1, 2, &at_edge);
        assert_eq!(beside.to_vec(), vec![TileKind::TwoByOne]);
    }

    #[test]
    fn test_subtract_preserves_order() {
        let mut set = CandidateSet::new();
        for kind in TileKind::PLACEABLE {
            set.insert(kind);
        }

        let mut drop = CandidateSet::new();
        drop.insert(TileKind::OneByTwo);
        drop.insert(TileKind::TwoByTwo);

        set.subtract(&drop);
        assert_eq!(set.to_vec(), vec![TileKind::OneByOne, TileKind::TwoByOne]);
        assert_eq!(set.nth(1), Some(TileKind::TwoByOne));
    }
}
