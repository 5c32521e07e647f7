//! Tile shape definitions and placement tallies
//!
//! The four placeable shapes are described by a footprint table of cell
//! offsets from the origin (the top-left covered cell). Legality checks and
//! placement both iterate the same table, so the two can never disagree
//! about which cells a shape covers.

use std::fmt;

/// Occupancy tag for a single grid cell
///
/// `Unlaid` marks a cell no tile has reached yet; the other variants name
/// the shape of the tile covering the cell. Cells carry only the kind, not
/// a tile identity: the generator produces a pattern, not an object graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// No tile laid yet
    Unlaid,
    /// 1×1 square
    OneByOne,
    /// 1×2 horizontal pair
    OneByTwo,
    /// 2×1 vertical pair
    TwoByOne,
    /// 2×2 square
    TwoByTwo,
}

impl TileKind {
    /// Placeable kinds in the fixed candidate order
    ///
    /// This order defines the candidate sequence at every scan cell, so a
    /// seeded random source reproduces byte-identical grids.
    pub const PLACEABLE: [Self; 4] = [Self::OneByOne, Self::OneByTwo, Self::TwoByOne, Self::TwoByTwo];

    /// Cell offsets (row, col) covered by this shape, relative to its origin
    pub const fn footprint(self) -> &'static [(usize, usize)] {
        match self {
            Self::Unlaid => &[],
            Self::OneByOne => &[(0, 0)],
            Self::OneByTwo => &[(0, 0), (0, 1)],
            Self::TwoByOne => &[(0, 0), (1, 0)],
            Self::TwoByTwo => &[(0, 0), (0, 1), (1, 0), (1, 1)],
        }
    }

    /// Number of cells this shape covers
    pub const fn cell_count(self) -> usize {
        self.footprint().len()
    }

    /// Position of a placeable kind within [`Self::PLACEABLE`]
    ///
    /// `None` for `Unlaid`, which is never a candidate and never tallied.
    pub const fn ordinal(self) -> Option<usize> {
        match self {
            Self::Unlaid => None,
            Self::OneByOne => Some(0),
            Self::OneByTwo => Some(1),
            Self::TwoByOne => Some(2),
            Self::TwoByTwo => Some(3),
        }
    }

    /// Single-character tag used when rendering the grid
    pub const fn glyph(self) -> char {
        match self {
            Self::Unlaid => '0',
            Self::OneByOne => '1',
            Self::OneByTwo => '2',
            Self::TwoByOne => '3',
            Self::TwoByTwo => '4',
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unlaid => "unlaid",
            Self::OneByOne => "1x1",
            Self::OneByTwo => "1x2",
            Self::TwoByOne => "2x1",
            Self::TwoByTwo => "2x2",
        };
        write!(f, "{name}")
    }
}

/// Running count of placements per tile kind
///
/// Indexed by the placeable-kind ordinal; updated by the grid as tiles are
/// laid and read only by presentation and tests afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlacementTally {
    counts: [usize; TileKind::PLACEABLE.len()],
}

impl PlacementTally {
    /// Create an all-zero tally
    pub const fn new() -> Self {
        Self {
            counts: [0; TileKind::PLACEABLE.len()],
        }
    }

    /// Record one placement of the given kind
    ///
    /// `Unlaid` has no tally slot and is ignored.
    pub fn record(&mut self, kind: TileKind) {
        if let Some(slot) = kind.ordinal() {
            if let Some(count) = self.counts.get_mut(slot) {
                *count += 1;
            }
        }
    }

    /// Number of placements recorded for a kind
    pub fn count(&self, kind: TileKind) -> usize {
        kind.ordinal()
            .and_then(|slot| self.counts.get(slot).copied())
            .unwrap_or(0)
    }

    /// Iterate (kind, count) pairs in the fixed candidate order
    pub fn iter(&self) -> impl Iterator<Item = (TileKind, usize)> + '_ {
        TileKind::PLACEABLE
            .iter()
            .map(move |&kind| (kind, self.count(kind)))
    }

    /// Total number of grid cells accounted for by the tally
    ///
    /// Each placement contributes its footprint size; on a fully laid R×C
    /// grid this equals R×C exactly.
    pub fn cells_covered(&self) -> usize {
        self.iter()
            .map(|(kind, count)| kind.cell_count() * count)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprints_anchor_at_origin() {
        for kind in TileKind::PLACEABLE {
            assert_eq!(kind.footprint().first(), Some(&(0, 0)));
        }
    }

    #[test]
    fn test_tally_ignores_unlaid() {
        let mut tally = PlacementTally::new();
        tally.record(TileKind::Unlaid);
        tally.record(TileKind::TwoByTwo);
        assert_eq!(tally.count(TileKind::TwoByTwo), 1);
        assert_eq!(tally.cells_covered(), 4);
    }
}
