//! Colorized terminal rendering of grids and tallies
//!
//! The grid prints as one digit per cell, bold and colored by kind; the
//! tally prints as `kind:count` lines in the fixed kind order. Both render
//! into any writer so tests can capture output in memory, and both support
//! a plain mode that emits no escape sequences.

use std::io::Write;

use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::queue;

use crate::io::error::Result;
use crate::spatial::FloorGrid;
use crate::spatial::tiles::{PlacementTally, TileKind};

/// Foreground color used for a tile kind's digits
///
/// White marks unlaid cells, which never survive a finished pass but keep
/// the renderer total over partial grids.
pub const fn kind_color(kind: TileKind) -> Color {
    match kind {
        TileKind::Unlaid => Color::White,
        TileKind::OneByOne => Color::Red,
        TileKind::OneByTwo => Color::Blue,
        TileKind::TwoByOne => Color::Green,
        TileKind::TwoByTwo => Color::Yellow,
    }
}

/// Write the per-kind placement counts, one `kind:count` line per kind
///
/// All four placeable kinds appear in the fixed candidate order, zero
/// counts included, so output is stable across runs.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn render_tally<W: Write>(out: &mut W, tally: &PlacementTally) -> Result<()> {
    for (kind, count) in tally.iter() {
        writeln!(out, "{kind}:{count}")?;
    }

    Ok(())
}

/// Write the grid as rows of per-cell digits
///
/// In color mode every digit is bold and colored by kind; the foreground
/// command is only re-issued when the kind color changes between adjacent
/// cells, and all styling is reset before returning.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn render_grid<W: Write>(out: &mut W, grid: &FloorGrid, color: bool) -> Result<()> {
    if color {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }

    let mut current: Option<Color> = None;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let kind = grid.kind_at(row, col);

            if color {
                let foreground = kind_color(kind);
                if current != Some(foreground) {
                    queue!(out, SetForegroundColor(foreground))?;
                    current = Some(foreground);
                }
            }

            queue!(out, Print(kind.glyph()))?;
        }

        queue!(out, Print('\n'))?;
    }

    if color {
        queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    }

    out.flush()?;
    Ok(())
}
