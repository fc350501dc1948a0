//! Snapshot module - render-ready copy of the board and the presentation seam

use crate::matcher::HighlightMap;
use crate::types::{Coord, PieceColor, PieceId};

/// Presentation seam.
///
/// The core never draws. It hands each on-board piece's drawn position and each
/// cell's highlight to an implementer of this trait, once per frame.
pub trait Presenter {
    /// Draw a piece of `color` at fractional cell position (x, y).
    fn render_piece_at(&mut self, color: PieceColor, x: f32, y: f32);

    /// Paint (or clear, with `None`) the highlight layer of a cell.
    fn set_cell_highlight(&mut self, cell: Coord, color: Option<PieceColor>);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceSnapshot {
    pub id: PieceId,
    pub color: PieceColor,
    /// Logical cell
    pub cell: Coord,
    /// Drawn position in cell units (differs from `cell` while moving)
    pub render: (f32, f32),
    pub moving: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub width: i32,
    pub height: i32,
    /// Pieces currently occupying a cell
    pub pieces: Vec<PieceSnapshot>,
    pub highlights: HighlightMap,
    pub selected: Option<Coord>,
    pub target: Option<Coord>,
    pub swaps: u32,
    /// Human-readable result of the last release, if any
    pub status: Option<String>,
}

impl BoardSnapshot {
    /// True when nothing is animating
    pub fn settled(&self) -> bool {
        self.pieces.iter().all(|p| !p.moving)
    }

    /// Replay this frame into a presenter: highlights first, then pieces.
    pub fn present<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        for (cell, color) in self.highlights.iter() {
            presenter.set_cell_highlight(cell, color);
        }
        for piece in &self.pieces {
            presenter.render_piece_at(piece.color, piece.render.0, piece.render.1);
        }
    }
}
