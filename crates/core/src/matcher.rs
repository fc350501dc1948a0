//! Match detection - run scanning over the board
//!
//! Matching is built from one primitive, [`scan_direction`], which walks from a
//! seed cell in a unit direction collecting same-colored pieces until the first
//! mismatch, empty cell, or board edge.
//!
//! A cell's vertical match is the union of its upward and downward scans; its
//! horizontal match is the union of its leftward and rightward scans. Each
//! half-scan only needs `min_match - 1` pieces because both halves share the
//! seed, and the union must reach `min_match` to count.
//!
//! The engine reports which cells are matched and in what color. It never
//! builds deduplicated match objects: overlapping runs just paint the same cells.

use crate::board::Board;
use crate::types::{Coord, PieceColor, PieceId, MIN_MATCH_LEN};

/// Walk from `start` along `dir`, collecting the run of pieces that share the
/// start piece's color.
///
/// Each component of `dir` is clamped to -1, 0 or 1. At most
/// `max(width, height) - 1` steps are taken. Returns `None` when the start cell
/// is outside the board or empty, or when the run is shorter than
/// `min_run_len`. The returned run starts with the seed and follows scan order.
pub fn scan_direction(
    board: &Board,
    start: Coord,
    dir: (i32, i32),
    min_run_len: usize,
) -> Option<Vec<PieceId>> {
    let seed = board.piece_id_at(start.x, start.y).ok().flatten()?;
    let seed_color = board.piece(seed)?.color();

    let (dx, dy) = (dir.0.signum(), dir.1.signum());
    let max_steps = board.width().max(board.height()) - 1;

    let mut run = vec![seed];
    for step in 1..=max_steps {
        let x = start.x + dx * step;
        let y = start.y + dy * step;
        if !board.in_bounds(x, y) {
            break;
        }
        let Some(next) = board.piece_id_at(x, y).ok().flatten() else {
            break;
        };
        if board.piece(next).map(|p| p.color()) != Some(seed_color) {
            break;
        }
        if !run.contains(&next) {
            run.push(next);
        }
    }

    (run.len() >= min_run_len).then_some(run)
}

/// Append the members of `other` missing from `into`, keeping first-seen order.
fn union_into(into: &mut Vec<PieceId>, other: &[PieceId]) {
    for id in other {
        if !into.contains(id) {
            into.push(*id);
        }
    }
}

/// Stateless match finder parameterized by the minimum match length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEngine {
    min_match: usize,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(MIN_MATCH_LEN)
    }
}

impl MatchEngine {
    pub fn new(min_match: usize) -> Self {
        Self {
            min_match: min_match.max(1),
        }
    }

    pub fn min_match(&self) -> usize {
        self.min_match
    }

    /// Minimum length for each half-scan (seed included)
    fn half_run_len(&self) -> usize {
        self.min_match.saturating_sub(1).max(1)
    }

    /// Pieces forming a vertical match through `cell`, or empty.
    pub fn vertical_match(&self, board: &Board, cell: Coord) -> Vec<PieceId> {
        self.axis_match(board, cell, (0, 1))
    }

    /// Pieces forming a horizontal match through `cell`, or empty.
    pub fn horizontal_match(&self, board: &Board, cell: Coord) -> Vec<PieceId> {
        self.axis_match(board, cell, (1, 0))
    }

    fn axis_match(&self, board: &Board, cell: Coord, (dx, dy): (i32, i32)) -> Vec<PieceId> {
        let half = self.half_run_len();
        let mut combined = scan_direction(board, cell, (dx, dy), half).unwrap_or_default();
        let backward = scan_direction(board, cell, (-dx, -dy), half).unwrap_or_default();
        union_into(&mut combined, &backward);

        if combined.len() >= self.min_match {
            combined
        } else {
            Vec::new()
        }
    }

    /// Horizontal ∪ vertical match through `cell`. Shared pieces appear once.
    pub fn match_at(&self, board: &Board, cell: Coord) -> Vec<PieceId> {
        let mut all = self.horizontal_match(board, cell);
        let vertical = self.vertical_match(board, cell);
        union_into(&mut all, &vertical);
        all
    }

    /// Sweep the whole board and paint every matched piece's cell with its color.
    ///
    /// Read-only and idempotent; cheap enough to recompute every frame.
    pub fn highlights(&self, board: &Board) -> HighlightMap {
        let mut map = HighlightMap::new(board.width(), board.height());
        for y in 0..board.height() {
            for x in 0..board.width() {
                for id in self.match_at(board, Coord::new(x, y)) {
                    if let Some(piece) = board.piece(id) {
                        map.paint(piece.position(), piece.color());
                    }
                }
            }
        }
        map
    }
}

/// Per-cell highlight layer produced by [`MatchEngine::highlights`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightMap {
    width: i32,
    height: i32,
    /// Row-major, `y * width + x`
    cells: Vec<Option<PieceColor>>,
}

impl HighlightMap {
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width,
            height,
            cells: vec![None; len],
        }
    }

    fn index(&self, cell: Coord) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 || cell.x >= self.width || cell.y >= self.height {
            return None;
        }
        Some((cell.y as usize) * (self.width as usize) + (cell.x as usize))
    }

    fn paint(&mut self, cell: Coord, color: PieceColor) {
        if let Some(i) = self.index(cell) {
            self.cells[i] = Some(color);
        }
    }

    /// Highlight color for a cell, `None` when unmatched or out of range.
    pub fn get(&self, x: i32, y: i32) -> Option<PieceColor> {
        self.index(Coord::new(x, y)).and_then(|i| self.cells[i])
    }

    pub fn is_matched(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some()
    }

    pub fn matched_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Matched cells in row-major order.
    pub fn matched_cells(&self) -> Vec<Coord> {
        self.iter()
            .filter_map(|(cell, color)| color.map(|_| cell))
            .collect()
    }

    /// Every cell with its highlight, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Option<PieceColor>)> + '_ {
        let w = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (Coord::new(i as i32 % w, i as i32 / w), *c))
    }
}
