//! Board module - owns the grid of tiles and the pieces occupying them
//!
//! The board is a `width × height` grid. Two parallel flat arrays (row-major,
//! index `y * width + x`) hold the static tiles and the id of the piece sitting
//! on each cell; pieces themselves live in an arena indexed by [`PieceId`].
//!
//! Coordinates: (x, y) where x grows to the right and y grows upward, so row 0
//! is the bottom row. Every indexed access goes through [`Board::in_bounds`].

use arrayvec::ArrayVec;
use tracing::info;

use crate::error::BoardError;
use crate::palette::Palette;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::types::{Coord, PieceColor, PieceId};

/// A static grid cell. Immutable after setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    coord: Coord,
}

impl Tile {
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

/// Grid state: tiles, cell occupancy, and the piece arena.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    /// Flat array of occupants, row-major order (y * width + x)
    cells: Vec<Option<PieceId>>,
    pieces: Vec<Piece>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails with [`BoardError::InvalidDimension`] unless both dimensions are positive.
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::InvalidDimension { width, height });
        }
        let len = (width as usize) * (height as usize);
        let mut tiles = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                tiles.push(Tile {
                    coord: Coord::new(x, y),
                });
            }
        }
        Ok(Self {
            width,
            height,
            tiles,
            cells: vec![None; len],
            pieces: Vec::with_capacity(len),
        })
    }

    /// Build a fully populated board from explicit colors.
    ///
    /// `rows[y][x]` is the color at (x, y); row 0 is the bottom row. All rows
    /// must have the same length.
    pub fn from_rows<R: AsRef<[PieceColor]>>(rows: &[R]) -> Result<Self, BoardError> {
        let height = rows.len() as i32;
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0) as i32;
        let mut board = Self::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() as i32 != width {
                return Err(BoardError::InvalidDimension {
                    width: row.len() as i32,
                    height,
                });
            }
            for (x, &color) in row.iter().enumerate() {
                board.spawn_piece(color, x as i32, y as i32);
            }
        }
        Ok(board)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// True iff `0 <= x < width` and `0 <= y < height`
    #[inline(always)]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    pub fn contains(&self, cell: Coord) -> bool {
        self.in_bounds(cell.x, cell.y)
    }

    pub fn tile_at(&self, x: i32, y: i32) -> Result<&Tile, BoardError> {
        self.index(x, y)
            .map(|i| &self.tiles[i])
            .ok_or(BoardError::OutOfBounds { x, y })
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The piece on (x, y), `Ok(None)` for an empty cell.
    pub fn piece_at(&self, x: i32, y: i32) -> Result<Option<&Piece>, BoardError> {
        let id = self.piece_id_at(x, y)?;
        Ok(id.and_then(|id| self.piece(id)))
    }

    pub fn piece_id_at(&self, x: i32, y: i32) -> Result<Option<PieceId>, BoardError> {
        self.index(x, y)
            .map(|i| self.cells[i])
            .ok_or(BoardError::OutOfBounds { x, y })
    }

    /// Color on (x, y); `None` when empty or outside the board.
    ///
    /// Scanning helpers use this instead of [`Board::piece_at`] so that running
    /// off the edge just ends a run.
    pub fn color_at(&self, x: i32, y: i32) -> Option<PieceColor> {
        self.piece_at(x, y).ok().flatten().map(Piece::color)
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.index())
    }

    /// All pieces ever spawned on this board, indexed by id.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Create a new piece and place it on (x, y).
    pub fn spawn_piece(&mut self, color: PieceColor, x: i32, y: i32) -> PieceId {
        let id = PieceId(self.pieces.len() as u32);
        self.pieces.push(Piece::new(id, color, Coord::new(x, y)));
        self.place_piece(id, x, y);
        id
    }

    /// Stamp (x, y) onto the piece and, if in bounds, record it in that cell.
    ///
    /// Out-of-bounds targets still update the piece's position so a piece can
    /// carry a destination before it is committed to the grid. Returns whether
    /// the cell was written.
    pub fn place_piece(&mut self, id: PieceId, x: i32, y: i32) -> bool {
        let Some(piece) = self.pieces.get_mut(id.index()) else {
            return false;
        };
        piece.set_position(Coord::new(x, y));
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = Some(id);
                true
            }
            None => false,
        }
    }

    /// Empty a cell, returning its previous occupant.
    ///
    /// The piece keeps its last position.
    pub fn take_piece(&mut self, x: i32, y: i32) -> Result<Option<PieceId>, BoardError> {
        let i = self.index(x, y).ok_or(BoardError::OutOfBounds { x, y })?;
        Ok(self.cells[i].take())
    }

    /// Exchange the occupants of two cells and stamp their new positions.
    pub(crate) fn exchange(&mut self, a: Coord, b: Coord) -> Result<(), BoardError> {
        let ia = self
            .index(a.x, a.y)
            .ok_or(BoardError::OutOfBounds { x: a.x, y: a.y })?;
        let ib = self
            .index(b.x, b.y)
            .ok_or(BoardError::OutOfBounds { x: b.x, y: b.y })?;
        self.cells.swap(ia, ib);
        for (i, cell) in [(ia, a), (ib, b)] {
            if let Some(id) = self.cells[i] {
                if let Some(piece) = self.pieces.get_mut(id.index()) {
                    piece.set_position(cell);
                }
            }
        }
        Ok(())
    }

    /// In-bounds orthogonal neighbors of a cell (right, left, up, down).
    pub fn neighbors(&self, cell: Coord) -> ArrayVec<Coord, 4> {
        let mut out = ArrayVec::new();
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            if let Some(n) = cell.offset(dx, dy).filter(|n| self.contains(*n)) {
                out.push(n);
            }
        }
        out
    }

    /// True when every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Spawn a random piece on every empty cell. Returns how many were spawned.
    ///
    /// Colors are drawn uniformly from `palette`, which never holds `Wild`.
    pub fn fill_random(&mut self, palette: &Palette, rng: &mut SimpleRng) -> usize {
        let mut spawned = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if matches!(self.piece_id_at(x, y), Ok(Some(_))) {
                    continue;
                }
                let Some(color) = rng.choose(palette.colors()) else {
                    return spawned;
                };
                self.spawn_piece(color, x, y);
                spawned += 1;
            }
        }
        info!(
            width = self.width,
            height = self.height,
            spawned,
            "filled board"
        );
        spawned
    }

    /// Advance every active piece move. Returns how many are still moving.
    pub fn tick_motion(&mut self, dt_ms: u32) -> usize {
        self.pieces
            .iter_mut()
            .map(|p| p.tick(dt_ms))
            .filter(|moving| *moving)
            .count()
    }

    /// True when no piece is animating
    pub fn is_settled(&self) -> bool {
        self.pieces.iter().all(|p| !p.is_moving())
    }
}
