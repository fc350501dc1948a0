//! Game state module - ties the board, matcher, and swap controller together
//!
//! This is what the input layer and the renderer talk to. Input arrives as
//! `begin_select` / `drag_to` / `release`; time arrives as `tick`; the renderer
//! pulls a [`BoardSnapshot`] (or drives a [`Presenter`]) each frame.

use tracing::info;

use crate::board::Board;
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::matcher::{HighlightMap, MatchEngine};
use crate::palette::Palette;
use crate::rng::SimpleRng;
use crate::snapshot::{BoardSnapshot, PieceSnapshot, Presenter};
use crate::swap::{MotionSettings, SwapController, SwapOutcome, SwapState};
use crate::types::Coord;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    swap: SwapController,
    engine: MatchEngine,
    motion: MotionSettings,
    seed: u32,
    swaps: u32,
    last_outcome: Option<SwapOutcome>,
}

impl GameState {
    /// Build and randomly fill a board from configuration.
    ///
    /// Fails on non-positive dimensions or an unusable palette.
    pub fn new(config: &BoardConfig) -> Result<Self, BoardError> {
        let mut board = Board::new(config.width, config.height)?;
        let palette = Palette::resolve(&config.palette, config.strict_palette)?;
        let mut rng = SimpleRng::new(config.seed);
        board.fill_random(&palette, &mut rng);
        info!(
            seed = config.seed,
            colors = palette.len(),
            "board ready"
        );

        Ok(Self::from_board(board, config.motion()).with_seed(config.seed))
    }

    /// Wrap an already-populated board.
    pub fn from_board(board: Board, motion: MotionSettings) -> Self {
        Self {
            board,
            swap: SwapController::new(),
            engine: MatchEngine::default(),
            motion,
            seed: 0,
            swaps: 0,
            last_outcome: None,
        }
    }

    fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn swaps(&self) -> u32 {
        self.swaps
    }

    pub fn motion(&self) -> MotionSettings {
        self.motion
    }

    pub fn swap_state(&self) -> SwapState {
        self.swap.state()
    }

    pub fn last_outcome(&self) -> Option<&SwapOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn begin_select(&mut self, cell: Coord) {
        self.swap.begin_select(cell);
    }

    pub fn drag_to(&mut self, cell: Coord) {
        self.swap.drag_to(cell);
    }

    pub fn release(&mut self) -> SwapOutcome {
        let outcome = self.swap.release(&mut self.board, self.motion);
        match &outcome {
            SwapOutcome::Cancelled => {}
            SwapOutcome::Swapped { .. } => {
                self.swaps += 1;
                self.last_outcome = Some(outcome.clone());
            }
            SwapOutcome::Rejected(_) => {
                self.last_outcome = Some(outcome.clone());
            }
        }
        outcome
    }

    /// Advance piece animations. Returns how many pieces are still moving.
    pub fn tick(&mut self, dt_ms: u32) -> usize {
        self.board.tick_motion(dt_ms)
    }

    /// Recompute the board-wide highlight layer.
    pub fn highlights(&self) -> HighlightMap {
        self.engine.highlights(&self.board)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut pieces = Vec::with_capacity(self.board.pieces().len());
        for y in 0..self.board.height() {
            for x in 0..self.board.width() {
                let Ok(Some(piece)) = self.board.piece_at(x, y) else {
                    continue;
                };
                pieces.push(PieceSnapshot {
                    id: piece.id(),
                    color: piece.color(),
                    cell: piece.position(),
                    render: piece.render_position(),
                    moving: piece.is_moving(),
                });
            }
        }

        let state = self.swap.state();
        let status = self.last_outcome.as_ref().map(|o| match o {
            SwapOutcome::Swapped { a, b } => format!("swapped {} <-> {}", a, b),
            SwapOutcome::Rejected(err) => err.to_string(),
            SwapOutcome::Cancelled => String::new(),
        });

        BoardSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            pieces,
            highlights: self.highlights(),
            selected: state.selected(),
            target: state.target(),
            swaps: self.swaps,
            status,
        }
    }

    /// Drive a presenter with the current frame.
    pub fn present<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        self.snapshot().present(presenter);
    }
}
