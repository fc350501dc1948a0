//! Core board logic - pure, deterministic, and testable
//!
//! This crate contains the board state, match detection, and swap handling.
//! It has **no dependencies** on terminal I/O or input devices, which keeps it:
//!
//! - **Deterministic**: the random fill takes an explicit seeded RNG
//! - **Testable**: every rule is reachable from plain function calls
//! - **Portable**: any front end can drive it through three input calls and a
//!   per-frame tick
//!
//! # Module Structure
//!
//! - [`board`]: width × height grid of tiles and piece occupancy, bounds checks
//! - [`piece`] / [`motion`]: colored pieces and their visual move tasks
//! - [`matcher`]: directional run scanning and the board-wide highlight pass
//! - [`swap`]: select/drag/release state machine and adjacency-checked swaps
//! - [`palette`] / [`rng`]: fill colors and seeded randomness
//! - [`config`]: environment-driven board configuration
//! - [`game_state`]: facade the front end talks to
//!
//! # Rules
//!
//! - A swap is valid iff the two cells share an edge (Manhattan distance 1);
//!   whether it produces a match does not matter.
//! - A match is three or more same-colored pieces in a straight horizontal or
//!   vertical line. `Wild` only matches `Wild`.
//! - Matches are highlighted, never cleared.
//!
//! # Example
//!
//! ```
//! use tui_match3_core::{Board, GameState, MotionSettings, SwapOutcome};
//! use tui_match3_core::types::{Coord, PieceColor::*};
//!
//! let board = Board::from_rows(&[
//!     [Red, Blue, Red],
//!     [Green, Red, Yellow],
//!     [Blue, Green, Cyan],
//! ])
//! .unwrap();
//! let mut game = GameState::from_board(board, MotionSettings::default());
//! assert_eq!(game.highlights().matched_count(), 0);
//!
//! // Drag the blue piece at (1, 0) up onto the red piece at (1, 1).
//! game.begin_select(Coord::new(1, 0));
//! game.drag_to(Coord::new(1, 1));
//! assert!(matches!(game.release(), SwapOutcome::Swapped { .. }));
//!
//! // Row 0 is now red-red-red.
//! assert_eq!(game.highlights().matched_count(), 3);
//! ```
//!
//! # Timing
//!
//! Swaps commit logically at once. The visual slide runs over
//! [`MotionSettings::duration_ms`]; call [`GameState::tick`] every frame with
//! the elapsed milliseconds to advance it.

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod matcher;
pub mod motion;
pub mod palette;
pub mod piece;
pub mod rng;
pub mod snapshot;
pub mod swap;

pub use tui_match3_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Tile};
pub use config::BoardConfig;
pub use error::{BoardError, ConfigError};
pub use game_state::GameState;
pub use matcher::{scan_direction, HighlightMap, MatchEngine};
pub use motion::{MotionStatus, MoveTask};
pub use palette::Palette;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use snapshot::{BoardSnapshot, PieceSnapshot, Presenter};
pub use swap::{resolve_swap, MotionSettings, SwapController, SwapOutcome, SwapState};
