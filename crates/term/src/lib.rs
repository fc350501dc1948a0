//! Terminal "board renderer" module.
//!
//! This is a small, game-oriented rendering layer for the match-3 board.
//! It avoids widget toolkits and instead renders into a simple framebuffer
//! that is diffed and flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and free of drawing code
//! - Implement the core's `Presenter` seam against a framebuffer
//! - Frame the board like a camera, with cells 2 chars wide per row

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tui_match3_core as core;
pub use tui_match3_types as types;

pub use board_view::{BoardView, FramePainter, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
