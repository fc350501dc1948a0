//! Pointer input module (engine-facing).
//!
//! This crate is independent of the board engine. It maps `crossterm` mouse
//! events onto grid cells and reduces them to the three calls the board
//! understands: begin-select, drag-to, and release.

pub mod handler;
pub mod map;

pub use tui_match3_types as types;

pub use handler::{PointerCommand, PointerHandler};
pub use map::{pointer_action, should_quit, PointerAction};
