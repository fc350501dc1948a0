//! Pointer handler: turns left-button gestures into board commands.
//!
//! A press over a cell selects it. While the button is held, entering a new
//! cell retargets the drag (re-entering the same cell is not reported again,
//! and wandering off the board keeps the last target). Releasing anywhere ends
//! the gesture.

use crate::map::PointerAction;
use crate::types::{CellLayout, Coord};

/// One of the three calls the board understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerCommand {
    BeginSelect(Coord),
    DragTo(Coord),
    Release,
}

/// Tracks one pointer gesture against the current board layout.
#[derive(Debug, Clone, Default)]
pub struct PointerHandler {
    layout: CellLayout,
    held: bool,
    last_cell: Option<Coord>,
}

impl PointerHandler {
    pub fn new(layout: CellLayout) -> Self {
        Self {
            layout,
            held: false,
            last_cell: None,
        }
    }

    /// Update the hit-test layout (e.g. after a terminal resize).
    pub fn set_layout(&mut self, layout: CellLayout) {
        self.layout = layout;
    }

    pub fn layout(&self) -> CellLayout {
        self.layout
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn handle(&mut self, action: PointerAction) -> Option<PointerCommand> {
        match action {
            PointerAction::Press { column, row } => {
                self.held = true;
                self.last_cell = self.layout.cell_at(column, row);
                self.last_cell.map(PointerCommand::BeginSelect)
            }
            PointerAction::Drag { column, row } => {
                if !self.held {
                    return None;
                }
                let cell = self.layout.cell_at(column, row)?;
                if self.last_cell == Some(cell) {
                    return None;
                }
                self.last_cell = Some(cell);
                Some(PointerCommand::DragTo(cell))
            }
            PointerAction::Release { .. } => {
                if !self.held {
                    return None;
                }
                self.held = false;
                self.last_cell = None;
                Some(PointerCommand::Release)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> CellLayout {
        // 3x3 board, 2 columns x 1 row per cell, drawn from (1, 1).
        CellLayout {
            origin_x: 1,
            origin_y: 1,
            cell_w: 2,
            cell_h: 1,
            grid_width: 3,
            grid_height: 3,
        }
    }

    #[test]
    fn press_drag_release_sequence() {
        let mut h = PointerHandler::new(layout());

        // Terminal row 3 is the bottom grid row (y = 0).
        assert_eq!(
            h.handle(PointerAction::Press { column: 1, row: 3 }),
            Some(PointerCommand::BeginSelect(Coord::new(0, 0)))
        );
        assert_eq!(
            h.handle(PointerAction::Drag { column: 3, row: 3 }),
            Some(PointerCommand::DragTo(Coord::new(1, 0)))
        );
        assert_eq!(
            h.handle(PointerAction::Release { column: 3, row: 3 }),
            Some(PointerCommand::Release)
        );
        assert!(!h.is_held());
    }

    #[test]
    fn drag_within_same_cell_is_reported_once() {
        let mut h = PointerHandler::new(layout());
        h.handle(PointerAction::Press { column: 1, row: 3 });
        assert!(h.handle(PointerAction::Drag { column: 2, row: 3 }).is_none());
        assert!(h.handle(PointerAction::Drag { column: 3, row: 3 }).is_some());
        assert!(h.handle(PointerAction::Drag { column: 4, row: 3 }).is_none());
    }

    #[test]
    fn drag_back_to_origin_is_reported() {
        let mut h = PointerHandler::new(layout());
        h.handle(PointerAction::Press { column: 1, row: 3 });
        h.handle(PointerAction::Drag { column: 3, row: 3 });
        assert_eq!(
            h.handle(PointerAction::Drag { column: 1, row: 3 }),
            Some(PointerCommand::DragTo(Coord::new(0, 0)))
        );
    }

    #[test]
    fn drag_off_board_keeps_last_target() {
        let mut h = PointerHandler::new(layout());
        h.handle(PointerAction::Press { column: 1, row: 3 });
        h.handle(PointerAction::Drag { column: 3, row: 3 });
        assert!(h.handle(PointerAction::Drag { column: 40, row: 3 }).is_none());
        assert!(h.handle(PointerAction::Drag { column: 3, row: 3 }).is_none());
    }

    #[test]
    fn drag_and_release_without_press_are_ignored() {
        let mut h = PointerHandler::new(layout());
        assert!(h.handle(PointerAction::Drag { column: 3, row: 3 }).is_none());
        assert!(h.handle(PointerAction::Release { column: 3, row: 3 }).is_none());
    }

    #[test]
    fn press_off_board_still_tracks_release() {
        let mut h = PointerHandler::new(layout());
        assert!(h.handle(PointerAction::Press { column: 0, row: 0 }).is_none());
        assert!(h.is_held());
        assert_eq!(
            h.handle(PointerAction::Release { column: 0, row: 0 }),
            Some(PointerCommand::Release)
        );
    }
}
