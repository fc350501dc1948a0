//! Swap controller - turns select/drag/release into board swaps
//!
//! ```text
//! Idle --begin_select--> Selected --drag_to--> TargetChosen --release--> Idle
//!                           |                    ^    |
//!                           +------release-------+    +--drag_to (retarget)
//! ```
//!
//! The first touch wins until release, the last drag wins, and `release`
//! always returns to `Idle` whatever the outcome.

use tracing::debug;

use crate::board::Board;
use crate::error::BoardError;
use crate::types::{Coord, Easing};

/// Pending selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwapState {
    #[default]
    Idle,
    Selected {
        selected: Coord,
    },
    TargetChosen {
        selected: Coord,
        target: Coord,
    },
}

impl SwapState {
    pub fn selected(&self) -> Option<Coord> {
        match *self {
            SwapState::Idle => None,
            SwapState::Selected { selected } | SwapState::TargetChosen { selected, .. } => {
                Some(selected)
            }
        }
    }

    pub fn target(&self) -> Option<Coord> {
        match *self {
            SwapState::TargetChosen { target, .. } => Some(target),
            _ => None,
        }
    }
}

/// What a `release` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Nothing was selected, or no target was chosen
    Cancelled,
    /// The pieces on `a` and `b` traded places
    Swapped { a: Coord, b: Coord },
    /// The attempt was refused; the board is untouched
    Rejected(BoardError),
}

/// Timing used for the visual half of a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionSettings {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            duration_ms: crate::types::DEFAULT_MOVE_MS,
            easing: Easing::default(),
        }
    }
}

/// Select/drag/release state machine.
#[derive(Debug, Clone, Default)]
pub struct SwapController {
    state: SwapState,
}

impl SwapController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SwapState {
        self.state
    }

    /// Select a cell. Ignored unless idle.
    pub fn begin_select(&mut self, cell: Coord) {
        if self.state == SwapState::Idle {
            self.state = SwapState::Selected { selected: cell };
        }
    }

    /// Choose (or re-choose) the swap target. Ignored while idle.
    pub fn drag_to(&mut self, cell: Coord) {
        if let Some(selected) = self.state.selected() {
            self.state = SwapState::TargetChosen {
                selected,
                target: cell,
            };
        }
    }

    /// Finish the gesture: attempt the swap if a target was chosen, then reset.
    pub fn release(&mut self, board: &mut Board, motion: MotionSettings) -> SwapOutcome {
        let state = std::mem::take(&mut self.state);
        let SwapState::TargetChosen { selected, target } = state else {
            return SwapOutcome::Cancelled;
        };

        match resolve_swap(board, selected, target, motion) {
            Ok(()) => SwapOutcome::Swapped {
                a: selected,
                b: target,
            },
            Err(err) => {
                debug!(%err, "swap rejected");
                SwapOutcome::Rejected(err)
            }
        }
    }
}

/// Swap the pieces on two edge-adjacent cells.
///
/// Validity depends only on adjacency, never on whether a match results. The
/// logical exchange is committed here, once; each piece then gets a visual
/// move toward its new cell (dropped if that piece is already moving).
pub fn resolve_swap(
    board: &mut Board,
    a: Coord,
    b: Coord,
    motion: MotionSettings,
) -> Result<(), BoardError> {
    for cell in [a, b] {
        if !board.contains(cell) {
            return Err(BoardError::OutOfBounds {
                x: cell.x,
                y: cell.y,
            });
        }
    }
    if !a.is_adjacent(b) {
        return Err(BoardError::NotAdjacent { from: a, to: b });
    }

    let piece_a = board.piece_id_at(a.x, a.y)?;
    let piece_b = board.piece_id_at(b.x, b.y)?;

    // Moves start from where each piece is drawn now, before the commit.
    for (id, dest) in [(piece_a, b), (piece_b, a)] {
        if let Some(piece) = id.and_then(|id| board.piece_mut(id)) {
            piece.move_to(dest, motion.duration_ms, motion.easing);
        }
    }
    board.exchange(a, b)?;

    debug!(%a, %b, "swapped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceColor::*;

    #[test]
    fn first_touch_wins() {
        let mut c = SwapController::new();
        c.begin_select(Coord::new(0, 0));
        c.begin_select(Coord::new(3, 3));
        assert_eq!(c.state().selected(), Some(Coord::new(0, 0)));

        c.drag_to(Coord::new(1, 0));
        c.begin_select(Coord::new(3, 3));
        assert_eq!(c.state().selected(), Some(Coord::new(0, 0)));
    }

    #[test]
    fn drag_while_idle_is_ignored() {
        let mut c = SwapController::new();
        c.drag_to(Coord::new(1, 0));
        assert_eq!(c.state(), SwapState::Idle);
    }

    #[test]
    fn last_drag_wins() {
        let mut c = SwapController::new();
        c.begin_select(Coord::new(1, 1));
        c.drag_to(Coord::new(2, 2));
        c.drag_to(Coord::new(1, 2));
        assert_eq!(c.state().target(), Some(Coord::new(1, 2)));
    }

    #[test]
    fn release_without_target_cancels() {
        let mut board = Board::from_rows(&[[Red, Blue]]).unwrap();
        let mut c = SwapController::new();
        assert_eq!(
            c.release(&mut board, MotionSettings::default()),
            SwapOutcome::Cancelled
        );

        c.begin_select(Coord::new(0, 0));
        assert_eq!(
            c.release(&mut board, MotionSettings::default()),
            SwapOutcome::Cancelled
        );
        assert_eq!(c.state(), SwapState::Idle);
        assert_eq!(board.color_at(0, 0), Some(Red));
    }

    #[test]
    fn self_swap_is_not_adjacent() {
        let mut board = Board::from_rows(&[[Red, Blue]]).unwrap();
        let err = resolve_swap(
            &mut board,
            Coord::new(0, 0),
            Coord::new(0, 0),
            MotionSettings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, BoardError::NotAdjacent { .. }));
    }

    #[test]
    fn out_of_bounds_target_is_rejected() {
        let mut board = Board::from_rows(&[[Red, Blue]]).unwrap();
        let err = resolve_swap(
            &mut board,
            Coord::new(1, 0),
            Coord::new(2, 0),
            MotionSettings::default(),
        )
        .unwrap_err();
        assert_eq!(err, BoardError::OutOfBounds { x: 2, y: 0 });
        assert_eq!(board.color_at(1, 0), Some(Blue));
    }

    #[test]
    fn swap_starts_visual_moves_from_old_cells() {
        let mut board = Board::from_rows(&[[Red, Blue]]).unwrap();
        let red = board.piece_id_at(0, 0).unwrap().unwrap();
        resolve_swap(
            &mut board,
            Coord::new(0, 0),
            Coord::new(1, 0),
            MotionSettings {
                duration_ms: 100,
                easing: Easing::Linear,
            },
        )
        .unwrap();

        let piece = board.piece(red).unwrap();
        assert_eq!(piece.position(), Coord::new(1, 0));
        assert_eq!(piece.render_position(), (0.0, 0.0));
        assert_eq!(piece.motion().unwrap().destination(), Coord::new(1, 0));
    }
}
