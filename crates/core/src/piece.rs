//! Movable colored pieces.

use tracing::debug;

use crate::motion::{MotionStatus, MoveTask};
use crate::types::{Coord, Easing, PieceColor, PieceId};

/// A colored piece occupying (or travelling to) a grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    id: PieceId,
    color: PieceColor,
    /// Logical grid coordinate, committed the moment a move is issued
    position: Coord,
    motion: Option<MoveTask>,
}

impl Piece {
    pub fn new(id: PieceId, color: PieceColor, position: Coord) -> Self {
        Self {
            id,
            color,
            position,
            motion: None,
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn color(&self) -> PieceColor {
        self.color
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Coord) {
        self.position = position;
    }

    pub fn is_moving(&self) -> bool {
        self.motion.is_some()
    }

    pub fn motion(&self) -> Option<&MoveTask> {
        self.motion.as_ref()
    }

    /// Where the piece should be drawn right now, in cell units.
    pub fn render_position(&self) -> (f32, f32) {
        match &self.motion {
            Some(task) => task.position(),
            None => (self.position.x as f32, self.position.y as f32),
        }
    }

    /// Start a visual move from the currently drawn position toward `destination`.
    ///
    /// At most one move runs per piece: while one is in flight the request is
    /// dropped and `false` is returned.
    pub fn move_to(&mut self, destination: Coord, duration_ms: u32, easing: Easing) -> bool {
        if self.motion.is_some() {
            return false;
        }
        self.motion = Some(MoveTask::new(
            self.render_position(),
            destination,
            duration_ms,
            easing,
        ));
        true
    }

    /// Advance the active move, if any. Returns true while still moving.
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        let Some(task) = self.motion.as_mut() else {
            return false;
        };
        match task.tick(dt_ms) {
            MotionStatus::Running => true,
            MotionStatus::Arrived => {
                debug!(piece = self.id.0, dest = %task.destination(), "move finished");
                self.motion = None;
                false
            }
        }
    }
}
