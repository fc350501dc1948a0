//! Per-piece movement animation.
//!
//! A [`MoveTask`] interpolates a piece's *visual* position from where it was
//! drawn toward a destination cell. It is advanced by an external driver once
//! per tick and never touches logical board state: the board commits piece
//! positions synchronously when a swap resolves, and the task only decides
//! where the piece is drawn until it arrives.

use crate::types::{Coord, Easing, MOVE_EPSILON};

/// Result of advancing a move by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionStatus {
    /// Still travelling
    Running,
    /// Reached the destination on this tick
    Arrived,
}

/// Visual interpolation state for one piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveTask {
    start: (f32, f32),
    destination: Coord,
    current: (f32, f32),
    elapsed_ms: u32,
    duration_ms: u32,
    easing: Easing,
}

impl MoveTask {
    pub fn new(start: (f32, f32), destination: Coord, duration_ms: u32, easing: Easing) -> Self {
        Self {
            start,
            destination,
            current: start,
            elapsed_ms: 0,
            duration_ms,
            easing,
        }
    }

    pub fn destination(&self) -> Coord {
        self.destination
    }

    /// Current drawn position in (fractional) cell units
    pub fn position(&self) -> (f32, f32) {
        self.current
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Advance by `dt_ms`.
    ///
    /// Finishes once the remaining distance drops below [`MOVE_EPSILON`] or the
    /// elapsed time reaches the duration; either way the position snaps onto the
    /// destination.
    pub fn tick(&mut self, dt_ms: u32) -> MotionStatus {
        let dest = (self.destination.x as f32, self.destination.y as f32);
        if distance(self.current, dest) < MOVE_EPSILON {
            self.current = dest;
            return MotionStatus::Arrived;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if self.duration_ms == 0 || self.elapsed_ms >= self.duration_ms {
            self.current = dest;
            return MotionStatus::Arrived;
        }

        let t = self.elapsed_ms as f32 / self.duration_ms as f32;
        let k = self.easing.apply(t);
        self.current = (
            self.start.0 + (dest.0 - self.start.0) * k,
            self.start.1 + (dest.1 - self.start.1) * k,
        );
        MotionStatus::Running
    }
}

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_move_progresses_proportionally() {
        let mut task = MoveTask::new((0.0, 0.0), Coord::new(1, 0), 100, Easing::Linear);
        assert_eq!(task.tick(25), MotionStatus::Running);
        assert!((task.position().0 - 0.25).abs() < 1e-5);
        assert_eq!(task.tick(25), MotionStatus::Running);
        assert!((task.position().0 - 0.5).abs() < 1e-5);
        assert_eq!(task.position().1, 0.0);
    }

    #[test]
    fn move_arrives_when_duration_elapses() {
        let mut task = MoveTask::new((0.0, 0.0), Coord::new(0, 1), 32, Easing::SmootherStep);
        assert_eq!(task.tick(16), MotionStatus::Running);
        assert_eq!(task.tick(16), MotionStatus::Arrived);
        assert_eq!(task.position(), (0.0, 1.0));
    }

    #[test]
    fn move_already_at_destination_arrives_immediately() {
        let mut task = MoveTask::new((2.0, 3.0), Coord::new(2, 3), 500, Easing::Linear);
        assert_eq!(task.tick(16), MotionStatus::Arrived);
        assert_eq!(task.elapsed_ms(), 0);
    }

    #[test]
    fn zero_duration_snaps() {
        let mut task = MoveTask::new((0.0, 0.0), Coord::new(1, 0), 0, Easing::EaseIn);
        assert_eq!(task.tick(1), MotionStatus::Arrived);
        assert_eq!(task.position(), (1.0, 0.0));
    }

    #[test]
    fn ease_out_leads_linear() {
        let mut linear = MoveTask::new((0.0, 0.0), Coord::new(1, 0), 100, Easing::Linear);
        let mut eased = MoveTask::new((0.0, 0.0), Coord::new(1, 0), 100, Easing::EaseOut);
        linear.tick(30);
        eased.tick(30);
        assert!(eased.position().0 > linear.position().0);
    }
}
