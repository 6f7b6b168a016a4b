//! Transient touch tracking for swipe navigation.

use super::controller::Direction;

/// A touch in progress, captured on touch-start and dropped on touch-end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchGesture {
    start_x: f64,
}

impl TouchGesture {
    pub fn new(start_x: f64) -> Self {
        Self { start_x }
    }

    pub fn start_x(&self) -> f64 {
        self.start_x
    }

    /// Distance travelled towards the left edge since the touch began.
    ///
    /// Positive when the finger moved left, which drags the next cards into
    /// view.
    pub fn delta(&self, x: f64) -> f64 {
        self.start_x - x
    }

    /// The swipe this drag amounts to, once it exceeds `threshold`.
    pub fn swipe(&self, x: f64, threshold: f64) -> Option<Direction> {
        let delta = self.delta(x);
        if delta.is_nan() || delta.abs() <= threshold {
            None
        } else if delta > 0.0 {
            Some(Direction::Right)
        } else {
            Some(Direction::Left)
        }
    }
}
