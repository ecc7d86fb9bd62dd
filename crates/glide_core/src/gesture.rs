//! Pointer and touch drag tracking
//!
//! Converts absolute pointer positions into per-event deltas. A positive
//! delta means the pointer moved toward the origin (left or up), which pushes
//! the wrapper toward later slides.

use crate::geometry::Offset;

/// Drag origin and tracking flag
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureTracker {
    tracking: bool,
    origin: Offset,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Last recorded pointer position (zero when idle)
    pub fn origin(&self) -> Offset {
        self.origin
    }

    /// Begin a drag at `(x, y)`
    pub fn start(&mut self, x: f32, y: f32) {
        self.tracking = true;
        self.origin = Offset::new(x, y);
    }

    /// Move the pointer to `(x, y)`, returning the delta since the last position
    ///
    /// Returns `None` when no drag is in progress.
    pub fn move_to(&mut self, x: f32, y: f32) -> Option<Offset> {
        if !self.tracking {
            return None;
        }
        let delta = Offset::new(self.origin.x - x, self.origin.y - y);
        self.origin = Offset::new(x, y);
        Some(delta)
    }

    /// End the drag and reset the origin
    pub fn end(&mut self) {
        self.tracking = false;
        self.origin = Offset::ZERO;
    }
}
