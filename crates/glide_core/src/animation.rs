//! Settle animation for native renderers
//!
//! CSS adapters let the browser run the wrapper transition. Renderers without
//! a transition engine tick this tween instead to get the displayed offset.
//! The clock starts on the first tick, so the animation can be created from
//! calls that carry no timestamp (like `next_slide`).

use std::time::Instant;

use crate::geometry::Offset;
use crate::style::Transition;

/// Tween from the displayed offset to a settled offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleAnimation {
    from: Offset,
    to: Offset,
    transition: Transition,
    started_at: Option<Instant>,
}

impl SettleAnimation {
    pub fn new(from: Offset, to: Offset, transition: Transition) -> Self {
        Self {
            from,
            to,
            transition,
            started_at: None,
        }
    }

    /// True once the first tick has started the clock
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Offset at `now`, and whether the animation has finished
    pub fn sample(&mut self, now: Instant) -> (Offset, bool) {
        let started_at = *self.started_at.get_or_insert(now);
        let duration = self.transition.duration.as_secs_f32();
        if duration <= 0.0 {
            return (self.to, true);
        }

        let progress = now.saturating_duration_since(started_at).as_secs_f32() / duration;
        if progress >= 1.0 {
            return (self.to, true);
        }

        let eased = self.transition.easing.apply(progress);
        let value = Offset::new(
            self.from.x + (self.to.x - self.from.x) * eased,
            self.from.y + (self.to.y - self.from.y) * eased,
        );
        (value, false)
    }
}
