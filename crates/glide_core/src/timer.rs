//! Single-shot debounce timer
//!
//! The host event loop owns the clock and polls; the timer only records a
//! deadline. Arming always replaces the previous deadline, so there is never
//! more than one pending callback.

use std::time::Instant;

/// Debounce timer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebounceTimer {
    /// Nothing pending
    #[default]
    Idle,
    /// A settle pass is due at `deadline`
    Settling { deadline: Instant },
}

impl DebounceTimer {
    /// Cancel any pending deadline and arm a new one
    pub fn reschedule(&mut self, deadline: Instant) {
        *self = DebounceTimer::Settling { deadline };
    }

    /// Drop the pending deadline, if any
    pub fn cancel(&mut self) {
        *self = DebounceTimer::Idle;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, DebounceTimer::Settling { .. })
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self {
            DebounceTimer::Idle => None,
            DebounceTimer::Settling { deadline } => Some(*deadline),
        }
    }

    /// Returns true exactly once when `now` reaches the deadline
    pub fn poll(&mut self, now: Instant) -> bool {
        match *self {
            DebounceTimer::Settling { deadline } if now >= deadline => {
                *self = DebounceTimer::Idle;
                true
            }
            _ => false,
        }
    }
}
