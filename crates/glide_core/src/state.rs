//! Slider interaction state machine
//!
//! ```text
//! Idle/Wheeling/Settling --GESTURE_START--> Tracking
//! any                    --GESTURE_END----> Settling
//! Idle/Settling          --WHEEL----------> Wheeling
//! Wheeling               --WHEEL_SETTLED--> Settling
//! Idle/Wheeling/Settling --NAVIGATE-------> Settling
//! Settling               --SETTLED--------> Idle
//! ```

use serde::{Deserialize, Serialize};

/// Slider interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderState {
    /// At rest on a grid position
    #[default]
    Idle,
    /// Pointer or touch drag in progress
    Tracking,
    /// Wheel burst in progress
    Wheeling,
    /// Animating toward a grid position
    Settling,
}

/// Events driving [`SliderState`] transitions
pub mod slider_events {
    /// Pointer pressed or touch started
    pub const GESTURE_START: u32 = 20000;
    /// Pointer released or touch ended
    pub const GESTURE_END: u32 = 20001;
    /// Wheel delta received
    pub const WHEEL: u32 = 20002;
    /// Wheel burst ended (deceleration or idle timeout)
    pub const WHEEL_SETTLED: u32 = 20003;
    /// Imperative navigation or re-layout
    pub const NAVIGATE: u32 = 20004;
    /// Settle animation finished
    pub const SETTLED: u32 = 20005;
}

/// State types that react to events
pub trait StateTransitions: Sized {
    /// Next state for `event`, or `None` if the event does not apply
    fn on_event(&self, event: u32) -> Option<Self>;
}

impl SliderState {
    /// Returns true while a drag or wheel burst moves the wrapper 1:1
    pub fn is_live(&self) -> bool {
        matches!(self, SliderState::Tracking | SliderState::Wheeling)
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self, SliderState::Tracking)
    }

    pub fn is_settling(&self) -> bool {
        matches!(self, SliderState::Settling)
    }
}

impl StateTransitions for SliderState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use slider_events::*;

        match (self, event) {
            // Any drag takes over, even mid-wheel or mid-settle
            (SliderState::Tracking, GESTURE_START) => None,
            (_, GESTURE_START) => Some(SliderState::Tracking),

            // Release always settles, stray releases included
            (_, GESTURE_END) => Some(SliderState::Settling),

            // Wheel is ignored while a drag owns the slider
            (SliderState::Idle | SliderState::Settling, WHEEL) => Some(SliderState::Wheeling),
            (SliderState::Wheeling, WHEEL_SETTLED) => Some(SliderState::Settling),

            // Navigation cuts a wheel burst short but never a drag
            (SliderState::Tracking, NAVIGATE) => None,
            (_, NAVIGATE) => Some(SliderState::Settling),

            (SliderState::Settling, SETTLED) => Some(SliderState::Idle),

            _ => None,
        }
    }
}
