//! Input events consumed by the slider
//!
//! Adapters translate their toolkit's pointer, touch and wheel events into
//! these types and hand them to [`Slider::handle_input`](crate::Slider::handle_input).
//! Positions are in viewport coordinates; only differences between them matter.

use serde::{Deserialize, Serialize};

/// Kind of pointer driving a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    /// Mouse drag, only tracked when `mouse_tracking` is enabled
    Mouse,
    /// Touch swipe, always tracked
    Touch,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary button, the only one that starts a drag
    #[default]
    Left,
    Right,
    Middle,
}

/// Mouse events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEvent {
    ButtonPressed { button: MouseButton, x: f32, y: f32 },
    Moved { x: f32, y: f32 },
    ButtonReleased { button: MouseButton, x: f32, y: f32 },
}

/// Touch events (first touch point only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Started { x: f32, y: f32 },
    Moved { x: f32, y: f32 },
    Ended,
    /// The platform took the touch away (treated like `Ended`)
    Cancelled,
}

/// Input events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Mouse(MouseEvent),
    Touch(TouchEvent),
    /// Wheel or trackpad scroll
    Wheel { delta_x: f32, delta_y: f32 },
}
