//! Glide Slider Core
//!
//! Renderer-agnostic carousel widget logic:
//!
//! - **Positioning**: slide grid, travel bounds, elastic overshoot and snapping
//! - **Gestures**: pointer and touch drags converted to incremental deltas
//! - **Wheel debouncing**: wheel bursts treated as drags, with deceleration and
//!   idle detection to decide when they end
//! - **State machine**: Idle, Tracking, Wheeling, Settling
//! - **Render contract**: wrapper transform/transition and per-slot sizes as data
//! - **Navigation**: next/prev/go-to with change observers, through a shared handle
//!
//! # Example
//!
//! ```rust
//! use std::time::Instant;
//! use glide_core::{InputEvent, Size, Slider, SliderConfig, TouchEvent};
//!
//! let mut slider = Slider::new(SliderConfig::horizontal().visible_count(4));
//! slider.mount(Size::new(800.0, 300.0), 8);
//!
//! let now = Instant::now();
//! slider.handle_input(InputEvent::Touch(TouchEvent::Started { x: 600.0, y: 10.0 }), now);
//! slider.handle_input(InputEvent::Touch(TouchEvent::Moved { x: 420.0, y: 12.0 }), now);
//! slider.handle_input(InputEvent::Touch(TouchEvent::Ended), now);
//!
//! // 180px of travel rounds to one 200px slide
//! assert_eq!(slider.offset().x, -200.0);
//! assert_eq!(slider.current_slide(), 1);
//! ```

pub mod animation;
pub mod config;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod handle;
pub mod input;
pub mod layout;
pub mod slider;
pub mod state;
pub mod style;
pub mod timer;
pub mod units;
pub mod wheel;


pub use animation::SettleAnimation;
pub use config::{Axis, SliderConfig, WheelConfig};
pub use easing::Easing;
pub use error::{Result, SliderError};
pub use geometry::{Geometry, Offset, Size, EDGE_RESISTANCE};
pub use gesture::GestureTracker;
pub use handle::{create_slider, SharedSlider, SliderRef};
pub use input::{InputEvent, MouseButton, MouseEvent, PointerKind, TouchEvent};
pub use layout::SlotLayout;
pub use slider::{MoveMode, NavigationCallback, Slider, SliderFrame};
pub use state::{slider_events, SliderState, StateTransitions};
pub use style::{Transition, ViewportStyle, WrapperStyle, SETTLE_DURATION};
pub use timer::DebounceTimer;
pub use units::Length;
pub use wheel::{WheelDebouncer, WheelOutcome, WheelSample};
