//! Gesture scripts
//!
//! A script describes a slider, the viewport it is mounted in, and a timed
//! list of input events:
//!
//! ```toml
//! [slider]
//! visible_count = 4
//! mouse_tracking = true
//!
//! [viewport]
//! width = 800.0
//! height = 240.0
//! slides = 8
//!
//! [[events]]
//! at_ms = 0
//! type = "mouse_down"
//! x = 700.0
//! y = 120.0
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use glide_core::{InputEvent, MouseButton, MouseEvent, Size, SliderConfig, TouchEvent};
use serde::{Deserialize, Serialize};

/// A replayable session
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Script {
    #[serde(default)]
    pub slider: SliderConfig,
    pub viewport: ScriptViewport,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// Viewport the slider is mounted in
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ScriptViewport {
    pub width: f32,
    pub height: f32,
    pub slides: usize,
}

impl ScriptViewport {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// One timed action
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScriptEvent {
    /// Milliseconds since the start of the replay
    pub at_ms: u64,
    #[serde(flatten)]
    pub action: Action,
}

impl ScriptEvent {
    pub fn at(&self) -> Duration {
        Duration::from_millis(self.at_ms)
    }
}

/// What happens at a point in the script
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    MouseDown { x: f32, y: f32 },
    MouseMove { x: f32, y: f32 },
    MouseUp { x: f32, y: f32 },
    TouchStart { x: f32, y: f32 },
    TouchMove { x: f32, y: f32 },
    TouchEnd,
    Wheel { dx: f32, dy: f32 },
    Next,
    Prev,
    GoTo { index: usize },
    Resize { width: f32, height: f32 },
    Slides { count: usize },
    Unmount,
}

impl Action {
    /// Input event for pointer, touch and wheel actions
    pub fn input_event(&self) -> Option<InputEvent> {
        let event = match *self {
            Action::MouseDown { x, y } => InputEvent::Mouse(MouseEvent::ButtonPressed {
                button: MouseButton::Left,
                x,
                y,
            }),
            Action::MouseMove { x, y } => InputEvent::Mouse(MouseEvent::Moved { x, y }),
            Action::MouseUp { x, y } => InputEvent::Mouse(MouseEvent::ButtonReleased {
                button: MouseButton::Left,
                x,
                y,
            }),
            Action::TouchStart { x, y } => InputEvent::Touch(TouchEvent::Started { x, y }),
            Action::TouchMove { x, y } => InputEvent::Touch(TouchEvent::Moved { x, y }),
            Action::TouchEnd => InputEvent::Touch(TouchEvent::Ended),
            Action::Wheel { dx, dy } => InputEvent::Wheel {
                delta_x: dx,
                delta_y: dy,
            },
            _ => return None,
        };
        Some(event)
    }

    /// Short name used in replay output
    pub fn label(&self) -> &'static str {
        match self {
            Action::MouseDown { .. } => "mouse_down",
            Action::MouseMove { .. } => "mouse_move",
            Action::MouseUp { .. } => "mouse_up",
            Action::TouchStart { .. } => "touch_start",
            Action::TouchMove { .. } => "touch_move",
            Action::TouchEnd => "touch_end",
            Action::Wheel { .. } => "wheel",
            Action::Next => "next",
            Action::Prev => "prev",
            Action::GoTo { .. } => "go_to",
            Action::Resize { .. } => "resize",
            Action::Slides { .. } => "slides",
            Action::Unmount => "unmount",
        }
    }
}

impl Script {
    /// Parse a script from TOML, ordering events by time
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let mut script: Script = toml::from_str(source).context("Invalid gesture script")?;
        script.events.sort_by_key(|event| event.at_ms);
        script.slider = script.slider.normalized();
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("In script {}", path.display()))
    }

    /// Time of the last scripted event
    pub fn end(&self) -> Duration {
        self.events.last().map(ScriptEvent::at).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::Axis;

    const SCRIPT: &str = r#"
        [slider]
        visible_count = 4
        mouse_tracking = true

        [viewport]
        width = 800.0
        height = 240.0
        slides = 8

        [[events]]
        at_ms = 100
        type = "mouse_up"
        x = 500.0
        y = 0.0

        [[events]]
        at_ms = 0
        type = "mouse_down"
        x = 700.0
        y = 0.0

        [[events]]
        at_ms = 300
        type = "next"

        [[events]]
        at_ms = 400
        type = "go_to"
        index = 2
    "#;

    #[test]
    fn test_parse_and_sort() {
        let script = Script::from_toml_str(SCRIPT).unwrap();
        assert_eq!(script.slider.axis, Axis::Horizontal);
        assert_eq!(script.slider.visible_count, 4);
        assert_eq!(script.viewport.slides, 8);

        let labels: Vec<_> = script.events.iter().map(|e| e.action.label()).collect();
        assert_eq!(labels, vec!["mouse_down", "mouse_up", "next", "go_to"]);
        assert_eq!(script.events[3].action, Action::GoTo { index: 2 });
        assert_eq!(script.end(), Duration::from_millis(400));
    }

    #[test]
    fn test_input_mapping() {
        let down = Action::MouseDown { x: 1.0, y: 2.0 };
        assert_eq!(
            down.input_event(),
            Some(InputEvent::Mouse(MouseEvent::ButtonPressed {
                button: MouseButton::Left,
                x: 1.0,
                y: 2.0
            }))
        );
        assert_eq!(Action::Next.input_event(), None);
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let err = Script::from_toml_str(
            r#"
            [viewport]
            width = 100.0
            height = 100.0
            slides = 1

            [[events]]
            at_ms = 0
            type = "teleport"
            "#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("Invalid gesture script"));
    }
}
