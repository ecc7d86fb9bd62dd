//! Computed wrapper style
//!
//! The wrapper style is derived from the slider state on every recompute and
//! never edited elsewhere. CSS-backed adapters use the string forms; native
//! renderers read the fields directly.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::geometry::Offset;
use crate::units::Length;

/// Settle transition used whenever the slider is not tracking
pub const SETTLE_DURATION: Duration = Duration::from_millis(250);

/// Transition applied to the wrapper transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: SETTLE_DURATION,
            easing: Easing::EaseInOut,
        }
    }
}

impl Transition {
    /// CSS `transition` value, e.g. `.25s transform ease-in-out`
    pub fn to_css(&self) -> String {
        let seconds = self.duration.as_secs_f32().to_string();
        let seconds = match seconds.strip_prefix("0.") {
            Some(fraction) => format!(".{}", fraction),
            None => seconds,
        };
        format!("{}s transform {}", seconds, self.easing)
    }
}

/// Style of the translated wrapper element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrapperStyle {
    /// Spacing between slides
    pub gap: Length,
    /// Current translation in pixels
    pub translate: Offset,
    /// Present only when the slider is not tracking
    pub transition: Option<Transition>,
}

impl WrapperStyle {
    pub fn new(gap: Length) -> Self {
        Self {
            gap,
            translate: Offset::ZERO,
            transition: None,
        }
    }

    /// CSS `transform` value
    pub fn transform_css(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0)",
            self.translate.x, self.translate.y
        )
    }

    /// CSS `transition` value, if any
    pub fn transition_css(&self) -> Option<String> {
        self.transition.as_ref().map(Transition::to_css)
    }
}

/// Props of the clipping viewport element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportStyle {
    /// Hide slides outside the viewport
    pub clip_overflow: bool,
    /// Swallow native scroll events so only the slider moves
    pub prevent_native_scroll: bool,
}

impl Default for ViewportStyle {
    fn default() -> Self {
        Self {
            clip_overflow: true,
            prevent_native_scroll: true,
        }
    }
}

impl ViewportStyle {
    /// CSS declarations for the viewport element
    pub fn css_declarations(&self) -> Vec<(&'static str, &'static str)> {
        let mut declarations = Vec::new();
        if self.clip_overflow {
            declarations.push(("overflow", "hidden"));
        }
        if self.prevent_native_scroll {
            declarations.push(("overscroll-behavior", "contain"));
        }
        declarations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_strings() {
        let mut style = WrapperStyle::new(Length::Px(10.0));
        style.translate = Offset::new(-200.0, 0.0);
        assert_eq!(style.transform_css(), "translate3d(-200px, 0px, 0)");
        assert_eq!(style.transition_css(), None);

        style.transition = Some(Transition::default());
        assert_eq!(
            style.transition_css().as_deref(),
            Some(".25s transform ease-in-out")
        );
    }

    #[test]
    fn test_viewport_declarations() {
        let style = ViewportStyle::default();
        assert_eq!(
            style.css_declarations(),
            vec![("overflow", "hidden"), ("overscroll-behavior", "contain")]
        );
    }
}
