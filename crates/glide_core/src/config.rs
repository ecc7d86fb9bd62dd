//! Slider configuration
//!
//! Every field has a default, so a config file only needs to name the values
//! it changes:
//!
//! ```toml
//! axis = "horizontal"
//! visible_count = 4
//! gap = "12px"
//! mouse_tracking = true
//!
//! [wheel]
//! multiplier = 2.0
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::units::Length;

/// Axis the slider moves along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Slides laid out left to right (default)
    #[default]
    Horizontal,
    /// Slides laid out top to bottom
    Vertical,
}

/// Wheel gesture tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Treat wheel/trackpad scrolling as a drag (default: true)
    pub enabled: bool,
    /// Scale applied to raw wheel deltas
    pub multiplier: f32,
    /// How long the averaged delta must keep falling before the burst counts as ended
    pub timeout_ms: u64,
    /// Window after a detected end during which residual momentum events are dropped
    pub ignore_timeout_ms: u64,
    /// Number of recent samples averaged to detect deceleration
    pub average_window: usize,
    /// Quiet period after the last wheel event that triggers a settle
    pub idle_timeout_ms: u64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            multiplier: 1.5,
            timeout_ms: 200,
            ignore_timeout_ms: 500,
            average_window: 15,
            idle_timeout_ms: 50,
        }
    }
}

impl WheelConfig {
    /// Wheel tracking switched off
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn ignore_timeout(&self) -> Duration {
        Duration::from_millis(self.ignore_timeout_ms)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }

    fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if !self.multiplier.is_finite() || self.multiplier < 0.0 {
            self.multiplier = defaults.multiplier;
        }
        if self.average_window == 0 {
            self.average_window = defaults.average_window;
        }
        self
    }
}

/// Configuration for a slider instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Axis the wrapper is translated along
    pub axis: Axis,
    /// Number of slides visible in the viewport at once
    pub visible_count: usize,
    /// Spacing between slides
    pub gap: Length,
    /// Allow mouse drags in addition to touch
    pub mouse_tracking: bool,
    /// How far (in pixels) a drag may overshoot either end
    pub max_translation_on_end: f32,
    /// Wheel gesture tuning
    pub wheel: WheelConfig,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            visible_count: 1,
            gap: Length::default(),
            mouse_tracking: false,
            max_translation_on_end: 50.0,
            wheel: WheelConfig::default(),
        }
    }
}

impl SliderConfig {
    /// Horizontal slider with default settings
    pub fn horizontal() -> Self {
        Self::default()
    }

    /// Vertical slider with default settings
    pub fn vertical() -> Self {
        Self {
            axis: Axis::Vertical,
            ..Default::default()
        }
    }

    pub fn visible_count(mut self, count: usize) -> Self {
        self.visible_count = count;
        self
    }

    pub fn gap(mut self, gap: Length) -> Self {
        self.gap = gap;
        self
    }

    pub fn mouse_tracking(mut self, enabled: bool) -> Self {
        self.mouse_tracking = enabled;
        self
    }

    pub fn max_translation_on_end(mut self, px: f32) -> Self {
        self.max_translation_on_end = px;
        self
    }

    pub fn wheel(mut self, wheel: WheelConfig) -> Self {
        self.wheel = wheel;
        self
    }

    /// Parse a config from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SliderConfig = toml::from_str(source)?;
        Ok(config.normalized())
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Replace out-of-range values with their defaults
    ///
    /// A slider never refuses a config: zero visible slots means one, and
    /// a negative or non-finite overshoot falls back to the default allowance.
    pub fn normalized(mut self) -> Self {
        if self.visible_count == 0 {
            tracing::debug!("visible_count = 0, using 1");
            self.visible_count = 1;
        }
        if !self.max_translation_on_end.is_finite() || self.max_translation_on_end < 0.0 {
            self.max_translation_on_end = Self::default().max_translation_on_end;
        }
        self.wheel = self.wheel.normalized();
        self
    }
}
