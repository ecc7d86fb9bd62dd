//! Slider positioning engine
//!
//! Pure geometry: slide unit, travel bounds, elastic overshoot while a
//! gesture is live, and grid snapping once it settles. All values are pixels
//! along the active axis. Offsets are zero or negative; `0` shows the first
//! slide and [`Geometry::max_translation`] shows the last slide flush with the
//! trailing edge of the viewport.

use serde::{Deserialize, Serialize};

use crate::config::Axis;

/// Movement dampening past either end (a drag moves a third as far)
pub const EDGE_RESISTANCE: f32 = 1.5;

/// Wrapper translation in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset with `value` on `axis` and zero on the locked axis
    pub fn along(axis: Axis, value: f32) -> Self {
        match axis {
            Axis::Horizontal => Self { x: value, y: 0.0 },
            Axis::Vertical => Self { x: 0.0, y: value },
        }
    }

    /// Component on `axis`
    pub fn on(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// Viewport measurement
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent on `axis`
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Slide grid along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Viewport extent along the active axis
    pub viewport_extent: f32,
    /// Number of slides in the wrapper
    pub slide_count: usize,
    /// Number of slides visible at once
    pub visible_count: usize,
}

impl Geometry {
    pub fn new(viewport_extent: f32, slide_count: usize, visible_count: usize) -> Self {
        Self {
            viewport_extent,
            slide_count,
            visible_count,
        }
    }

    fn visible(&self) -> usize {
        self.visible_count.max(1)
    }

    /// Size of one grid cell (0 until the viewport is measured)
    pub fn slide_unit(&self) -> f32 {
        let unit = self.viewport_extent / self.visible() as f32;
        if unit.is_finite() && unit > 0.0 {
            unit
        } else {
            0.0
        }
    }

    /// Whether every slide fits in the viewport, leaving nothing to travel
    pub fn fits_entirely(&self) -> bool {
        self.slide_count < self.visible()
    }

    /// Offset at which the last slide is flush with the trailing edge
    pub fn max_translation(&self) -> f32 {
        // Same product as the last snapped grid position, so the bound compares exactly
        let unit = self.slide_unit();
        let steps = self.step_count();
        if steps == 0 || unit == 0.0 {
            return 0.0;
        }
        -(steps as f32) * unit
    }

    /// Number of single-slide steps between the first and last position
    pub fn step_count(&self) -> usize {
        self.slide_count.saturating_sub(self.visible())
    }

    /// Offset after moving by `delta` during a live gesture
    ///
    /// Past either end the move is dampened by [`EDGE_RESISTANCE`] and capped
    /// at `overshoot` pixels beyond the boundary.
    pub fn live_offset(&self, previous: f32, delta: f32, overshoot: f32) -> f32 {
        let max = self.max_translation();
        let candidate = previous - delta;

        if candidate > 0.0 {
            (candidate + delta / EDGE_RESISTANCE).min(overshoot)
        } else if candidate < max {
            (candidate + delta / EDGE_RESISTANCE).max(max - overshoot)
        } else {
            candidate
        }
    }

    /// Round to the nearest slide and clamp to `[max_translation, 0]`
    ///
    /// Remainders below half a unit round toward the first slide, the rest
    /// toward the last.
    pub fn snap(&self, offset: f32) -> f32 {
        let unit = self.slide_unit();
        if unit == 0.0 || self.fits_entirely() || !offset.is_finite() {
            return 0.0;
        }

        let snapped = (offset / unit).round() * unit;
        let clamped = snapped.clamp(self.max_translation(), 0.0);

        // Normalize -0.0
        if clamped == 0.0 {
            0.0
        } else {
            clamped
        }
    }

    /// Index of the slide in the leading slot for a settled offset
    pub fn slide_index(&self, offset: f32) -> usize {
        let unit = self.slide_unit();
        if unit == 0.0 {
            return 0;
        }
        let index = (-offset / unit).round();
        if index > 0.0 {
            (index as usize).min(self.step_count())
        } else {
            0
        }
    }

    /// Settled offset that puts slide `index` in the leading slot
    pub fn offset_for_index(&self, index: usize) -> f32 {
        self.snap(-(index.min(self.step_count()) as f32) * self.slide_unit())
    }
}
