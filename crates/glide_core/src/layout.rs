//! Per-slot layout contract
//!
//! Instead of restyling child nodes, the slider publishes the size every
//! slot should take; adapters apply it through their own style mechanism.

use serde::{Deserialize, Serialize};

use crate::config::Axis;
use crate::units::Length;

/// Size each child slot takes along the active axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotLayout {
    pub axis: Axis,
    /// Share of the viewport per slot, in percent
    pub basis_percent: f32,
    /// Gap subtracted from the basis
    pub gap: Length,
    /// Resolved slot extent in pixels, once the viewport is measured
    pub extent_px: Option<f32>,
}

impl SlotLayout {
    pub fn new(axis: Axis, visible_count: usize, gap: Length, viewport_extent: f32) -> Self {
        let visible = visible_count.max(1) as f32;
        let extent_px = (viewport_extent > 0.0).then(|| {
            (viewport_extent / visible - gap.to_px(viewport_extent)).max(0.0)
        });

        Self {
            axis,
            basis_percent: 100.0 / visible,
            gap,
            extent_px,
        }
    }

    /// CSS property the slot size goes into
    pub fn css_property(&self) -> &'static str {
        match self.axis {
            Axis::Horizontal => "min-width",
            Axis::Vertical => "min-height",
        }
    }

    /// CSS value for the slot size, e.g. `calc(25% - 10px)`
    pub fn css_value(&self) -> String {
        format!("calc({}% - {})", self.basis_percent, self.gap)
    }
}
