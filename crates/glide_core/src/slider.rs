//! Slider controller
//!
//! Owns all runtime state of one carousel: interaction FSM, wrapper offset,
//! gesture and wheel tracking, settle animation and navigation observers.
//! The host adapter measures the viewport, forwards input, calls [`Slider::tick`]
//! every frame, and re-renders from [`Slider::frame`] when
//! [`Slider::take_needs_render`] reports a change.
//!
//! # Example
//!
//! ```rust
//! use glide_core::{Size, Slider, SliderConfig};
//!
//! let mut slider = Slider::new(SliderConfig::horizontal().visible_count(4));
//! slider.mount(Size::new(800.0, 300.0), 8);
//!
//! slider.next_slide();
//! assert_eq!(slider.offset().x, -200.0);
//! assert!(slider.has_prev_slide());
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::animation::SettleAnimation;
use crate::config::{Axis, SliderConfig};
use crate::geometry::{Geometry, Offset, Size};
use crate::gesture::GestureTracker;
use crate::input::{InputEvent, MouseButton, MouseEvent, PointerKind, TouchEvent};
use crate::layout::SlotLayout;
use crate::state::{slider_events, SliderState, StateTransitions};
use crate::style::{Transition, ViewportStyle, WrapperStyle};
use crate::wheel::{WheelDebouncer, WheelOutcome};

/// Observer for `has_prev_slide` / `has_next_slide` changes
pub type NavigationCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// How a movement is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMode {
    /// Follow the input 1:1 with elastic edges, no snapping
    Live,
    /// Snap to the grid and clamp to bounds
    Settle,
}

/// A queued observer call
pub(crate) struct Notification {
    callback: NavigationCallback,
    value: bool,
}

impl Notification {
    pub(crate) fn fire(self) {
        (self.callback)(self.value)
    }
}

#[derive(Default)]
struct NavigationObservers {
    on_prev: Option<NavigationCallback>,
    on_next: Option<NavigationCallback>,
    last_prev: Option<bool>,
    last_next: Option<bool>,
}

/// Snapshot of everything an adapter needs to render the slider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderFrame {
    pub state: SliderState,
    /// Target offset of the wrapper
    pub offset: Offset,
    /// Offset to draw this frame (differs from `offset` while settling)
    pub displayed_offset: Offset,
    pub viewport: ViewportStyle,
    pub wrapper: WrapperStyle,
    pub slot: SlotLayout,
    pub current_slide: usize,
    pub slide_count: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Carousel controller
pub struct Slider {
    config: SliderConfig,
    viewport: Size,
    slide_count: usize,
    state: SliderState,
    offset: Offset,
    displayed: Offset,
    animation: Option<SettleAnimation>,
    style: WrapperStyle,
    gesture: GestureTracker,
    wheel: WheelDebouncer,
    observers: NavigationObservers,
    pending: SmallVec<[Notification; 2]>,
    defer_notifications: bool,
    mounted: bool,
    needs_render: bool,
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("state", &self.state)
            .field("offset", &self.offset)
            .field("viewport", &self.viewport)
            .field("slide_count", &self.slide_count)
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl Slider {
    /// Create an unmounted slider
    pub fn new(config: SliderConfig) -> Self {
        let config = config.normalized();
        Self {
            style: WrapperStyle::new(config.gap),
            config,
            viewport: Size::default(),
            slide_count: 0,
            state: SliderState::Idle,
            offset: Offset::ZERO,
            displayed: Offset::ZERO,
            animation: None,
            gesture: GestureTracker::new(),
            wheel: WheelDebouncer::new(),
            observers: NavigationObservers::default(),
            pending: SmallVec::new(),
            defer_notifications: false,
            mounted: false,
            needs_render: true,
        }
    }

    /// Register an observer for `has_prev_slide` changes
    pub fn on_prev_changed<F>(mut self, callback: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.set_on_prev_changed(callback);
        self
    }

    /// Register an observer for `has_next_slide` changes
    pub fn on_next_changed<F>(mut self, callback: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.set_on_next_changed(callback);
        self
    }

    pub fn set_on_prev_changed<F>(&mut self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.observers.on_prev = Some(Arc::new(callback));
        self.observers.last_prev = None;
    }

    pub fn set_on_next_changed<F>(&mut self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.observers.on_next = Some(Arc::new(callback));
        self.observers.last_next = None;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn state(&self) -> SliderState {
        self.state
    }

    /// True while a pointer or touch drag is in progress
    pub fn is_tracking(&self) -> bool {
        self.state.is_tracking()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Target offset of the wrapper
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Offset to draw, following the settle animation
    pub fn displayed_offset(&self) -> Offset {
        self.displayed
    }

    pub fn wrapper_style(&self) -> &WrapperStyle {
        &self.style
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Slide grid along the active axis
    pub fn geometry(&self) -> Geometry {
        Geometry::new(
            self.viewport.extent(self.config.axis),
            self.slide_count,
            self.config.visible_count,
        )
    }

    pub fn slot_layout(&self) -> SlotLayout {
        SlotLayout::new(
            self.config.axis,
            self.config.visible_count,
            self.config.gap,
            self.viewport.extent(self.config.axis),
        )
    }

    /// Deadline of the pending wheel settle, for hosts that schedule wakeups
    pub fn next_deadline(&self) -> Option<Instant> {
        self.wheel.pending_deadline()
    }

    /// Returns true once after any change that needs a re-render
    pub fn take_needs_render(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }

    pub fn frame(&self) -> SliderFrame {
        SliderFrame {
            state: self.state,
            offset: self.offset,
            displayed_offset: self.displayed,
            viewport: ViewportStyle::default(),
            wrapper: self.style.clone(),
            slot: self.slot_layout(),
            current_slide: self.current_slide(),
            slide_count: self.slide_count,
            has_prev: self.has_prev_slide(),
            has_next: self.has_next_slide(),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Attach to a measured viewport holding `slide_count` slides
    pub fn mount(&mut self, viewport: Size, slide_count: usize) {
        tracing::debug!(
            "Slider mount: viewport={:.0}x{:.0}, slides={}, visible={}",
            viewport.width,
            viewport.height,
            slide_count,
            self.config.visible_count
        );

        self.mounted = true;
        self.viewport = viewport;
        self.slide_count = slide_count;
        self.state = SliderState::Idle;
        self.offset = Offset::ZERO;
        self.displayed = Offset::ZERO;
        self.animation = None;
        self.gesture.end();
        self.wheel.cancel();

        self.apply_move(MoveMode::Settle, Offset::ZERO);
        self.flush_notifications();
    }

    /// Detach; cancels the pending wheel timer and ignores further input
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        tracing::debug!("Slider unmount");
        self.wheel.cancel();
        self.gesture.end();
        self.animation = None;
        self.state = SliderState::Idle;
        self.mounted = false;
        self.pending.clear();
    }

    /// Viewport was resized; keeps the leading slide in place
    pub fn set_viewport(&mut self, viewport: Size) {
        if !self.mounted || viewport == self.viewport {
            return;
        }
        let index = self.current_slide();
        self.viewport = viewport;

        let target = self.geometry().offset_for_index(index);
        tracing::debug!(
            "Slider resized to {:.0}x{:.0}, slide {} at {:.1}",
            viewport.width,
            viewport.height,
            index,
            target
        );

        self.offset = Offset::along(self.config.axis, target);
        self.displayed = self.offset;
        self.animation = None;
        self.refresh_style();
        self.needs_render = true;
        self.queue_notifications();
        self.flush_notifications();
    }

    /// Number of children changed
    pub fn set_slide_count(&mut self, slide_count: usize) {
        if !self.mounted || slide_count == self.slide_count {
            return;
        }
        self.slide_count = slide_count;
        if self.state.is_live() {
            // Re-clamped when the gesture settles
            self.needs_render = true;
            return;
        }
        self.transition(slider_events::NAVIGATE);
        self.apply_move(MoveMode::Settle, Offset::ZERO);
        self.flush_notifications();
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Dispatch a raw input event
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) {
        match event {
            InputEvent::Mouse(MouseEvent::ButtonPressed {
                button: MouseButton::Left,
                x,
                y,
            }) => self.handle_gesture_start(PointerKind::Mouse, x, y),
            InputEvent::Mouse(MouseEvent::Moved { x, y }) => {
                self.handle_gesture_move(PointerKind::Mouse, x, y)
            }
            InputEvent::Mouse(MouseEvent::ButtonReleased {
                button: MouseButton::Left,
                ..
            }) => self.handle_gesture_end(PointerKind::Mouse),
            InputEvent::Mouse(_) => {}
            InputEvent::Touch(TouchEvent::Started { x, y }) => {
                self.handle_gesture_start(PointerKind::Touch, x, y)
            }
            InputEvent::Touch(TouchEvent::Moved { x, y }) => {
                self.handle_gesture_move(PointerKind::Touch, x, y)
            }
            InputEvent::Touch(TouchEvent::Ended | TouchEvent::Cancelled) => {
                self.handle_gesture_end(PointerKind::Touch)
            }
            InputEvent::Wheel { delta_x, delta_y } => self.handle_wheel(delta_x, delta_y, now),
        }
    }

    fn accepts(&self, kind: PointerKind) -> bool {
        self.mounted && (kind == PointerKind::Touch || self.config.mouse_tracking)
    }

    /// Pointer pressed or touch started at `(x, y)`
    pub fn handle_gesture_start(&mut self, kind: PointerKind, x: f32, y: f32) {
        if !self.accepts(kind) {
            return;
        }

        // Grab the wrapper where it is drawn if a settle is mid-flight
        if self.animation.is_some_and(|a| a.is_running()) {
            self.offset = self.displayed;
        }
        self.animation = None;
        self.displayed = self.offset;
        self.wheel.cancel();

        self.gesture.start(x, y);
        self.transition(slider_events::GESTURE_START);
        self.refresh_style();
        self.needs_render = true;
    }

    /// Pointer or touch moved to `(x, y)`
    pub fn handle_gesture_move(&mut self, kind: PointerKind, x: f32, y: f32) {
        if !self.accepts(kind) {
            return;
        }
        if let Some(delta) = self.gesture.move_to(x, y) {
            self.apply_move(MoveMode::Live, delta);
            self.flush_notifications();
        }
    }

    /// Pointer released or touch ended
    pub fn handle_gesture_end(&mut self, kind: PointerKind) {
        if !self.accepts(kind) {
            return;
        }
        self.gesture.end();
        self.transition(slider_events::GESTURE_END);
        self.apply_move(MoveMode::Settle, Offset::ZERO);
        self.flush_notifications();
    }

    /// Wheel or trackpad scroll
    pub fn handle_wheel(&mut self, delta_x: f32, delta_y: f32, now: Instant) {
        if !self.mounted || !self.config.wheel.enabled || self.state.is_tracking() {
            return;
        }

        match self
            .wheel
            .on_wheel(&self.config.wheel, self.config.axis, delta_x, delta_y, now)
        {
            WheelOutcome::Ignored => {
                tracing::trace!("Wheel event inside ignore window, dropped");
            }
            WheelOutcome::Live { delta_x, delta_y } => {
                self.transition(slider_events::WHEEL);
                self.apply_move(MoveMode::Live, Offset::new(delta_x, delta_y));
            }
            WheelOutcome::LiveThenSettle { delta_x, delta_y } => {
                self.transition(slider_events::WHEEL);
                self.apply_move(MoveMode::Live, Offset::new(delta_x, delta_y));
                self.transition(slider_events::WHEEL_SETTLED);
                self.apply_move(MoveMode::Settle, Offset::ZERO);
            }
        }
        self.flush_notifications();
    }

    /// Advance timers and the settle animation
    ///
    /// Returns true while the slider still needs ticks (animation running or a
    /// wheel settle pending).
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }

        if self.wheel.poll(now) {
            self.transition(slider_events::WHEEL_SETTLED);
            self.apply_move(MoveMode::Settle, Offset::ZERO);
        }

        if let Some(animation) = self.animation.as_mut() {
            let (value, finished) = animation.sample(now);
            self.displayed = value;
            self.needs_render = true;
            if finished {
                self.animation = None;
                self.transition(slider_events::SETTLED);
            }
        } else if self.state.is_settling() {
            self.transition(slider_events::SETTLED);
        }

        self.flush_notifications();
        self.animation.is_some() || self.wheel.pending_deadline().is_some()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move one slide forward (horizontal sliders only)
    pub fn next_slide(&mut self) {
        if !self.can_navigate() || self.config.axis != Axis::Horizontal {
            return;
        }
        let geometry = self.geometry();
        if self.offset.x > geometry.max_translation() {
            self.navigate(Offset::new(geometry.slide_unit(), 0.0));
        }
    }

    /// Move one slide back (horizontal sliders only)
    pub fn prev_slide(&mut self) {
        if !self.can_navigate() || self.config.axis != Axis::Horizontal {
            return;
        }
        if self.offset.x < 0.0 {
            let unit = self.geometry().slide_unit();
            self.navigate(Offset::new(-unit, 0.0));
        }
    }

    /// Bring slide `index` into the leading slot (clamped to the last position)
    pub fn go_to_slide(&mut self, index: usize) {
        if !self.can_navigate() {
            return;
        }
        let axis = self.config.axis;
        let target = self.geometry().offset_for_index(index);
        let current = self.offset.on(axis);
        if target != current {
            self.navigate(Offset::along(axis, current - target));
        }
    }

    /// Whether a later slide can be brought into view
    pub fn has_next_slide(&self) -> bool {
        self.offset.on(self.config.axis) > self.geometry().max_translation()
    }

    /// Whether an earlier slide can be brought into view
    pub fn has_prev_slide(&self) -> bool {
        self.offset.on(self.config.axis) < 0.0
    }

    /// Index of the slide in the leading slot
    pub fn current_slide(&self) -> usize {
        self.geometry().slide_index(self.offset.on(self.config.axis))
    }

    fn can_navigate(&self) -> bool {
        self.mounted && !self.state.is_tracking()
    }

    fn navigate(&mut self, delta: Offset) {
        if self.state == SliderState::Wheeling {
            self.wheel.cancel();
        }
        self.transition(slider_events::NAVIGATE);
        self.apply_move(MoveMode::Settle, delta);
        self.flush_notifications();
    }

    // =========================================================================
    // Positioning
    // =========================================================================

    /// Apply `delta` (pointer travel, positive toward later slides) in `mode`
    fn apply_move(&mut self, mode: MoveMode, delta: Offset) {
        let axis = self.config.axis;
        let geometry = self.geometry();
        let current = self.offset.on(axis);
        let delta = delta.on(axis);

        let value = match mode {
            MoveMode::Live => {
                geometry.live_offset(current, delta, self.config.max_translation_on_end)
            }
            MoveMode::Settle => geometry.snap(current - delta),
        };

        tracing::trace!(
            "Slider {:?} delta={:.1} offset: {:.1} -> {:.1}, bounds=({:.0}, 0), unit={:.1}",
            mode,
            delta,
            current,
            value,
            geometry.max_translation(),
            geometry.slide_unit()
        );

        // Locked axis stays at zero
        self.offset = Offset::along(axis, value);

        match mode {
            MoveMode::Live => {
                self.animation = None;
                self.displayed = self.offset;
            }
            MoveMode::Settle if self.displayed != self.offset => {
                self.animation = Some(SettleAnimation::new(
                    self.displayed,
                    self.offset,
                    Transition::default(),
                ));
            }
            MoveMode::Settle => {
                self.animation = None;
            }
        }

        self.refresh_style();
        self.needs_render = true;
        self.queue_notifications();
    }

    fn refresh_style(&mut self) {
        self.style.translate = self.offset;
        self.style.transition = if self.state.is_live() {
            None
        } else {
            Some(Transition::default())
        };
    }

    fn transition(&mut self, event: u32) {
        if let Some(new_state) = self.state.on_event(event) {
            tracing::debug!("Slider state {:?} -> {:?}", self.state, new_state);
            self.state = new_state;
            self.needs_render = true;
        }
    }

    // =========================================================================
    // Observers
    // =========================================================================

    fn queue_notifications(&mut self) {
        let has_prev = self.has_prev_slide();
        let has_next = self.has_next_slide();

        if self.observers.last_prev != Some(has_prev) {
            self.observers.last_prev = Some(has_prev);
            if let Some(callback) = &self.observers.on_prev {
                self.pending.push(Notification {
                    callback: Arc::clone(callback),
                    value: has_prev,
                });
            }
        }

        if self.observers.last_next != Some(has_next) {
            self.observers.last_next = Some(has_next);
            if let Some(callback) = &self.observers.on_next {
                self.pending.push(Notification {
                    callback: Arc::clone(callback),
                    value: has_next,
                });
            }
        }
    }

    fn flush_notifications(&mut self) {
        if self.defer_notifications {
            return;
        }
        for notification in std::mem::take(&mut self.pending) {
            notification.fire();
        }
    }

    /// Hold observer calls until [`Slider::take_notifications`] (used by `SliderRef`)
    pub(crate) fn set_defer_notifications(&mut self, defer: bool) {
        self.defer_notifications = defer;
    }

    pub(crate) fn take_notifications(&mut self) -> SmallVec<[Notification; 2]> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    fn mounted(config: SliderConfig) -> Slider {
        let mut slider = Slider::new(config);
        slider.mount(Size::new(800.0, 400.0), 8);
        slider
    }

    fn four_up() -> Slider {
        mounted(SliderConfig::horizontal().visible_count(4).mouse_tracking(true))
    }

    fn drag(slider: &mut Slider, from: (f32, f32), to: (f32, f32)) {
        slider.handle_gesture_start(PointerKind::Touch, from.0, from.1);
        slider.handle_gesture_move(PointerKind::Touch, to.0, to.1);
    }

    #[test]
    fn test_mount_starts_at_zero() {
        let slider = four_up();
        assert_eq!(slider.offset(), Offset::ZERO);
        assert_eq!(slider.state(), SliderState::Idle);
        assert!(!slider.has_prev_slide());
        assert!(slider.has_next_slide());
        assert_eq!(slider.wrapper_style().transform_css(), "translate3d(0px, 0px, 0)");
    }

    #[test]
    fn test_drag_follows_pointer_without_transition() {
        let mut slider = four_up();
        drag(&mut slider, (500.0, 100.0), (430.0, 100.0));

        assert!(slider.is_tracking());
        assert_eq!(slider.offset(), Offset::new(-70.0, 0.0));
        assert_eq!(slider.wrapper_style().transition, None);
    }

    #[test]
    fn test_release_snaps_to_grid_with_transition() {
        let mut slider = four_up();
        drag(&mut slider, (500.0, 100.0), (380.0, 100.0));
        slider.handle_gesture_end(PointerKind::Touch);

        assert!(!slider.is_tracking());
        assert_eq!(slider.offset(), Offset::new(-200.0, 0.0));
        assert_eq!(slider.state(), SliderState::Settling);
        assert!(slider.wrapper_style().transition.is_some());
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let mut slider = four_up();
        drag(&mut slider, (500.0, 100.0), (450.0, 100.0));
        slider.handle_gesture_end(PointerKind::Touch);
        assert_eq!(slider.offset(), Offset::ZERO);
    }

    #[test]
    fn test_mouse_ignored_without_mouse_tracking() {
        let mut slider = mounted(SliderConfig::horizontal().visible_count(4));
        slider.handle_gesture_start(PointerKind::Mouse, 500.0, 0.0);
        slider.handle_gesture_move(PointerKind::Mouse, 100.0, 0.0);
        assert!(!slider.is_tracking());
        assert_eq!(slider.offset(), Offset::ZERO);
    }

    #[test]
    fn test_handle_input_dispatch() {
        let mut slider = four_up();
        let now = Instant::now();
        slider.handle_input(
            InputEvent::Mouse(MouseEvent::ButtonPressed {
                button: MouseButton::Right,
                x: 500.0,
                y: 0.0,
            }),
            now,
        );
        assert!(!slider.is_tracking());

        slider.handle_input(
            InputEvent::Mouse(MouseEvent::ButtonPressed {
                button: MouseButton::Left,
                x: 500.0,
                y: 0.0,
            }),
            now,
        );
        slider.handle_input(InputEvent::Mouse(MouseEvent::Moved { x: 250.0, y: 0.0 }), now);
        slider.handle_input(
            InputEvent::Mouse(MouseEvent::ButtonReleased {
                button: MouseButton::Left,
                x: 250.0,
                y: 0.0,
            }),
            now,
        );
        assert_eq!(slider.offset(), Offset::new(-200.0, 0.0));

        slider.handle_input(InputEvent::Touch(TouchEvent::Started { x: 0.0, y: 0.0 }), now);
        slider.handle_input(InputEvent::Touch(TouchEvent::Moved { x: -400.0, y: 0.0 }), now);
        slider.handle_input(InputEvent::Touch(TouchEvent::Cancelled), now);
        assert_eq!(slider.offset(), Offset::new(-600.0, 0.0));
    }

    #[test]
    fn test_locked_axis_stays_zero() {
        let mut slider = four_up();
        drag(&mut slider, (500.0, 100.0), (420.0, -300.0));
        assert_eq!(slider.offset().y, 0.0);
        slider.handle_gesture_end(PointerKind::Touch);
        assert_eq!(slider.offset().y, 0.0);

        let mut vertical = mounted(SliderConfig::vertical().visible_count(2));
        drag(&mut vertical, (0.0, 300.0), (-500.0, 150.0));
        assert_eq!(vertical.offset().x, 0.0);
        assert_eq!(vertical.offset().y, -150.0);
        vertical.handle_gesture_end(PointerKind::Touch);
        // Vertical unit is the viewport height over two slots
        assert_eq!(vertical.offset(), Offset::new(0.0, -200.0));
    }

    #[test]
    fn test_overshoot_then_settle_at_boundary() {
        let mut slider = four_up();
        drag(&mut slider, (10_500.0, 0.0), (500.0, 0.0));
        let overshoot = slider.config().max_translation_on_end;
        assert!(slider.offset().x >= -800.0 - overshoot);
        assert!(slider.offset().x < -800.0);

        slider.handle_gesture_end(PointerKind::Touch);
        assert_eq!(slider.offset().x, -800.0);
        assert!(!slider.has_next_slide());
    }

    #[test]
    fn test_drag_past_start_is_elastic() {
        let mut slider = four_up();
        drag(&mut slider, (0.0, 0.0), (600.0, 0.0));
        assert_eq!(slider.offset().x, 50.0);
        slider.handle_gesture_end(PointerKind::Touch);
        assert_eq!(slider.offset().x, 0.0);
    }

    #[test]
    fn test_next_and_prev() {
        let mut slider = four_up();
        slider.next_slide();
        assert_eq!(slider.offset().x, -200.0);
        assert_eq!(slider.current_slide(), 1);

        for _ in 0..5 {
            slider.next_slide();
        }
        assert_eq!(slider.offset().x, -800.0);
        assert_eq!(slider.current_slide(), 4);

        slider.prev_slide();
        assert_eq!(slider.offset().x, -600.0);
    }

    #[test]
    fn test_prev_at_start_is_noop() {
        let mut slider = four_up();
        slider.take_needs_render();
        slider.prev_slide();
        assert_eq!(slider.offset(), Offset::ZERO);
        assert!(!slider.take_needs_render());
    }

    #[test]
    fn test_vertical_ignores_next_prev_but_supports_go_to() {
        let mut slider = mounted(SliderConfig::vertical().visible_count(2));
        slider.next_slide();
        assert_eq!(slider.offset(), Offset::ZERO);

        slider.go_to_slide(3);
        assert_eq!(slider.offset(), Offset::new(0.0, -600.0));
        assert!(slider.has_next_slide());

        slider.go_to_slide(6);
        assert_eq!(slider.offset(), Offset::new(0.0, -1200.0));
        assert!(slider.has_prev_slide());
        assert!(!slider.has_next_slide());
    }

    #[test]
    fn test_go_to_slide_clamps() {
        let mut slider = four_up();
        slider.go_to_slide(100);
        assert_eq!(slider.offset().x, -800.0);
        slider.go_to_slide(0);
        assert_eq!(slider.offset().x, 0.0);
    }

    #[test]
    fn test_fewer_slides_than_slots() {
        let mut slider = Slider::new(SliderConfig::horizontal().visible_count(4));
        slider.mount(Size::new(800.0, 400.0), 3);
        drag(&mut slider, (500.0, 0.0), (100.0, 0.0));
        slider.handle_gesture_end(PointerKind::Touch);
        assert_eq!(slider.offset(), Offset::ZERO);
        assert!(!slider.has_next_slide());
        slider.next_slide();
        assert_eq!(slider.offset(), Offset::ZERO);
    }

    #[test]
    fn test_unmeasured_viewport_stays_at_zero() {
        let mut slider = Slider::new(SliderConfig::horizontal().visible_count(4));
        slider.mount(Size::default(), 8);
        slider.next_slide();
        drag(&mut slider, (500.0, 0.0), (100.0, 0.0));
        slider.handle_gesture_end(PointerKind::Touch);
        assert_eq!(slider.offset(), Offset::ZERO);
    }

    #[test]
    fn test_resize_keeps_leading_slide() {
        let mut slider = four_up();
        slider.go_to_slide(2);
        slider.set_viewport(Size::new(1200.0, 400.0));
        assert_eq!(slider.offset().x, -600.0);
        assert_eq!(slider.current_slide(), 2);
    }

    #[test]
    fn test_removing_slides_reclamps() {
        let mut slider = four_up();
        slider.go_to_slide(4);
        slider.set_slide_count(6);
        assert_eq!(slider.offset().x, -400.0);
    }

    #[test]
    fn test_wheel_moves_live_then_idle_timeout_settles() {
        let mut slider = four_up();
        let start = Instant::now();

        slider.handle_wheel(80.0, 0.0, start);
        assert_eq!(slider.state(), SliderState::Wheeling);
        assert_eq!(slider.offset().x, -120.0);
        assert_eq!(slider.wrapper_style().transition, None);

        assert!(slider.tick(start + Duration::from_millis(20)));
        assert_eq!(slider.offset().x, -120.0);

        slider.tick(start + Duration::from_millis(60));
        assert_eq!(slider.offset().x, -200.0);
        assert_eq!(slider.state(), SliderState::Settling);
        assert!(slider.next_deadline().is_none());
    }

    #[test]
    fn test_wheel_disabled() {
        let mut slider = mounted(
            SliderConfig::horizontal()
                .visible_count(4)
                .wheel(crate::config::WheelConfig::disabled()),
        );
        slider.handle_wheel(80.0, 0.0, Instant::now());
        assert_eq!(slider.offset(), Offset::ZERO);
        assert_eq!(slider.state(), SliderState::Idle);
    }

    #[test]
    fn test_wheel_ignored_during_drag() {
        let mut slider = four_up();
        drag(&mut slider, (500.0, 0.0), (450.0, 0.0));
        slider.handle_wheel(80.0, 0.0, Instant::now());
        assert_eq!(slider.offset().x, -50.0);
        assert!(slider.next_deadline().is_none());
    }

    #[test]
    fn test_unmount_cancels_timer_and_ignores_input() {
        let mut slider = four_up();
        let start = Instant::now();
        slider.handle_wheel(80.0, 0.0, start);
        assert!(slider.next_deadline().is_some());

        slider.unmount();
        assert!(slider.next_deadline().is_none());
        assert!(!slider.tick(start + Duration::from_secs(1)));
        assert_eq!(slider.offset().x, -120.0);

        slider.next_slide();
        drag(&mut slider, (500.0, 0.0), (100.0, 0.0));
        assert_eq!(slider.offset().x, -120.0);
    }

    #[test]
    fn test_settle_animation_reaches_target() {
        let mut slider = four_up();
        slider.next_slide();
        assert_eq!(slider.displayed_offset(), Offset::ZERO);

        let start = Instant::now();
        assert!(slider.tick(start));
        assert!(slider.tick(start + Duration::from_millis(100)));
        let mid = slider.displayed_offset().x;
        assert!(mid < 0.0 && mid > -200.0);

        assert!(!slider.tick(start + Duration::from_millis(300)));
        assert_eq!(slider.displayed_offset().x, -200.0);
        assert_eq!(slider.state(), SliderState::Idle);
    }

    #[test]
    fn test_grab_mid_settle_continues_from_drawn_position() {
        let mut slider = four_up();
        slider.next_slide();
        let start = Instant::now();
        slider.tick(start);
        slider.tick(start + Duration::from_millis(125));
        let drawn = slider.displayed_offset();

        slider.handle_gesture_start(PointerKind::Touch, 0.0, 0.0);
        assert_eq!(slider.offset(), drawn);
    }

    #[test]
    fn test_observers_fire_on_change_only() {
        let prev_calls = Arc::new(Mutex::new(Vec::new()));
        let next_calls = Arc::new(Mutex::new(Vec::new()));

        let prev_sink = Arc::clone(&prev_calls);
        let next_sink = Arc::clone(&next_calls);
        let mut slider = Slider::new(SliderConfig::horizontal().visible_count(4))
            .on_prev_changed(move |v| prev_sink.lock().unwrap().push(v))
            .on_next_changed(move |v| next_sink.lock().unwrap().push(v));

        slider.mount(Size::new(800.0, 400.0), 8);
        slider.next_slide();
        slider.next_slide();
        slider.go_to_slide(4);
        slider.go_to_slide(0);

        assert_eq!(*prev_calls.lock().unwrap(), vec![false, true, false]);
        assert_eq!(*next_calls.lock().unwrap(), vec![true, false, true]);
    }

    #[test]
    fn test_frame_snapshot() {
        let mut slider = four_up();
        slider.next_slide();
        let frame = slider.frame();
        assert_eq!(frame.offset, Offset::new(-200.0, 0.0));
        assert_eq!(frame.current_slide, 1);
        assert_eq!(frame.slide_count, 8);
        assert!(frame.has_prev);
        assert!(frame.has_next);
        assert_eq!(frame.slot.extent_px, Some(190.0));
        assert_eq!(frame.state, SliderState::Settling);
    }

    #[test]
    fn test_frame_serializes_for_adapters() {
        let mut slider = four_up();
        slider.next_slide();
        let frame = slider.frame();

        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["state"], "settling");
        assert_eq!(json["offset"]["x"], -200.0);
        assert_eq!(json["wrapper"]["gap"], "10px");
        assert_eq!(json["viewport"]["clip_overflow"], true);

        let back: SliderFrame = serde_json::from_value(json).unwrap();
        assert_eq!(back, frame);
    }
}
