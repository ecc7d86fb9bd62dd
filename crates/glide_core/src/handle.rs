//! Shared slider handle
//!
//! `SliderRef` is what a host keeps to drive a slider imperatively (prev/next
//! buttons, keyboard shortcuts) while the rendering adapter feeds it input.
//! Both hold clones of the same handle.
//!
//! # Example
//!
//! ```rust
//! use glide_core::{create_slider, Size, SliderConfig};
//!
//! let slider = create_slider(SliderConfig::horizontal().visible_count(4));
//! slider.update(|s| s.mount(Size::new(800.0, 300.0), 8));
//!
//! let next_button = slider.clone();
//! next_button.next_slide();
//! assert_eq!(slider.current_slide(), 1);
//! ```

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::config::SliderConfig;
use crate::input::InputEvent;
use crate::slider::{Slider, SliderFrame};

/// Shared slider state
pub type SharedSlider = Arc<Mutex<Slider>>;

/// Create a slider and return the handle the host keeps
pub fn create_slider(config: SliderConfig) -> SliderRef {
    SliderRef::new(Slider::new(config))
}

/// Cloneable handle to a slider
#[derive(Clone)]
pub struct SliderRef {
    inner: SharedSlider,
}

impl fmt::Debug for SliderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.lock() {
            Ok(slider) => f
                .debug_struct("SliderRef")
                .field("offset", &slider.offset())
                .field("state", &slider.state())
                .finish(),
            Err(_) => f.debug_struct("SliderRef").field("poisoned", &true).finish(),
        }
    }
}

impl SliderRef {
    /// Wrap an existing slider (observers already registered are kept)
    pub fn new(slider: Slider) -> Self {
        Self {
            inner: Arc::new(Mutex::new(slider)),
        }
    }

    /// Mutate the slider
    ///
    /// Observer callbacks raised by `f` run after the lock is released, so
    /// they may call back into this handle. Returns `None` if the lock is
    /// poisoned.
    pub fn update<R>(&self, f: impl FnOnce(&mut Slider) -> R) -> Option<R> {
        let (result, pending) = {
            let mut slider = self.inner.lock().ok()?;
            slider.set_defer_notifications(true);
            let result = f(&mut slider);
            slider.set_defer_notifications(false);
            (result, slider.take_notifications())
        };

        for notification in pending {
            notification.fire();
        }
        Some(result)
    }

    /// Read from the slider
    pub fn read<R>(&self, f: impl FnOnce(&Slider) -> R) -> Option<R> {
        let slider = self.inner.lock().ok()?;
        Some(f(&slider))
    }

    pub fn next_slide(&self) {
        self.update(Slider::next_slide);
    }

    pub fn prev_slide(&self) {
        self.update(Slider::prev_slide);
    }

    pub fn go_to_slide(&self, index: usize) {
        self.update(|slider| slider.go_to_slide(index));
    }

    pub fn has_next_slide(&self) -> bool {
        self.read(Slider::has_next_slide).unwrap_or(false)
    }

    pub fn has_prev_slide(&self) -> bool {
        self.read(Slider::has_prev_slide).unwrap_or(false)
    }

    pub fn current_slide(&self) -> usize {
        self.read(Slider::current_slide).unwrap_or(0)
    }

    pub fn handle_input(&self, event: InputEvent, now: Instant) {
        self.update(|slider| slider.handle_input(event, now));
    }

    /// Advance timers and animation; returns true while more ticks are needed
    pub fn tick(&self, now: Instant) -> bool {
        self.update(|slider| slider.tick(now)).unwrap_or(false)
    }

    pub fn frame(&self) -> Option<SliderFrame> {
        self.read(Slider::frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    #[test]
    fn test_clones_share_state() {
        let slider = create_slider(SliderConfig::horizontal().visible_count(4));
        slider.update(|s| s.mount(Size::new(800.0, 300.0), 8));

        let other = slider.clone();
        other.next_slide();
        other.next_slide();
        assert_eq!(slider.current_slide(), 2);
        assert!(slider.has_prev_slide());
        assert!(slider.has_next_slide());

        slider.prev_slide();
        assert_eq!(other.current_slide(), 1);
    }

    #[test]
    fn test_observer_may_reenter_handle() {
        let handle_slot: Arc<Mutex<Option<SliderRef>>> = Arc::new(Mutex::new(None));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let slot = Arc::clone(&handle_slot);
        let sink = Arc::clone(&seen);
        let slider = Slider::new(SliderConfig::horizontal().visible_count(4)).on_next_changed(
            move |has_next| {
                // Reading through the handle would deadlock if the lock were held
                let current = slot
                    .lock()
                    .unwrap()
                    .as_ref()
                    .map(|handle| handle.current_slide());
                sink.lock().unwrap().push((has_next, current));
            },
        );

        let handle = SliderRef::new(slider);
        *handle_slot.lock().unwrap() = Some(handle.clone());

        handle.update(|s| s.mount(Size::new(800.0, 300.0), 8));
        handle.go_to_slide(4);

        assert_eq!(*seen.lock().unwrap(), vec![(true, Some(0)), (false, Some(4))]);
    }

    #[test]
    fn test_frame_through_handle() {
        let slider = create_slider(SliderConfig::horizontal().visible_count(2));
        slider.update(|s| s.mount(Size::new(600.0, 300.0), 5));
        slider.next_slide();
        let frame = slider.frame().unwrap();
        assert_eq!(frame.offset.x, -300.0);
        assert_eq!(
            frame.wrapper.transition_css().as_deref(),
            Some(".25s transform ease-in-out")
        );
    }
}
