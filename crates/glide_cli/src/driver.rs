//! Script replay
//!
//! Feeds a script's events into a slider on a frame clock. In virtual mode
//! the clock jumps straight to the next frame or event; in real-time mode the
//! replay sleeps on the tokio timer between them, so wheel debouncing and the
//! settle animation play out at wall-clock speed.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use glide_core::{Slider, SliderFrame, SliderState};
use serde::Serialize;
use tracing::{debug, info};

use crate::script::{Action, Script, ScriptEvent};

/// Frame interval of the replay clock (~60 fps)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// How long the replay keeps ticking after the last event at most
pub const SETTLE_GRACE: Duration = Duration::from_secs(5);

/// Clock driving the replay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMode {
    /// Jump between frames without waiting
    Virtual,
    /// Sleep between frames
    Realtime,
}

/// A frame emitted during replay
#[derive(Debug, Clone, Serialize)]
pub struct ReplayFrame {
    pub at_ms: u64,
    pub label: String,
    pub frame: SliderFrame,
}

/// Result of a replay
#[derive(Debug, Clone)]
pub struct ReplaySummary {
    pub events_applied: usize,
    pub elapsed: Duration,
    pub final_frame: SliderFrame,
}

/// Build the slider for a script, with observers reporting navigation changes
pub fn build_slider(script: &Script) -> Slider {
    Slider::new(script.slider.clone())
        .on_prev_changed(|has_prev| info!("prev button {}", enabled(has_prev)))
        .on_next_changed(|has_next| info!("next button {}", enabled(has_next)))
}

fn enabled(value: bool) -> &'static str {
    if value {
        "enabled"
    } else {
        "disabled"
    }
}

fn apply(slider: &mut Slider, action: &Action, now: Instant) {
    if let Some(event) = action.input_event() {
        slider.handle_input(event, now);
        return;
    }

    match *action {
        Action::Next => slider.next_slide(),
        Action::Prev => slider.prev_slide(),
        Action::GoTo { index } => slider.go_to_slide(index),
        Action::Resize { width, height } => {
            slider.set_viewport(glide_core::Size::new(width, height))
        }
        Action::Slides { count } => slider.set_slide_count(count),
        Action::Unmount => slider.unmount(),
        _ => {}
    }
}

/// Replay `script`, calling `emit` after every event and when the slider comes to rest
pub async fn replay(
    script: &Script,
    mode: ClockMode,
    mut emit: impl FnMut(&ReplayFrame),
) -> ReplaySummary {
    let mut slider = build_slider(script);
    let mut pending: VecDeque<&ScriptEvent> = script.events.iter().collect();
    let deadline = script.end() + SETTLE_GRACE;

    let origin = Instant::now();
    let mut elapsed = Duration::ZERO;
    let mut events_applied = 0;

    slider.mount(script.viewport.size(), script.viewport.slides);
    emit(&ReplayFrame {
        at_ms: 0,
        label: "mount".to_string(),
        frame: slider.frame(),
    });

    loop {
        let now = origin + elapsed;
        let was_resting = slider.state() == SliderState::Idle;
        let active = slider.tick(now);

        if !was_resting && slider.state() == SliderState::Idle {
            emit(&ReplayFrame {
                at_ms: elapsed.as_millis() as u64,
                label: "settled".to_string(),
                frame: slider.frame(),
            });
        }

        while let Some(event) = pending.front().copied() {
            if event.at() > elapsed {
                break;
            }
            pending.pop_front();
            debug!("t={}ms {:?}", event.at_ms, event.action);
            apply(&mut slider, &event.action, now);
            events_applied += 1;
            emit(&ReplayFrame {
                at_ms: event.at_ms,
                label: event.action.label().to_string(),
                frame: slider.frame(),
            });
        }

        let resting = !active && !slider.state().is_live() && !slider.state().is_settling();
        if pending.is_empty() && (resting || !slider.is_mounted()) {
            break;
        }
        if elapsed >= deadline {
            debug!("Replay stopped after {:?} without settling", elapsed);
            break;
        }

        let mut wake = elapsed + FRAME_INTERVAL;
        if let Some(event) = pending.front() {
            wake = wake.min(event.at());
        }
        if mode == ClockMode::Realtime {
            tokio::time::sleep(wake - elapsed).await;
        }
        elapsed = wake;
    }

    ReplaySummary {
        events_applied,
        elapsed,
        final_frame: slider.frame(),
    }
}
