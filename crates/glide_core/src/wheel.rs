//! Wheel gesture debouncing
//!
//! Wheel and trackpad events have no "end" event, and momentum scrolling keeps
//! delivering deltas long after the user let go. The debouncer treats a burst
//! of wheel events as one drag and decides when it is over:
//!
//! - **Deceleration**: once the averaged delta has been falling for longer than
//!   `timeout_ms`, the burst ends and residual momentum is ignored for
//!   `ignore_timeout_ms`.
//! - **Idle**: short bursts that never fill the sample window end when no
//!   event arrives for `idle_timeout_ms`.

use std::time::Instant;

use smallvec::SmallVec;

use crate::config::{Axis, WheelConfig};
use crate::timer::DebounceTimer;

/// One recorded wheel delta
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSample {
    pub time: Instant,
    pub delta_x: f32,
    pub delta_y: f32,
}

/// What the slider should do with a wheel event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelOutcome {
    /// Inside the ignore window, drop the event
    Ignored,
    /// Move live by the scaled delta
    Live { delta_x: f32, delta_y: f32 },
    /// Move live by the scaled delta, then settle (burst ended)
    LiveThenSettle { delta_x: f32, delta_y: f32 },
}

/// Tracks wheel bursts and the idle debounce timer
#[derive(Debug, Default)]
pub struct WheelDebouncer {
    samples: SmallVec<[WheelSample; 16]>,
    last_average: f32,
    lowering_since: Option<Instant>,
    ignore_until: Option<Instant>,
    idle_timer: DebounceTimer,
}

impl WheelDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one raw wheel event
    pub fn on_wheel(
        &mut self,
        config: &WheelConfig,
        axis: Axis,
        delta_x: f32,
        delta_y: f32,
        now: Instant,
    ) -> WheelOutcome {
        if let Some(until) = self.ignore_until {
            if until > now {
                return WheelOutcome::Ignored;
            }
            self.ignore_until = None;
        }

        let scaled_x = delta_x * config.multiplier;
        let scaled_y = delta_y * config.multiplier;

        self.record(config, axis, delta_x, delta_y, now);

        if let Some(since) = self.lowering_since {
            if now.saturating_duration_since(since) > config.timeout() {
                tracing::debug!(
                    "Wheel burst decelerated for {:?}, settling and ignoring until +{:?}",
                    now.saturating_duration_since(since),
                    config.ignore_timeout()
                );
                self.ignore_until = Some(since + config.ignore_timeout());
                self.reset_window();
                self.idle_timer.cancel();
                return WheelOutcome::LiveThenSettle {
                    delta_x: scaled_x,
                    delta_y: scaled_y,
                };
            }
        }

        self.idle_timer.reschedule(now + config.idle_timeout());
        WheelOutcome::Live {
            delta_x: scaled_x,
            delta_y: scaled_y,
        }
    }

    fn record(&mut self, config: &WheelConfig, axis: Axis, delta_x: f32, delta_y: f32, now: Instant) {
        let capacity = config.average_window.max(1);

        self.samples.push(WheelSample {
            time: now,
            delta_x,
            delta_y,
        });
        while self.samples.len() > capacity {
            self.samples.remove(0);
        }
        if self.samples.len() < capacity {
            return;
        }

        let average = self.average(axis);
        if average > self.last_average {
            self.lowering_since = None;
        } else if self.lowering_since.is_none() {
            self.lowering_since = Some(now);
        }
        self.last_average = average;
    }

    /// Absolute mean delta along `axis` over the current window
    pub fn average(&self, axis: Axis) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: f32 = self
            .samples
            .iter()
            .map(|s| match axis {
                Axis::Horizontal => s.delta_x,
                Axis::Vertical => s.delta_y,
            })
            .sum();
        (sum / self.samples.len() as f32).abs()
    }

    fn reset_window(&mut self) {
        self.samples.clear();
        self.last_average = 0.0;
        self.lowering_since = None;
    }

    /// Fire the idle timer if due. Returns true when a settle pass should run.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.idle_timer.poll(now) {
            tracing::trace!("Wheel idle timeout, settling");
            self.reset_window();
            true
        } else {
            false
        }
    }

    /// Cancel the idle timer and forget the current burst
    pub fn cancel(&mut self) {
        self.idle_timer.cancel();
        self.reset_window();
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn is_ignoring(&self, now: Instant) -> bool {
        self.ignore_until.is_some_and(|until| until > now)
    }

    pub fn pending_deadline(&self) -> Option<Instant> {
        self.idle_timer.deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    #[test]
    fn test_scales_delta_and_arms_timer() {
        let config = WheelConfig::default();
        let mut wheel = WheelDebouncer::new();
        let start = Instant::now();

        let outcome = wheel.on_wheel(&config, Axis::Horizontal, 10.0, 4.0, start);
        assert_eq!(
            outcome,
            WheelOutcome::Live {
                delta_x: 15.0,
                delta_y: 6.0
            }
        );
        assert_eq!(wheel.pending_deadline(), Some(ms(start, 50)));
    }

    #[test]
    fn test_idle_timer_rearms_on_each_event() {
        let config = WheelConfig::default();
        let mut wheel = WheelDebouncer::new();
        let start = Instant::now();

        wheel.on_wheel(&config, Axis::Horizontal, 10.0, 0.0, start);
        wheel.on_wheel(&config, Axis::Horizontal, 10.0, 0.0, ms(start, 30));

        assert!(!wheel.poll(ms(start, 60)));
        assert!(wheel.poll(ms(start, 80)));
        assert_eq!(wheel.sample_count(), 0);
        assert!(!wheel.poll(ms(start, 200)));
    }

    #[test]
    fn test_window_is_bounded() {
        let config = WheelConfig {
            average_window: 4,
            ..Default::default()
        };
        let mut wheel = WheelDebouncer::new();
        let start = Instant::now();
        for i in 0..10 {
            wheel.on_wheel(&config, Axis::Horizontal, 5.0, 0.0, ms(start, i));
        }
        assert_eq!(wheel.sample_count(), 4);
        assert_eq!(wheel.average(Axis::Horizontal), 5.0);
    }

    #[test]
    fn test_deceleration_ends_burst_and_opens_ignore_window() {
        let config = WheelConfig {
            average_window: 3,
            ..Default::default()
        };
        let mut wheel = WheelDebouncer::new();
        let start = Instant::now();

        // Rising
        for (i, delta) in [10.0, 20.0, 30.0].into_iter().enumerate() {
            let outcome =
                wheel.on_wheel(&config, Axis::Horizontal, delta, 0.0, ms(start, i as u64 * 10));
            assert!(matches!(outcome, WheelOutcome::Live { .. }));
        }

        // Falling from t=30
        let mut t = 30;
        let mut ended = None;
        while t < 400 {
            let outcome = wheel.on_wheel(&config, Axis::Horizontal, 1.0, 0.0, ms(start, t));
            if matches!(outcome, WheelOutcome::LiveThenSettle { .. }) {
                ended = Some(t);
                break;
            }
            t += 10;
        }

        let ended = ended.expect("burst never ended");
        assert!(ended > 230, "ended too early at {ended}");
        assert!(wheel.pending_deadline().is_none());
        assert_eq!(wheel.sample_count(), 0);

        // Momentum tail is dropped until lowering start + 500ms
        assert_eq!(
            wheel.on_wheel(&config, Axis::Horizontal, 1.0, 0.0, ms(start, ended + 10)),
            WheelOutcome::Ignored
        );
        assert!(wheel.is_ignoring(ms(start, 500)));
        assert!(!wheel.is_ignoring(ms(start, 600)));
        assert!(matches!(
            wheel.on_wheel(&config, Axis::Horizontal, 1.0, 0.0, ms(start, 600)),
            WheelOutcome::Live { .. }
        ));
    }

    #[test]
    fn test_vertical_axis_averages_y() {
        let config = WheelConfig {
            average_window: 2,
            ..Default::default()
        };
        let mut wheel = WheelDebouncer::new();
        let start = Instant::now();
        wheel.on_wheel(&config, Axis::Vertical, 100.0, -8.0, start);
        wheel.on_wheel(&config, Axis::Vertical, 100.0, -4.0, start);
        assert_eq!(wheel.average(Axis::Vertical), 6.0);
    }
}
