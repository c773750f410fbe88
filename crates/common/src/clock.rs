//! Clock and timing utilities for frame-driven gesture processing.
//!
//! All HandPilot timing windows (double-pinch disambiguation, scroll rate
//! limiting) are measured against a monotonic clock epoch captured when the
//! session starts. Time is always sampled at the boundary and passed into
//! the gesture core as a plain millisecond value, which keeps the state
//! machines deterministic under test.

use std::collections::VecDeque;
use std::time::Instant;

/// A session clock that provides monotonic timestamps relative to
/// a fixed epoch (the moment processing started).
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// The instant processing started.
    epoch: Instant,

    /// Wall-clock time at epoch (ISO 8601 string).
    epoch_wall: String,
}

impl FrameClock {
    /// Create a new frame clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a clock from a known epoch (for replaying saved sessions).
    pub fn from_epoch(epoch: Instant, wall: String) -> Self {
        Self {
            epoch,
            epoch_wall: wall,
        }
    }

    /// Get milliseconds elapsed since session start.
    pub fn elapsed_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    /// Get seconds elapsed since session start.
    pub fn elapsed_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Wall-clock time at session start.
    pub fn epoch_wall(&self) -> &str {
        &self.epoch_wall
    }

    /// The underlying epoch instant.
    pub fn epoch(&self) -> Instant {
        self.epoch
    }

    /// Convert a millisecond value to fractional seconds.
    pub fn ms_to_secs(ms: u64) -> f64 {
        ms as f64 / 1_000.0
    }

    /// Convert seconds to milliseconds.
    pub fn secs_to_ms(secs: f64) -> u64 {
        (secs * 1_000.0) as u64
    }
}

/// Minimum-interval limiter for repeated event emission.
///
/// Used by the scroll detector to space out scroll ticks. The first call
/// always fires.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval_ms: u64,
    last_fire_ms: Option<u64>,
}

impl RateLimiter {
    /// Create a limiter enforcing the given minimum interval between fires.
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_fire_ms: None,
        }
    }

    /// Check whether enough time has passed since the last fire.
    /// Returns true and records the fire time if so.
    pub fn should_fire(&mut self, current_ms: u64) -> bool {
        match self.last_fire_ms {
            None => {
                self.last_fire_ms = Some(current_ms);
                true
            }
            Some(last) if current_ms >= last + self.min_interval_ms => {
                self.last_fire_ms = Some(current_ms);
                true
            }
            _ => false,
        }
    }

    /// Forget the last fire time so the next check fires immediately.
    pub fn reset(&mut self) {
        self.last_fire_ms = None;
    }

    /// The enforced minimum interval in milliseconds.
    pub fn interval_ms(&self) -> u64 {
        self.min_interval_ms
    }
}

/// Rolling-window frames-per-second counter.
///
/// Adapts to recent performance rather than averaging over the whole run.
#[derive(Debug)]
pub struct FpsCounter {
    window: usize,
    timestamps_ms: VecDeque<u64>,
}

impl FpsCounter {
    /// `window`: number of recent frames to average over. Larger window =
    /// smoother number, smaller = more reactive.
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(2),
            timestamps_ms: VecDeque::with_capacity(window.max(2)),
        }
    }

    /// Record a frame at the given monotonic millisecond timestamp.
    pub fn tick(&mut self, now_ms: u64) {
        if self.timestamps_ms.len() == self.window {
            self.timestamps_ms.pop_front();
        }
        self.timestamps_ms.push_back(now_ms);
    }

    /// Current rolling-average FPS. Zero until at least two frames are seen.
    pub fn fps(&self) -> f64 {
        if self.timestamps_ms.len() < 2 {
            return 0.0;
        }
        let first = *self.timestamps_ms.front().unwrap();
        let last = *self.timestamps_ms.back().unwrap();
        if last <= first {
            return 0.0;
        }
        (self.timestamps_ms.len() - 1) as f64 * 1_000.0 / (last - first) as f64
    }

    pub fn reset(&mut self) {
        self.timestamps_ms.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_elapsed() {
        let clock = FrameClock::start();
        // Should be very small but non-negative
        assert!(clock.elapsed_ms() < 1_000);
    }

    #[test]
    fn test_ms_secs_conversion() {
        assert!((FrameClock::ms_to_secs(1_500) - 1.5).abs() < 1e-9);
        assert_eq!(FrameClock::secs_to_ms(2.0), 2_000);
    }

    #[test]
    fn test_rate_limiter_first_fire() {
        let mut limiter = RateLimiter::new(120);
        assert!(limiter.should_fire(1_000)); // first fire always passes
        assert!(!limiter.should_fire(1_050)); // 50ms later, too soon
        assert!(limiter.should_fire(1_120)); // exactly at the interval
    }

    #[test]
    fn test_rate_limiter_reset() {
        let mut limiter = RateLimiter::new(120);
        assert!(limiter.should_fire(1_000));
        limiter.reset();
        assert!(limiter.should_fire(1_001));
    }

    #[test]
    fn test_fps_counter_steady_rate() {
        let mut counter = FpsCounter::new(30);
        // 30 frames at ~33ms apart, roughly 30fps
        for i in 0..30u64 {
            counter.tick(i * 33);
        }
        let fps = counter.fps();
        assert!((fps - 30.3).abs() < 0.5, "fps={fps}");
    }

    #[test]
    fn test_fps_counter_needs_two_frames() {
        let mut counter = FpsCounter::new(10);
        assert_eq!(counter.fps(), 0.0);
        counter.tick(0);
        assert_eq!(counter.fps(), 0.0);
        counter.tick(100);
        assert!(counter.fps() > 0.0);
    }
}
