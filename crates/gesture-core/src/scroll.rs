//! Ring-pinch scroll detection.
//!
//! Independent of the primary machine: detects a thumb–ring pinch while the
//! thumb–index pinch is NOT active (mutual exclusion avoids cross-talk with
//! cursor gestures), then maps vertical hand travel from the pinch-onset
//! baseline to rate-limited scroll ticks.

use handpilot_common::clock::RateLimiter;
use handpilot_common::config::{GestureTuning, LandmarkRoles, ScrollTuning};
use handpilot_common::error::{HandpilotError, HandpilotResult};
use handpilot_gesture_model::event::{ScrollDirection, ScrollEvent};
use handpilot_gesture_model::landmark::{LandmarkFrame, LANDMARK_COUNT};

use crate::geometry;

/// Detects the scroll gesture and converts hand elevation into scroll ticks.
///
/// One instance per hand/session; call `process` once per captured frame.
#[derive(Debug)]
pub struct ScrollDetector {
    pinch_threshold: f64,
    tuning: ScrollTuning,
    roles: LandmarkRoles,

    pinching: bool,
    /// Thumb-tip y when the pinch started.
    baseline_y: Option<f64>,
    limiter: RateLimiter,
}

impl ScrollDetector {
    /// Create a detector from a configuration snapshot.
    pub fn new(
        gesture: GestureTuning,
        tuning: ScrollTuning,
        roles: LandmarkRoles,
    ) -> HandpilotResult<Self> {
        let indices = [roles.thumb_tip, roles.index_tip, roles.ring_tip];
        if let Some(bad) = indices.iter().find(|&&i| i >= LANDMARK_COUNT) {
            return Err(HandpilotError::config(format!(
                "landmark role index {bad} out of range (frame has {LANDMARK_COUNT} points)"
            )));
        }
        if tuning.dead_zone < 0.0 || !tuning.dead_zone.is_finite() {
            return Err(HandpilotError::config(format!(
                "scroll dead zone must be non-negative, got {}",
                tuning.dead_zone
            )));
        }
        if tuning.tick_size <= 0.0 || !tuning.tick_size.is_finite() {
            return Err(HandpilotError::config(format!(
                "scroll tick size must be positive, got {}",
                tuning.tick_size
            )));
        }

        Ok(Self {
            pinch_threshold: gesture.pinch_threshold,
            limiter: RateLimiter::new(tuning.min_interval_ms),
            tuning,
            roles,
            pinching: false,
            baseline_y: None,
        })
    }

    /// Process one frame. Returns a scroll event if one should fire.
    ///
    /// `d_ref` is the precomputed reference distance for this frame; zero
    /// means thresholds are unevaluable and the baseline resets.
    pub fn process(
        &mut self,
        frame: Option<&LandmarkFrame>,
        d_ref: f64,
        now_ms: u64,
    ) -> Option<ScrollEvent> {
        let Some(frame) = frame else {
            self.reset();
            return None;
        };
        if d_ref == 0.0 {
            self.reset();
            return None;
        }

        let ring_pinch = geometry::is_pinching(
            frame,
            self.roles.thumb_tip,
            self.roles.ring_tip,
            d_ref,
            self.pinch_threshold,
        );
        let index_pinch = geometry::is_pinching(
            frame,
            self.roles.thumb_tip,
            self.roles.index_tip,
            d_ref,
            self.pinch_threshold,
        );

        if !ring_pinch || index_pinch {
            self.reset();
            return None;
        }

        let thumb_y = frame[self.roles.thumb_tip].y;

        let Some(baseline_y) = self.baseline_y else {
            // Pinch just started: record the baseline, emit nothing.
            self.pinching = true;
            self.baseline_y = Some(thumb_y);
            return None;
        };

        // Positive delta = hand moved up (y grows downward).
        let delta = baseline_y - thumb_y;
        if delta.abs() < self.tuning.dead_zone {
            return None;
        }

        if !self.limiter.should_fire(now_ms) {
            return None;
        }

        let direction = if delta > 0.0 {
            ScrollDirection::Up
        } else {
            ScrollDirection::Down
        };
        let magnitude = ((delta.abs() / self.tuning.tick_size) as u32).max(1);
        let event = ScrollEvent::new(direction, magnitude);
        tracing::debug!(?direction, magnitude, "scroll tick");
        Some(event)
    }

    /// Whether the scroll pinch is currently held.
    pub fn is_pinching(&self) -> bool {
        self.pinching
    }

    fn reset(&mut self) {
        self.pinching = false;
        self.baseline_y = None;
        // The rate limiter is intentionally NOT reset: it guards total
        // scroll output rate, not per-pinch rate.
    }
}
