//! The primary gesture state machine.
//!
//! Consumes one landmark frame per call and emits exactly one pointer event.
//! The double-pinch window is what separates a single click from a drag: a
//! second pinch arriving within the window upgrades the gesture to a drag,
//! while non-arrival (or arrival after the window) resolves to a click.
//!
//! Timing is injected: the caller passes monotonic milliseconds into
//! `process`, so the machine never reads a clock and replays
//! deterministically.

use handpilot_common::config::{GestureTuning, LandmarkRoles};
use handpilot_common::error::{HandpilotError, HandpilotResult};
use handpilot_gesture_model::event::PointerEvent;
use handpilot_gesture_model::landmark::{LandmarkFrame, LANDMARK_COUNT};
use handpilot_gesture_model::region::NormPoint;

use crate::geometry;
use crate::mapper::CursorMapper;

/// Internal states of the double-pinch machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    /// Waiting — hand open or absent.
    Idle,
    /// First pinch held — cursor moves.
    FirstPinch,
    /// Pinch released — waiting for a second pinch within the window.
    ReleaseWait,
    /// Drag active — button held.
    Drag,
}

/// The primary gesture state machine.
///
/// One instance per hand/session. Not safe for concurrent calls; callers
/// must serialize `process` invocations.
#[derive(Debug)]
pub struct GestureFsm {
    tuning: GestureTuning,
    roles: LandmarkRoles,
    mapper: CursorMapper,

    state: FsmState,
    /// Timestamp of the first pinch release, while in ReleaseWait.
    release_at_ms: Option<u64>,
    /// Last smoothed position; `None` forces re-seeding on the next valid
    /// frame instead of interpolating from a stale value.
    smoothed: Option<NormPoint>,
}

impl GestureFsm {
    /// Create a machine from a configuration snapshot.
    ///
    /// Structural problems (out-of-range landmark roles, non-positive pinch
    /// threshold, EMA alpha outside `(0, 1]`) are rejected here rather than
    /// discovered mid-stream.
    pub fn new(
        tuning: GestureTuning,
        roles: LandmarkRoles,
        mapper: CursorMapper,
    ) -> HandpilotResult<Self> {
        let indices = [
            roles.wrist,
            roles.index_knuckle,
            roles.thumb_tip,
            roles.index_tip,
            roles.middle_tip,
            roles.ring_tip,
        ];
        if let Some(bad) = indices.iter().find(|&&i| i >= LANDMARK_COUNT) {
            return Err(HandpilotError::config(format!(
                "landmark role index {bad} out of range (frame has {LANDMARK_COUNT} points)"
            )));
        }
        if tuning.pinch_threshold <= 0.0 || !tuning.pinch_threshold.is_finite() {
            return Err(HandpilotError::config(format!(
                "pinch threshold must be positive, got {}",
                tuning.pinch_threshold
            )));
        }
        if !(tuning.ema_alpha > 0.0 && tuning.ema_alpha <= 1.0) {
            return Err(HandpilotError::config(format!(
                "EMA alpha must be in (0, 1], got {}",
                tuning.ema_alpha
            )));
        }

        Ok(Self {
            tuning,
            roles,
            mapper,
            state: FsmState::Idle,
            release_at_ms: None,
            smoothed: None,
        })
    }

    /// Current machine state.
    pub fn state(&self) -> FsmState {
        self.state
    }

    pub fn mapper(&self) -> &CursorMapper {
        &self.mapper
    }

    pub fn mapper_mut(&mut self) -> &mut CursorMapper {
        &mut self.mapper
    }

    /// Reset to Idle and clear smoothing, as if no hand had been seen.
    pub fn reset(&mut self) {
        self.state = FsmState::Idle;
        self.release_at_ms = None;
        self.smoothed = None;
    }

    /// Process one frame of landmarks and return the event to dispatch.
    /// Call once per captured frame with the current monotonic time.
    pub fn process(&mut self, frame: Option<&LandmarkFrame>, now_ms: u64) -> PointerEvent {
        let Some(frame) = frame else {
            // Tracking lost: full reset so a stale smoothed position can
            // never be replayed against a fresh one when the hand returns.
            self.reset();
            return PointerEvent::Idle;
        };

        let d_ref = geometry::reference_distance(frame, self.roles.wrist, self.roles.index_knuckle);
        if d_ref == 0.0 {
            // Degenerate pose: thresholds are unevaluable this frame.
            // State is left untouched.
            return PointerEvent::Idle;
        }

        let pinch_index = geometry::is_pinching(
            frame,
            self.roles.thumb_tip,
            self.roles.index_tip,
            d_ref,
            self.tuning.pinch_threshold,
        );
        let pinch_middle = geometry::is_pinching(
            frame,
            self.roles.thumb_tip,
            self.roles.middle_tip,
            d_ref,
            self.tuning.pinch_threshold,
        );

        let raw_mid = geometry::pinch_midpoint(frame, self.roles.thumb_tip, self.roles.index_tip);
        let smoothed = match self.smoothed {
            None => raw_mid,
            Some(previous) => geometry::ema_smooth(raw_mid, previous, self.tuning.ema_alpha),
        };
        self.smoothed = Some(smoothed);

        let (x, y) = self.mapper.project(&smoothed);

        // Right click (thumb + middle) wins over the double-pinch logic in
        // every state: a momentary gesture that must not corrupt drag
        // bookkeeping beyond resetting it.
        if pinch_middle && !pinch_index {
            self.transition(FsmState::Idle);
            self.release_at_ms = None;
            return PointerEvent::right_click(x, y);
        }

        match self.state {
            FsmState::Idle => {
                if pinch_index {
                    self.transition(FsmState::FirstPinch);
                    PointerEvent::move_to(x, y)
                } else {
                    PointerEvent::Idle
                }
            }

            FsmState::FirstPinch => {
                if pinch_index {
                    PointerEvent::move_to(x, y)
                } else {
                    self.transition(FsmState::ReleaseWait);
                    self.release_at_ms = Some(now_ms);
                    PointerEvent::move_to(x, y)
                }
            }

            FsmState::ReleaseWait => {
                // Re-pinch is checked before the window: the upgrade to drag
                // applies on any frame still spent in this state.
                if pinch_index {
                    self.transition(FsmState::Drag);
                    self.release_at_ms = None;
                    PointerEvent::drag_start(x, y)
                } else {
                    let released_at = self.release_at_ms.unwrap_or(now_ms);
                    let elapsed_ms = now_ms.saturating_sub(released_at);
                    if elapsed_ms > self.tuning.double_pinch_window_ms {
                        // Window lapsed (strictly greater): single click.
                        self.transition(FsmState::Idle);
                        self.release_at_ms = None;
                        PointerEvent::click(x, y)
                    } else {
                        PointerEvent::move_to(x, y)
                    }
                }
            }

            FsmState::Drag => {
                if pinch_index {
                    PointerEvent::move_to(x, y)
                } else {
                    self.transition(FsmState::Idle);
                    PointerEvent::drag_end(x, y)
                }
            }
        }
    }

    fn transition(&mut self, next: FsmState) {
        if self.state != next {
            tracing::debug!(from = ?self.state, to = ?next, "fsm transition");
            self.state = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handpilot_gesture_model::landmark::{roles, Landmark};
    use handpilot_gesture_model::region::ActiveRegion;
    use handpilot_platform_core::MonitorRouter;

    // Hand with wrist/knuckle fixed so d_ref = 0.2. Thumb and the chosen
    // fingertip can be pinched (close) or spread (far).
    fn frame(thumb: (f64, f64), index: (f64, f64), middle: (f64, f64)) -> LandmarkFrame {
        let mut points = vec![Landmark::new(0.0, 0.0, 0.0); LANDMARK_COUNT];
        points[roles::WRIST] = Landmark::new(0.5, 0.8, 0.0);
        points[roles::INDEX_MCP] = Landmark::new(0.5, 0.6, 0.0);
        points[roles::THUMB_TIP] = Landmark::new(thumb.0, thumb.1, 0.0);
        points[roles::INDEX_TIP] = Landmark::new(index.0, index.1, 0.0);
        points[roles::MIDDLE_TIP] = Landmark::new(middle.0, middle.1, 0.0);
        LandmarkFrame::from_points(points).unwrap()
    }

    fn pinch_frame() -> LandmarkFrame {
        frame((0.5, 0.5), (0.501, 0.5), (0.7, 0.7))
    }

    fn open_frame() -> LandmarkFrame {
        frame((0.5, 0.5), (0.7, 0.7), (0.8, 0.8))
    }

    fn middle_pinch_frame() -> LandmarkFrame {
        frame((0.5, 0.5), (0.7, 0.7), (0.501, 0.5))
    }

    fn fsm() -> GestureFsm {
        let mapper = CursorMapper::new(
            ActiveRegion::new(0.25, 0.20, 0.75, 0.80).unwrap(),
            MonitorRouter::single_screen(1920, 1080).unwrap(),
        );
        GestureFsm::new(GestureTuning::default(), LandmarkRoles::default(), mapper).unwrap()
    }

    #[test]
    fn test_starts_idle() {
        assert_eq!(fsm().state(), FsmState::Idle);
    }

    #[test]
    fn test_idle_on_no_landmarks() {
        let mut fsm = fsm();
        assert_eq!(fsm.process(None, 0), PointerEvent::Idle);
        assert_eq!(fsm.state(), FsmState::Idle);
    }

    #[test]
    fn test_move_when_pinching_index() {
        let mut fsm = fsm();
        let event = fsm.process(Some(&pinch_frame()), 0);
        assert!(matches!(event, PointerEvent::Move { .. }));
        assert_eq!(fsm.state(), FsmState::FirstPinch);
    }

    #[test]
    fn test_open_hand_stays_idle() {
        let mut fsm = fsm();
        assert_eq!(fsm.process(Some(&open_frame()), 0), PointerEvent::Idle);
        assert_eq!(fsm.state(), FsmState::Idle);
    }

    #[test]
    fn test_right_click_on_middle_pinch() {
        let mut fsm = fsm();
        let event = fsm.process(Some(&middle_pinch_frame()), 0);
        assert!(matches!(event, PointerEvent::RightClick { .. }));
        assert_eq!(fsm.state(), FsmState::Idle);
    }

    #[test]
    fn test_right_click_overrides_drag() {
        let mut fsm = fsm();
        fsm.process(Some(&pinch_frame()), 0);
        fsm.process(Some(&open_frame()), 33);
        let event = fsm.process(Some(&pinch_frame()), 66);
        assert!(matches!(event, PointerEvent::DragStart { .. }));

        let event = fsm.process(Some(&middle_pinch_frame()), 99);
        assert!(matches!(event, PointerEvent::RightClick { .. }));
        assert_eq!(fsm.state(), FsmState::Idle);
    }

    #[test]
    fn test_degenerate_reference_distance_is_idle() {
        let mut fsm = fsm();
        fsm.process(Some(&pinch_frame()), 0);

        // Wrist and knuckle coincide: d_ref == 0.
        let mut points = vec![Landmark::new(0.0, 0.0, 0.0); LANDMARK_COUNT];
        points[roles::WRIST] = Landmark::new(0.5, 0.5, 0.0);
        points[roles::INDEX_MCP] = Landmark::new(0.5, 0.5, 0.0);
        let degenerate = LandmarkFrame::from_points(points).unwrap();

        assert_eq!(fsm.process(Some(&degenerate), 33), PointerEvent::Idle);
        // State is unchanged, not reset.
        assert_eq!(fsm.state(), FsmState::FirstPinch);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mapper = CursorMapper::new(
            ActiveRegion::new(0.25, 0.20, 0.75, 0.80).unwrap(),
            MonitorRouter::single_screen(1920, 1080).unwrap(),
        );

        let bad_roles = LandmarkRoles {
            ring_tip: 21,
            ..LandmarkRoles::default()
        };
        assert!(GestureFsm::new(GestureTuning::default(), bad_roles, mapper.clone()).is_err());

        let bad_alpha = GestureTuning {
            ema_alpha: 0.0,
            ..GestureTuning::default()
        };
        assert!(GestureFsm::new(bad_alpha, LandmarkRoles::default(), mapper.clone()).is_err());

        let bad_threshold = GestureTuning {
            pinch_threshold: -0.1,
            ..GestureTuning::default()
        };
        assert!(GestureFsm::new(bad_threshold, LandmarkRoles::default(), mapper).is_err());
    }

    #[test]
    fn test_smoothing_seeds_on_first_frame() {
        let mut fsm = fsm();
        // First frame: no smoothing history, position is the raw midpoint
        // of thumb and index mapped through the region.
        let event = fsm.process(Some(&pinch_frame()), 0);
        let (x, y) = event.position().unwrap();
        // Midpoint (0.5005, 0.5) in region (0.25..0.75, 0.20..0.80).
        assert_eq!(y, 540);
        assert!((x - 962).abs() <= 1);
    }
}
