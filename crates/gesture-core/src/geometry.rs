//! Frame-level gesture geometry.
//!
//! Everything here is a pure function over one landmark frame. The key
//! idea is the dynamic reference distance: all pinch thresholds scale with
//! the wrist-to-knuckle distance of the CURRENT frame, making detection
//! invariant to how far the hand is from the camera. The reference is
//! re-derived every frame and never cached.

use handpilot_gesture_model::landmark::LandmarkFrame;
use handpilot_gesture_model::region::NormPoint;

/// Reference distance for the frame: wrist to index knuckle.
///
/// Returns 0.0 when the two points coincide (degenerate pose). Callers must
/// treat 0.0 as "cannot evaluate thresholds this frame".
pub fn reference_distance(frame: &LandmarkFrame, wrist: usize, index_knuckle: usize) -> f64 {
    frame.point(wrist).distance_to(&frame.point(index_knuckle))
}

/// Check whether two fingertips are pinching.
///
/// A pinch activates when their distance is strictly below
/// `threshold * d_ref`.
pub fn is_pinching(
    frame: &LandmarkFrame,
    tip_a: usize,
    tip_b: usize,
    d_ref: f64,
    threshold: f64,
) -> bool {
    frame.point(tip_a).distance_to(&frame.point(tip_b)) < threshold * d_ref
}

/// Exponential moving average smoothing, per axis.
///
/// `s' = alpha * current + (1 - alpha) * previous`. With `alpha = 1.0` the
/// result is `current` unchanged; with `alpha = 0.0` it is `previous`.
/// Lower alpha = more lag, more jitter rejection.
pub fn ema_smooth(current: NormPoint, previous: NormPoint, alpha: f64) -> NormPoint {
    NormPoint {
        x: alpha * current.x + (1.0 - alpha) * previous.x,
        y: alpha * current.y + (1.0 - alpha) * previous.y,
    }
}

/// Raw midpoint of two fingertips, the cursor anchor for pinch gestures.
pub fn pinch_midpoint(frame: &LandmarkFrame, tip_a: usize, tip_b: usize) -> NormPoint {
    NormPoint::midpoint(&frame.point(tip_a), &frame.point(tip_b))
}
