//! Hand landmark types.
//!
//! The vision pipeline delivers one frame of 21 normalized 3D points per
//! captured camera frame, indexed by anatomical role. This module owns the
//! frame container and the standard role indices; absence of a hand is
//! represented as `None` at the processing boundary, never as a sentinel
//! frame.

use serde::{Deserialize, Serialize};

use crate::region::NormPoint;

/// Number of landmarks in a full hand frame.
pub const LANDMARK_COUNT: usize = 21;

/// Standard role indices in the 21-point hand layout.
pub mod roles {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_PIP: usize = 6;
    pub const INDEX_DIP: usize = 7;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_DIP: usize = 11;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_PIP: usize = 14;
    pub const RING_DIP: usize = 15;
    pub const RING_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;
}

/// A single 3D hand landmark in normalized camera-frame coordinates.
///
/// `x` and `y` are nominally in `[0.0, 1.0]`; `z` is relative depth and is
/// carried for session fidelity but unused by the gesture core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The 2D projection used by all gesture math.
    pub fn point(&self) -> NormPoint {
        NormPoint::new(self.x, self.y)
    }
}

/// One frame of hand landmarks: exactly 21 points indexed by role.
///
/// Immutable once constructed; the gesture core only ever reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkFrame {
    points: [Landmark; LANDMARK_COUNT],
}

impl LandmarkFrame {
    /// Build a frame from exactly 21 landmarks.
    pub fn from_points(points: Vec<Landmark>) -> Result<Self, crate::ModelError> {
        let len = points.len();
        let points: [Landmark; LANDMARK_COUNT] =
            points
                .try_into()
                .map_err(|_| crate::ModelError::ValidationError {
                    message: format!("expected {LANDMARK_COUNT} landmarks, got {len}"),
                })?;
        Ok(Self { points })
    }

    /// Landmark at the given role index, if in range.
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.points.get(index)
    }

    /// 2D point at the given role index. Panics if out of range; role
    /// indices must be validated against `LANDMARK_COUNT` at construction
    /// of whatever consumes them.
    pub fn point(&self, index: usize) -> NormPoint {
        self.points[index].point()
    }

    /// All landmarks in role order.
    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }
}

impl std::ops::Index<usize> for LandmarkFrame {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Landmark {
        &self.points[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_frame() -> LandmarkFrame {
        LandmarkFrame::from_points(vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT]).unwrap()
    }

    #[test]
    fn test_frame_requires_21_points() {
        let short = vec![Landmark::new(0.0, 0.0, 0.0); 20];
        assert!(LandmarkFrame::from_points(short).is_err());

        let long = vec![Landmark::new(0.0, 0.0, 0.0); 22];
        assert!(LandmarkFrame::from_points(long).is_err());
    }

    #[test]
    fn test_role_indexing() {
        let frame = flat_frame();
        assert_eq!(frame[roles::WRIST].x, 0.5);
        assert_eq!(frame[roles::PINKY_TIP].y, 0.5);
        assert!(frame.get(LANDMARK_COUNT).is_none());
    }

    #[test]
    fn test_frame_serde_is_flat_array() {
        let frame = flat_frame();
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.starts_with('['));

        let parsed: LandmarkFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, frame);
    }

    #[test]
    fn test_landmark_point_projection() {
        let lm = Landmark::new(0.3, 0.7, -0.1);
        let p = lm.point();
        assert_eq!(p.x, 0.3);
        assert_eq!(p.y, 0.7);
    }
}
