//! Static hand-pose classification.
//!
//! Recognizes whole-hand shapes beyond pinches, from per-finger extension
//! tests (fingertip above its PIP joint in normalized coordinates, where
//! y grows downward). Used for session inspection and coarse mode controls;
//! the pinch state machines do not depend on it.

use handpilot_gesture_model::landmark::{roles, LandmarkFrame};
use serde::{Deserialize, Serialize};

/// Recognized static hand poses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandPose {
    Unknown,
    /// All fingers extended.
    OpenHand,
    /// All fingers closed.
    Fist,
    /// Index + middle extended, others closed.
    Peace,
    /// Thumb out, all fingers closed.
    ThumbsUp,
}

impl HandPose {
    /// Stable name for logging and distribution counts.
    pub fn name(&self) -> &'static str {
        match self {
            HandPose::Unknown => "unknown",
            HandPose::OpenHand => "open_hand",
            HandPose::Fist => "fist",
            HandPose::Peace => "peace",
            HandPose::ThumbsUp => "thumbs_up",
        }
    }
}

/// Fingertip above its PIP joint means the finger is extended.
fn tip_above_pip(frame: &LandmarkFrame, tip: usize, pip: usize) -> bool {
    frame[tip].y < frame[pip].y
}

/// Classify the hand pose for one frame.
pub fn classify_pose(frame: &LandmarkFrame) -> HandPose {
    let index_ext = tip_above_pip(frame, roles::INDEX_TIP, roles::INDEX_PIP);
    let middle_ext = tip_above_pip(frame, roles::MIDDLE_TIP, roles::MIDDLE_PIP);
    let ring_ext = tip_above_pip(frame, roles::RING_TIP, roles::RING_PIP);
    let pinky_ext = tip_above_pip(frame, roles::PINKY_TIP, roles::PINKY_PIP);

    // Thumb extension is lateral: tip displaced from the MCP joint.
    let thumb_ext = (frame[roles::THUMB_TIP].x - frame[roles::THUMB_MCP].x).abs() > 0.04;

    let extended = [index_ext, middle_ext, ring_ext, pinky_ext];
    let num_extended = extended.iter().filter(|&&e| e).count();

    if num_extended == 0 && !thumb_ext {
        return HandPose::Fist;
    }
    if num_extended == 4 && thumb_ext {
        return HandPose::OpenHand;
    }
    if index_ext && middle_ext && !ring_ext && !pinky_ext && !thumb_ext {
        return HandPose::Peace;
    }
    if thumb_ext && num_extended == 0 {
        return HandPose::ThumbsUp;
    }

    HandPose::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use handpilot_gesture_model::landmark::{Landmark, LANDMARK_COUNT};

    struct PoseBuilder {
        points: Vec<Landmark>,
    }

    impl PoseBuilder {
        fn new() -> Self {
            // All joints at mid-height, thumb aligned with its MCP.
            let mut points = vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
            points[roles::THUMB_MCP] = Landmark::new(0.5, 0.5, 0.0);
            points[roles::THUMB_TIP] = Landmark::new(0.5, 0.5, 0.0);
            Self { points }
        }

        fn extend(mut self, tip: usize, pip: usize) -> Self {
            self.points[pip] = Landmark::new(0.5, 0.5, 0.0);
            self.points[tip] = Landmark::new(0.5, 0.3, 0.0);
            self
        }

        fn curl(mut self, tip: usize, pip: usize) -> Self {
            self.points[pip] = Landmark::new(0.5, 0.5, 0.0);
            self.points[tip] = Landmark::new(0.5, 0.6, 0.0);
            self
        }

        fn thumb_out(mut self) -> Self {
            self.points[roles::THUMB_TIP] = Landmark::new(0.6, 0.5, 0.0);
            self
        }

        fn build(self) -> LandmarkFrame {
            LandmarkFrame::from_points(self.points).unwrap()
        }
    }

    fn all_curled() -> PoseBuilder {
        PoseBuilder::new()
            .curl(roles::INDEX_TIP, roles::INDEX_PIP)
            .curl(roles::MIDDLE_TIP, roles::MIDDLE_PIP)
            .curl(roles::RING_TIP, roles::RING_PIP)
            .curl(roles::PINKY_TIP, roles::PINKY_PIP)
    }

    #[test]
    fn test_fist() {
        assert_eq!(classify_pose(&all_curled().build()), HandPose::Fist);
    }

    #[test]
    fn test_open_hand() {
        let frame = PoseBuilder::new()
            .extend(roles::INDEX_TIP, roles::INDEX_PIP)
            .extend(roles::MIDDLE_TIP, roles::MIDDLE_PIP)
            .extend(roles::RING_TIP, roles::RING_PIP)
            .extend(roles::PINKY_TIP, roles::PINKY_PIP)
            .thumb_out()
            .build();
        assert_eq!(classify_pose(&frame), HandPose::OpenHand);
    }

    #[test]
    fn test_peace() {
        let frame = PoseBuilder::new()
            .extend(roles::INDEX_TIP, roles::INDEX_PIP)
            .extend(roles::MIDDLE_TIP, roles::MIDDLE_PIP)
            .curl(roles::RING_TIP, roles::RING_PIP)
            .curl(roles::PINKY_TIP, roles::PINKY_PIP)
            .build();
        assert_eq!(classify_pose(&frame), HandPose::Peace);
    }

    #[test]
    fn test_thumbs_up() {
        assert_eq!(
            classify_pose(&all_curled().thumb_out().build()),
            HandPose::ThumbsUp
        );
    }

    #[test]
    fn test_partial_extension_is_unknown() {
        let frame = PoseBuilder::new()
            .extend(roles::INDEX_TIP, roles::INDEX_PIP)
            .curl(roles::MIDDLE_TIP, roles::MIDDLE_PIP)
            .extend(roles::RING_TIP, roles::RING_PIP)
            .curl(roles::PINKY_TIP, roles::PINKY_PIP)
            .build();
        assert_eq!(classify_pose(&frame), HandPose::Unknown);
    }
}
