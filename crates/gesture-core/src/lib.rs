//! HandPilot Gesture Core
//!
//! Turns per-frame hand landmarks into discrete control events:
//! - **Geometry:** Dynamic-scale pinch detection and EMA smoothing
//! - **FSM:** The double-pinch state machine (move/click/drag/right-click)
//! - **Scroll:** Independent ring-pinch scroll detection, rate-limited
//! - **Sensitivity:** Precision-mode scaling of the active region
//! - **Mapper:** Sensitivity + multi-monitor projection in one step
//! - **Pose:** Static hand-shape classification
//!
//! This crate is pure computation — no I/O, no platform dependencies, no
//! internal clocks. All inputs are data (including timestamps); all outputs
//! are data.

pub mod fsm;
pub mod geometry;
pub mod mapper;
pub mod pose;
pub mod scroll;
pub mod sensitivity;

pub use fsm::{FsmState, GestureFsm};
pub use mapper::CursorMapper;
pub use pose::{classify_pose, HandPose};
pub use scroll::ScrollDetector;
pub use sensitivity::{SensitivityController, SensitivityMode};
