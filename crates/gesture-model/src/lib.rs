//! HandPilot Gesture Model
//!
//! Defines the core data contracts for HandPilot:
//! - **Landmarks:** Normalized 21-point hand frames from the vision pipeline
//! - **Events:** Discrete control events (move, click, drag, scroll)
//! - **Region:** The normalized active region and pixel mapping
//! - **Session:** JSONL recording format for offline replay
//! - **History:** Rolling event log with per-type counts
//!
//! All hand coordinates are normalized to `[0.0, 1.0]` range relative to the
//! camera frame so recordings survive resolution changes across sessions.

pub mod event;
pub mod history;
pub mod landmark;
pub mod region;
pub mod session;

pub use event::*;
pub use history::*;
pub use landmark::*;
pub use region::*;
pub use session::*;

use std::path::PathBuf;

/// Errors produced when constructing or loading model data.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("I/O error at {}: {}", .path.display(), .source)]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {}: {}", .path.display(), .source)]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid model data: {message}")]
    ValidationError { message: String },
}
