//! Session recording format.
//!
//! A recorded session is a JSONL file that can reconstruct the exact
//! landmark-frame sequence seen live, for deterministic offline replay
//! through the gesture pipeline. The first line is a `#`-prefixed JSON
//! header; every following line is one captured frame:
//!
//! ```text
//! # {"schema_version":"1.0","epoch_wall":"...","capture_fps":30,...}
//! {"t":0,"landmarks":[{"x":0.5,"y":0.5,"z":0.0}, ...21 points...]}
//! {"t":33,"landmarks":null}
//! ```
//!
//! `"landmarks": null` records a frame where no hand was detected — a
//! first-class input, not an error.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::landmark::LandmarkFrame;
use crate::ModelError;

/// Session file header, written as a `#`-prefixed comment line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionHeader {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Wall-clock time at recording start (ISO 8601).
    pub epoch_wall: String,

    /// Nominal camera capture rate (Hz).
    pub capture_fps: u32,

    /// Output space dimensions at recording time (pixels).
    pub screen_width: u32,
    pub screen_height: u32,
}

impl SessionHeader {
    pub fn new(capture_fps: u32, screen_width: u32, screen_height: u32) -> Self {
        Self {
            schema_version: "1.0".to_string(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
            capture_fps,
            screen_width,
            screen_height,
        }
    }
}

/// One captured frame: a millisecond timestamp and the landmarks seen,
/// or `None` when no hand was detected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFrame {
    /// Monotonic milliseconds since recording start.
    #[serde(rename = "t")]
    pub t_ms: u64,

    /// Hand landmarks, absent when tracking was lost.
    pub landmarks: Option<LandmarkFrame>,
}

impl SessionFrame {
    pub fn new(t_ms: u64, landmarks: Option<LandmarkFrame>) -> Self {
        Self { t_ms, landmarks }
    }
}

/// A full recorded session: header plus ordered frames.
#[derive(Debug, Clone)]
pub struct Session {
    pub header: SessionHeader,
    pub frames: Vec<SessionFrame>,
}

impl Session {
    pub fn new(header: SessionHeader) -> Self {
        Self {
            header,
            frames: Vec::new(),
        }
    }

    /// Parse a session from JSONL content. The first non-empty line must be
    /// the `#`-prefixed header; blank lines and further comments are skipped.
    pub fn parse(content: &str) -> Result<Self, ModelError> {
        let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty());

        let header_line = lines.next().ok_or_else(|| ModelError::ValidationError {
            message: "empty session file".to_string(),
        })?;
        let header_json =
            header_line
                .strip_prefix('#')
                .ok_or_else(|| ModelError::ValidationError {
                    message: "session file must start with a '#' header line".to_string(),
                })?;
        let header: SessionHeader =
            serde_json::from_str(header_json.trim()).map_err(|e| ModelError::ValidationError {
                message: format!("invalid session header: {e}"),
            })?;

        let mut frames = Vec::new();
        for (i, line) in lines.enumerate() {
            if line.starts_with('#') {
                continue;
            }
            let frame: SessionFrame =
                serde_json::from_str(line).map_err(|e| ModelError::ValidationError {
                    message: format!("invalid frame on line {}: {e}", i + 2),
                })?;
            frames.push(frame);
        }

        Ok(Self { header, frames })
    }

    /// Serialize to JSONL format (header comment line + one frame per line).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        let mut output = String::new();
        output.push_str("# ");
        output.push_str(&serde_json::to_string(&self.header)?);
        output.push('\n');
        for frame in &self.frames {
            output.push_str(&serde_json::to_string(frame)?);
            output.push('\n');
        }
        Ok(output)
    }

    /// Load a session from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Save a session to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        let path = path.as_ref();
        let jsonl = self.to_jsonl().map_err(|e| ModelError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, jsonl).map_err(|e| ModelError::IoError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Duration from first to last frame, in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        match (self.frames.first(), self.frames.last()) {
            (Some(first), Some(last)) => last.t_ms.saturating_sub(first.t_ms),
            _ => 0,
        }
    }

    /// Number of frames where a hand was present.
    pub fn hand_frame_count(&self) -> usize {
        self.frames.iter().filter(|f| f.landmarks.is_some()).count()
    }
}
