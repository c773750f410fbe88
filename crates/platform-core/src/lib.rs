//! HandPilot platform core contracts.
//!
//! This crate contains cross-platform display data structures, the
//! multi-monitor router, and the dispatch backend traits used by the
//! gesture pipeline without coupling to a concrete OS backend.

pub mod backend;
pub mod router;

pub use backend::*;
pub use router::*;

use serde::{Deserialize, Serialize};

/// Information about a connected monitor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitorInfo {
    /// Monitor name/identifier.
    pub name: String,
    /// Resolution in physical pixels.
    pub width: u32,
    pub height: u32,
    /// Position in the virtual desktop (pixels).
    pub x: i32,
    pub y: i32,
    /// Whether this monitor is primary.
    pub primary: bool,
}

impl MonitorInfo {
    /// Convenience constructor for a monitor at the given origin.
    pub fn new(name: impl Into<String>, x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            x,
            y,
            primary: false,
        }
    }

    /// Check whether an absolute pixel position falls on this monitor.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && x < self.x + self.width as i32
            && y >= self.y
            && y < self.y + self.height as i32
    }
}

/// The bounding rectangle spanning all configured monitors.
///
/// The origin may be negative when a secondary monitor sits left of or
/// above the primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualDesktop {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl VirtualDesktop {
    /// Compute the bounding box over a non-empty monitor set.
    pub fn from_monitors(monitors: &[MonitorInfo]) -> Option<Self> {
        let min_x = monitors.iter().map(|m| m.x).min()?;
        let min_y = monitors.iter().map(|m| m.y).min()?;
        let max_x = monitors.iter().map(|m| m.x + m.width as i32).max()?;
        let max_y = monitors.iter().map(|m| m.y + m.height as i32).max()?;

        Some(Self {
            x: min_x,
            y: min_y,
            width: (max_x - min_x).max(1) as u32,
            height: (max_y - min_y).max(1) as u32,
        })
    }

    /// Total pixel dimensions of the virtual desktop.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
