//! Control event types emitted by the gesture core.
//!
//! The primary state machine emits exactly one `PointerEvent` per input
//! frame; the scroll detector emits at most one `ScrollEvent`. Both are
//! plain data handed to an external dispatch backend — this crate knows
//! nothing about how they are executed.
//!
//! Pointer coordinates are absolute pixels in the output space (a single
//! screen or the virtual desktop), which may be negative when a secondary
//! monitor sits left of or above the primary.

use serde::{Deserialize, Serialize};

/// Discrete pointer event produced by the primary gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    /// No action — hand open, absent, or degenerate frame.
    Idle,

    /// Move the cursor to an absolute pixel position.
    Move { x: i32, y: i32 },

    /// Single left click.
    Click { x: i32, y: i32 },

    /// Single right click.
    RightClick { x: i32, y: i32 },

    /// Press and hold the left button — begin drag.
    DragStart { x: i32, y: i32 },

    /// Release the left button — end drag.
    DragEnd { x: i32, y: i32 },
}

impl PointerEvent {
    pub fn move_to(x: i32, y: i32) -> Self {
        Self::Move { x, y }
    }

    pub fn click(x: i32, y: i32) -> Self {
        Self::Click { x, y }
    }

    pub fn right_click(x: i32, y: i32) -> Self {
        Self::RightClick { x, y }
    }

    pub fn drag_start(x: i32, y: i32) -> Self {
        Self::DragStart { x, y }
    }

    pub fn drag_end(x: i32, y: i32) -> Self {
        Self::DragEnd { x, y }
    }

    /// Extract the pixel position if this event carries one.
    pub fn position(&self) -> Option<(i32, i32)> {
        match *self {
            PointerEvent::Idle => None,
            PointerEvent::Move { x, y }
            | PointerEvent::Click { x, y }
            | PointerEvent::RightClick { x, y }
            | PointerEvent::DragStart { x, y }
            | PointerEvent::DragEnd { x, y } => Some((x, y)),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, PointerEvent::Idle)
    }

    /// Stable name for logging and history counts.
    pub fn kind_name(&self) -> &'static str {
        match self {
            PointerEvent::Idle => "idle",
            PointerEvent::Move { .. } => "move",
            PointerEvent::Click { .. } => "click",
            PointerEvent::RightClick { .. } => "right_click",
            PointerEvent::DragStart { .. } => "drag_start",
            PointerEvent::DragEnd { .. } => "drag_end",
        }
    }
}

/// Scroll direction. The camera y-axis grows downward, so a hand moving up
/// produces `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    Up,
    Down,
}

/// A scroll tick with direction and whole-tick magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollEvent {
    pub direction: ScrollDirection,
    pub magnitude: u32,
}

impl ScrollEvent {
    pub fn new(direction: ScrollDirection, magnitude: u32) -> Self {
        Self {
            direction,
            magnitude: magnitude.max(1),
        }
    }
}
