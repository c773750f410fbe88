//! Dispatch backend traits.
//!
//! The gesture core emits `PointerEvent`/`ScrollEvent` values; a backend
//! executes them against the OS. Concrete OS implementations live outside
//! this workspace — this module defines the contract plus a tracing-only
//! implementation used by replay and tests.
//!
//! Scroll is a separate, optional capability: a backend either exposes it
//! through `scroll_capability()` or it does not. Composition, not
//! inheritance.

use handpilot_common::error::HandpilotResult;
use handpilot_gesture_model::event::{PointerEvent, ScrollEvent};

/// Contract for executing pointer events against the OS.
pub trait PointerBackend {
    /// Move the cursor to an absolute pixel position.
    fn move_to(&mut self, x: i32, y: i32) -> HandpilotResult<()>;

    /// Perform a single left click at the position.
    fn click(&mut self, x: i32, y: i32) -> HandpilotResult<()>;

    /// Perform a right click at the position.
    fn right_click(&mut self, x: i32, y: i32) -> HandpilotResult<()>;

    /// Press and hold the left button — begin drag.
    fn press(&mut self, x: i32, y: i32) -> HandpilotResult<()>;

    /// Release the left button — end drag.
    fn release(&mut self, x: i32, y: i32) -> HandpilotResult<()>;

    /// Dispatch an event to the appropriate action. Single entry point
    /// called by the frame loop; `Idle` is a no-op.
    fn dispatch(&mut self, event: &PointerEvent) -> HandpilotResult<()> {
        match *event {
            PointerEvent::Idle => Ok(()),
            PointerEvent::Move { x, y } => self.move_to(x, y),
            PointerEvent::Click { x, y } => self.click(x, y),
            PointerEvent::RightClick { x, y } => self.right_click(x, y),
            PointerEvent::DragStart { x, y } => self.press(x, y),
            PointerEvent::DragEnd { x, y } => self.release(x, y),
        }
    }

    /// The scroll capability of this backend, if it has one.
    fn scroll_capability(&mut self) -> Option<&mut dyn ScrollBackend> {
        None
    }

    /// Backend name for logging.
    fn name(&self) -> &str;
}

/// Optional scroll capability.
pub trait ScrollBackend {
    /// Execute a scroll tick.
    fn scroll(&mut self, event: &ScrollEvent) -> HandpilotResult<()>;
}

/// A backend that logs every dispatch through `tracing` instead of touching
/// the OS. Used by session replay and tests.
#[derive(Debug, Default)]
pub struct TraceBackend {
    pointer_events: u64,
    scroll_events: u64,
}

impl TraceBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of non-idle pointer events dispatched.
    pub fn pointer_events(&self) -> u64 {
        self.pointer_events
    }

    /// Number of scroll events dispatched.
    pub fn scroll_events(&self) -> u64 {
        self.scroll_events
    }
}

impl PointerBackend for TraceBackend {
    fn move_to(&mut self, x: i32, y: i32) -> HandpilotResult<()> {
        self.pointer_events += 1;
        tracing::debug!(x, y, "move");
        Ok(())
    }

    fn click(&mut self, x: i32, y: i32) -> HandpilotResult<()> {
        self.pointer_events += 1;
        tracing::info!(x, y, "click");
        Ok(())
    }

    fn right_click(&mut self, x: i32, y: i32) -> HandpilotResult<()> {
        self.pointer_events += 1;
        tracing::info!(x, y, "right click");
        Ok(())
    }

    fn press(&mut self, x: i32, y: i32) -> HandpilotResult<()> {
        self.pointer_events += 1;
        tracing::info!(x, y, "drag start");
        Ok(())
    }

    fn release(&mut self, x: i32, y: i32) -> HandpilotResult<()> {
        self.pointer_events += 1;
        tracing::info!(x, y, "drag end");
        Ok(())
    }

    fn scroll_capability(&mut self) -> Option<&mut dyn ScrollBackend> {
        Some(self)
    }

    fn name(&self) -> &str {
        "trace"
    }
}

impl ScrollBackend for TraceBackend {
    fn scroll(&mut self, event: &ScrollEvent) -> HandpilotResult<()> {
        self.scroll_events += 1;
        tracing::info!(
            direction = ?event.direction,
            magnitude = event.magnitude,
            "scroll"
        );
        Ok(())
    }
}
