//! Multi-monitor cursor routing.
//!
//! Maps a normalized hand position, through the active region, onto a
//! virtual desktop spanning one or more physical displays. A single-monitor
//! configuration degenerates to direct single-screen mapping.

use handpilot_common::error::{HandpilotError, HandpilotResult};
use handpilot_gesture_model::region::{ActiveRegion, NormPoint};

use crate::{MonitorInfo, VirtualDesktop};

/// Routes normalized positions onto the virtual desktop.
#[derive(Debug, Clone)]
pub struct MonitorRouter {
    monitors: Vec<MonitorInfo>,
    vdesk: VirtualDesktop,
}

impl MonitorRouter {
    /// Create a router over the given monitor set. At least one monitor is
    /// required; the virtual desktop bounds are computed once here.
    pub fn new(monitors: Vec<MonitorInfo>) -> HandpilotResult<Self> {
        let vdesk = VirtualDesktop::from_monitors(&monitors)
            .ok_or_else(|| HandpilotError::platform("monitor set must not be empty"))?;
        Ok(Self { monitors, vdesk })
    }

    /// Convenience constructor for a single primary screen at the origin.
    pub fn single_screen(width: u32, height: u32) -> HandpilotResult<Self> {
        Self::new(vec![MonitorInfo {
            primary: true,
            ..MonitorInfo::new("primary", 0, 0, width, height)
        }])
    }

    /// Replace the monitor set, recomputing the virtual desktop bounds.
    pub fn set_monitors(&mut self, monitors: Vec<MonitorInfo>) -> HandpilotResult<()> {
        let vdesk = VirtualDesktop::from_monitors(&monitors)
            .ok_or_else(|| HandpilotError::platform("monitor set must not be empty"))?;
        self.monitors = monitors;
        self.vdesk = vdesk;
        Ok(())
    }

    /// The current virtual desktop bounds.
    pub fn virtual_desktop(&self) -> VirtualDesktop {
        self.vdesk
    }

    pub fn monitor_count(&self) -> usize {
        self.monitors.len()
    }

    /// Map a normalized position through the active region onto absolute
    /// virtual-desktop pixels. The origin translation handles layouts where
    /// a secondary monitor sits left of or above the primary.
    pub fn map(&self, point: &NormPoint, region: &ActiveRegion) -> (i32, i32) {
        let (x, y) = region.map_to_pixels(point, self.vdesk.width, self.vdesk.height);
        (x + self.vdesk.x, y + self.vdesk.y)
    }

    /// The monitor containing an absolute pixel position, defaulting to the
    /// first configured monitor when none match (covers boundary rounding).
    pub fn which_monitor(&self, x: i32, y: i32) -> &MonitorInfo {
        self.monitors
            .iter()
            .find(|m| m.contains(x, y))
            .unwrap_or(&self.monitors[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dual_monitor_router() -> MonitorRouter {
        MonitorRouter::new(vec![
            MonitorInfo {
                primary: true,
                ..MonitorInfo::new("left", 0, 0, 1920, 1080)
            },
            MonitorInfo::new("right", 1920, 0, 1920, 1080),
        ])
        .unwrap()
    }

    fn full_region() -> ActiveRegion {
        ActiveRegion::new(0.0, 0.0, 1.0, 1.0).unwrap()
    }

    #[test]
    fn test_requires_at_least_one_monitor() {
        assert!(MonitorRouter::new(vec![]).is_err());
    }

    #[test]
    fn test_dual_monitor_virtual_resolution() {
        let router = dual_monitor_router();
        assert_eq!(router.virtual_desktop().resolution(), (3840, 1080));
        assert_eq!(router.monitor_count(), 2);
    }

    #[test]
    fn test_center_maps_to_virtual_center() {
        let router = dual_monitor_router();
        let (x, y) = router.map(&NormPoint::new(0.5, 0.5), &full_region());
        assert_eq!(x, 1920);
        assert_eq!(y, 540);
    }

    #[test]
    fn test_which_monitor_resolves_by_position() {
        let router = dual_monitor_router();
        assert_eq!(router.which_monitor(100, 100).name, "left");
        assert_eq!(router.which_monitor(2000, 100).name, "right");
    }

    #[test]
    fn test_which_monitor_defaults_to_first() {
        let router = dual_monitor_router();
        assert_eq!(router.which_monitor(-50, -50).name, "left");
    }

    #[test]
    fn test_negative_origin_translation() {
        let router = MonitorRouter::new(vec![
            MonitorInfo::new("left", -1920, 0, 1920, 1080),
            MonitorInfo {
                primary: true,
                ..MonitorInfo::new("main", 0, 0, 1920, 1080)
            },
        ])
        .unwrap();

        // Leftmost edge of the region maps to the leftmost virtual pixel.
        let (x, _) = router.map(&NormPoint::new(0.0, 0.5), &full_region());
        assert_eq!(x, -1920);
    }

    #[test]
    fn test_single_screen_degenerates_to_direct_mapping() {
        let router = MonitorRouter::single_screen(1920, 1080).unwrap();
        let region = ActiveRegion::new(0.25, 0.20, 0.75, 0.80).unwrap();
        let (x, y) = router.map(&NormPoint::new(0.5, 0.5), &region);
        assert_eq!((x, y), (960, 540));
    }

    #[test]
    fn test_set_monitors_recomputes_bounds() {
        let mut router = MonitorRouter::single_screen(1920, 1080).unwrap();
        router
            .set_monitors(vec![
                MonitorInfo::new("a", 0, 0, 1920, 1080),
                MonitorInfo::new("b", 1920, 0, 1920, 1080),
            ])
            .unwrap();
        assert_eq!(router.virtual_desktop().resolution(), (3840, 1080));
        assert!(router.set_monitors(vec![]).is_err());
    }
}
