//! Normalized-to-absolute cursor mapping.
//!
//! Composes the sensitivity controller with the monitor router: a smoothed
//! normalized position goes through the currently effective active region
//! (after sensitivity scaling), then onto the virtual desktop.

use handpilot_gesture_model::region::{ActiveRegion, NormPoint};
use handpilot_platform_core::MonitorRouter;

use crate::sensitivity::SensitivityController;

/// Projects smoothed hand positions to absolute output pixels.
#[derive(Debug, Clone)]
pub struct CursorMapper {
    sensitivity: SensitivityController,
    router: MonitorRouter,
}

impl CursorMapper {
    pub fn new(region: ActiveRegion, router: MonitorRouter) -> Self {
        Self {
            sensitivity: SensitivityController::new(region),
            router,
        }
    }

    /// Project a normalized point to absolute virtual-desktop pixels.
    pub fn project(&self, point: &NormPoint) -> (i32, i32) {
        self.router.map(point, &self.sensitivity.adjusted_region())
    }

    pub fn sensitivity(&self) -> &SensitivityController {
        &self.sensitivity
    }

    pub fn sensitivity_mut(&mut self) -> &mut SensitivityController {
        &mut self.sensitivity
    }

    pub fn router(&self) -> &MonitorRouter {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut MonitorRouter {
        &mut self.router
    }
}
