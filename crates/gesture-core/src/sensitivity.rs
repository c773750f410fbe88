//! Cursor sensitivity control.
//!
//! Sensitivity is applied by rescaling the active region around its center:
//! a wider region means the same hand movement covers less output distance
//! (slower, more precise cursor), a narrower region means a faster cursor.
//! The controller is a pure read accessor over its base region — it never
//! mutates the base configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use handpilot_gesture_model::region::ActiveRegion;

/// Named precision modes with fixed region scale factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityMode {
    /// Wider region, small movements stay precise.
    Slow,
    #[default]
    Normal,
    /// Narrower region, large cursor travel with less arm fatigue.
    Fast,
}

impl SensitivityMode {
    /// Region scale factor bound to the mode.
    pub fn scale(self) -> f64 {
        match self {
            SensitivityMode::Slow => 1.8,
            SensitivityMode::Normal => 1.0,
            SensitivityMode::Fast => 0.6,
        }
    }
}

impl FromStr for SensitivityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slow" => Ok(SensitivityMode::Slow),
            "normal" => Ok(SensitivityMode::Normal),
            "fast" => Ok(SensitivityMode::Fast),
            other => Err(format!("unknown sensitivity mode '{other}'")),
        }
    }
}

/// Bounds for the custom sensitivity multiplier.
const CUSTOM_SCALE_MIN: f64 = 0.1;
const CUSTOM_SCALE_MAX: f64 = 5.0;

/// Adjusts the effective active region to control cursor sensitivity.
#[derive(Debug, Clone)]
pub struct SensitivityController {
    base: ActiveRegion,
    mode: SensitivityMode,
    custom_scale: f64,
}

impl SensitivityController {
    /// Create a controller over a base region, starting at Normal.
    pub fn new(base: ActiveRegion) -> Self {
        Self {
            base,
            mode: SensitivityMode::Normal,
            custom_scale: 1.0,
        }
    }

    pub fn mode(&self) -> SensitivityMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SensitivityMode) {
        self.mode = mode;
    }

    /// Set a custom multiplier, clamped to `[0.1, 5.0]`. Overrides the
    /// named mode back to Normal; the two compose by multiplication.
    pub fn set_custom_scale(&mut self, scale: f64) {
        self.custom_scale = scale.clamp(CUSTOM_SCALE_MIN, CUSTOM_SCALE_MAX);
        self.mode = SensitivityMode::Normal;
    }

    /// Effective scale: mode scale times custom multiplier.
    pub fn scale(&self) -> f64 {
        self.mode.scale() * self.custom_scale
    }

    /// The base region scaled around its center by the effective scale,
    /// clamped to `[0, 1]` on every edge.
    pub fn adjusted_region(&self) -> ActiveRegion {
        self.base.scaled_about_center(self.scale())
    }

    /// The unscaled base region.
    pub fn base_region(&self) -> ActiveRegion {
        self.base
    }
}
