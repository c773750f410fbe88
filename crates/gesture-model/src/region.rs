//! Active region and normalized point types.
//!
//! The active region is the rectangle of normalized hand motion that maps
//! onto the full output coordinate space. All coordinates here are
//! normalized: `(0.0, 0.0)` is top-left, `(1.0, 1.0)` is bottom-right of the
//! camera frame.

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// A 2D normalized point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormPoint {
    pub x: f64,
    pub y: f64,
}

impl NormPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &NormPoint) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Arithmetic midpoint of two points.
    pub fn midpoint(a: &NormPoint, b: &NormPoint) -> NormPoint {
        NormPoint {
            x: (a.x + b.x) / 2.0,
            y: (a.y + b.y) / 2.0,
        }
    }
}

/// The normalized input rectangle that maps onto the output space.
///
/// Structurally invalid bounds (inverted or zero-extent) are rejected at
/// construction, so downstream mapping never has to guard against division
/// by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRegion", into = "RawRegion")]
pub struct ActiveRegion {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

/// Unvalidated serde representation of an `ActiveRegion`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawRegion {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl TryFrom<RawRegion> for ActiveRegion {
    type Error = ModelError;

    fn try_from(raw: RawRegion) -> Result<Self, ModelError> {
        ActiveRegion::new(raw.x_min, raw.y_min, raw.x_max, raw.y_max)
    }
}

impl From<ActiveRegion> for RawRegion {
    fn from(region: ActiveRegion) -> Self {
        Self {
            x_min: region.x_min,
            y_min: region.y_min,
            x_max: region.x_max,
            y_max: region.y_max,
        }
    }
}

impl ActiveRegion {
    /// Create a region, rejecting inverted or zero-extent bounds.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self, ModelError> {
        let finite = [x_min, y_min, x_max, y_max].iter().all(|v| v.is_finite());
        if !finite || x_min >= x_max || y_min >= y_max {
            return Err(ModelError::ValidationError {
                message: format!(
                    "active region bounds must satisfy x_min < x_max and y_min < y_max, \
                     got ({x_min}, {y_min}, {x_max}, {y_max})"
                ),
            });
        }
        Ok(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Width of the region (always positive).
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the region (always positive).
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Center point of the region.
    pub fn center(&self) -> NormPoint {
        NormPoint::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Check if a normalized point is within the region.
    pub fn contains(&self, point: &NormPoint) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }

    /// Clamp a point into the region.
    pub fn clamp(&self, point: &NormPoint) -> NormPoint {
        NormPoint {
            x: point.x.clamp(self.x_min, self.x_max),
            y: point.y.clamp(self.y_min, self.y_max),
        }
    }

    /// Scale the region around its own center, clamping every edge to
    /// `[0, 1]`. A larger scale widens the region (slower, more precise
    /// cursor); a smaller scale narrows it.
    ///
    /// Falls back to `self` if the scaled bounds would degenerate (only
    /// possible when the base region lies outside `[0, 1]`).
    pub fn scaled_about_center(&self, scale: f64) -> ActiveRegion {
        let center = self.center();
        let half_w = (self.width() / 2.0) * scale;
        let half_h = (self.height() / 2.0) * scale;

        let x_min = (center.x - half_w).max(0.0);
        let y_min = (center.y - half_h).max(0.0);
        let x_max = (center.x + half_w).min(1.0);
        let y_max = (center.y + half_h).min(1.0);

        if x_min >= x_max || y_min >= y_max {
            return *self;
        }
        ActiveRegion {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Map a normalized point through this region onto a pixel space.
    ///
    /// The point is clamped into the region, then linearly rescaled from the
    /// region's span to `[0, width) x [0, height)`. The top edge maps to
    /// `size - 1` so output pixels never leave the target space.
    pub fn map_to_pixels(&self, point: &NormPoint, width: u32, height: u32) -> (i32, i32) {
        let clamped = self.clamp(point);
        let px = ((clamped.x - self.x_min) / self.width()) * width as f64;
        let py = ((clamped.y - self.y_min) / self.height()) * height as f64;
        let x = (px as i32).min(width.saturating_sub(1) as i32).max(0);
        let y = (py as i32).min(height.saturating_sub(1) as i32).max(0);
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn default_region() -> ActiveRegion {
        ActiveRegion::new(0.25, 0.20, 0.75, 0.80).unwrap()
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        assert!(ActiveRegion::new(0.75, 0.20, 0.25, 0.80).is_err());
        assert!(ActiveRegion::new(0.25, 0.80, 0.75, 0.20).is_err());
    }

    #[test]
    fn test_rejects_zero_extent() {
        assert!(ActiveRegion::new(0.5, 0.2, 0.5, 0.8).is_err());
        assert!(ActiveRegion::new(0.2, 0.5, 0.8, 0.5).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(ActiveRegion::new(f64::NAN, 0.0, 1.0, 1.0).is_err());
        assert!(ActiveRegion::new(0.0, 0.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_center_maps_to_output_center() {
        let region = default_region();
        let (x, y) = region.map_to_pixels(&NormPoint::new(0.50, 0.50), 1920, 1080);
        assert_eq!(x, 960);
        assert_eq!(y, 540);
    }

    #[test]
    fn test_outside_point_clamps_to_edge() {
        let region = default_region();
        let (x, y) = region.map_to_pixels(&NormPoint::new(0.0, 0.0), 1920, 1080);
        assert_eq!((x, y), (0, 0));

        let (x, y) = region.map_to_pixels(&NormPoint::new(1.0, 1.0), 1920, 1080);
        assert_eq!((x, y), (1919, 1079));
    }

    #[test]
    fn test_mapping_is_idempotent_under_reclamping() {
        let region = default_region();
        let point = NormPoint::new(0.6, 0.4);
        let clamped = region.clamp(&point);
        assert_eq!(
            region.map_to_pixels(&point, 1920, 1080),
            region.map_to_pixels(&clamped, 1920, 1080),
        );
    }

    #[test]
    fn test_midpoint_and_distance() {
        let a = NormPoint::new(0.0, 0.0);
        let b = NormPoint::new(4.0, 4.0);
        let mid = NormPoint::midpoint(&a, &b);
        assert_eq!(mid, NormPoint::new(2.0, 2.0));

        let c = NormPoint::new(3.0, 4.0);
        assert!((a.distance_to(&c) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_serde_rejects_invalid_region() {
        let json = r#"{"x_min":0.9,"y_min":0.2,"x_max":0.1,"y_max":0.8}"#;
        assert!(serde_json::from_str::<ActiveRegion>(json).is_err());

        let json = r#"{"x_min":0.25,"y_min":0.2,"x_max":0.75,"y_max":0.8}"#;
        let region: ActiveRegion = serde_json::from_str(json).unwrap();
        assert!((region.width() - 0.5).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_mapped_pixels_stay_in_output_space(
            px in -1.0f64..2.0,
            py in -1.0f64..2.0,
        ) {
            let region = default_region();
            let (x, y) = region.map_to_pixels(&NormPoint::new(px, py), 1920, 1080);
            prop_assert!((0..1920).contains(&x));
            prop_assert!((0..1080).contains(&y));
        }

        #[test]
        fn prop_clamped_points_are_contained(
            px in -1.0f64..2.0,
            py in -1.0f64..2.0,
        ) {
            let region = default_region();
            let clamped = region.clamp(&NormPoint::new(px, py));
            prop_assert!(region.contains(&clamped));
        }
    }
}
