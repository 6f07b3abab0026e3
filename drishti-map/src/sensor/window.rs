//! Annulus/sector masking shared by detection and classification.

use crate::core::AngularWindow;
use crate::grid::RelativeField;

use super::SensorParams;

/// Annular sector `range ± dr/2`, `bearing ± dphi/2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorWindow {
    /// Center range (meters)
    pub range: f32,
    /// Full radial width (meters)
    pub range_width: f32,
    /// Center bearing (radians)
    pub bearing: f32,
    /// Full angular width (radians)
    pub bearing_width: f32,
    angular: AngularWindow,
}

impl SectorWindow {
    /// Window with explicit widths.
    pub fn new(range: f32, range_width: f32, bearing: f32, bearing_width: f32) -> Self {
        Self {
            range,
            range_width,
            bearing,
            bearing_width,
            angular: AngularWindow::new(bearing, 0.5 * bearing_width),
        }
    }

    /// Window centered on a reading, widths taken from the sensor.
    pub fn for_reading(range: f32, bearing: f32, params: &SensorParams) -> Self {
        Self::new(
            range,
            params.range_resolution,
            bearing,
            params.angular_resolution,
        )
    }

    /// Far edge of the annulus, `range + dr/2`.
    #[inline]
    pub fn far_edge(&self) -> f32 {
        self.range + 0.5 * self.range_width
    }

    /// `|r - range| <= dr/2`
    #[inline]
    pub fn range_contains(&self, r: f32) -> bool {
        (r - self.range).abs() <= 0.5 * self.range_width
    }

    /// Bearing inside the sector, wraparound-aware.
    #[inline]
    pub fn bearing_contains(&self, b: f32) -> bool {
        self.angular.contains(b)
    }

    /// Annulus and sector together.
    #[inline]
    pub fn contains(&self, r: f32, b: f32) -> bool {
        self.range_contains(r) && self.bearing_contains(b)
    }

    /// Whole-field range mask.
    pub fn range_mask(&self, field: &RelativeField) -> Vec<bool> {
        field.ranges().iter().map(|&r| self.range_contains(r)).collect()
    }

    /// Whole-field bearing mask.
    pub fn bearing_mask(&self, field: &RelativeField) -> Vec<bool> {
        field.bearings().iter().map(|&b| self.bearing_contains(b)).collect()
    }

    /// Whole-field annulus/sector mask.
    pub fn sector_mask(&self, field: &RelativeField) -> Vec<bool> {
        field
            .ranges()
            .iter()
            .zip(field.bearings())
            .map(|(&r, &b)| self.contains(r, b))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PixelPoint, WorldPoint};
    use crate::grid::{WorldGrid, recompute_relative_field};
    use std::f32::consts::PI;

    #[test]
    fn test_range_band() {
        let w = SectorWindow::new(2.0, 0.2, 0.0, 0.1);
        assert!(w.range_contains(2.0));
        assert!(w.range_contains(1.95));
        assert!(!w.range_contains(2.2));
        assert!(!w.range_contains(1.8));
        assert!((w.far_edge() - 2.1).abs() < 1e-6);
    }

    #[test]
    fn test_bearing_wraps() {
        let w = SectorWindow::new(1.0, 0.1, PI, 0.2);
        assert!(w.bearing_contains(PI - 0.05));
        assert!(w.bearing_contains(-PI + 0.05));
        assert!(!w.bearing_contains(0.0));
        assert!(w.contains(1.0, -PI + 0.05));
        assert!(!w.contains(1.5, -PI + 0.05));
    }

    #[test]
    fn test_sector_mask_is_range_and_bearing() {
        let world =
            WorldGrid::with_scale(vec![false; 121], 11, 11, 1.0, PixelPoint::new(5.0, 5.0))
                .unwrap();
        let field = recompute_relative_field(&world, WorldPoint::ZERO);
        let w = SectorWindow::new(3.0, 0.1, 0.0, 0.1);

        let sector = w.sector_mask(&field);
        let range = w.range_mask(&field);
        let bearing = w.bearing_mask(&field);
        for i in 0..sector.len() {
            assert_eq!(sector[i], range[i] && bearing[i]);
        }
        // Only the cell three to the right of the center
        assert_eq!(sector.iter().filter(|&&m| m).count(), 1);
        assert!(sector[5 * 11 + 8]);
    }

    #[test]
    fn test_for_reading_uses_sensor_widths() {
        let params = SensorParams::default();
        let w = SectorWindow::for_reading(3.0, 0.5, &params);
        assert_eq!(w.range_width, params.range_resolution);
        assert_eq!(w.bearing_width, params.angular_resolution);
    }
}
