//! Pixel/world frame transform and the per-cell relative field.

use crate::core::{CellIndex, PixelPoint, WorldPoint, wrap_to_pi};

use super::world::WorldGrid;

/// Convert a pixel position to world meters.
///
/// Subtracts the map-center pixel, flips the vertical axis (image rows grow
/// downward, world y grows upward) and divides by the scale.
#[inline]
pub fn pixel_to_world(position_px: PixelPoint, center_px: PixelPoint, pixels_per_meter: f32) -> WorldPoint {
    WorldPoint::new(
        (position_px.x - center_px.x) / pixels_per_meter,
        -(position_px.y - center_px.y) / pixels_per_meter,
    )
}

/// Inverse of [`pixel_to_world`].
#[inline]
pub fn world_to_pixel(position_m: WorldPoint, center_px: PixelPoint, pixels_per_meter: f32) -> PixelPoint {
    PixelPoint::new(
        position_m.x * pixels_per_meter + center_px.x,
        -position_m.y * pixels_per_meter + center_px.y,
    )
}

/// Range and bearing of every cell as seen from one agent position.
#[derive(Clone, Debug, PartialEq)]
pub struct RelativeField {
    rows: usize,
    cols: usize,
    origin: WorldPoint,
    range: Vec<f32>,
    bearing: Vec<f32>,
}

impl RelativeField {
    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Always false for a computed field.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Agent position the field was computed from.
    #[inline]
    pub fn origin(&self) -> WorldPoint {
        self.origin
    }

    /// Row-major ranges in meters.
    #[inline]
    pub fn ranges(&self) -> &[f32] {
        &self.range
    }

    /// Row-major bearings in radians, wrapped to (-π, π].
    #[inline]
    pub fn bearings(&self) -> &[f32] {
        &self.bearing
    }

    /// Range to one cell.
    #[inline]
    pub fn range_at(&self, cell: CellIndex) -> f32 {
        self.range[cell.row * self.cols + cell.col]
    }

    /// Bearing to one cell.
    #[inline]
    pub fn bearing_at(&self, cell: CellIndex) -> f32 {
        self.bearing[cell.row * self.cols + cell.col]
    }
}

/// Recompute range and bearing of every cell relative to `agent_position_m`.
///
/// Pure function of its inputs: calling it twice with the same grid and
/// position yields bit-identical fields.
pub fn recompute_relative_field(world: &WorldGrid, agent_position_m: WorldPoint) -> RelativeField {
    let n = world.len();
    let mut range = Vec::with_capacity(n);
    let mut bearing = Vec::with_capacity(n);

    for &p in world.world_xy() {
        let d = p - agent_position_m;
        range.push(d.norm());
        // atan2 can return exactly -π, which the wrapped interval excludes
        bearing.push(wrap_to_pi(d.y.atan2(d.x)));
    }

    RelativeField {
        rows: world.rows(),
        cols: world.cols(),
        origin: agent_position_m,
        range,
        bearing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn grid_5x5() -> WorldGrid {
        WorldGrid::from_extent(vec![false; 25], 5, 5, [5.0, 5.0], 0.02).unwrap()
    }

    #[test]
    fn test_pixel_to_world() {
        let center = PixelPoint::new(100.0, 100.0);
        let p = pixel_to_world(PixelPoint::new(110.0, 80.0), center, 10.0);
        assert_eq!(p, WorldPoint::new(1.0, 2.0));
        assert_eq!(pixel_to_world(center, center, 10.0), WorldPoint::ZERO);
    }

    #[test]
    fn test_world_to_pixel_inverse() {
        let center = PixelPoint::new(64.0, 48.0);
        let px = PixelPoint::new(70.5, 12.25);
        let back = world_to_pixel(pixel_to_world(px, center, 8.0), center, 8.0);
        assert_relative_eq!(back.x, px.x, epsilon = 1e-4);
        assert_relative_eq!(back.y, px.y, epsilon = 1e-4);
    }

    #[test]
    fn test_relative_field_from_center() {
        let grid = grid_5x5();
        let field = recompute_relative_field(&grid, WorldPoint::ZERO);
        assert_eq!(field.range_at(CellIndex::new(2, 2)), 0.0);
        // One cell right is +x
        assert_eq!(field.range_at(CellIndex::new(2, 3)), 1.0);
        assert_eq!(field.bearing_at(CellIndex::new(2, 3)), 0.0);
        // One row up is +y
        assert_relative_eq!(field.bearing_at(CellIndex::new(1, 2)), FRAC_PI_2);
        // Up-left diagonal
        assert_relative_eq!(field.bearing_at(CellIndex::new(1, 1)), 3.0 * FRAC_PI_4);
        assert_relative_eq!(field.range_at(CellIndex::new(0, 0)), 8.0f32.sqrt());
    }

    #[test]
    fn test_relative_field_bearing_never_minus_pi() {
        let grid = grid_5x5();
        // Agent right of a row of cells: every cell to the left sits at ±π
        let field = recompute_relative_field(&grid, WorldPoint::new(2.5, 0.0));
        for &b in field.bearings() {
            assert!(b > -PI && b <= PI);
        }
        assert_eq!(field.bearing_at(CellIndex::new(2, 0)), PI);
    }

    #[test]
    fn test_recompute_is_deterministic() {
        let grid = grid_5x5();
        let pos = WorldPoint::new(0.37, -1.21);
        let a = recompute_relative_field(&grid, pos);
        let b = recompute_relative_field(&grid, pos);
        assert_eq!(a, b);
        assert_eq!(a.origin(), pos);
        assert_eq!(a.len(), 25);
    }
}
