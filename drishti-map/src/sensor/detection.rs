//! Ground-truth detection along the current beam.

use crate::core::{AngularWindow, CellIndex};
use crate::grid::{RelativeField, WorldGrid};

use super::SensorParams;
use super::window::SectorWindow;

/// Outcome of one beam query against the ground-truth map.
///
/// A reading with no obstacle in range is not an error: `hit` is false and
/// `measured_range` equals the sensor's max range.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionResult {
    /// Measured range, clamped to max range (meters)
    pub measured_range: f32,
    /// Whether an obstacle within max range produced the reading
    pub hit: bool,
    /// Nearest obstacle cell inside the beam, if one was hit
    pub hit_cell: Option<CellIndex>,
    /// `|range - measured_range| <= dr/2`
    pub mask_range: Vec<bool>,
    /// Bearing inside the beam
    pub mask_bearing: Vec<bool>,
    /// `mask_range ∧ mask_bearing ∧ obstacle`
    pub mask_obstacle: Vec<bool>,
}

/// Nearest obstacle inside the bearing window: `(range, linear index)`.
///
/// Ties resolve to the lowest row-major index.
pub fn nearest_obstacle(
    field: &RelativeField,
    world: &WorldGrid,
    beam_bearing: f32,
    half_width: f32,
) -> Option<(f32, usize)> {
    let window = AngularWindow::new(beam_bearing, half_width);

    field
        .ranges()
        .iter()
        .zip(field.bearings())
        .zip(world.obstacles())
        .enumerate()
        .filter(|&(_, ((_, &b), &obstacle))| obstacle && window.contains(b))
        .map(|(i, ((&r, _), _))| (r, i))
        .fold(None, |best: Option<(f32, usize)>, (r, i)| match best {
            Some((best_r, _)) if best_r <= r => best,
            _ => Some((r, i)),
        })
}

/// Query the ground truth along `beam_bearing`.
///
/// The measured range is the minimum relative range over obstacle cells
/// inside the bearing window. If there is none, or it lies beyond
/// `max_range`, the reading is `max_range` with `hit == false`.
///
/// `field` must have been computed from `world`.
pub fn detect(
    field: &RelativeField,
    world: &WorldGrid,
    beam_bearing: f32,
    params: &SensorParams,
) -> DetectionResult {
    debug_assert_eq!(field.len(), world.len());

    let nearest = nearest_obstacle(field, world, beam_bearing, params.half_beam_width())
        .filter(|&(r, _)| r <= params.max_range);

    let (measured_range, hit_cell) = match nearest {
        Some((r, i)) => (r, Some(world.cell(i))),
        None => (params.max_range, None),
    };

    let window = SectorWindow::for_reading(measured_range, beam_bearing, params);
    let mask_range = window.range_mask(field);
    let mask_bearing = window.bearing_mask(field);
    let mask_obstacle = window
        .sector_mask(field)
        .into_iter()
        .zip(world.obstacles())
        .map(|(s, &o)| s && o)
        .collect();

    DetectionResult {
        measured_range,
        hit: hit_cell.is_some(),
        hit_cell,
        mask_range,
        mask_bearing,
        mask_obstacle,
    }
}
