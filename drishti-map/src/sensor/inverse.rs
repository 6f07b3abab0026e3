//! Inverse sensor model: measured range to per-cell classification.
//!
//! Free space is every cell inside the beam nearer than the far edge of the
//! hit annulus. An obstacle inside that sector that the beam did not report
//! is still classified free; this approximation is kept as a known modeling
//! limitation.
//!
//! The agent's own cell sits at range 0 with bearing `atan2(0, 0) = 0`, so it
//! only gains free evidence on readings whose beam covers bearing 0.

use serde::{Deserialize, Serialize};

use crate::core::CellIndex;
use crate::grid::{BeliefParams, RelativeField};

use super::SensorParams;
use super::window::SectorWindow;

/// Per-cell label from one observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellClass {
    /// Outside the beam or beyond the reading
    #[default]
    Unknown,
    /// Inside the beam, nearer than the reading
    Free,
    /// Inside the hit annulus
    Occupied,
}

/// Classification of every cell for one reading.
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    rows: usize,
    cols: usize,
    classes: Vec<CellClass>,
    occupied: usize,
    free: usize,
}

impl Classification {
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

    /// Row-major labels.
    #[inline]
    pub fn classes(&self) -> &[CellClass] {
        &self.classes
    }

    /// Label of one cell.
    #[inline]
    pub fn class_at(&self, cell: CellIndex) -> CellClass {
        self.classes[cell.row * self.cols + cell.col]
    }

    /// Cells labelled occupied.
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Cells labelled free.
    #[inline]
    pub fn free_count(&self) -> usize {
        self.free
    }

    /// Cells labelled unknown.
    #[inline]
    pub fn unknown_count(&self) -> usize {
        self.classes.len() - self.occupied - self.free
    }

    /// Occupied mask.
    pub fn occupied_mask(&self) -> Vec<bool> {
        self.mask(CellClass::Occupied)
    }

    /// Free mask.
    pub fn free_mask(&self) -> Vec<bool> {
        self.mask(CellClass::Free)
    }

    fn mask(&self, class: CellClass) -> Vec<bool> {
        self.classes.iter().map(|&c| c == class).collect()
    }

    /// Soft occupancy estimate: `p_occupied`, `p_free`, or the 0.5 prior.
    pub fn soft_estimate(&self, params: &BeliefParams) -> Vec<f32> {
        self.classes.iter().map(|&c| params.soft_value(c)).collect()
    }
}

/// Classify every cell from a measured range and beam bearing.
///
/// - occupied: inside the annulus `measured_range ± dr/2` and the beam
/// - free: inside the beam, nearer than `measured_range + dr/2`, not occupied
/// - unknown: everything else
///
/// `hit` is the detection flag of the reading. With `max_range_is_miss`, a
/// reading without a hit has no occupied cells; its annulus counts as free.
/// A hit at exactly max range is still a hit.
pub fn classify(
    field: &RelativeField,
    measured_range: f32,
    hit: bool,
    beam_bearing: f32,
    params: &SensorParams,
) -> Classification {
    let window = SectorWindow::for_reading(measured_range, beam_bearing, params);
    let far_edge = window.far_edge();
    let miss = params.max_range_is_miss && !hit;

    let mut occupied = 0;
    let mut free = 0;
    let classes = field
        .ranges()
        .iter()
        .zip(field.bearings())
        .map(|(&r, &b)| {
            if !window.bearing_contains(b) {
                CellClass::Unknown
            } else if !miss && window.range_contains(r) {
                occupied += 1;
                CellClass::Occupied
            } else if r < far_edge || (miss && window.range_contains(r)) {
                free += 1;
                CellClass::Free
            } else {
                CellClass::Unknown
            }
        })
        .collect();

    Classification {
        rows: field.rows(),
        cols: field.cols(),
        classes,
        occupied,
        free,
    }
}
