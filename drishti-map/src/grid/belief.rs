//! Log-odds occupancy belief map.
//!
//! ```text
//! L(x) = log(P(x) / (1 - P(x)))
//! L_new = L_old + logit(clamp(p, ε, 1 - ε)) - logit(0.5)
//!
//! Thresholds (display only):
//!   L >=  threshold → Occupied
//!   L <= -threshold → Free
//!   else            → Unknown
//! ```
//!
//! The accumulated log-odds are not clamped. Each single update is bounded by
//! `|logit(ε)|`, so repeated agreeing observations keep moving a cell
//! monotonically. Log-odds are `f32`: once `|L|` passes about 2^27 (tens of
//! millions of agreeing observations of one cell) an increment of `logit(ε)`
//! rounds to no change and the value stops moving.

use serde::{Deserialize, Serialize};

use crate::core::{CellIndex, expit, logit};
use crate::error::{Error, Result};
use crate::sensor::{CellClass, Classification};

/// Prior occupancy probability of every cell. Soft estimates equal to the
/// prior leave a cell untouched.
pub const PRIOR: f32 = 0.5;

/// Belief update parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BeliefParams {
    /// Soft estimate for cells classified occupied
    pub p_occupied: f32,
    /// Soft estimate for cells classified free
    pub p_free: f32,
    /// Soft estimates are clamped to [ε, 1 - ε] before logit
    pub epsilon: f32,
    /// Log-odds magnitude for [`CellState`] thresholds
    pub state_threshold: f32,
}

impl Default for BeliefParams {
    fn default() -> Self {
        Self {
            p_occupied: 1.0,
            p_free: 0.0,
            epsilon: 1e-3,
            state_threshold: 2.0,
        }
    }
}

impl BeliefParams {
    /// Validate ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon > 0.0 && self.epsilon < PRIOR) {
            return Err(Error::InvalidParameter(format!(
                "epsilon must be in (0, 0.5), got {}",
                self.epsilon
            )));
        }
        if !(self.p_occupied > PRIOR && self.p_occupied <= 1.0) {
            return Err(Error::InvalidParameter(format!(
                "p_occupied must be in (0.5, 1], got {}",
                self.p_occupied
            )));
        }
        if !(self.p_free >= 0.0 && self.p_free < PRIOR) {
            return Err(Error::InvalidParameter(format!(
                "p_free must be in [0, 0.5), got {}",
                self.p_free
            )));
        }
        if !(self.state_threshold >= 0.0) {
            return Err(Error::InvalidParameter(format!(
                "state_threshold must be non-negative, got {}",
                self.state_threshold
            )));
        }
        Ok(())
    }

    /// Log-odds increment for one soft estimate.
    #[inline]
    pub fn increment(&self, p: f32) -> f32 {
        logit(p.clamp(self.epsilon, 1.0 - self.epsilon)) - logit(PRIOR)
    }

    /// Soft estimate for a classified cell.
    #[inline]
    pub fn soft_value(&self, class: CellClass) -> f32 {
        match class {
            CellClass::Occupied => self.p_occupied,
            CellClass::Free => self.p_free,
            CellClass::Unknown => PRIOR,
        }
    }
}

/// Thresholded view of a cell's belief.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Not enough evidence either way
    Unknown,
    /// Log-odds at or below `-state_threshold`
    Free,
    /// Log-odds at or above `state_threshold`
    Occupied,
}

/// Cell counts by [`CellState`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCounts {
    /// Cells between the thresholds
    pub unknown: usize,
    /// Cells believed free
    pub free: usize,
    /// Cells believed occupied
    pub occupied: usize,
}

impl StateCounts {
    /// Cells with a decided state.
    pub fn known(&self) -> usize {
        self.free + self.occupied
    }

    /// Total cells.
    pub fn total(&self) -> usize {
        self.unknown + self.known()
    }
}

/// Cells touched by one update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStats {
    /// Cells moved toward occupied
    pub occupied: usize,
    /// Cells moved toward free
    pub free: usize,
}

impl UpdateStats {
    /// Total cells modified.
    pub fn total(&self) -> usize {
        self.occupied + self.free
    }
}

/// Persistent occupancy belief, one log-odds value per cell.
#[derive(Clone, Debug)]
pub struct BeliefMap {
    rows: usize,
    cols: usize,
    log_odds: Vec<f32>,
    params: BeliefParams,
    occupied_increment: f32,
    free_increment: f32,
}

impl BeliefMap {
    /// Create a map at the prior (all log-odds zero).
    pub fn new(rows: usize, cols: usize, params: BeliefParams) -> Result<Self> {
        params.validate()?;
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidGrid(format!(
                "belief map must have at least one cell, got {}x{}",
                cols, rows
            )));
        }
        Ok(Self {
            rows,
            cols,
            log_odds: vec![0.0; rows * cols],
            params,
            occupied_increment: params.increment(params.p_occupied),
            free_increment: params.increment(params.p_free),
        })
    }

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
        self.log_odds.len()
    }

    /// Always false for a constructed map.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.log_odds.is_empty()
    }

    /// Update parameters.
    #[inline]
    pub fn params(&self) -> &BeliefParams {
        &self.params
    }

    /// Row-major log-odds.
    #[inline]
    pub fn log_odds(&self) -> &[f32] {
        &self.log_odds
    }

    /// Log-odds of one cell.
    #[inline]
    pub fn log_odds_at(&self, cell: CellIndex) -> f32 {
        self.log_odds[cell.row * self.cols + cell.col]
    }

    /// Fuse a whole-grid soft estimate.
    ///
    /// Cells equal to [`PRIOR`] are skipped, as are NaN entries.
    pub fn update(&mut self, soft: &[f32]) -> Result<UpdateStats> {
        if soft.len() != self.log_odds.len() {
            return Err(Error::InvalidGrid(format!(
                "soft estimate has {} cells, belief map has {}",
                soft.len(),
                self.log_odds.len()
            )));
        }

        let mut stats = UpdateStats::default();
        for (l, &p) in self.log_odds.iter_mut().zip(soft) {
            if p == PRIOR || p.is_nan() {
                continue;
            }
            *l += self.params.increment(p);
            if p > PRIOR {
                stats.occupied += 1;
            } else {
                stats.free += 1;
            }
        }
        Ok(stats)
    }

    /// Fuse a classification using the precomputed per-class increments.
    ///
    /// Equivalent to `update(&classification.soft_estimate(params))`.
    pub fn fuse(&mut self, classification: &Classification) -> Result<UpdateStats> {
        let classes = classification.classes();
        if classes.len() != self.log_odds.len() {
            return Err(Error::InvalidGrid(format!(
                "classification has {} cells, belief map has {}",
                classes.len(),
                self.log_odds.len()
            )));
        }
        Ok(self.fuse_classes(classes))
    }

    /// Caller guarantees `classes.len() == self.len()`.
    pub(crate) fn fuse_classes(&mut self, classes: &[CellClass]) -> UpdateStats {
        debug_assert_eq!(classes.len(), self.log_odds.len());

        let mut stats = UpdateStats::default();
        for (l, class) in self.log_odds.iter_mut().zip(classes) {
            match class {
                CellClass::Occupied => {
                    *l += self.occupied_increment;
                    stats.occupied += 1;
                }
                CellClass::Free => {
                    *l += self.free_increment;
                    stats.free += 1;
                }
                CellClass::Unknown => {}
            }
        }
        stats
    }

    /// Occupancy probability of one cell.
    #[inline]
    pub fn probability(&self, cell: CellIndex) -> f32 {
        expit(self.log_odds_at(cell))
    }

    /// Occupancy probability of every cell, row-major.
    pub fn probabilities(&self) -> Vec<f32> {
        self.log_odds.iter().map(|&l| expit(l)).collect()
    }

    /// Thresholded state of one cell.
    #[inline]
    pub fn cell_state(&self, cell: CellIndex) -> CellState {
        self.state_of(self.log_odds_at(cell))
    }

    #[inline]
    fn state_of(&self, l: f32) -> CellState {
        let t = self.params.state_threshold;
        if l >= t && l > 0.0 {
            CellState::Occupied
        } else if l <= -t && l < 0.0 {
            CellState::Free
        } else {
            CellState::Unknown
        }
    }

    /// Count cells by thresholded state.
    pub fn count_states(&self) -> StateCounts {
        let mut counts = StateCounts::default();
        for &l in &self.log_odds {
            match self.state_of(l) {
                CellState::Unknown => counts.unknown += 1,
                CellState::Free => counts.free += 1,
                CellState::Occupied => counts.occupied += 1,
            }
        }
        counts
    }

    /// Reset every cell to the prior.
    pub fn clear(&mut self) {
        self.log_odds.fill(0.0);
    }
}
