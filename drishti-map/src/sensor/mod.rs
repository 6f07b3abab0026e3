//! Single-beam range sensor model.
//!
//! Two operations share one masking primitive ([`SectorWindow`]):
//!
//! - [`detect`]: queries the ground-truth obstacle grid along the beam and
//!   produces a measured range. Only this operation sees ground truth.
//! - [`classify`]: the inverse model. From the measured range and beam
//!   bearing alone, labels each cell occupied, free or unknown.
//!
//! ```text
//!                    bearing window (± dphi/2)
//!                 ╱─────────────────────────╲
//!   agent ●──────[ free .................. ][ occupied ]   unknown
//!                 0                 r - dr/2   r   r + dr/2
//! ```

mod detection;
mod inverse;
mod window;

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use detection::{DetectionResult, detect, nearest_obstacle};
pub use inverse::{CellClass, Classification, classify};
pub use window::SectorWindow;

/// Range sensor parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorParams {
    /// Maximum range (meters). Readings beyond this are clamped.
    pub max_range: f32,
    /// Radial thickness of the hit annulus, `dr` (meters)
    pub range_resolution: f32,
    /// Full angular width of the beam, `dphi` (radians)
    pub angular_resolution: f32,
    /// Treat a max-range reading as a miss: its far annulus is classified
    /// free instead of occupied
    pub max_range_is_miss: bool,
}

impl Default for SensorParams {
    fn default() -> Self {
        Self {
            max_range: 10.0,
            range_resolution: 0.10,
            angular_resolution: TAU / 100.0,
            max_range_is_miss: false,
        }
    }
}

impl SensorParams {
    /// Validate ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.max_range > 0.0 && self.max_range.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "max_range must be positive, got {}",
                self.max_range
            )));
        }
        if !(self.range_resolution > 0.0 && self.range_resolution.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "range_resolution must be positive, got {}",
                self.range_resolution
            )));
        }
        if !(self.angular_resolution > 0.0 && self.angular_resolution <= TAU) {
            return Err(Error::InvalidParameter(format!(
                "angular_resolution must be in (0, 2π], got {}",
                self.angular_resolution
            )));
        }
        Ok(())
    }

    /// Half of `angular_resolution`.
    #[inline]
    pub fn half_beam_width(&self) -> f32 {
        0.5 * self.angular_resolution
    }
}
