//! Sensor configuration section.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::sensor::SensorParams;

use super::defaults;

/// Range beam settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SensorSection {
    /// Maximum detection range (meters)
    #[serde(default = "defaults::max_range")]
    pub max_range: f32,

    /// Radial width of the detection window (meters)
    #[serde(default = "defaults::range_resolution")]
    pub range_resolution: f32,

    /// Angular width of the beam (radians)
    #[serde(default = "defaults::angular_resolution")]
    pub angular_resolution: f32,

    /// Beam rotation rate (revolutions per second)
    #[serde(default = "defaults::revolutions_per_second")]
    pub revolutions_per_second: f32,

    /// Treat readings with no detection as pure free-space evidence
    #[serde(default)]
    pub max_range_is_miss: bool,
}

impl Default for SensorSection {
    fn default() -> Self {
        Self {
            max_range: defaults::max_range(),
            range_resolution: defaults::range_resolution(),
            angular_resolution: defaults::angular_resolution(),
            revolutions_per_second: defaults::revolutions_per_second(),
            max_range_is_miss: false,
        }
    }
}

impl SensorSection {
    /// Convert to runtime sensor parameters
    pub fn to_sensor_params(&self) -> SensorParams {
        SensorParams {
            max_range: self.max_range,
            range_resolution: self.range_resolution,
            angular_resolution: self.angular_resolution,
            max_range_is_miss: self.max_range_is_miss,
        }
    }

    /// Beam angular speed in rad/s
    pub fn angular_speed(&self) -> f32 {
        self.revolutions_per_second * TAU
    }
}
