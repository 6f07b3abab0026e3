//! Main DrishtiConfig and conversion methods.

use std::f32::consts::TAU;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::agent::AgentParams;
use crate::grid::BeliefParams;
use crate::sensor::SensorParams;

use super::agent::AgentSection;
use super::belief::BeliefSection;
use super::defaults;
use super::error::ConfigLoadError;
use super::map::MapSection;
use super::sensor::SensorSection;

/// Tick loop settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimSection {
    /// Fixed tick interval (seconds)
    #[serde(default = "defaults::dt")]
    pub dt: f32,
}

impl Default for SimSection {
    fn default() -> Self {
        Self { dt: defaults::dt() }
    }
}

/// Full drishti-map configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct DrishtiConfig {
    /// Ground-truth map settings
    #[serde(default)]
    pub map: MapSection,

    /// Range beam settings
    #[serde(default)]
    pub sensor: SensorSection,

    /// Agent motion settings
    #[serde(default)]
    pub agent: AgentSection,

    /// Belief map settings
    #[serde(default)]
    pub belief: BeliefSection,

    /// Tick loop settings
    #[serde(default)]
    pub sim: SimSection,
}

impl DrishtiConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let invalid = |field, reason: &str| {
            Err(ConfigLoadError::Invalid {
                field,
                reason: reason.to_string(),
            })
        };

        if !(self.map.extent_m[0] > 0.0 && self.map.extent_m[1] > 0.0) {
            return invalid("map.extent_m", "both extents must be positive");
        }
        if !(self.map.scale_tolerance > 0.0) {
            return invalid("map.scale_tolerance", "must be positive");
        }
        if !(self.sensor.max_range > 0.0) {
            return invalid("sensor.max_range", "must be positive");
        }
        if !(self.sensor.range_resolution > 0.0) {
            return invalid("sensor.range_resolution", "must be positive");
        }
        if !(self.sensor.angular_resolution > 0.0 && self.sensor.angular_resolution <= TAU) {
            return invalid("sensor.angular_resolution", "must be in (0, 2π]");
        }
        if !self.sensor.revolutions_per_second.is_finite() {
            return invalid("sensor.revolutions_per_second", "must be finite");
        }
        if !(self.agent.speed_px_per_s >= 0.0) {
            return invalid("agent.speed_px_per_s", "must be non-negative");
        }
        if !(self.agent.boost_multiplier > 0.0) {
            return invalid("agent.boost_multiplier", "must be positive");
        }
        if !(self.belief.p_occupied > 0.5 && self.belief.p_occupied <= 1.0) {
            return invalid("belief.p_occupied", "must be in (0.5, 1]");
        }
        if !(self.belief.p_free >= 0.0 && self.belief.p_free < 0.5) {
            return invalid("belief.p_free", "must be in [0, 0.5)");
        }
        if !(self.belief.epsilon > 0.0 && self.belief.epsilon < 0.5) {
            return invalid("belief.epsilon", "must be in (0, 0.5)");
        }
        if !(self.belief.state_threshold >= 0.0) {
            return invalid("belief.state_threshold", "must be non-negative");
        }
        if !(self.sim.dt > 0.0) {
            return invalid("sim.dt", "must be positive");
        }
        Ok(())
    }

    /// Runtime sensor parameters
    pub fn sensor_params(&self) -> SensorParams {
        self.sensor.to_sensor_params()
    }

    /// Runtime belief parameters
    pub fn belief_params(&self) -> BeliefParams {
        self.belief.to_belief_params()
    }

    /// Runtime agent parameters
    pub fn agent_params(&self) -> AgentParams {
        AgentParams {
            speed_px_per_s: self.agent.speed_px_per_s,
            boost_multiplier: self.agent.boost_multiplier,
            angular_speed: self.sensor.angular_speed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config() {
        let config = DrishtiConfig::default();
        assert_eq!(config.sensor.max_range, 10.0);
        assert_eq!(config.sensor.range_resolution, 0.10);
        assert_relative_eq!(config.sensor.angular_resolution, TAU / 100.0);
        assert_eq!(config.map.extent_m, [20.0, 20.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = DrishtiConfig::default();
        let yaml = config.to_yaml().unwrap();
        let parsed = DrishtiConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.sensor.max_range, config.sensor.max_range);
        assert_eq!(parsed.belief.epsilon, config.belief.epsilon);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "sensor:\n  max_range: 5.0\nagent:\n  start_px: [10.0, 12.5]\n";
        let config = DrishtiConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.sensor.max_range, 5.0);
        assert_eq!(config.sensor.range_resolution, 0.10);
        assert_eq!(config.agent.start_px, Some([10.0, 12.5]));
        assert_eq!(config.belief.p_occupied, 1.0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = DrishtiConfig::from_yaml("belief:\n  epsilon: 0.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Invalid {
                field: "belief.epsilon",
                ..
            }
        ));

        let err = DrishtiConfig::from_yaml("sensor:\n  max_range: -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Invalid { .. }));
    }

    #[test]
    fn test_parse_error() {
        let err = DrishtiConfig::from_yaml("sensor: [not, a, map]").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn test_agent_params() {
        let config = DrishtiConfig::default();
        let params = config.agent_params();
        assert_relative_eq!(params.angular_speed, 0.1 * TAU);
        assert_eq!(params.boost_multiplier, 3.0);
    }
}
