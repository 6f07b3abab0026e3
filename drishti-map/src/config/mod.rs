//! Unified configuration loading for drishti-map.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti_map::config::DrishtiConfig;
//!
//! // Load from default path (configs/config.yaml), or built-in defaults
//! let config = DrishtiConfig::load_default()?;
//!
//! let sensor = config.sensor_params();
//! let belief = config.belief_params();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`MapSection`] | Metric extent of the map image, scale tolerance |
//! | [`SensorSection`] | Max range, range/angle windows, rotation rate |
//! | [`AgentSection`] | Translation speed, boost, start position |
//! | [`BeliefSection`] | Soft estimates, logit clamp, display thresholds |
//! | [`SimSection`] | Tick interval |
//!
//! ## Example YAML
//!
//! ```yaml
//! map:
//!   extent_m: [20.0, 20.0]
//! sensor:
//!   max_range: 10.0
//!   range_resolution: 0.1
//!   revolutions_per_second: 0.1
//! belief:
//!   epsilon: 0.001
//! sim:
//!   dt: 0.0333
//! ```

mod agent;
mod belief;
mod defaults;
mod drishti;
mod error;
mod map;
mod sensor;

pub use drishti::{DrishtiConfig, SimSection};
pub use error::ConfigLoadError;

pub use agent::AgentSection;
pub use belief::BeliefSection;
pub use map::MapSection;
pub use sensor::SensorSection;
