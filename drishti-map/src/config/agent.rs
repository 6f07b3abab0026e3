//! Agent configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Agent motion settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AgentSection {
    /// Translation speed for a unit movement command (pixels per second)
    #[serde(default = "defaults::speed_px_per_s")]
    pub speed_px_per_s: f32,

    /// Speed multiplier applied when a command requests boost
    #[serde(default = "defaults::boost_multiplier")]
    pub boost_multiplier: f32,

    /// Starting position in pixels (None = map center)
    #[serde(default)]
    pub start_px: Option<[f32; 2]>,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            speed_px_per_s: defaults::speed_px_per_s(),
            boost_multiplier: defaults::boost_multiplier(),
            start_px: None,
        }
    }
}
