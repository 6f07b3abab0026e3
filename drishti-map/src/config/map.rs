//! Map configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Ground-truth map settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapSection {
    /// Physical extent covered by the map image, [width, height] in meters
    #[serde(default = "defaults::extent_m")]
    pub extent_m: [f32; 2],

    /// Allowed normalized difference between the x and y pixel scales
    #[serde(default = "defaults::scale_tolerance")]
    pub scale_tolerance: f32,
}

impl Default for MapSection {
    fn default() -> Self {
        Self {
            extent_m: defaults::extent_m(),
            scale_tolerance: defaults::scale_tolerance(),
        }
    }
}
