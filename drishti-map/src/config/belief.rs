//! Belief map configuration section.

use serde::{Deserialize, Serialize};

use crate::grid::BeliefParams;

use super::defaults;

/// Inverse-model soft estimates and log-odds settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BeliefSection {
    /// Soft occupancy assigned to cells classified occupied
    #[serde(default = "defaults::p_occupied")]
    pub p_occupied: f32,

    /// Soft occupancy assigned to cells classified free
    #[serde(default = "defaults::p_free")]
    pub p_free: f32,

    /// Soft estimates are clamped to [epsilon, 1 - epsilon] before the logit
    #[serde(default = "defaults::epsilon")]
    pub epsilon: f32,

    /// |log-odds| beyond which a cell reads as occupied / free
    #[serde(default = "defaults::state_threshold")]
    pub state_threshold: f32,
}

impl Default for BeliefSection {
    fn default() -> Self {
        Self {
            p_occupied: defaults::p_occupied(),
            p_free: defaults::p_free(),
            epsilon: defaults::epsilon(),
            state_threshold: defaults::state_threshold(),
        }
    }
}

impl BeliefSection {
    /// Convert to runtime belief parameters
    pub fn to_belief_params(&self) -> BeliefParams {
        BeliefParams {
            p_occupied: self.p_occupied,
            p_free: self.p_free,
            epsilon: self.epsilon,
            state_threshold: self.state_threshold,
        }
    }
}
