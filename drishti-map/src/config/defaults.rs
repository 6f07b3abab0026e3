//! Default value functions for serde deserialization.

use std::f32::consts::TAU;

pub fn extent_m() -> [f32; 2] {
    [20.0, 20.0]
}

pub fn scale_tolerance() -> f32 {
    0.02
}

pub fn max_range() -> f32 {
    10.0
}

pub fn range_resolution() -> f32 {
    0.10
}

pub fn angular_resolution() -> f32 {
    TAU / 100.0
}

pub fn revolutions_per_second() -> f32 {
    0.1
}

pub fn speed_px_per_s() -> f32 {
    60.0
}

pub fn boost_multiplier() -> f32 {
    3.0
}

pub fn p_occupied() -> f32 {
    1.0
}

pub fn p_free() -> f32 {
    0.0
}

pub fn epsilon() -> f32 {
    1e-3
}

pub fn state_threshold() -> f32 {
    2.0
}

pub fn dt() -> f32 {
    1.0 / 30.0
}
