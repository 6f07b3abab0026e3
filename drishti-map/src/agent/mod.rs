//! Agent pose and one-tick motion.
//!
//! The agent has two motion states:
//!
//! ```text
//!          apply_command(non-zero)
//!   Idle ───────────────────────────▶ Moving
//!    ▲                                  │
//!    └──────────── advance(dt) ─────────┘
//! ```
//!
//! `advance` integrates velocity once and zeroes it, so a command moves the
//! agent for exactly one tick. The beam bearing advances every tick
//! regardless of motion state.

mod command;

use std::f32::consts::TAU;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, wrap_to_pi};

pub use command::MovementCommand;

/// Agent motion parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentParams {
    /// Translation speed (pixels per second)
    pub speed_px_per_s: f32,
    /// Speed multiplier when a command asks for boost
    pub boost_multiplier: f32,
    /// Beam rotation rate (radians per second, CCW positive)
    pub angular_speed: f32,
}

impl Default for AgentParams {
    fn default() -> Self {
        Self {
            speed_px_per_s: 60.0,
            boost_multiplier: 3.0,
            angular_speed: 0.1 * TAU,
        }
    }
}

/// Pose of the agent and its beam.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct AgentPose {
    /// Position in map pixels (fractional)
    pub position_px: PixelPoint,
    /// Velocity for the next integration, zeroed afterwards
    pub velocity_px_per_s: [f32; 2],
    /// Beam bearing, wrapped to (-π, π]
    pub beam_bearing_rad: f32,
    /// Constant beam rotation rate
    pub beam_angular_speed_rad_per_s: f32,
}

impl AgentPose {
    /// Stationary pose with the beam pointing along +X.
    pub fn new(position_px: PixelPoint, angular_speed: f32) -> Self {
        Self {
            position_px,
            velocity_px_per_s: [0.0, 0.0],
            beam_bearing_rad: 0.0,
            beam_angular_speed_rad_per_s: angular_speed,
        }
    }
}

/// Motion state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MotionState {
    /// No pending velocity
    #[default]
    Idle,
    /// Velocity set for the next `advance`
    Moving,
}

/// Mobile agent carrying the rotating beam.
#[derive(Clone, Debug)]
pub struct Agent {
    pose: AgentPose,
    params: AgentParams,
    state: MotionState,
    /// Inclusive upper pixel bounds; the lower bound is 0.
    bounds_px: Option<PixelPoint>,
}

impl Agent {
    /// Create an idle agent. `params.angular_speed` is ignored in favor of
    /// the pose's rotation rate.
    pub fn new(pose: AgentPose, params: AgentParams) -> Self {
        Self {
            pose,
            params,
            state: MotionState::Idle,
            bounds_px: None,
        }
    }

    /// Clamp the position to `[0, max_px]` after every integration.
    pub fn with_bounds(mut self, max_px: PixelPoint) -> Self {
        self.bounds_px = Some(max_px);
        self
    }

    /// Current pose.
    #[inline]
    pub fn pose(&self) -> &AgentPose {
        &self.pose
    }

    /// Motion parameters.
    #[inline]
    pub fn params(&self) -> &AgentParams {
        &self.params
    }

    /// Current motion state.
    #[inline]
    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Position in pixels.
    #[inline]
    pub fn position_px(&self) -> PixelPoint {
        self.pose.position_px
    }

    /// Beam bearing in radians.
    #[inline]
    pub fn beam_bearing(&self) -> f32 {
        self.pose.beam_bearing_rad
    }

    /// Set the velocity for the next tick from a command.
    ///
    /// A zero direction leaves the agent idle.
    pub fn apply_command(&mut self, command: MovementCommand) -> MotionState {
        match command.unit_direction() {
            Some([ux, uy]) => {
                let boost = if command.boost {
                    self.params.boost_multiplier
                } else {
                    1.0
                };
                let speed = self.params.speed_px_per_s * boost;
                self.pose.velocity_px_per_s = [ux * speed, uy * speed];
                self.state = MotionState::Moving;
            }
            None => {
                self.pose.velocity_px_per_s = [0.0, 0.0];
                self.state = MotionState::Idle;
            }
        }
        self.state
    }

    /// Integrate one tick: move by velocity, zero it, rotate the beam.
    pub fn advance(&mut self, dt: f32) {
        let moved = self.pose.position_px.advanced(self.pose.velocity_px_per_s, dt);
        self.pose.position_px = self.clamp_to_bounds(moved);
        self.pose.velocity_px_per_s = [0.0, 0.0];
        self.state = MotionState::Idle;

        self.pose.beam_bearing_rad = wrap_to_pi(
            self.pose.beam_bearing_rad + self.pose.beam_angular_speed_rad_per_s * dt,
        );
    }

    fn clamp_to_bounds(&self, p: PixelPoint) -> PixelPoint {
        let Some(max) = self.bounds_px else {
            return p;
        };
        let clamped = PixelPoint::new(p.x.clamp(0.0, max.x), p.y.clamp(0.0, max.y));
        if clamped != p {
            warn!(
                "[Agent] position ({:.1}, {:.1}) outside map, clamped to ({:.1}, {:.1})",
                p.x, p.y, clamped.x, clamped.y
            );
        }
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    fn agent() -> Agent {
        let params = AgentParams::default();
        Agent::new(
            AgentPose::new(PixelPoint::new(50.0, 50.0), params.angular_speed),
            params,
        )
    }

    #[test]
    fn test_one_tick_motion() {
        let mut a = agent();
        assert_eq!(a.apply_command(MovementCommand::new([1.0, 0.0], false)), MotionState::Moving);
        a.advance(0.5);
        assert_eq!(a.position_px(), PixelPoint::new(80.0, 50.0));
        assert_eq!(a.pose().velocity_px_per_s, [0.0, 0.0]);
        assert_eq!(a.state(), MotionState::Idle);

        // No new command: position holds
        a.advance(0.5);
        assert_eq!(a.position_px(), PixelPoint::new(80.0, 50.0));
    }

    #[test]
    fn test_boost() {
        let mut a = agent();
        a.apply_command(MovementCommand::new([0.0, -2.0], true));
        a.advance(0.1);
        assert_relative_eq!(a.position_px().y, 50.0 - 18.0, epsilon = 1e-4);
    }

    #[test]
    fn test_zero_direction_stays_idle() {
        let mut a = agent();
        assert_eq!(a.apply_command(MovementCommand::default()), MotionState::Idle);
        a.advance(1.0);
        assert_eq!(a.position_px(), PixelPoint::new(50.0, 50.0));
    }

    #[test]
    fn test_beam_rotates_unconditionally() {
        let mut a = agent();
        let omega = a.pose().beam_angular_speed_rad_per_s;
        a.advance(1.0);
        assert_relative_eq!(a.beam_bearing(), omega);
        a.apply_command(MovementCommand::new([1.0, 1.0], false));
        a.advance(1.0);
        assert_relative_eq!(a.beam_bearing(), 2.0 * omega, epsilon = 1e-6);
    }

    #[test]
    fn test_beam_wraps() {
        let mut a = Agent::new(
            AgentPose::new(PixelPoint::new(0.0, 0.0), PI),
            AgentParams::default(),
        );
        for _ in 0..7 {
            a.advance(0.75);
            let b = a.beam_bearing();
            assert!(b > -PI && b <= PI);
        }
    }

    #[test]
    fn test_clamped_to_bounds() {
        let mut a = agent().with_bounds(PixelPoint::new(99.0, 99.0));
        a.apply_command(MovementCommand::new([-1.0, 0.0], true));
        a.advance(10.0);
        assert_eq!(a.position_px(), PixelPoint::new(0.0, 50.0));
    }
}
