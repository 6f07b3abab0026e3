//! Tick-driven mapping session.
//!
//! Each tick runs, in order:
//!
//! 1. recompute the relative field at the current position
//! 2. detect along the current beam bearing (ground truth)
//! 3. classify from the measured range alone
//! 4. fuse the classification into the belief map
//! 5. apply the movement command and advance the agent by `dt`
//!
//! Sensing therefore always reflects the pose the previous tick ended in.

use log::{debug, info, warn};

use crate::agent::{Agent, AgentParams, AgentPose, MovementCommand};
use crate::config::DrishtiConfig;
use crate::core::{PixelPoint, WorldPoint};
use crate::error::{Error, Result};
use crate::grid::{
    BeliefMap, BeliefParams, RelativeField, UpdateStats, WorldGrid, check_scale,
    recompute_relative_field,
};
use crate::sensor::{Classification, SensorParams, classify, detect};

/// Outcome of one tick.
#[derive(Clone, Debug)]
pub struct TickResult {
    /// Measured range (meters), max range when nothing was hit
    pub measured_range: f32,
    /// Whether an obstacle produced the reading
    pub hit: bool,
    /// Beam bearing the reading was taken at
    pub beam_bearing: f32,
    /// Agent world position the reading was taken from
    pub position_m: WorldPoint,
    /// Per-cell labels fused this tick
    pub classification: Classification,
    /// Cells moved by the fusion
    pub stats: UpdateStats,
}

/// Create the initial agent pose and relative field.
///
/// Fails when `pixels_per_meter` disagrees with the grid's scale beyond the
/// grid's tolerance, or when the start position or rotation rate is not
/// usable.
pub fn initialize(
    world: &WorldGrid,
    initial_position_px: PixelPoint,
    angular_speed: f32,
    pixels_per_meter: f32,
) -> Result<(AgentPose, RelativeField)> {
    check_scale(world.pixels_per_meter(), pixels_per_meter, world.scale_tolerance())?;

    if !world.contains_px(initial_position_px) {
        return Err(Error::InvalidParameter(format!(
            "start position ({}, {}) is outside the {}x{} map",
            initial_position_px.x,
            initial_position_px.y,
            world.cols(),
            world.rows()
        )));
    }
    if !angular_speed.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "angular speed must be finite, got {}",
            angular_speed
        )));
    }

    let pose = AgentPose::new(initial_position_px, angular_speed);
    let field = recompute_relative_field(world, world.pixel_to_world(initial_position_px));
    Ok((pose, field))
}

/// Run one tick against caller-owned state.
///
/// Returns an error when the belief map does not match the grid.
pub fn tick(
    agent: &mut Agent,
    world: &WorldGrid,
    belief: &mut BeliefMap,
    dt: f32,
    command: Option<MovementCommand>,
    params: &SensorParams,
) -> Result<TickResult> {
    if belief.rows() != world.rows() || belief.cols() != world.cols() {
        return Err(Error::InvalidGrid(format!(
            "belief map is {}x{}, world grid is {}x{}",
            belief.cols(),
            belief.rows(),
            world.cols(),
            world.rows()
        )));
    }
    let (result, _) = step(agent, world, belief, dt, command, params);
    Ok(result)
}

fn step(
    agent: &mut Agent,
    world: &WorldGrid,
    belief: &mut BeliefMap,
    dt: f32,
    command: Option<MovementCommand>,
    params: &SensorParams,
) -> (TickResult, RelativeField) {
    let position_m = world.pixel_to_world(agent.position_px());
    let field = recompute_relative_field(world, position_m);

    let bearing = agent.beam_bearing();
    let detection = detect(&field, world, bearing, params);
    let classification = classify(
        &field,
        detection.measured_range,
        detection.hit,
        bearing,
        params,
    );
    let stats = belief.fuse_classes(classification.classes());

    debug!(
        "[Session] bearing={:.3} rad range={:.3} m hit={} occ={} free={}",
        bearing, detection.measured_range, detection.hit, stats.occupied, stats.free
    );

    if let Some(command) = command {
        agent.apply_command(command);
    }
    let dt = if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        warn!("[Session] invalid dt {}, skipping motion", dt);
        0.0
    };
    agent.advance(dt);

    let result = TickResult {
        measured_range: detection.measured_range,
        hit: detection.hit,
        beam_bearing: bearing,
        position_m,
        classification,
        stats,
    };
    (result, field)
}

/// Owns the world grid, agent, belief map and latest relative field.
#[derive(Debug)]
pub struct Session {
    world: WorldGrid,
    agent: Agent,
    belief: BeliefMap,
    sensor: SensorParams,
    field: RelativeField,
    ticks: u64,
}

impl Session {
    /// Create a session with the agent at `start_px`.
    pub fn new(
        world: WorldGrid,
        start_px: PixelPoint,
        sensor: SensorParams,
        agent_params: AgentParams,
        belief_params: BeliefParams,
    ) -> Result<Self> {
        sensor.validate()?;
        let (pose, field) = initialize(
            &world,
            start_px,
            agent_params.angular_speed,
            world.pixels_per_meter(),
        )?;
        let agent = Agent::new(pose, agent_params).with_bounds(world.max_px());
        let belief = BeliefMap::new(world.rows(), world.cols(), belief_params)?;

        info!(
            "[Session] {}x{} map, start ({:.1}, {:.1}) px, max range {} m, beam {:.4} rad",
            world.cols(),
            world.rows(),
            start_px.x,
            start_px.y,
            sensor.max_range,
            sensor.angular_resolution
        );

        Ok(Self {
            world,
            agent,
            belief,
            sensor,
            field,
            ticks: 0,
        })
    }

    /// Create a session from configuration. The agent starts at
    /// `agent.start_px`, or the map center when unset.
    pub fn from_config(world: WorldGrid, config: &DrishtiConfig) -> Result<Self> {
        let start_px = config
            .agent
            .start_px
            .map(PixelPoint::from)
            .unwrap_or_else(|| world.center_px());
        Self::new(
            world,
            start_px,
            config.sensor_params(),
            config.agent_params(),
            config.belief_params(),
        )
    }

    /// Advance the session by one tick.
    pub fn tick(&mut self, dt: f32, command: Option<MovementCommand>) -> TickResult {
        let (result, field) = step(
            &mut self.agent,
            &self.world,
            &mut self.belief,
            dt,
            command,
            &self.sensor,
        );
        self.field = field;
        self.ticks += 1;
        result
    }

    /// Ground-truth grid.
    pub fn world(&self) -> &WorldGrid {
        &self.world
    }

    /// Agent state.
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Belief map.
    pub fn belief(&self) -> &BeliefMap {
        &self.belief
    }

    /// Relative field used by the last tick (or by `initialize` before the
    /// first tick).
    pub fn field(&self) -> &RelativeField {
        &self.field
    }

    /// Sensor parameters.
    pub fn sensor_params(&self) -> &SensorParams {
        &self.sensor
    }

    /// Ticks run so far.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Reset the belief map to the prior, keeping the agent where it is.
    pub fn reset_belief(&mut self) {
        self.belief.clear();
    }
}
