//! # drishti-map
//!
//! Single-beam range sensor simulation fused into a log-odds occupancy map.
//!
//! ## Overview
//!
//! A mobile agent carries one rotating range beam through a binary obstacle
//! grid. Every tick the beam is queried against ground truth, the reading is
//! turned into a per-cell classification by an inverse sensor model, and the
//! classification is fused into a persistent belief map:
//!
//! - **Occupied** - inside the hit annulus of the reading
//! - **Free** - inside the beam, nearer than the reading
//! - **Unknown** - everything else, left untouched
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti_map::{DrishtiConfig, Session, MovementCommand, io};
//!
//! let config = DrishtiConfig::load_default()?;
//! let world = io::load_map("maps/room.png", &config.map)?;
//! let mut session = Session::from_config(world, &config)?;
//!
//! let result = session.tick(config.sim.dt, Some(MovementCommand::new([1.0, 0.0], false)));
//! println!("range {:.2} m, hit {}", result.measured_range, result.hit);
//! ```
//!
//! ## Coordinate System
//!
//! - Pixel frame: x to the right, y (rows) downward, as in the map image
//! - World frame: meters, x to the right, y upward, origin at the map center
//! - Bearings: radians, CCW positive from +X, wrapped to (-π, π]

#![warn(missing_docs)]

// Core types
pub mod core;

// Ground-truth grid, frame transform, belief map
pub mod grid;

// Detection and inverse sensor model
pub mod sensor;

// Agent pose and motion
pub mod agent;

// Tick loop
pub mod session;

// Unified configuration
pub mod config;

// Image and scenario adapters
pub mod io;

mod error;

pub use agent::{Agent, AgentParams, AgentPose, MotionState, MovementCommand};
pub use config::DrishtiConfig;
pub use crate::core::{CellIndex, PixelPoint, WorldPoint, angle_within, angles_within, wrap_to_pi};
pub use error::{Error, Result};
pub use grid::{
    BeliefMap, BeliefParams, CellState, RelativeField, WorldGrid, pixel_to_world,
    recompute_relative_field,
};
pub use sensor::{CellClass, Classification, DetectionResult, SensorParams, classify, detect};
pub use session::{Session, TickResult, initialize, tick};
