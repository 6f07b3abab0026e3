//! Ground-truth grid, frame transform and occupancy belief.
//!
//! ```text
//!   WorldGrid (static)          AgentPose (per tick)
//!   obstacle[r,c], world_xy       position_px
//!          │                          │ pixel_to_world
//!          └───────────┬──────────────┘
//!                      ▼
//!        recompute_relative_field → RelativeField { range, bearing }
//!                      │
//!                      ▼
//!              sensor::detect / sensor::classify
//!                      │
//!                      ▼
//!               BeliefMap::fuse (log-odds)
//! ```
//!
//! ## Key Components
//!
//! - [`WorldGrid`]: Binary obstacle map with a precomputed world position per cell
//! - [`RelativeField`]: Range and bearing of every cell from the agent
//! - [`BeliefMap`]: Log-odds occupancy belief updated once per tick

mod belief;
mod frame;
mod world;

pub use belief::{BeliefMap, BeliefParams, CellState, PRIOR, StateCounts, UpdateStats};
pub use frame::{RelativeField, pixel_to_world, recompute_relative_field, world_to_pixel};
pub use world::{DEFAULT_SCALE_TOLERANCE, WorldGrid, check_scale, scale_ratio};
