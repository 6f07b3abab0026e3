//! Headless adapters around the core.
//!
//! - [`map_image`]: obstacle grids from image files
//! - [`render`]: belief and classification images, PNG export
//! - [`scenario`]: YAML scripts of movement commands
//!
//! ## Example
//!
//! ```rust,ignore
//! use drishti_map::io::{load_obstacle_grid, belief_image, save_png};
//! use image::DynamicImage;
//!
//! let world = load_obstacle_grid("maps/room.png", [20.0, 20.0])?;
//! // ... run a session ...
//! save_png(&DynamicImage::ImageLuma8(belief_image(session.belief())), "belief.png")?;
//! ```

pub mod map_image;
pub mod render;
pub mod scenario;

pub use map_image::{load_map, load_obstacle_grid, obstacle_grid_from_image};
pub use render::{belief_image, mark_agent, obstacle_image, overlay_classification, save_png};
pub use scenario::{Scenario, ScenarioError, Segment};
