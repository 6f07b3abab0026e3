//! Obstacle grid loading from image files.
//!
//! Any format the `image` crate decodes (PNG, BMP, PGM) is accepted. The
//! image is converted to 8-bit grayscale; pixels with value 0 are obstacles,
//! everything else is free space.

use std::path::Path;

use image::GrayImage;
use log::info;

use crate::config::MapSection;
use crate::error::Result;
use crate::grid::{DEFAULT_SCALE_TOLERANCE, WorldGrid};

/// Grayscale value marking an obstacle pixel.
pub const OBSTACLE_LUMA: u8 = 0;

/// Build a world grid from a grayscale image covering `extent_m` meters.
pub fn obstacle_grid_from_image(
    img: &GrayImage,
    extent_m: [f32; 2],
    tolerance: f32,
) -> Result<WorldGrid> {
    let (width, height) = img.dimensions();
    let obstacle = img.pixels().map(|p| p.0[0] == OBSTACLE_LUMA).collect();
    WorldGrid::from_extent(obstacle, height as usize, width as usize, extent_m, tolerance)
}

/// Load an obstacle grid with the default 2% scale tolerance.
pub fn load_obstacle_grid<P: AsRef<Path>>(path: P, extent_m: [f32; 2]) -> Result<WorldGrid> {
    load_obstacle_grid_with(path, extent_m, DEFAULT_SCALE_TOLERANCE)
}

/// Load an obstacle grid using a configured map section.
pub fn load_map<P: AsRef<Path>>(path: P, map: &MapSection) -> Result<WorldGrid> {
    load_obstacle_grid_with(path, map.extent_m, map.scale_tolerance)
}

fn load_obstacle_grid_with<P: AsRef<Path>>(
    path: P,
    extent_m: [f32; 2],
    tolerance: f32,
) -> Result<WorldGrid> {
    let path = path.as_ref();
    let img = image::open(path)?.into_luma8();
    info!(
        "[MapImage] Loaded {} ({}x{} px)",
        path.display(),
        img.width(),
        img.height()
    );
    obstacle_grid_from_image(&img, extent_m, tolerance)
}
