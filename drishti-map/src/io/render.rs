//! Belief and classification rendering.
//!
//! Rendering only consumes masks and belief values; nothing here feeds back
//! into sensing.

use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage};

use crate::core::PixelPoint;
use crate::error::Result;
use crate::grid::{BeliefMap, WorldGrid};
use crate::sensor::{CellClass, Classification};

/// Overlay color for occupied cells.
pub const OCCUPIED_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
/// Overlay color for free cells.
pub const FREE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
/// Marker color for the agent.
pub const AGENT_COLOR: Rgb<u8> = Rgb([0, 0, 255]);

/// Occupancy probability as grayscale, `expit(L) * 255`.
///
/// Occupied cells render bright, free cells dark, unknown mid-gray.
pub fn belief_image(belief: &BeliefMap) -> GrayImage {
    let probs = belief.probabilities();
    let cols = belief.cols();
    GrayImage::from_fn(cols as u32, belief.rows() as u32, |x, y| {
        let p = probs[y as usize * cols + x as usize];
        Luma([(p * 255.0).round().clamp(0.0, 255.0) as u8])
    })
}

/// Ground truth as an image: obstacles black, free space white.
pub fn obstacle_image(world: &WorldGrid) -> GrayImage {
    let obstacles = world.obstacles();
    let cols = world.cols();
    GrayImage::from_fn(cols as u32, world.rows() as u32, |x, y| {
        if obstacles[y as usize * cols + x as usize] {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    })
}

/// Color occupied cells red and free cells green over a grayscale base.
///
/// `base` and `classification` must share dimensions; cells outside the
/// classification are copied unchanged.
pub fn overlay_classification(base: &GrayImage, classification: &Classification) -> RgbImage {
    let classes = classification.classes();
    let cols = classification.cols();
    RgbImage::from_fn(base.width(), base.height(), |x, y| {
        let class = if (x as usize) < cols && (y as usize) < classification.rows() {
            classes[y as usize * cols + x as usize]
        } else {
            CellClass::Unknown
        };
        match class {
            CellClass::Occupied => OCCUPIED_COLOR,
            CellClass::Free => FREE_COLOR,
            CellClass::Unknown => {
                let v = base.get_pixel(x, y).0[0];
                Rgb([v, v, v])
            }
        }
    })
}

/// Mark the agent position with a single pixel.
pub fn mark_agent(img: &mut RgbImage, position_px: PixelPoint) {
    let x = position_px.x.round();
    let y = position_px.y.round();
    if x >= 0.0 && y >= 0.0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, AGENT_COLOR);
    }
}

/// Write an image as PNG.
pub fn save_png<P: AsRef<Path>>(image: &DynamicImage, path: P) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
