//! Static ground-truth obstacle grid and its world-coordinate table.

use log::info;

use crate::core::{CellIndex, PixelPoint, WorldPoint};
use crate::error::{Error, Result};

use super::frame::pixel_to_world;

/// Default bound on `|(sx - sy) / (sx + sy)|` for per-axis pixel scales.
pub const DEFAULT_SCALE_TOLERANCE: f32 = 0.02;

/// Normalized disagreement between two pixel-per-meter scales.
#[inline]
pub fn scale_ratio(x_px_per_m: f32, y_px_per_m: f32) -> f32 {
    (x_px_per_m - y_px_per_m) / (x_px_per_m + y_px_per_m)
}

/// Check two scales against `tolerance` and return their mean.
pub fn check_scale(x_px_per_m: f32, y_px_per_m: f32, tolerance: f32) -> Result<f32> {
    if !(x_px_per_m > 0.0 && y_px_per_m > 0.0) || !x_px_per_m.is_finite() || !y_px_per_m.is_finite()
    {
        return Err(Error::InvalidParameter(format!(
            "pixel scales must be positive and finite, got {} and {}",
            x_px_per_m, y_px_per_m
        )));
    }

    let ratio = scale_ratio(x_px_per_m, y_px_per_m);
    if ratio.abs() >= tolerance {
        return Err(Error::ScaleMismatch {
            x_px_per_m,
            y_px_per_m,
            ratio,
            tolerance,
        });
    }

    Ok(0.5 * (x_px_per_m + y_px_per_m))
}

/// Immutable binary obstacle map with a precomputed world position per cell.
///
/// Cells are stored row-major in image convention (row 0 at the top).
/// `world_xy` is built with the same affine map as [`pixel_to_world`], so a
/// cell's world position and a pixel position at the cell index agree
/// exactly.
#[derive(Clone, Debug)]
pub struct WorldGrid {
    rows: usize,
    cols: usize,
    obstacle: Vec<bool>,
    world_xy: Vec<WorldPoint>,
    pixels_per_meter: f32,
    center_px: PixelPoint,
    scale_tolerance: f32,
}

impl WorldGrid {
    /// Build a grid covering `extent_m` meters (width, height).
    ///
    /// The per-axis scales `cols / width` and `rows / height` must agree to
    /// within `tolerance`; the mean is used. The map center is the pixel
    /// `(cols / 2, rows / 2)` with integer division.
    pub fn from_extent(
        obstacle: Vec<bool>,
        rows: usize,
        cols: usize,
        extent_m: [f32; 2],
        tolerance: f32,
    ) -> Result<Self> {
        if !(extent_m[0] > 0.0 && extent_m[1] > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "map extent must be positive, got {:?}",
                extent_m
            )));
        }

        let x_scale = cols as f32 / extent_m[0];
        let y_scale = rows as f32 / extent_m[1];
        let pixels_per_meter = check_scale(x_scale, y_scale, tolerance)?;
        let center_px = PixelPoint::new((cols / 2) as f32, (rows / 2) as f32);

        let grid = Self::build(obstacle, rows, cols, pixels_per_meter, center_px, tolerance)?;
        info!(
            "[WorldGrid] {}x{} cells, {:.3} px/m, {} obstacle cells",
            cols,
            rows,
            pixels_per_meter,
            grid.obstacle_count()
        );
        Ok(grid)
    }

    /// Build a grid with an explicit scale and center pixel.
    pub fn with_scale(
        obstacle: Vec<bool>,
        rows: usize,
        cols: usize,
        pixels_per_meter: f32,
        center_px: PixelPoint,
    ) -> Result<Self> {
        if !(pixels_per_meter > 0.0 && pixels_per_meter.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "pixels_per_meter must be positive, got {}",
                pixels_per_meter
            )));
        }
        Self::build(
            obstacle,
            rows,
            cols,
            pixels_per_meter,
            center_px,
            DEFAULT_SCALE_TOLERANCE,
        )
    }

    fn build(
        obstacle: Vec<bool>,
        rows: usize,
        cols: usize,
        pixels_per_meter: f32,
        center_px: PixelPoint,
        scale_tolerance: f32,
    ) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidGrid(format!(
                "grid must have at least one cell, got {}x{}",
                cols, rows
            )));
        }
        if obstacle.len() != rows * cols {
            return Err(Error::InvalidGrid(format!(
                "obstacle buffer has {} cells, expected {}x{} = {}",
                obstacle.len(),
                cols,
                rows,
                rows * cols
            )));
        }

        let world_xy = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                pixel_to_world(
                    PixelPoint::new(col as f32, row as f32),
                    center_px,
                    pixels_per_meter,
                )
            })
            .collect();

        Ok(Self {
            rows,
            cols,
            obstacle,
            world_xy,
            pixels_per_meter,
            center_px,
            scale_tolerance,
        })
    }

    /// Number of rows (image height).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (image width).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.obstacle.len()
    }

    /// Always false for a constructed grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.obstacle.is_empty()
    }

    /// Pixels per meter (mean of the per-axis scales).
    #[inline]
    pub fn pixels_per_meter(&self) -> f32 {
        self.pixels_per_meter
    }

    /// Pixel that maps to the world origin.
    #[inline]
    pub fn center_px(&self) -> PixelPoint {
        self.center_px
    }

    /// Tolerance the grid was validated against.
    #[inline]
    pub fn scale_tolerance(&self) -> f32 {
        self.scale_tolerance
    }

    /// Row-major linear index of a cell.
    #[inline]
    pub fn index(&self, cell: CellIndex) -> usize {
        cell.row * self.cols + cell.col
    }

    /// Cell for a row-major linear index.
    #[inline]
    pub fn cell(&self, index: usize) -> CellIndex {
        CellIndex::new(index / self.cols, index % self.cols)
    }

    /// Check if a cell index is inside the grid.
    #[inline]
    pub fn contains(&self, cell: CellIndex) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Ground-truth obstacle flag. Out-of-bounds cells are not obstacles.
    #[inline]
    pub fn is_obstacle(&self, cell: CellIndex) -> bool {
        self.contains(cell) && self.obstacle[self.index(cell)]
    }

    /// Row-major obstacle flags.
    #[inline]
    pub fn obstacles(&self) -> &[bool] {
        &self.obstacle
    }

    /// Number of obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.obstacle.iter().filter(|&&o| o).count()
    }

    /// Row-major world positions of every cell.
    #[inline]
    pub fn world_xy(&self) -> &[WorldPoint] {
        &self.world_xy
    }

    /// World position of one cell.
    #[inline]
    pub fn world_at(&self, cell: CellIndex) -> Option<WorldPoint> {
        self.contains(cell).then(|| self.world_xy[self.index(cell)])
    }

    /// Convert a pixel position to world meters using this grid's frame.
    #[inline]
    pub fn pixel_to_world(&self, position_px: PixelPoint) -> WorldPoint {
        pixel_to_world(position_px, self.center_px, self.pixels_per_meter)
    }

    /// Largest valid pixel coordinates `(cols - 1, rows - 1)`.
    #[inline]
    pub fn max_px(&self) -> PixelPoint {
        PixelPoint::new((self.cols - 1) as f32, (self.rows - 1) as f32)
    }

    /// Check if a pixel position lies within the map image.
    pub fn contains_px(&self, p: PixelPoint) -> bool {
        let max = self.max_px();
        p.x >= 0.0 && p.y >= 0.0 && p.x <= max.x && p.y <= max.y
    }
}
