//! Test utilities for drishti-map integration tests.
//!
//! Grid fixtures plus a range-stepping oracle used to cross-check detection.

#![allow(dead_code)]

use drishti_map::{CellIndex, PixelPoint, SensorParams, WorldGrid, WorldPoint};

/// Grid with the given obstacle cells, explicit scale and center pixel.
pub fn grid_with_obstacles(
    rows: usize,
    cols: usize,
    pixels_per_meter: f32,
    center_px: PixelPoint,
    obstacles: &[CellIndex],
) -> WorldGrid {
    let mut cells = vec![false; rows * cols];
    for c in obstacles {
        cells[c.row * cols + c.col] = true;
    }
    WorldGrid::with_scale(cells, rows, cols, pixels_per_meter, center_px).unwrap()
}

/// Square room of `size_m` meters with one-cell walls on every edge,
/// world origin at the center pixel.
pub fn walled_room(size_m: f32, pixels_per_meter: f32) -> WorldGrid {
    let n = (size_m * pixels_per_meter).round() as usize;
    let cells = (0..n * n)
        .map(|i| {
            let (row, col) = (i / n, i % n);
            row == 0 || col == 0 || row == n - 1 || col == n - 1
        })
        .collect();
    WorldGrid::from_extent(cells, n, n, [size_m, size_m], 0.02).unwrap()
}

/// March outward from `origin` along `bearing` in steps of `dr / 4` and
/// return the first range whose nearest cell is an obstacle, or max range.
pub fn range_stepping_oracle(
    world: &WorldGrid,
    origin: WorldPoint,
    bearing: f32,
    params: &SensorParams,
) -> f32 {
    let step = params.range_resolution / 4.0;
    let (sin, cos) = bearing.sin_cos();
    let center = world.center_px();
    let ppm = world.pixels_per_meter();

    let mut k = 0u32;
    loop {
        let r = k as f32 * step;
        if r > params.max_range {
            return params.max_range;
        }
        let x = origin.x + r * cos;
        let y = origin.y + r * sin;
        let col = (x * ppm + center.x).round();
        let row = (-y * ppm + center.y).round();
        if col < 0.0 || row < 0.0 {
            return params.max_range;
        }
        let cell = CellIndex::new(row as usize, col as usize);
        if !world.contains(cell) {
            return params.max_range;
        }
        if world.is_obstacle(cell) {
            return r;
        }
        k += 1;
    }
}
