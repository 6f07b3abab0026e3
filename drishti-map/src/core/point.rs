//! Point and cell coordinate types.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Cell index in image convention: `row` grows downward, `col` grows right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellIndex {
    /// Row index (0 = top of the map image)
    pub row: usize,
    /// Column index (0 = left of the map image)
    pub col: usize,
}

impl CellIndex {
    /// Create a new cell index
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// World coordinates (meters, y up)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate in meters
    pub x: f32,
    /// Y coordinate in meters (positive toward the top of the map)
    pub y: f32,
}

impl WorldPoint {
    /// Create a new world point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };

    /// Euclidean norm
    #[inline]
    pub fn norm(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f32 {
        (*other - *self).norm()
    }

    /// Angle from this point to another (radians, CCW from +X)
    #[inline]
    pub fn angle_to(&self, other: &WorldPoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dy.atan2(dx)
    }
}

impl Add for WorldPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        WorldPoint::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for WorldPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        WorldPoint::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for WorldPoint {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        WorldPoint::new(self.x * scalar, self.y * scalar)
    }
}

/// Position in map-image pixels (fractional, y down).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    /// Horizontal pixel coordinate (column direction)
    pub x: f32,
    /// Vertical pixel coordinate (row direction, grows downward)
    pub y: f32,
}

impl PixelPoint {
    /// Create a new pixel point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset by a velocity over a time step
    #[inline]
    pub fn advanced(self, velocity: [f32; 2], dt: f32) -> Self {
        Self::new(self.x + velocity[0] * dt, self.y + velocity[1] * dt)
    }
}

impl From<[f32; 2]> for PixelPoint {
    fn from(v: [f32; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}
