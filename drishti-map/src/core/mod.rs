//! Core types for the drishti-map library.
//!
//! Two coordinate frames are in play:
//! - **Pixel frame** ([`PixelPoint`], [`CellIndex`]): map-image convention,
//!   x to the right, y (rows) downward.
//! - **World frame** ([`WorldPoint`]): meters, x to the right, y upward,
//!   origin at the map-center pixel. Bearings are CCW from +X.
//!
//! [`math`] holds the angle helpers every masking operation builds on.

pub mod math;
mod point;

pub use math::{AngularWindow, angle_within, angles_within, expit, logit, wrap_to_pi};
pub use point::{CellIndex, PixelPoint, WorldPoint};
