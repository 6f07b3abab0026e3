//! Movement commands.

use serde::{Deserialize, Serialize};

/// One tick's movement request in the pixel frame (y down).
///
/// `direction` only sets the heading; its length is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct MovementCommand {
    /// Desired heading `[dx, dy]` in pixels, y pointing down the image
    pub direction: [f32; 2],
    /// Apply the boost multiplier
    #[serde(default)]
    pub boost: bool,
}

impl MovementCommand {
    /// Create a command.
    pub fn new(direction: [f32; 2], boost: bool) -> Self {
        Self { direction, boost }
    }

    /// Unit heading, or `None` for a zero or non-finite direction.
    pub fn unit_direction(&self) -> Option<[f32; 2]> {
        let [dx, dy] = self.direction;
        let norm = (dx * dx + dy * dy).sqrt();
        if norm > 0.0 && norm.is_finite() {
            Some([dx / norm, dy / norm])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_direction() {
        let c = MovementCommand::new([3.0, -4.0], false);
        let [x, y] = c.unit_direction().unwrap();
        assert_relative_eq!(x, 0.6);
        assert_relative_eq!(y, -0.8);
        assert!(MovementCommand::default().unit_direction().is_none());
        assert!(MovementCommand::new([f32::NAN, 1.0], true).unit_direction().is_none());
    }
}
