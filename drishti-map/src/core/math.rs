//! Angle utilities.
//!
//! All angles are in radians, counter-clockwise positive from +X.
//! Wrapped angles live in the half-open interval (-π, π].

use std::f32::consts::PI;

/// Two times PI (full circle in radians).
pub const TWO_PI: f32 = 2.0 * PI;

/// Wrap an angle to (-π, π].
///
/// Inputs already inside the interval are returned unchanged, so the
/// function is idempotent. Inputs many turns away are reduced with a single
/// euclidean remainder rather than repeated subtraction, so long runs do not
/// accumulate drift.
///
/// # Example
/// ```
/// use drishti_map::core::math::wrap_to_pi;
/// use std::f32::consts::PI;
///
/// assert_eq!(wrap_to_pi(PI), PI);
/// assert_eq!(wrap_to_pi(-PI), PI);
/// assert!((wrap_to_pi(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-5);
/// ```
#[inline]
pub fn wrap_to_pi(angle: f32) -> f32 {
    if angle > -PI && angle <= PI {
        return angle;
    }
    if !angle.is_finite() {
        return f32::NAN;
    }

    let a = (angle + PI).rem_euclid(TWO_PI) - PI;
    if a <= -PI {
        a + TWO_PI
    } else if a > PI {
        PI
    } else {
        a
    }
}

/// Signed shortest angular difference `to - from`, wrapped to (-π, π].
#[inline]
pub fn angle_diff(from: f32, to: f32) -> f32 {
    wrap_to_pi(to - from)
}

/// Test whether `angle` lies within `half_width` of `center`, measured the
/// short way around the circle.
///
/// The window `[center - half_width, center + half_width]` is wrapped at both
/// ends. When the wrapped bounds straddle ±π the window is the union of two
/// sub-ranges, `angle >= lower || angle <= upper`.
///
/// # Example
/// ```
/// use drishti_map::core::math::angle_within;
///
/// // Window around 3.1 rad spills past +π into the negative side.
/// assert!(angle_within(3.0, 3.1, 0.2));
/// assert!(angle_within(-3.0, 3.1, 0.2));
/// assert!(!angle_within(0.0, 3.1, 0.2));
/// ```
#[inline]
pub fn angle_within(angle: f32, center: f32, half_width: f32) -> bool {
    AngularWindow::new(center, half_width).contains(angle)
}

/// Field variant of [`angle_within`]: one flag per input angle.
pub fn angles_within(angles: &[f32], center: f32, half_width: f32) -> Vec<bool> {
    let window = AngularWindow::new(center, half_width);
    angles.iter().map(|&a| window.contains(a)).collect()
}

/// Pre-wrapped angular window, so whole-grid masking wraps the bounds once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngularWindow {
    lower: f32,
    upper: f32,
    kind: WindowKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WindowKind {
    Empty,
    Full,
    Contiguous,
    Wrapping,
}

impl AngularWindow {
    /// Build the window `center ± half_width`.
    pub fn new(center: f32, half_width: f32) -> Self {
        let kind = if half_width.is_nan() || half_width < 0.0 {
            WindowKind::Empty
        } else if half_width >= PI {
            WindowKind::Full
        } else {
            WindowKind::Contiguous
        };

        let lower = wrap_to_pi(center - half_width);
        let upper = wrap_to_pi(center + half_width);

        let kind = match kind {
            WindowKind::Contiguous if lower > upper => WindowKind::Wrapping,
            other => other,
        };

        Self { lower, upper, kind }
    }

    /// Does the window straddle the ±π seam?
    pub fn wraps(&self) -> bool {
        self.kind == WindowKind::Wrapping
    }

    /// Membership test. The angle is wrapped before comparison.
    #[inline]
    pub fn contains(&self, angle: f32) -> bool {
        let a = wrap_to_pi(angle);
        match self.kind {
            WindowKind::Empty => false,
            WindowKind::Full => !a.is_nan(),
            WindowKind::Contiguous => a >= self.lower && a <= self.upper,
            WindowKind::Wrapping => a >= self.lower || a <= self.upper,
        }
    }
}

/// Log-odds of a probability: `ln(p / (1 - p))`.
#[inline]
pub fn logit(p: f32) -> f32 {
    (p / (1.0 - p)).ln()
}

/// Logistic sigmoid, the inverse of [`logit`].
#[inline]
pub fn expit(log_odds: f32) -> f32 {
    1.0 / (1.0 + (-log_odds).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wrap_in_range_is_exact() {
        for a in [0.0, 0.1, -0.1, 1.5, -3.0, 3.1, PI] {
            assert_eq!(wrap_to_pi(a), a);
        }
    }

    #[test]
    fn test_wrap_boundaries() {
        assert_eq!(wrap_to_pi(-PI), PI);
        assert_relative_eq!(wrap_to_pi(TWO_PI), 0.0, epsilon = 1e-5);
        assert_relative_eq!(wrap_to_pi(-TWO_PI), 0.0, epsilon = 1e-5);
        assert_relative_eq!(wrap_to_pi(PI + 0.5), -PI + 0.5, epsilon = 1e-5);
        assert_relative_eq!(wrap_to_pi(-PI - 0.5), PI - 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_wrap_far_inputs() {
        let a = 0.75;
        let far = a + 1000.0 * TWO_PI;
        // f32 loses precision at this magnitude, tolerance scales accordingly
        assert_relative_eq!(wrap_to_pi(far), a, epsilon = 1e-2);
        let neg_far = a - 1000.0 * TWO_PI;
        assert_relative_eq!(wrap_to_pi(neg_far), a, epsilon = 1e-2);
    }

    #[test]
    fn test_wrap_idempotent_and_in_range() {
        let mut x = -500.0f32;
        while x < 500.0 {
            let w = wrap_to_pi(x);
            assert!(w > -PI && w <= PI, "wrap({}) = {} out of range", x, w);
            assert_eq!(wrap_to_pi(w), w);
            x += 0.37;
        }
    }

    #[test]
    fn test_wrap_non_finite() {
        assert!(wrap_to_pi(f32::NAN).is_nan());
        assert!(wrap_to_pi(f32::INFINITY).is_nan());
    }

    #[test]
    fn test_angles_within_wraparound() {
        let flags = angles_within(&[3.0, -3.0, 0.0], 3.1, 0.2);
        assert_eq!(flags, vec![true, true, false]);
        assert!(AngularWindow::new(3.1, 0.2).wraps());
    }

    #[test]
    fn test_angle_within_negative_seam() {
        // Window around -3.1 spills past -π into the positive side
        assert!(angle_within(3.1, -3.1, 0.2));
        assert!(angle_within(-3.0, -3.1, 0.2));
        assert!(!angle_within(2.8, -3.1, 0.2));
    }

    #[test]
    fn test_angle_within_contiguous() {
        assert!(angle_within(0.05, 0.0, 0.1));
        assert!(angle_within(-0.1, 0.0, 0.1));
        assert!(!angle_within(0.2, 0.0, 0.1));
        assert!(!AngularWindow::new(0.0, 0.1).wraps());
    }

    #[test]
    fn test_angle_within_unwrapped_inputs() {
        // Same direction expressed one turn away
        assert!(angle_within(0.05 + TWO_PI, 0.0, 0.1));
        assert!(angle_within(0.0, TWO_PI, 0.1));
    }

    #[test]
    fn test_angle_within_degenerate_widths() {
        assert!(angle_within(2.0, -1.0, PI));
        assert!(angle_within(-2.9, 0.0, 4.0));
        assert!(!angle_within(0.0, 0.0, -0.1));
        assert!(angle_within(0.5, 0.5, 0.0));
    }

    #[test]
    fn test_angle_diff() {
        assert_relative_eq!(angle_diff(0.0, PI / 2.0), PI / 2.0);
        assert_relative_eq!(angle_diff(-0.9 * PI, 0.9 * PI), -0.2 * PI, epsilon = 1e-5);
    }

    #[test]
    fn test_logit_expit() {
        assert_eq!(logit(0.5), 0.0);
        assert_eq!(expit(0.0), 0.5);
        assert_relative_eq!(expit(logit(0.8)), 0.8, epsilon = 1e-6);
        assert!(logit(1.0).is_infinite());
    }
}
