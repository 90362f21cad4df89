//! Small vector helpers used by steering and threat math.
//!
//! `Vec2::normalize_or_zero` exists in glam, but its cutoff is "non-finite
//! reciprocal", so a 1e-20 vector still normalizes. Steering code wants a real
//! epsilon: anything shorter than [`NORMALIZE_EPSILON`] is treated as "no
//! direction".

use bevy::prelude::*;

/// Vectors shorter than this normalize to zero.
pub const NORMALIZE_EPSILON: f32 = 1e-6;

/// Unit vector in the direction of `v`, or `Vec2::ZERO` when `v` is (nearly) zero.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let len = v.length();
    if len < NORMALIZE_EPSILON {
        return Vec2::ZERO;
    }
    v / len
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.x * b.x + a.y * b.y
}

/// Z component of the 3D cross product of `a` and `b` lifted to the XY plane.
///
/// Positive when `b` is counter-clockwise from `a` in a y-up frame
/// (clockwise on screen, where y grows downward).
#[inline]
pub fn cross_z(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Move `current` toward `target` by at most `max_step`, never overshooting.
#[inline]
pub fn approach(current: f32, target: f32, max_step: f32) -> f32 {
    if current < target {
        (current + max_step).min(target)
    } else if current > target {
        (current - max_step).max(target)
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_guards_tiny_vectors() {
        assert_eq!(normalize(Vec2::ZERO), Vec2::ZERO);
        assert_eq!(normalize(Vec2::new(1e-8, -1e-8)), Vec2::ZERO);

        let n = normalize(Vec2::new(3.0, 4.0));
        assert!((n - Vec2::new(0.6, 0.8)).length() < 1e-6);
    }

    #[test]
    fn cross_z_sign_follows_winding() {
        assert_eq!(cross_z(Vec2::X, Vec2::Y), 1.0);
        assert_eq!(cross_z(Vec2::Y, Vec2::X), -1.0);
        assert_eq!(cross_z(Vec2::X, Vec2::X * 2.0), 0.0);
    }

    #[test]
    fn dot_of_perpendiculars_is_zero() {
        assert_eq!(dot(Vec2::new(2.0, 0.0), Vec2::new(0.0, 5.0)), 0.0);
        assert_eq!(dot(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)), 11.0);
    }

    #[test]
    fn approach_clamps_at_target() {
        assert_eq!(approach(0.0, 10.0, 4.0), 4.0);
        assert_eq!(approach(8.0, 10.0, 4.0), 10.0);
        assert_eq!(approach(10.0, -10.0, 100.0), -10.0);
        assert_eq!(approach(3.0, 3.0, 1.0), 3.0);
    }
}
