//! 2D vector helpers on top of `glam::Vec2`
//!
//! Arithmetic (`+ - * /`, elementwise and by scalar) comes from glam. These
//! add the handful of operations the simulation names explicitly.

use glam::Vec2;

/// Length of `v`
#[inline]
pub fn magnitude(v: Vec2) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Unit vector along `v`, or zero when `v` is exactly zero
#[inline]
pub fn unit(v: Vec2) -> Vec2 {
    if v.x == 0.0 && v.y == 0.0 {
        return Vec2::ZERO;
    }
    v / magnitude(v)
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.x * b.x + a.y * b.y
}

/// Reflect `v` about a unit normal `n`: v - 2(n·v)n
#[inline]
pub fn reflect(v: Vec2, n: Vec2) -> Vec2 {
    v - n * 2.0 * dot(n, v)
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    magnitude(b - a)
}

/// Angle (radians) of the vector pointing from `b` to `a`
#[inline]
pub fn angle(a: Vec2, b: Vec2) -> f32 {
    (a.y - b.y).atan2(a.x - b.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn test_unit_of_zero_is_zero() {
        assert_eq!(unit(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_unit_length() {
        let u = unit(Vec2::new(3.0, 4.0));
        assert!((u.x - 0.6).abs() < 1e-6);
        assert!((u.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_reflect_off_wall() {
        // Moving right into a wall whose normal points left
        let reflected = reflect(Vec2::new(100.0, 20.0), Vec2::new(-1.0, 0.0));
        assert!((reflected.x + 100.0).abs() < 1e-4);
        assert!((reflected.y - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_distance_and_angle() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-6);
        // From origin to (0, 1) is "down" in screen space
        assert!((angle(Vec2::new(0.0, 1.0), Vec2::ZERO) - PI / 2.0).abs() < 1e-6);
        // Pointing from (1, 0) back to the origin
        assert!((angle(Vec2::ZERO, Vec2::new(1.0, 0.0)).abs() - PI).abs() < 1e-6);
    }

    #[test]
    fn test_elementwise_ops() {
        let a = Vec2::new(6.0, 8.0);
        let b = Vec2::new(2.0, 4.0);
        assert_eq!(a / b, Vec2::new(3.0, 2.0));
        assert_eq!(a * b, Vec2::new(12.0, 32.0));
        assert_eq!(dot(a, b), 44.0);
    }

    proptest! {
        #[test]
        fn unit_is_normalized(x in -1.0e3f32..1.0e3, y in -1.0e3f32..1.0e3) {
            prop_assume!(x.abs() > 1e-3 || y.abs() > 1e-3);
            let u = unit(Vec2::new(x, y));
            prop_assert!((magnitude(u) - 1.0).abs() < 1e-4);
        }

        #[test]
        fn reflect_preserves_speed(vx in -500.0f32..500.0, vy in -500.0f32..500.0, theta in 0.0f32..6.28) {
            let n = Vec2::new(theta.cos(), theta.sin());
            let v = Vec2::new(vx, vy);
            let r = reflect(v, n);
            prop_assert!((magnitude(r) - magnitude(v)).abs() < 1e-2);
        }
    }
}
