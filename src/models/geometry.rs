// src/models/geometry.rs
//
// Plain 2D vector helpers used by the curve generator.
//
// All angles are radians in canvas space, where y grows downward: a
// positive angle turns +x toward +y, which reads as clockwise on screen.
// Renderers must draw with the same orientation or the snowflake mirrors.

use nannou::prelude::*;

/// `v1 - v2`
pub fn subtract(v1: Vec2, v2: Vec2) -> Vec2 {
    vec2(v1.x - v2.x, v1.y - v2.y)
}

pub fn add(v1: Vec2, v2: Vec2) -> Vec2 {
    vec2(v1.x + v2.x, v1.y + v2.y)
}

/// Standard rotation matrix applied to `v`.
pub fn rotate(v: Vec2, radians: f32) -> Vec2 {
    let (sin, cos) = radians.sin_cos();
    vec2(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

pub fn scale(v: Vec2, factor: f32) -> Vec2 {
    vec2(v.x * factor, v.y * factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::PI;

    #[test]
    fn test_subtract_and_add_are_inverse() {
        let a = vec2(3.0, -4.0);
        let b = vec2(10.5, 2.0);
        assert_eq!(subtract(b, a), vec2(7.5, 6.0));
        assert_eq!(add(a, subtract(b, a)), b);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        // +90° turns +x into +y (downward on the canvas)
        let rotated = rotate(vec2(1.0, 0.0), PI / 2.0);
        assert_abs_diff_eq!(rotated.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(rotated.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotate_negative_sixty() {
        let rotated = rotate(vec2(100.0, 0.0), -PI / 3.0);
        assert_abs_diff_eq!(rotated.x, 50.0, epsilon = 1e-4);
        assert_abs_diff_eq!(rotated.y, -86.60254, epsilon = 1e-4);
    }

    #[test]
    fn test_rotate_preserves_length() {
        let v = vec2(3.0, 4.0);
        for step in 0..12 {
            let rotated = rotate(v, step as f32 * PI / 6.0);
            assert_abs_diff_eq!(rotated.length(), 5.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(vec2(3.0, -6.0), 1.0 / 3.0), vec2(1.0, -2.0));
    }
}
