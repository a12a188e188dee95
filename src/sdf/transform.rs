//! Query-point transforms
//!
//! SDFs are evaluated in the shape's local frame, so every transform here is
//! applied to the *query point*, not to the shape. Moving the point one way
//! makes the shape appear to move the other way.

use glam::Vec2;
use std::f32::consts::TAU;

/// Rotate a point by a fraction of a full turn
///
/// The angle is `fraction * TAU * -1` and the point is mapped to
/// `(cos·x + sin·y, cos·y - sin·x)` with that angle. Net effect: the query
/// point turns counter-clockwise by `fraction` of a turn, so a shape evaluated
/// in the returned frame appears turned clockwise by the same amount.
#[inline]
pub fn rotate(point: Vec2, fraction: f32) -> Vec2 {
    let angle = fraction * TAU * -1.0;
    let (sine, cosine) = angle.sin_cos();
    Vec2::new(
        cosine * point.x + sine * point.y,
        cosine * point.y - sine * point.x,
    )
}

/// Offset a point (the shape appears at `-offset`)
#[inline]
pub fn translate(point: Vec2, offset: Vec2) -> Vec2 {
    point + offset
}

/// Inverse-scale a point so a unit-size shape appears `factor` times larger
///
/// `factor` must be non-zero. Distances measured in the returned frame are in
/// unit space; multiply them by `factor` to get back to the caller's units.
#[inline]
pub fn scale(point: Vec2, factor: f32) -> Vec2 {
    debug_assert!(factor != 0.0, "scale factor must be non-zero");
    point / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_rotate_quarter_turn() {
        // Query point turns counter-clockwise
        let p = rotate(Vec2::new(1.0, 0.0), 0.25);
        assert!(approx(p, Vec2::new(0.0, 1.0)), "got {p:?}");

        let p = rotate(Vec2::new(0.0, 1.0), 0.25);
        assert!(approx(p, Vec2::new(-1.0, 0.0)), "got {p:?}");
    }

    #[test]
    fn test_rotate_half_turn_negates() {
        let p = rotate(Vec2::new(0.3, -0.7), 0.5);
        assert!(approx(p, Vec2::new(-0.3, 0.7)), "got {p:?}");
    }

    #[test]
    fn test_rotate_full_turn_is_identity() {
        let p = Vec2::new(2.0, -1.5);
        assert!((rotate(p, 1.0) - p).length() < 1e-4);
        assert!(approx(rotate(p, 0.0), p));
    }

    #[test]
    fn test_translate_adds() {
        let p = translate(Vec2::new(1.0, 2.0), Vec2::new(-0.5, 0.25));
        assert_eq!(p, Vec2::new(0.5, 2.25));
    }

    #[test]
    fn test_scale_divides() {
        assert_eq!(scale(Vec2::new(1.0, -2.0), 2.0), Vec2::new(0.5, -1.0));
        assert_eq!(scale(Vec2::new(1.0, -2.0), 0.5), Vec2::new(2.0, -4.0));
    }

    #[test]
    fn test_scale_translate_order_matters() {
        let p = Vec2::new(1.0, 1.0);
        let t = Vec2::new(1.0, 0.0);
        let s = 2.0;

        // Translate in world units, then shrink
        let world_then_local = scale(translate(p, t), s);
        assert_eq!(world_then_local, Vec2::new(1.0, 0.5));

        // Shrink first, then translate in local units
        let local_then_offset = translate(scale(p, s), s * t);
        assert_eq!(local_then_offset, Vec2::new(2.5, 0.5));

        assert_ne!(world_then_local, local_then_offset);

        // The two orders agree once the offset is converted to local units
        assert!(approx(translate(scale(p, s), t / s), world_then_local));
    }

    proptest! {
        #[test]
        fn prop_rotate_round_trip(
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            f in -2.0f32..2.0,
        ) {
            let p = Vec2::new(x, y);
            let back = rotate(rotate(p, f), -f);
            prop_assert!((back - p).length() < 1e-3, "{:?} -> {:?}", p, back);
        }

        #[test]
        fn prop_rotate_preserves_length(
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            f in 0.0f32..1.0,
        ) {
            let p = Vec2::new(x, y);
            prop_assert!((rotate(p, f).length() - p.length()).abs() < 1e-3);
        }
    }
}
