//! Primitive distance functions
//!
//! All shapes are centered at the origin of their local frame; use
//! [`super::transform`] to place them.

use glam::Vec2;

use super::sign;

/// Radius perturbation of the animated circle, in world units
pub const CIRCLE_WOBBLE_AMPLITUDE: f32 = 0.01;
/// Angular frequency of the sine lobe (advances with time)
pub const CIRCLE_WOBBLE_SIN_LOBES: f32 = 5.0;
/// Angular frequency of the cosine lobe (recedes with time)
pub const CIRCLE_WOBBLE_COS_LOBES: f32 = 3.0;

/// Unscaled wobble term of the animated circle, in [-2, 2]
///
/// The polar angle is `atan2(x, y)`: measured from +y toward +x. This is not
/// the usual `atan2(y, x)` and the lobes land in different places if it is
/// swapped.
#[inline]
pub fn circle_wobble(point: Vec2, time: f32) -> f32 {
    let angle = point.x.atan2(point.y);
    (angle * CIRCLE_WOBBLE_SIN_LOBES + time).sin() + (angle * CIRCLE_WOBBLE_COS_LOBES - time).cos()
}

/// Signed distance to a circle whose rim wobbles over time
///
/// Exact for the unperturbed radius; once perturbed the field is only a
/// close approximation near the rim (error bounded by twice the amplitude).
#[inline]
pub fn sd_circle(point: Vec2, radius: f32, time: f32) -> f32 {
    let radius = radius + circle_wobble(point, time) * CIRCLE_WOBBLE_AMPLITUDE;
    point.length() - radius
}

/// Exact signed distance to an isosceles triangle
///
/// Apex at the origin, far vertices at `(±q.x, q.y)`. A negative `q.y` flips
/// the triangle below the apex.
pub fn sd_triangle(point: Vec2, q: Vec2) -> f32 {
    // Fold onto the +x half; the shape is symmetric about the y axis
    let p = Vec2::new(point.x.abs(), point.y);

    // Closest points on the slanted edge and on the base
    let a = p - q * (p.dot(q) / q.dot(q)).clamp(0.0, 1.0);
    let b = p - q * Vec2::new((p.x / q.x).clamp(0.0, 1.0), 1.0);
    let d = a.length_squared().min(b.length_squared());

    let k = sign(q.y);
    let s = (k * p.perp_dot(q)).max(k * (p.y - q.y));
    d.sqrt() * sign(s)
}

/// x coordinate (>= 0) of the point on `y = k·x²` nearest to `pos`
///
/// `pos.x` must already be folded to be non-negative. Solves the depressed
/// cubic of the nearest-point condition in closed form; the discriminant
/// picks between one real root and the trigonometric three-root form.
fn parabola_root(pos: Vec2, k: f32) -> f32 {
    let ik = 1.0 / k;
    let p = ik * (pos.y - 0.5 * ik) / 3.0;
    let q = 0.25 * ik * ik * pos.x;
    let h = q * q - p * p * p;
    let r = h.abs().sqrt();

    if h > 0.0 {
        (q + r).cbrt() - (q - r).abs().cbrt() * sign(r - q)
    } else {
        2.0 * (r.atan2(q) / 3.0).cos() * p.sqrt()
    }
}

/// Point on the parabola `y = k·x²` nearest to `point`
///
/// `k` must be non-zero.
pub fn parabola_nearest_point(point: Vec2, k: f32) -> Vec2 {
    debug_assert!(k != 0.0, "parabola curvature must be non-zero");
    let x = parabola_root(Vec2::new(point.x.abs(), point.y), k);
    let x = if point.x < 0.0 { -x } else { x };
    Vec2::new(x, k * x * x)
}

/// Signed distance to the parabola `y = k·x²`
///
/// Negative on the concave side (above the curve for `k > 0`). `k` must be
/// non-zero. On the axis itself (`x == 0`) below the focus the sign term is
/// zero, matching the shader.
pub fn sd_parabola(point: Vec2, k: f32) -> f32 {
    debug_assert!(k != 0.0, "parabola curvature must be non-zero");
    let pos = Vec2::new(point.x.abs(), point.y);
    let x = parabola_root(pos, k);
    (pos - Vec2::new(x, k * x * x)).length() * sign(pos.x - x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    /// Discriminant of the parabola cubic, to pin which branch a case takes
    fn discriminant(pos: Vec2, k: f32) -> f32 {
        let ik = 1.0 / k;
        let p = ik * (pos.y - 0.5 * ik) / 3.0;
        let q = 0.25 * ik * ik * pos.x.abs();
        q * q - p * p * p
    }

    #[test]
    fn test_circle_boundary_at_rest() {
        // atan2(r, 0) = π/2 -> sin(5π/2) + cos(3π/2) = 1
        let r = 0.35;
        let d = sd_circle(Vec2::new(r, 0.0), r, 0.0);
        assert!((d + CIRCLE_WOBBLE_AMPLITUDE).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn test_circle_center_and_far_field() {
        let d = sd_circle(Vec2::ZERO, 1.0, 0.0);
        assert!((d + 1.0).abs() <= 2.0 * CIRCLE_WOBBLE_AMPLITUDE);

        let d = sd_circle(Vec2::new(0.0, 10.0), 1.0, 3.0);
        assert!((d - 9.0).abs() <= 2.0 * CIRCLE_WOBBLE_AMPLITUDE);
    }

    #[test]
    fn test_circle_angle_uses_x_first() {
        let r = 1.0;
        let t = FRAC_PI_2;
        // Along +y the angle is 0: sin(t) + cos(-t) = 1
        let up = sd_circle(Vec2::new(0.0, r), r, t);
        assert!((up + CIRCLE_WOBBLE_AMPLITUDE).abs() < 1e-5, "got {up}");
        // Along +x the angle is π/2: cos(t) - sin(t) = -1
        let right = sd_circle(Vec2::new(r, 0.0), r, t);
        assert!((right - CIRCLE_WOBBLE_AMPLITUDE).abs() < 1e-5, "got {right}");
    }

    #[test]
    fn test_triangle_inside_is_negative() {
        let q = Vec2::new(1.0, 2.0);
        // Centroid; nearest feature is the slanted edge at 4/3 / √5
        let d = sd_triangle(Vec2::new(0.0, 4.0 / 3.0), q);
        assert!((d + (4.0 / 3.0) / 5.0_f32.sqrt()).abs() < 1e-5, "got {d}");

        let d = sd_triangle(Vec2::new(0.0, 1.0), q);
        assert!((d + 1.0 / 5.0_f32.sqrt()).abs() < 1e-5, "got {d}");
    }

    #[test]
    fn test_triangle_outside_is_euclidean() {
        let q = Vec2::new(1.0, 2.0);
        // Above the base
        assert!((sd_triangle(Vec2::new(0.0, 5.0), q) - 3.0).abs() < 1e-5);
        // Below the apex
        assert!((sd_triangle(Vec2::new(0.0, -1.0), q) - 1.0).abs() < 1e-5);
        // Beside the slanted edge: 6 / √5 from the line through (1, 2)
        let d = sd_triangle(Vec2::new(3.0, 0.0), q);
        assert!((d - 6.0 / 5.0_f32.sqrt()).abs() < 1e-5, "got {d}");
        // Off the far vertex
        let d = sd_triangle(Vec2::new(2.0, 3.0), q);
        assert!((d - 2.0_f32.sqrt()).abs() < 1e-5, "got {d}");
    }

    #[test]
    fn test_triangle_on_edges_is_zero() {
        let q = Vec2::new(1.0, 2.0);
        assert!(sd_triangle(Vec2::new(0.5, 1.0), q).abs() < 1e-6);
        assert!(sd_triangle(Vec2::new(-0.5, 1.0), q).abs() < 1e-6);
        assert!(sd_triangle(Vec2::new(0.5, 2.0), q).abs() < 1e-6);
        assert!(sd_triangle(Vec2::ZERO, q).abs() < 1e-6);
    }

    #[test]
    fn test_triangle_flipped_below_apex() {
        let q = Vec2::new(1.0, -2.0);
        assert!(sd_triangle(Vec2::new(0.0, -1.0), q) < 0.0);
        assert!(sd_triangle(Vec2::new(0.0, 1.0), q) > 0.0);
    }

    #[test]
    fn test_parabola_trig_branch() {
        let k = 1.0;
        let p = Vec2::new(0.0, 2.0);
        assert!(discriminant(p, k) <= 0.0);

        // Nearest points are (±√1.5, 1.5)
        let c = parabola_nearest_point(p, k);
        assert!((c.x - 1.5_f32.sqrt()).abs() < 1e-4, "got {c:?}");
        assert!((c.y - 1.5).abs() < 1e-4, "got {c:?}");

        let d = sd_parabola(p, k);
        assert!((d + 1.75_f32.sqrt()).abs() < 1e-4, "got {d}");
    }

    #[test]
    fn test_parabola_real_branch() {
        let k = 1.0;
        let p = Vec2::new(2.0, 0.0);
        assert!(discriminant(p, k) > 0.0);

        // Root of 2x³ + x - 2 = 0
        let c = parabola_nearest_point(p, k);
        assert!((2.0 * c.x.powi(3) + c.x - 2.0).abs() < 1e-4, "got {c:?}");
        assert!(sd_parabola(p, k) > 0.0);
        assert!((sd_parabola(p, k) - (p - c).length()).abs() < 1e-5);
    }

    #[test]
    fn test_parabola_on_curve_is_zero() {
        assert!(sd_parabola(Vec2::new(1.0, 1.0), 1.0).abs() < 1e-3);
        assert!(sd_parabola(Vec2::new(-0.5, 0.5), 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_parabola_mirrors_nearest_point() {
        let c = parabola_nearest_point(Vec2::new(-2.0, 0.0), 1.0);
        assert!(c.x < 0.0);
        assert_eq!(
            sd_parabola(Vec2::new(-2.0, 0.0), 1.0),
            sd_parabola(Vec2::new(2.0, 0.0), 1.0)
        );
    }

    proptest! {
        #[test]
        fn prop_parabola_nearest_point_is_normal(
            x in 0.05f32..3.0,
            y in -2.0f32..4.0,
            k in 0.25f32..4.0,
        ) {
            let p = Vec2::new(x, y);
            let c = parabola_nearest_point(p, k);
            // On the curve
            prop_assert!((c.y - k * c.x * c.x).abs() < 1e-3 * (1.0 + c.y.abs()));
            // Offset is perpendicular to the tangent (1, 2kx)
            let tangent = Vec2::new(1.0, 2.0 * k * c.x).normalize();
            let offset = p - c;
            prop_assert!(
                offset.dot(tangent).abs() < 2e-3 * (1.0 + offset.length()),
                "p={:?} c={:?} k={}", p, c, k
            );
        }

        #[test]
        fn prop_parabola_sign_matches_side(
            x in 0.05f32..3.0,
            y in -2.0f32..4.0,
            k in 0.25f32..4.0,
        ) {
            let curve_y = k * x * x;
            prop_assume!((y - curve_y).abs() > 0.05);
            let d = sd_parabola(Vec2::new(x, y), k);
            if y > curve_y {
                prop_assert!(d < 0.0, "above curve should be inside, got {}", d);
            } else {
                prop_assert!(d > 0.0, "below curve should be outside, got {}", d);
            }
        }

        #[test]
        fn prop_triangle_is_symmetric(x in -5.0f32..5.0, y in -5.0f32..5.0) {
            let q = Vec2::new(1.0, 2.0);
            prop_assert_eq!(sd_triangle(Vec2::new(x, y), q), sd_triangle(Vec2::new(-x, y), q));
        }
    }
}
