//! Boolean combinators over signed distances
//!
//! Hard operators produce sharp creases where two shapes meet. Smooth
//! operators blend over a radius `k`, rounding the crease by at most `k / 4`.

use glam::FloatExt;

/// Union of two shapes
#[inline]
pub fn union(d1: f32, d2: f32) -> f32 {
    d1.min(d2)
}

/// Intersection of two shapes (keep only the overlap)
#[inline]
pub fn intersection(d1: f32, d2: f32) -> f32 {
    d1.max(d2)
}

/// Subtract shape 2 from shape 1
#[inline]
pub fn difference(d1: f32, d2: f32) -> f32 {
    d1.max(-d2)
}

/// Polynomial smooth minimum
///
/// Equals `min(d1, d2)` once the distances differ by more than `k`; at
/// `d1 == d2` it dips `k / 4` below both. `k` must be positive.
#[inline]
pub fn smooth_union(d1: f32, d2: f32, k: f32) -> f32 {
    debug_assert!(k > 0.0, "blend radius must be positive");
    let h = (0.5 + 0.5 * (d2 - d1) / k).clamp(0.0, 1.0);
    d2.lerp(d1, h) - k * h * (1.0 - h)
}

/// Polynomial smooth maximum
///
/// Mirror of [`smooth_union`]: equals `max(d1, d2)` away from the blend
/// region and bulges `k / 4` above both at `d1 == d2`.
#[inline]
pub fn smooth_intersection(d1: f32, d2: f32, k: f32) -> f32 {
    debug_assert!(k > 0.0, "blend radius must be positive");
    let h = (0.5 - 0.5 * (d2 - d1) / k).clamp(0.0, 1.0);
    d2.lerp(d1, h) + k * h * (1.0 - h)
}
