//! Signed distance field core
//!
//! Pure, stateless 2D math evaluated once per pixel:
//! - `transform`: move a query point into a shape's local frame
//! - `ops`: hard and smooth boolean combinators over distances
//! - `primitives`: circle, triangle and parabola distance functions
//!
//! Negative distances are inside, positive outside. Nothing here allocates,
//! logs or loops, so every function is safe to call from any number of
//! threads at once.

pub mod ops;
pub mod primitives;
pub mod transform;

pub use ops::{difference, intersection, smooth_intersection, smooth_union, union};
pub use primitives::{parabola_nearest_point, sd_circle, sd_parabola, sd_triangle};
pub use transform::{rotate, scale, translate};

/// Shader-style sign: -1, 0 or 1
///
/// Unlike `f32::signum`, zero maps to zero.
#[inline]
pub(crate) fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
