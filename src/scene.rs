//! Demo scene: an animated circle that crossfades into a flame
//!
//! Both shapes are fixed compositions of the SDF primitives. The shader in
//! `renderer/sdf_shader.wgsl` mirrors these functions line for line; keep the
//! two in sync when tuning.

use glam::Vec2;

use crate::frame::FrameUniforms;
use crate::sdf::{
    parabola_nearest_point, rotate, scale, sd_circle, sd_triangle, smooth_intersection,
    smooth_union, translate,
};

/// Flame body triangle, far vertices at `(±x, y)` in unit space
pub const FIRE_BODY: Vec2 = Vec2::new(0.55, 1.6);
/// Height of the flame tip above the shape center
pub const FIRE_TIP_HEIGHT: f32 = 1.0;
/// Sway amplitude, in fractions of a turn
pub const FIRE_SWAY_TURNS: f32 = 0.01;
/// Sway angular speed (rad/s)
pub const FIRE_SWAY_SPEED: f32 = 3.0;
/// Radius of the round base of the flame
pub const FIRE_BOWL_RADIUS: f32 = 0.6;
/// Distance of the bowl center below the shape center
pub const FIRE_BOWL_DEPTH: f32 = 0.4;
/// Blend between body and bowl
pub const FIRE_BODY_BLEND: f32 = 0.3;
/// Curvature of the parabola cup trimming the flame sides
pub const FIRE_CUP_CURVATURE: f32 = 1.2;
/// Distance of the cup vertex below the shape center
pub const FIRE_CUP_DEPTH: f32 = 1.0;
/// Blend between flame and cup
pub const FIRE_CUP_BLEND: f32 = 0.2;

/// Blend between circle and flame while both are partly visible
pub const SCENE_BLEND: f32 = 0.05;
/// How far past its radius a shape recedes at multiplier 0
pub const SCENE_FADE_SCALE: f32 = 1.5;

/// Map a viewport coordinate to scene space
///
/// `uv` runs from (0, 0) top-left to (1, 1) bottom-right. The result is
/// centered with y up, and x is stretched by `aspect` so circles stay round.
#[inline]
pub fn frame_point(uv: Vec2, aspect: f32) -> Vec2 {
    Vec2::new((uv.x * 2.0 - 1.0) * aspect, 1.0 - uv.y * 2.0)
}

/// Wobbling circle at the base radius
#[inline]
pub fn circle_distance(p: Vec2, uniforms: &FrameUniforms) -> f32 {
    sd_circle(p, uniforms.rad, uniforms.time)
}

/// Signed distance to the cup `y = k·x²`, negative above the curve
///
/// `sd_parabola` has a zero sign on the axis below the focus, which would pin
/// the whole center column of the flame to its boundary. The side is taken
/// from the curve itself instead.
fn cup_distance(p: Vec2, k: f32) -> f32 {
    let edge = p.distance(parabola_nearest_point(p, k));
    if p.y > k * p.x * p.x { -edge } else { edge }
}

/// Flame built in unit space and scaled to the base radius
pub fn fire_distance(p: Vec2, uniforms: &FrameUniforms) -> f32 {
    let local = scale(p, uniforms.rad);
    let sway = FIRE_SWAY_TURNS * (uniforms.time * FIRE_SWAY_SPEED).sin();

    // Half a turn points the triangle's apex up
    let body_p = rotate(translate(local, Vec2::new(0.0, -FIRE_TIP_HEIGHT)), 0.5 + sway);
    let body = sd_triangle(body_p, FIRE_BODY);

    let bowl_p = translate(local, Vec2::new(0.0, FIRE_BOWL_DEPTH));
    let bowl = sd_circle(bowl_p, FIRE_BOWL_RADIUS, uniforms.time);

    let flame = smooth_union(body, bowl, FIRE_BODY_BLEND);

    let cup_p = translate(local, Vec2::new(0.0, FIRE_CUP_DEPTH));
    let cup = cup_distance(cup_p, FIRE_CUP_CURVATURE);

    smooth_intersection(flame, cup, FIRE_CUP_BLEND) * uniforms.rad
}

/// Final distance for one pixel
///
/// Each shape is pushed outward by `(1 - mul)` of its fade range, so a
/// multiplier of 0 hides it entirely.
pub fn scene_distance(p: Vec2, uniforms: &FrameUniforms) -> f32 {
    let fade = uniforms.rad * SCENE_FADE_SCALE;
    let circle = circle_distance(p, uniforms) + (1.0 - uniforms.circle_mul) * fade;
    let fire = fire_distance(p, uniforms) + (1.0 - uniforms.fire_mul) * fade;
    smooth_union(circle, fire, SCENE_BLEND)
}
