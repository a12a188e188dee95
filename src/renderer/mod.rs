//! WebGPU rendering module
//!
//! The fragment shader ports `sdf` and `scene` to WGSL and evaluates them
//! per pixel; `post` blurs and color-splits the result.

pub mod post;
pub mod sdf_pipeline;

pub use sdf_pipeline::SdfRenderState;

/// WGSL source of the scene shader
pub const SDF_SHADER: &str = include_str!("sdf_shader.wgsl");
/// WGSL source of the blur and aberration passes
pub const POST_SHADER: &str = include_str!("post_shader.wgsl");
