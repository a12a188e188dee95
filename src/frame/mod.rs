//! Per-frame host state
//!
//! The host owns the uniform block and the crossfade that drives it. The SDF
//! core only ever receives a copy of [`FrameUniforms`].

pub mod crossfade;
pub mod uniforms;

pub use crossfade::{Shape, ShapeCrossfade};
pub use uniforms::FrameUniforms;
