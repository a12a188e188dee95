//! Mobius - procedural 2D shapes drawn with signed distance fields
//!
//! Core modules:
//! - `sdf`: Pure distance functions, combinators and point transforms
//! - `scene`: Circle and flame composed from the SDF primitives
//! - `frame`: Per-frame uniform block and the shape crossfade
//! - `renderer`: WebGPU pipeline evaluating the scene per fragment
//! - `preview`: Text rasterizer for the native build

pub mod frame;
pub mod preview;
pub mod renderer;
pub mod scene;
pub mod sdf;
pub mod settings;

pub use frame::{FrameUniforms, Shape, ShapeCrossfade};
pub use settings::Settings;

/// Demo configuration defaults
pub mod consts {
    /// Base radius of both shapes (screen height spans 2 units)
    pub const DEFAULT_RADIUS: f32 = 0.35;
    /// Circle/fire crossfade length in seconds
    pub const DEFAULT_ANIMATION_DURATION: f32 = 1.0;
    /// Fixed clock rate; time advances one step per presented frame
    pub const DEFAULT_FRAMES_PER_SECOND: u32 = 60;

    /// Upper bounds accepted from settings
    pub const MAX_ANIMATION_DURATION: f32 = 60.0;
    pub const MAX_FRAMES_PER_SECOND: u32 = 240;

    /// Native preview size in characters
    pub const DEFAULT_PREVIEW_COLUMNS: usize = 64;
    pub const DEFAULT_PREVIEW_ROWS: usize = 32;
}
