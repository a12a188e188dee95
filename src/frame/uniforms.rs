//! Per-frame uniform block shared with the shader

use bytemuck::{Pod, Zeroable};

/// Parameters the host refreshes once per frame
///
/// Field order matches the shader's `FrameUniforms` struct. SDF evaluation
/// only ever reads it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    /// Viewport width / height
    pub aspect: f32, // offset 0
    /// Animation clock in seconds
    pub time: f32, // offset 4
    /// Base radius of both shapes
    pub rad: f32, // offset 8
    /// Circle visibility (0 = gone, 1 = full size)
    pub circle_mul: f32, // offset 12
    /// Fire visibility (0 = gone, 1 = full size)
    pub fire_mul: f32, // offset 16
    _pad: [f32; 3], // pad to 32 bytes for uniform alignment
}

impl FrameUniforms {
    /// Circle fully shown, fire hidden, clock at zero
    pub fn new(aspect: f32, rad: f32) -> Self {
        Self {
            aspect,
            time: 0.0,
            rad,
            circle_mul: 1.0,
            fire_mul: 0.0,
            _pad: [0.0; 3],
        }
    }

    /// Recompute the aspect ratio after a resize (zero height is ignored)
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self::new(1.0, crate::consts::DEFAULT_RADIUS)
    }
}
