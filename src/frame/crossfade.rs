//! Circle/fire crossfade driven by tap input
//!
//! Each tap toggles the target shape and fades the multipliers linearly over
//! a fixed duration. The clock advances by a fixed step per frame, not by
//! wall time, so playback is deterministic.

use glam::FloatExt;

use super::FrameUniforms;
use crate::settings::Settings;

/// Which shape the crossfade is heading toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    #[default]
    Circle,
    Fire,
}

impl Shape {
    pub fn toggled(self) -> Self {
        match self {
            Shape::Circle => Shape::Fire,
            Shape::Fire => Shape::Circle,
        }
    }
}

/// Animation state for swapping between the two shapes
#[derive(Debug, Clone)]
pub struct ShapeCrossfade {
    current: Shape,
    /// Clock value when the running transition began
    transition_start: Option<f32>,
    /// Transition length in seconds
    duration: f32,
    /// Clock step per frame
    frame_dt: f32,
}

impl ShapeCrossfade {
    pub fn new(duration: f32, frames_per_second: u32) -> Self {
        Self {
            current: Shape::Circle,
            transition_start: None,
            duration,
            frame_dt: 1.0 / frames_per_second.max(1) as f32,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.animation_duration, settings.frames_per_second)
    }

    /// Shape currently shown (or being faded in)
    pub fn current(&self) -> Shape {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition_start.is_some()
    }

    /// Toggle the target shape and start fading from the current clock
    ///
    /// Swapping mid-transition restarts the fade from full values.
    pub fn swap(&mut self, uniforms: &FrameUniforms) {
        self.current = self.current.toggled();
        self.transition_start = Some(uniforms.time);
        log::debug!("Swapping to {:?} at t={:.3}", self.current, uniforms.time);
    }

    /// Step the clock by one frame and update the shape multipliers
    pub fn advance(&mut self, uniforms: &mut FrameUniforms) {
        uniforms.time += self.frame_dt;

        let Some(start) = self.transition_start else {
            return;
        };

        let progress = if self.duration > 0.0 {
            ((uniforms.time - start) / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let fading_out = 1.0_f32.lerp(0.0, progress);
        let fading_in = 0.0_f32.lerp(1.0, progress);

        match self.current {
            Shape::Circle => {
                uniforms.circle_mul = fading_in;
                uniforms.fire_mul = fading_out;
            }
            Shape::Fire => {
                uniforms.circle_mul = fading_out;
                uniforms.fire_mul = fading_in;
            }
        }

        if progress >= 1.0 {
            self.transition_start = None;
        }
    }
}

impl Default for ShapeCrossfade {
    fn default() -> Self {
        Self::new(
            crate::consts::DEFAULT_ANIMATION_DURATION,
            crate::consts::DEFAULT_FRAMES_PER_SECOND,
        )
    }
}
