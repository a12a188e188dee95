//! Post-processing chain: blur, then chromatic aberration
//!
//! The scene pass draws into `scene`, blur reads it into `back`, and the
//! aberration pass reads `back` onto the surface. Both textures follow the
//! surface size and are rebuilt on resize.

use glam::Vec2;

/// Blur tap spacing in pixels
pub const BLUR_SPREAD: f32 = 1.0;
/// Red/blue split at the viewport corners, in uv units per unit of offset
/// from the center
pub const ABERRATION_STRENGTH: f32 = 0.006;

/// 3x3 binomial kernel used by the blur pass, row-major
pub fn blur_weights() -> [[f32; 3]; 3] {
    let mut weights = [[0.0; 3]; 3];
    for (y, row) in weights.iter_mut().enumerate() {
        for (x, w) in row.iter_mut().enumerate() {
            let wx = 2.0 - (x as f32 - 1.0).abs();
            let wy = 2.0 - (y as f32 - 1.0).abs();
            *w = wx * wy / 16.0;
        }
    }
    weights
}

/// uv displacement of the red channel; blue is displaced the opposite way
#[inline]
pub fn aberration_offset(uv: Vec2) -> Vec2 {
    (uv - Vec2::splat(0.5)) * ABERRATION_STRENGTH
}

/// Offscreen textures and the bind groups that read them
pub struct PostTargets {
    pub scene_view: wgpu::TextureView,
    pub back_view: wgpu::TextureView,
    /// Samples `scene`, for the blur pass
    pub blur_bind_group: wgpu::BindGroup,
    /// Samples `back`, for the aberration pass
    pub aberration_bind_group: wgpu::BindGroup,
}

impl PostTargets {
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let scene_view = offscreen_texture(device, "scene_texture", format, width, height)
            .create_view(&wgpu::TextureViewDescriptor::default());
        let back_view = offscreen_texture(device, "back_texture", format, width, height)
            .create_view(&wgpu::TextureViewDescriptor::default());

        let blur_bind_group = source_bind_group(device, layout, sampler, &scene_view, "blur_bind_group");
        let aberration_bind_group =
            source_bind_group(device, layout, sampler, &back_view, "aberration_bind_group");

        Self {
            scene_view,
            back_view,
            blur_bind_group,
            aberration_bind_group,
        }
    }

    /// Layout shared by both post passes: one texture and its sampler
    pub fn bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        })
    }

    pub fn sampler(device: &wgpu::Device) -> wgpu::Sampler {
        device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("post_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        })
    }
}

fn offscreen_texture(
    device: &wgpu::Device,
    label: &str,
    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
) -> wgpu::Texture {
    device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    })
}

fn source_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    view: &wgpu::TextureView,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
