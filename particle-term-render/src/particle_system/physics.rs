//! Uniform blocks for the compute and render shaders.

use bytemuck::{Pod, Zeroable};

use super::ParticleSystem;

/// Threads per compute workgroup; must match `@workgroup_size` in the shader.
pub const WORKGROUP_SIZE: u32 = 256;

/// Workgroups needed to step `count` particles.
pub fn dispatch_size(count: usize) -> u32 {
    (count as u32).div_ceil(WORKGROUP_SIZE)
}

/// Last shockwave origin in pixels and the time it started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shockwave {
    pub x: f32,
    pub y: f32,
    pub start_time: f32,
}

impl Default for Shockwave {
    /// Far off-screen and long expired.
    fn default() -> Self {
        Self {
            x: -1000.0,
            y: -1000.0,
            start_time: -10.0,
        }
    }
}

/// Compute shader uniforms. Layout matches `PhysicsParams` in
/// `particle_compute.wgsl`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct PhysicsUniforms {
    pub delta_time: f32,
    pub elapsed: f32,
    pub bounds: [f32; 2],
    pub spring_k: f32,
    pub drag: f32,
    pub shimmer_base: f32,
    pub style: u32,
    /// x, y, start time, unused
    pub shockwave: [f32; 4],
    pub particle_count: u32,
    pub _padding: [u32; 3],
}

/// Render shader uniforms. Layout matches `RenderParams` in `particle.wgsl`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct RenderUniforms {
    /// Column-major pixel-to-clip matrix.
    pub projection: [[f32; 4]; 4],
    /// rgb tint, alpha is window opacity
    pub tint: [f32; 4],
    pub resolution: [f32; 2],
    pub glow_intensity: f32,
    pub brightness: f32,
    pub vibrance: f32,
    pub shimmer_speed: f32,
    pub elapsed: f32,
    pub scanline_intensity: f32,
    pub theme: u32,
    pub _padding: [u32; 3],
}

/// Orthographic pixel-space projection (origin top-left, y down), zoomed
/// about the viewport centre.
pub fn zoomed_projection(width: f32, height: f32, zoom: f32) -> [[f32; 4]; 4] {
    let sx = 2.0 * zoom / width;
    let sy = -2.0 * zoom / height;
    [
        [sx, 0.0, 0.0, 0.0],
        [0.0, sy, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [-zoom, zoom, 0.0, 1.0],
    ]
}

impl ParticleSystem {
    /// Advance the animation clock and build this frame's physics uniforms.
    pub fn step(&mut self, dt: f32) -> PhysicsUniforms {
        self.elapsed += dt;
        let settings = &self.settings;
        PhysicsUniforms {
            delta_time: dt,
            elapsed: self.elapsed,
            bounds: self.viewport,
            spring_k: settings.spring_k,
            drag: settings.drag,
            shimmer_base: settings.shimmer_speed,
            style: settings.animation_style.id(),
            shockwave: [
                self.shockwave.x,
                self.shockwave.y,
                self.shockwave.start_time,
                0.0,
            ],
            particle_count: self.buffers.len() as u32,
            _padding: [0; 3],
        }
    }

    pub fn render_uniforms(&self) -> RenderUniforms {
        let s = &self.settings;
        let [width, height] = self.viewport;
        RenderUniforms {
            projection: zoomed_projection(width, height, s.zoom_level),
            tint: [s.color_tint[0], s.color_tint[1], s.color_tint[2], s.window_opacity],
            resolution: self.viewport,
            glow_intensity: s.glow_intensity,
            brightness: s.brightness,
            vibrance: s.vibrance,
            shimmer_speed: s.shimmer_speed,
            elapsed: self.elapsed,
            scanline_intensity: s.scanline_intensity,
            theme: s.theme.id(),
            _padding: [0; 3],
        }
    }
}
