//! Window-facing renderer: surface, device and the per-frame pipeline.

use std::sync::Arc;

use particle_term_config::TerminalGrid;
use winit::window::Window;

use crate::error::RenderError;
use crate::gpu::ParticleGpu;
use crate::particle_system::{FrameReport, ParticleSystem, ParticleSystemConfig};

/// Number of frames to queue up for the surface
const SURFACE_FRAME_LATENCY: u32 = 2;

/// Owns the wgpu surface and device plus the particle system drawn into them.
pub struct ParticleRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    gpu: ParticleGpu,
    system: ParticleSystem,
}

impl ParticleRenderer {
    pub async fn new(
        window: Arc<Window>,
        system_config: ParticleSystemConfig,
    ) -> Result<Self, RenderError> {
        // Windows: DX12, macOS: Metal, Linux: Vulkan with a GL fallback
        #[cfg(target_os = "windows")]
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::DX12,
            ..Default::default()
        });
        #[cfg(target_os = "macos")]
        let instance = wgpu::Instance::default();
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::VULKAN | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("GPU adapter: {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("particle device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::Performance,
                ..Default::default()
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or(RenderError::NoSurfaceFormat)?;
        let alpha_mode = if surface_caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };

        let size = window.inner_size();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: SURFACE_FRAME_LATENCY,
        };
        surface.configure(&device, &config);

        // Limits::default() caps a storage binding at 128 MiB.
        let max_binding = device.limits().max_storage_buffer_binding_size as u64;
        let capacity = system_config
            .max_particles
            .min((max_binding / crate::particle_system::buffers::PARTICLE_STRIDE) as usize);
        if capacity < system_config.max_particles {
            log::warn!(
                "Particle capacity reduced to {} by device limits (requested {})",
                capacity,
                system_config.max_particles
            );
        }
        let gpu = ParticleGpu::new(&device, surface_format, capacity);
        let system = ParticleSystem::new(ParticleSystemConfig {
            max_particles: capacity,
            width: config.width as f32,
            height: config.height as f32,
            ..system_config
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            gpu,
            system,
        })
    }

    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    pub fn system_mut(&mut self) -> &mut ParticleSystem {
        &mut self.system
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.system.resize(width as f32, height as f32);
    }

    /// Reconfigure the surface at its current size, after it was lost or
    /// became outdated.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Compile `grid`, upload, step the physics and present one frame.
    pub fn render<G: TerminalGrid + ?Sized>(
        &mut self,
        grid: &G,
        dt: f32,
    ) -> Result<FrameReport, RenderError> {
        let report = self.system.update_from_terminal(grid);
        let pending = self.system.take_pending_upload();
        self.gpu.upload(&self.queue, self.system.buffers(), pending);

        let physics = self.system.step(dt);
        let render = self.system.render_uniforms();
        self.gpu.write_uniforms(&self.queue, &physics, &render);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("particle frame encoder"),
            });

        let count = self.system.particle_count();
        self.gpu.dispatch(&mut encoder, count);

        let opacity = self.system.settings().window_opacity as f64;
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("particle render pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.0,
                            g: 0.0,
                            b: 0.0,
                            a: opacity,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.gpu.draw(&mut render_pass, count);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(report)
    }
}
