//! GPU copy of the particle store.
//!
//! [`ParticleGpu`] owns one storage buffer per particle array, sized once for
//! the fixed capacity, plus the uniform buffers and both pipelines. The CPU
//! store is copied in whole after a rebuild and by dirty range otherwise.

pub mod pipeline;

use bytemuck::Pod;
use wgpu::*;

use crate::particle_system::buffers::PARTICLE_STRIDE;
use crate::particle_system::{
    DirtyRange, ParticleBuffers, PendingUpload, PhysicsUniforms, RenderUniforms, dispatch_size,
};

/// Quad corners per particle instance.
const QUAD_VERTICES: u32 = 4;

/// Storage, uniform and pipeline state for the particle renderer.
pub struct ParticleGpu {
    position: Buffer,
    velocity: Buffer,
    target: Buffer,
    color: Buffer,
    extra: Buffer,
    physics_uniforms: Buffer,
    render_uniforms: Buffer,
    compute_pipeline: ComputePipeline,
    compute_bind_group: BindGroup,
    render_pipeline: RenderPipeline,
    render_bind_group: BindGroup,
    capacity: usize,
}

fn storage_buffer(device: &Device, label: &str, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some(label),
        size: capacity.max(1) as u64 * PARTICLE_STRIDE,
        usage: BufferUsages::STORAGE | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn uniform_buffer<T: Pod>(device: &Device, label: &str) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<T>() as u64,
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl ParticleGpu {
    pub fn new(device: &Device, surface_format: TextureFormat, capacity: usize) -> Self {
        let position = storage_buffer(device, "particle position", capacity);
        let velocity = storage_buffer(device, "particle velocity", capacity);
        let target = storage_buffer(device, "particle target", capacity);
        let color = storage_buffer(device, "particle color", capacity);
        let extra = storage_buffer(device, "particle extra", capacity);
        let physics_uniforms = uniform_buffer::<PhysicsUniforms>(device, "physics uniforms");
        let render_uniforms = uniform_buffer::<RenderUniforms>(device, "render uniforms");

        let compute_layout = pipeline::create_compute_bind_group_layout(device);
        let compute_bind_group = pipeline::create_bind_group(
            device,
            "particle compute bind group",
            &compute_layout,
            &physics_uniforms,
            &[&position, &velocity, &target, &extra],
        );
        let compute_pipeline = pipeline::create_compute_pipeline(device, &compute_layout);

        let render_layout = pipeline::create_render_bind_group_layout(device);
        let render_bind_group = pipeline::create_bind_group(
            device,
            "particle render bind group",
            &render_layout,
            &render_uniforms,
            &[&position, &color, &extra],
        );
        let render_pipeline =
            pipeline::create_render_pipeline(device, surface_format, &render_layout);

        log::info!(
            "Particle GPU buffers: capacity={} ({} MiB per array)",
            capacity,
            capacity as u64 * PARTICLE_STRIDE / (1024 * 1024)
        );

        Self {
            position,
            velocity,
            target,
            color,
            extra,
            physics_uniforms,
            render_uniforms,
            compute_pipeline,
            compute_bind_group,
            render_pipeline,
            render_bind_group,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Apply whatever the particle system queued this frame.
    pub fn upload(&self, queue: &Queue, buffers: &ParticleBuffers, pending: PendingUpload) {
        match pending {
            PendingUpload::Nothing => {}
            PendingUpload::Full => self.upload_all(queue, buffers),
            PendingUpload::Range(range) => self.upload_dirty(queue, buffers, range),
        }
    }

    /// Copy the dirty span of position, velocity, target and color.
    pub fn upload_dirty(&self, queue: &Queue, buffers: &ParticleBuffers, range: DirtyRange) {
        let len = buffers.len().min(self.capacity);
        let Some((offset, size)) = range.byte_range(len) else {
            return;
        };
        let first = (offset / PARTICLE_STRIDE) as usize;
        let last = first + (size / PARTICLE_STRIDE) as usize;
        for (gpu, cpu) in [
            (&self.position, &buffers.position),
            (&self.velocity, &buffers.velocity),
            (&self.target, &buffers.target),
            (&self.color, &buffers.color),
        ] {
            queue.write_buffer(gpu, offset, bytemuck::cast_slice(&cpu[first..last]));
        }
    }

    /// Copy every array in full, `extra` included.
    pub fn upload_all(&self, queue: &Queue, buffers: &ParticleBuffers) {
        let len = buffers.len().min(self.capacity);
        if len == 0 {
            return;
        }
        for (gpu, cpu) in [
            (&self.position, &buffers.position),
            (&self.velocity, &buffers.velocity),
            (&self.target, &buffers.target),
            (&self.color, &buffers.color),
            (&self.extra, &buffers.extra),
        ] {
            queue.write_buffer(gpu, 0, bytemuck::cast_slice(&cpu[..len]));
        }
        log::debug!("Uploaded full particle store ({} particles)", len);
    }

    pub fn write_uniforms(&self, queue: &Queue, physics: &PhysicsUniforms, render: &RenderUniforms) {
        queue.write_buffer(&self.physics_uniforms, 0, bytemuck::bytes_of(physics));
        queue.write_buffer(&self.render_uniforms, 0, bytemuck::bytes_of(render));
    }

    /// Record the physics step for `count` particles.
    pub fn dispatch(&self, encoder: &mut CommandEncoder, count: usize) {
        let groups = dispatch_size(count.min(self.capacity));
        if groups == 0 {
            return;
        }
        let mut pass = encoder.begin_compute_pass(&ComputePassDescriptor {
            label: Some("particle physics"),
            timestamp_writes: None,
        });
        pass.set_pipeline(&self.compute_pipeline);
        pass.set_bind_group(0, &self.compute_bind_group, &[]);
        pass.dispatch_workgroups(groups, 1, 1);
    }

    /// Draw `count` particles as instanced quads.
    pub fn draw(&self, pass: &mut RenderPass<'_>, count: usize) {
        let count = count.min(self.capacity) as u32;
        if count == 0 {
            return;
        }
        pass.set_pipeline(&self.render_pipeline);
        pass.set_bind_group(0, &self.render_bind_group, &[]);
        pass.draw(0..QUAD_VERTICES, 0..count);
    }
}
