//! GPU pipeline creation for the particle renderer.
//!
//! One compute pipeline steps every particle toward its target; one render
//! pipeline draws each particle as an instanced quad, reading the particle
//! arrays straight from storage buffers.

use wgpu::*;

/// Additive blending so overlapping particles glow.
const ADDITIVE_GLOW: BlendState = BlendState {
    color: BlendComponent {
        src_factor: BlendFactor::SrcAlpha,
        dst_factor: BlendFactor::One,
        operation: BlendOperation::Add,
    },
    alpha: BlendComponent {
        src_factor: BlendFactor::One,
        dst_factor: BlendFactor::Zero,
        operation: BlendOperation::Add,
    },
};

fn uniform_entry(binding: u32, visibility: ShaderStages) -> BindGroupLayoutEntry {
    BindGroupLayoutEntry {
        binding,
        visibility,
        ty: BindingType::Buffer {
            ty: BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn storage_entry(binding: u32, visibility: ShaderStages, read_only: bool) -> BindGroupLayoutEntry {
    BindGroupLayoutEntry {
        binding,
        visibility,
        ty: BindingType::Buffer {
            ty: BufferBindingType::Storage { read_only },
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

/// Compute bind group layout: uniforms, position, velocity, target, extra.
pub fn create_compute_bind_group_layout(device: &Device) -> BindGroupLayout {
    device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some("particle compute bind group layout"),
        entries: &[
            uniform_entry(0, ShaderStages::COMPUTE),
            storage_entry(1, ShaderStages::COMPUTE, false),
            storage_entry(2, ShaderStages::COMPUTE, false),
            storage_entry(3, ShaderStages::COMPUTE, true),
            storage_entry(4, ShaderStages::COMPUTE, false),
        ],
    })
}

/// Render bind group layout: uniforms, position, color, extra.
pub fn create_render_bind_group_layout(device: &Device) -> BindGroupLayout {
    device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some("particle render bind group layout"),
        entries: &[
            uniform_entry(0, ShaderStages::VERTEX_FRAGMENT),
            storage_entry(1, ShaderStages::VERTEX, true),
            storage_entry(2, ShaderStages::VERTEX, true),
            storage_entry(3, ShaderStages::VERTEX, true),
        ],
    })
}

/// Bind `buffers` in order after the uniform buffer at binding 0.
pub fn create_bind_group(
    device: &Device,
    label: &str,
    layout: &BindGroupLayout,
    uniforms: &Buffer,
    buffers: &[&Buffer],
) -> BindGroup {
    let entries: Vec<BindGroupEntry> = std::iter::once(uniforms)
        .chain(buffers.iter().copied())
        .enumerate()
        .map(|(binding, buffer)| BindGroupEntry {
            binding: binding as u32,
            resource: buffer.as_entire_binding(),
        })
        .collect();

    device.create_bind_group(&BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &entries,
    })
}

/// Create the spring-damper compute pipeline
pub fn create_compute_pipeline(device: &Device, layout: &BindGroupLayout) -> ComputePipeline {
    let shader = device.create_shader_module(include_wgsl!("../shaders/particle_compute.wgsl"));

    let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("particle compute pipeline layout"),
        bind_group_layouts: &[layout],
        push_constant_ranges: &[],
    });

    device.create_compute_pipeline(&ComputePipelineDescriptor {
        label: Some("particle compute pipeline"),
        layout: Some(&pipeline_layout),
        module: &shader,
        entry_point: Some("main"),
        compilation_options: Default::default(),
        cache: None,
    })
}

/// Create the instanced particle quad pipeline
pub fn create_render_pipeline(
    device: &Device,
    surface_format: TextureFormat,
    layout: &BindGroupLayout,
) -> RenderPipeline {
    let shader = device.create_shader_module(include_wgsl!("../shaders/particle.wgsl"));

    let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("particle render pipeline layout"),
        bind_group_layouts: &[layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&RenderPipelineDescriptor {
        label: Some("particle render pipeline"),
        layout: Some(&pipeline_layout),
        vertex: VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            // Corners come from the vertex index; particles from storage.
            buffers: &[],
        },
        fragment: Some(FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(ColorTargetState {
                format: surface_format,
                blend: Some(ADDITIVE_GLOW),
                write_mask: ColorWrites::ALL,
            })],
        }),
        primitive: PrimitiveState {
            topology: PrimitiveTopology::TriangleStrip,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
