//! Particle compiler and GPU renderer for particle-term.
//!
//! - [`particle_system`] turns terminal cells into particle targets, diffing
//!   per-cell signatures so only changed cells are rasterized.
//! - [`gpu`] holds the storage buffers, the spring-damper compute pipeline and
//!   the instanced quad pipeline.
//! - [`ParticleRenderer`] ties both to a window surface.

pub mod error;
pub mod gpu;
pub mod particle_system;
pub mod renderer;

pub use error::RenderError;
pub use gpu::ParticleGpu;
pub use particle_system::{
    DirtyRange, FrameReport, LinkSpan, ParticleBuffers, ParticleSettings, ParticleSystem,
    ParticleSystemConfig, PendingUpload, PhysicsUniforms, RenderUniforms, Selection, Shockwave,
};
pub use renderer::ParticleRenderer;
