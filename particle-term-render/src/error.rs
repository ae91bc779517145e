//! Typed error types for particle-term-render.
//!
//! Only GPU setup and presentation can fail. The particle compiler itself
//! truncates and normalizes instead of returning errors.

use thiserror::Error;

/// Error type for the GPU side of the particle renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    // -----------------------------------------------------------------------
    // GPU initialisation
    // -----------------------------------------------------------------------
    /// No wgpu adapter can present to the window surface.
    #[error("GPU adapter not found: {0}")]
    AdapterNotFound(String),

    /// The wgpu device could not be created or the device was lost.
    #[error("GPU device error: {0}")]
    DeviceError(String),

    /// The wgpu surface could not be created for the window.
    #[error("GPU surface creation failed: {0}")]
    SurfaceCreation(String),

    /// The surface reports no texture formats for this adapter.
    #[error("GPU surface has no supported formats")]
    NoSurfaceFormat,

    // -----------------------------------------------------------------------
    // Surface / presentation
    // -----------------------------------------------------------------------
    /// `Surface::get_current_texture()` failed (timeout, outdated, lost, ...).
    #[error("GPU surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

// ---------------------------------------------------------------------------
// Convenience conversions from common upstream error types
// ---------------------------------------------------------------------------

impl From<wgpu::CreateSurfaceError> for RenderError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        RenderError::SurfaceCreation(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for RenderError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RenderError::DeviceError(e.to_string())
    }
}

impl From<wgpu::RequestAdapterError> for RenderError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        RenderError::AdapterNotFound(e.to_string())
    }
}
