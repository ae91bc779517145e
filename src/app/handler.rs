//! winit event loop entry points for `AppState`.

use super::AppState;
use particle_term_render::{ParticleRenderer, ParticleSystemConfig, RenderError};
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

/// Logical pixels per cell used for the initial window size.
const INITIAL_CELL_SIZE: (f64, f64) = (10.0, 20.0);

impl AppState {
    async fn initialize_async(&mut self, window: Arc<Window>) -> Result<(), RenderError> {
        let size = window.inner_size();
        let system_config =
            ParticleSystemConfig::from_config(&self.config, size.width as f32, size.height as f32);
        let mut renderer = ParticleRenderer::new(window.clone(), system_config).await?;
        renderer.system_mut().set_zoom_level(self.config.zoom_level);
        // The configured density wins over the zoom tier at startup.
        renderer.system_mut().set_density(self.config.density);

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.update_title();
        Ok(())
    }

    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        let now = Instant::now();
        let (dt, fps) = self.clock.tick(now);
        if let Some(fps) = fps {
            log::debug!("{:.1} fps, {} particles", fps, renderer.system().particle_count());
            renderer
                .system_mut()
                .adjust_quality(fps, self.config.target_fps as f32);
        }
        if self.blink.update(now) {
            renderer.system_mut().set_cursor_blink_visible(self.blink.visible());
        }
        if self.terminal.take_bell()
            && let Some(window) = &self.window
        {
            log::debug!("Bell");
            window.request_user_attention(Some(winit::window::UserAttentionType::Informational));
        }

        match renderer.render(&self.terminal, dt) {
            Ok(report) => {
                if report.full_rebuild {
                    log::info!(
                        "Full rebuild: {} cells, {} particles",
                        report.cells_rasterized,
                        report.particle_count
                    );
                }
            }
            Err(RenderError::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                renderer.reconfigure();
            }
            Err(RenderError::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Frame skipped: {}", e),
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let window_attrs = Window::default_attributes()
            .with_title("particle-term")
            .with_inner_size(LogicalSize::new(
                self.config.cols as f64 * INITIAL_CELL_SIZE.0,
                self.config.rows as f64 * INITIAL_CELL_SIZE.1,
            ))
            .with_transparent(self.config.window_opacity < 1.0);

        match event_loop.create_window(window_attrs) {
            Ok(window) => {
                let runtime = Arc::clone(&self.runtime);
                if let Err(e) = runtime.block_on(self.initialize_async(Arc::new(window))) {
                    log::error!("Failed to initialize renderer: {}", e);
                    eprintln!("particle-term: error: {e}");
                    event_loop.exit();
                }
            }
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event),
            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer = None;
                self.set_hovered_link(None);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_button(state, button);
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
