//! Application module for particle-term
//!
//! - `App`: entry point that loads config and runs the event loop
//! - `AppState`: window, renderer, terminal model and frame timing
//! - `handler`: the winit `ApplicationHandler` implementation
//! - `input`: keyboard hotkeys, local echo and mouse overlays

use crate::frame::{CursorBlink, FrameClock};
use anyhow::{Context, Result};
use particle_term_config::Config;
use particle_term_fonts::GlyphSource;
use particle_term_render::{LinkSpan, ParticleRenderer};
use particle_term_terminal::VtTerminal;
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Runtime;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::ModifiersState;
use winit::window::Window;

mod handler;
mod input;

/// Main application entry point
pub struct App {
    config: Config,
    runtime: Arc<Runtime>,
}

impl App {
    /// Load config and apply its log level
    pub fn new(runtime: Arc<Runtime>) -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        crate::debug::init_log_bridge(config.log_level);
        log::info!(
            "Config: {}x{} cells, density {}, font {}, style {}, theme {}",
            config.cols,
            config.rows,
            config.density,
            config.font_id,
            config.animation_style.display_name(),
            config.theme.display_name()
        );
        Ok(Self { config, runtime })
    }

    /// Run the application
    pub fn run(self) -> Result<()> {
        let event_loop = EventLoop::new().context("Failed to create event loop")?;
        // The particle simulation animates continuously.
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut state = AppState::new(self.config, self.runtime);
        event_loop
            .run_app(&mut state)
            .context("Event loop terminated with an error")?;
        Ok(())
    }
}

/// Per-window state
pub struct AppState {
    config: Config,
    runtime: Arc<Runtime>,
    window: Option<Arc<Window>>,
    renderer: Option<ParticleRenderer>,
    terminal: VtTerminal,

    clock: FrameClock,
    blink: CursorBlink,

    modifiers: ModifiersState,
    /// Last pointer position in window pixels
    pointer: Option<(f32, f32)>,
    /// Cell where the current drag started
    drag_anchor: Option<(usize, usize)>,
    hovered_link: Option<LinkSpan>,
}

impl AppState {
    fn new(config: Config, runtime: Arc<Runtime>) -> Self {
        let now = Instant::now();
        let mut terminal = VtTerminal::new(config.cols, config.rows);
        terminal.write(banner().as_bytes());

        Self {
            clock: FrameClock::new(now),
            blink: CursorBlink::new(config.cursor_blink_on_ms, config.cursor_blink_off_ms, now),
            config,
            runtime,
            window: None,
            renderer: None,
            terminal,
            modifiers: ModifiersState::empty(),
            pointer: None,
            drag_anchor: None,
            hovered_link: None,
        }
    }

    /// Refresh the title with the active font, theme and style.
    fn update_title(&self) {
        let (Some(window), Some(renderer)) = (&self.window, &self.renderer) else {
            return;
        };
        let system = renderer.system();
        let settings = system.settings();
        let name = self
            .terminal
            .title()
            .unwrap_or_else(|| "particle-term".to_string());
        window.set_title(&format!(
            "{} | {} | {} | {}",
            name,
            system.glyph_source().name(),
            settings.theme.display_name(),
            settings.animation_style.display_name()
        ));
    }
}

/// Text written into the terminal at startup.
fn banner() -> String {
    let mut text = String::from("\x1b[1mparticle-term\x1b[0m  every glyph is a swarm of particles\r\n\r\n");
    for id in 0..GlyphSource::CATALOG_LEN {
        text.push_str(&format!(
            "  F{}  {}\r\n",
            id + 1,
            GlyphSource::from_id(id).name()
        ));
    }
    text.push_str("  F9  next theme    F10 next animation style\r\n");
    text.push_str("  Ctrl+= / Ctrl+-  zoom\r\n\r\n");
    text.push_str(
        "\x1b[31mred\x1b[0m \x1b[32mgreen\x1b[0m \x1b[34mblue\x1b[0m \x1b[7minverse\x1b[0m \
         \x1b[38;2;255;0;128mtruecolor\x1b[0m \x1b[44m on blue \x1b[0m\r\n",
    );
    text.push_str("Hover a link: https://www.rust-lang.org\r\n\r\n> ");
    text
}
