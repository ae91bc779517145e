// Hide console window on Windows release builds
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Result;
use particle_term::app::App;
use particle_term_config::LogLevel;
use std::sync::Arc;
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    // Routes all log records to /tmp/particle_term_debug.log. RUST_LOG wins
    // over the config level, which is applied once the config is loaded.
    particle_term::debug::init_log_bridge(LogLevel::Off);

    log::info!("Starting particle-term {}", particle_term::VERSION);

    // Tokio runtime for blocking on GPU adapter and device requests
    let runtime = Arc::new(Runtime::new()?);

    let result = App::new(Arc::clone(&runtime)).and_then(App::run);

    log::info!("Event loop exited, shutting down runtime");
    if let Ok(rt) = Arc::try_unwrap(runtime) {
        rt.shutdown_timeout(std::time::Duration::from_secs(2));
    }

    if let Err(ref e) = result {
        eprintln!("particle-term: error: {e:#}");
        #[cfg(target_os = "linux")]
        {
            let msg = format!("{e:?}").to_lowercase();
            if msg.contains("display")
                || msg.contains("wayland")
                || msg.contains("xcb")
                || msg.contains("x server")
            {
                eprintln!(
                    "particle-term: hint: no display server found; set DISPLAY (X11) or \
                     WAYLAND_DISPLAY (Wayland)"
                );
            }
        }
    }
    result
}
