//! Log bridge for particle-term
//!
//! Routes every `log::info!()`/`log::debug!()`/... record from all workspace
//! crates to a single file:
//!
//! - `/tmp/particle_term_debug.log` on Unix/macOS
//! - `%TEMP%\particle_term_debug.log` on Windows
//!
//! This keeps diagnostics off the window and the controlling terminal. When
//! `RUST_LOG` is set, records are mirrored to stderr as well and `RUST_LOG`
//! picks the level; otherwise the config `log_level` does.

use parking_lot::Mutex;
use particle_term_config::LogLevel;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Path of the debug log file
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    let path = PathBuf::from("/tmp/particle_term_debug.log");
    #[cfg(not(unix))]
    let path = std::env::temp_dir().join("particle_term_debug.log");
    path
}

struct LogBridge {
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl LogBridge {
    fn write_line(&self, line: &str) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.write_line(&format!(
            "[{}] [{:<5}] [{}] {}\n",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        ));
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Parse a `RUST_LOG` value. Only a bare level is honoured; per-module
/// filters fall back to `Info`.
fn parse_rust_log(value: &str) -> log::LevelFilter {
    value.trim().parse().unwrap_or(log::LevelFilter::Info)
}

/// Install the bridge as the global logger.
///
/// Safe to call more than once; later calls only adjust the level.
pub fn init_log_bridge(config_level: LogLevel) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let level = match rust_log.as_deref() {
        Some(value) => parse_rust_log(value),
        None => config_level.to_level_filter(),
    };

    let bridge = BRIDGE.get_or_init(|| {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
            .ok();
        LogBridge {
            file: Mutex::new(file),
            mirror_stderr: rust_log.is_some(),
        }
    });

    if log::set_logger(bridge).is_ok() && level != log::LevelFilter::Off {
        bridge.write_line(&format!(
            "\n{}\nparticle-term session started at {} (level={})\n{}\n",
            "=".repeat(80),
            get_timestamp(),
            level,
            "=".repeat(80)
        ));
    }
    log::set_max_level(level);
}
