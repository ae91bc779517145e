//! The `Config` struct plus YAML persistence and validation.
//!
//! Covers:
//! - `load` / `save` (YAML file I/O with atomic write)
//! - XDG-style path helpers (`config_path`, `config_dir`)
//! - `validate`, which clamps out-of-range values in place
//! - the zoom-to-density tier table

use crate::defaults;
use crate::error::ConfigError;
use crate::types::{AnimationStyle, LogLevel, VisualTheme};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User-tunable settings for the particle terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Initial grid width in cells
    #[serde(default = "defaults::cols")]
    pub cols: usize,

    /// Initial grid height in cells
    #[serde(default = "defaults::rows")]
    pub rows: usize,

    /// Particles per glyph pixel (4-16 in the zoom tiers)
    #[serde(default = "defaults::density")]
    pub density: u32,

    /// View zoom; also selects the density tier when changed at runtime
    #[serde(default = "defaults::zoom_level")]
    pub zoom_level: f32,

    /// Glyph source id (0 Classic 8x8 .. 6 CRT Retro)
    #[serde(default = "defaults::font_id")]
    pub font_id: u32,

    #[serde(default = "defaults::animation_style")]
    pub animation_style: AnimationStyle,

    #[serde(default = "defaults::theme")]
    pub theme: VisualTheme,

    /// Spring stiffness pulling particles to their targets
    #[serde(default = "defaults::spring_k")]
    pub spring_k: f32,

    /// Per-step velocity retention (0..1)
    #[serde(default = "defaults::drag")]
    pub drag: f32,

    #[serde(default = "defaults::shimmer_speed")]
    pub shimmer_speed: f32,

    #[serde(default = "defaults::glow_intensity")]
    pub glow_intensity: f32,

    #[serde(default = "defaults::brightness")]
    pub brightness: f32,

    #[serde(default = "defaults::vibrance")]
    pub vibrance: f32,

    /// Hard cap on the particle store, fixed for the lifetime of the renderer
    #[serde(default = "defaults::max_particles")]
    pub max_particles: usize,

    /// Frame rate the adaptive quality loop aims for
    #[serde(default = "defaults::target_fps")]
    pub target_fps: u32,

    #[serde(default = "defaults::cursor_blink_on_ms")]
    pub cursor_blink_on_ms: u64,

    #[serde(default = "defaults::cursor_blink_off_ms")]
    pub cursor_blink_off_ms: u64,

    #[serde(default = "defaults::window_opacity")]
    pub window_opacity: f32,

    /// File log verbosity; `RUST_LOG` overrides it
    #[serde(default = "defaults::log_level")]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cols: defaults::cols(),
            rows: defaults::rows(),
            density: defaults::density(),
            zoom_level: defaults::zoom_level(),
            font_id: defaults::font_id(),
            animation_style: defaults::animation_style(),
            theme: defaults::theme(),
            spring_k: defaults::spring_k(),
            drag: defaults::drag(),
            shimmer_speed: defaults::shimmer_speed(),
            glow_intensity: defaults::glow_intensity(),
            brightness: defaults::brightness(),
            vibrance: defaults::vibrance(),
            max_particles: defaults::max_particles(),
            target_fps: defaults::target_fps(),
            cursor_blink_on_ms: defaults::cursor_blink_on_ms(),
            cursor_blink_off_ms: defaults::cursor_blink_off_ms(),
            window_opacity: defaults::window_opacity(),
            log_level: defaults::log_level(),
        }
    }
}

/// Density tier for a zoom level.
///
/// Zooming in spends more particles per glyph pixel so strokes stay solid.
pub fn density_for_zoom(zoom: f32) -> u32 {
    if zoom > 1.8 {
        16
    } else if zoom > 1.3 {
        12
    } else if zoom > 0.8 {
        8
    } else if zoom > 0.5 {
        6
    } else {
        4
    }
}

impl Config {
    /// Load configuration from file or create default
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            log::info!("Loading existing config from {:?}", config_path);
            Self::load_from(&config_path)
        } else {
            log::info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            if let Err(e) = config.save() {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            log::info!("Default config created successfully");
            Ok(config)
        }
    }

    /// Load and validate a config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let mut config: Config =
            serde_yaml_ng::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate();
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::Serialize)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::Io)?;
        fs::rename(&temp_path, path).map_err(ConfigError::Io)?;

        log::debug!("Config saved to {:?}", path);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("particle-term")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // XDG convention on all platforms: ~/.config/particle-term/
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("particle-term")
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Clamp out-of-range values, logging each correction.
    pub fn validate(&mut self) {
        if self.cols == 0 {
            log::warn!("cols must be at least 1, using {}", defaults::cols());
            self.cols = defaults::cols();
        }
        if self.rows == 0 {
            log::warn!("rows must be at least 1, using {}", defaults::rows());
            self.rows = defaults::rows();
        }
        if !(1..=64).contains(&self.density) {
            let clamped = self.density.clamp(1, 64);
            log::warn!("density {} out of range, clamped to {}", self.density, clamped);
            self.density = clamped;
        }
        if !self.zoom_level.is_finite() || !(0.1..=4.0).contains(&self.zoom_level) {
            let clamped = if self.zoom_level.is_finite() {
                self.zoom_level.clamp(0.1, 4.0)
            } else {
                defaults::zoom_level()
            };
            log::warn!("zoom_level {} out of range, using {}", self.zoom_level, clamped);
            self.zoom_level = clamped;
        }
        if !(self.spring_k > 0.0) {
            log::warn!("spring_k must be positive, using {}", defaults::spring_k());
            self.spring_k = defaults::spring_k();
        }
        if !(0.0..=1.0).contains(&self.drag) {
            let clamped = if self.drag.is_nan() {
                defaults::drag()
            } else {
                self.drag.clamp(0.0, 1.0)
            };
            log::warn!("drag {} out of range, using {}", self.drag, clamped);
            self.drag = clamped;
        }
        if self.target_fps == 0 {
            log::warn!("target_fps must be at least 1, using {}", defaults::target_fps());
            self.target_fps = defaults::target_fps();
        }
        if self.max_particles == 0 {
            log::warn!(
                "max_particles must be positive, using {}",
                defaults::max_particles()
            );
            self.max_particles = defaults::max_particles();
        }
        self.window_opacity = self.window_opacity.clamp(0.0, 1.0);
    }
}
