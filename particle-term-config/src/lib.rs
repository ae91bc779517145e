//! Configuration system for the particle-term terminal emulator.
//!
//! This crate provides configuration loading, saving, and default values
//! for the emulator. It includes:
//!
//! - The YAML-backed [`Config`] struct and its persistence helpers
//! - Visual settings enums (animation style, visual theme, log level)
//! - The terminal-cell snapshot types shared between the terminal model and
//!   the particle compiler ([`CellSnapshot`], [`TerminalGrid`])

pub mod cell;
pub mod config;
pub mod defaults;
pub mod error;
mod types;

pub use cell::{CellSnapshot, ColorSpec, CursorSnapshot, TerminalGrid};
pub use config::{Config, density_for_zoom};
pub use error::ConfigError;
pub use types::{AnimationStyle, LogLevel, VisualTheme};
