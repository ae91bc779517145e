//! Enumerated settings stored in the configuration file.

use serde::{Deserialize, Serialize};

/// How freshly formed glyph particles move.
///
/// The numeric id is what the physics shader receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimationStyle {
    #[default]
    Normal,
    Twist,
    Rain,
    Quantum,
    Sonic,
    Magnetic,
}

impl AnimationStyle {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            AnimationStyle::Normal => "Normal",
            AnimationStyle::Twist => "Twist",
            AnimationStyle::Rain => "Rain",
            AnimationStyle::Quantum => "Quantum",
            AnimationStyle::Sonic => "Sonic",
            AnimationStyle::Magnetic => "Magnetic",
        }
    }

    /// All available styles for UI iteration
    pub fn all() -> &'static [AnimationStyle] {
        &[
            AnimationStyle::Normal,
            AnimationStyle::Twist,
            AnimationStyle::Rain,
            AnimationStyle::Quantum,
            AnimationStyle::Sonic,
            AnimationStyle::Magnetic,
        ]
    }

    /// Shader-side style id.
    pub fn id(self) -> u32 {
        match self {
            AnimationStyle::Normal => 0,
            AnimationStyle::Twist => 1,
            AnimationStyle::Rain => 2,
            AnimationStyle::Quantum => 3,
            AnimationStyle::Sonic => 4,
            AnimationStyle::Magnetic => 5,
        }
    }

    /// Inverse of [`AnimationStyle::id`]; unknown ids map to `Normal`.
    pub fn from_id(id: u32) -> Self {
        match id {
            1 => AnimationStyle::Twist,
            2 => AnimationStyle::Rain,
            3 => AnimationStyle::Quantum,
            4 => AnimationStyle::Sonic,
            5 => AnimationStyle::Magnetic,
            _ => AnimationStyle::Normal,
        }
    }

    /// The style after this one, wrapping around.
    pub fn next(self) -> Self {
        Self::from_id((self.id() + 1) % Self::all().len() as u32)
    }
}

/// Post-processing look applied by the particle fragment shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VisualTheme {
    #[default]
    Cyberpunk,
    Retro,
    Synthwave,
    /// Keeps whatever scanline/tint values are currently set.
    Custom,
}

impl VisualTheme {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            VisualTheme::Cyberpunk => "Cyberpunk",
            VisualTheme::Retro => "Retro",
            VisualTheme::Synthwave => "Synthwave",
            VisualTheme::Custom => "Custom",
        }
    }

    /// Shader-side theme id.
    pub fn id(self) -> u32 {
        match self {
            VisualTheme::Cyberpunk => 0,
            VisualTheme::Retro => 1,
            VisualTheme::Synthwave => 2,
            VisualTheme::Custom => 99,
        }
    }

    /// Preset `(scanline_intensity, tint)`; `None` for [`VisualTheme::Custom`].
    pub fn preset(self) -> Option<(f32, [f32; 3])> {
        match self {
            VisualTheme::Cyberpunk => Some((0.05, [1.5, 0.45, 0.05])),
            VisualTheme::Retro => Some((0.5, [0.8, 1.0, 0.8])),
            VisualTheme::Synthwave => Some((0.15, [1.0, 1.0, 1.0])),
            VisualTheme::Custom => None,
        }
    }

    /// Cycle order used by the theme hotkey; `Custom` is skipped.
    pub fn next(self) -> Self {
        match self {
            VisualTheme::Cyberpunk => VisualTheme::Retro,
            VisualTheme::Retro => VisualTheme::Synthwave,
            VisualTheme::Synthwave | VisualTheme::Custom => VisualTheme::Cyberpunk,
        }
    }
}

/// Log level for debug logging to file.
///
/// Controls the verbosity of log output written to the debug log file.
/// The `RUST_LOG` environment variable takes precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging (log file not created)
    #[default]
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
