//! Default value functions for configuration.
//!
//! Each function is used as a `#[serde(default = "crate::defaults::...")]`
//! attribute on a `Config` field.

use crate::types::{AnimationStyle, LogLevel, VisualTheme};

// ── Grid ───────────────────────────────────────────────────────────────────

pub fn cols() -> usize {
    80
}

pub fn rows() -> usize {
    25
}

// ── Particle mapping ───────────────────────────────────────────────────────

pub fn density() -> u32 {
    8
}

pub fn zoom_level() -> f32 {
    1.0
}

pub fn font_id() -> u32 {
    0 // Classic 8x8
}

pub fn max_particles() -> usize {
    8_000_000
}

// ── Physics ────────────────────────────────────────────────────────────────

pub fn animation_style() -> AnimationStyle {
    AnimationStyle::Normal
}

pub fn spring_k() -> f32 {
    80.0
}

pub fn drag() -> f32 {
    0.90
}

pub fn shimmer_speed() -> f32 {
    4.0
}

// ── Look ───────────────────────────────────────────────────────────────────

pub fn theme() -> VisualTheme {
    VisualTheme::Cyberpunk
}

pub fn glow_intensity() -> f32 {
    1.0
}

pub fn brightness() -> f32 {
    1.0
}

pub fn vibrance() -> f32 {
    1.0
}

pub fn window_opacity() -> f32 {
    1.0
}

// ── Timing ─────────────────────────────────────────────────────────────────

pub fn target_fps() -> u32 {
    120
}

pub fn cursor_blink_on_ms() -> u64 {
    1000
}

pub fn cursor_blink_off_ms() -> u64 {
    200
}

pub fn log_level() -> LogLevel {
    LogLevel::Off
}
