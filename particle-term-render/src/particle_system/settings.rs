//! Tunables and their setters.
//!
//! Anything that changes how cells map to particles goes through
//! [`ParticleSystem::invalidate`], which empties the signature cache so the
//! next compile performs a full rebuild.

use particle_term_config::{AnimationStyle, Config, VisualTheme, density_for_zoom};
use particle_term_fonts::GlyphSource;

use super::ParticleSystem;
use super::physics::Shockwave;
use super::signature::{LinkSpan, Selection};

/// Every user-facing knob of the particle system.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSettings {
    /// Particles per glyph pixel.
    pub density: u32,
    pub zoom_level: f32,
    pub animation_style: AnimationStyle,
    pub theme: VisualTheme,
    pub spring_k: f32,
    pub drag: f32,
    pub shimmer_speed: f32,
    pub glow_intensity: f32,
    pub brightness: f32,
    pub vibrance: f32,
    pub scanline_intensity: f32,
    pub color_tint: [f32; 3],
    pub window_opacity: f32,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ParticleSettings {
    pub fn from_config(config: &Config) -> Self {
        let mut settings = Self {
            density: config.density.max(1),
            zoom_level: config.zoom_level,
            animation_style: config.animation_style,
            theme: VisualTheme::Custom,
            spring_k: config.spring_k,
            drag: config.drag,
            shimmer_speed: config.shimmer_speed,
            glow_intensity: config.glow_intensity,
            brightness: config.brightness,
            vibrance: config.vibrance,
            scanline_intensity: 0.0,
            color_tint: [1.0, 1.0, 1.0],
            window_opacity: config.window_opacity,
        };
        settings.apply_theme(config.theme);
        settings
    }

    /// Switch theme, loading its scanline and tint preset. `Custom` keeps the
    /// current values.
    pub fn apply_theme(&mut self, theme: VisualTheme) {
        self.theme = theme;
        if let Some((scanline, tint)) = theme.preset() {
            self.scanline_intensity = scanline;
            self.color_tint = tint;
        }
    }
}

impl ParticleSystem {
    /// Drop every cached signature; the next compile rebuilds the store.
    pub fn invalidate(&mut self) {
        self.signatures.clear();
    }

    pub fn set_density(&mut self, density: u32) {
        let density = density.max(1);
        if density != self.settings.density {
            log::info!("Density {} -> {}", self.settings.density, density);
            self.settings.density = density;
            self.invalidate();
        }
    }

    /// Set the view zoom and move to the matching density tier.
    pub fn set_zoom_level(&mut self, zoom: f32) {
        self.settings.zoom_level = zoom;
        self.set_density(density_for_zoom(zoom));
    }

    /// Replace the active glyph source by catalog id.
    pub fn set_font(&mut self, font_id: u32) {
        self.set_glyph_source(GlyphSource::from_id(font_id));
    }

    pub fn set_glyph_source(&mut self, source: GlyphSource) {
        log::info!(
            "Glyph source: {} -> {}",
            self.glyph_source.name(),
            source.name()
        );
        self.glyph_source = source;
        self.invalidate();
    }

    /// Only affects glyphs drawn from now on, so no rebuild.
    pub fn set_animation_style(&mut self, style: AnimationStyle) {
        self.settings.animation_style = style;
    }

    /// Palette 0 depends on the theme, so the screen is recompiled.
    pub fn set_theme(&mut self, theme: VisualTheme) {
        if theme != self.settings.theme {
            self.settings.apply_theme(theme);
            self.invalidate();
        }
    }

    pub fn set_spring_k(&mut self, spring_k: f32) {
        self.settings.spring_k = spring_k.max(0.0);
    }

    pub fn set_drag(&mut self, drag: f32) {
        self.settings.drag = drag.clamp(0.0, 1.0);
    }

    pub fn set_shimmer_speed(&mut self, speed: f32) {
        self.settings.shimmer_speed = speed;
    }

    pub fn set_glow_intensity(&mut self, glow: f32) {
        self.settings.glow_intensity = glow;
    }

    pub fn set_brightness(&mut self, brightness: f32) {
        self.settings.brightness = brightness;
    }

    pub fn set_vibrance(&mut self, vibrance: f32) {
        self.settings.vibrance = vibrance;
    }

    /// Scanline and tint overrides switch the theme to `Custom`.
    pub fn set_scanline_intensity(&mut self, intensity: f32) {
        self.settings.theme = VisualTheme::Custom;
        self.settings.scanline_intensity = intensity;
    }

    pub fn set_color_tint(&mut self, tint: [f32; 3]) {
        self.settings.theme = VisualTheme::Custom;
        self.settings.color_tint = tint;
    }

    pub fn set_window_opacity(&mut self, opacity: f32) {
        self.settings.window_opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }

    /// Selection from raw coordinates; any negative value clears it.
    pub fn set_selection_raw(&mut self, start_col: i32, start_row: i32, end_col: i32, end_row: i32) {
        self.selection = Selection::from_raw(start_col, start_row, end_col, end_row);
    }

    pub fn set_link(&mut self, link: Option<LinkSpan>) {
        self.link = link;
    }

    /// Hovered link from raw coordinates; any negative value clears it.
    pub fn set_link_raw(&mut self, row: i32, start_col: i32, end_col: i32) {
        self.link = LinkSpan::from_raw(row, start_col, end_col);
    }

    pub fn set_cursor_blink_visible(&mut self, visible: bool) {
        self.cursor_blink_visible = visible;
    }

    /// New viewport size in pixels. Cell geometry follows it, so the screen
    /// is recompiled.
    pub fn resize(&mut self, width: f32, height: f32) {
        let viewport = [width.max(1.0), height.max(1.0)];
        if viewport != self.viewport {
            self.viewport = viewport;
            self.invalidate();
        }
    }

    /// Start a shockwave at pixel `(x, y)` from the current time.
    pub fn trigger_shockwave(&mut self, x: f32, y: f32) {
        self.shockwave = Shockwave {
            x,
            y,
            start_time: self.elapsed,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle_system::ParticleSystemConfig;

    fn system() -> ParticleSystem {
        ParticleSystem::new(ParticleSystemConfig {
            seed: Some(1),
            ..Default::default()
        })
    }

    #[test]
    fn test_theme_presets() {
        let mut settings = ParticleSettings::default();
        settings.apply_theme(VisualTheme::Retro);
        assert_eq!(settings.scanline_intensity, 0.5);
        assert_eq!(settings.color_tint, [0.8, 1.0, 0.8]);

        settings.apply_theme(VisualTheme::Custom);
        assert_eq!(settings.theme, VisualTheme::Custom);
        assert_eq!(settings.scanline_intensity, 0.5);
    }

    #[test]
    fn test_zoom_picks_density_tier() {
        let mut ps = system();
        ps.set_zoom_level(2.0);
        assert_eq!(ps.settings().density, 16);
        ps.set_zoom_level(0.4);
        assert_eq!(ps.settings().density, 4);
        assert_eq!(ps.settings().zoom_level, 0.4);
    }

    #[test]
    fn test_tint_override_switches_to_custom() {
        let mut ps = system();
        ps.set_theme(VisualTheme::Synthwave);
        ps.set_color_tint([0.1, 0.2, 0.3]);
        assert_eq!(ps.settings().theme, VisualTheme::Custom);
        assert_eq!(ps.settings().color_tint, [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_shockwave_starts_now() {
        let mut ps = system();
        ps.step(0.5);
        ps.trigger_shockwave(10.0, 20.0);
        let wave = ps.shockwave();
        assert_eq!((wave.x, wave.y, wave.start_time), (10.0, 20.0, 0.5));
    }

    #[test]
    fn test_drag_is_clamped() {
        let mut ps = system();
        ps.set_drag(1.7);
        assert_eq!(ps.settings().drag, 1.0);
    }
}
