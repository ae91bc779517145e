//! Cell color resolution.

use particle_term_config::{ColorSpec, VisualTheme};

/// Link text color.
pub const LINK_COLOR: [f32; 3] = [0.0, 1.0, 1.0];

/// Amber used for every palette entry without its own color.
pub const AMBER: [f32; 3] = [1.0, 0.59, 0.04];

/// Resolve a cell color to linear RGB in `0..=1`.
///
/// Palette 0 only ever reaches here as a text color (inverse video or an
/// explicit black foreground); it is white under the cyberpunk theme so the
/// theme tint can color it, and a dark grey elsewhere.
pub fn resolve(color: ColorSpec, theme: VisualTheme) -> [f32; 3] {
    match color {
        ColorSpec::Rgb(r, g, b) => [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0],
        ColorSpec::Palette(0) => {
            if theme == VisualTheme::Cyberpunk {
                [1.0, 1.0, 1.0]
            } else {
                [0.15, 0.15, 0.15]
            }
        }
        ColorSpec::Palette(1) => [1.0, 0.2, 0.2],
        ColorSpec::Palette(2) => [0.2, 1.0, 0.2],
        ColorSpec::Palette(4) => [0.2, 0.4, 1.0],
        ColorSpec::Palette(_) => AMBER,
    }
}

/// Selection shows the complement of the final color.
pub fn invert(rgb: [f32; 3]) -> [f32; 3] {
    [1.0 - rgb[0], 1.0 - rgb[1], 1.0 - rgb[2]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_entries() {
        let theme = VisualTheme::Retro;
        assert_eq!(resolve(ColorSpec::Palette(1), theme), [1.0, 0.2, 0.2]);
        assert_eq!(resolve(ColorSpec::Palette(2), theme), [0.2, 1.0, 0.2]);
        assert_eq!(resolve(ColorSpec::Palette(4), theme), [0.2, 0.4, 1.0]);
        assert_eq!(resolve(ColorSpec::Palette(7), theme), AMBER);
        assert_eq!(resolve(ColorSpec::Palette(12), theme), AMBER);
    }

    #[test]
    fn test_palette_zero_depends_on_theme() {
        assert_eq!(
            resolve(ColorSpec::Palette(0), VisualTheme::Cyberpunk),
            [1.0, 1.0, 1.0]
        );
        assert_eq!(
            resolve(ColorSpec::Palette(0), VisualTheme::Synthwave),
            [0.15, 0.15, 0.15]
        );
    }

    #[test]
    fn test_truecolor_scales() {
        let rgb = resolve(ColorSpec::Rgb(255, 0, 51), VisualTheme::Cyberpunk);
        assert_eq!(rgb, [1.0, 0.0, 0.2]);
    }
}
