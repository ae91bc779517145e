//! Conversion from alacritty cells to [`CellSnapshot`].

use alacritty_terminal::term::cell::{Cell, Flags};
use alacritty_terminal::vte::ansi::{Color, NamedColor};
use particle_term_config::{CellSnapshot, ColorSpec};

/// Levels of the xterm 6×6×6 color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Map a VT color onto the palette-or-truecolor model.
///
/// The 16 ANSI colors stay palette indices so the particle palette can theme
/// them; the 256-color extension is resolved to RGB.
pub fn convert_color(color: &Color, is_fg: bool) -> ColorSpec {
    match color {
        Color::Spec(rgb) => ColorSpec::Rgb(rgb.r, rgb.g, rgb.b),
        Color::Named(named) => {
            let idx = *named as usize;
            match named {
                _ if idx < 16 => ColorSpec::Palette(idx as u8),
                NamedColor::Background => ColorSpec::DEFAULT_BG,
                NamedColor::DimBlack
                | NamedColor::DimRed
                | NamedColor::DimGreen
                | NamedColor::DimYellow
                | NamedColor::DimBlue
                | NamedColor::DimMagenta
                | NamedColor::DimCyan
                | NamedColor::DimWhite => {
                    ColorSpec::Palette((idx - NamedColor::DimBlack as usize) as u8)
                }
                _ if is_fg => ColorSpec::DEFAULT_FG,
                _ => ColorSpec::DEFAULT_BG,
            }
        }
        Color::Indexed(idx) => indexed_color(*idx),
    }
}

fn indexed_color(idx: u8) -> ColorSpec {
    match idx {
        0..=15 => ColorSpec::Palette(idx),
        16..=231 => {
            let n = (idx - 16) as usize;
            ColorSpec::Rgb(
                CUBE_LEVELS[n / 36],
                CUBE_LEVELS[(n / 6) % 6],
                CUBE_LEVELS[n % 6],
            )
        }
        _ => {
            let v = 8 + 10 * (idx - 232);
            ColorSpec::Rgb(v, v, v)
        }
    }
}

pub fn convert_cell(cell: &Cell) -> CellSnapshot {
    let hidden = cell.flags.contains(Flags::HIDDEN);
    CellSnapshot {
        codepoint: if hidden { ' ' as u32 } else { cell.c as u32 },
        fg: convert_color(&cell.fg, true),
        bg: convert_color(&cell.bg, false),
        bold: cell.flags.intersects(Flags::BOLD | Flags::DIM_BOLD),
        inverse: cell.flags.contains(Flags::INVERSE),
        blink: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alacritty_terminal::vte::ansi::Rgb;

    #[test]
    fn test_named_colors() {
        assert_eq!(
            convert_color(&Color::Named(NamedColor::Red), true),
            ColorSpec::Palette(1)
        );
        assert_eq!(
            convert_color(&Color::Named(NamedColor::BrightWhite), true),
            ColorSpec::Palette(15)
        );
        assert_eq!(
            convert_color(&Color::Named(NamedColor::Foreground), true),
            ColorSpec::Palette(7)
        );
        assert_eq!(
            convert_color(&Color::Named(NamedColor::Background), false),
            ColorSpec::Palette(0)
        );
        assert_eq!(
            convert_color(&Color::Named(NamedColor::DimGreen), true),
            ColorSpec::Palette(2)
        );
    }

    #[test]
    fn test_indexed_colors() {
        assert_eq!(convert_color(&Color::Indexed(4), true), ColorSpec::Palette(4));
        assert_eq!(
            convert_color(&Color::Indexed(16), true),
            ColorSpec::Rgb(0, 0, 0)
        );
        assert_eq!(
            convert_color(&Color::Indexed(196), true),
            ColorSpec::Rgb(255, 0, 0)
        );
        assert_eq!(
            convert_color(&Color::Indexed(232), true),
            ColorSpec::Rgb(8, 8, 8)
        );
        assert_eq!(
            convert_color(&Color::Indexed(255), true),
            ColorSpec::Rgb(238, 238, 238)
        );
    }

    #[test]
    fn test_truecolor_passes_through() {
        let spec = Color::Spec(Rgb { r: 1, g: 2, b: 3 });
        assert_eq!(convert_color(&spec, false), ColorSpec::Rgb(1, 2, 3));
    }
}
