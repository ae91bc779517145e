//! Terminal cell snapshots handed from the terminal model to the renderer.
//!
//! This is the bridge between terminal emulation (VT attributes on a grid)
//! and particle compilation. The terminal crate converts its cells into these;
//! the render crate reads them through [`TerminalGrid`].

/// A cell color: either an index into the 16-color palette or a 24-bit value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpec {
    Palette(u8),
    Rgb(u8, u8, u8),
}

impl ColorSpec {
    /// Default foreground of a freshly reset terminal.
    pub const DEFAULT_FG: ColorSpec = ColorSpec::Palette(7);
    /// Default background of a freshly reset terminal.
    pub const DEFAULT_BG: ColorSpec = ColorSpec::Palette(0);

    /// True when this is the "no background" palette entry.
    pub fn is_default_bg(self) -> bool {
        self == ColorSpec::Palette(0)
    }
}

/// A single terminal cell as seen by the particle compiler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSnapshot {
    /// Unicode scalar value; 0 is treated as an empty cell.
    pub codepoint: u32,
    pub fg: ColorSpec,
    pub bg: ColorSpec,
    pub bold: bool,
    pub inverse: bool,
    pub blink: bool,
}

impl Default for CellSnapshot {
    fn default() -> Self {
        Self {
            codepoint: ' ' as u32,
            fg: ColorSpec::DEFAULT_FG,
            bg: ColorSpec::DEFAULT_BG,
            bold: false,
            inverse: false,
            blink: false,
        }
    }
}

impl CellSnapshot {
    /// Convenience constructor for a plain character with default colors.
    pub fn from_char(c: char) -> Self {
        Self {
            codepoint: c as u32,
            ..Default::default()
        }
    }
}

/// Cursor position and visibility as reported by the terminal model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub col: usize,
    pub row: usize,
    pub visible: bool,
}

/// Read-only view of a terminal screen.
///
/// Implementations must return a cell for every `(col, row)` inside
/// `cols() x rows()`; out-of-range lookups may return a blank cell.
pub trait TerminalGrid {
    fn cols(&self) -> usize;
    fn rows(&self) -> usize;
    fn cell(&self, col: usize, row: usize) -> CellSnapshot;
    fn cursor(&self) -> CursorSnapshot;

    /// Text of one row, with NUL cells rendered as spaces.
    fn row_text(&self, row: usize) -> String {
        (0..self.cols())
            .map(|col| {
                let cp = self.cell(col, row).codepoint;
                if cp == 0 {
                    ' '
                } else {
                    char::from_u32(cp).unwrap_or(' ')
                }
            })
            .collect()
    }
}
