//! Per-cell signatures and the overlays folded into them.

use particle_term_config::{CellSnapshot, ColorSpec};

/// Cache value that never matches a real frame.
pub const SIGNATURE_SENTINEL: u32 = 0xFFFF_FFFF;

const BOLD_BIT: u32 = 0x8000_0000;
const INVERSE_BIT: u32 = 0x4000_0000;
const CURSOR_PATTERN: u32 = 0xFFFF_FFFF;
const SELECTION_PATTERN: u32 = 0x5555_5555;
const LINK_PATTERN: u32 = 0x0F0F_0F0F;
const TRUECOLOR_TAG: u32 = 0x0100_0000;

/// A mouse selection between two cells, in drag order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start_col: usize,
    pub start_row: usize,
    pub end_col: usize,
    pub end_row: usize,
}

impl Selection {
    pub fn new(start_col: usize, start_row: usize, end_col: usize, end_row: usize) -> Self {
        Self {
            start_col,
            start_row,
            end_col,
            end_row,
        }
    }

    /// Build from raw coordinates where any negative value means "no selection".
    pub fn from_raw(start_col: i32, start_row: i32, end_col: i32, end_row: i32) -> Option<Self> {
        if start_col < 0 || start_row < 0 || end_col < 0 || end_row < 0 {
            return None;
        }
        Some(Self::new(
            start_col as usize,
            start_row as usize,
            end_col as usize,
            end_row as usize,
        ))
    }

    /// Same selection with start before end in reading order.
    pub fn normalized(self) -> Self {
        if self.end_row < self.start_row
            || (self.end_row == self.start_row && self.end_col < self.start_col)
        {
            Self::new(self.end_col, self.end_row, self.start_col, self.start_row)
        } else {
            self
        }
    }

    /// Whether `(col, row)` falls inside the stream selection.
    pub fn contains(&self, col: usize, row: usize) -> bool {
        let s = self.normalized();
        if row < s.start_row || row > s.end_row {
            false
        } else if s.start_row == s.end_row {
            col >= s.start_col && col <= s.end_col
        } else if row == s.start_row {
            col >= s.start_col
        } else if row == s.end_row {
            col <= s.end_col
        } else {
            true
        }
    }
}

/// A hovered hyperlink occupying `start_col..=end_col` of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSpan {
    pub row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl LinkSpan {
    /// Build from raw coordinates where any negative value means "no link".
    pub fn from_raw(row: i32, start_col: i32, end_col: i32) -> Option<Self> {
        if row < 0 || start_col < 0 || end_col < 0 {
            return None;
        }
        let (start_col, end_col) = if end_col < start_col {
            (end_col, start_col)
        } else {
            (start_col, end_col)
        };
        Some(Self {
            row: row as usize,
            start_col: start_col as usize,
            end_col: end_col as usize,
        })
    }

    pub fn contains(&self, col: usize, row: usize) -> bool {
        row == self.row && col >= self.start_col && col <= self.end_col
    }
}

/// Per-frame overlay state of one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellOverlay {
    pub cursor: bool,
    pub selected: bool,
    pub link: bool,
}

/// Multiplier for scattering 24-bit colors across all 32 bits.
const RGB_MIX: u32 = 0x9E37_79B1;

fn color_bits(color: ColorSpec) -> u32 {
    match color {
        ColorSpec::Palette(index) => index as u32,
        ColorSpec::Rgb(r, g, b) => {
            let rgb = TRUECOLOR_TAG | (r as u32) << 16 | (g as u32) << 8 | b as u32;
            // Raw RGB would overlap the codepoint bits once rotated.
            let mixed = rgb.wrapping_mul(RGB_MIX);
            mixed ^ (mixed >> 16)
        }
    }
}

/// Compact hash of everything that affects how a cell is drawn.
pub fn cell_signature(cell: &CellSnapshot, overlay: CellOverlay) -> u32 {
    let mut sig =
        cell.codepoint ^ color_bits(cell.fg).rotate_left(8) ^ color_bits(cell.bg).rotate_left(16);
    if cell.bold {
        sig ^= BOLD_BIT;
    }
    if cell.inverse {
        sig ^= INVERSE_BIT;
    }
    if overlay.cursor {
        sig ^= CURSOR_PATTERN;
    }
    if overlay.selected {
        sig ^= SELECTION_PATTERN;
    }
    if overlay.link {
        sig ^= LINK_PATTERN;
    }
    sig
}
