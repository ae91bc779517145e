//! Bitmap glyph sources.

mod font8x8;

use font8x8::{FONT8X8, GLYPH_COUNT};

/// A fixed-grid bitmap font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmapFont {
    /// The 8×8 table as-is.
    Classic,
    /// Nearest-neighbour 2× upscale of the classic table.
    HighRes,
}

impl BitmapFont {
    pub fn name(&self) -> &'static str {
        match self {
            BitmapFont::Classic => "Classic 8x8",
            BitmapFont::HighRes => "High-Res 16x16",
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            BitmapFont::Classic => 8,
            BitmapFont::HighRes => 16,
        }
    }

    pub fn height(&self) -> u32 {
        self.width()
    }

    /// Whether pixel `(x, y)` of the glyph in legacy slot `index` is lit.
    ///
    /// Out-of-range slots or coordinates are unlit.
    pub fn is_set(&self, index: u32, x: u32, y: u32) -> bool {
        match self {
            BitmapFont::Classic => raw_pixel(index, x, y),
            BitmapFont::HighRes => raw_pixel(index, x / 2, y / 2),
        }
    }
}

fn raw_pixel(index: u32, x: u32, y: u32) -> bool {
    if index as usize >= GLYPH_COUNT || x >= 8 || y >= 8 {
        return false;
    }
    (FONT8X8[index as usize][y as usize] >> x) & 1 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_is_blank() {
        for y in 0..8 {
            for x in 0..8 {
                assert!(!BitmapFont::Classic.is_set(32, x, y));
            }
        }
    }

    #[test]
    fn test_full_block_is_solid() {
        for y in 0..16 {
            for x in 0..16 {
                assert!(BitmapFont::HighRes.is_set(219, x, y));
            }
        }
    }

    #[test]
    fn test_high_res_doubles_classic() {
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(
                    BitmapFont::HighRes.is_set('A' as u32, x, y),
                    BitmapFont::Classic.is_set('A' as u32, x / 2, y / 2)
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_is_unlit() {
        assert!(!BitmapFont::Classic.is_set(219, 8, 0));
        assert!(!BitmapFont::Classic.is_set(300, 0, 0));
    }
}
