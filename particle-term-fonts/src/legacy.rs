//! Unicode to legacy (code page 437) glyph slot mapping.

/// Legacy slot of the solid full-block glyph.
pub const FULL_BLOCK: u32 = 219;

/// Unicode FULL BLOCK, used for the cursor.
pub const FULL_BLOCK_CODEPOINT: u32 = 0x2588;

/// Slot used for anything the glyph table cannot show.
pub const REPLACEMENT: u32 = b'?' as u32;

/// Accented Latin-1 letters in code page 437 order, starting at slot 128.
const LATIN1_SLOTS: [char; 27] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å', 'É', 'æ',
    'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü',
];

/// Map a Unicode scalar to its legacy glyph slot.
///
/// ASCII maps to itself except NUL, which is drawn as a space. Anything
/// without a slot becomes `?`.
pub fn to_legacy_index(codepoint: u32) -> u32 {
    match codepoint {
        0 => b' ' as u32,
        1..=127 => codepoint,
        FULL_BLOCK_CODEPOINT => FULL_BLOCK,
        _ => char::from_u32(codepoint)
            .and_then(|c| LATIN1_SLOTS.iter().position(|&slot| slot == c))
            .map(|pos| 128 + pos as u32)
            .unwrap_or(REPLACEMENT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(to_legacy_index('A' as u32), 65);
        assert_eq!(to_legacy_index('~' as u32), 126);
    }

    #[test]
    fn test_nul_is_space() {
        assert_eq!(to_legacy_index(0), 32);
    }

    #[test]
    fn test_latin1_slots() {
        assert_eq!(to_legacy_index('Ç' as u32), 128);
        assert_eq!(to_legacy_index('é' as u32), 130);
        assert_eq!(to_legacy_index('Ü' as u32), 154);
    }

    #[test]
    fn test_block_and_fallback() {
        assert_eq!(to_legacy_index(0x2588), FULL_BLOCK);
        assert_eq!(to_legacy_index('λ' as u32), REPLACEMENT);
        assert_eq!(to_legacy_index(0x1F600), REPLACEMENT);
    }
}
