//! Integration tests for particle-term-fonts crate.

use particle_term_fonts::{
    BitmapFont, FULL_BLOCK, FontCategory, GlyphSource, VectorFont, to_legacy_index,
};

#[test]
fn test_catalog_categories() {
    let expected = [
        FontCategory::Bitmap,
        FontCategory::Bitmap,
        FontCategory::Vector,
        FontCategory::Vector,
        FontCategory::Vector,
        FontCategory::Vector,
        FontCategory::Vector,
    ];
    for (id, category) in expected.iter().enumerate() {
        assert_eq!(
            GlyphSource::from_id(id as u32).category(),
            *category,
            "font {} has the wrong category",
            id
        );
    }
}

#[test]
fn test_catalog_names_are_distinct() {
    let mut names: Vec<&str> = (0..GlyphSource::CATALOG_LEN)
        .map(|id| GlyphSource::from_id(id).name())
        .collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), GlyphSource::CATALOG_LEN as usize);
}

#[test]
fn test_classic_letter_a_shape() {
    let font = GlyphSource::from_id(0);
    let a = to_legacy_index('A' as u32);
    // Apex of the A sits in the middle columns of the top row
    assert!(font.is_set(a, 2, 0));
    assert!(font.is_set(a, 3, 0));
    assert!(!font.is_set(a, 0, 0));
    // Crossbar on row 4 spans the glyph
    for x in 0..6 {
        assert!(font.is_set(a, x, 4), "crossbar missing at x={}", x);
    }
    // Bottom row is blank
    for x in 0..8 {
        assert!(!font.is_set(a, x, 7));
    }
}

#[test]
fn test_every_printable_ascii_has_pixels() {
    let font = BitmapFont::Classic;
    for c in 0x21u32..0x7F {
        let lit = (0..8).flat_map(|y| (0..8).map(move |x| (x, y))).any(|(x, y)| font.is_set(c, x, y));
        assert!(lit, "glyph {:?} is empty", char::from_u32(c));
    }
}

#[test]
fn test_latin1_glyphs_have_pixels() {
    for slot in 128u32..=154 {
        let lit = (0..8).any(|y| (0..8).any(|x| BitmapFont::Classic.is_set(slot, x, y)));
        assert!(lit, "slot {} is empty", slot);
    }
}

#[test]
fn test_vector_sources_ignore_bitmap_queries() {
    let seg = GlyphSource::Vector(VectorFont::Segmented);
    assert!(!seg.is_set('A' as u32, 0, 0));
    assert!(!seg.segments('A' as u32).is_empty());
    assert!(GlyphSource::from_id(0).segments('A' as u32).is_empty());
}

#[test]
fn test_vector_block_glyphs_exist() {
    for id in 2..GlyphSource::CATALOG_LEN {
        let font = GlyphSource::from_id(id);
        assert!(
            !font.segments(FULL_BLOCK).is_empty(),
            "{} has no block glyph",
            font.name()
        );
    }
}

#[test]
fn test_vector_segments_within_unit_square() {
    for id in 2..GlyphSource::CATALOG_LEN {
        let font = GlyphSource::from_id(id);
        for c in ['A', 'g', '0', '@', '~'] {
            for s in font.segments(c as u32) {
                for v in [s.x1, s.y1, s.x2, s.y2] {
                    assert!(
                        (-0.05..=1.05).contains(&v),
                        "{} glyph {:?} leaves the cell: {:?}",
                        font.name(),
                        c,
                        s
                    );
                }
            }
        }
    }
}
