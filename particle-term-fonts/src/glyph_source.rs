//! The polymorphic glyph source handed to the particle compiler.

use crate::bitmap::BitmapFont;
use crate::vector::{StrokeStyle, VectorFont};

/// A line segment in unit-square glyph space, `(0,0)` top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl VectorSegment {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Squared distance from `(px, py)` to the closest point on the segment.
    pub fn distance_sq(&self, px: f32, py: f32) -> f32 {
        let dx = self.x2 - self.x1;
        let dy = self.y2 - self.y1;
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            let ex = px - self.x1;
            let ey = py - self.y1;
            return ex * ex + ey * ey;
        }
        let t = (((px - self.x1) * dx + (py - self.y1) * dy) / len_sq).clamp(0.0, 1.0);
        let cx = self.x1 + t * dx - px;
        let cy = self.y1 + t * dy - py;
        cx * cx + cy * cy
    }

    pub fn is_point(&self) -> bool {
        self.x1 == self.x2 && self.y1 == self.y2
    }
}

/// Which rasterization path a glyph source takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontCategory {
    Bitmap,
    Vector,
}

/// The active font: either a bitmap grid or a set of vector strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlyphSource {
    Bitmap(BitmapFont),
    Vector(VectorFont),
}

impl Default for GlyphSource {
    fn default() -> Self {
        GlyphSource::Bitmap(BitmapFont::Classic)
    }
}

impl GlyphSource {
    /// Number of entries in the built-in catalog (ids `0..CATALOG_LEN`).
    pub const CATALOG_LEN: u32 = 7;

    /// Look up a catalog font by id; unknown ids fall back to Classic 8x8.
    pub fn from_id(id: u32) -> Self {
        match id {
            0 => GlyphSource::Bitmap(BitmapFont::Classic),
            1 => GlyphSource::Bitmap(BitmapFont::HighRes),
            2 => GlyphSource::Vector(VectorFont::Segmented),
            3 => GlyphSource::Vector(VectorFont::Stroke(StrokeStyle::TECH)),
            4 => GlyphSource::Vector(VectorFont::Stroke(StrokeStyle::MODERN)),
            5 => GlyphSource::Vector(VectorFont::Stroke(StrokeStyle::CODE_PRO)),
            6 => GlyphSource::Vector(VectorFont::Stroke(StrokeStyle::CRT_RETRO)),
            other => {
                log::warn!("Unknown font id {}, falling back to Classic 8x8", other);
                GlyphSource::default()
            }
        }
    }

    /// Catalog id of this source.
    pub fn id(&self) -> u32 {
        match self {
            GlyphSource::Bitmap(BitmapFont::Classic) => 0,
            GlyphSource::Bitmap(BitmapFont::HighRes) => 1,
            GlyphSource::Vector(font) => font.id(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GlyphSource::Bitmap(font) => font.name(),
            GlyphSource::Vector(font) => font.name(),
        }
    }

    pub fn category(&self) -> FontCategory {
        match self {
            GlyphSource::Bitmap(_) => FontCategory::Bitmap,
            GlyphSource::Vector(_) => FontCategory::Vector,
        }
    }

    /// Nominal glyph width (bitmap pixels or vector virtual-raster columns).
    pub fn width(&self) -> u32 {
        match self {
            GlyphSource::Bitmap(font) => font.width(),
            GlyphSource::Vector(font) => font.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            GlyphSource::Bitmap(font) => font.height(),
            GlyphSource::Vector(font) => font.height(),
        }
    }

    /// Bitmap lookup; always false for vector sources.
    pub fn is_set(&self, index: u32, x: u32, y: u32) -> bool {
        match self {
            GlyphSource::Bitmap(font) => font.is_set(index, x, y),
            GlyphSource::Vector(_) => false,
        }
    }

    /// Vector lookup; always empty for bitmap sources.
    pub fn segments(&self, index: u32) -> Vec<VectorSegment> {
        match self {
            GlyphSource::Bitmap(_) => Vec::new(),
            GlyphSource::Vector(font) => font.segments(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_round_trip() {
        for id in 0..GlyphSource::CATALOG_LEN {
            assert_eq!(GlyphSource::from_id(id).id(), id);
        }
    }

    #[test]
    fn test_unknown_id_falls_back() {
        assert_eq!(GlyphSource::from_id(99), GlyphSource::default());
    }

    #[test]
    fn test_distance_to_segment() {
        let seg = VectorSegment::new(0.0, 0.0, 1.0, 0.0);
        assert!((seg.distance_sq(0.5, 0.1) - 0.01).abs() < 1e-6);
        // Projection clamps to the endpoint
        assert!((seg.distance_sq(2.0, 0.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_to_point_segment() {
        let dot = VectorSegment::new(0.5, 0.5, 0.5, 0.5);
        assert!(dot.is_point());
        assert!((dot.distance_sq(0.5, 0.6) - 0.01).abs() < 1e-6);
    }
}
