//! Vector glyph sources.
//!
//! Vector fonts describe each glyph as line segments in the unit square. The
//! particle compiler samples them on a 12×18 virtual raster regardless of the
//! nominal size reported here.

mod segmented;
mod stroke;

pub use stroke::StrokeStyle;

use crate::glyph_source::VectorSegment;

/// A vector font from the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VectorFont {
    /// Fourteen-segment display alphabet.
    Segmented,
    /// Hand-drawn stroke alphabet parameterized by a style.
    Stroke(StrokeStyle),
}

impl VectorFont {
    pub fn id(&self) -> u32 {
        match self {
            VectorFont::Segmented => 2,
            VectorFont::Stroke(style) => style.id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VectorFont::Segmented => "14-Seg Vector",
            VectorFont::Stroke(style) => style.name,
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            VectorFont::Segmented => 12,
            VectorFont::Stroke(style) => style.width,
        }
    }

    pub fn height(&self) -> u32 {
        18
    }

    pub fn segments(&self, index: u32) -> Vec<VectorSegment> {
        match self {
            VectorFont::Segmented => segmented::segments(index),
            VectorFont::Stroke(style) => style.segments(index),
        }
    }
}
