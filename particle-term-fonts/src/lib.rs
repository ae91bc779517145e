//! Glyph sources for the particle-term renderer.
//!
//! A glyph source is either a bitmap font (a fixed W×H boolean grid per
//! character) or a vector font (line segments in the unit square per
//! character). The particle compiler rasterizes whichever source is active
//! into particle targets.
//!
//! Characters are addressed by their legacy code page 437 slot; use
//! [`legacy::to_legacy_index`] to map a Unicode scalar first.

pub mod bitmap;
pub mod glyph_source;
pub mod legacy;
pub mod vector;

pub use bitmap::BitmapFont;
pub use glyph_source::{FontCategory, GlyphSource, VectorSegment};
pub use legacy::{FULL_BLOCK, FULL_BLOCK_CODEPOINT, to_legacy_index};
pub use vector::{StrokeStyle, VectorFont};
