//! Grid-to-particle mapping.

use particle_term_fonts::{FontCategory, GlyphSource};

use super::ParticleSystem;
use super::rasterizer::{VECTOR_GRID_H, VECTOR_GRID_W};
use super::signature::SIGNATURE_SENTINEL;

/// Minimum pixel budget of a bitmap cell, so tiny fonts still get a full run.
const MIN_BITMAP_PIXELS: usize = 64;

/// Slots reserved for every cell with `source` at `density`.
pub fn particles_per_cell(source: &GlyphSource, density: u32) -> usize {
    let pixels = match source.category() {
        FontCategory::Bitmap => {
            (source.width() as usize * source.height() as usize).max(MIN_BITMAP_PIXELS)
        }
        FontCategory::Vector => (VECTOR_GRID_W * VECTOR_GRID_H) as usize,
    };
    pixels * density.max(1) as usize
}

/// Geometry the particle store was last built for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridLayout {
    pub cols: usize,
    pub rows: usize,
    pub density: u32,
    pub particles_per_cell: usize,
}

impl GridLayout {
    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// First slot of cell `(col, row)`.
    pub fn cell_base(&self, col: usize, row: usize) -> usize {
        (row * self.cols + col) * self.particles_per_cell
    }

    /// Particles the grid would need without the capacity clamp.
    pub fn required_particles(&self) -> usize {
        self.cell_count() * self.particles_per_cell
    }
}

impl ParticleSystem {
    /// Whether a `cols × rows` grid needing `required` particles cannot reuse
    /// the current store.
    pub(crate) fn needs_rebuild(&self, cols: usize, rows: usize, required: usize) -> bool {
        self.layout.cols != cols
            || self.layout.rows != rows
            || self.layout.density != self.settings.density
            || self.signatures.len() != cols * rows
            || required.min(self.capacity) > self.buffers.len()
    }

    /// Reallocate for a new grid and reset both caches.
    pub(crate) fn rebuild(&mut self, cols: usize, rows: usize, ppc: usize) {
        self.layout = GridLayout {
            cols,
            rows,
            density: self.settings.density,
            particles_per_cell: ppc,
        };
        let required = self.layout.required_particles();
        let total = required.min(self.capacity);
        if total < required {
            log::warn!(
                "Particle capacity exceeded: {} needed, {} available; trailing cells are not drawn",
                required,
                self.capacity
            );
        }

        self.buffers.reset(total);
        self.signatures.clear();
        self.signatures.resize(cols * rows, SIGNATURE_SENTINEL);
        self.prev_chars.clear();
        self.prev_chars.resize(cols * rows, 0);
        self.upload_all = true;

        log::info!(
            "Rebuilt particle grid: {}x{} cells, {} per cell, {} particles ({})",
            cols,
            rows,
            ppc,
            total,
            self.glyph_source.name()
        );
    }

    /// Cell size in pixels for a `cols × rows` grid filling the viewport.
    pub fn cell_size(&self, cols: usize, rows: usize) -> [f32; 2] {
        [
            self.viewport[0] / cols.max(1) as f32,
            self.viewport[1] / rows.max(1) as f32,
        ]
    }

    /// Window pixel under the zoom, mapped back to unzoomed layout space.
    pub fn window_to_layout(&self, x: f32, y: f32) -> [f32; 2] {
        let zoom = self.settings.zoom_level.max(f32::EPSILON);
        let cx = self.viewport[0] * 0.5;
        let cy = self.viewport[1] * 0.5;
        [(x - cx) / zoom + cx, (y - cy) / zoom + cy]
    }

    /// Cell under window pixel `(x, y)` for the last built grid.
    pub fn pixel_to_cell(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if self.layout.cell_count() == 0 {
            return None;
        }
        let [lx, ly] = self.window_to_layout(x, y);
        if lx < 0.0 || ly < 0.0 {
            return None;
        }
        let [cw, ch] = self.cell_size(self.layout.cols, self.layout.rows);
        let col = (lx / cw) as usize;
        let row = (ly / ch) as usize;
        (col < self.layout.cols && row < self.layout.rows).then_some((col, row))
    }

    /// Window pixel at the centre of cell `(col, row)`, in layout space.
    pub fn cell_center(&self, col: usize, row: usize) -> [f32; 2] {
        let [cw, ch] = self.cell_size(self.layout.cols, self.layout.rows);
        [(col as f32 + 0.5) * cw, (row as f32 + 0.5) * ch]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle_system::ParticleSystemConfig;

    #[test]
    fn test_particles_per_cell() {
        assert_eq!(particles_per_cell(&GlyphSource::from_id(0), 8), 512);
        assert_eq!(particles_per_cell(&GlyphSource::from_id(1), 8), 2048);
        assert_eq!(particles_per_cell(&GlyphSource::from_id(2), 4), 864);
        assert_eq!(particles_per_cell(&GlyphSource::from_id(4), 1), 216);
    }

    #[test]
    fn test_cell_base() {
        let layout = GridLayout {
            cols: 80,
            rows: 25,
            density: 8,
            particles_per_cell: 512,
        };
        assert_eq!(layout.cell_base(0, 0), 0);
        assert_eq!(layout.cell_base(10, 10), 810 * 512);
        assert_eq!(layout.required_particles(), 1_024_000);
    }

    #[test]
    fn test_pixel_to_cell_respects_zoom() {
        let mut ps = ParticleSystem::new(ParticleSystemConfig {
            width: 800.0,
            height: 400.0,
            seed: Some(3),
            ..Default::default()
        });
        ps.rebuild(80, 20, 8);
        assert_eq!(ps.pixel_to_cell(5.0, 5.0), Some((0, 0)));
        assert_eq!(ps.pixel_to_cell(805.0, 5.0), None);

        ps.settings.zoom_level = 2.0;
        // The viewport centre stays fixed under zoom.
        assert_eq!(ps.pixel_to_cell(400.0, 200.0), Some((40, 10)));
        assert_eq!(ps.pixel_to_cell(0.0, 0.0), Some((20, 5)));
    }
}
