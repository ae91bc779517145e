//! Per-cell glyph rasterization into particle slots.
//!
//! Every cell owns a fixed run of `particles_per_cell` slots. Painting a cell
//! writes or hides every slot of that run, so nothing from the previous glyph
//! survives.

use particle_term_config::AnimationStyle;
use particle_term_fonts::{FULL_BLOCK, GlyphSource};
use rand::Rng;
use rand::rngs::StdRng;

use super::buffers::{DirtyRange, ParticleBuffers};
use super::color::{LINK_COLOR, invert};
use super::jitter::JitterTable;

/// Columns of the virtual raster vector glyphs are sampled on.
pub const VECTOR_GRID_W: u32 = 12;
/// Rows of the virtual raster vector glyphs are sampled on.
pub const VECTOR_GRID_H: u32 = 18;

/// Squared distance under which a sample belongs to a stroke.
const STROKE_HIT_SQ: f32 = 0.008;
/// Squared distance under which a sample belongs to a dot (zero-length stroke).
const DOT_HIT_SQ: f32 = 0.005;

/// Smallest particle size ever emitted.
const MIN_PARTICLE_SIZE: f32 = 1.5;

/// How far the rain style lifts fresh particles, plus up to the same again.
const RAIN_LIFT: f32 = 200.0;
/// Radius of the burst other styles start fresh particles from.
const BURST_RADIUS: f32 = 100.0;

/// Everything needed to paint one cell, with colors already resolved.
#[derive(Debug, Clone, Copy)]
pub struct CellPaint {
    /// First particle index of the cell's run.
    pub base: usize,
    /// Top-left corner of the cell in pixels.
    pub origin: [f32; 2],
    /// Cell width and height in pixels.
    pub cell_size: [f32; 2],
    /// Legacy glyph slot.
    pub glyph: u32,
    pub fg: [f32; 3],
    /// `None` when the cell has no background to fill.
    pub bg: Option<[f32; 3]>,
    pub selected: bool,
    pub link: bool,
    /// The displayed character differs from last frame's.
    pub char_changed: bool,
}

impl CellPaint {
    fn is_block(&self) -> bool {
        self.glyph == FULL_BLOCK
    }

    /// Final color of a text pixel.
    fn text_color(&self) -> [f32; 3] {
        let rgb = if self.selected { invert(self.fg) } else { self.fg };
        if self.link { LINK_COLOR } else { rgb }
    }

    /// Final color of a background pixel.
    fn fill_color(&self, bg: [f32; 3]) -> [f32; 3] {
        if self.selected { invert(bg) } else { bg }
    }
}

/// Mutable view over the particle store used while compiling one frame.
pub struct Rasterizer<'a> {
    pub buffers: &'a mut ParticleBuffers,
    pub jitter: &'a mut JitterTable,
    pub rng: &'a mut StdRng,
    pub dirty: &'a mut DirtyRange,
    pub density: usize,
    pub particles_per_cell: usize,
    pub style: AnimationStyle,
    /// Slots that fell past the end of the store this frame.
    pub dropped: usize,
}

impl Rasterizer<'_> {
    /// End (exclusive) of a cell's run, clamped to the store.
    fn run_end(&self, base: usize) -> usize {
        (base + self.particles_per_cell).min(self.buffers.len())
    }

    fn mark_run(&mut self, base: usize) {
        let end = self.run_end(base);
        if end > base {
            self.dirty.mark(base, end - 1);
        }
    }

    /// Hide every slot of the cell starting at `base`.
    pub fn hide_cell(&mut self, base: usize) {
        self.mark_run(base);
        for idx in base..self.run_end(base) {
            self.buffers.hide(idx);
        }
    }

    /// Hard reset of every slot, clearing animation state as well.
    fn clear_cell(&mut self, base: usize) {
        for idx in base..self.run_end(base) {
            self.buffers.clear_slot(idx);
        }
    }

    /// Hide slots `base + from .. base + particles_per_cell`.
    fn hide_tail(&mut self, base: usize, from: usize) {
        for idx in (base + from)..self.run_end(base) {
            self.buffers.hide(idx);
        }
    }

    /// Paint a cell with a bitmap source: `density` slots per glyph pixel.
    pub fn paint_bitmap(&mut self, font: &GlyphSource, paint: &CellPaint) {
        self.mark_run(paint.base);

        let fw = font.width();
        let fh = font.height();
        let pixel_w = paint.cell_size[0] / fw as f32;
        let pixel_h = paint.cell_size[1] / fh as f32;
        let base_size = MIN_PARTICLE_SIZE.max(pixel_w * 0.65);
        let fill_density = (self.density / 4).max(1);
        let block = paint.is_block();

        let mut slot = 0;
        for cy in 0..fh {
            for cx in 0..fw {
                let is_text = font.is_set(paint.glyph, cx, cy);
                let (rgb, active, size) = match (is_text, paint.bg) {
                    (true, _) => (paint.text_color(), self.density, base_size),
                    (false, Some(bg)) => (paint.fill_color(bg), fill_density, base_size * 2.0),
                    (false, None) => ([0.0; 3], 0, 0.0),
                };
                let px = paint.origin[0] + (cx as f32 + 0.5) * pixel_w;
                let py = paint.origin[1] + (cy as f32 + 0.5) * pixel_h;
                let phase = if is_text && !block { 1.0 } else { 0.0 };

                for i in 0..self.density {
                    let idx = paint.base + slot;
                    slot += 1;
                    if idx >= self.buffers.len() {
                        self.dropped += self.density - i;
                        break;
                    }
                    if i >= active {
                        self.buffers.hide(idx);
                        continue;
                    }
                    let tx = px + self.jitter.next() * pixel_w * 0.05;
                    let ty = py + self.jitter.next() * pixel_h * 0.05;
                    self.place(idx, tx, ty, size, rgb, phase, paint.char_changed);
                }
            }
        }
        self.hide_tail(paint.base, slot);
    }

    /// Paint a cell with a vector source by scan-converting its strokes on a
    /// 12×18 virtual raster.
    pub fn paint_vector(&mut self, font: &GlyphSource, paint: &CellPaint) {
        self.mark_run(paint.base);
        if paint.char_changed {
            self.clear_cell(paint.base);
        }

        let segments = font.segments(paint.glyph);
        let block = paint.is_block();
        let size = MIN_PARTICLE_SIZE.max(paint.cell_size[0] / VECTOR_GRID_W as f32 * 0.9);
        let fill_density = (self.density / 2).max(1);

        let mut slot = 0;
        for gy in 0..VECTOR_GRID_H {
            for gx in 0..VECTOR_GRID_W {
                let nx = (gx as f32 + 0.5) / VECTOR_GRID_W as f32;
                let ny = (gy as f32 + 0.5) / VECTOR_GRID_H as f32;

                let is_fg = block
                    || segments.iter().any(|seg| {
                        let limit = if seg.is_point() { DOT_HIT_SQ } else { STROKE_HIT_SQ };
                        seg.distance_sq(nx, ny) < limit
                    });
                let (rgb, active) = match (is_fg, paint.bg) {
                    (true, _) => (paint.text_color(), self.density),
                    (false, Some(bg)) => (paint.fill_color(bg), fill_density),
                    (false, None) => continue,
                };
                let phase = if is_fg && paint.char_changed { 1.0 } else { 0.0 };

                for i in 0..self.density {
                    let idx = paint.base + slot;
                    slot += 1;
                    if idx >= self.buffers.len() {
                        self.dropped += self.density - i;
                        break;
                    }
                    if i >= active {
                        self.buffers.hide(idx);
                        continue;
                    }
                    let tx = paint.origin[0] + nx * paint.cell_size[0] + self.jitter.next() * 0.005;
                    let ty = paint.origin[1] + ny * paint.cell_size[1] + self.jitter.next() * 0.015;
                    self.place(idx, tx, ty, size, rgb, phase, paint.char_changed);
                }
            }
        }
        self.hide_tail(paint.base, slot);
    }

    /// Write one visible particle and, for a fresh glyph, kick it away from
    /// its target so the spring pulls it into formation.
    #[allow(clippy::too_many_arguments)]
    fn place(
        &mut self,
        idx: usize,
        tx: f32,
        ty: f32,
        size: f32,
        rgb: [f32; 3],
        phase: f32,
        char_changed: bool,
    ) {
        self.buffers.target[idx] = [tx, ty, 0.0, size];
        self.buffers.color[idx] = [rgb[0], rgb[1], rgb[2], 1.0];
        self.buffers.position[idx] = [tx, ty, 0.0, size];
        self.buffers.extra[idx][0] = phase;

        if char_changed && size > 0.0 {
            let pos = &mut self.buffers.position[idx];
            if self.style == AnimationStyle::Rain {
                pos[1] -= RAIN_LIFT + self.rng.r#gen::<f32>() * RAIN_LIFT;
            } else {
                let angle = self.rng.gen_range(0.0..std::f32::consts::TAU);
                pos[0] += angle.cos() * BURST_RADIUS;
                pos[1] += angle.sin() * BURST_RADIUS;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle_system::buffers::HIDDEN_TARGET_X;
    use rand::SeedableRng;

    const AMBER: [f32; 3] = [1.0, 0.59, 0.04];

    /// Owned state a `Rasterizer` borrows.
    struct Harness {
        buffers: ParticleBuffers,
        jitter: JitterTable,
        rng: StdRng,
        dirty: DirtyRange,
    }

    impl Harness {
        fn new(len: usize) -> Self {
            let mut rng = StdRng::seed_from_u64(5);
            let jitter = JitterTable::new(&mut rng);
            let mut buffers = ParticleBuffers::default();
            buffers.reset(len);
            Self {
                buffers,
                jitter,
                rng,
                dirty: DirtyRange::default(),
            }
        }

        fn raster(&mut self, density: usize, ppc: usize, style: AnimationStyle) -> Rasterizer<'_> {
            Rasterizer {
                buffers: &mut self.buffers,
                jitter: &mut self.jitter,
                rng: &mut self.rng,
                dirty: &mut self.dirty,
                density,
                particles_per_cell: ppc,
                style,
                dropped: 0,
            }
        }

        fn lit(&self) -> Vec<usize> {
            (0..self.buffers.len())
                .filter(|&i| self.buffers.is_visible(i))
                .collect()
        }
    }

    fn paint(glyph: u32, char_changed: bool) -> CellPaint {
        CellPaint {
            base: 0,
            origin: [20.0, 40.0],
            cell_size: [10.0, 18.0],
            glyph,
            fg: AMBER,
            bg: None,
            selected: false,
            link: false,
            char_changed,
        }
    }

    const DENSITY: usize = 8;
    const VECTOR_PPC: usize = (VECTOR_GRID_W * VECTOR_GRID_H) as usize * DENSITY;

    #[test]
    fn test_vector_glyph_change_clears_old_slots() {
        let font = GlyphSource::from_id(3);
        let mut h = Harness::new(VECTOR_PPC);
        h.raster(DENSITY, VECTOR_PPC, AnimationStyle::Normal)
            .paint_vector(&font, &paint(b'M' as u32, true));
        let wide = h.lit().len();
        assert!(h.buffers.extra.iter().any(|e| e[0] == 1.0));

        h.raster(DENSITY, VECTOR_PPC, AnimationStyle::Normal)
            .paint_vector(&font, &paint(b'.' as u32, true));
        let lit = h.lit();
        assert!(!lit.is_empty());
        assert!(lit.len() < wide);

        // Lit slots are packed at the front of the run.
        let last = *lit.last().unwrap_or(&0);
        assert_eq!(lit.len(), last + 1);
        for idx in last + 1..VECTOR_PPC {
            assert_eq!(h.buffers.position[idx][3], 0.0);
            assert_eq!(h.buffers.target[idx][0], HIDDEN_TARGET_X);
            assert_eq!(h.buffers.extra[idx], [0.0; 4]);
        }
    }

    #[test]
    fn test_vector_background_fill_density() {
        let font = GlyphSource::from_id(2);
        let samples = (VECTOR_GRID_W * VECTOR_GRID_H) as usize;
        let space = CellPaint {
            bg: Some([0.2, 0.4, 1.0]),
            ..paint(b' ' as u32, false)
        };

        let mut h = Harness::new(VECTOR_PPC);
        h.raster(DENSITY, VECTOR_PPC, AnimationStyle::Normal)
            .paint_vector(&font, &space);
        assert_eq!(h.lit().len(), samples * (DENSITY / 2));
        for idx in h.lit() {
            assert_eq!(h.buffers.color[idx], [0.2, 0.4, 1.0, 1.0]);
        }

        let mut h = Harness::new(samples);
        h.raster(1, samples, AnimationStyle::Normal)
            .paint_vector(&font, &space);
        assert_eq!(h.lit().len(), samples);
    }

    #[test]
    fn test_rain_lifts_fresh_particles() {
        let font = GlyphSource::from_id(0);
        let mut h = Harness::new(512);
        h.raster(DENSITY, 512, AnimationStyle::Rain)
            .paint_bitmap(&font, &paint(b'A' as u32, true));

        let lit = h.lit();
        assert!(!lit.is_empty());
        for idx in lit {
            let pos = h.buffers.position[idx];
            let target = h.buffers.target[idx];
            assert_eq!(pos[0], target[0]);
            let lift = target[1] - pos[1];
            assert!(lift > RAIN_LIFT - 1e-3 && lift < 2.0 * RAIN_LIFT + 1e-3, "lift={lift}");
        }
    }

    #[test]
    fn test_burst_offsets_fresh_particles() {
        let font = GlyphSource::from_id(2);
        for style in [AnimationStyle::Normal, AnimationStyle::Sonic] {
            let mut h = Harness::new(VECTOR_PPC);
            h.raster(DENSITY, VECTOR_PPC, style)
                .paint_vector(&font, &paint(b'A' as u32, true));

            let lit = h.lit();
            assert!(!lit.is_empty());
            for idx in lit {
                let pos = h.buffers.position[idx];
                let target = h.buffers.target[idx];
                let dist = (pos[0] - target[0]).hypot(pos[1] - target[1]);
                assert!((dist - BURST_RADIUS).abs() < 1e-3, "dist={dist}");
            }
        }
    }

    #[test]
    fn test_unchanged_glyph_is_not_displaced() {
        let font = GlyphSource::from_id(0);
        let mut h = Harness::new(512);
        h.raster(DENSITY, 512, AnimationStyle::Rain)
            .paint_bitmap(&font, &paint(b'A' as u32, false));
        for idx in h.lit() {
            assert_eq!(h.buffers.position[idx], h.buffers.target[idx]);
        }
    }
}
