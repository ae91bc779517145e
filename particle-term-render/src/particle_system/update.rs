//! Per-frame compile step: terminal grid in, particle writes out.

use particle_term_config::{ColorSpec, TerminalGrid};
use particle_term_fonts::{FULL_BLOCK_CODEPOINT, FontCategory, to_legacy_index};

use super::ParticleSystem;
use super::buffers::DirtyRange;
use super::color::resolve;
use super::layout::particles_per_cell;
use super::rasterizer::{CellPaint, Rasterizer};
use super::signature::{CellOverlay, cell_signature};

const SPACE_GLYPH: u32 = b' ' as u32;

/// What one call to [`ParticleSystem::update_from_terminal`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// The store was reallocated and every cell recompiled.
    pub full_rebuild: bool,
    /// Cells whose slots were written this frame.
    pub cells_rasterized: usize,
    /// Changed cells that fell entirely past the capacity clamp.
    pub cells_skipped: usize,
    /// Slots that could not be written because the store was full.
    pub dropped_slots: usize,
    /// Inclusive particle span touched this frame.
    pub dirty: DirtyRange,
    /// Particles in use after the frame.
    pub particle_count: usize,
}

/// What the GPU copy of the store needs this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingUpload {
    Nothing,
    /// Every array, including `extra`, after a rebuild.
    Full,
    /// Only the dirty span of position, velocity, target and color.
    Range(DirtyRange),
}

impl ParticleSystem {
    /// Diff `grid` against the previous frame and rasterize changed cells.
    ///
    /// An empty grid is a no-op. Writes past the capacity clamp are dropped
    /// and counted in the report; nothing here fails.
    pub fn update_from_terminal<G: TerminalGrid + ?Sized>(&mut self, grid: &G) -> FrameReport {
        self.dirty.clear();
        let cols = grid.cols();
        let rows = grid.rows();
        if cols == 0 || rows == 0 {
            return FrameReport {
                particle_count: self.buffers.len(),
                ..Default::default()
            };
        }

        let ppc = particles_per_cell(&self.glyph_source, self.settings.density);
        let full_rebuild = self.needs_rebuild(cols, rows, cols * rows * ppc);
        if full_rebuild {
            self.rebuild(cols, rows, ppc);
        }

        let cursor = grid.cursor();
        let cursor_shown = cursor.visible && self.cursor_blink_visible;
        let cell_size = self.cell_size(cols, rows);
        let theme = self.settings.theme;
        let vector = self.glyph_source.category() == FontCategory::Vector;
        let in_use = self.buffers.len();

        let mut report = FrameReport {
            full_rebuild,
            ..Default::default()
        };
        let mut raster = Rasterizer {
            buffers: &mut self.buffers,
            jitter: &mut self.jitter,
            rng: &mut self.rng,
            dirty: &mut self.dirty,
            density: self.settings.density as usize,
            particles_per_cell: ppc,
            style: self.settings.animation_style,
            dropped: 0,
        };

        for row in 0..rows {
            for col in 0..cols {
                let cell = grid.cell(col, row);
                let overlay = CellOverlay {
                    cursor: cursor_shown && cursor.col == col && cursor.row == row,
                    selected: self.selection.is_some_and(|s| s.contains(col, row)),
                    link: self.link.is_some_and(|l| l.contains(col, row)),
                };

                let index = row * cols + col;
                let signature = cell_signature(&cell, overlay);
                if !full_rebuild && self.signatures[index] == signature {
                    continue;
                }
                self.signatures[index] = signature;

                let base = index * ppc;
                if base >= in_use {
                    report.cells_skipped += 1;
                    continue;
                }

                let (codepoint, fg, bg) = if overlay.cursor {
                    (FULL_BLOCK_CODEPOINT, ColorSpec::DEFAULT_FG, cell.bg)
                } else if cell.inverse {
                    (cell.codepoint, cell.bg, cell.fg)
                } else {
                    (cell.codepoint, cell.fg, cell.bg)
                };

                let char_changed = self.prev_chars[index] != codepoint;
                self.prev_chars[index] = codepoint;
                report.cells_rasterized += 1;

                let glyph = to_legacy_index(codepoint);
                if glyph == SPACE_GLYPH && bg.is_default_bg() && !cell.inverse {
                    raster.hide_cell(base);
                    continue;
                }

                let paint = CellPaint {
                    base,
                    origin: [col as f32 * cell_size[0], row as f32 * cell_size[1]],
                    cell_size,
                    glyph,
                    fg: resolve(fg, theme),
                    bg: (!bg.is_default_bg()).then(|| resolve(bg, theme)),
                    selected: overlay.selected,
                    link: overlay.link,
                    char_changed,
                };
                log::trace!("cell ({col},{row}) glyph={glyph} base={base}");
                if vector {
                    raster.paint_vector(&self.glyph_source, &paint);
                } else {
                    raster.paint_bitmap(&self.glyph_source, &paint);
                }
            }
        }

        report.dropped_slots = raster.dropped;
        report.dirty = self.dirty;
        report.particle_count = in_use;

        if report.cells_rasterized > 0 {
            log::debug!(
                "Compiled {} cells, dirty {:?}, dropped {} slots",
                report.cells_rasterized,
                report.dirty.bounds(),
                report.dropped_slots
            );
        }
        report
    }

    /// Hand over what the GPU needs to copy, resetting the full-upload flag.
    pub fn take_pending_upload(&mut self) -> PendingUpload {
        if std::mem::take(&mut self.upload_all) {
            PendingUpload::Full
        } else if self.dirty.is_empty() {
            PendingUpload::Nothing
        } else {
            PendingUpload::Range(self.dirty)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle_system::ParticleSystemConfig;
    use particle_term_config::{CellSnapshot, CursorSnapshot};

    struct Screen {
        cells: Vec<CellSnapshot>,
        cols: usize,
        rows: usize,
    }

    impl TerminalGrid for Screen {
        fn cols(&self) -> usize {
            self.cols
        }
        fn rows(&self) -> usize {
            self.rows
        }
        fn cell(&self, col: usize, row: usize) -> CellSnapshot {
            self.cells[row * self.cols + col]
        }
        fn cursor(&self) -> CursorSnapshot {
            CursorSnapshot::default()
        }
    }

    fn blank(cols: usize, rows: usize) -> Screen {
        Screen {
            cells: vec![CellSnapshot::default(); cols * rows],
            cols,
            rows,
        }
    }

    fn system() -> ParticleSystem {
        ParticleSystem::new(ParticleSystemConfig {
            max_particles: 1_000_000,
            width: 160.0,
            height: 80.0,
            seed: Some(11),
            ..Default::default()
        })
    }

    #[test]
    fn test_empty_grid_is_noop() {
        let mut ps = system();
        let report = ps.update_from_terminal(&blank(0, 5));
        assert!(!report.full_rebuild);
        assert_eq!(report.particle_count, 0);
        assert_eq!(ps.take_pending_upload(), PendingUpload::Nothing);
    }

    #[test]
    fn test_first_frame_requests_full_upload() {
        let mut ps = system();
        let report = ps.update_from_terminal(&blank(4, 2));
        assert!(report.full_rebuild);
        assert_eq!(report.cells_rasterized, 8);
        assert_eq!(ps.take_pending_upload(), PendingUpload::Full);

        let report = ps.update_from_terminal(&blank(4, 2));
        assert_eq!(report.cells_rasterized, 0);
        assert_eq!(ps.take_pending_upload(), PendingUpload::Nothing);
    }

    #[test]
    fn test_changed_cell_requests_range_upload() {
        let mut ps = system();
        let mut screen = blank(4, 2);
        ps.update_from_terminal(&screen);
        ps.take_pending_upload();

        screen.cells[5] = CellSnapshot::from_char('x');
        ps.update_from_terminal(&screen);
        match ps.take_pending_upload() {
            PendingUpload::Range(range) => {
                assert_eq!(range.bounds(), Some((5 * 512, 6 * 512 - 1)));
            }
            other => panic!("expected range upload, got {other:?}"),
        }
    }

    #[test]
    fn test_inverse_space_is_drawn() {
        let mut ps = system();
        let mut screen = blank(2, 1);
        screen.cells[0].inverse = true;
        ps.update_from_terminal(&screen);
        let visible = (0..512).filter(|&i| ps.buffers().is_visible(i)).count();
        assert!(visible > 0);
        assert!((512..1024).all(|i| !ps.buffers().is_visible(i)));
    }
}
