//! Shared integration test helpers for particle-term.
//!
//! Include with `mod common;` at the top of a test file. `#[allow(dead_code)]`
//! keeps files that use only some helpers warning-free.

#![allow(dead_code)]

use particle_term_config::{CellSnapshot, ColorSpec, CursorSnapshot, TerminalGrid};
use particle_term_render::{ParticleSystem, ParticleSystemConfig};

/// In-memory screen for driving the particle compiler.
#[derive(Debug, Clone)]
pub struct MockGrid {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<CellSnapshot>,
    pub cursor: CursorSnapshot,
}

impl MockGrid {
    /// Blank grid with the cursor hidden.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![CellSnapshot::default(); cols * rows],
            cursor: CursorSnapshot::default(),
        }
    }

    pub fn set(&mut self, col: usize, row: usize, cell: CellSnapshot) {
        self.cells[row * self.cols + col] = cell;
    }

    pub fn set_char(&mut self, col: usize, row: usize, c: char) {
        self.set(col, row, CellSnapshot::from_char(c));
    }

    /// Write `text` on `row` starting at column 0.
    pub fn write_row(&mut self, row: usize, text: &str) {
        for (col, c) in text.chars().enumerate().take(self.cols) {
            self.set_char(col, row, c);
        }
    }

    pub fn show_cursor(&mut self, col: usize, row: usize) {
        self.cursor = CursorSnapshot {
            col,
            row,
            visible: true,
        };
    }
}

impl TerminalGrid for MockGrid {
    fn cols(&self) -> usize {
        self.cols
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cell(&self, col: usize, row: usize) -> CellSnapshot {
        self.cells
            .get(row * self.cols + col)
            .copied()
            .unwrap_or_default()
    }

    fn cursor(&self) -> CursorSnapshot {
        self.cursor
    }
}

/// Amber-on-default cell, the common case for terminal text.
pub fn amber(c: char) -> CellSnapshot {
    CellSnapshot {
        fg: ColorSpec::Palette(7),
        ..CellSnapshot::from_char(c)
    }
}

/// Deterministic particle system with an 800x450 viewport.
pub fn seeded_system(max_particles: usize) -> ParticleSystem {
    ParticleSystem::new(ParticleSystemConfig {
        max_particles,
        width: 800.0,
        height: 450.0,
        seed: Some(42),
        ..Default::default()
    })
}

/// Indices of visible particles in `range`.
pub fn visible_in(ps: &ParticleSystem, range: std::ops::Range<usize>) -> Vec<usize> {
    range.filter(|&i| ps.buffers().is_visible(i)).collect()
}
