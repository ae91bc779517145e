//! End-to-end tests for the terminal-to-particle compiler.

mod common;

use common::{MockGrid, amber, seeded_system, visible_in};
use particle_term_config::{CellSnapshot, ColorSpec, VisualTheme};
use particle_term_fonts::FULL_BLOCK_CODEPOINT;
use particle_term_render::particle_system::color::{AMBER, LINK_COLOR, invert};
use particle_term_render::particle_system::HIDDEN_TARGET_X;
use particle_term_render::{LinkSpan, ParticleSystem, PendingUpload, Selection};

const PPC: usize = 512;

fn block() -> CellSnapshot {
    CellSnapshot {
        codepoint: FULL_BLOCK_CODEPOINT,
        ..Default::default()
    }
}

fn assert_rgb_eq(actual: [f32; 4], expected: [f32; 3]) {
    for channel in 0..3 {
        assert!(
            (actual[channel] - expected[channel]).abs() < 1e-6,
            "color {actual:?} != {expected:?}"
        );
    }
}

/// Color of the first lit particle of `cell` on row 0.
fn first_color(ps: &ParticleSystem, cell: usize) -> [f32; 4] {
    let i = visible_in(ps, cell * PPC..(cell + 1) * PPC)[0];
    ps.buffers().color[i]
}

#[test]
fn test_single_glyph_on_standard_grid() {
    let mut ps = seeded_system(8_000_000);
    let mut grid = MockGrid::new(80, 25);
    grid.set(0, 0, amber('A'));

    let report = ps.update_from_terminal(&grid);
    assert!(report.full_rebuild);
    assert_eq!(ps.layout().particles_per_cell, PPC);
    assert_eq!(report.particle_count, 1_024_000);
    assert_eq!(ps.particle_count(), 1_024_000);

    let lit = visible_in(&ps, 0..PPC);
    assert!(!lit.is_empty());
    let [cw, ch] = ps.cell_size(80, 25);
    for &i in &lit {
        let [x, y, _, size] = ps.buffers().target[i];
        assert!(x >= 0.0 && x < cw, "x={x} outside cell");
        assert!(y >= 0.0 && y < ch, "y={y} outside cell");
        assert!(size > 0.0);
        assert_rgb_eq(ps.buffers().color[i], AMBER);

        // A fresh glyph starts one burst radius from its target.
        let [px, py, _, psize] = ps.buffers().position[i];
        let offset = (px - x).hypot(py - y);
        assert!((offset - 100.0).abs() < 1e-3, "offset={offset}");
        assert_eq!(psize, size);
    }
    // Only the 'A' cell has anything to draw.
    assert_eq!(ps.buffers().visible_count(), lit.len());
}

#[test]
fn test_unchanged_frame_is_idempotent() {
    let mut ps = seeded_system(1_000_000);
    let mut grid = MockGrid::new(10, 4);
    grid.write_row(1, "hello");

    ps.update_from_terminal(&grid);
    assert_eq!(ps.take_pending_upload(), PendingUpload::Full);
    let targets = ps.buffers().target.clone();

    let report = ps.update_from_terminal(&grid);
    assert!(!report.full_rebuild);
    assert_eq!(report.cells_rasterized, 0);
    assert!(report.dirty.is_empty());
    assert_eq!(ps.take_pending_upload(), PendingUpload::Nothing);
    assert_eq!(ps.buffers().target, targets);
}

#[test]
fn test_geometry_and_font_changes_force_rebuild() {
    let mut ps = seeded_system(8_000_000);
    let grid = MockGrid::new(10, 4);
    ps.update_from_terminal(&grid);

    assert!(ps.update_from_terminal(&MockGrid::new(11, 4)).full_rebuild);
    assert!(ps.update_from_terminal(&MockGrid::new(11, 5)).full_rebuild);
    assert!(!ps.update_from_terminal(&MockGrid::new(11, 5)).full_rebuild);

    ps.set_density(4);
    let report = ps.update_from_terminal(&MockGrid::new(11, 5));
    assert!(report.full_rebuild);
    assert_eq!(ps.layout().particles_per_cell, 256);

    ps.set_font(1);
    let report = ps.update_from_terminal(&MockGrid::new(11, 5));
    assert!(report.full_rebuild);
    assert_eq!(ps.layout().particles_per_cell, 16 * 16 * 4);
    assert_eq!(report.particle_count, 55 * 1024);
}

#[test]
fn test_theme_change_recompiles() {
    let mut ps = seeded_system(1_000_000);
    let grid = MockGrid::new(4, 2);
    ps.update_from_terminal(&grid);

    ps.set_theme(VisualTheme::Retro);
    assert!(ps.update_from_terminal(&grid).full_rebuild);

    ps.set_theme(VisualTheme::Retro);
    assert!(!ps.update_from_terminal(&grid).full_rebuild);
}

#[test]
fn test_shrinking_glyph_leaves_no_ghosts() {
    let mut ps = seeded_system(1_000_000);
    let mut grid = MockGrid::new(3, 1);
    grid.set(1, 0, amber('M'));
    ps.update_from_terminal(&grid);
    let wide = visible_in(&ps, PPC..2 * PPC).len();

    grid.set(1, 0, amber('.'));
    let report = ps.update_from_terminal(&grid);
    assert_eq!(report.cells_rasterized, 1);
    let narrow = visible_in(&ps, PPC..2 * PPC).len();

    let mut fresh = seeded_system(1_000_000);
    fresh.update_from_terminal(&grid);
    assert_eq!(narrow, visible_in(&fresh, PPC..2 * PPC).len());
    assert!(narrow < wide);

    grid.set(1, 0, CellSnapshot::default());
    ps.update_from_terminal(&grid);
    assert!(visible_in(&ps, PPC..2 * PPC).is_empty());
}

#[test]
fn test_visual_space_rule() {
    let mut ps = seeded_system(1_000_000);
    let mut grid = MockGrid::new(3, 1);
    grid.set(
        1,
        0,
        CellSnapshot {
            bg: ColorSpec::Palette(4),
            ..Default::default()
        },
    );
    grid.set(
        2,
        0,
        CellSnapshot {
            inverse: true,
            ..Default::default()
        },
    );
    ps.update_from_terminal(&grid);

    assert!(visible_in(&ps, 0..PPC).is_empty());
    assert!(!visible_in(&ps, PPC..2 * PPC).is_empty());
    assert!(!visible_in(&ps, 2 * PPC..3 * PPC).is_empty());
}

#[test]
fn test_capacity_clamp_drops_trailing_slots() {
    let capacity = 10 * PPC + 100;
    let mut ps = seeded_system(capacity);
    let mut grid = MockGrid::new(4, 4);
    for row in 0..4 {
        for col in 0..4 {
            grid.set(col, row, block());
        }
    }

    let report = ps.update_from_terminal(&grid);
    assert_eq!(report.particle_count, capacity);
    assert_eq!(report.cells_rasterized, 11);
    assert_eq!(report.cells_skipped, 5);
    assert_eq!(report.dropped_slots, PPC - 100);
    assert_eq!(ps.buffers().visible_count(), capacity);
}

#[test]
fn test_backwards_selection() {
    let selection = Selection::new(7, 5, 2, 1);
    assert!(selection.contains(2, 1));
    assert!(!selection.contains(1, 1));
    assert!(selection.contains(0, 3));
    assert!(selection.contains(79, 2));
    assert!(selection.contains(7, 5));
    assert!(!selection.contains(8, 5));
    assert_eq!(selection.normalized(), Selection::new(2, 1, 7, 5));
    assert_eq!(Selection::from_raw(2, 5, -1, 1), None);
}

#[test]
fn test_dirty_range_covers_only_changed_cell() {
    let mut ps = seeded_system(8_000_000);
    let mut grid = MockGrid::new(80, 25);
    ps.update_from_terminal(&grid);
    ps.take_pending_upload();

    grid.set(10, 10, amber('x'));
    let report = ps.update_from_terminal(&grid);
    assert_eq!(report.cells_rasterized, 1);

    let base = (10 * 80 + 10) * PPC;
    assert_eq!(report.dirty.bounds(), Some((base, base + PPC - 1)));
    assert_eq!(
        ps.take_pending_upload(),
        PendingUpload::Range(report.dirty)
    );
}

#[test]
fn test_selection_inverts_and_link_wins() {
    let mut ps = seeded_system(1_000_000);
    let mut grid = MockGrid::new(3, 1);
    for col in 0..3 {
        grid.set(col, 0, amber('H'));
    }
    ps.set_selection(Some(Selection::new(0, 0, 1, 0)));
    ps.set_link(Some(LinkSpan {
        row: 0,
        start_col: 1,
        end_col: 2,
    }));
    ps.update_from_terminal(&grid);

    assert_rgb_eq(first_color(&ps, 0), invert(AMBER));
    assert_rgb_eq(first_color(&ps, 1), LINK_COLOR);
    assert_rgb_eq(first_color(&ps, 2), LINK_COLOR);

    ps.set_selection(None);
    ps.set_link(None);
    let report = ps.update_from_terminal(&grid);
    assert_eq!(report.cells_rasterized, 3);
    assert_rgb_eq(first_color(&ps, 0), AMBER);
}

#[test]
fn test_cursor_draws_block_and_follows_blink() {
    let mut ps = seeded_system(1_000_000);
    let mut grid = MockGrid::new(4, 1);
    grid.show_cursor(2, 0);
    ps.update_from_terminal(&grid);

    let lit = visible_in(&ps, 2 * PPC..3 * PPC);
    assert_eq!(lit.len(), PPC);
    assert_rgb_eq(ps.buffers().color[lit[0]], AMBER);

    ps.set_cursor_blink_visible(false);
    let report = ps.update_from_terminal(&grid);
    assert_eq!(report.cells_rasterized, 1);
    assert!(visible_in(&ps, 2 * PPC..3 * PPC).is_empty());
}

#[test]
fn test_invalidate_recompiles_everything() {
    let mut ps = seeded_system(1_000_000);
    let grid = MockGrid::new(5, 3);
    ps.update_from_terminal(&grid);
    ps.take_pending_upload();

    ps.invalidate();
    let report = ps.update_from_terminal(&grid);
    assert!(report.full_rebuild);
    assert_eq!(report.cells_rasterized, 15);
    assert_eq!(ps.take_pending_upload(), PendingUpload::Full);
}

#[test]
fn test_vector_glyph_shrink_hides_tail() {
    let mut ps = seeded_system(1_000_000);
    ps.set_font(3);
    let mut grid = MockGrid::new(3, 1);
    grid.set(1, 0, amber('M'));
    ps.update_from_terminal(&grid);
    let ppc = ps.layout().particles_per_cell;
    assert_eq!(ppc, 216 * 8);
    let cell = ppc..2 * ppc;
    let wide = visible_in(&ps, cell.clone()).len();

    grid.set(1, 0, amber('.'));
    ps.update_from_terminal(&grid);
    let lit = visible_in(&ps, cell.clone());
    assert!(!lit.is_empty());
    assert!(lit.len() < wide);

    let last = *lit.last().expect("dot is drawn");
    for i in last + 1..cell.end {
        assert_eq!(ps.buffers().position[i][3], 0.0);
        assert_eq!(ps.buffers().target[i][0], HIDDEN_TARGET_X);
    }
}

#[test]
fn test_category_switch_forces_rebuild() {
    let mut ps = seeded_system(8_000_000);
    let mut grid = MockGrid::new(6, 2);
    grid.write_row(0, "abc");
    ps.update_from_terminal(&grid);
    assert_eq!(ps.layout().particles_per_cell, PPC);

    for font_id in 2..=6 {
        ps.set_font(font_id);
        let report = ps.update_from_terminal(&grid);
        assert!(report.full_rebuild, "font {font_id}");
        assert_eq!(ps.layout().particles_per_cell, 216 * 8);
        assert_eq!(report.cells_rasterized, 12);
        assert!(!visible_in(&ps, 0..216 * 8).is_empty());
    }

    ps.set_font(0);
    let report = ps.update_from_terminal(&grid);
    assert!(report.full_rebuild);
    assert_eq!(ps.layout().particles_per_cell, PPC);
}
