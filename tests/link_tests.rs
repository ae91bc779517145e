mod common;

use common::MockGrid;
use particle_term::link::{detect_link, link_text};
use particle_term_render::LinkSpan;

#[test]
fn test_detects_url_under_pointer() {
    let mut grid = MockGrid::new(40, 3);
    grid.write_row(1, "see https://example.com/a for more");

    let link = detect_link(&grid, 10, 1).expect("link under col 10");
    assert_eq!(
        link,
        LinkSpan {
            row: 1,
            start_col: 4,
            end_col: 24,
        }
    );
    assert_eq!(link_text(&grid, link), "https://example.com/a");
}

#[test]
fn test_no_link_outside_url() {
    let mut grid = MockGrid::new(40, 3);
    grid.write_row(0, "see https://example.com/a");

    assert_eq!(detect_link(&grid, 2, 0), None);
    assert_eq!(detect_link(&grid, 26, 0), None);
    assert_eq!(detect_link(&grid, 5, 1), None);
    assert_eq!(detect_link(&grid, 5, 9), None);
}

#[test]
fn test_columns_counted_in_cells() {
    let mut grid = MockGrid::new(40, 1);
    grid.write_row(0, "éé http://x.io");

    let link = detect_link(&grid, 3, 0).expect("link at col 3");
    assert_eq!((link.start_col, link.end_col), (3, 13));
    assert_eq!(link_text(&grid, link), "http://x.io");
}
