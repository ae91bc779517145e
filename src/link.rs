//! Hovered-URL detection on the visible screen
use particle_term_config::TerminalGrid;
use particle_term_render::LinkSpan;
use regex::Regex;
use std::sync::OnceLock;

static URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| Regex::new(r"https?://\S+").expect("Failed to compile URL regex"))
}

/// Find the URL on `row` that covers `col`, if any.
///
/// Columns are counted in cells, so multi-byte characters before the URL do
/// not shift the span.
pub fn detect_link<G: TerminalGrid + ?Sized>(grid: &G, col: usize, row: usize) -> Option<LinkSpan> {
    if row >= grid.rows() || col >= grid.cols() {
        return None;
    }
    let text = grid.row_text(row);
    url_regex().find_iter(&text).find_map(|m| {
        let start_col = text[..m.start()].chars().count();
        let end_col = start_col + m.as_str().chars().count() - 1;
        (start_col..=end_col).contains(&col).then_some(LinkSpan {
            row,
            start_col,
            end_col,
        })
    })
}

/// Text covered by `link`.
pub fn link_text<G: TerminalGrid + ?Sized>(grid: &G, link: LinkSpan) -> String {
    grid.row_text(link.row)
        .chars()
        .skip(link.start_col)
        .take(link.end_col + 1 - link.start_col)
        .collect()
}
