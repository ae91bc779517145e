//! VT terminal backed by `alacritty_terminal`.

use std::sync::Arc;

use alacritty_terminal::event::{Event, EventListener};
use alacritty_terminal::grid::Dimensions;
use alacritty_terminal::index::{Column, Line};
use alacritty_terminal::term::{Config, Term};
use alacritty_terminal::vte::ansi::{self, CursorShape};
use parking_lot::Mutex;
use particle_term_config::{CellSnapshot, CursorSnapshot, TerminalGrid};

use crate::convert::convert_cell;

/// Lines of scrollback kept by the terminal model.
const SCROLLBACK_LINES: usize = 1_000;

#[derive(Default)]
struct EventState {
    title: Option<String>,
    bell: bool,
}

/// Captures the few terminal events the host cares about.
#[derive(Clone, Default)]
pub struct EventProxy {
    state: Arc<Mutex<EventState>>,
}

impl EventListener for EventProxy {
    fn send_event(&self, event: Event) {
        let mut state = self.state.lock();
        match event {
            Event::Title(title) => state.title = Some(title),
            Event::ResetTitle => state.title = None,
            Event::Bell => state.bell = true,
            _ => {}
        }
    }
}

struct TermSize {
    columns: usize,
    screen_lines: usize,
}

impl Dimensions for TermSize {
    fn total_lines(&self) -> usize {
        self.screen_lines
    }

    fn screen_lines(&self) -> usize {
        self.screen_lines
    }

    fn columns(&self) -> usize {
        self.columns
    }
}

/// A terminal screen fed with raw VT bytes.
pub struct VtTerminal {
    term: Term<EventProxy>,
    parser: ansi::Processor,
    events: EventProxy,
}

impl VtTerminal {
    /// Create a `cols × rows` terminal. Zero dimensions are raised to 1.
    pub fn new(cols: usize, rows: usize) -> Self {
        let config = Config {
            scrolling_history: SCROLLBACK_LINES,
            ..Config::default()
        };
        let size = TermSize {
            columns: cols.max(1),
            screen_lines: rows.max(1),
        };
        let events = EventProxy::default();
        let term = Term::new(config, &size, events.clone());
        log::info!("Terminal model created: {}x{}", size.columns, size.screen_lines);

        Self {
            term,
            parser: ansi::Processor::new(),
            events,
        }
    }

    /// Feed output bytes through the VT parser.
    pub fn write(&mut self, bytes: &[u8]) {
        self.parser.advance(&mut self.term, bytes);
    }

    pub fn resize(&mut self, cols: usize, rows: usize) {
        let size = TermSize {
            columns: cols.max(1),
            screen_lines: rows.max(1),
        };
        if size.columns == self.term.columns() && size.screen_lines == self.term.screen_lines() {
            return;
        }
        log::info!("Terminal resized to {}x{}", size.columns, size.screen_lines);
        self.term.resize(size);
    }

    /// Window title set through OSC 0/2, if any.
    pub fn title(&self) -> Option<String> {
        self.events.state.lock().title.clone()
    }

    /// Whether the bell rang since the last call.
    pub fn take_bell(&self) -> bool {
        std::mem::take(&mut self.events.state.lock().bell)
    }
}

impl TerminalGrid for VtTerminal {
    fn cols(&self) -> usize {
        self.term.columns()
    }

    fn rows(&self) -> usize {
        self.term.screen_lines()
    }

    fn cell(&self, col: usize, row: usize) -> CellSnapshot {
        if col >= self.cols() || row >= self.rows() {
            return CellSnapshot::default();
        }
        convert_cell(&self.term.grid()[Line(row as i32)][Column(col)])
    }

    fn cursor(&self) -> CursorSnapshot {
        let cursor = self.term.renderable_content().cursor;
        let row = cursor.point.line.0;
        CursorSnapshot {
            col: cursor.point.column.0,
            row: row.max(0) as usize,
            visible: cursor.shape != CursorShape::Hidden && row >= 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use particle_term_config::ColorSpec;

    #[test]
    fn test_dimensions() {
        let term = VtTerminal::new(80, 25);
        assert_eq!(term.cols(), 80);
        assert_eq!(term.rows(), 25);
    }

    #[test]
    fn test_write_text_and_cursor() {
        let mut term = VtTerminal::new(20, 4);
        term.write(b"hi\r\nyo");
        assert_eq!(term.cell(0, 0).codepoint, 'h' as u32);
        assert_eq!(term.cell(1, 1).codepoint, 'o' as u32);
        assert_eq!(term.row_text(0).trim_end(), "hi");
        let cursor = term.cursor();
        assert_eq!((cursor.col, cursor.row), (2, 1));
        assert!(cursor.visible);
    }

    #[test]
    fn test_sgr_attributes() {
        let mut term = VtTerminal::new(20, 2);
        term.write(b"\x1b[1;31mR\x1b[0m\x1b[7mI\x1b[0m\x1b[38;2;10;20;30mT");
        let red = term.cell(0, 0);
        assert!(red.bold);
        assert_eq!(red.fg, ColorSpec::Palette(1));

        let inverse = term.cell(1, 0);
        assert!(inverse.inverse);
        assert_eq!(inverse.bg, ColorSpec::Palette(0));

        assert_eq!(term.cell(2, 0).fg, ColorSpec::Rgb(10, 20, 30));
    }

    #[test]
    fn test_hidden_cursor() {
        let mut term = VtTerminal::new(10, 2);
        term.write(b"\x1b[?25l");
        assert!(!term.cursor().visible);
    }

    #[test]
    fn test_resize_and_out_of_range() {
        let mut term = VtTerminal::new(10, 2);
        term.resize(30, 5);
        assert_eq!((term.cols(), term.rows()), (30, 5));
        assert_eq!(term.cell(99, 99), CellSnapshot::default());
    }

    #[test]
    fn test_title_event() {
        let mut term = VtTerminal::new(10, 2);
        term.write(b"\x1b]2;particles\x07");
        assert_eq!(term.title().as_deref(), Some("particles"));
    }
}
