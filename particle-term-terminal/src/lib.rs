//! Terminal model for particle-term.
//!
//! [`VtTerminal`] wraps an `alacritty_terminal` grid and VTE parser and
//! exposes the visible screen through [`particle_term_config::TerminalGrid`],
//! so the particle compiler never sees emulator types.

mod convert;
pub mod terminal;

pub use convert::{convert_cell, convert_color};
pub use terminal::VtTerminal;
