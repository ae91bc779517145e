//! Keyboard hotkeys, local echo and mouse overlays for `AppState`.
//!
//! There is no shell behind the terminal model: typed text is echoed
//! straight into it so every keystroke reshapes a particle swarm.

use super::AppState;
use crate::link::{detect_link, link_text};
use particle_term_config::{AnimationStyle, TerminalGrid};
use particle_term_render::{LinkSpan, Selection};
use std::time::Instant;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::{Key, NamedKey};
use winit::window::CursorIcon;

const ZOOM_STEP: f32 = 0.1;
const MIN_ZOOM: f32 = 0.1;
const MAX_ZOOM: f32 = 4.0;

impl AppState {
    pub(super) fn handle_key(&mut self, event: &KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        if self.handle_hotkey(event) {
            self.update_title();
            return;
        }
        self.echo_key(event);
    }

    /// Returns true when the key changed a render setting.
    fn handle_hotkey(&mut self, event: &KeyEvent) -> bool {
        let ctrl = self.modifiers.control_key();
        let Some(renderer) = self.renderer.as_mut() else {
            return false;
        };
        let system = renderer.system_mut();

        match &event.logical_key {
            Key::Character(c) if ctrl && (c == "=" || c == "+") => {
                let zoom = (system.settings().zoom_level + ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM);
                system.set_zoom_level(zoom);
                true
            }
            Key::Character(c) if ctrl && c == "-" => {
                let zoom = (system.settings().zoom_level - ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM);
                system.set_zoom_level(zoom);
                true
            }
            Key::Named(named) => {
                if let Some(font_id) = font_hotkey(*named) {
                    system.set_font(font_id);
                    return true;
                }
                match named {
                    NamedKey::F9 => {
                        let theme = system.settings().theme.next();
                        system.set_theme(theme);
                        true
                    }
                    NamedKey::F10 => {
                        let style = system.settings().animation_style.next();
                        system.set_animation_style(style);
                        true
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }

    fn echo_key(&mut self, event: &KeyEvent) {
        match &event.logical_key {
            Key::Named(NamedKey::Enter) => {
                self.terminal.write(b"\r\n");
                self.sonic_burst_at_cursor();
            }
            Key::Named(NamedKey::Backspace) => self.terminal.write(b"\x08\x1b[K"),
            Key::Named(NamedKey::Tab) => self.terminal.write(b"\t"),
            _ => match &event.text {
                Some(text) if !self.modifiers.control_key() => {
                    self.terminal.write(text.as_bytes())
                }
                _ => return,
            },
        }
        self.blink.reset(Instant::now());
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.system_mut().set_cursor_blink_visible(true);
        }
    }

    /// Shockwave from the cursor cell when the Sonic style is active.
    fn sonic_burst_at_cursor(&mut self) {
        let cursor = self.terminal.cursor();
        if let Some(renderer) = self.renderer.as_mut()
            && renderer.system().settings().animation_style == AnimationStyle::Sonic
        {
            let system = renderer.system_mut();
            let [x, y] = system.cell_center(cursor.col, cursor.row);
            system.trigger_shockwave(x, y);
        }
    }

    pub(super) fn handle_cursor_moved(&mut self, x: f32, y: f32) {
        self.pointer = Some((x, y));
        let Some(cell) = self
            .renderer
            .as_ref()
            .and_then(|renderer| renderer.system().pixel_to_cell(x, y))
        else {
            self.set_hovered_link(None);
            return;
        };

        if let Some((anchor_col, anchor_row)) = self.drag_anchor {
            if cell != (anchor_col, anchor_row)
                && let Some(renderer) = self.renderer.as_mut()
            {
                renderer.system_mut().set_selection(Some(Selection::new(
                    anchor_col, anchor_row, cell.0, cell.1,
                )));
            }
            return;
        }

        let link = detect_link(&self.terminal, cell.0, cell.1);
        self.set_hovered_link(link);
    }

    pub(super) fn set_hovered_link(&mut self, link: Option<LinkSpan>) {
        if link == self.hovered_link {
            return;
        }
        self.hovered_link = link;
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.system_mut().set_link(link);
        }
        if let Some(window) = &self.window {
            window.set_cursor(if link.is_some() {
                CursorIcon::Pointer
            } else {
                CursorIcon::Default
            });
        }
    }

    pub(super) fn handle_mouse_button(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        match state {
            ElementState::Pressed => self.handle_left_press(),
            ElementState::Released => self.drag_anchor = None,
        }
    }

    fn handle_left_press(&mut self) {
        if let Some(link) = self.hovered_link {
            let url = link_text(&self.terminal, link);
            log::info!("Opening link: {}", url);
            if let Err(e) = open::that(&url) {
                log::warn!("Failed to open {}: {}", url, e);
            }
            return;
        }

        let (Some((x, y)), Some(renderer)) = (self.pointer, self.renderer.as_mut()) else {
            return;
        };
        let system = renderer.system_mut();
        self.drag_anchor = system.pixel_to_cell(x, y);
        system.set_selection(None);

        if system.settings().animation_style == AnimationStyle::Sonic {
            let [lx, ly] = system.window_to_layout(x, y);
            system.trigger_shockwave(lx, ly);
        }
    }
}

/// F1..F7 pick a glyph source from the catalog.
fn font_hotkey(key: NamedKey) -> Option<u32> {
    match key {
        NamedKey::F1 => Some(0),
        NamedKey::F2 => Some(1),
        NamedKey::F3 => Some(2),
        NamedKey::F4 => Some(3),
        NamedKey::F5 => Some(4),
        NamedKey::F6 => Some(5),
        NamedKey::F7 => Some(6),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_hotkeys_cover_catalog() {
        let ids: Vec<u32> = [
            NamedKey::F1,
            NamedKey::F2,
            NamedKey::F3,
            NamedKey::F4,
            NamedKey::F5,
            NamedKey::F6,
            NamedKey::F7,
        ]
        .into_iter()
        .filter_map(font_hotkey)
        .collect();
        assert_eq!(ids, (0..7).collect::<Vec<_>>());
        assert_eq!(font_hotkey(NamedKey::F9), None);
    }
}
