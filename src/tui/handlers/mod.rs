//! Event handlers for the TUI: keyboard and mouse.

mod input;
mod message_info;
mod model_selector;
mod popups;
mod shortcuts;

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::core::config::LaunchConfig;

use super::app::App;
use super::constants;
use super::shortcuts::Shortcut;

use self::shortcuts::handle_shortcut;

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// True when Esc would start Option+key (escape_pending) rather than close a popup.
pub(crate) fn would_esc_start_meta_sequence(key: &KeyEvent, app: &App) -> bool {
    Shortcut::is_escape(key) && !app.has_overlay()
}

/// Handle a mouse event: wheel scrolls the modal body or the history; a left click on
/// the modal's tab strip activates that tab, and on the history selects a message.
pub fn handle_mouse(mouse: MouseEvent, app: &mut App) -> HandleResult {
    if let Some(info) = app.message_info.as_mut() {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let on_strip = info
                    .tabs_rect
                    .is_some_and(|r| mouse.row >= r.y && mouse.row < r.y + r.height);
                if on_strip && let Some(tab) = info.tab_at(mouse.column) {
                    info.activate_tab(tab.id());
                }
            }
            MouseEventKind::ScrollUp => info.scroll_up(constants::SCROLL_LINES_SMALL),
            MouseEventKind::ScrollDown => info.scroll_down(constants::SCROLL_LINES_SMALL),
            _ => {}
        }
        return HandleResult::Continue;
    }

    if app.model_selector.is_none() {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                app.select_message_at_row(mouse.row);
            }
            MouseEventKind::ScrollUp => app.scroll_up(constants::SCROLL_LINES_SMALL),
            MouseEventKind::ScrollDown => app.scroll_down(constants::SCROLL_LINES_SMALL),
            _ => {}
        }
    }
    HandleResult::Continue
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub fn handle_key(key: KeyEvent, app: &mut App, config: &LaunchConfig) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    // Esc+key sequence (Option as Meta on Mac terminals)
    if app.escape_pending {
        app.escape_pending = false;
        if let Some(shortcut) = Shortcut::match_key(&key, true) {
            return handle_shortcut(shortcut, app, config);
        }
    }

    if let Some(shortcut) = Shortcut::match_key(&key, false) {
        if shortcut == Shortcut::Quit {
            return HandleResult::Break;
        }
        if !app.has_overlay() {
            return handle_shortcut(shortcut, app, config);
        }
    }

    // Popups take the keyboard before the main input
    if app.message_info.is_some() {
        return popups::handle_message_info(key.code, key.modifiers, app);
    }
    if app.model_selector.is_some() {
        return popups::handle_model_selector(key.code, key.modifiers, app);
    }

    // Esc on the main screen: drop the selection and start a possible Option+key sequence.
    if Shortcut::is_escape(&key) {
        app.selected_message = None;
        app.escape_pending = true;
        return HandleResult::Continue;
    }

    input::handle_main_input(key.code, key.modifiers, app)
}
