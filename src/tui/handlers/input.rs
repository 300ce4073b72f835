//! Handler for main input (chat input, scroll).

use crossterm::event::{KeyCode, KeyModifiers};

use super::super::app::App;
use super::super::constants;
use super::HandleResult;

/// Handle main input keys (when no popup is open).
pub(crate) fn handle_main_input(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    app: &mut App,
) -> HandleResult {
    match (key_code, key_modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => HandleResult::Break,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            app.input.clear();
            HandleResult::Continue
        }
        (KeyCode::Enter, _) => {
            let input = app.input.trim().to_string();
            if !input.is_empty() {
                app.input.clear();
                app.push_user(&input);
            }
            HandleResult::Continue
        }
        (KeyCode::Backspace, _) => {
            app.input.pop();
            HandleResult::Continue
        }
        (KeyCode::Up, _) => {
            app.scroll_up(constants::SCROLL_LINES_SMALL);
            HandleResult::Continue
        }
        (KeyCode::Down, _) => {
            app.scroll_down(constants::SCROLL_LINES_SMALL);
            HandleResult::Continue
        }
        (KeyCode::PageUp, _) => {
            app.scroll_up(constants::SCROLL_LINES_PAGE);
            HandleResult::Continue
        }
        (KeyCode::PageDown, _) => {
            app.scroll_down(constants::SCROLL_LINES_PAGE);
            HandleResult::Continue
        }
        (KeyCode::Char(c), mods) => {
            // Ignore Alt+key: user likely intended a shortcut (e.g. Alt+M)
            if mods.contains(KeyModifiers::ALT) {
                return HandleResult::Continue;
            }
            app.input.push(c);
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}
