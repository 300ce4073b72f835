//! Key handlers for popup dialogs (model selector, message info).

use crossterm::event::{KeyCode, KeyModifiers};

use crate::tui::app::App;

use super::{HandleResult, message_info, model_selector};

/// Handle key when model selector popup is open.
pub(super) fn handle_model_selector(
    key_code: KeyCode,
    modifiers: KeyModifiers,
    app: &mut App,
) -> HandleResult {
    let Some(selector) = app.model_selector.as_mut() else {
        return HandleResult::Continue;
    };
    let action = model_selector::handle_model_selector_key(key_code, modifiers, selector);
    match action {
        model_selector::ModelSelectorAction::Close => {
            app.model_selector = None;
        }
        model_selector::ModelSelectorAction::Select(model) => {
            app.set_model(&model);
            app.model_selector = None;
        }
        model_selector::ModelSelectorAction::Keep => {}
    }
    HandleResult::Continue
}

/// Handle key when the message info modal is open.
pub(super) fn handle_message_info(
    key_code: KeyCode,
    modifiers: KeyModifiers,
    app: &mut App,
) -> HandleResult {
    let Some(info) = app.message_info.as_mut() else {
        return HandleResult::Continue;
    };
    let action = message_info::handle_message_info_key(key_code, modifiers, info);
    match action {
        message_info::MessageInfoAction::Close => app.close_message_info(),
        message_info::MessageInfoAction::CopyMarkdown => {
            let markdown = info.markdown().to_string();
            match arboard::Clipboard::new().and_then(|mut c| c.set_text(markdown)) {
                Ok(()) => app.show_toast("Copied!", false),
                Err(e) => {
                    log::warn!("Clipboard copy failed: {}", e);
                    app.show_toast("Copy failed", true);
                }
            }
        }
        message_info::MessageInfoAction::Keep => {}
    }
    HandleResult::Continue
}
