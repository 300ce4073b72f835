//! Handler for model selector popup.

use crossterm::event::{KeyCode, KeyModifiers};

use ratatui::widgets::ListState;

use crate::core::config::LaunchConfig;
use crate::core::models::{ChatModel, filter_models};

use super::super::app::{App, ModelSelectorState};

/// Action to apply after handling a model selector key.
pub(crate) enum ModelSelectorAction {
    Close,
    Select(ChatModel),
    /// No action; keep the selector open.
    Keep,
}

/// Handle key when model selector is open. Returns action to apply; caller applies to app.
pub(crate) fn handle_model_selector_key(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    selector: &mut ModelSelectorState,
) -> ModelSelectorAction {
    // Filter input
    match key_code {
        KeyCode::Backspace => {
            selector.filter.pop();
        }
        KeyCode::Char(c) if !key_modifiers.contains(KeyModifiers::CONTROL) => {
            selector.filter.push(c);
        }
        _ => {}
    }

    let filtered = filter_models(&selector.models, &selector.filter);
    match key_code {
        KeyCode::Esc => ModelSelectorAction::Close,
        KeyCode::Up => {
            selector.selected_index = selector.selected_index.saturating_sub(1);
            ModelSelectorAction::Keep
        }
        KeyCode::Down => {
            if !filtered.is_empty() {
                selector.selected_index =
                    (selector.selected_index + 1).min(filtered.len().saturating_sub(1));
            }
            ModelSelectorAction::Keep
        }
        KeyCode::Enter => match filtered.get(selector.selected_index) {
            Some(model) => ModelSelectorAction::Select((*model).clone()),
            None => ModelSelectorAction::Keep,
        },
        KeyCode::Backspace | KeyCode::Char(_) => {
            selector.selected_index = selector
                .selected_index
                .min(filtered.len().saturating_sub(1));
            ModelSelectorAction::Keep
        }
        _ => ModelSelectorAction::Keep,
    }
}

/// Open the model selector with every configured model, the current one preselected.
pub(crate) fn open_model_selector(app: &mut App, config: &LaunchConfig) {
    let models = config.all_models();
    let selected_index = models
        .iter()
        .position(|m| m.name() == app.current_model_name)
        .unwrap_or(0);
    app.model_selector = Some(ModelSelectorState {
        models,
        selected_index,
        list_state: ListState::default(),
        filter: String::new(),
    });
}
