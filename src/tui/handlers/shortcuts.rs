//! Shortcut key handling (MessageInfo, ModelSelector, message selection, Quit).

use crate::core::config::LaunchConfig;
use crate::tui::shortcuts::Shortcut;

use super::super::app::App;
use super::HandleResult;
use super::model_selector;

pub(super) fn handle_shortcut(
    shortcut: Shortcut,
    app: &mut App,
    config: &LaunchConfig,
) -> HandleResult {
    match shortcut {
        Shortcut::MessageInfo => app.open_message_info(),
        Shortcut::ModelSelector => model_selector::open_model_selector(app, config),
        Shortcut::SelectPrevious => app.select_previous_message(),
        Shortcut::SelectNext => app.select_next_message(),
        Shortcut::Quit => return HandleResult::Break,
    }
    HandleResult::Continue
}
