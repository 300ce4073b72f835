//! Handler for the message info modal.
//!
//! Keys are mapped to tab-activation events (tab ids) and passed to
//! [`MessageInfo::activate_tab`]; the modal itself never reads key events.

use crossterm::event::{KeyCode, KeyModifiers};

use super::super::app::{InfoTab, MessageInfo};
use super::super::constants;

/// Action to apply after handling a modal key.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum MessageInfoAction {
    /// Pop the modal.
    Close,
    /// Copy the raw markdown to the clipboard.
    CopyMarkdown,
    /// No action; keep the modal open.
    Keep,
}

/// Tab-activation event for a key, if the key selects a tab.
fn tab_event(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    current: InfoTab,
) -> Option<&'static str> {
    let tab = match key_code {
        KeyCode::Tab if key_modifiers.contains(KeyModifiers::SHIFT) => current.previous(),
        KeyCode::Tab | KeyCode::Right => current.next(),
        KeyCode::BackTab | KeyCode::Left => current.previous(),
        KeyCode::Char('1') => InfoTab::Markdown,
        KeyCode::Char('2') => InfoTab::Tokens,
        KeyCode::Char('3') => InfoTab::Metadata,
        _ => return None,
    };
    Some(tab.id())
}

/// Handle key when the message info modal is open. Returns action to apply; caller applies to app.
pub(crate) fn handle_message_info_key(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    info: &mut MessageInfo,
) -> MessageInfoAction {
    if let Some(tab_id) = tab_event(key_code, key_modifiers, info.current_tab()) {
        info.activate_tab(tab_id);
        return MessageInfoAction::Keep;
    }
    match key_code {
        KeyCode::Esc => MessageInfoAction::Close,
        KeyCode::Char('c') if !key_modifiers.contains(KeyModifiers::CONTROL) => {
            MessageInfoAction::CopyMarkdown
        }
        KeyCode::Up => {
            info.scroll_up(1);
            MessageInfoAction::Keep
        }
        KeyCode::Down => {
            info.scroll_down(1);
            MessageInfoAction::Keep
        }
        KeyCode::PageUp => {
            info.scroll_up(constants::SCROLL_LINES_PAGE);
            MessageInfoAction::Keep
        }
        KeyCode::PageDown => {
            info.scroll_down(constants::SCROLL_LINES_PAGE);
            MessageInfoAction::Keep
        }
        _ => MessageInfoAction::Keep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::{Message, Role};

    fn modal() -> MessageInfo {
        MessageInfo::new(Message::new(Role::User, "hello"), "gpt-3.5-turbo").unwrap()
    }

    #[test]
    fn escape_closes() {
        let mut info = modal();
        assert_eq!(
            handle_message_info_key(KeyCode::Esc, KeyModifiers::empty(), &mut info),
            MessageInfoAction::Close
        );
    }

    #[test]
    fn tab_cycles_forward_and_back() {
        let mut info = modal();
        handle_message_info_key(KeyCode::Tab, KeyModifiers::empty(), &mut info);
        assert_eq!(info.current_tab(), InfoTab::Tokens);
        handle_message_info_key(KeyCode::Right, KeyModifiers::empty(), &mut info);
        assert_eq!(info.current_tab(), InfoTab::Metadata);
        handle_message_info_key(KeyCode::BackTab, KeyModifiers::SHIFT, &mut info);
        assert_eq!(info.current_tab(), InfoTab::Tokens);
        handle_message_info_key(KeyCode::Left, KeyModifiers::empty(), &mut info);
        assert_eq!(info.current_tab(), InfoTab::Markdown);
    }

    #[test]
    fn number_keys_jump_to_tabs() {
        let mut info = modal();
        handle_message_info_key(KeyCode::Char('3'), KeyModifiers::empty(), &mut info);
        assert_eq!(info.current_tab(), InfoTab::Metadata);
        handle_message_info_key(KeyCode::Char('2'), KeyModifiers::empty(), &mut info);
        assert_eq!(info.current_tab(), InfoTab::Tokens);
        handle_message_info_key(KeyCode::Char('1'), KeyModifiers::empty(), &mut info);
        assert_eq!(info.current_tab(), InfoTab::Markdown);
    }

    #[test]
    fn c_requests_copy() {
        let mut info = modal();
        assert_eq!(
            handle_message_info_key(KeyCode::Char('c'), KeyModifiers::empty(), &mut info),
            MessageInfoAction::CopyMarkdown
        );
    }

    #[test]
    fn other_keys_keep_state() {
        let mut info = modal();
        assert_eq!(
            handle_message_info_key(KeyCode::Char('x'), KeyModifiers::empty(), &mut info),
            MessageInfoAction::Keep
        );
        assert_eq!(info.current_tab(), InfoTab::Markdown);
    }
}
