//! Centralized keyboard shortcuts.
//!
//! Complete reference:
//!
//! | Action          | Keys                                   |
//! |-----------------|----------------------------------------|
//! | Send            | Enter                                  |
//! | Scroll          | ↑ ↓ PageUp PageDown                    |
//! | Select message  | Alt+↑ Alt+↓                            |
//! | Message info    | Alt+I, Esc+i (Option as meta), ˆ (Mac) |
//! | Model selector  | Alt+M, Esc+m, µ (Option+M Mac)         |
//! | Quit            | Ctrl+C                                 |
//!
//! Inside the message info modal:
//!
//! | Action          | Keys                                   |
//! |-----------------|----------------------------------------|
//! | Next/prev tab   | Tab Shift+Tab → ←                      |
//! | Jump to tab     | 1 2 3                                  |
//! | Scroll          | ↑ ↓ PageUp PageDown                    |
//! | Copy markdown   | c                                      |
//! | Close           | Esc                                    |
//!
//! On macOS, Option+key can send:
//! - Esc+key if terminal has "Use option as meta key" enabled
//! - A special character (ˆ, µ) if Option is in normal mode

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Open the message info modal (Alt+I, Esc+i)
    MessageInfo,
    /// Model selector (Alt+M, Esc+m)
    ModelSelector,
    /// Highlight the previous message (Alt+↑)
    SelectPrevious,
    /// Highlight the next message (Alt+↓)
    SelectNext,
    /// Quit (Ctrl+C)
    Quit,
}

/// Characters produced by Option+key on Mac (Option not configured as Meta).
/// Option+I = ˆ (U+02C6), Option+M = µ (U+00B5).
const MAC_OPTION_I: char = '\u{02C6}';
const MAC_OPTION_M: char = '\u{00B5}';

impl Shortcut {
    /// Returns the shortcut if the key matches. Handles Esc+key sequence when terminal
    /// sends Option as Meta (e.g. macOS "Use option as meta key").
    pub fn match_key(key: &KeyEvent, escape_pending: bool) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if escape_pending {
            return match key.code {
                KeyCode::Char('i') => Some(Shortcut::MessageInfo),
                KeyCode::Char('m') => Some(Shortcut::ModelSelector),
                KeyCode::Up => Some(Shortcut::SelectPrevious),
                KeyCode::Down => Some(Shortcut::SelectNext),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::Quit)
            }
            KeyCode::Char('i') if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Shortcut::MessageInfo)
            }
            KeyCode::Char('m') if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Shortcut::ModelSelector)
            }
            KeyCode::Up if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Shortcut::SelectPrevious)
            }
            KeyCode::Down if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Shortcut::SelectNext)
            }
            KeyCode::Char(MAC_OPTION_I) => Some(Shortcut::MessageInfo),
            KeyCode::Char(MAC_OPTION_M) => Some(Shortcut::ModelSelector),
            _ => None,
        }
    }

    /// True if key is Escape (start of Option+key sequence on some terminals).
    pub fn is_escape(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press && key.code == KeyCode::Esc
    }
}

#[cfg(test)]
mod tests {
    use super::Shortcut;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn is_escape() {
        assert!(Shortcut::is_escape(&key(
            KeyCode::Esc,
            KeyModifiers::empty()
        )));
        assert!(!Shortcut::is_escape(&key(
            KeyCode::Char('c'),
            KeyModifiers::empty()
        )));
    }

    #[test]
    fn match_quit_ctrl_c() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL), false),
            Some(Shortcut::Quit)
        );
    }

    #[test]
    fn match_message_info_alt_i() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('i'), KeyModifiers::ALT), false),
            Some(Shortcut::MessageInfo)
        );
    }

    #[test]
    fn match_model_selector_alt_m() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('m'), KeyModifiers::ALT), false),
            Some(Shortcut::ModelSelector)
        );
    }

    #[test]
    fn match_select_alt_arrows() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Up, KeyModifiers::ALT), false),
            Some(Shortcut::SelectPrevious)
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Down, KeyModifiers::ALT), false),
            Some(Shortcut::SelectNext)
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Up, KeyModifiers::empty()), false),
            None
        );
    }

    #[test]
    fn match_escape_pending_i() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('i'), KeyModifiers::empty()), true),
            Some(Shortcut::MessageInfo)
        );
    }

    #[test]
    fn match_mac_option_chars() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('µ'), KeyModifiers::empty()), false),
            Some(Shortcut::ModelSelector)
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('ˆ'), KeyModifiers::empty()), false),
            Some(Shortcut::MessageInfo)
        );
    }

    #[test]
    fn match_no_shortcut() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('x'), KeyModifiers::empty()), false),
            None
        );
    }

    #[test]
    fn match_key_release_ignored() {
        let key_release = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        assert_eq!(Shortcut::match_key(&key_release, false), None);
    }
}

/// Labels for the bottom bar and the modal hint line.
pub mod labels {
    use ratatui::style::Color;
    use ratatui::text::{Line, Span, Text};

    const DIM: Color = Color::DarkGray;

    pub fn bottom_bar() -> Text<'static> {
        Text::from(vec![
            Line::from(vec![
                Span::styled("Enter ", DIM),
                Span::raw("send"),
                Span::styled("  ↑↓ ", DIM),
                Span::raw("scroll"),
                Span::styled("  Alt+↑↓ ", DIM),
                Span::raw("select message"),
            ]),
            Line::from(vec![
                Span::styled("Alt+I ", DIM),
                Span::raw("message info"),
                Span::styled("  Alt+M ", DIM),
                Span::raw("model"),
                Span::styled("  Ctrl+C ", DIM),
                Span::raw("quit"),
            ]),
        ])
    }

    pub fn message_info_hint() -> Line<'static> {
        Line::from(vec![
            Span::styled("Tab/←→ ", DIM),
            Span::raw("switch view  "),
            Span::styled("↑↓ ", DIM),
            Span::raw("scroll  "),
            Span::styled("c ", DIM),
            Span::raw("copy markdown  "),
            Span::styled("Esc ", DIM),
            Span::raw("close"),
        ])
    }
}
