//! State of the message info modal: which view is shown, and the token data
//! computed once when the modal opens.

use ratatui::layout::Rect;

use crate::core::message::Message;
use crate::core::time_display::format_timestamp;
use crate::core::tokens::{self, TokenEncoder, TokenId, TokenizerError};

/// Views of the modal, in tab-strip order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoTab {
    Markdown,
    Tokens,
    Metadata,
}

impl InfoTab {
    pub const ALL: [InfoTab; 3] = [InfoTab::Markdown, InfoTab::Tokens, InfoTab::Metadata];

    /// Stable tab identifier carried by tab-activation events.
    pub fn id(self) -> &'static str {
        match self {
            InfoTab::Markdown => "markdown-content",
            InfoTab::Tokens => "tokens",
            InfoTab::Metadata => "metadata",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            InfoTab::Markdown => "Markdown",
            InfoTab::Tokens => "Tokens",
            InfoTab::Metadata => "Metadata",
        }
    }

    pub fn from_id(id: &str) -> Option<InfoTab> {
        InfoTab::ALL.into_iter().find(|t| t.id() == id)
    }

    pub fn index(self) -> usize {
        match self {
            InfoTab::Markdown => 0,
            InfoTab::Tokens => 1,
            InfoTab::Metadata => 2,
        }
    }

    pub fn next(self) -> InfoTab {
        InfoTab::ALL[(self.index() + 1) % InfoTab::ALL.len()]
    }

    pub fn previous(self) -> InfoTab {
        InfoTab::ALL[(self.index() + InfoTab::ALL.len() - 1) % InfoTab::ALL.len()]
    }
}

/// Modal showing one message as raw markdown, as tokens, or as metadata.
///
/// The token breakdown and the footer values are fixed at construction; afterwards
/// only the current tab and the body scroll change.
pub struct MessageInfo {
    message: Message,
    encoder: TokenEncoder,
    tokens: Vec<TokenId>,
    timestamp_label: String,
    current: InfoTab,
    scroll: usize,
    /// Largest scroll offset for the current view; updated each draw.
    pub(crate) max_scroll: usize,
    /// Rect of the tab strip from the last draw; for mouse hit testing.
    pub(crate) tabs_rect: Option<Rect>,
}

impl MessageInfo {
    /// Tokenize the message for `model_name`. Fails when no tokenizer is known for the
    /// model; no modal is built in that case.
    pub fn new(message: Message, model_name: &str) -> Result<Self, TokenizerError> {
        let encoder = tokens::encoding_for_model(model_name)?;
        let tokens = encoder.encode(message.content());
        let timestamp_label = format_timestamp(message.timestamp());
        Ok(Self {
            message,
            encoder,
            tokens,
            timestamp_label,
            current: InfoTab::Markdown,
            scroll: 0,
            max_scroll: 0,
            tabs_rect: None,
        })
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn markdown(&self) -> &str {
        self.message.content()
    }

    pub fn tokens(&self) -> &[TokenId] {
        &self.tokens
    }

    pub fn encoder(&self) -> &TokenEncoder {
        &self.encoder
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn current_tab(&self) -> InfoTab {
        self.current
    }

    /// Handle a tab-activation event. Unknown ids are ignored; returns whether the id was known.
    pub fn activate_tab(&mut self, tab_id: &str) -> bool {
        match InfoTab::from_id(tab_id) {
            Some(tab) => {
                self.current = tab;
                self.scroll = 0;
                true
            }
            None => false,
        }
    }

    pub fn sent_at_label(&self) -> String {
        format!("Message sent at {}", self.timestamp_label)
    }

    pub fn token_count_label(&self) -> String {
        format!("{} tokens", self.token_count())
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.max_scroll);
    }

    /// Tab under column `x` of the tab strip, if any. Mirrors the strip layout:
    /// " Title " per tab, separated by a one-column divider.
    pub fn tab_at(&self, x: u16) -> Option<InfoTab> {
        let rect = self.tabs_rect?;
        if x < rect.x || x >= rect.x + rect.width {
            return None;
        }
        let mut offset = rect.x;
        for tab in InfoTab::ALL {
            if x < offset {
                return None;
            }
            let width = tab.title().chars().count() as u16 + 2;
            if x < offset + width {
                return Some(tab);
            }
            offset += width + 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Role;

    fn info(content: &str) -> MessageInfo {
        MessageInfo::new(Message::new(Role::User, content), "gpt-3.5-turbo").unwrap()
    }

    #[test]
    fn tab_ids_round_trip() {
        for tab in InfoTab::ALL {
            assert_eq!(InfoTab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(InfoTab::from_id("history"), None);
    }

    #[test]
    fn next_and_previous_wrap() {
        assert_eq!(InfoTab::Metadata.next(), InfoTab::Markdown);
        assert_eq!(InfoTab::Markdown.previous(), InfoTab::Metadata);
        assert_eq!(InfoTab::Markdown.next(), InfoTab::Tokens);
    }

    #[test]
    fn starts_on_markdown() {
        assert_eq!(info("").current_tab(), InfoTab::Markdown);
        assert_eq!(info("# Title\n\nbody").current_tab(), InfoTab::Markdown);
    }

    #[test]
    fn last_activation_wins() {
        let mut modal = info("hello");
        assert!(modal.activate_tab("tokens"));
        assert_eq!(modal.current_tab(), InfoTab::Tokens);
        assert!(modal.activate_tab("metadata"));
        assert_eq!(modal.current_tab(), InfoTab::Metadata);
    }

    #[test]
    fn unknown_tab_id_is_ignored() {
        let mut modal = info("hello");
        modal.activate_tab("tokens");
        assert!(!modal.activate_tab("nope"));
        assert_eq!(modal.current_tab(), InfoTab::Tokens);
    }

    #[test]
    fn empty_content_has_zero_tokens() {
        let modal = info("");
        assert_eq!(modal.token_count(), 0);
        assert_eq!(modal.token_count_label(), "0 tokens");
    }

    #[test]
    fn missing_content_has_zero_tokens() {
        let mut message = Message::new(Role::Assistant, "");
        message.content = None;
        let modal = MessageInfo::new(message, "gpt-4-turbo").unwrap();
        assert_eq!(modal.markdown(), "");
        assert_eq!(modal.token_count(), 0);
    }

    #[test]
    fn token_count_matches_encoder() {
        let modal = info("The quick brown fox jumps over the lazy dog.");
        let expected = modal.encoder().encode(modal.markdown()).len();
        assert!(expected > 0);
        assert_eq!(modal.token_count(), expected);
        assert_eq!(modal.tokens().len(), expected);
    }

    #[test]
    fn missing_timestamp_formats_zero() {
        let modal = info("hello");
        assert_eq!(
            modal.sent_at_label(),
            format!("Message sent at {}", format_timestamp(0.0))
        );
    }

    #[test]
    fn timestamp_comes_from_metadata() {
        let message = Message::new(Role::User, "hi").with_timestamp(1_700_000_000.0);
        let modal = MessageInfo::new(message, "gpt-3.5-turbo").unwrap();
        assert_eq!(
            modal.sent_at_label(),
            format!("Message sent at {}", format_timestamp(1_700_000_000.0))
        );
    }

    #[test]
    fn unknown_model_fails_construction() {
        let result = MessageInfo::new(Message::new(Role::User, "hi"), "not-a-real-model");
        assert!(matches!(result, Err(TokenizerError::UnknownModel { .. })));
    }

    #[test]
    fn switching_tabs_resets_scroll() {
        let mut modal = info("hello");
        modal.max_scroll = 10;
        modal.scroll_down(4);
        assert_eq!(modal.scroll(), 4);
        modal.activate_tab("tokens");
        assert_eq!(modal.scroll(), 0);
    }

    #[test]
    fn scroll_is_clamped() {
        let mut modal = info("hello");
        modal.max_scroll = 3;
        modal.scroll_down(10);
        assert_eq!(modal.scroll(), 3);
        modal.scroll_up(10);
        assert_eq!(modal.scroll(), 0);
    }

    #[test]
    fn tab_at_follows_strip_layout() {
        let mut modal = info("hello");
        modal.tabs_rect = Some(Rect::new(10, 2, 40, 1));
        // " Markdown " = 10 cols, divider, " Tokens " = 8 cols, divider, " Metadata "
        assert_eq!(modal.tab_at(10), Some(InfoTab::Markdown));
        assert_eq!(modal.tab_at(19), Some(InfoTab::Markdown));
        assert_eq!(modal.tab_at(21), Some(InfoTab::Tokens));
        assert_eq!(modal.tab_at(30), Some(InfoTab::Metadata));
        assert_eq!(modal.tab_at(5), None);
    }
}
