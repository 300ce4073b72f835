//! TUI application state: messages, input, scroll, selection, popups.

mod message_info;
mod messages;

pub use message_info::{InfoTab, MessageInfo};

use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};

use crate::core::config::LaunchConfig;
use crate::core::message::{Message, Role};
use crate::core::models::ChatModel;

/// State for the model selector popup.
pub struct ModelSelectorState {
    /// `LaunchConfig::all_models()` at the time the popup opened.
    pub models: Vec<ChatModel>,
    pub selected_index: usize,
    pub list_state: ListState,
    /// Filter query (case-insensitive search on model name/display name).
    pub filter: String,
}

/// Short-lived notice in the bottom bar.
pub struct Toast {
    pub text: String,
    pub is_error: bool,
    pub until: Instant,
}

/// Scroll position: either a specific line index, or "at bottom" (follow new content).
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ScrollPosition {
    Line(usize),
    Bottom,
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self::Line(0)
    }
}

pub struct App {
    pub(crate) messages: Vec<Message>,
    /// User input in the text field.
    pub(crate) input: String,
    pub(crate) scroll: ScrollPosition,
    pub(crate) last_max_scroll: usize,
    /// Index into `messages` of the highlighted message (Alt+↑/↓).
    pub(crate) selected_message: Option<usize>,
    /// Model used for new messages and token counts (provider model name).
    pub current_model_name: String,
    /// Display label of the current model for the header.
    pub current_model_label: String,
    /// When set, show model selector popup (Alt+M).
    pub model_selector: Option<ModelSelectorState>,
    /// When set, show the message info modal (Alt+I). Esc clears it.
    pub message_info: Option<MessageInfo>,
    /// (msg_idx, start_line, end_line) for each message; updated each draw.
    pub(crate) message_line_ranges: Vec<(usize, usize, usize)>,
    /// Rect of history text area; for click hit testing.
    pub(crate) history_area_rect: Option<Rect>,
    pub(crate) toast: Option<Toast>,
    /// Esc was pressed; next key = Option+key (Mac terminals with "Use option as meta").
    pub(crate) escape_pending: bool,
}

impl App {
    /// New conversation seeded with the system prompt, using the config's default model.
    pub fn new(config: &LaunchConfig) -> Self {
        let (current_model_name, current_model_label) = match config.default_chat_model() {
            Some(model) => (model.name().to_string(), model.label().to_string()),
            None => (
                config.default_model().to_string(),
                config.default_model().to_string(),
            ),
        };

        Self {
            messages: vec![Message::sent_now(Role::System, config.system_prompt())],
            input: String::new(),
            scroll: ScrollPosition::default(),
            last_max_scroll: 0,
            selected_message: None,
            current_model_name,
            current_model_label,
            model_selector: None,
            message_info: None,
            message_line_ranges: vec![],
            history_area_rect: None,
            toast: None,
            escape_pending: false,
        }
    }

    /// True when any popup or modal takes the keyboard.
    pub(crate) fn has_overlay(&self) -> bool {
        self.model_selector.is_some() || self.message_info.is_some()
    }

    pub(crate) fn set_model(&mut self, model: &ChatModel) {
        log::info!("Switching model to {}", model.name());
        self.current_model_name = model.name().to_string();
        self.current_model_label = model.label().to_string();
    }

    pub(crate) fn show_toast(&mut self, text: impl Into<String>, is_error: bool) {
        self.toast = Some(Toast {
            text: text.into(),
            is_error,
            until: Instant::now() + Duration::from_secs(3),
        });
    }

    /// Must be called before scroll_up/scroll_down when at bottom.
    pub(crate) fn materialize_scroll(&mut self) {
        if self.scroll == ScrollPosition::Bottom {
            self.scroll = ScrollPosition::Line(self.last_max_scroll);
        }
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line((pos + n).min(self.last_max_scroll));
        }
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line(pos.saturating_sub(n));
        }
    }

    /// Resolve scroll position to a concrete line index.
    pub(crate) fn scroll_line(&self) -> usize {
        match self.scroll {
            ScrollPosition::Line(n) => n.min(self.last_max_scroll),
            ScrollPosition::Bottom => self.last_max_scroll,
        }
    }
}
