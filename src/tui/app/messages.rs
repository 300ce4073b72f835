//! Message handling for the chat history: appending, selection, and inspection.

use crate::core::message::{Message, Role};

use super::{App, MessageInfo, ScrollPosition};

impl App {
    /// Append a user message stamped with the current time and follow it.
    pub(crate) fn push_user(&mut self, text: &str) {
        self.messages.push(Message::sent_now(Role::User, text));
        self.selected_message = None;
        self.scroll = ScrollPosition::Bottom;
    }

    /// Move the selection one message up; starts from the last message.
    pub(crate) fn select_previous_message(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        self.selected_message = Some(match self.selected_message {
            Some(i) => i.saturating_sub(1),
            None => self.messages.len() - 1,
        });
        self.scroll_to_selected();
    }

    /// Move the selection one message down; clears it past the last message.
    pub(crate) fn select_next_message(&mut self) {
        self.selected_message = match self.selected_message {
            Some(i) if i + 1 < self.messages.len() => Some(i + 1),
            _ => None,
        };
        if self.selected_message.is_some() {
            self.scroll_to_selected();
        } else {
            self.scroll = ScrollPosition::Bottom;
        }
    }

    /// The highlighted message, or the last one when nothing is highlighted.
    pub(crate) fn inspected_message(&self) -> Option<&Message> {
        match self.selected_message {
            Some(i) => self.messages.get(i),
            None => self.messages.last(),
        }
    }

    /// Open the message info modal for the inspected message with the current model.
    /// A tokenizer failure is shown as an error toast and no modal opens.
    pub(crate) fn open_message_info(&mut self) {
        let Some(message) = self.inspected_message().cloned() else {
            return;
        };
        match MessageInfo::new(message, &self.current_model_name) {
            Ok(info) => self.message_info = Some(info),
            Err(e) => {
                log::warn!("Cannot open message info: {}", e);
                self.show_toast(format!("Cannot count tokens: {}", e), true);
            }
        }
    }

    /// Close the message info modal.
    pub(crate) fn close_message_info(&mut self) {
        self.message_info = None;
    }

    /// Select the message drawn at terminal row `row` of the history area (last draw's layout).
    /// Returns whether a message was hit.
    pub(crate) fn select_message_at_row(&mut self, row: u16) -> bool {
        let Some(rect) = self.history_area_rect else {
            return false;
        };
        if row < rect.y || row >= rect.y + rect.height {
            return false;
        }
        let line = self.scroll_line() + (row - rect.y) as usize;
        let hit = self
            .message_line_ranges
            .iter()
            .find(|(_, start, end)| line >= *start && line < *end)
            .map(|(idx, _, _)| *idx);
        if hit.is_some() {
            self.selected_message = hit;
        }
        hit.is_some()
    }

    /// Scroll so the start of the selected message is visible (uses last draw's line ranges).
    fn scroll_to_selected(&mut self) {
        let Some(selected) = self.selected_message else {
            return;
        };
        if let Some(&(_, start, _)) = self
            .message_line_ranges
            .iter()
            .find(|(idx, _, _)| *idx == selected)
        {
            self.scroll = ScrollPosition::Line(start.min(self.last_max_scroll));
        }
    }
}
