//! Chat history: message blocks with borders, selection highlight, scrollbar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::core::message::{Message, Role};

use super::super::app::App;
use super::super::constants::{ACCENT, ACCENT_SECONDARY};
use super::super::text::wrap_message;

fn repeat_char(c: char, n: usize) -> String {
    std::iter::repeat_n(c, n).collect()
}

fn border_color(role: Role, selected: bool) -> Color {
    if selected {
        return ACCENT;
    }
    match role {
        Role::System => Color::DarkGray,
        Role::User => Color::Gray,
        Role::Assistant => ACCENT_SECONDARY,
    }
}

/// Add a message block with borders and separator.
/// Returns (start_line, end_line) for this block in the lines array.
fn add_message_block(
    lines: &mut Vec<Line<'static>>,
    msg: &Message,
    selected: bool,
    content_width: usize,
    wrap_width: usize,
) -> (usize, usize) {
    let border_style = if selected {
        Style::default()
            .fg(border_color(msg.role, true))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(border_color(msg.role, false))
    };
    let text_style = if msg.role == Role::System {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    } else {
        Style::default()
    };

    let start = lines.len();

    // Top border: "┌─ Label ───...──┐"
    let top_label = format!("┌─ {} ", msg.role.label());
    let top_trail_len = wrap_width.saturating_sub(top_label.chars().count() + 1);
    let top_line = format!("{}{}┐", top_label, repeat_char('─', top_trail_len));
    lines.push(Line::from(Span::styled(top_line, border_style)));

    for chunk in wrap_message(msg.content().trim(), content_width) {
        lines.push(Line::from(vec![
            Span::styled("│ ", border_style),
            Span::raw("  "),
            Span::styled(chunk, text_style),
        ]));
    }

    let bottom_line = format!("└{}┘", repeat_char('─', wrap_width.saturating_sub(2)));
    lines.push(Line::from(Span::styled(bottom_line, border_style)));

    lines.push(Line::from(Span::styled(
        repeat_char('─', wrap_width),
        Style::default().fg(Color::DarkGray),
    )));

    (start, lines.len())
}

pub(crate) fn draw_history(f: &mut Frame, app: &mut App, history_area: Rect) {
    let history_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(history_area);
    let text_area = history_chunks[0];
    let scrollbar_area = history_chunks[1];
    let wrap_width = text_area.width as usize;
    let content_width = wrap_width.saturating_sub(5);
    app.history_area_rect = Some(text_area);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut message_line_ranges: Vec<(usize, usize, usize)> = Vec::new();

    for (msg_idx, msg) in app.messages.iter().enumerate() {
        let selected = app.selected_message == Some(msg_idx);
        let (start, end) =
            add_message_block(&mut lines, msg, selected, content_width, wrap_width);
        message_line_ranges.push((msg_idx, start, end));
    }

    app.message_line_ranges = message_line_ranges;

    let total_lines = lines.len();
    let visible = text_area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible.max(1));
    app.last_max_scroll = max_scroll;
    let scroll_pos = app.scroll_line();
    let end = (scroll_pos + visible).min(total_lines);
    let visible_lines: Vec<Line> = lines
        .into_iter()
        .skip(scroll_pos)
        .take(end.saturating_sub(scroll_pos))
        .collect();

    f.render_widget(Paragraph::new(visible_lines), text_area);

    let mut scrollbar_state = ScrollbarState::default()
        .position(scroll_pos)
        .content_length(total_lines);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(ACCENT_SECONDARY))
        .track_symbol(Some("│"));
    f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}
