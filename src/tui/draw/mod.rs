//! TUI rendering: layout and widgets for the chat interface.

mod header;
mod history;
mod input;
mod message_info;
mod popups;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::time::Instant;

use super::app::App;
use super::constants::{ACCENT, INPUT_HEIGHT};

const HEADER_HEIGHT: u16 = 2;
const BOTTOM_BAR_HEIGHT: u16 = 2;

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(BOTTOM_BAR_HEIGHT),
        ])
        .split(area);
    header::draw_header(f, app, chunks[0], ACCENT);
    history::draw_history(f, app, chunks[1]);
    input::draw_input(f, app, chunks[2]);
    input::draw_bottom_bar(f, chunks[3]);

    if let Some(ref mut selector) = app.model_selector {
        popups::draw_model_selector_popup(f, area, selector);
    }
    if let Some(ref mut info) = app.message_info {
        message_info::draw_message_info_popup(f, area, info);
    }

    draw_toast(f, app, area);
}

/// Toast: top right, below header. Opaque background so it's visible over popups.
fn draw_toast(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(toast) = app.toast.as_ref() else {
        return;
    };
    if toast.until <= Instant::now() {
        app.toast = None;
        return;
    }
    let color = if toast.is_error { Color::Red } else { ACCENT };
    let text = format!(" {} ", toast.text);
    let toast_width = (text.chars().count() as u16 + 2).min(area.width);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(toast_width).saturating_sub(1),
        y: area.y + HEADER_HEIGHT,
        width: toast_width,
        height: 3u16.min(area.height.saturating_sub(HEADER_HEIGHT)),
    };
    f.render_widget(Clear, toast_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black));
    let para = Paragraph::new(Line::from(text))
        .block(block)
        .style(Style::default().fg(color).bg(Color::Black));
    f.render_widget(para, toast_area);
}
