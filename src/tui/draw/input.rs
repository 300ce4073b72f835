//! Input box and bottom bar with shortcuts.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::app::App;
use super::super::constants::ACCENT;
use super::super::shortcuts::labels;

pub(crate) fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.has_overlay() {
        Color::DarkGray
    } else {
        ACCENT
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    let width = inner.width as usize;
    let char_count = app.input.chars().count();
    // Keep the cursor end visible: show only the tail that fits.
    let visible: String = if char_count >= width && width > 0 {
        app.input.chars().skip(char_count + 1 - width).collect()
    } else {
        app.input.clone()
    };
    let content = if app.input.is_empty() {
        Line::from(Span::styled(
            "Send a message...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(visible.clone())
    };
    f.render_widget(Paragraph::new(content).block(block), area);

    if !app.has_overlay() {
        let cx = inner.x + (visible.chars().count() as u16).min(inner.width);
        f.set_cursor_position(Position::new(cx, inner.y));
    }
}

pub(crate) fn draw_bottom_bar(f: &mut Frame, area: Rect) {
    f.render_widget(
        Paragraph::new(labels::bottom_bar()).alignment(Alignment::Right),
        area,
    );
}
