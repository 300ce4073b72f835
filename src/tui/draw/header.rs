//! Header: app title, message count, current model.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::app::NAME;
use crate::core::util::truncate_start;

use super::super::app::App;
use super::super::constants::MODEL_HEADER_WIDTH;

pub(crate) fn draw_header(f: &mut Frame, app: &App, area: Rect, accent: Color) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(8),
            Constraint::Min(0),
            Constraint::Length(MODEL_HEADER_WIDTH),
        ])
        .split(area);

    let count_line = Line::from(Span::styled(
        format!("{} msg", app.messages.len()),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(count_line), header_chunks[0]);

    let title = Line::from(Span::styled(
        NAME,
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        header_chunks[1],
    );

    let model_display = truncate_start(&app.current_model_label, MODEL_HEADER_WIDTH as usize);
    let model_line = Line::from(Span::styled(
        model_display,
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(
        Paragraph::new(model_line).alignment(Alignment::Right),
        header_chunks[2],
    );
}
