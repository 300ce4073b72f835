//! Message info modal: tab strip, one scrollable view, footer with send time and token count.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs};

use crate::core::tokens;

use super::super::app::{InfoTab, MessageInfo};
use super::super::constants::{ACCENT, ACCENT_SECONDARY};
use super::super::shortcuts::labels;
use super::super::text::{hard_wrap, wrap_message};
use super::popups::popup_area;

const DIM: Style = Style::new().fg(Color::DarkGray);

pub(crate) fn draw_message_info_popup(f: &mut Frame, area: Rect, info: &mut MessageInfo) {
    let popup_rect = popup_area(area, 80, 80);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" Message info (Alt+I) ");
    let inner = block.inner(popup_rect);
    f.render_widget(Clear, popup_rect);
    f.render_widget(block, popup_rect);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);
    let tabs_area = chunks[0];
    let body_area = chunks[2];
    let footer_area = chunks[3];
    let hint_area = chunks[4];

    let tabs = Tabs::new(InfoTab::ALL.map(InfoTab::title))
        .select(info.current_tab().index())
        .style(DIM)
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .divider("│");
    f.render_widget(tabs, tabs_area);
    info.tabs_rect = Some(tabs_area);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "─".repeat(inner.width as usize),
            DIM,
        ))),
        chunks[1],
    );

    let (lines, total) = body_lines(info, body_area.width as usize, body_area.height as usize);
    info.max_scroll = total.saturating_sub(body_area.height as usize);
    f.render_widget(Paragraph::new(lines), body_area);

    let footer = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(footer_area);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(info.sent_at_label(), DIM))),
        footer[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            info.token_count_label(),
            Style::default().fg(ACCENT_SECONDARY),
        )))
        .alignment(Alignment::Right),
        footer[1],
    );
    f.render_widget(Paragraph::new(labels::message_info_hint()), hint_area);
}

/// Visible lines of the current view, plus the view's total line count.
fn body_lines(info: &MessageInfo, width: usize, height: usize) -> (Vec<Line<'static>>, usize) {
    match info.current_tab() {
        InfoTab::Markdown => markdown_lines(info, width, height),
        InfoTab::Tokens => token_lines(info, height),
        InfoTab::Metadata => metadata_lines(info, width, height),
    }
}

fn window(lines: Vec<Line<'static>>, scroll: usize, height: usize) -> (Vec<Line<'static>>, usize) {
    let total = lines.len();
    let start = scroll.min(total.saturating_sub(height));
    (lines.into_iter().skip(start).take(height).collect(), total)
}

/// Raw text, broken only at newlines and the view width.
fn markdown_lines(info: &MessageInfo, width: usize, height: usize) -> (Vec<Line<'static>>, usize) {
    if info.markdown().is_empty() {
        let empty = Line::from(Span::styled(
            "(empty message)",
            DIM.add_modifier(Modifier::ITALIC),
        ));
        return (vec![empty], 1);
    }
    let lines = hard_wrap(info.markdown(), width.max(1))
        .into_iter()
        .map(Line::from)
        .collect();
    window(lines, info.scroll(), height)
}

/// Only the rows on screen are decoded.
fn token_lines(info: &MessageInfo, height: usize) -> (Vec<Line<'static>>, usize) {
    let header = Line::from(Span::styled(
        format!("{:>6}  {:>8}  text", "#", "id"),
        DIM.add_modifier(Modifier::BOLD),
    ));
    let count = info.token_count();
    let rows = height.saturating_sub(1);
    let start = info.scroll().min(count.saturating_sub(rows));
    let end = (start + rows).min(count);

    let mut lines = vec![header];
    let pieces = tokens::analyze(&info.tokens()[start..end], info.encoder());
    for (offset, piece) in pieces.into_iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>6}  ", start + offset), DIM),
            Span::styled(
                format!("{:>8}  ", piece.id),
                Style::default().fg(ACCENT_SECONDARY),
            ),
            Span::raw(format!("{:?}", piece.text)),
        ]));
    }
    (lines, count + 1)
}

fn metadata_lines(info: &MessageInfo, width: usize, height: usize) -> (Vec<Line<'static>>, usize) {
    let message = info.message();
    let key_style = Style::default().fg(ACCENT_SECONDARY);
    let mut lines = vec![
        Line::from(Span::styled(
            "Metadata",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("id: ", key_style),
            Span::raw(message.id.clone()),
        ]),
        Line::from(vec![
            Span::styled("role: ", key_style),
            Span::raw(message.role.label()),
        ]),
        Line::from(vec![
            Span::styled("model: ", key_style),
            Span::raw(info.encoder().model().to_string()),
        ]),
    ];
    for (key, value) in &message.additional_metadata {
        let prefix = format!("{}: ", key);
        let value_width = width.saturating_sub(prefix.chars().count()).max(1);
        for (i, chunk) in wrap_message(&value.to_string(), value_width)
            .into_iter()
            .enumerate()
        {
            let lead = if i == 0 {
                Span::styled(prefix.clone(), key_style)
            } else {
                Span::raw(" ".repeat(prefix.chars().count()))
            };
            lines.push(Line::from(vec![lead, Span::raw(chunk)]));
        }
    }
    window(lines, info.scroll(), height)
}
