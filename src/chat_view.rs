// src/chat_view.rs

use crate::app::{App, PanelState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn draw(f: &mut Frame, app: &mut App) {
    match app.panel {
        PanelState::Hidden => draw_launcher(f, app),
        PanelState::Open => draw_panel(f, app),
    }
}

fn draw_panel(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.bot_name))
        .style(Style::default().fg(Color::LightYellow));
    f.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Min(1),    // Messages
                Constraint::Length(2), // Status line
                Constraint::Length(3), // Input
            ]
            .as_ref(),
        )
        .split(size);

    draw_messages(f, app, chunks[0]);
    app.status_indicator
        .render(f, chunks[1], app.session.pending_replies());
    draw_input(f, app, chunks[2]);
}

fn draw_messages(f: &mut Frame, app: &mut App, area: Rect) {
    let mut lines = Vec::new();
    for message in app.session.messages() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(message.render(area));
    }

    let total_lines = lines.len() as u16;
    // Clamp and write back, so manual scrolling starts from the value that
    // is actually on screen.
    app.scroll = clamp_scroll(total_lines, area.height, app.scroll);

    let msgs_para = Paragraph::new(lines).style(Style::default());
    f.render_widget(msgs_para.scroll((app.scroll, 0)), area);
}

/// Largest offset that still fills the viewport; a `u16::MAX` request
/// (follow-the-tail sentinel) clamps to the bottom.
pub(crate) fn clamp_scroll(total_lines: u16, viewport: u16, requested: u16) -> u16 {
    let max_scroll = total_lines.saturating_sub(viewport);
    requested.min(max_scroll)
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator.clone(),
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    let input = Line::from(vec![
        Span::styled("→ ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.input.as_str(), Style::default().fg(Color::White)),
    ]);

    // Scroll long input horizontally so the cursor stays visible. Width is
    // display columns, not bytes; the input is Spanish text.
    let visible_width = area.width.saturating_sub(2);
    let text_width = app.input.width() as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    f.render_widget(
        Paragraph::new(input).scroll((0, scroll_offset)),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        },
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        },
    );

    let cursor_x = area.x + 2 + text_width - scroll_offset;
    f.set_cursor_position((cursor_x, area.y + 1));
}

fn draw_launcher(f: &mut Frame, app: &App) {
    let size = f.area();
    let width = size.width.min(42);
    let height = 5u16;
    let area = Rect {
        x: size.x + size.width.saturating_sub(width) / 2,
        y: size.y + size.height.saturating_sub(height) / 2,
        width,
        height: height.min(size.height),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("💬 {}", app.bot_name),
            Style::default().fg(Color::LightYellow),
        )),
        Line::from(Span::styled(
            "Tab abre el chat · q salir",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let pending = app.session.pending_replies();
    if pending > 0 {
        lines.push(Line::from(Span::styled(
            format!("✉ {} en camino…", pending),
            Style::default().fg(Color::Yellow),
        )));
    }

    let launcher = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(launcher, area);
}
