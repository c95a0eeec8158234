use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    Bot,
}

/// A single entry in the conversation display list. Immutable once created.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    content: String,
    origin: Origin,
    timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content.into(), Origin::User)
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(content.into(), Origin::Bot)
    }

    fn new(content: String, origin: Origin) -> Self {
        Self {
            content,
            origin,
            timestamp: Local::now(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Renders the message as a framed block of lines, wrapped to the
    /// display width. Content is rendered as literal text only.
    pub fn render(&self, area: Rect) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let style = self.base_style();

        self.render_header(&mut lines, style);
        self.render_content(&mut lines, area, style);
        self.render_footer(&mut lines, style);

        lines
    }

    fn base_style(&self) -> Style {
        Style::default().fg(match self.origin {
            Origin::User => Color::Rgb(255, 223, 128),
            Origin::Bot => Color::Rgb(144, 238, 144),
        })
    }

    fn indent(&self) -> &'static str {
        match self.origin {
            Origin::User => "  ",
            Origin::Bot => "",
        }
    }

    fn label(&self) -> &'static str {
        match self.origin {
            Origin::User => "Tú",
            Origin::Bot => "Asistente",
        }
    }

    fn render_header(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        let timestamp = self.timestamp.format("%H:%M").to_string();

        let header_line = Line::from(vec![
            Span::styled(self.indent().to_string(), style),
            Span::styled("┌─ ".to_string(), style),
            Span::styled(
                self.label().to_string(),
                style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ".to_string(), style),
            Span::styled(timestamp, style.add_modifier(Modifier::DIM)),
        ]);

        lines.push(header_line);
    }

    fn render_content(&self, lines: &mut Vec<Line<'static>>, area: Rect, style: Style) {
        let indent = self.indent();
        let wrap_width = (area.width as usize).saturating_sub(4).max(1);

        for wrapped_line in wrap(&self.content, wrap_width) {
            lines.push(Line::from(vec![
                Span::styled(indent.to_string(), style),
                Span::styled("│ ".to_string(), style),
                Span::styled(wrapped_line.to_string(), style),
            ]));
        }
    }

    fn render_footer(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        lines.push(Line::from(vec![
            Span::styled(self.indent().to_string(), style),
            Span::styled("╰─".to_string(), style),
        ]));
    }
}
