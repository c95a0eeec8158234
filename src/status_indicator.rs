use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One-row status line under the message list: an animated spinner while
/// replies are in flight, a dim key hint otherwise.
#[derive(Debug)]
pub struct StatusIndicator {
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self { spinner_idx: 0 }
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, pending: usize) {
        let spinner_frames = ["◐", "◓", "◑", "◒"];

        let status = if pending > 0 {
            Line::from(vec![
                Span::styled(
                    spinner_frames[self.spinner_idx % spinner_frames.len()],
                    Style::default().fg(Color::Gray),
                ),
                Span::raw(" "),
                Span::styled(
                    "El asistente está escribiendo…",
                    Style::default().fg(Color::Yellow),
                ),
            ])
        } else {
            Line::from(Span::styled(
                "Enter envía · Tab oculta el panel",
                Style::default().fg(Color::DarkGray),
            ))
        };

        frame.render_widget(
            Paragraph::new(status).alignment(ratatui::layout::Alignment::Left),
            Rect {
                x: area.x,
                y: area.y + 1,
                width: area.width,
                height: 1,
            },
        );
    }
}

impl Default for StatusIndicator {
    fn default() -> Self {
        Self::new()
    }
}
