use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};

use super::spinner::Spinner;
use crate::{controller::state::Notice, util::colors};

/// Bottom line: failure notice or key hints, plus a busy indicator.
pub struct StatusBar<'a> {
    notice: Option<&'a Notice>,
    hints: &'a str,
    busy: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(notice: Option<&'a Notice>, hints: &'a str, busy: bool) -> Self {
        Self {
            notice,
            hints,
            busy,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(14)])
            .split(area);

        let left = match self.notice {
            Some(Notice(message)) => Span::styled(
                format!(" ⚠ {}", message),
                Style::default()
                    .fg(colors::ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(format!(" {}", self.hints), Style::default().fg(colors::NEUTRAL)),
        };
        Paragraph::new(left).render(chunks[0], buf);

        if self.busy {
            Spinner::new("Loading")
                .inline()
                .with_style(Style::default().fg(colors::SECONDARY))
                .render(chunks[1], buf);
        }
    }
}
