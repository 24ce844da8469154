use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::util::colors;

/// Title search box and artist selector.
pub struct SearchBar<'a> {
    title: &'a str,
    artist: &'a str,
    editing: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(title: &'a str, artist: &'a str, editing: bool) -> Self {
        Self {
            title,
            artist,
            editing,
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let input_style = if self.editing {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let title_line = if self.title.is_empty() && !self.editing {
            Line::from(Span::styled(
                "Search song titles... (/)",
                Style::default().fg(colors::NEUTRAL),
            ))
        } else if self.editing {
            Line::from(vec![Span::raw(self.title), Span::raw("▏").fg(colors::PRIMARY)])
        } else {
            Line::from(self.title)
        };

        Paragraph::new(title_line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Title")
                    .border_style(input_style),
            )
            .render(chunks[0], buf);

        let artist_line = if self.artist.is_empty() {
            Line::from(Span::styled(
                "All artists (a/A)",
                Style::default().fg(colors::NEUTRAL),
            ))
        } else {
            Line::from(vec![
                Span::raw("◀ ").fg(colors::NEUTRAL),
                Span::raw(self.artist).bold(),
                Span::raw(" ▶").fg(colors::NEUTRAL),
            ])
        };

        Paragraph::new(artist_line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Artist")
                    .border_style(Style::default().fg(colors::NEUTRAL)),
            )
            .render(chunks[1], buf);
    }
}
