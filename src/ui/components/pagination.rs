use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::{controller::state::PageState, util::colors};

/// `◀ Previous   Page n of m   Next ▶`, greying out the ends.
pub struct Pagination<'a> {
    page: &'a PageState,
}

impl<'a> Pagination<'a> {
    pub fn new(page: &'a PageState) -> Self {
        Self { page }
    }
}

fn control(label: &str, enabled: bool) -> Span<'_> {
    if enabled {
        Span::styled(
            label,
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            label,
            Style::default()
                .fg(colors::NEUTRAL)
                .add_modifier(Modifier::DIM),
        )
    }
}

impl Widget for Pagination<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            control("◀ Previous", self.page.has_previous()),
            Span::raw(format!(
                "   Page {} of {}   ",
                self.page.current_page, self.page.total_pages
            ))
            .style(Style::default().fg(colors::NEUTRAL)),
            control("Next ▶", self.page.has_next()),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
