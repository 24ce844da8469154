use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::{
    ui::{app::App, components::status_bar::StatusBar},
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title(" Lyrify ")
            .title_alignment(Alignment::Center)
            .title_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            );
        let content_inner = content_block.inner(chunks[0]);
        f.render_widget(content_block, chunks[0]);

        let state = self.app.controller.state();
        self.app.router.render(f, content_inner, state);

        let in_flight = &state.in_flight;
        let busy = in_flight.list()
            || in_flight.navigation.is_some()
            || in_flight.similar()
            || in_flight.sentiment()
            || in_flight.recommendations();
        let hints = self.app.router.hints(state);
        f.render_widget(
            StatusBar::new(state.notice.as_ref(), hints, busy),
            chunks[1],
        );
    }
}
