use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::Clear,
};

use crate::controller::{
    intent::Intent,
    state::{ViewMode, ViewState},
};

use super::{
    traits::View,
    views::{ClusterSongs, Recommender, LyricDetail, SongList},
};

/// Picks the view for the current mode. The recommender sits on top of
/// whichever view is active while it is open.
pub struct Router {
    song_list: SongList,
    lyric_detail: LyricDetail,
    cluster_songs: ClusterSongs,
    overlay: Recommender,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            song_list: SongList::default(),
            lyric_detail: LyricDetail::default(),
            cluster_songs: ClusterSongs::default(),
            overlay: Recommender::default(),
        }
    }

    fn base_view(&mut self, state: &ViewState) -> &mut dyn View {
        match state.mode {
            ViewMode::List => &mut self.song_list,
            ViewMode::Detail(_) => &mut self.lyric_detail,
            ViewMode::Cluster(_) => &mut self.cluster_songs,
        }
    }

    pub fn active_view(&mut self, state: &ViewState) -> &mut dyn View {
        if state.recommender.visible {
            &mut self.overlay
        } else {
            self.base_view(state)
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &ViewState) {
        self.base_view(state).render(f, area, state);

        if state.recommender.visible {
            let popup = centered(area, 80, 80);
            f.render_widget(Clear, popup);
            self.overlay.render(f, popup, state);
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent, state: &ViewState) -> Option<Intent> {
        self.active_view(state).handle_input(key, state)
    }

    pub fn hints(&mut self, state: &ViewState) -> &'static str {
        self.active_view(state).hints(state)
    }
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::util::key;
    use ratatui::{Terminal, backend::TestBackend, crossterm::event::KeyCode};

    #[test]
    fn test_overlay_takes_input_while_visible() {
        let mut router = Router::new();
        let mut state = ViewState::default();

        assert_eq!(router.handle_input(key(KeyCode::Char('q')), &state), None);

        state.recommender.visible = true;
        assert_eq!(
            router.handle_input(key(KeyCode::Char('q')), &state),
            Some(Intent::None)
        );
        assert_eq!(
            router.handle_input(key(KeyCode::Esc), &state),
            Some(Intent::ToggleRecommender)
        );
    }

    #[test]
    fn test_overlay_drawn_over_list() {
        let mut router = Router::new();
        let mut state = ViewState::default();
        state.recommender.visible = true;

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| router.render(f, f.area(), &state))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Song Recommender"));
        assert!(text.contains("All artists"));
    }
}
