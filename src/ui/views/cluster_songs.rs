use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, TableState},
};

use crate::{
    controller::{
        intent::Intent,
        state::{ViewMode, ViewState},
    },
    http::models::ClusterLabel,
    ui::{components::song_table::song_table, traits::View, util::step},
    util::colors,
};

#[derive(Default)]
pub struct ClusterSongs {
    shown: Option<ClusterLabel>,
    table_state: TableState,
}

impl View for ClusterSongs {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &ViewState) {
        let ViewMode::Cluster(selection) = &state.mode else {
            return;
        };
        if self.shown != Some(selection.cluster_label) {
            self.shown = Some(selection.cluster_label);
            self.table_state.select(None);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Cluster {} Songs ", selection.cluster_label))
            .title_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            );

        if selection.songs.is_empty() {
            f.render_widget(
                Paragraph::new("No songs in this cluster")
                    .style(Style::default().fg(colors::NEUTRAL))
                    .block(block),
                area,
            );
            return;
        }

        if self.table_state.selected().is_none() {
            self.table_state.select(Some(0));
        }
        let table = song_table(selection.songs.iter().map(|s| (s, None)), None).block(block);
        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn handle_input(&mut self, key: KeyEvent, state: &ViewState) -> Option<Intent> {
        let ViewMode::Cluster(selection) = &state.mode else {
            return None;
        };

        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(Intent::ExitCluster),
            KeyCode::Down | KeyCode::Char('j') => {
                self.table_state
                    .select(step(self.table_state.selected(), selection.songs.len(), 1));
                Some(Intent::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.table_state
                    .select(step(self.table_state.selected(), selection.songs.len(), -1));
                Some(Intent::None)
            }
            KeyCode::Enter => self
                .table_state
                .selected()
                .and_then(|i| selection.songs.get(i))
                .map(|song| Intent::RequestSelect(song.id)),
            _ => None,
        }
    }

    fn hints(&self, _state: &ViewState) -> &'static str {
        "Esc back · j/k move · Enter open · r recommend · q quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::models::{ClusterSelection, SongSummary};
    use crate::ui::util::{key, render_text};

    fn cluster_state() -> ViewState {
        let mut state = ViewState::default();
        state.mode = ViewMode::Cluster(ClusterSelection {
            cluster_label: 3,
            songs: vec![
                SongSummary {
                    id: 1,
                    artist: "A".to_string(),
                    title: "First".to_string(),
                },
                SongSummary {
                    id: 2,
                    artist: "B".to_string(),
                    title: "Second".to_string(),
                },
            ],
        });
        state
    }

    #[test]
    fn test_render_titles_cluster() {
        let mut view = ClusterSongs::default();
        let text = render_text(&mut view, &cluster_state(), 80, 12);

        assert!(text.contains("Cluster 3 Songs"));
        assert!(text.contains("First"));
        assert!(text.contains("Second"));
    }

    #[test]
    fn test_navigation_keys() {
        let mut view = ClusterSongs::default();
        let state = cluster_state();
        render_text(&mut view, &state, 80, 12);

        view.handle_input(key(KeyCode::Char('j')), &state);
        assert_eq!(
            view.handle_input(key(KeyCode::Enter), &state),
            Some(Intent::RequestSelect(2))
        );
        assert_eq!(
            view.handle_input(key(KeyCode::Esc), &state),
            Some(Intent::ExitCluster)
        );
    }
}
