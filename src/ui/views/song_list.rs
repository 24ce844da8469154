use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Paragraph, TableState},
};

use crate::{
    controller::{intent::Intent, state::ViewState},
    ui::{
        components::{
            cluster_gallery::ClusterGallery, pagination::Pagination, search_bar::SearchBar,
            song_table::song_table, spinner::Spinner,
        },
        traits::View,
        util::step,
    },
    util::colors,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Focus {
    #[default]
    Songs,
    Clusters,
}

/// Search bar, paged song table and the cluster gallery.
#[derive(Default)]
pub struct SongList {
    focus: Focus,
    editing: bool,
    table_state: TableState,
    cluster_index: usize,
}

/// Artist after (or before) the current one; `""` stands for all artists.
pub fn cycle_artist(artists: &[String], current: &str, forward: bool) -> String {
    let options = artists.len() + 1;
    let position = artists
        .iter()
        .position(|a| a == current)
        .map_or(0, |i| i + 1);
    let next = if forward {
        (position + 1) % options
    } else {
        (position + options - 1) % options
    };

    if next == 0 {
        String::new()
    } else {
        artists[next - 1].clone()
    }
}

impl SongList {
    fn edit_title(&mut self, key: KeyEvent, state: &ViewState) -> Option<Intent> {
        let title = &state.page.title_filter;
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => None,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Intent::RequestFilter {
                    title: Some(String::new()),
                    artist: None,
                })
            }
            KeyCode::Char(c) => Some(Intent::RequestFilter {
                title: Some(format!("{}{}", title, c)),
                artist: None,
            }),
            KeyCode::Backspace => {
                let mut title = title.clone();
                if title.pop().is_none() {
                    return Some(Intent::None);
                }
                Some(Intent::RequestFilter {
                    title: Some(title),
                    artist: None,
                })
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
                self.editing = false;
                Some(Intent::None)
            }
            _ => Some(Intent::None),
        }
    }

    fn page_intent(state: &ViewState, forward: bool) -> Intent {
        let page = &state.page;
        if forward && page.has_next() {
            Intent::RequestPage(page.current_page + 1)
        } else if !forward && page.has_previous() {
            Intent::RequestPage(page.current_page - 1)
        } else {
            Intent::None
        }
    }
}

impl View for SongList {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &ViewState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(6),
            ])
            .split(area);

        f.render_widget(
            SearchBar::new(
                &state.page.title_filter,
                &state.page.artist_filter,
                self.editing,
            ),
            chunks[0],
        );

        if state.in_flight.list() {
            f.render_widget(
                Spinner::new("Loading...").with_style(Style::default().fg(colors::NEUTRAL)),
                chunks[1],
            );
        } else if state.songs.is_empty() {
            f.render_widget(
                Paragraph::new("  No songs found").style(Style::default().fg(colors::NEUTRAL)),
                chunks[1],
            );
        } else {
            if self
                .table_state
                .selected()
                .is_none_or(|i| i >= state.songs.len())
            {
                self.table_state.select(Some(0));
            }
            let table = song_table(state.songs.iter().map(|s| (s, None)), None);
            f.render_stateful_widget(table, chunks[1], &mut self.table_state);
            f.render_widget(Pagination::new(&state.page), chunks[2]);
        }

        self.cluster_index = self
            .cluster_index
            .min(state.cluster_stats.len().saturating_sub(1));
        f.render_widget(
            ClusterGallery::new(
                &state.cluster_stats,
                (self.focus == Focus::Clusters).then_some(self.cluster_index),
                state.in_flight.cluster_stats,
            ),
            chunks[3],
        );
    }

    fn handle_input(&mut self, key: KeyEvent, state: &ViewState) -> Option<Intent> {
        if self.editing {
            return self.edit_title(key, state);
        }

        match key.code {
            KeyCode::Char('/') | KeyCode::Char('i') => {
                self.editing = true;
                self.focus = Focus::Songs;
                Some(Intent::None)
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Songs => Focus::Clusters,
                    Focus::Clusters => Focus::Songs,
                };
                Some(Intent::None)
            }
            KeyCode::Char('a') | KeyCode::Char('A') => Some(Intent::RequestFilter {
                title: None,
                artist: Some(cycle_artist(
                    &state.artists,
                    &state.page.artist_filter,
                    key.code == KeyCode::Char('a'),
                )),
            }),
            KeyCode::Char('x') => Some(Intent::RequestFilter {
                title: Some(String::new()),
                artist: Some(String::new()),
            }),
            KeyCode::Char('[') | KeyCode::PageUp => Some(Self::page_intent(state, false)),
            KeyCode::Char(']') | KeyCode::PageDown => Some(Self::page_intent(state, true)),
            _ => match self.focus {
                Focus::Songs => match key.code {
                    KeyCode::Down | KeyCode::Char('j') => {
                        self.table_state
                            .select(step(self.table_state.selected(), state.songs.len(), 1));
                        Some(Intent::None)
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.table_state
                            .select(step(self.table_state.selected(), state.songs.len(), -1));
                        Some(Intent::None)
                    }
                    KeyCode::Left | KeyCode::Char('h') => Some(Self::page_intent(state, false)),
                    KeyCode::Right | KeyCode::Char('l') => Some(Self::page_intent(state, true)),
                    KeyCode::Enter => self
                        .table_state
                        .selected()
                        .and_then(|i| state.songs.get(i))
                        .map(|song| Intent::RequestSelect(song.id)),
                    _ => None,
                },
                Focus::Clusters => match key.code {
                    KeyCode::Left | KeyCode::Char('h') => {
                        self.cluster_index = step(
                            Some(self.cluster_index),
                            state.cluster_stats.len(),
                            -1,
                        )
                        .unwrap_or(0);
                        Some(Intent::None)
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        self.cluster_index =
                            step(Some(self.cluster_index), state.cluster_stats.len(), 1)
                                .unwrap_or(0);
                        Some(Intent::None)
                    }
                    KeyCode::Enter => state
                        .cluster_stats
                        .get(self.cluster_index)
                        .map(|stat| Intent::RequestClusterSelect(stat.cluster_label)),
                    _ => None,
                },
            },
        }
    }

    fn hints(&self, _state: &ViewState) -> &'static str {
        if self.editing {
            "type to filter titles · Enter/Esc done · Ctrl-U clear"
        } else {
            match self.focus {
                Focus::Songs => {
                    "/ search · a/A artist · x clear · ←/→ page · Enter open · Tab clusters · r recommend · q quit"
                }
                Focus::Clusters => "←/→ choose · Enter open cluster · Tab songs · r recommend · q quit",
            }
        }
    }
}
