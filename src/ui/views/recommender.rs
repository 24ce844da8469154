use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, TableState},
};

use crate::{
    controller::{intent::Intent, state::ViewState},
    ui::{
        components::{song_table::song_table, spinner::Spinner},
        traits::View,
        util::step,
    },
    util::colors,
};

const PLACEHOLDER: &str = "Describe the type of song you're looking for...";

/// Free-text recommendation overlay.
pub struct Recommender {
    input: String,
    editing: bool,
    table_state: TableState,
}

impl Default for Recommender {
    fn default() -> Self {
        Self {
            input: String::new(),
            editing: true,
            table_state: TableState::default(),
        }
    }
}

impl Recommender {
    fn edit(&mut self, key: KeyEvent, state: &ViewState) -> Option<Intent> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => None,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear();
                Some(Intent::None)
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                Some(Intent::None)
            }
            KeyCode::Backspace => {
                self.input.pop();
                Some(Intent::None)
            }
            KeyCode::Enter => {
                if self.input.trim().is_empty() || state.in_flight.recommendations() {
                    return Some(Intent::None);
                }
                self.editing = false;
                self.table_state.select(None);
                Some(Intent::RequestRecommend(self.input.clone()))
            }
            KeyCode::Tab | KeyCode::Down => {
                self.editing = false;
                Some(Intent::None)
            }
            _ => Some(Intent::None),
        }
    }
}

impl View for Recommender {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &ViewState) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Song Recommender ")
            .title_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(colors::BACKGROUND));
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(inner);

        let input = if self.input.is_empty() {
            Span::styled(PLACEHOLDER, Style::default().fg(colors::NEUTRAL))
        } else {
            Span::styled(self.input.as_str(), Style::default().fg(colors::TEXT))
        };
        let border = if self.editing {
            colors::PRIMARY
        } else {
            colors::NEUTRAL
        };
        f.render_widget(
            Paragraph::new(Line::from(input)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            ),
            chunks[0],
        );

        if state.in_flight.recommendations() {
            f.render_widget(
                Spinner::new("Finding Songs...")
                    .with_style(Style::default().fg(colors::SECONDARY))
                    .inline(),
                chunks[1],
            );
            return;
        }
        f.render_widget(
            Paragraph::new(Span::styled(
                "[Enter] Get Recommendations",
                Style::default().fg(colors::SECONDARY),
            )),
            chunks[1],
        );

        let results = &state.recommender.results;
        if results.is_empty() {
            return;
        }
        if !self.editing && self.table_state.selected().is_none() {
            self.table_state.select(Some(0));
        }
        let table = song_table(
            results.iter().map(|r| (&r.song, Some(r.similarity_score))),
            Some("Match Score"),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .title(" Recommended Songs "),
        );
        f.render_stateful_widget(table, chunks[2], &mut self.table_state);
    }

    fn handle_input(&mut self, key: KeyEvent, state: &ViewState) -> Option<Intent> {
        if key.code == KeyCode::Esc {
            return Some(Intent::ToggleRecommender);
        }
        if self.editing {
            return self.edit(key, state);
        }

        let results = &state.recommender.results;
        match key.code {
            KeyCode::Char('/') | KeyCode::Char('i') | KeyCode::Tab => {
                self.editing = true;
                Some(Intent::None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.table_state
                    .select(step(self.table_state.selected(), results.len(), 1));
                Some(Intent::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.table_state
                    .select(step(self.table_state.selected(), results.len(), -1));
                Some(Intent::None)
            }
            KeyCode::Enter => self
                .table_state
                .selected()
                .and_then(|i| results.get(i))
                .map(|r| Intent::RequestSelect(r.song.id)),
            _ => None,
        }
    }

    fn hints(&self, _state: &ViewState) -> &'static str {
        if self.editing {
            "type a description · Enter search · Tab results · Esc close"
        } else {
            "j/k move · Enter open · / edit query · Esc close"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::state::RequestId;
    use crate::http::models::{Recommendation, SongSummary};
    use crate::ui::util::{key, render_text};

    fn with_results() -> ViewState {
        let mut state = ViewState::default();
        state.recommender.visible = true;
        state.recommender.results = vec![Recommendation {
            song: SongSummary {
                id: 42,
                artist: "Sade".to_string(),
                title: "Smooth Operator".to_string(),
            },
            similarity_score: 0.734,
        }];
        state
    }

    fn type_text(view: &mut Recommender, state: &ViewState, text: &str) {
        for c in text.chars() {
            assert_eq!(view.handle_input(key(KeyCode::Char(c)), state), Some(Intent::None));
        }
    }

    #[test]
    fn test_placeholder_when_empty() {
        let mut view = Recommender::default();
        let text = render_text(&mut view, &ViewState::default(), 90, 20);
        assert!(text.contains(PLACEHOLDER));
    }

    #[test]
    fn test_submit_sends_typed_query() {
        let mut view = Recommender::default();
        let state = ViewState::default();
        type_text(&mut view, &state, "sad rainy");

        assert_eq!(
            view.handle_input(key(KeyCode::Enter), &state),
            Some(Intent::RequestRecommend("sad rainy".to_string()))
        );
    }

    #[test]
    fn test_blank_or_pending_query_not_submitted() {
        let mut view = Recommender::default();
        let mut state = ViewState::default();
        type_text(&mut view, &state, "  ");
        assert_eq!(view.handle_input(key(KeyCode::Enter), &state), Some(Intent::None));

        type_text(&mut view, &state, "calm");
        state.in_flight.recommendations = Some(RequestId(1));
        assert_eq!(view.handle_input(key(KeyCode::Enter), &state), Some(Intent::None));

        let text = render_text(&mut view, &state, 90, 20);
        assert!(text.contains("Finding Songs..."));
    }

    #[test]
    fn test_results_table_and_selection() {
        let mut view = Recommender::default();
        let state = with_results();
        view.handle_input(key(KeyCode::Tab), &state);
        let text = render_text(&mut view, &state, 90, 20);

        assert!(text.contains("Recommended Songs"));
        assert!(text.contains("Match Score"));
        assert!(text.contains("73.4%"));
        assert_eq!(
            view.handle_input(key(KeyCode::Enter), &state),
            Some(Intent::RequestSelect(42))
        );
        assert_eq!(
            view.handle_input(key(KeyCode::Esc), &state),
            Some(Intent::ToggleRecommender)
        );
    }
}
