use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::{
    controller::{
        intent::Intent,
        state::{DetailView, ViewState},
    },
    http::models::{SentimentResult, SongId, percent},
    ui::{components::spinner::Spinner, traits::View, util::step},
    util::{colors, text::truncate},
};

/// Lyrics, sentiment and similar songs of the displayed song.
#[derive(Default)]
pub struct LyricDetail {
    shown: Option<SongId>,
    similar_state: ListState,
    scroll: u16,
}

impl LyricDetail {
    /// Forgets the cursor and scroll offset of a previously shown song.
    fn sync(&mut self, detail: &DetailView) {
        let id = detail.song.id();
        if self.shown != Some(id) {
            self.shown = Some(id);
            self.scroll = 0;
            self.similar_state.select(None);
        }
        if self.similar_state.selected().is_none() && !detail.similar.is_empty() {
            self.similar_state.select(Some(0));
        }
    }

    fn header(detail: &DetailView, analyzing: bool) -> Paragraph<'_> {
        let song = &detail.song.summary;
        let action = if analyzing {
            Span::styled(
                format!("{} Analyzing...", Spinner::frame()),
                Style::default().fg(colors::NEUTRAL),
            )
        } else {
            Span::styled(
                "[s] Analyze Sentiment",
                Style::default().fg(colors::SECONDARY),
            )
        };

        Paragraph::new(vec![
            Line::from(Span::styled(
                song.title.as_str(),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("by {}", song.artist)),
            Line::from(vec![
                Span::styled(
                    format!("ID: {}   ", song.id),
                    Style::default().fg(colors::NEUTRAL),
                ),
                action,
            ]),
        ])
        .block(Block::default().borders(Borders::BOTTOM))
    }

    fn sentiment_lines(sentiment: &SentimentResult) -> Vec<Line<'_>> {
        let mut lines = vec![Line::from(Span::styled(
            "Sentiment Analysis Results:",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if sentiment.truncated {
            lines.push(Line::from(Span::styled(
                "Note: Lyrics were truncated for analysis due to length",
                Style::default().fg(colors::WARNING),
            )));
        }
        lines.extend(
            sentiment
                .scores
                .iter()
                .map(|s| Line::from(format!("{}: {}", s.label, percent(s.score)))),
        );
        lines
    }

    fn render_similar(&mut self, f: &mut Frame, area: Rect, detail: &DetailView, loading: bool) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Similar Songs ")
            .border_style(Style::default().fg(colors::NEUTRAL));

        if detail.similar.is_empty() {
            let inner = block.inner(area);
            f.render_widget(block, area);
            if loading {
                f.render_widget(
                    Spinner::new("Loading similar songs...").inline(),
                    inner,
                );
            } else {
                f.render_widget(
                    Paragraph::new("No similar songs found")
                        .style(Style::default().fg(colors::NEUTRAL)),
                    inner,
                );
            }
            return;
        }

        // borders plus highlight symbol
        let width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = detail
            .similar
            .iter()
            .map(|s| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        truncate(&s.title, width),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format!("  {}", truncate(&s.artist, width.saturating_sub(2)))),
                    Line::from(Span::styled(
                        format!("  Similarity: {}", percent(s.similarity_score)),
                        Style::default().fg(colors::NEUTRAL),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(colors::PRIMARY))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, area, &mut self.similar_state);
    }
}

impl View for LyricDetail {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &ViewState) {
        let Some(detail) = state.mode.detail() else {
            return;
        };
        self.sync(detail);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);

        let mut left_constraints = vec![Constraint::Length(4)];
        let sentiment = detail.sentiment.as_ref().map(Self::sentiment_lines);
        if let Some(lines) = &sentiment {
            left_constraints.push(Constraint::Length(lines.len() as u16 + 1));
        }
        left_constraints.push(Constraint::Min(1));
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints(left_constraints)
            .split(columns[0]);

        f.render_widget(
            Self::header(detail, state.in_flight.sentiment()),
            left[0],
        );

        let lyrics_area = match sentiment {
            Some(lines) => {
                f.render_widget(
                    Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM)),
                    left[1],
                );
                left[2]
            }
            None => left[1],
        };

        f.render_widget(
            Paragraph::new(detail.song.lyric_text.as_str())
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0))
                .block(Block::default().title(" Lyrics ")),
            lyrics_area,
        );

        self.render_similar(f, columns[1], detail, state.in_flight.similar());
    }

    fn handle_input(&mut self, key: KeyEvent, state: &ViewState) -> Option<Intent> {
        let detail = state.mode.detail()?;

        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(Intent::ExitDetail),
            KeyCode::Char('s') => {
                if state.in_flight.sentiment() {
                    Some(Intent::None)
                } else {
                    Some(Intent::RequestAnalyze(detail.song.id()))
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.similar_state.select(step(
                    self.similar_state.selected(),
                    detail.similar.len(),
                    1,
                ));
                Some(Intent::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.similar_state.select(step(
                    self.similar_state.selected(),
                    detail.similar.len(),
                    -1,
                ));
                Some(Intent::None)
            }
            KeyCode::PageDown | KeyCode::Char('J') => {
                self.scroll = self.scroll.saturating_add(5);
                Some(Intent::None)
            }
            KeyCode::PageUp | KeyCode::Char('K') => {
                self.scroll = self.scroll.saturating_sub(5);
                Some(Intent::None)
            }
            KeyCode::Enter => self
                .similar_state
                .selected()
                .and_then(|i| detail.similar.get(i))
                .map(|s| Intent::RequestSelect(s.similar_song_id)),
            _ => None,
        }
    }

    fn hints(&self, state: &ViewState) -> &'static str {
        if state.in_flight.sentiment() {
            "Esc back · j/k similar · Enter open · J/K scroll lyrics · q quit"
        } else {
            "Esc back · s sentiment · j/k similar · Enter open · J/K scroll lyrics · r recommend · q quit"
        }
    }
}
