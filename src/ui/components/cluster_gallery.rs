use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::spinner::Spinner;
use crate::{http::models::ClusterStat, util::colors};

pub const TILE_WIDTH: u16 = 18;

/// Horizontal strip of cluster tiles ("Playlist 3", "40 songs").
pub struct ClusterGallery<'a> {
    stats: &'a [ClusterStat],
    selected: Option<usize>,
    loading: bool,
}

impl<'a> ClusterGallery<'a> {
    pub fn new(stats: &'a [ClusterStat], selected: Option<usize>, loading: bool) -> Self {
        Self {
            stats,
            selected,
            loading,
        }
    }
}

/// First visible tile so that `selected` stays on screen.
pub fn first_visible(selected: usize, visible: usize) -> usize {
    (selected + 1).saturating_sub(visible.max(1))
}

impl Widget for ClusterGallery<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .title("Song Clusters")
            .border_style(Style::default().fg(if self.selected.is_some() {
                colors::PRIMARY
            } else {
                colors::NEUTRAL
            }));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.stats.is_empty() {
            if self.loading {
                Spinner::new("Loading clusters...")
                    .with_style(Style::default().fg(colors::NEUTRAL))
                    .render(inner, buf);
            } else {
                Paragraph::new("No clusters available")
                    .style(Style::default().fg(colors::NEUTRAL))
                    .alignment(Alignment::Center)
                    .render(inner, buf);
            }
            return;
        }

        let visible = (inner.width / TILE_WIDTH) as usize;
        let offset = first_visible(self.selected.unwrap_or(0), visible);

        for (slot, (index, stat)) in self
            .stats
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let tile = Rect {
                x: inner.x + slot as u16 * TILE_WIDTH,
                y: inner.y,
                width: TILE_WIDTH,
                height: inner.height,
            };

            let is_selected = self.selected == Some(index);
            let accent = colors::PLAYLIST[index % colors::PLAYLIST.len()];
            let tile_block = Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(if is_selected {
                    Style::default().fg(accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::NEUTRAL)
                });

            let lines = vec![
                Line::styled("♫", Style::default().fg(accent)),
                Line::styled(
                    format!("Playlist {}", stat.cluster_label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    format!("{} songs", stat.count),
                    Style::default().fg(colors::NEUTRAL),
                ),
            ];

            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(tile_block)
                .render(tile, buf);
        }
    }
}
