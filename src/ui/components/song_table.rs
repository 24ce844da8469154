use ratatui::{
    layout::Constraint,
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
};

use crate::{
    http::models::{SongSummary, percent},
    util::colors,
};

/// Artist / title table, optionally with a score column.
pub fn song_table<'a, I>(songs: I, score_header: Option<&'a str>) -> Table<'a>
where
    I: IntoIterator<Item = (&'a SongSummary, Option<f64>)>,
{
    let mut header = vec![Cell::from("Artist"), Cell::from("Title")];
    let mut widths = vec![Constraint::Percentage(35), Constraint::Fill(1)];
    if let Some(score_header) = score_header {
        header.push(Cell::from(score_header));
        widths.push(Constraint::Length(12));
    }

    let rows = songs.into_iter().map(|(song, score)| {
        let mut cells = vec![
            Cell::from(song.artist.as_str()),
            Cell::from(song.title.as_str()),
        ];
        if let Some(score) = score {
            cells.push(Cell::from(percent(score)));
        }
        Row::new(cells)
    });

    Table::new(rows, widths)
        .header(
            Row::new(header).style(
                Style::default()
                    .fg(colors::NEUTRAL)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .row_highlight_style(
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ")
}
