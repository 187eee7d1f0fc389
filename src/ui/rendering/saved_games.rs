//! Saved games table.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Row, Table},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_saved_games(&self, f: &mut Frame, area: Rect) {
        let games = self.tracker.saved_games();

        // Newest last, trimmed to what fits
        let visible = area.height.saturating_sub(4) as usize;
        let skip = games.len().saturating_sub(visible);

        let rows: Vec<Row> = games
            .iter()
            .skip(skip)
            .map(|game| {
                Row::new(vec![
                    game.date.clone(),
                    game.home_team.clone(),
                    game.away_team.clone(),
                    game.home_total_shots.to_string(),
                    game.away_total_shots.to_string(),
                    game.home_total_goals.to_string(),
                    game.away_total_goals.to_string(),
                ])
            })
            .collect();

        let title = match &self.last_export {
            Some(path) => format!(
                "Saved Games ({}) | Last export: {}",
                games.len(),
                path.display()
            ),
            None => format!("Saved Games ({}) | Ctrl+E: Export CSV", games.len()),
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(24), // Date
                Constraint::Min(10),    // Home
                Constraint::Min(10),    // Away
                Constraint::Length(6),  // H SOG
                Constraint::Length(6),  // A SOG
                Constraint::Length(8),  // H Goals
                Constraint::Length(8),  // A Goals
            ],
        )
        .header(
            Row::new(vec![
                "Date", "Home", "Away", "H SOG", "A SOG", "H Goals", "A Goals",
            ])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1),
        )
        .block(Block::default().borders(Borders::ALL).title(title));

        f.render_widget(table, area);
    }
}
