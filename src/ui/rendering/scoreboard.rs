//! Period selector and per-team counts.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    tracker::{Period, StatKind, Team},
    ui::app::App,
};

impl App {
    pub(in crate::ui) fn draw_period_bar(&self, f: &mut Frame, area: Rect) {
        let current = self.tracker.current_period();

        let mut spans = vec![Span::raw("◀  ")];
        for period in Period::all() {
            let style = if period == current {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", period.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw(" ▶"));

        f.render_widget(
            Paragraph::new(Line::from(spans))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!("Period: {}", current.label())),
                ),
            area,
        );
    }

    pub(in crate::ui) fn draw_team_panels(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.draw_team_panel(f, columns[0], Team::Home, Color::LightBlue);
        self.draw_team_panel(f, columns[1], Team::Away, Color::LightRed);
    }

    fn draw_team_panel(&self, f: &mut Frame, area: Rect, team: Team, color: Color) {
        let period = self.tracker.current_period();
        let name = self.tracker.session().team_name(team);
        let title = if name.is_empty() {
            team.as_str().to_uppercase()
        } else {
            name.to_string()
        };
        let (shot_key, goal_key) = match team {
            Team::Home => ("h", "H"),
            Team::Away => ("a", "A"),
        };

        let value_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("Shots: "),
                Span::styled(
                    self.tracker.count(team, StatKind::Shot, period).to_string(),
                    value_style,
                ),
                Span::styled(
                    format!("   (total {})", self.tracker.total(team, StatKind::Shot)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::raw("Goals: "),
                Span::styled(
                    self.tracker.count(team, StatKind::Goal, period).to_string(),
                    value_style,
                ),
                Span::styled(
                    format!("   (total {})", self.tracker.total(team, StatKind::Goal)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("{} = SOG | {} = Goal", shot_key, goal_key),
                Style::default().fg(Color::Gray),
            )),
        ];

        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(title),
            ),
            area,
        );
    }
}
