//! Team-name entry screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{
    app::App,
    types::{InputStatus, NameField},
};

impl App {
    pub(in crate::ui) fn draw_setup(&self, f: &mut Frame, area: Rect) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .title("Start New Game");
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        self.draw_name_field(f, rows[0], NameField::Home);
        self.draw_name_field(f, rows[1], NameField::Away);

        let (color, text) = match self.setup_status() {
            InputStatus::Valid => (Color::Green, "Enter = start game"),
            InputStatus::Incomplete => (Color::Gray, "Enter both team names"),
            InputStatus::Invalid(msg) => (Color::Red, msg),
        };

        f.render_widget(
            Paragraph::new(format!("{} | Tab = switch field | Ctrl+Q = quit", text))
                .style(Style::default().fg(color))
                .alignment(Alignment::Center),
            rows[2],
        );
    }

    fn draw_name_field(&self, f: &mut Frame, area: Rect, field: NameField) {
        let (title, value) = match field {
            NameField::Home => ("Home Team Name", &self.home_input),
            NameField::Away => ("Away Team Name", &self.away_input),
        };

        let focused = self.focus == field;
        let border_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let text = if focused {
            format!("{}▌", value)
        } else {
            value.clone()
        };

        f.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(title),
            ),
            area,
        );
    }
}
