mod logs;
mod saved_games;
mod scoreboard;
mod setup;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::{app::App, types::Screen};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        if self.screen() == Screen::Setup {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(11),   // Name entry
                    Constraint::Length(6), // Small log panel
                ])
                .split(f.area());

            self.draw_setup(f, layout[0]);
            self.draw_logs(f, layout[1]);
            return;
        }

        // Saved games table only appears once something is saved
        let saved_height = if self.tracker.saved_games().is_empty() {
            0
        } else {
            (self.tracker.saved_games().len() as u16 + 4).min(14)
        };

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(9),
                Constraint::Length(saved_height),
                Constraint::Min(5), // logs panel
                Constraint::Length(3),
            ])
            .split(f.area());

        self.draw_period_bar(f, layout[0]);
        self.draw_team_panels(f, layout[1]);
        if saved_height > 0 {
            self.draw_saved_games(f, layout[2]);
        }
        self.draw_logs(f, layout[3]);
        self.draw_help(f, layout[4]);
    }
}
