//! Team-name entry gate.

use super::super::{
    app::App,
    types::{InputStatus, NameField},
};

/// Helper struct for editing team names and starting the game.
pub struct SetupHandler<'a> {
    app: &'a mut App,
}

impl<'a> SetupHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    fn focused_input(&mut self) -> &mut String {
        match self.app.focus {
            NameField::Home => &mut self.app.home_input,
            NameField::Away => &mut self.app.away_input,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_input().push(c);
    }

    pub fn pop_char(&mut self) {
        self.focused_input().pop();
    }

    pub fn switch_field(&mut self) {
        self.app.focus = self.app.focus.toggle();
    }

    /// Starts the game when both names are present; otherwise focuses the
    /// first empty field.
    pub fn submit(&mut self) {
        match self.app.setup_status() {
            InputStatus::Valid => {
                let home = self.app.home_input.trim().to_string();
                let away = self.app.away_input.trim().to_string();
                self.app.log(format!("Game started: {} vs {}", home, away));
                self.app.tracker.start_game(home, away);
            }
            InputStatus::Incomplete | InputStatus::Invalid(_) => {
                self.app.log("Both team names are required");
                self.app.focus = if self.app.home_input.trim().is_empty() {
                    NameField::Home
                } else {
                    NameField::Away
                };
            }
        }
    }
}

impl App {
    /// Validation state of the two name fields. Whitespace-only counts as empty.
    pub(in crate::ui) fn setup_status(&self) -> InputStatus {
        let home = self.home_input.trim();
        let away = self.away_input.trim();

        if home.is_empty() && away.is_empty() {
            return InputStatus::Incomplete;
        }

        if home.is_empty() {
            return InputStatus::Invalid("home team name required");
        }

        if away.is_empty() {
            return InputStatus::Invalid("away team name required");
        }

        InputStatus::Valid
    }
}
