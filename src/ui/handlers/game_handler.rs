//! Scoreboard actions.

use crate::{
    export::export_saved_games,
    tracker::{Direction, StatKind, Team, UndoOutcome},
};

use super::super::{app::App, types::NameField};

/// Helper struct for forwarding scoreboard actions to the tracker.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn change_period(&mut self, direction: Direction) {
        let before = self.app.tracker.current_period();
        let after = self.app.tracker.set_period(direction);
        if before != after {
            self.app.log(format!("Period {}", after));
        }
    }

    pub fn record(&mut self, team: Team, kind: StatKind) {
        match kind {
            StatKind::Shot => self.app.tracker.record_shot(team),
            StatKind::Goal => self.app.tracker.record_goal(team),
        }

        let period = self.app.tracker.current_period();
        let name = self.app.tracker.session().team_name(team).to_string();
        let count = self.app.tracker.count(team, kind, period);
        self.app
            .log(format!("{} {} (period {}: {})", name, kind, period, count));
    }

    pub fn undo(&mut self) {
        match self.app.tracker.undo() {
            UndoOutcome::Nothing => self.app.log("Nothing to undo"),
            UndoOutcome::Reverted(action) => self.app.log(format!("Undid {}", action)),
            UndoOutcome::Stale(action) => {
                self.app
                    .log(format!("Cannot undo {}: count already zero", action));
            }
        }
    }

    pub fn reset(&mut self) {
        self.app.tracker.reset();
        self.app.log("Tally reset");
    }

    pub fn save_game(&mut self) {
        let summary = self.app.tracker.save_game();
        let msg = format!(
            "Saved {} vs {}: shots {}-{}, goals {}-{}",
            summary.home_team,
            summary.away_team,
            summary.home_total_shots,
            summary.away_total_shots,
            summary.home_total_goals,
            summary.away_total_goals
        );
        self.app.log(msg);
    }

    /// Clears the live game and returns to the name entry screen.
    pub fn new_game(&mut self) {
        self.app.tracker.new_game();
        self.app.home_input.clear();
        self.app.away_input.clear();
        self.app.focus = NameField::Home;
        self.app.log("New game");
    }

    pub fn export(&mut self) {
        match export_saved_games(self.app.tracker.saved_games(), &self.app.export_dir) {
            Ok(Some(path)) => {
                self.app.log(format!("Exported to {}", path.display()));
                self.app.last_export = Some(path);
            }
            Ok(None) => self.app.log("No saved games to export"),
            Err(e) => {
                tracing::error!("export failed: {:#}", e);
                self.app.log(format!("Export failed: {}", e));
            }
        }
    }
}
