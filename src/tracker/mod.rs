//! Scoreboard state: the live tally, period selector, pending undo, team
//! names and the saved-games history.

mod session;
mod tally;
mod undo;

pub use session::{GameSession, PeriodRecord, SavedGameSummary, SavedGames};
pub use tally::{Direction, PERIOD_COUNT, PERIOD_LABELS, Period, PeriodTally, StatKind, Team};
pub use undo::{PendingUndo, RecordedAction, UndoOutcome, UndoPolicy};

use chrono::Local;
use tracing::{debug, info, warn};

/// Format used for the date label of a saved game, e.g. `3/14/2026, 7:05:09 PM`.
pub const DATE_LABEL_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackerConfig {
    pub undo_policy: UndoPolicy,
}

/// Owns all scoreboard state. Every operation runs to completion and cannot fail.
#[derive(Debug, Clone, Default)]
pub struct GameTracker {
    config: TrackerConfig,
    tally: PeriodTally,
    current_period: Period,
    pending_undo: PendingUndo,
    session: GameSession,
    saved_games: SavedGames,
}

impl GameTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn tally(&self) -> &PeriodTally {
        &self.tally
    }

    pub fn current_period(&self) -> Period {
        self.current_period
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn saved_games(&self) -> &SavedGames {
        &self.saved_games
    }

    pub fn pending_undo(&self) -> Option<&RecordedAction> {
        self.pending_undo.peek()
    }

    pub fn policy(&self) -> UndoPolicy {
        self.config.undo_policy
    }

    /// Count for one statistic in one period.
    pub fn count(&self, team: Team, kind: StatKind, period: Period) -> u32 {
        self.tally.get(team, kind, period)
    }

    pub fn total(&self, team: Team, kind: StatKind) -> u32 {
        self.tally.total(team, kind)
    }

    /// Moves the period selector one step, clamped to `[1, OT]`.
    pub fn set_period(&mut self, direction: Direction) -> Period {
        let next = self.current_period.step(direction);
        if next != self.current_period {
            debug!(from = %self.current_period, to = %next, "period changed");
            if self.config.undo_policy == UndoPolicy::ClearOnPeriodChange {
                self.pending_undo.clear();
            }
        }
        self.current_period = next;
        next
    }

    pub fn record_shot(&mut self, team: Team) {
        self.record_event(team, StatKind::Shot);
    }

    pub fn record_goal(&mut self, team: Team) {
        self.record_event(team, StatKind::Goal);
    }

    fn record_event(&mut self, team: Team, kind: StatKind) {
        let period = self.current_period;
        self.tally.increment(team, kind, period);
        self.pending_undo.record(RecordedAction { team, kind, period });
        debug!(
            %team,
            %kind,
            %period,
            count = self.tally.get(team, kind, period),
            "event recorded"
        );
    }

    /// Reverses the most recent increment, at most once.
    pub fn undo(&mut self) -> UndoOutcome {
        let Some(action) = self.pending_undo.take() else {
            return UndoOutcome::Nothing;
        };

        if self.tally.decrement(action.team, action.kind, action.period) {
            debug!(%action, "undo applied");
            UndoOutcome::Reverted(action)
        } else {
            warn!(%action, "undo refused: slot already at zero");
            UndoOutcome::Stale(action)
        }
    }

    /// Zeroes the tally. Period, names and history are kept.
    pub fn reset(&mut self) {
        self.tally.clear();
        self.pending_undo.clear();
        info!("tally reset");
    }

    /// Marks the game live with the given names. Callers check the names are
    /// non-empty before calling.
    pub fn start_game(&mut self, home_team: impl Into<String>, away_team: impl Into<String>) {
        self.session.home_team = home_team.into();
        self.session.away_team = away_team.into();
        self.session.game_started = true;
        info!(
            home = %self.session.home_team,
            away = %self.session.away_team,
            "game started"
        );
    }

    /// Saves a summary labelled with the current local time.
    pub fn save_game(&mut self) -> &SavedGameSummary {
        let label = Local::now().format(DATE_LABEL_FORMAT).to_string();
        self.save_game_labelled(label)
    }

    /// Appends a snapshot of the live tally. The tally keeps running.
    pub fn save_game_labelled(&mut self, date: impl Into<String>) -> &SavedGameSummary {
        let summary = SavedGameSummary::snapshot(date.into(), &self.session, &self.tally);
        info!(
            date = %summary.date,
            home = %summary.home_team,
            away = %summary.away_team,
            home_shots = summary.home_total_shots,
            away_shots = summary.away_total_shots,
            home_goals = summary.home_total_goals,
            away_goals = summary.away_total_goals,
            "game saved"
        );
        self.saved_games.push(summary)
    }

    /// Clears the live game and returns to name entry. Saved games are kept.
    pub fn new_game(&mut self) {
        self.tally.clear();
        self.pending_undo.clear();
        self.current_period = Period::FIRST;
        self.session = GameSession::default();
        info!(saved = self.saved_games.len(), "new game");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> GameTracker {
        let mut tracker = GameTracker::new(TrackerConfig::default());
        tracker.start_game("Blues", "Rivals");
        tracker
    }

    fn all_cells(tracker: &GameTracker) -> Vec<u32> {
        let mut cells = Vec::new();
        for team in [Team::Home, Team::Away] {
            for kind in [StatKind::Shot, StatKind::Goal] {
                for period in Period::all() {
                    cells.push(tracker.count(team, kind, period));
                }
            }
        }
        cells
    }

    #[test]
    fn test_initial_state() {
        let tracker = GameTracker::new(TrackerConfig::default());

        assert_eq!(tracker.current_period(), Period::FIRST);
        assert!(tracker.tally().is_empty());
        assert!(tracker.pending_undo().is_none());
        assert!(!tracker.session().game_started);
        assert!(tracker.session().home_team.is_empty());
        assert!(tracker.saved_games().is_empty());
    }

    #[test]
    fn test_record_increments_current_period_only() {
        let mut tracker = started();
        tracker.set_period(Direction::Forward);
        tracker.record_goal(Team::Away);

        assert_eq!(tracker.count(Team::Away, StatKind::Goal, Period::clamped(1)), 1);
        assert_eq!(all_cells(&tracker).iter().sum::<u32>(), 1);
    }

    #[test]
    fn test_undo_cancels_last_action_once() {
        let mut tracker = started();
        tracker.record_shot(Team::Home);
        let before = all_cells(&tracker);

        tracker.record_goal(Team::Home);
        let outcome = tracker.undo();

        assert!(matches!(outcome, UndoOutcome::Reverted(a) if a.kind == StatKind::Goal));
        assert_eq!(all_cells(&tracker), before);
        assert_eq!(tracker.undo(), UndoOutcome::Nothing);
        assert_eq!(all_cells(&tracker), before);
    }

    #[test]
    fn test_only_latest_action_is_undoable() {
        let mut tracker = started();
        tracker.record_shot(Team::Home);
        tracker.record_shot(Team::Away);

        tracker.undo();
        tracker.undo();

        assert_eq!(tracker.total(Team::Home, StatKind::Shot), 1);
        assert_eq!(tracker.total(Team::Away, StatKind::Shot), 0);
    }

    #[test]
    fn test_follow_action_undo_crosses_period_change() {
        let mut tracker = started();
        tracker.record_shot(Team::Away);
        tracker.set_period(Direction::Forward);

        let outcome = tracker.undo();

        assert!(matches!(outcome, UndoOutcome::Reverted(a) if a.period == Period::FIRST));
        assert_eq!(tracker.total(Team::Away, StatKind::Shot), 0);
        assert_eq!(tracker.current_period().index(), 1);
    }

    #[test]
    fn test_clear_on_period_change_drops_undo() {
        let mut tracker = GameTracker::new(TrackerConfig {
            undo_policy: UndoPolicy::ClearOnPeriodChange,
        });
        tracker.start_game("Blues", "Rivals");
        tracker.record_shot(Team::Away);
        tracker.set_period(Direction::Forward);

        assert_eq!(tracker.undo(), UndoOutcome::Nothing);
        assert_eq!(tracker.total(Team::Away, StatKind::Shot), 1);
    }

    #[test]
    fn test_clear_on_period_change_keeps_undo_at_boundary() {
        let mut tracker = GameTracker::new(TrackerConfig {
            undo_policy: UndoPolicy::ClearOnPeriodChange,
        });
        tracker.record_goal(Team::Home);
        tracker.set_period(Direction::Back);

        assert!(matches!(tracker.undo(), UndoOutcome::Reverted(_)));
    }

    #[test]
    fn test_stale_undo_is_refused() {
        let mut tracker = started();
        tracker.record_goal(Team::Home);
        // Only reachable by bypassing the public operations.
        tracker.tally.clear();

        let outcome = tracker.undo();

        assert!(matches!(outcome, UndoOutcome::Stale(_)));
        assert!(tracker.pending_undo().is_none());
        assert!(all_cells(&tracker).iter().all(|&c| c == 0));
    }

    #[test]
    fn test_reset_zeroes_all_cells_and_pending_undo() {
        let mut tracker = started();
        for _ in 0..3 {
            tracker.record_shot(Team::Home);
            tracker.record_goal(Team::Away);
            tracker.set_period(Direction::Forward);
        }

        tracker.reset();

        assert_eq!(all_cells(&tracker), vec![0; 16]);
        assert_eq!(tracker.undo(), UndoOutcome::Nothing);
        assert_eq!(tracker.current_period(), Period::OVERTIME);
        assert!(tracker.session().game_started);
    }

    #[test]
    fn test_set_period_boundaries() {
        let mut tracker = started();
        assert_eq!(tracker.set_period(Direction::Back), Period::FIRST);

        for _ in 0..5 {
            tracker.set_period(Direction::Forward);
        }
        assert_eq!(tracker.current_period(), Period::OVERTIME);
        assert_eq!(tracker.set_period(Direction::Forward), Period::OVERTIME);
    }

    #[test]
    fn test_save_game_keeps_live_tally() {
        let mut tracker = started();
        tracker.record_shot(Team::Home);
        tracker.record_shot(Team::Home);
        let before = all_cells(&tracker);

        let summary = tracker.save_game_labelled("D1").clone();

        assert_eq!(summary.home_total_shots, 2);
        assert_eq!(summary.date, "D1");
        assert_eq!(tracker.saved_games().len(), 1);
        assert_eq!(all_cells(&tracker), before);
        assert!(tracker.session().game_started);
    }

    #[test]
    fn test_save_game_uses_local_time_label() {
        let mut tracker = started();
        let summary = tracker.save_game();

        assert!(summary.date.contains(", "));
        assert!(summary.date.ends_with("AM") || summary.date.ends_with("PM"));
    }

    #[test]
    fn test_new_game_keeps_history() {
        let mut tracker = started();
        tracker.record_goal(Team::Home);
        tracker.set_period(Direction::Forward);
        tracker.save_game_labelled("D1");
        let history = tracker.saved_games().clone();

        tracker.new_game();

        assert!(tracker.tally().is_empty());
        assert_eq!(tracker.current_period(), Period::FIRST);
        assert!(!tracker.session().game_started);
        assert!(tracker.session().home_team.is_empty());
        assert!(tracker.session().away_team.is_empty());
        assert_eq!(tracker.saved_games(), &history);
        assert_eq!(tracker.undo(), UndoOutcome::Nothing);
    }

    #[test]
    fn test_blues_rivals_scenario() {
        let mut tracker = GameTracker::new(TrackerConfig::default());
        tracker.start_game("Blues", "Rivals");
        for _ in 0..3 {
            tracker.record_shot(Team::Home);
        }
        tracker.record_goal(Team::Home);
        tracker.set_period(Direction::Forward);
        tracker.record_shot(Team::Away);
        tracker.record_shot(Team::Away);

        let summary = tracker.save_game_labelled("D1");

        assert_eq!(summary.home_total_shots, 3);
        assert_eq!(summary.away_total_shots, 2);
        assert_eq!(summary.home_total_goals, 1);
        assert_eq!(summary.away_total_goals, 0);
        assert_eq!(summary.periods[1].away_shots, 2);
    }
}
