//! Team identity and the saved-games history for the running process.

use serde::Serialize;

use super::tally::{Period, PeriodTally, StatKind, Team};

/// Team names plus whether the scoreboard is live.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    pub home_team: String,
    pub away_team: String,
    pub game_started: bool,
}

impl GameSession {
    pub fn team_name(&self, team: Team) -> &str {
        match team {
            Team::Home => &self.home_team,
            Team::Away => &self.away_team,
        }
    }
}

/// One period's counts inside a saved summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodRecord {
    pub label: String,
    pub home_shots: u32,
    pub away_shots: u32,
    pub home_goals: u32,
    pub away_goals: u32,
}

/// Snapshot of a game taken when it was saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedGameSummary {
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub periods: Vec<PeriodRecord>,
    pub home_total_shots: u32,
    pub away_total_shots: u32,
    pub home_total_goals: u32,
    pub away_total_goals: u32,
}

impl SavedGameSummary {
    /// Copies every period of `tally` and precomputes the totals.
    pub fn snapshot(date: String, session: &GameSession, tally: &PeriodTally) -> Self {
        let periods = Period::all()
            .map(|period| PeriodRecord {
                label: period.label().to_string(),
                home_shots: tally.get(Team::Home, StatKind::Shot, period),
                away_shots: tally.get(Team::Away, StatKind::Shot, period),
                home_goals: tally.get(Team::Home, StatKind::Goal, period),
                away_goals: tally.get(Team::Away, StatKind::Goal, period),
            })
            .collect();

        Self {
            date,
            home_team: session.home_team.clone(),
            away_team: session.away_team.clone(),
            periods,
            home_total_shots: tally.total(Team::Home, StatKind::Shot),
            away_total_shots: tally.total(Team::Away, StatKind::Shot),
            home_total_goals: tally.total(Team::Home, StatKind::Goal),
            away_total_goals: tally.total(Team::Away, StatKind::Goal),
        }
    }
}

/// Append-only list of saved summaries, in save order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SavedGames {
    games: Vec<SavedGameSummary>,
}

impl SavedGames {
    pub(crate) fn push(&mut self, summary: SavedGameSummary) -> &SavedGameSummary {
        self.games.push(summary);
        &self.games[self.games.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SavedGameSummary> {
        self.games.iter()
    }

    pub fn last(&self) -> Option<&SavedGameSummary> {
        self.games.last()
    }
}

impl<'a> IntoIterator for &'a SavedGames {
    type Item = &'a SavedGameSummary;
    type IntoIter = std::slice::Iter<'a, SavedGameSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.iter()
    }
}

impl From<Vec<SavedGameSummary>> for SavedGames {
    fn from(games: Vec<SavedGameSummary>) -> Self {
        Self { games }
    }
}
