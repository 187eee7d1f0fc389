//! Per-period shot and goal counts.

use std::fmt;

/// Number of tracked periods: three regulation periods plus overtime.
pub const PERIOD_COUNT: usize = 4;

/// Display labels, indexed by period.
pub const PERIOD_LABELS: [&str; PERIOD_COUNT] = ["1", "2", "3", "OT"];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Team {
    Home,
    Away,
}

impl Team {
    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Home => "home",
            Team::Away => "away",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Team {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "home" | "h" => Ok(Team::Home),
            "away" | "a" => Ok(Team::Away),
            other => Err(anyhow::anyhow!("unknown team: {}", other)),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StatKind {
    Shot,
    Goal,
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatKind::Shot => f.write_str("shot"),
            StatKind::Goal => f.write_str("goal"),
        }
    }
}

/// Navigation step for the period selector.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

impl Direction {
    fn delta(self) -> isize {
        match self {
            Direction::Back => -1,
            Direction::Forward => 1,
        }
    }
}

/// Index of a period in `[0, 3]`; 3 is overtime.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period(usize);

impl Period {
    pub const FIRST: Period = Period(0);
    pub const OVERTIME: Period = Period(PERIOD_COUNT - 1);

    /// Builds a period from any index, clamping into range.
    pub fn clamped(index: isize) -> Self {
        Period(index.clamp(0, (PERIOD_COUNT - 1) as isize) as usize)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn label(self) -> &'static str {
        PERIOD_LABELS[self.0]
    }

    /// Moves one period in `direction`. Stays put at either end.
    pub fn step(self, direction: Direction) -> Self {
        Self::clamped(self.0 as isize + direction.delta())
    }

    pub fn all() -> impl Iterator<Item = Period> {
        (0..PERIOD_COUNT).map(Period)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The live game's counts: four parallel sequences of one slot per period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodTally {
    home_shots: [u32; PERIOD_COUNT],
    away_shots: [u32; PERIOD_COUNT],
    home_goals: [u32; PERIOD_COUNT],
    away_goals: [u32; PERIOD_COUNT],
}

impl PeriodTally {
    pub fn new() -> Self {
        Self::default()
    }

    fn series(&self, team: Team, kind: StatKind) -> &[u32; PERIOD_COUNT] {
        match (team, kind) {
            (Team::Home, StatKind::Shot) => &self.home_shots,
            (Team::Away, StatKind::Shot) => &self.away_shots,
            (Team::Home, StatKind::Goal) => &self.home_goals,
            (Team::Away, StatKind::Goal) => &self.away_goals,
        }
    }

    fn series_mut(&mut self, team: Team, kind: StatKind) -> &mut [u32; PERIOD_COUNT] {
        match (team, kind) {
            (Team::Home, StatKind::Shot) => &mut self.home_shots,
            (Team::Away, StatKind::Shot) => &mut self.away_shots,
            (Team::Home, StatKind::Goal) => &mut self.home_goals,
            (Team::Away, StatKind::Goal) => &mut self.away_goals,
        }
    }

    pub fn get(&self, team: Team, kind: StatKind, period: Period) -> u32 {
        self.series(team, kind)[period.index()]
    }

    /// Adds one to a slot, saturating at `u32::MAX`.
    pub(crate) fn increment(&mut self, team: Team, kind: StatKind, period: Period) {
        let slot = &mut self.series_mut(team, kind)[period.index()];
        *slot = slot.saturating_add(1);
    }

    /// Decrements one slot. Returns `false` and leaves the slot alone when it
    /// is already zero.
    pub(crate) fn decrement(&mut self, team: Team, kind: StatKind, period: Period) -> bool {
        let slot = &mut self.series_mut(team, kind)[period.index()];
        match slot.checked_sub(1) {
            Some(value) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Sum of one statistic across all periods.
    pub fn total(&self, team: Team, kind: StatKind) -> u32 {
        self.series(team, kind)
            .iter()
            .fold(0, |acc: u32, n| acc.saturating_add(*n))
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOTS: [(Team, StatKind); 4] = [
        (Team::Home, StatKind::Shot),
        (Team::Away, StatKind::Shot),
        (Team::Home, StatKind::Goal),
        (Team::Away, StatKind::Goal),
    ];

    #[test]
    fn test_period_step_clamps_at_bounds() {
        assert_eq!(Period::FIRST.step(Direction::Back), Period::FIRST);
        assert_eq!(Period::OVERTIME.step(Direction::Forward), Period::OVERTIME);
        assert_eq!(Period::FIRST.step(Direction::Forward).index(), 1);
    }

    #[test]
    fn test_period_labels() {
        let labels: Vec<_> = Period::all().map(Period::label).collect();
        assert_eq!(labels, vec!["1", "2", "3", "OT"]);
        assert_eq!(Period::clamped(9), Period::OVERTIME);
        assert_eq!(Period::clamped(-4), Period::FIRST);
    }

    #[test]
    fn test_increment_touches_exactly_one_slot() {
        for (team, kind) in SLOTS {
            for period in Period::all() {
                let mut tally = PeriodTally::new();
                tally.increment(team, kind, period);

                for (other_team, other_kind) in SLOTS {
                    for other_period in Period::all() {
                        let expected = u32::from(
                            (other_team, other_kind, other_period) == (team, kind, period),
                        );
                        assert_eq!(tally.get(other_team, other_kind, other_period), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_decrement_refuses_below_zero() {
        let mut tally = PeriodTally::new();
        assert!(!tally.decrement(Team::Away, StatKind::Goal, Period::FIRST));
        assert_eq!(tally.get(Team::Away, StatKind::Goal, Period::FIRST), 0);

        tally.increment(Team::Away, StatKind::Goal, Period::FIRST);
        assert!(tally.decrement(Team::Away, StatKind::Goal, Period::FIRST));
        assert!(tally.is_empty());
    }

    #[test]
    fn test_increment_saturates() {
        let mut tally = PeriodTally::new();
        tally.home_goals[1] = u32::MAX;

        tally.increment(Team::Home, StatKind::Goal, Period::clamped(1));

        assert_eq!(tally.get(Team::Home, StatKind::Goal, Period::clamped(1)), u32::MAX);
    }

    #[test]
    fn test_totals_sum_all_periods() {
        let mut tally = PeriodTally::new();
        for period in Period::all() {
            tally.increment(Team::Home, StatKind::Shot, period);
        }
        tally.increment(Team::Home, StatKind::Shot, Period::OVERTIME);

        assert_eq!(tally.total(Team::Home, StatKind::Shot), 5);
        assert_eq!(tally.total(Team::Away, StatKind::Shot), 0);
    }

    #[test]
    fn test_team_parsing() {
        assert_eq!(Team::try_from("HOME").unwrap(), Team::Home);
        assert_eq!(Team::try_from("a").unwrap(), Team::Away);
        assert!(Team::try_from("visitors").is_err());
    }
}
