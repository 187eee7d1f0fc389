//! Single-slot undo for the most recent increment.

use std::fmt;

use super::tally::{Period, StatKind, Team};

/// The increment a pending undo would reverse.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RecordedAction {
    pub team: Team,
    pub kind: StatKind,
    pub period: Period,
}

impl fmt::Display for RecordedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} in period {}", self.team, self.kind, self.period)
    }
}

/// Holds at most one reversible action. Recording overwrites; taking consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingUndo(Option<RecordedAction>);

impl PendingUndo {
    pub fn record(&mut self, action: RecordedAction) {
        self.0 = Some(action);
    }

    pub fn take(&mut self) -> Option<RecordedAction> {
        self.0.take()
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn peek(&self) -> Option<&RecordedAction> {
        self.0.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

/// What happens to a pending undo when the selected period changes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum UndoPolicy {
    /// Undo still reverses the action in the period it was recorded in.
    #[default]
    FollowAction,
    /// Changing period drops the pending undo.
    ClearOnPeriodChange,
}

/// Result of an undo request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// Nothing was pending.
    Nothing,
    /// The recorded increment was reversed.
    Reverted(RecordedAction),
    /// The target slot was already zero; the undo was dropped untouched.
    Stale(RecordedAction),
}
