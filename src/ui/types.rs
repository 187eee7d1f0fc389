use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard},
};

pub const MAX_LOG_LINES: usize = 300;

/// Log panel lines shared between the app and its handlers. Oldest lines
/// fall off once `MAX_LOG_LINES` is reached.
#[derive(Clone, Default)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push(&self, msg: String) {
        let mut lines = self.guard();
        if lines.len() == MAX_LOG_LINES {
            lines.pop_front();
        }
        lines.push_back(msg);
    }

    /// Up to `count` most recent lines, oldest first.
    pub fn tail(&self, count: usize) -> Vec<String> {
        let lines = self.guard();
        let skip = lines.len().saturating_sub(count);
        lines.iter().skip(skip).cloned().collect()
    }

    pub fn lines(&self) -> Vec<String> {
        self.guard().iter().cloned().collect()
    }
}

/// Validation state of the team-name form.
#[derive(Debug, PartialEq, Eq)]
pub enum InputStatus {
    Incomplete,
    Invalid(&'static str),
    Valid,
}

/// Which screen is drawn. Follows the tracker's `game_started` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Scoreboard,
}

/// Focused field on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Home,
    Away,
}

impl NameField {
    pub fn toggle(self) -> Self {
        match self {
            NameField::Home => NameField::Away,
            NameField::Away => NameField::Home,
        }
    }
}
