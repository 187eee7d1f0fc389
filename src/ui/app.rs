use std::{fmt::Display, io::Stdout, path::PathBuf};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::tracker::GameTracker;

use super::types::{LogBuffer, NameField, Screen};

/// Main application state container.
pub struct App {
    pub(in crate::ui) tracker: GameTracker,
    pub(in crate::ui) home_input: String,
    pub(in crate::ui) away_input: String,
    pub(in crate::ui) focus: NameField,
    pub(in crate::ui) export_dir: PathBuf,
    pub(in crate::ui) last_export: Option<PathBuf>,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(tracker: GameTracker, export_dir: PathBuf, logs: LogBuffer) -> Self {
        let home_input = tracker.session().home_team.clone();
        let away_input = tracker.session().away_team.clone();

        Self {
            tracker,
            home_input,
            away_input,
            focus: NameField::Home,
            export_dir,
            last_export: None,
            logs,
        }
    }

    pub fn tracker(&self) -> &GameTracker {
        &self.tracker
    }

    pub(in crate::ui) fn screen(&self) -> Screen {
        if self.tracker.session().game_started {
            Screen::Scoreboard
        } else {
            Screen::Setup
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("UI started");

        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if super::handlers::InputHandler::new(self).handle_key(key) {
                    return Ok(());
                }
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
