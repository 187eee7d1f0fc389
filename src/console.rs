//! Line-oriented front end: one command per line on stdin.

use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{Result, anyhow, bail};
use tracing::{info, warn};

use crate::{
    export::export_saved_games,
    tracker::{Direction, GameTracker, Period, StatKind, Team, UndoOutcome},
};

const HELP: &str = "commands: start HOME AWAY | start HOME NAME vs AWAY NAME | shot home|away | goal home|away | next | prev \
| undo | reset | save | new | export | show | json | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start { home: String, away: String },
    Shot(Team),
    Goal(Team),
    Period(Direction),
    Undo,
    Reset,
    Save,
    NewGame,
    Export,
    Show,
    Json,
    Help,
    Quit,
}

impl Command {
    /// Commands that need a started game.
    fn needs_game(&self) -> bool {
        matches!(
            self,
            Command::Shot(_)
                | Command::Goal(_)
                | Command::Period(_)
                | Command::Undo
                | Command::Reset
                | Command::Save
        )
    }
}

pub fn parse_command(line: &str) -> Result<Command> {
    let parts: Vec<_> = line.split_whitespace().collect();
    let Some((&head, rest)) = parts.split_first() else {
        bail!("empty command");
    };

    let command = match (head.to_ascii_lowercase().as_str(), rest) {
        ("start", _) => parse_start(rest)?,
        ("shot" | "sog", [team]) => Command::Shot(Team::try_from(*team)?),
        ("goal", [team]) => Command::Goal(Team::try_from(*team)?),
        ("shot" | "sog" | "goal", _) => bail!("expected: {} home|away", head),
        ("next", []) => Command::Period(Direction::Forward),
        ("prev", []) => Command::Period(Direction::Back),
        ("undo", []) => Command::Undo,
        ("reset", []) => Command::Reset,
        ("save", []) => Command::Save,
        ("new", []) => Command::NewGame,
        ("export", []) => Command::Export,
        ("show", []) => Command::Show,
        ("json", []) => Command::Json,
        ("help" | "?", []) => Command::Help,
        ("quit" | "exit", []) => Command::Quit,
        _ => return Err(anyhow!("unknown command: {}", line.trim())),
    };

    Ok(command)
}

/// `start A B` for one-word names, `start St. Louis vs Chicago` otherwise.
fn parse_start(rest: &[&str]) -> Result<Command> {
    if let Some(split) = rest.iter().position(|w| w.eq_ignore_ascii_case("vs")) {
        let home = rest[..split].join(" ");
        let away = rest[split + 1..].join(" ");
        if home.is_empty() || away.is_empty() {
            bail!("expected: start HOME NAME vs AWAY NAME");
        }
        return Ok(Command::Start { home, away });
    }

    match rest {
        [home, away] => Ok(Command::Start {
            home: home.to_string(),
            away: away.to_string(),
        }),
        _ => bail!("expected: start HOME AWAY (or HOME NAME vs AWAY NAME)"),
    }
}

/// Drives a tracker from text commands.
pub struct Console {
    tracker: GameTracker,
    export_dir: PathBuf,
}

impl Console {
    pub fn new(tracker: GameTracker, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            tracker,
            export_dir: export_dir.into(),
        }
    }

    pub fn tracker(&self) -> &GameTracker {
        &self.tracker
    }

    /// Reads commands until EOF or `quit`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        info!("console started");
        writeln!(out, "{}", HELP)?;

        let mut lines = input.lines();
        loop {
            write!(out, "{}> ", self.prompt())?;
            out.flush()?;

            let Some(line) = lines.next() else {
                break; // EOF
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => match self.apply(command) {
                    Ok(reply) => writeln!(out, "{}", reply)?,
                    Err(e) => {
                        warn!("command {:?} failed: {:#}", line, e);
                        writeln!(out, "error: {}", e)?;
                    }
                },
                Err(e) => {
                    warn!("rejected input {:?}: {}", line, e);
                    writeln!(out, "error: {}", e)?;
                }
            }
        }

        info!("console finished");
        Ok(())
    }

    fn prompt(&self) -> String {
        if self.tracker.session().game_started {
            format!("P{}", self.tracker.current_period())
        } else {
            "setup".to_string()
        }
    }

    /// Applies one command and returns the text to show the user.
    pub fn apply(&mut self, command: Command) -> Result<String> {
        if command.needs_game() && !self.tracker.session().game_started {
            return Ok("no game in progress: start HOME AWAY".to_string());
        }

        let reply = match command {
            Command::Start { home, away } => {
                if self.tracker.session().game_started {
                    return Ok("game already in progress: save or new first".to_string());
                }
                self.tracker.start_game(home, away);
                self.scoreline()
            }
            Command::Shot(team) => {
                self.tracker.record_shot(team);
                self.scoreline()
            }
            Command::Goal(team) => {
                self.tracker.record_goal(team);
                self.scoreline()
            }
            Command::Period(direction) => {
                let period = self.tracker.set_period(direction);
                format!("period {}", period)
            }
            Command::Undo => match self.tracker.undo() {
                UndoOutcome::Nothing => "nothing to undo".to_string(),
                UndoOutcome::Reverted(action) => format!("undid {}", action),
                UndoOutcome::Stale(action) => {
                    format!("cannot undo {}: count already zero", action)
                }
            },
            Command::Reset => {
                self.tracker.reset();
                "tally reset".to_string()
            }
            Command::Save => {
                let summary = self.tracker.save_game();
                format!(
                    "saved {} vs {} ({}): shots {}-{}, goals {}-{}",
                    summary.home_team,
                    summary.away_team,
                    summary.date,
                    summary.home_total_shots,
                    summary.away_total_shots,
                    summary.home_total_goals,
                    summary.away_total_goals
                )
            }
            Command::NewGame => {
                self.tracker.new_game();
                "new game: start HOME AWAY".to_string()
            }
            Command::Export => self.export(&self.export_dir)?,
            Command::Show => self.table(),
            Command::Json => serde_json::to_string_pretty(self.tracker.saved_games())?,
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        };

        Ok(reply)
    }

    fn export(&self, dir: &Path) -> Result<String> {
        match export_saved_games(self.tracker.saved_games(), dir)? {
            Some(path) => Ok(format!("exported to {}", path.display())),
            None => Ok("no saved games to export".to_string()),
        }
    }

    fn scoreline(&self) -> String {
        let session = self.tracker.session();
        let period = self.tracker.current_period();
        format!(
            "P{} | {} SOG {} G {} | {} SOG {} G {}",
            period,
            session.home_team,
            self.tracker.count(Team::Home, StatKind::Shot, period),
            self.tracker.count(Team::Home, StatKind::Goal, period),
            session.away_team,
            self.tracker.count(Team::Away, StatKind::Shot, period),
            self.tracker.count(Team::Away, StatKind::Goal, period),
        )
    }

    /// Per-period table of the live game followed by saved-game totals.
    fn table(&self) -> String {
        let session = self.tracker.session();
        let mut lines = Vec::new();

        if session.game_started {
            lines.push(format!(
                "{:<6} {:>6} {:>6} {:>6} {:>6}",
                "Period", "H SOG", "A SOG", "H G", "A G"
            ));
            for period in Period::all() {
                let marker = if period == self.tracker.current_period() { "*" } else { " " };
                lines.push(format!(
                    "{:<5}{} {:>6} {:>6} {:>6} {:>6}",
                    period.label(),
                    marker,
                    self.tracker.count(Team::Home, StatKind::Shot, period),
                    self.tracker.count(Team::Away, StatKind::Shot, period),
                    self.tracker.count(Team::Home, StatKind::Goal, period),
                    self.tracker.count(Team::Away, StatKind::Goal, period),
                ));
            }
        }

        for game in self.tracker.saved_games() {
            lines.push(format!(
                "{} | {} vs {} | SOG {}-{} | G {}-{}",
                game.date,
                game.home_team,
                game.away_team,
                game.home_total_shots,
                game.away_total_shots,
                game.home_total_goals,
                game.away_total_goals
            ));
        }

        if lines.is_empty() {
            "nothing to show".to_string()
        } else {
            lines.join("\n")
        }
    }
}
