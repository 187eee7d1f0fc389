mod app;
mod handlers;
mod rendering;
mod types;

pub use app::App;
pub use types::{InputStatus, LogBuffer, NameField, Screen};

use std::{io::stdout, path::PathBuf};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::tracker::GameTracker;

/// Entry point for running the UI. The terminal is restored whether the
/// scoreboard exits cleanly, fails, or never gets drawn.
pub fn run_ui(tracker: GameTracker, export_dir: PathBuf) -> Result<()> {
    let mut app = App::new(tracker, export_dir, LogBuffer::new());

    enable_raw_mode().context("failed to enable raw mode")?;
    let result = draw_scoreboard(&mut app);
    let restored = restore_terminal();

    result.and(restored)
}

fn draw_scoreboard(app: &mut App) -> Result<()> {
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    app.run(&mut terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}
