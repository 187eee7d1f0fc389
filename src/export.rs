//! CSV export of saved games.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;
use tracing::info;

use crate::tracker::SavedGames;

pub const EXPORT_FILE_NAME: &str = "shots_on_goal_stats.csv";
pub const CSV_MEDIA_TYPE: &str = "text/csv";

/// One output row: a single period of a single saved game.
#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "Home")]
    home: &'a str,
    #[serde(rename = "Away")]
    away: &'a str,
    #[serde(rename = "Period")]
    period: &'a str,
    #[serde(rename = "Home Shots")]
    home_shots: u32,
    #[serde(rename = "Away Shots")]
    away_shots: u32,
    #[serde(rename = "Home Goals")]
    home_goals: u32,
    #[serde(rename = "Away Goals")]
    away_goals: u32,
}

/// Renders every saved game as four rows under a single header. Every field
/// is quoted, rows end in CRLF, and there is no line break after the last
/// row. Returns `None` when nothing has been saved.
pub fn render_csv(games: &SavedGames) -> Result<Option<String>> {
    if games.is_empty() {
        return Ok(None);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    for game in games {
        for period in &game.periods {
            writer
                .serialize(ExportRow {
                    date: &game.date,
                    home: &game.home_team,
                    away: &game.away_team,
                    period: &period.label,
                    home_shots: period.home_shots,
                    away_shots: period.away_shots,
                    home_goals: period.home_goals,
                    away_goals: period.away_goals,
                })
                .context("failed to write csv row")?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush csv output: {}", e.error()))?;
    let mut text = String::from_utf8(bytes).context("csv output was not valid utf-8")?;

    if text.ends_with("\r\n") {
        text.truncate(text.len() - 2);
    }

    Ok(Some(text))
}

/// Writes the CSV for `games` to `shots_on_goal_stats.csv` inside `dir`.
///
/// Does nothing and returns `None` when no games are saved.
pub fn export_saved_games(games: &SavedGames, dir: &Path) -> Result<Option<PathBuf>> {
    let Some(csv) = render_csv(games)? else {
        info!("export skipped: no saved games");
        return Ok(None);
    };

    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;

    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, csv).with_context(|| format!("failed to write {}", path.display()))?;

    info!(
        path = %path.display(),
        media_type = CSV_MEDIA_TYPE,
        games = games.len(),
        "saved games exported"
    );

    Ok(Some(path))
}
