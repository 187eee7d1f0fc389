use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::tracker::{TrackerConfig, UndoPolicy};

#[derive(Parser, Debug)]
#[command(name = "sog-tracker", about = "Shots-on-goal scoreboard for two teams")]
pub struct Args {
    /// Home team name
    #[arg(long)]
    pub home: Option<String>,

    /// Away team name
    #[arg(long)]
    pub away: Option<String>,

    /// Directory the CSV export is written to [default: downloads dir, else cwd]
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, value_name = "DIR", default_value = "logs")]
    pub log_dir: PathBuf,

    /// What a pending undo does when the period changes
    #[arg(long, value_enum, default_value_t = UndoPolicyArg::FollowAction)]
    pub undo_policy: UndoPolicyArg,

    /// Read commands from stdin instead of drawing the terminal UI
    #[arg(long)]
    pub console: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoPolicyArg {
    FollowAction,
    ClearOnPeriodChange,
}

impl From<UndoPolicyArg> for UndoPolicy {
    fn from(arg: UndoPolicyArg) -> Self {
        match arg {
            UndoPolicyArg::FollowAction => UndoPolicy::FollowAction,
            UndoPolicyArg::ClearOnPeriodChange => UndoPolicy::ClearOnPeriodChange,
        }
    }
}

impl Args {
    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig {
            undo_policy: self.undo_policy.into(),
        }
    }

    pub fn export_dir(&self) -> PathBuf {
        resolve_export_dir(self.export_dir.clone(), dirs::download_dir())
    }

    /// Both team names, trimmed, when both are present and non-empty.
    pub fn team_names(&self) -> Option<(String, String)> {
        let home = self.home.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let away = self.away.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some((home.to_string(), away.to_string()))
    }
}

/// An explicit `--export-dir` wins, then the platform downloads directory,
/// then the current directory.
fn resolve_export_dir(explicit: Option<PathBuf>, downloads: Option<PathBuf>) -> PathBuf {
    explicit
        .or(downloads)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["sog-tracker"]);

        assert!(!args.console);
        assert_eq!(args.log_dir, PathBuf::from("logs"));
        assert_eq!(args.tracker_config().undo_policy, UndoPolicy::FollowAction);
        assert!(args.team_names().is_none());
        assert_eq!(
            args.export_dir(),
            dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
        );
    }

    #[test]
    fn test_export_dir_fallback_order() {
        let downloads = Some(PathBuf::from("/home/user/Downloads"));

        assert_eq!(
            resolve_export_dir(Some(PathBuf::from("out")), downloads.clone()),
            PathBuf::from("out")
        );
        assert_eq!(
            resolve_export_dir(None, downloads),
            PathBuf::from("/home/user/Downloads")
        );
        assert_eq!(resolve_export_dir(None, None), PathBuf::from("."));
    }

    #[test]
    fn test_policy_and_names() {
        let args = Args::parse_from([
            "sog-tracker",
            "--undo-policy",
            "clear-on-period-change",
            "--home",
            " Blues ",
            "--away",
            "Rivals",
            "--export-dir",
            "/tmp/out",
        ]);

        assert_eq!(
            args.tracker_config().undo_policy,
            UndoPolicy::ClearOnPeriodChange
        );
        assert_eq!(
            args.team_names(),
            Some(("Blues".to_string(), "Rivals".to_string()))
        );
        assert_eq!(args.export_dir(), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_blank_name_does_not_start() {
        let args = Args::parse_from(["sog-tracker", "--home", "Blues", "--away", "   "]);
        assert!(args.team_names().is_none());
    }
}
