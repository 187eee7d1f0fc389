use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use sog_tracker::{args::Args, console::Console, logging, tracker::GameTracker, ui::run_ui};

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = logging::init(&args.log_dir)?;

    let mut tracker = GameTracker::new(args.tracker_config());
    if let Some((home, away)) = args.team_names() {
        tracker.start_game(home, away);
    }

    let export_dir = args.export_dir();
    info!(
        export_dir = %export_dir.display(),
        undo_policy = ?tracker.policy(),
        console = args.console,
        "starting"
    );

    if args.console {
        let mut console = Console::new(tracker, export_dir);
        return console.run(io::stdin().lock(), io::stdout());
    }

    run_ui(tracker, export_dir)
}
