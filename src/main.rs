use anyhow::Result;
use chrono::{Duration, Utc};
use clap::Parser;
use tracing::{info, warn};

use live_scoreboard::config::{Config, OutputFormat};
use live_scoreboard::scoreboard::{render_text, summary_rows, ManualClock};
use live_scoreboard::{Scoreboard, ScoreboardStore};

/// Demo fixtures in kick-off order, with the score each one reaches.
const FIXTURES: [(&str, &str, i32, i32); 5] = [
    ("Mexico", "Canada", 0, 5),
    ("Spain", "Brazil", 10, 2),
    ("Germany", "France", 2, 2),
    ("Uruguay", "Italy", 6, 6),
    ("Argentina", "Australia", 3, 1),
];

fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    // Staggered kick-offs so the start-time tie-break is visible
    let clock = ManualClock::new(Utc::now());
    let interval = Duration::seconds(config.kickoff_interval_secs as i64);
    let mut board = ScoreboardStore::with_clock(&clock);

    for (home, away, _, _) in FIXTURES {
        board.start_match(home, away)?;
        info!("Kick-off: {} vs {}", home, away);
        clock.advance(interval);
    }
    for (home, away, home_score, away_score) in FIXTURES {
        board.update_score(home, home_score, away, away_score)?;
    }

    // A repeated kick-off is refused, not fatal
    let (home, away, _, _) = FIXTURES[0];
    if let Err(e) = board.start_match(home, away) {
        warn!("Rejected: {}", e);
    }

    info!("{} match(es) in progress", board.len());
    let summary = board.summary();
    match config.format {
        OutputFormat::Text => println!("{}", render_text(&summary)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary_rows(&summary))?)
        }
    }

    Ok(())
}
