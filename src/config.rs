use clap::{Parser, ValueEnum};

/// How the demo prints the final summary
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Live football scoreboard demo
#[derive(Parser, Debug, Clone)]
#[command(name = "live-scoreboard", version, about)]
pub struct Config {
    /// Output format of the summary
    #[arg(long, env = "SCOREBOARD_FORMAT", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Seconds between consecutive kick-offs in the demo fixture list
    #[arg(long, env = "KICKOFF_INTERVAL_SECS", default_value = "60")]
    pub kickoff_interval_secs: u64,
}

/// Kick-offs more than a day apart are not a plausible match day.
const MAX_KICKOFF_INTERVAL_SECS: u64 = 24 * 60 * 60;

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.kickoff_interval_secs > MAX_KICKOFF_INTERVAL_SECS {
            anyhow::bail!(
                "kickoff_interval_secs must be at most {}",
                MAX_KICKOFF_INTERVAL_SECS
            );
        }
        Ok(())
    }
}
