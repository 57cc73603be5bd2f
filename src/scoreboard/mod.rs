pub mod clock;
pub mod models;
pub mod store;
pub mod summary;

pub use clock::{Clock, ManualClock, SystemClock};
pub use models::{Match, MatchKey, ScoreChange};
pub use store::ScoreboardStore;
pub use summary::{render_text, summary_order, summary_rows, SummaryRow};

use crate::error::Result;

/// Operations of a live scoreboard.
///
/// A match is identified by its ordered (home, away) pair. An empty team name
/// counts as missing and is rejected with
/// [`ScoreboardError::InvalidArgument`](crate::error::ScoreboardError::InvalidArgument).
pub trait Scoreboard {
    /// Start a new match at 0-0, kicked off now.
    fn start_match(&mut self, home_team: &str, away_team: &str) -> Result<()>;

    /// Replace both scores of an in-progress match. Negative values are
    /// stored as their magnitude.
    fn update_score(
        &mut self,
        home_team: &str,
        home_score: i32,
        away_team: &str,
        away_score: i32,
    ) -> Result<()>;

    /// Remove an in-progress match. Nothing about it is kept.
    fn finish_match(&mut self, home_team: &str, away_team: &str) -> Result<()>;

    /// Snapshot of all in-progress matches, highest total score first and
    /// most recent kick-off first among equal totals.
    fn summary(&self) -> Vec<Match>;
}
