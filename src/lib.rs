//! Live football scoreboard.
//!
//! Keeps the matches currently being played, keyed by their ordered
//! (home, away) pairing, and produces a summary ordered by total score with
//! the most recently started match first among equal totals.
//!
//! ```
//! use live_scoreboard::{Scoreboard, ScoreboardStore};
//!
//! let mut board = ScoreboardStore::new();
//! board.start_match("Mexico", "Canada")?;
//! board.update_score("Mexico", 0, "Canada", 5)?;
//! assert_eq!(board.summary()[0].total_score(), 5);
//! board.finish_match("Mexico", "Canada")?;
//! assert!(board.summary().is_empty());
//! # Ok::<(), live_scoreboard::ScoreboardError>(())
//! ```

pub mod config;
pub mod error;
pub mod scoreboard;

pub use error::{Result, ScoreboardError};
pub use scoreboard::{Match, Scoreboard, ScoreboardStore};
