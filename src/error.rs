use thiserror::Error;

/// Failures returned by scoreboard operations.
///
/// Every operation validates before it mutates, so an error always means the
/// scoreboard was left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    /// A required team name was missing (empty).
    #[error("one of the team names is missing")]
    InvalidArgument,

    #[error("match between '{home}' and '{away}' already exists")]
    MatchAlreadyExists { home: String, away: String },

    #[error("match between '{home}' and '{away}' does not exist")]
    MatchNotFound { home: String, away: String },
}

impl ScoreboardError {
    pub(crate) fn already_exists(home: &str, away: &str) -> Self {
        ScoreboardError::MatchAlreadyExists {
            home: home.to_string(),
            away: away.to_string(),
        }
    }

    pub(crate) fn not_found(home: &str, away: &str) -> Self {
        ScoreboardError::MatchNotFound {
            home: home.to_string(),
            away: away.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreboardError>;
