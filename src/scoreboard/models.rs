use chrono::{DateTime, Utc};
use serde::Serialize;

/// Identity of an in-progress match: the ordered (home, away) pair.
///
/// ("A", "B") and ("B", "A") are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchKey {
    pub home_team: String,
    pub away_team: String,
}

impl MatchKey {
    pub fn new(home_team: &str, away_team: &str) -> Self {
        MatchKey {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
        }
    }
}

/// A football match currently in progress.
///
/// Team names and kick-off time are fixed at creation. Only the store can
/// change the scores; values handed out by the store are independent copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    home_team: String,
    away_team: String,
    start_time: DateTime<Utc>,
    home_score: u32,
    away_score: u32,
}

impl Match {
    pub(crate) fn new(home_team: &str, away_team: &str, start_time: DateTime<Utc>) -> Self {
        Match {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            start_time,
            home_score: 0,
            away_score: 0,
        }
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    /// Sum of both scores. Widened so two `u32::MAX`-ish magnitudes cannot overflow.
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    pub fn key(&self) -> MatchKey {
        MatchKey::new(&self.home_team, &self.away_team)
    }

    /// Overwrite both scores with the magnitudes of the given values and
    /// report what kind of change that was.
    pub(crate) fn set_scores(&mut self, home_score: i32, away_score: i32) -> Option<ScoreChange> {
        let prev = (self.home_score, self.away_score);
        self.home_score = home_score.unsigned_abs();
        self.away_score = away_score.unsigned_abs();
        ScoreChange::between(prev, (self.home_score, self.away_score))
    }
}

/// What an applied score update did to the scoreline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreChange {
    GoalHome,
    GoalAway,
    GoalBoth,
    /// At least one side went down (VAR, data-entry fix).
    Correction,
}

impl ScoreChange {
    /// Returns `None` when the scoreline is unchanged.
    pub fn between(prev: (u32, u32), curr: (u32, u32)) -> Option<ScoreChange> {
        let (prev_home, prev_away) = prev;
        let (curr_home, curr_away) = curr;
        if curr_home < prev_home || curr_away < prev_away {
            return Some(ScoreChange::Correction);
        }
        match (curr_home > prev_home, curr_away > prev_away) {
            (true, true) => Some(ScoreChange::GoalBoth),
            (true, false) => Some(ScoreChange::GoalHome),
            (false, true) => Some(ScoreChange::GoalAway),
            (false, false) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreChange::GoalHome => "goal_home",
            ScoreChange::GoalAway => "goal_away",
            ScoreChange::GoalBoth => "goal_both",
            ScoreChange::Correction => "correction",
        }
    }
}

impl std::fmt::Display for ScoreChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
