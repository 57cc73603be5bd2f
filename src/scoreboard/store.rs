use std::collections::HashMap;
use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::models::{Match, MatchKey};
use super::summary::sort_for_summary;
use super::Scoreboard;
use crate::error::{Result, ScoreboardError};

/// In-memory scoreboard of in-progress matches.
///
/// No internal synchronisation: mutating calls take `&mut self`. To share a
/// store between threads wrap the whole thing in one lock, e.g.
/// `Mutex<ScoreboardStore>`.
#[derive(Debug)]
pub struct ScoreboardStore<C: Clock = SystemClock> {
    matches: HashMap<MatchKey, Match>,
    clock: C,
}

impl ScoreboardStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ScoreboardStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ScoreboardStore<C> {
    pub fn with_clock(clock: C) -> Self {
        ScoreboardStore {
            matches: HashMap::new(),
            clock,
        }
    }

    /// Number of matches currently in progress.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Look up one in-progress match by its exact (home, away) identity.
    pub fn get(&self, home_team: &str, away_team: &str) -> Option<&Match> {
        self.matches.get(&MatchKey::new(home_team, away_team))
    }
}

fn check_teams(home_team: &str, away_team: &str) -> Result<MatchKey> {
    if home_team.is_empty() || away_team.is_empty() {
        return Err(ScoreboardError::InvalidArgument);
    }
    Ok(MatchKey::new(home_team, away_team))
}

impl<C: Clock> Scoreboard for ScoreboardStore<C> {
    fn start_match(&mut self, home_team: &str, away_team: &str) -> Result<()> {
        let key = check_teams(home_team, away_team)?;
        if self.matches.contains_key(&key) {
            return Err(ScoreboardError::already_exists(home_team, away_team));
        }

        let m = Match::new(home_team, away_team, self.clock.now());
        debug!(
            "Match started: {} vs {} at {}",
            home_team,
            away_team,
            m.start_time()
        );
        self.matches.insert(key, m);
        Ok(())
    }

    fn update_score(
        &mut self,
        home_team: &str,
        home_score: i32,
        away_team: &str,
        away_score: i32,
    ) -> Result<()> {
        let key = check_teams(home_team, away_team)?;
        let m = self
            .matches
            .get_mut(&key)
            .ok_or_else(|| ScoreboardError::not_found(home_team, away_team))?;

        match m.set_scores(home_score, away_score) {
            Some(change) => debug!(
                "Score update: {} {}-{} {} ({})",
                home_team,
                m.home_score(),
                m.away_score(),
                away_team,
                change
            ),
            None => debug!(
                "Score unchanged: {} {}-{} {}",
                home_team,
                m.home_score(),
                m.away_score(),
                away_team
            ),
        }
        Ok(())
    }

    fn finish_match(&mut self, home_team: &str, away_team: &str) -> Result<()> {
        let key = check_teams(home_team, away_team)?;
        let m = self
            .matches
            .remove(&key)
            .ok_or_else(|| ScoreboardError::not_found(home_team, away_team))?;
        debug!(
            "Match finished: {} {}-{} {}",
            m.home_team(),
            m.home_score(),
            m.away_score(),
            m.away_team()
        );
        Ok(())
    }

    fn summary(&self) -> Vec<Match> {
        let mut out: Vec<Match> = self.matches.values().cloned().collect();
        sort_for_summary(&mut out);
        out
    }
}
