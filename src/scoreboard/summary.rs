use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;

use super::models::Match;

/// Summary ordering: total score descending, then most recent kick-off
/// first, then (home, away) ascending so equal score and equal kick-off
/// still sort the same way every time.
pub fn summary_order(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.start_time().cmp(&a.start_time()))
        .then_with(|| a.home_team().cmp(b.home_team()))
        .then_with(|| a.away_team().cmp(b.away_team()))
}

/// Sort matches in place into summary order.
pub fn sort_for_summary(matches: &mut [Match]) {
    matches.sort_by(summary_order);
}

/// One serialisable line of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// 1-based rank in the summary
    pub position: usize,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub total_score: u64,
    pub start_time: DateTime<Utc>,
}

pub fn summary_rows(summary: &[Match]) -> Vec<SummaryRow> {
    summary
        .iter()
        .enumerate()
        .map(|(i, m)| SummaryRow {
            position: i + 1,
            home_team: m.home_team().to_string(),
            away_team: m.away_team().to_string(),
            home_score: m.home_score(),
            away_score: m.away_score(),
            total_score: m.total_score(),
            start_time: m.start_time(),
        })
        .collect()
}

/// Render the summary as plain text, one numbered line per match.
pub fn render_text(summary: &[Match]) -> String {
    if summary.is_empty() {
        return "No matches in progress".to_string();
    }
    summary
        .iter()
        .enumerate()
        .map(|(i, m)| {
            format!(
                "{}. {} {} - {} {}",
                i + 1,
                m.home_team(),
                m.home_score(),
                m.away_team(),
                m.away_score()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
