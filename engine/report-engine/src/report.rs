//! Player reports and team leaderboards

use std::collections::HashMap;

use percentile_engine::{estimate_percentile, CurveSet, Result};
use roster_core::{ClassLevel, RosterMember, RosterView};
use serde::Serialize;

use crate::summary::MetricSummary;

/// One player's metric summary with their percentile rank
#[derive(Debug, Clone, Serialize)]
pub struct PlayerReport {
    pub player_id: i64,
    pub full_name: String,
    pub class_level: ClassLevel,
    pub metric: String,
    pub summary: MetricSummary,
    /// Rank of the player's average within the class-level baseline
    pub percentile_rank: f64,
}

/// Benchmark one player's samples against the curve for their class
///
/// Returns `Ok(None)` when the player has no samples. A missing curve for
/// the player's class/metric pair is an error for the caller to surface,
/// not a default.
pub fn player_report(
    member: &RosterMember,
    samples: &[f64],
    curves: &CurveSet,
    metric: &str,
) -> Result<Option<PlayerReport>> {
    let Some(summary) = MetricSummary::from_samples(samples) else {
        return Ok(None);
    };

    let curve = curves.get(member.class_level, metric)?;
    let percentile_rank = estimate_percentile(summary.average, curve)?;

    Ok(Some(PlayerReport {
        player_id: member.player_id,
        full_name: member.full_name(),
        class_level: member.class_level,
        metric: metric.to_string(),
        summary,
        percentile_rank,
    }))
}

/// One leaderboard line
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardRow {
    pub player_id: i64,
    pub full_name: String,
    pub class_level: ClassLevel,
    pub average: f64,
    pub p90: f64,
    pub max: f64,
}

/// Team leaderboard over the active roster, best average first
///
/// Players without samples are left off the board rather than ranked at
/// zero.
pub fn leaderboard(
    roster: &RosterView,
    samples_by_player: &HashMap<i64, Vec<f64>>,
) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = roster
        .active()
        .filter_map(|member| {
            let samples = samples_by_player.get(&member.player_id)?;
            let summary = MetricSummary::from_samples(samples)?;
            Some(LeaderboardRow {
                player_id: member.player_id,
                full_name: member.full_name(),
                class_level: member.class_level,
                average: summary.average,
                p90: summary.p90,
                max: summary.max,
            })
        })
        .collect();

    rows.sort_by(|a, b| b.average.total_cmp(&a.average));
    rows
}
