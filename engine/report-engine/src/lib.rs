//! Performance reporting engine
//!
//! Turns raw measurement samples into the numbers coaches read: summary
//! statistics per player, percentile ranks against the class-level
//! reference curve, and team leaderboards over the active roster.

pub mod cli;
pub mod report;
pub mod summary;

pub use report::{leaderboard, player_report, LeaderboardRow, PlayerReport};
pub use summary::MetricSummary;
