//! # Command Line Interface
//!
//! CLI for roster views, leaderboards, and player reports over the team
//! data store.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use team_store::{NewNote, NoteType, StoreConfig, TeamStore};

use crate::report::{leaderboard, player_report};

/// Reporting CLI for the coaching platform
#[derive(Parser)]
#[command(name = "report-cli")]
#[command(about = "Roster and performance reports over the team data store")]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the classified roster
    Roster {
        /// Evaluation date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Only show varsity-eligible players
        #[arg(long)]
        active: bool,
    },
    /// Show the team leaderboard for a metric
    Leaderboard {
        /// Metric to rank (e.g. hand_speed, exit_velocity)
        metric: String,

        /// Evaluation date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Show one player's report for a metric
    Player {
        /// Player id
        player_id: i64,

        /// Metric to report (e.g. hand_speed, exit_velocity)
        metric: String,

        /// Evaluation date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Record a coaching note for a player
    AddNote {
        /// Player id
        player_id: i64,

        /// Coach id
        #[arg(long)]
        coach_id: i64,

        /// Note type: Fielder, Hitter, or Pitcher
        #[arg(long)]
        note_type: String,

        /// Note body
        body: String,
    },
}

/// CLI handler
pub struct CliHandler {
    store: TeamStore,
}

impl CliHandler {
    /// Create new CLI handler from the environment configuration
    pub async fn new() -> Result<Self> {
        let config = StoreConfig::from_env()?;
        let store = TeamStore::connect(config).await.context("Failed to connect to team store")?;
        Ok(Self { store })
    }

    /// Handle CLI commands
    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Roster { as_of, active } => {
                self.show_roster(resolve_date(as_of), active).await?;
            }
            Commands::Leaderboard { metric, as_of } => {
                self.show_leaderboard(&metric, resolve_date(as_of)).await?;
            }
            Commands::Player { player_id, metric, as_of } => {
                self.show_player(player_id, &metric, resolve_date(as_of)).await?;
            }
            Commands::AddNote { player_id, coach_id, note_type, body } => {
                self.add_note(player_id, coach_id, &note_type, body).await?;
            }
        }
        Ok(())
    }

    async fn show_roster(&self, as_of: NaiveDate, active_only: bool) -> Result<()> {
        let roster = self.store.load_roster(as_of).await?;

        println!("Roster as of {as_of}");
        println!("{:<6} {:<24} {:<6} {:<10} {}", "ID", "Player", "Grad", "Class", "Active");
        for member in roster.members() {
            if active_only && !member.is_active {
                continue;
            }
            println!(
                "{:<6} {:<24} {:<6} {:<10} {}",
                member.player_id,
                member.full_name(),
                member.graduation_year,
                member.class_level.to_string(),
                if member.is_active { "yes" } else { "no" },
            );
        }
        Ok(())
    }

    async fn show_leaderboard(&self, metric: &str, as_of: NaiveDate) -> Result<()> {
        let roster = self.store.load_roster(as_of).await?;
        let samples = self.store.fetch_measurements(metric).await?;
        let board = leaderboard(&roster, &samples);

        if board.is_empty() {
            println!("No {metric} data available");
            return Ok(());
        }

        println!("{metric} leaderboard ({} players)", board.len());
        println!("{:<4} {:<24} {:<10} {:>8} {:>8} {:>8}", "#", "Player", "Class", "Avg", "90th", "Max");
        for (rank, row) in board.iter().enumerate() {
            println!(
                "{:<4} {:<24} {:<10} {:>8.1} {:>8.1} {:>8.1}",
                rank + 1,
                row.full_name,
                row.class_level.to_string(),
                row.average,
                row.p90,
                row.max,
            );
        }
        Ok(())
    }

    async fn show_player(&self, player_id: i64, metric: &str, as_of: NaiveDate) -> Result<()> {
        let roster = self.store.load_roster(as_of).await?;
        let member = roster
            .get(player_id)
            .with_context(|| format!("No player with id {player_id}"))?;

        let samples = self.store.fetch_player_measurements(player_id, metric).await?;
        let curves = self.store.load_curves().await?;

        match player_report(member, &samples, &curves, metric)? {
            Some(report) => {
                println!("{} ({})", report.full_name, report.class_level);
                println!("  {metric} sessions: {}", report.summary.count);
                println!("  Average: {:.1}", report.summary.average);
                println!("  90th pct of sessions: {:.1}", report.summary.p90);
                println!("  Max: {:.1}", report.summary.max);
                println!("  Class percentile: {:.1}", report.percentile_rank);
            }
            None => println!("No {metric} data available for {}", member.full_name()),
        }
        Ok(())
    }

    async fn add_note(
        &self,
        player_id: i64,
        coach_id: i64,
        note_type: &str,
        body: String,
    ) -> Result<()> {
        let note_type: NoteType = note_type.parse()?;
        let note = NewNote { player_id, coach_id, note_type, body };
        let id = self.store.insert_note(note).await?;
        println!("Recorded note {id}");
        Ok(())
    }
}

fn resolve_date(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(|| Utc::now().date_naive())
}
