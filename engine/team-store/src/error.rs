//! Error types for the team store

use thiserror::Error;

/// Errors that can occur in the team store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database errors from the underlying pool or queries
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration errors raised while bringing the schema up to date
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Classification errors surfaced while building roster views
    #[error(transparent)]
    Roster(#[from] roster_core::RosterError),

    /// Curve validation and lookup errors
    #[error(transparent)]
    Curve(#[from] percentile_engine::CurveError),

    /// A stored graduation year that is not a whole calendar year
    #[error("player {player_id} has unusable graduation year '{raw}'")]
    InvalidGraduationYear { player_id: i64, raw: String },

    /// A stored note type outside the known set
    #[error("unknown note type: '{0}'")]
    UnknownNoteType(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),
}
