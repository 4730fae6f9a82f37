//! Error types for roster classification

use thiserror::Error;

/// Errors that can occur while classifying roster entries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Graduation year cannot be anchored to a September 1 school-year start
    #[error("graduation year {year} is not a usable calendar year")]
    InvalidGraduationYear { year: i32 },

    /// A class-level name that is not one of the six known buckets
    #[error("unknown class level: '{0}'")]
    UnknownClassLevel(String),

    /// A ladder definition that does not cover all six ordinal buckets
    #[error("class ladder must map all six buckets, got {0} entries")]
    IncompleteLadder(usize),
}
