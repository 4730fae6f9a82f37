//! Row types for the team store tables
//!
//! Rows are mapped with runtime-checked queries (`sqlx::query_as`) and
//! normalized into the pure crates' types at this boundary. The hosted
//! store returns numeric columns as decimals, so graduation years come
//! back as `BigDecimal` and are converted - or rejected - here.

use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::{DateTime, NaiveDate, Utc};
use percentile_engine::ReferenceCurve;
use roster_core::{ClassLevel, RosterEntry};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

use crate::error::StoreError;
use crate::Result;

/// A row of the `players` table
#[derive(Debug, Clone, FromRow)]
pub struct PlayerRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Numeric column; whole calendar year expected
    pub grad_year: BigDecimal,
    /// Link to the vendor sensor account, when the player has one
    pub rapsodo_id: Option<i64>,
}

impl PlayerRow {
    /// Normalize the stored graduation year into a roster entry
    ///
    /// A fractional or out-of-range year is rejected, never truncated.
    pub fn into_roster_entry(self) -> Result<RosterEntry> {
        if !self.grad_year.is_integer() {
            return Err(StoreError::InvalidGraduationYear {
                player_id: self.id,
                raw: self.grad_year.to_string(),
            });
        }
        let graduation_year =
            self.grad_year.to_i32().ok_or_else(|| StoreError::InvalidGraduationYear {
                player_id: self.id,
                raw: self.grad_year.to_string(),
            })?;
        Ok(RosterEntry {
            player_id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            graduation_year,
        })
    }
}

/// A row of the `coaches` table
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CoachRow {
    pub id: i64,
    pub name: String,
}

/// A row of the `reference_curves` table
#[derive(Debug, Clone, FromRow)]
pub struct CurveRow {
    pub id: i64,
    pub class_level: String,
    pub metric: String,
    pub p_1: f64,
    pub p_10: f64,
    pub p_20: f64,
    pub p_30: f64,
    pub p_40: f64,
    pub p_50: f64,
    pub p_60: f64,
    pub p_70: f64,
    pub p_80: f64,
    pub p_90: f64,
    pub p_99: f64,
}

impl CurveRow {
    /// Validate the row into a fixed-shape reference curve
    pub fn into_curve(self) -> Result<ReferenceCurve> {
        let class_level: ClassLevel = self.class_level.parse().map_err(StoreError::Roster)?;
        let values = [
            self.p_1, self.p_10, self.p_20, self.p_30, self.p_40, self.p_50, self.p_60, self.p_70,
            self.p_80, self.p_90, self.p_99,
        ];
        ReferenceCurve::new(class_level, self.metric, values).map_err(StoreError::Curve)
    }
}

/// A row of the `measurements` table
#[derive(Debug, Clone, FromRow)]
pub struct MeasurementRow {
    pub id: i64,
    pub player_id: i64,
    pub metric: String,
    pub value: f64,
    pub recorded_on: NaiveDate,
    /// Vendor payload the sample came from, kept for traceability
    pub raw: Option<serde_json::Value>,
}

/// The kind of player a note is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteType {
    Fielder,
    Hitter,
    Pitcher,
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoteType::Fielder => "Fielder",
            NoteType::Hitter => "Hitter",
            NoteType::Pitcher => "Pitcher",
        };
        write!(f, "{name}")
    }
}

impl FromStr for NoteType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Fielder" => Ok(NoteType::Fielder),
            "Hitter" => Ok(NoteType::Hitter),
            "Pitcher" => Ok(NoteType::Pitcher),
            other => Err(StoreError::UnknownNoteType(other.to_string())),
        }
    }
}

/// A row of the `notes` table
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct NoteRow {
    pub id: i64,
    pub player_id: i64,
    pub coach_id: i64,
    pub note_type: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// A note to insert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNote {
    pub player_id: i64,
    pub coach_id: i64,
    pub note_type: NoteType,
    pub body: String,
}
