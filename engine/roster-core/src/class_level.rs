//! Class-level derivation from graduation years
//!
//! The school year is anchored at September 1 of the graduation year: the
//! number of whole school years remaining (rounded up, 365-day divisor)
//! picks one of six ordinal buckets, and a `ClassLadder` maps the bucket
//! index to a label. Both the level and the active flag are derived view
//! attributes, recomputed on every read and never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;
use crate::Result;

/// Days per school year used when bucketing graduation dates.
///
/// A deliberate approximation: leap days are ignored, and an exact
/// 365-day multiple rounds up into the younger class.
const SCHOOL_YEAR_DAYS: i64 = 365;

/// Discrete grade-level bucket derived from a graduation year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassLevel {
    /// Already graduated (alumni bucket)
    Grad,
    Senior,
    Junior,
    Sophomore,
    Freshman,
    /// More than four school years out (middle school bucket)
    Middle,
}

impl ClassLevel {
    /// Varsity-eligible, in-school grades count toward the active roster
    pub fn is_active(self) -> bool {
        matches!(
            self,
            ClassLevel::Freshman | ClassLevel::Sophomore | ClassLevel::Junior | ClassLevel::Senior
        )
    }
}

impl fmt::Display for ClassLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassLevel::Grad => "Grad",
            ClassLevel::Senior => "Senior",
            ClassLevel::Junior => "Junior",
            ClassLevel::Sophomore => "Sophomore",
            ClassLevel::Freshman => "Freshman",
            ClassLevel::Middle => "Middle",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ClassLevel {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Grad" => Ok(ClassLevel::Grad),
            "Senior" => Ok(ClassLevel::Senior),
            "Junior" => Ok(ClassLevel::Junior),
            "Sophomore" => Ok(ClassLevel::Sophomore),
            "Freshman" => Ok(ClassLevel::Freshman),
            "Middle" => Ok(ClassLevel::Middle),
            other => Err(RosterError::UnknownClassLevel(other.to_string())),
        }
    }
}

/// Ordinal-to-label mapping for the six class buckets
///
/// Index 0 is the bucket for players whose graduation date has passed and
/// index 5 the bucket for players five or more school years out. Data sets
/// in the wild disagree on the direction of this scale, so the application
/// supplies the mapping; [`ClassLadder::default`] is the canonical one
/// (0 = Grad .. 5 = Middle).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassLadder {
    levels: [ClassLevel; 6],
}

impl ClassLadder {
    /// Create a ladder from an explicit bucket-index-to-label mapping
    pub fn new(levels: [ClassLevel; 6]) -> Self {
        Self { levels }
    }

    /// Parse a ladder from six class-level names, index order
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        if names.len() != 6 {
            return Err(RosterError::IncompleteLadder(names.len()));
        }
        let mut levels = [ClassLevel::Grad; 6];
        for (slot, name) in levels.iter_mut().zip(names) {
            *slot = name.as_ref().parse()?;
        }
        Ok(Self { levels })
    }

    /// Label for a clamped bucket index (0..=5)
    pub fn level_at(&self, index: usize) -> ClassLevel {
        self.levels[index]
    }
}

impl Default for ClassLadder {
    fn default() -> Self {
        Self {
            levels: [
                ClassLevel::Grad,
                ClassLevel::Senior,
                ClassLevel::Junior,
                ClassLevel::Sophomore,
                ClassLevel::Freshman,
                ClassLevel::Middle,
            ],
        }
    }
}

/// Classify a graduation year against an evaluation date
///
/// Counts the whole school years remaining until September 1 of
/// `graduation_year`, rounded up, clamps the count into the six ladder
/// buckets, and looks the label up on `ladder`. Deterministic and
/// referentially transparent: the same inputs always produce the same
/// label.
pub fn classify(graduation_year: i32, as_of: NaiveDate, ladder: &ClassLadder) -> Result<ClassLevel> {
    let school_year_start = NaiveDate::from_ymd_opt(graduation_year, 9, 1)
        .ok_or(RosterError::InvalidGraduationYear { year: graduation_year })?;

    let days = (school_year_start - as_of).num_days();
    let years_diff = ceil_div(days, SCHOOL_YEAR_DAYS);

    let index = if years_diff >= 5 {
        5
    } else if years_diff < 1 {
        0
    } else {
        years_diff as usize
    };

    Ok(ladder.level_at(index))
}

/// Integer ceiling division, correct for negative day counts
fn ceil_div(n: i64, d: i64) -> i64 {
    (n + d - 1).div_euclid(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_one_year_out_is_senior() {
        // 2024-10-01 -> 2025-09-01 is 335 days, ceil(335/365) = 1
        let ladder = ClassLadder::default();
        let level = classify(2025, date(2024, 10, 1), &ladder).unwrap();
        assert_eq!(level, ClassLevel::Senior);
    }

    #[test]
    fn test_full_ladder_from_one_evaluation_date() {
        let ladder = ClassLadder::default();
        let as_of = date(2024, 10, 1);
        assert_eq!(classify(2024, as_of, &ladder).unwrap(), ClassLevel::Grad);
        assert_eq!(classify(2025, as_of, &ladder).unwrap(), ClassLevel::Senior);
        assert_eq!(classify(2026, as_of, &ladder).unwrap(), ClassLevel::Junior);
        assert_eq!(classify(2027, as_of, &ladder).unwrap(), ClassLevel::Sophomore);
        assert_eq!(classify(2028, as_of, &ladder).unwrap(), ClassLevel::Freshman);
        assert_eq!(classify(2029, as_of, &ladder).unwrap(), ClassLevel::Middle);
    }

    #[test]
    fn test_past_graduation_clamps_to_bucket_zero() {
        let ladder = ClassLadder::default();
        for year in [1998, 2010, 2023] {
            assert_eq!(classify(year, date(2024, 10, 1), &ladder).unwrap(), ClassLevel::Grad);
        }
    }

    #[test]
    fn test_far_future_clamps_to_bucket_five() {
        let ladder = ClassLadder::default();
        for year in [2030, 2035, 2050] {
            assert_eq!(classify(year, date(2024, 10, 1), &ladder).unwrap(), ClassLevel::Middle);
        }
    }

    #[test]
    fn test_exact_boundary_rounds_up() {
        // 2025-09-01 -> 2026-09-01 is exactly 365 days: still one year out,
        // while one more day lands in the next (younger) bucket.
        let ladder = ClassLadder::default();
        assert_eq!(classify(2026, date(2025, 9, 1), &ladder).unwrap(), ClassLevel::Senior);
        assert_eq!(classify(2026, date(2025, 8, 31), &ladder).unwrap(), ClassLevel::Junior);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let ladder = ClassLadder::default();
        let first = classify(2027, date(2024, 10, 1), &ladder).unwrap();
        let second = classify(2027, date(2024, 10, 1), &ladder).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_is_active_covers_exactly_the_four_in_school_grades() {
        assert!(ClassLevel::Freshman.is_active());
        assert!(ClassLevel::Sophomore.is_active());
        assert!(ClassLevel::Junior.is_active());
        assert!(ClassLevel::Senior.is_active());
        assert!(!ClassLevel::Grad.is_active());
        assert!(!ClassLevel::Middle.is_active());
    }

    #[test]
    fn test_reversed_ladder_direction() {
        // Applications can supply the historical reversed scale.
        let ladder = ClassLadder::new([
            ClassLevel::Middle,
            ClassLevel::Senior,
            ClassLevel::Junior,
            ClassLevel::Sophomore,
            ClassLevel::Freshman,
            ClassLevel::Grad,
        ]);
        assert_eq!(classify(2023, date(2024, 10, 1), &ladder).unwrap(), ClassLevel::Middle);
        assert_eq!(classify(2035, date(2024, 10, 1), &ladder).unwrap(), ClassLevel::Grad);
    }

    #[test]
    fn test_ladder_from_names() {
        let names = ["Grad", "Senior", "Junior", "Sophomore", "Freshman", "Middle"];
        let ladder = ClassLadder::from_names(&names).unwrap();
        assert_eq!(ladder, ClassLadder::default());

        let short = ["Grad", "Senior"];
        assert_eq!(ClassLadder::from_names(&short), Err(RosterError::IncompleteLadder(2)));

        let bad = ["Grad", "Senior", "Junior", "Sophomore", "Freshman", "Kindergarten"];
        assert_eq!(
            ClassLadder::from_names(&bad),
            Err(RosterError::UnknownClassLevel("Kindergarten".to_string()))
        );
    }

    #[test]
    fn test_class_level_round_trips_through_strings() {
        for level in [
            ClassLevel::Grad,
            ClassLevel::Senior,
            ClassLevel::Junior,
            ClassLevel::Sophomore,
            ClassLevel::Freshman,
            ClassLevel::Middle,
        ] {
            assert_eq!(level.to_string().parse::<ClassLevel>().unwrap(), level);
        }
        assert!("Varsity".parse::<ClassLevel>().is_err());
    }
}
