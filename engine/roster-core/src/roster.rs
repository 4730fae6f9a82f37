//! Immutable roster projections
//!
//! A [`RosterView`] is built fresh for each evaluation date: store rows go
//! in, classified members come out. Derived attributes live only on the
//! projection, so advancing the evaluation date means rebuilding the view,
//! never editing rows in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::class_level::{classify, ClassLadder, ClassLevel};
use crate::Result;

/// A raw roster row as the data store hands it over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub player_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Calendar year the player is expected to graduate
    pub graduation_year: i32,
}

/// A classified member of the roster projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterMember {
    pub player_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub graduation_year: i32,
    pub class_level: ClassLevel,
    pub is_active: bool,
}

impl RosterMember {
    /// Display name used by roster listings and leaderboards
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Classified roster for one evaluation date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterView {
    as_of: NaiveDate,
    members: Vec<RosterMember>,
}

impl RosterView {
    /// Classify every entry and build the projection
    ///
    /// A single unusable graduation year fails the whole build; no entry
    /// is silently dropped.
    pub fn build(entries: Vec<RosterEntry>, as_of: NaiveDate, ladder: &ClassLadder) -> Result<Self> {
        let mut members = Vec::with_capacity(entries.len());
        for entry in entries {
            let class_level = classify(entry.graduation_year, as_of, ladder)?;
            members.push(RosterMember {
                player_id: entry.player_id,
                first_name: entry.first_name,
                last_name: entry.last_name,
                graduation_year: entry.graduation_year,
                class_level,
                is_active: class_level.is_active(),
            });
        }
        Ok(Self { as_of, members })
    }

    /// Evaluation date this view was built for
    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// All members, store order
    pub fn members(&self) -> &[RosterMember] {
        &self.members
    }

    /// Varsity-eligible members only
    pub fn active(&self) -> impl Iterator<Item = &RosterMember> + '_ {
        self.members.iter().filter(|m| m.is_active)
    }

    /// Members of one class level
    pub fn by_class(&self, level: ClassLevel) -> impl Iterator<Item = &RosterMember> + '_ {
        self.members.iter().filter(move |m| m.class_level == level)
    }

    /// Look a member up by player id
    pub fn get(&self, player_id: i64) -> Option<&RosterMember> {
        self.members.iter().find(|m| m.player_id == player_id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
