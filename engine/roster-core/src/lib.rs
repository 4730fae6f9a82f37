//! Roster classification core
//!
//! This crate derives class levels (Freshman..Senior plus the out-of-range
//! buckets) from graduation years and builds immutable roster projections
//! for the rest of the platform. It is pure and synchronous, with no I/O
//! and no shared state, so it is safe to call from any number of request
//! tasks.

pub mod class_level;
pub mod error;
pub mod roster;

pub use class_level::{classify, ClassLadder, ClassLevel};
pub use error::RosterError;
pub use roster::{RosterEntry, RosterMember, RosterView};

// Result type alias
pub type Result<T> = std::result::Result<T, RosterError>;
