//! Team data store
//!
//! Postgres access for the coaching platform: players, coaches, reference
//! curves, measurements, and notes. Rows are normalized at this boundary
//! (decimal graduation years become integers or errors, curve rows become
//! validated [`percentile_engine::ReferenceCurve`]s) so the pure crates
//! only ever see well-shaped values.

pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use config::{DatabaseConfig, RosterConfig, StoreConfig};
pub use error::StoreError;
pub use models::{CoachRow, CurveRow, MeasurementRow, NewNote, NoteRow, NoteType, PlayerRow};
pub use store::TeamStore;

// Result type alias
pub type Result<T> = std::result::Result<T, StoreError>;
