//! Percentile estimation engine
//!
//! Ranks a measured value against a population baseline: each reference
//! curve samples one metric for one class level at eleven fixed percentile
//! checkpoints, and estimation interpolates linearly between them,
//! saturating at the extremes. Curves are validated once at ingestion and
//! held in a [`CurveSet`] keyed by (class level, metric).

pub mod curve;
pub mod error;
pub mod estimator;
pub mod registry;

pub use curve::{ReferenceCurve, CHECKPOINTS};
pub use error::CurveError;
pub use estimator::estimate_percentile;
pub use registry::CurveSet;

// Result type alias
pub type Result<T> = std::result::Result<T, CurveError>;
