//! Error types for percentile estimation

use roster_core::ClassLevel;
use thiserror::Error;

/// Errors that can occur while building or evaluating reference curves
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// No curve row exists for the requested class/metric pair
    #[error("no reference curve for metric '{metric}' at class level {class_level}")]
    NotFound { class_level: ClassLevel, metric: String },

    /// Curve values decrease somewhere along the checkpoint axis
    #[error("curve values must not decrease with percentile (checkpoint index {index})")]
    NonMonotonic { index: usize },

    /// A bracketing segment with zero value range makes interpolation undefined
    #[error("curve segment p{lower_p}-p{upper_p} has zero width")]
    DegenerateSegment { lower_p: f64, upper_p: f64 },

    /// A value that cannot be compared numerically
    #[error("value {0} is not a finite number")]
    InvalidValue(f64),
}
