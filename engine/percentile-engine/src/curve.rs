//! Reference curve records
//!
//! A curve is a fixed-shape record: exactly eleven values, one per
//! checkpoint, held in checkpoint order. Shape and monotonicity are
//! enforced here, at construction, so estimation never has to reach into a
//! variably-shaped row by string key.

use roster_core::ClassLevel;
use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::Result;

/// Percentile checkpoints every reference curve is sampled at
pub const CHECKPOINTS: [f64; 11] =
    [1.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 99.0];

/// Population baseline for one metric within one class level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCurve {
    class_level: ClassLevel,
    metric: String,
    /// Values at [`CHECKPOINTS`], strictly increasing
    values: [f64; 11],
}

impl ReferenceCurve {
    /// Build a curve, rejecting malformed value sequences
    ///
    /// Values must be finite and strictly increasing across the checkpoint
    /// axis. A flat segment would make the interpolation divisor zero, so
    /// it is rejected here, at ingestion, not at estimate time.
    pub fn new(class_level: ClassLevel, metric: impl Into<String>, values: [f64; 11]) -> Result<Self> {
        for &value in &values {
            if !value.is_finite() {
                return Err(CurveError::InvalidValue(value));
            }
        }
        for index in 1..values.len() {
            if values[index] < values[index - 1] {
                return Err(CurveError::NonMonotonic { index });
            }
            if values[index] == values[index - 1] {
                return Err(CurveError::DegenerateSegment {
                    lower_p: CHECKPOINTS[index - 1],
                    upper_p: CHECKPOINTS[index],
                });
            }
        }
        Ok(Self { class_level, metric: metric.into(), values })
    }

    /// Class level this curve applies to
    pub fn class_level(&self) -> ClassLevel {
        self.class_level
    }

    /// Metric this curve describes
    pub fn metric(&self) -> &str {
        &self.metric
    }

    /// Checkpoint values, in [`CHECKPOINTS`] order
    pub fn values(&self) -> &[f64; 11] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand_speed_curve() -> ReferenceCurve {
        ReferenceCurve::new(
            ClassLevel::Junior,
            "hand_speed",
            [14.0, 16.0, 17.5, 18.5, 19.3, 20.0, 24.0, 25.0, 26.2, 27.5, 30.0],
        )
        .unwrap()
    }

    #[test]
    fn test_valid_curve_construction() {
        let curve = hand_speed_curve();
        assert_eq!(curve.class_level(), ClassLevel::Junior);
        assert_eq!(curve.metric(), "hand_speed");
        assert_eq!(curve.values()[0], 14.0);
        assert_eq!(curve.values()[10], 30.0);
    }

    #[test]
    fn test_decreasing_values_are_rejected() {
        let result = ReferenceCurve::new(
            ClassLevel::Junior,
            "hand_speed",
            [14.0, 16.0, 15.0, 18.5, 19.3, 20.0, 24.0, 25.0, 26.2, 27.5, 30.0],
        );
        assert_eq!(result.unwrap_err(), CurveError::NonMonotonic { index: 2 });
    }

    #[test]
    fn test_flat_segment_is_rejected_at_ingestion() {
        let result = ReferenceCurve::new(
            ClassLevel::Junior,
            "hand_speed",
            [14.0, 16.0, 16.0, 18.5, 19.3, 20.0, 24.0, 25.0, 26.2, 27.5, 30.0],
        );
        assert_eq!(
            result.unwrap_err(),
            CurveError::DegenerateSegment { lower_p: 10.0, upper_p: 20.0 }
        );
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let result = ReferenceCurve::new(
            ClassLevel::Junior,
            "hand_speed",
            [14.0, 16.0, f64::NAN, 18.5, 19.3, 20.0, 24.0, 25.0, 26.2, 27.5, 30.0],
        );
        assert!(matches!(result.unwrap_err(), CurveError::InvalidValue(_)));
    }
}
