//! Piecewise-linear percentile estimation with saturation

use crate::curve::{ReferenceCurve, CHECKPOINTS};
use crate::error::CurveError;
use crate::Result;

/// Interpolated position (1-99) of a measured value within a curve
///
/// Values at or below the 1st-percentile checkpoint saturate to exactly 1,
/// values at or above the 99th saturate to exactly 99, and everything in
/// between interpolates linearly inside its bracketing segment. The result
/// is rounded to one decimal place and, for a monotonic curve, is
/// monotonic in `value`.
pub fn estimate_percentile(value: f64, curve: &ReferenceCurve) -> Result<f64> {
    if !value.is_finite() {
        return Err(CurveError::InvalidValue(value));
    }

    let values = curve.values();
    if value <= values[0] {
        return Ok(CHECKPOINTS[0]);
    }
    if value >= values[values.len() - 1] {
        return Ok(CHECKPOINTS[CHECKPOINTS.len() - 1]);
    }

    // Smallest index whose value is strictly above `value`; the saturation
    // checks guarantee it exists and is at least 1.
    let upper = values.partition_point(|&v| v <= value);
    let (lower_v, upper_v) = (values[upper - 1], values[upper]);
    let (lower_p, upper_p) = (CHECKPOINTS[upper - 1], CHECKPOINTS[upper]);

    let width = upper_v - lower_v;
    if width <= 0.0 {
        return Err(CurveError::DegenerateSegment { lower_p, upper_p });
    }

    let rank = lower_p + (value - lower_v) * (upper_p - lower_p) / width;
    Ok(round_tenth(rank))
}

fn round_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::ClassLevel;

    fn curve() -> ReferenceCurve {
        ReferenceCurve::new(
            ClassLevel::Junior,
            "hand_speed",
            [14.0, 16.0, 17.5, 18.5, 19.3, 20.0, 24.0, 25.0, 26.2, 27.5, 30.0],
        )
        .unwrap()
    }

    #[test]
    fn test_saturates_low_to_exactly_one() {
        let curve = curve();
        assert_eq!(estimate_percentile(14.0, &curve).unwrap(), 1.0);
        assert_eq!(estimate_percentile(10.0, &curve).unwrap(), 1.0);
        assert_eq!(estimate_percentile(-3.0, &curve).unwrap(), 1.0);
    }

    #[test]
    fn test_saturates_high_to_exactly_ninety_nine() {
        let curve = curve();
        assert_eq!(estimate_percentile(30.0, &curve).unwrap(), 99.0);
        assert_eq!(estimate_percentile(48.5, &curve).unwrap(), 99.0);
    }

    #[test]
    fn test_reproduces_every_checkpoint_anchor() {
        let curve = curve();
        for (percentile, value) in CHECKPOINTS.iter().zip(curve.values()) {
            assert_eq!(estimate_percentile(*value, &curve).unwrap(), *percentile);
        }
    }

    #[test]
    fn test_midpoint_interpolation() {
        // p_50 = 20.0 and p_60 = 24.0, so 22.0 sits exactly halfway.
        let curve = curve();
        assert_eq!(estimate_percentile(22.0, &curve).unwrap(), 55.0);
    }

    #[test]
    fn test_result_is_monotonic_in_value() {
        let curve = curve();
        let mut previous = 0.0;
        let mut value = 13.0;
        while value <= 31.0 {
            let rank = estimate_percentile(value, &curve).unwrap();
            assert!(rank >= previous, "rank regressed at value {value}");
            assert!((1.0..=99.0).contains(&rank));
            previous = rank;
            value += 0.05;
        }
    }

    #[test]
    fn test_rounds_to_one_decimal_place() {
        let curve = curve();
        // p_1 = 14.0, p_10 = 16.0: value 14.3 -> 1 + 0.3 * 9 / 2 = 2.35 -> 2.4
        assert_eq!(estimate_percentile(14.3, &curve).unwrap(), 2.4);
    }

    #[test]
    fn test_non_finite_value_is_rejected() {
        let curve = curve();
        assert!(matches!(
            estimate_percentile(f64::NAN, &curve).unwrap_err(),
            CurveError::InvalidValue(_)
        ));
        assert!(matches!(
            estimate_percentile(f64::INFINITY, &curve).unwrap_err(),
            CurveError::InvalidValue(_)
        ));
    }
}
