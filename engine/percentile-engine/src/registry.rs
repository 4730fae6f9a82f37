//! Curve registry keyed by class level and metric
//!
//! Estimation picks its baseline by the player's class level, so lookups
//! are two-stage: class level first, then metric. A missing pair is a
//! typed error for the caller to surface, never a silent default.

use std::collections::HashMap;

use roster_core::ClassLevel;
use tracing::debug;

use crate::curve::ReferenceCurve;
use crate::error::CurveError;
use crate::Result;

/// Validated reference curves for all class levels and metrics
#[derive(Debug, Clone, Default)]
pub struct CurveSet {
    curves: HashMap<ClassLevel, HashMap<String, ReferenceCurve>>,
    curve_count: usize,
}

impl CurveSet {
    /// Create an empty curve set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a curve, replacing any previous curve for the same pair
    ///
    /// Returns the replaced curve if there was one.
    pub fn insert(&mut self, curve: ReferenceCurve) -> Option<ReferenceCurve> {
        debug!(
            class_level = %curve.class_level(),
            metric = curve.metric(),
            "registering reference curve"
        );
        let replaced = self
            .curves
            .entry(curve.class_level())
            .or_default()
            .insert(curve.metric().to_string(), curve);
        if replaced.is_none() {
            self.curve_count += 1;
        }
        replaced
    }

    /// Curve for a class/metric pair
    pub fn get(&self, class_level: ClassLevel, metric: &str) -> Result<&ReferenceCurve> {
        self.curves
            .get(&class_level)
            .and_then(|by_metric| by_metric.get(metric))
            .ok_or_else(|| CurveError::NotFound { class_level, metric: metric.to_string() })
    }

    /// All registered curves, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &ReferenceCurve> + '_ {
        self.curves.values().flat_map(|by_metric| by_metric.values())
    }

    /// Number of registered curves
    pub fn len(&self) -> usize {
        self.curve_count
    }

    pub fn is_empty(&self) -> bool {
        self.curve_count == 0
    }
}
