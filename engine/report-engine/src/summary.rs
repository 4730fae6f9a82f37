//! Summary statistics over raw measurement samples

use serde::Serialize;

/// Count, average, max, and sample 90th percentile for one player's metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    pub count: usize,
    pub average: f64,
    pub max: f64,
    pub p90: f64,
}

impl MetricSummary {
    /// Summarize a sample set, `None` when it is empty
    ///
    /// Callers render the empty case themselves ("No data available").
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let count = samples.len();
        let sum: f64 = samples.iter().sum();

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            count,
            average: round_tenth(sum / count as f64),
            max: round_tenth(*sorted.last().unwrap_or(&0.0)),
            p90: round_tenth(sample_percentile(&sorted, 90.0)),
        })
    }
}

/// Percentile of a sorted sample, linear interpolation between order
/// statistics
fn sample_percentile(sorted: &[f64], q: f64) -> f64 {
    let last = sorted.len() - 1;
    let rank = q / 100.0 * last as f64;
    let lower = rank.floor() as usize;
    let fraction = rank - lower as f64;
    if lower >= last {
        sorted[last]
    } else {
        sorted[lower] + fraction * (sorted[lower + 1] - sorted[lower])
    }
}

pub(crate) fn round_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
