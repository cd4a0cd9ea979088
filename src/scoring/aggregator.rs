//! Dimension aggregation: weighted mean of the metric scores configured
//! for a dimension.
//!
//! Weights are non-negative configuration and need not sum to 1; the
//! division by the weight total normalizes them. A metric that is
//! configured but absent for the attempt is excluded from numerator and
//! denominator — never scored as zero. If nothing remains, the
//! dimension itself is absent for the attempt and that absence (not a
//! zero) propagates to the session scorer.

use std::collections::BTreeMap;

use crate::core::{Dimension, MetricName, ScoredMetric};
use crate::scoring::round_to;

/// Aggregate the scored metrics of one attempt into a dimension.
pub fn aggregate(
    name: &str,
    weights: &BTreeMap<MetricName, f64>,
    scored: &BTreeMap<MetricName, ScoredMetric>,
) -> Option<Dimension> {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    let mut metrics = BTreeMap::new();

    for (metric, weight) in weights {
        let Some(entry) = scored.get(metric) else {
            continue;
        };
        weighted_sum += weight * entry.score;
        weight_total += weight;
        metrics.insert(metric.as_str().to_string(), *entry);
    }

    if metrics.is_empty() || weight_total <= 0.0 {
        return None;
    }

    Some(Dimension {
        name: name.to_string(),
        score: round_to(weighted_sum / weight_total, 2),
        feedback: String::new(),
        metrics,
    })
}
