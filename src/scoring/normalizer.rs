//! Raw-value normalization onto the common 0-100 scale.
//!
//! The policy for each metric is configuration (a tagged
//! [`NormalizationPolicy`] variant), so adding a metric with an existing
//! policy shape needs no code change. Normalization never errors for
//! finite input; non-finite raw values are prevented upstream by the
//! calculator layer.

use crate::config::NormalizationPolicy;

/// Map a raw metric value to a score in [0, 100] under the given policy.
pub fn normalize(policy: &NormalizationPolicy, raw: f64) -> f64 {
    let score = match *policy {
        NormalizationPolicy::TargetRange {
            min_value,
            ideal_min,
            ideal_max,
            max_value,
        } => {
            let v = raw.clamp(min_value, max_value);
            if (ideal_min..=ideal_max).contains(&v) {
                100.0
            } else if v < ideal_min {
                // Degenerate shared bound: nothing below ideal can score.
                if ideal_min == min_value {
                    0.0
                } else {
                    100.0 * (v - min_value) / (ideal_min - min_value)
                }
            } else if max_value == ideal_max {
                0.0
            } else {
                100.0 * (max_value - v) / (max_value - ideal_max)
            }
        }
        NormalizationPolicy::MonotonicIncreasing { floor, ceiling } => {
            let v = raw.clamp(floor, ceiling);
            100.0 * (v - floor) / (ceiling - floor)
        }
        NormalizationPolicy::MonotonicDecreasing { floor, ceiling } => {
            let v = raw.clamp(floor, ceiling);
            100.0 * (ceiling - v) / (ceiling - floor)
        }
    };
    // Guard against floating-point noise at the seams.
    score.clamp(0.0, 100.0)
}
