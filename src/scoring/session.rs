//! Session scoring orchestration.
//!
//! The scorer owns the resource handle and the session language, runs
//! every attempt through calculators → normalizer → aggregator, and
//! folds the per-attempt dimensions into session-level dimension scores
//! and the overall score. Scoring is pure and synchronous; sessions may
//! be scored fully in parallel, the only shared state being the
//! process-wide resource cache.

use std::collections::BTreeMap;

use crate::core::{
    Dimension, ExerciseAttempt, ExerciseKind, Language, MetricName, ScoredMetric, SessionResult,
};
use crate::errors::ScoreError;
use crate::metrics;
use crate::resources::{shared_resources, ScoringResources};
use crate::scoring::{aggregate, normalize, round_to};

/// Scores complete three-attempt sessions against a set of resources.
pub struct SessionScorer<'a> {
    resources: &'a ScoringResources,
    language: Language,
}

impl SessionScorer<'static> {
    /// Scorer backed by the process-wide shared resource cache.
    pub fn shared(language: Language) -> Result<Self, ScoreError> {
        Ok(Self {
            resources: shared_resources()?,
            language,
        })
    }
}

impl<'a> SessionScorer<'a> {
    /// Scorer with explicitly injected resources. Tests and callers that
    /// load a custom resource directory use this constructor.
    pub fn with_resources(resources: &'a ScoringResources, language: Language) -> Self {
        Self {
            resources,
            language,
        }
    }

    /// Score one session from its three exercise attempts.
    ///
    /// Rejects structurally invalid input (wrong attempt count, missing
    /// or duplicated exercise kinds, negative or non-finite durations)
    /// before any computation. Metric unavailability within a valid
    /// attempt is absorbed: the metric, and if nothing remains the
    /// dimension, is simply absent from the result.
    pub fn score_session(
        &self,
        session_id: &str,
        attempts: &[ExerciseAttempt],
    ) -> Result<SessionResult, ScoreError> {
        validate_attempts(attempts)?;

        // Per-attempt dimensions, grouped by dimension name.
        let mut by_dimension: BTreeMap<String, Vec<Dimension>> = BTreeMap::new();
        for attempt in attempts {
            let scored = self.score_attempt(attempt);
            for (name, weights) in self.resources.dimension_weights() {
                if let Some(dimension) = aggregate(name, weights, &scored) {
                    by_dimension.entry(name.clone()).or_default().push(dimension);
                }
            }
        }

        // Session-level dimension scores: unweighted mean over the
        // attempts where the dimension was present. Attempts where it
        // was absent contribute to neither numerator nor denominator.
        let dimensions: Vec<Dimension> = by_dimension
            .into_iter()
            .map(|(name, per_attempt)| fold_dimension(name, &per_attempt))
            .collect();

        let overall_score = if dimensions.is_empty() {
            0.0
        } else {
            round_to(
                dimensions.iter().map(|d| d.score).sum::<f64>() / dimensions.len() as f64,
                2,
            )
        };

        Ok(SessionResult {
            session_id: session_id.to_string(),
            overall_score,
            dimensions,
        })
    }

    /// Run the applicable calculators for one attempt and normalize the
    /// results. A computed metric with no configured target is skipped.
    fn score_attempt(&self, attempt: &ExerciseAttempt) -> BTreeMap<MetricName, ScoredMetric> {
        let filler_words = self.resources.filler_words(self.language);
        let mut scored = BTreeMap::new();
        for raw in metrics::compute_all(attempt, filler_words) {
            match self.resources.target(raw.name) {
                Some(policy) => {
                    let score = normalize(policy, raw.value);
                    scored.insert(
                        raw.name,
                        ScoredMetric {
                            raw: round_to(raw.value, 4),
                            score: round_to(score, 2),
                        },
                    );
                }
                None => {
                    log::debug!("metric {} has no target specification, skipping", raw.name);
                }
            }
        }
        scored
    }
}

fn validate_attempts(attempts: &[ExerciseAttempt]) -> Result<(), ScoreError> {
    if attempts.len() != 3 {
        return Err(ScoreError::validation(format!(
            "a session requires exactly 3 attempts, got {}",
            attempts.len()
        )));
    }
    for attempt in attempts {
        attempt.validate()?;
    }
    for kind in ExerciseKind::ALL {
        let count = attempts.iter().filter(|a| a.kind == kind).count();
        if count != 1 {
            return Err(ScoreError::validation(format!(
                "expected exactly one {kind} attempt, got {count}"
            )));
        }
    }
    Ok(())
}

/// Fold the per-attempt instances of one dimension into its
/// session-level form: mean score, and a metric breakdown averaging raw
/// and score across the attempts where each metric was computed.
fn fold_dimension(name: String, per_attempt: &[Dimension]) -> Dimension {
    let score = round_to(
        per_attempt.iter().map(|d| d.score).sum::<f64>() / per_attempt.len() as f64,
        2,
    );

    let mut sums: BTreeMap<String, (f64, f64, usize)> = BTreeMap::new();
    for dimension in per_attempt {
        for (metric, entry) in &dimension.metrics {
            let slot = sums.entry(metric.clone()).or_insert((0.0, 0.0, 0));
            slot.0 += entry.raw;
            slot.1 += entry.score;
            slot.2 += 1;
        }
    }
    let metrics = sums
        .into_iter()
        .map(|(metric, (raw_sum, score_sum, count))| {
            (
                metric,
                ScoredMetric {
                    raw: round_to(raw_sum / count as f64, 4),
                    score: round_to(score_sum / count as f64, 2),
                },
            )
        })
        .collect();

    Dimension {
        name,
        score,
        feedback: String::new(),
        metrics,
    }
}
