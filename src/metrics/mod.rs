//! Metric calculators.
//!
//! Each calculator is a pure function over an [`ExerciseAttempt`] that
//! yields `Some(RawMetric)` when the metric is computable and `None`
//! when it is unavailable for that attempt (missing reference text,
//! zero duration, language not covered by the filler lexicon). Absence
//! is absorbed downstream by aggregation; it is never an error.

pub mod lexical;
pub mod precision;
pub mod rate;

pub use lexical::lexical_variability;
pub use precision::transcription_precision;
pub use rate::{filler_word_per_minute, words_per_minute};

use std::collections::HashSet;

use crate::core::{ExerciseAttempt, RawMetric};

/// Run every calculator against one attempt and collect the metrics
/// that were computable.
pub fn compute_all(
    attempt: &ExerciseAttempt,
    filler_words: Option<&HashSet<String>>,
) -> Vec<RawMetric> {
    [
        transcription_precision(attempt),
        words_per_minute(attempt),
        filler_words.and_then(|words| filler_word_per_minute(attempt, words)),
        lexical_variability(attempt),
    ]
    .into_iter()
    .flatten()
    .collect()
}
