//! Lexical variability: type-token ratio over the transcript.
//!
//! Distinct tokens over total tokens, in [0, 1]. Defined as 0.0 for an
//! empty transcript rather than unavailable: a transcript that exists
//! but says nothing has no variety to measure.

use std::collections::HashSet;

use crate::core::{ExerciseAttempt, MetricName, RawMetric};
use crate::text::tokenize;

pub fn lexical_variability(attempt: &ExerciseAttempt) -> Option<RawMetric> {
    let tokens = tokenize(&attempt.transcript);
    let value = if tokens.is_empty() {
        0.0
    } else {
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        distinct.len() as f64 / tokens.len() as f64
    };
    Some(RawMetric::new(MetricName::LexicalVariability, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ExerciseKind;

    fn attempt(transcript: &str) -> ExerciseAttempt {
        ExerciseAttempt::new(ExerciseKind::Question, transcript, 10.0)
    }

    #[test]
    fn test_all_distinct_tokens_ratio_one() {
        let metric = lexical_variability(&attempt("una ciudad grande y tranquila")).unwrap();
        assert_eq!(metric.value, 1.0);
    }

    #[test]
    fn test_repetition_lowers_ratio() {
        // 2 distinct of 4 total.
        let metric = lexical_variability(&attempt("reembolso reembolso del reembolso")).unwrap();
        assert_eq!(metric.value, 0.5);
    }

    #[test]
    fn test_empty_transcript_is_zero() {
        let metric = lexical_variability(&attempt("")).unwrap();
        assert_eq!(metric.value, 0.0);
    }

    #[test]
    fn test_case_folding_merges_types() {
        let metric = lexical_variability(&attempt("Hola hola HOLA")).unwrap();
        assert!((metric.value - 1.0 / 3.0).abs() < 1e-9);
    }
}
