//! Transcription precision: how much of the reference prompt the
//! speaker's transcript actually covers.
//!
//! Alignment is the longest common subsequence of the two token
//! sequences, divided by the reference token count. Order-preserving but
//! tolerant of insertions and deletions: a dropped or inserted word
//! costs exactly one token instead of shifting every later position out
//! of alignment. Raw value in [0, 1].

use crate::core::{ExerciseAttempt, MetricName, RawMetric};
use crate::text::tokenize;

/// Compute transcription precision for an attempt.
///
/// Unavailable (`None`) when the attempt carries no reference text, or
/// when the reference tokenizes to nothing (no denominator).
pub fn transcription_precision(attempt: &ExerciseAttempt) -> Option<RawMetric> {
    let reference = attempt.reference_text.as_deref()?;
    let reference_tokens = tokenize(reference);
    if reference_tokens.is_empty() {
        return None;
    }
    let transcript_tokens = tokenize(&attempt.transcript);
    let matched = lcs_length(&reference_tokens, &transcript_tokens);
    Some(RawMetric::new(
        MetricName::TranscriptionPrecision,
        matched as f64 / reference_tokens.len() as f64,
    ))
}

/// Longest common subsequence length over token slices, single-row DP.
fn lcs_length(a: &[String], b: &[String]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut row = vec![0usize; b.len() + 1];
    for token_a in a {
        let mut prev_diagonal = 0;
        for (j, token_b) in b.iter().enumerate() {
            let prev_row = row[j + 1];
            row[j + 1] = if token_a == token_b {
                prev_diagonal + 1
            } else {
                row[j + 1].max(row[j])
            };
            prev_diagonal = prev_row;
        }
    }
    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ExerciseKind;

    fn reading(transcript: &str, reference: &str) -> ExerciseAttempt {
        ExerciseAttempt::new(ExerciseKind::Reading, transcript, 5.0).with_reference(reference)
    }

    #[test]
    fn test_exact_match_scores_one() {
        let attempt = reading(
            "el veloz zorro marron salta sobre el perro perezoso",
            "el veloz zorro marron salta sobre el perro perezoso",
        );
        let metric = transcription_precision(&attempt).unwrap();
        assert_eq!(metric.value, 1.0);
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let attempt = reading("El VELOZ zorro, marrón.", "el veloz zorro marrón");
        assert_eq!(transcription_precision(&attempt).unwrap().value, 1.0);
    }

    #[test]
    fn test_one_dropped_word_costs_one_token() {
        // 4 of 5 reference tokens survive the deletion.
        let attempt = reading("el zorro salta alto", "el veloz zorro salta alto");
        let metric = transcription_precision(&attempt).unwrap();
        assert!((metric.value - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_insertion_does_not_cascade() {
        // An inserted filler leaves all reference tokens matched.
        let attempt = reading("el eh veloz zorro salta", "el veloz zorro salta");
        assert_eq!(transcription_precision(&attempt).unwrap().value, 1.0);
    }

    #[test]
    fn test_empty_transcript_scores_zero() {
        let attempt = reading("", "el veloz zorro");
        assert_eq!(transcription_precision(&attempt).unwrap().value, 0.0);
    }

    #[test]
    fn test_missing_reference_is_unavailable() {
        let attempt = ExerciseAttempt::new(ExerciseKind::Description, "una ciudad", 5.0);
        assert!(transcription_precision(&attempt).is_none());
    }

    #[test]
    fn test_empty_reference_is_unavailable() {
        let attempt = reading("algo", "  ...  ");
        assert!(transcription_precision(&attempt).is_none());
    }

    #[test]
    fn test_lcs_length_basics() {
        let a: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let b: Vec<String> = ["b", "x", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(lcs_length(&a, &b), 3);
        assert_eq!(lcs_length(&a, &[]), 0);
    }
}
