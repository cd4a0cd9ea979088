//! Rate metrics: words per minute and filler words per minute.
//!
//! Both divide a token count by the spoken duration in minutes. With a
//! zero (or negative) duration there is nothing meaningful to divide
//! by, so the metric is unavailable — never zero, never infinity.

use std::collections::HashSet;

use crate::core::{ExerciseAttempt, MetricName, RawMetric};
use crate::text::{tokenize, word_count};

fn duration_minutes(attempt: &ExerciseAttempt) -> Option<f64> {
    let seconds = attempt.audio_duration_seconds;
    if seconds <= 0.0 {
        return None;
    }
    Some(seconds / 60.0)
}

/// Speech rate in words per minute. `None` when the duration is not
/// positive. An empty transcript yields 0.0 words per minute.
pub fn words_per_minute(attempt: &ExerciseAttempt) -> Option<RawMetric> {
    let minutes = duration_minutes(attempt)?;
    let words = word_count(&attempt.transcript);
    Some(RawMetric::new(
        MetricName::WordsPerMinute,
        words as f64 / minutes,
    ))
}

/// Filler-word rate in filler words per minute, matching tokens against
/// the language's filler lexicon. Same zero-duration policy as
/// [`words_per_minute`].
pub fn filler_word_per_minute(
    attempt: &ExerciseAttempt,
    filler_words: &HashSet<String>,
) -> Option<RawMetric> {
    let minutes = duration_minutes(attempt)?;
    let fillers = tokenize(&attempt.transcript)
        .iter()
        .filter(|token| filler_words.contains(token.as_str()))
        .count();
    Some(RawMetric::new(
        MetricName::FillerWordPerMinute,
        fillers as f64 / minutes,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ExerciseKind;

    fn attempt(transcript: &str, seconds: f64) -> ExerciseAttempt {
        ExerciseAttempt::new(ExerciseKind::Description, transcript, seconds)
    }

    fn fillers(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_words_per_minute_reading_scenario() {
        // 9 tokens over 4.5 seconds.
        let metric = words_per_minute(&attempt(
            "el veloz zorro marron salta sobre el perro perezoso",
            4.5,
        ))
        .unwrap();
        assert!((metric.value - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_words_per_minute_empty_transcript_is_zero() {
        let metric = words_per_minute(&attempt("", 30.0)).unwrap();
        assert_eq!(metric.value, 0.0);
    }

    #[test]
    fn test_words_per_minute_zero_duration_unavailable() {
        assert!(words_per_minute(&attempt("hola mundo", 0.0)).is_none());
    }

    #[test]
    fn test_filler_rate_counts_lexicon_tokens() {
        // "eh" twice and "este" once over 30 seconds: 6 fillers/minute.
        let metric = filler_word_per_minute(
            &attempt("eh bueno yo eh creo este que sí", 30.0),
            &fillers(&["eh", "este", "emm"]),
        )
        .unwrap();
        assert!((metric.value - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_filler_rate_matching_is_case_insensitive() {
        let metric =
            filler_word_per_minute(&attempt("Eh... EH!", 60.0), &fillers(&["eh"])).unwrap();
        assert_eq!(metric.value, 2.0);
    }

    #[test]
    fn test_filler_rate_zero_duration_unavailable() {
        assert!(filler_word_per_minute(&attempt("eh", 0.0), &fillers(&["eh"])).is_none());
    }
}
