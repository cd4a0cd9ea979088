//! Core data model for session scoring.
//!
//! These are plain value types: an [`ExerciseAttempt`] per completed
//! exercise, [`ScoredMetric`]s produced by normalization, [`Dimension`]s
//! produced by aggregation, and the final [`SessionResult`]. All maps are
//! `BTreeMap` so serialization order is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::ScoreError;

/// Language of a session. Selects the filler-word lexicon; tokenization
/// itself is language-neutral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Parse an ISO 639-1 style code.
    pub fn from_code(code: &str) -> Result<Self, ScoreError> {
        match code {
            "es" => Ok(Self::Spanish),
            "en" => Ok(Self::English),
            other => Err(ScoreError::validation(format!(
                "unknown language code: {other}"
            ))),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Spanish => "es",
            Self::English => "en",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::Spanish
    }
}

/// The three exercise kinds of an assessment session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    Reading,
    Description,
    Question,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 3] = [Self::Reading, Self::Description, Self::Question];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reading => "reading",
            Self::Description => "description",
            Self::Question => "question",
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completed exercise within a session: the transcript returned by
/// the external speech-to-text service plus the spoken duration.
/// Reading exercises additionally carry the prompt the speaker read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExerciseAttempt {
    pub kind: ExerciseKind,
    pub transcript: String,
    #[serde(default)]
    pub reference_text: Option<String>,
    pub audio_duration_seconds: f64,
}

impl ExerciseAttempt {
    pub fn new(kind: ExerciseKind, transcript: impl Into<String>, duration_seconds: f64) -> Self {
        Self {
            kind,
            transcript: transcript.into(),
            reference_text: None,
            audio_duration_seconds: duration_seconds,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference_text = Some(reference.into());
        self
    }

    /// Structural validation, run before any metric computation.
    ///
    /// A duration of exactly zero is valid (the per-minute metrics become
    /// unavailable for the attempt); negative or non-finite durations are
    /// rejected, never clamped.
    pub fn validate(&self) -> Result<(), ScoreError> {
        if !self.audio_duration_seconds.is_finite() {
            return Err(ScoreError::validation(format!(
                "{} attempt has non-finite audio duration",
                self.kind
            )));
        }
        if self.audio_duration_seconds < 0.0 {
            return Err(ScoreError::validation(format!(
                "{} attempt has negative audio duration: {}",
                self.kind, self.audio_duration_seconds
            )));
        }
        Ok(())
    }
}

/// Names of the metrics the engine computes. The snake_case string forms
/// are the stable keys used in resource files and JSON output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricName {
    TranscriptionPrecision,
    WordsPerMinute,
    FillerWordPerMinute,
    LexicalVariability,
}

impl MetricName {
    pub const ALL: [MetricName; 4] = [
        Self::TranscriptionPrecision,
        Self::WordsPerMinute,
        Self::FillerWordPerMinute,
        Self::LexicalVariability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TranscriptionPrecision => "transcription_precision",
            Self::WordsPerMinute => "words_per_minute",
            Self::FillerWordPerMinute => "filler_word_per_minute",
            Self::LexicalVariability => "lexical_variability",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw metric value as produced by one calculator, before
/// normalization. The unit is implicit per metric (ratio, words/minute).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawMetric {
    pub name: MetricName,
    pub value: f64,
}

impl RawMetric {
    pub fn new(name: MetricName, value: f64) -> Self {
        Self { name, value }
    }
}

/// A metric after normalization: the raw value alongside its 0-100 score.
/// The metric name is carried as the key of the map that holds it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredMetric {
    pub raw: f64,
    pub score: f64,
}

/// A named speech-quality axis with its weighted score and the metric
/// breakdown that produced it. `feedback` is opaque text owned by an
/// external collaborator; the engine emits it verbatim (empty by
/// default).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub score: f64,
    #[serde(default)]
    pub feedback: String,
    pub metrics: BTreeMap<String, ScoredMetric>,
}

impl Dimension {
    /// Attach the externally generated feedback text for this dimension.
    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = feedback.into();
        self
    }
}

/// The final result for one session, shaped to be embeddable in a JSON
/// API response. Dimensions are sorted by name; a dimension that could
/// not be computed for any attempt is omitted entirely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    pub session_id: String,
    #[serde(rename = "overallScore")]
    pub overall_score: f64,
    pub dimensions: Vec<Dimension>,
}

/// Input file shape consumed by the CLI: a session id, a language, and
/// the three exercise attempts.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionInput {
    pub session_id: String,
    #[serde(default)]
    pub language: Language,
    pub attempts: Vec<ExerciseAttempt>,
}
