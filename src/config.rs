//! Resource file schema: metric targets, dimension weights, and the
//! filler-word lexicon.
//!
//! Two JSON files configure the engine:
//!
//! - `parameters.json` — per-metric normalization policy plus the
//!   dimension-to-metric weight table;
//! - `filler_words.json` — per-language filler word lists.
//!
//! Parsing and validation are pure functions over the file contents;
//! file discovery and caching live in [`crate::resources`]. Default
//! copies of both files are compiled into the binary, so the engine is
//! usable with no resource directory at all.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::core::{Language, MetricName};
use crate::errors::ScoreError;

/// Default resource files, compiled in. `speechmap init` writes these
/// out for customization.
pub const DEFAULT_PARAMETERS_JSON: &str = include_str!("../resources/parameters.json");
pub const DEFAULT_FILLER_WORDS_JSON: &str = include_str!("../resources/filler_words.json");

/// How a raw metric value maps onto the common 0-100 scale.
///
/// A tagged variant per policy kind: adding a metric with an existing
/// policy shape is a configuration change, not a code change.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum NormalizationPolicy {
    /// 100 inside `[ideal_min, ideal_max]`, decaying linearly to 0 at
    /// the outer bounds; values beyond the outer bounds clamp to 0.
    TargetRange {
        min_value: f64,
        ideal_min: f64,
        ideal_max: f64,
        max_value: f64,
    },
    /// 0 at `floor`, 100 at `ceiling`, linear in between, clamped
    /// outside.
    MonotonicIncreasing { floor: f64, ceiling: f64 },
    /// 100 at `floor`, 0 at `ceiling`, linear in between, clamped
    /// outside.
    MonotonicDecreasing { floor: f64, ceiling: f64 },
}

impl NormalizationPolicy {
    fn validate(&self) -> Result<(), String> {
        match *self {
            Self::TargetRange {
                min_value,
                ideal_min,
                ideal_max,
                max_value,
            } => {
                if !(min_value <= ideal_min && ideal_min <= ideal_max && ideal_max <= max_value) {
                    return Err(format!(
                        "target_range bounds must satisfy min <= ideal_min <= ideal_max <= max \
                         (got {min_value}, {ideal_min}, {ideal_max}, {max_value})"
                    ));
                }
                if min_value >= max_value {
                    return Err(format!(
                        "target_range requires min_value < max_value (got {min_value}, {max_value})"
                    ));
                }
                Ok(())
            }
            Self::MonotonicIncreasing { floor, ceiling }
            | Self::MonotonicDecreasing { floor, ceiling } => {
                if floor >= ceiling {
                    Err(format!(
                        "monotonic policy requires floor < ceiling (got {floor}, {ceiling})"
                    ))
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Contents of `parameters.json`: normalization targets per metric and
/// the dimension weight table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Parameters {
    pub metrics: BTreeMap<MetricName, NormalizationPolicy>,
    pub dimensions: BTreeMap<String, BTreeMap<MetricName, f64>>,
}

impl Parameters {
    /// Schema validation beyond what serde enforces: ordered policy
    /// bounds, finite non-negative weights, and no dimension whose
    /// metrics are all missing a target.
    pub fn validate(&self) -> Result<(), ScoreError> {
        for (metric, policy) in &self.metrics {
            policy
                .validate()
                .map_err(|e| ScoreError::config(format!("metric {metric}: {e}")))?;
        }
        for (dimension, weights) in &self.dimensions {
            if weights.is_empty() {
                return Err(ScoreError::config(format!(
                    "dimension {dimension} has no metrics configured"
                )));
            }
            for (metric, weight) in weights {
                if !weight.is_finite() || *weight < 0.0 {
                    return Err(ScoreError::config(format!(
                        "dimension {dimension}: weight for {metric} must be finite and \
                         non-negative (got {weight})"
                    )));
                }
                if !self.metrics.contains_key(metric) {
                    return Err(ScoreError::config(format!(
                        "dimension {dimension} references metric {metric} with no target \
                         specification"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Parse and validate `parameters.json` contents.
pub fn parse_parameters(contents: &str) -> Result<Parameters, ScoreError> {
    let parameters: Parameters = serde_json::from_str(contents)
        .map_err(|e| ScoreError::config(format!("failed to parse parameters.json: {e}")))?;
    parameters.validate()?;
    Ok(parameters)
}

/// The filler-word lexicon, keyed by language, with words normalized to
/// lowercase for token matching.
#[derive(Clone, Debug, Default)]
pub struct FillerLexicon {
    by_language: HashMap<Language, HashSet<String>>,
}

impl FillerLexicon {
    pub fn words(&self, language: Language) -> Option<&HashSet<String>> {
        self.by_language.get(&language)
    }
}

/// Accepted shapes of `filler_words.json`. The per-language object is
/// canonical; the bare list and the `{"filler_words": [...]}` wrapper
/// are the legacy single-language shapes, treated as Spanish.
#[derive(Deserialize)]
#[serde(untagged)]
enum FillerWordsFile {
    Wrapped { filler_words: Vec<String> },
    ByLanguage(BTreeMap<String, Vec<String>>),
    Flat(Vec<String>),
}

fn normalize_words(words: &[String]) -> HashSet<String> {
    words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Parse and validate `filler_words.json` contents.
pub fn parse_filler_words(contents: &str) -> Result<FillerLexicon, ScoreError> {
    let file: FillerWordsFile = serde_json::from_str(contents).map_err(|e| {
        ScoreError::config(format!("failed to parse filler_words.json: {e}"))
    })?;

    let mut by_language = HashMap::new();
    match file {
        FillerWordsFile::Wrapped { filler_words } => {
            by_language.insert(Language::Spanish, normalize_words(&filler_words));
        }
        FillerWordsFile::Flat(words) => {
            by_language.insert(Language::Spanish, normalize_words(&words));
        }
        FillerWordsFile::ByLanguage(map) => {
            for (code, words) in map {
                let language = Language::from_code(&code).map_err(|_| {
                    ScoreError::config(format!(
                        "filler_words.json has unknown language key: {code}"
                    ))
                })?;
                by_language.insert(language, normalize_words(&words));
            }
        }
    }

    if by_language.values().all(|set| set.is_empty()) {
        return Err(ScoreError::config(
            "filler_words.json contains no usable filler words",
        ));
    }

    Ok(FillerLexicon { by_language })
}
