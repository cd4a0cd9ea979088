//! Shared lexicon resources and their process-wide cache.
//!
//! [`ScoringResources`] bundles the validated metric targets, dimension
//! weights, and filler lexicon. [`shared_resources`] is the lazy global
//! accessor: the first caller (no matter how many arrive concurrently)
//! performs exactly one load, every caller observes the completed
//! result, and reads after initialization take no lock. A failed load is
//! cached too — the same configuration error is returned for the
//! lifetime of the process instead of re-reading broken files per call.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::config::{
    self, FillerLexicon, NormalizationPolicy, Parameters, DEFAULT_FILLER_WORDS_JSON,
    DEFAULT_PARAMETERS_JSON,
};
use crate::core::{Language, MetricName};
use crate::errors::ScoreError;

pub const PARAMETERS_FILE: &str = "parameters.json";
pub const FILLER_WORDS_FILE: &str = "filler_words.json";

/// Environment variable naming a directory to load resource files from.
pub const RESOURCES_ENV: &str = "SPEECHMAP_RESOURCES";

/// Loaded and validated reference data, safe for concurrent reads.
#[derive(Clone, Debug)]
pub struct ScoringResources {
    parameters: Parameters,
    fillers: FillerLexicon,
}

impl ScoringResources {
    /// Build from the compiled-in default resource files.
    pub fn from_defaults() -> Result<Self, ScoreError> {
        Ok(Self {
            parameters: config::parse_parameters(DEFAULT_PARAMETERS_JSON)?,
            fillers: config::parse_filler_words(DEFAULT_FILLER_WORDS_JSON)?,
        })
    }

    /// Build from a resource directory. A file missing from the
    /// directory falls back to its compiled-in default; a file that is
    /// present but unreadable or malformed is fatal.
    pub fn from_dir(dir: &Path) -> Result<Self, ScoreError> {
        let parameters_json = read_or_default(&dir.join(PARAMETERS_FILE), DEFAULT_PARAMETERS_JSON)?;
        let filler_json = read_or_default(&dir.join(FILLER_WORDS_FILE), DEFAULT_FILLER_WORDS_JSON)?;
        Ok(Self {
            parameters: config::parse_parameters(&parameters_json)?,
            fillers: config::parse_filler_words(&filler_json)?,
        })
    }

    /// Target specification for a metric, if configured.
    pub fn target(&self, metric: MetricName) -> Option<&NormalizationPolicy> {
        self.parameters.metrics.get(&metric)
    }

    /// The dimension-to-metric weight table.
    pub fn dimension_weights(&self) -> &BTreeMap<String, BTreeMap<MetricName, f64>> {
        &self.parameters.dimensions
    }

    /// Filler words for a language, if the lexicon covers it.
    pub fn filler_words(&self, language: Language) -> Option<&HashSet<String>> {
        self.fillers.words(language)
    }
}

fn read_or_default(path: &Path, default: &str) -> Result<String, ScoreError> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            log::debug!("loaded resource file {}", path.display());
            Ok(contents)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!(
                "resource file {} not found, using compiled-in default",
                path.display()
            );
            Ok(default.to_string())
        }
        Err(e) => Err(ScoreError::config(format!(
            "failed to read {}: {e}",
            path.display()
        ))),
    }
}

static RESOURCES: OnceLock<Result<ScoringResources, ScoreError>> = OnceLock::new();

/// Process-wide shared resources, loaded lazily on first use.
///
/// Honors the `SPEECHMAP_RESOURCES` environment variable at first call;
/// afterwards the cached result (success or failure) is returned
/// unconditionally.
pub fn shared_resources() -> Result<&'static ScoringResources, ScoreError> {
    let slot = RESOURCES.get_or_init(|| {
        let loaded = match std::env::var_os(RESOURCES_ENV) {
            Some(dir) => ScoringResources::from_dir(Path::new(&dir)),
            None => ScoringResources::from_defaults(),
        };
        if let Err(ref e) = loaded {
            log::warn!("resource load failed: {e}");
        }
        loaded
    });
    match slot {
        Ok(resources) => Ok(resources),
        Err(e) => Err(e.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_defaults_loads() {
        let resources = ScoringResources::from_defaults().unwrap();
        assert!(resources.target(MetricName::WordsPerMinute).is_some());
        assert!(resources.filler_words(Language::Spanish).is_some());
        assert_eq!(resources.dimension_weights().len(), 3);
    }

    #[test]
    fn test_shared_resources_is_stable_across_calls() {
        let first = shared_resources().unwrap() as *const ScoringResources;
        let second = shared_resources().unwrap() as *const ScoringResources;
        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_first_use_yields_one_instance() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| shared_resources().unwrap() as *const ScoringResources as usize)
            })
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }
}
