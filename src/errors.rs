//! Error types for session scoring.
//!
//! Two failure classes escape the engine: configuration failures (the
//! lexicon or target tables cannot be loaded or fail schema validation)
//! and input validation failures (a structurally invalid session handed
//! to the scorer). Both abort the whole scoring call.
//!
//! A metric that cannot be computed for a given attempt (missing
//! reference text, zero duration) is *not* an error: calculators return
//! `Option` and aggregation excludes the absent metric. That absence
//! never surfaces to callers.

use thiserror::Error;

/// Error type for scoring operations.
///
/// `Config` is fatal and not retried: the same error is returned to every
/// caller for the lifetime of the process once the resource cache has
/// recorded it. `Validation` rejects a single session before any
/// computation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Resource files failed to load or failed schema validation.
    #[error("configuration error: {message}")]
    Config { message: String },
    /// The session input is structurally invalid.
    #[error("validation error: {message}")]
    Validation { message: String },
}

impl ScoreError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get the error message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Config { message } => message,
            Self::Validation { message } => message,
        }
    }

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } => "Config",
            Self::Validation { .. } => "Validation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_creation() {
        let err = ScoreError::config("parameters.json missing");
        assert_eq!(err.message(), "parameters.json missing");
        assert_eq!(err.category(), "Config");
        assert!(err.to_string().contains("configuration error"));
    }

    #[test]
    fn test_validation_error_creation() {
        let err = ScoreError::validation("negative duration");
        assert_eq!(err.message(), "negative duration");
        assert_eq!(err.category(), "Validation");
        assert!(err.to_string().contains("validation error"));
    }
}
