// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod metrics;
pub mod resources;
pub mod scoring;
pub mod text;

// Re-export commonly used types
pub use crate::core::{
    Dimension, ExerciseAttempt, ExerciseKind, Language, MetricName, RawMetric, ScoredMetric,
    SessionInput, SessionResult,
};

pub use crate::config::{NormalizationPolicy, Parameters};
pub use crate::errors::ScoreError;
pub use crate::resources::{shared_resources, ScoringResources};
pub use crate::scoring::{aggregate, normalize, SessionScorer};
pub use crate::text::tokenize;
