//! `speechmap score`: score a session file and emit the result JSON.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::core::SessionInput;
use crate::resources::ScoringResources;
use crate::scoring::SessionScorer;

pub struct ScoreConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub resources: Option<PathBuf>,
}

pub fn run(config: ScoreConfig) -> Result<()> {
    let contents = fs::read_to_string(&config.input)
        .with_context(|| format!("failed to read session file {}", config.input.display()))?;
    let input: SessionInput = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse session file {}", config.input.display()))?;

    // An explicit resource directory is injected directly; otherwise the
    // process-wide shared cache (and SPEECHMAP_RESOURCES) applies.
    let result = match &config.resources {
        Some(dir) => {
            let resources = ScoringResources::from_dir(dir)?;
            SessionScorer::with_resources(&resources, input.language)
                .score_session(&input.session_id, &input.attempts)?
        }
        None => SessionScorer::shared(input.language)?
            .score_session(&input.session_id, &input.attempts)?,
    };

    let json = serde_json::to_string_pretty(&result)?;
    match &config.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote session result to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
