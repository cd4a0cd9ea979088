//! `speechmap init`: materialize the default resource files so they can
//! be customized and pointed at with `--resources` or
//! `SPEECHMAP_RESOURCES`.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::config::{DEFAULT_FILLER_WORDS_JSON, DEFAULT_PARAMETERS_JSON};
use crate::resources::{FILLER_WORDS_FILE, PARAMETERS_FILE};

pub fn init_resources(dir: &Path, force: bool) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;

    for (file, contents) in [
        (PARAMETERS_FILE, DEFAULT_PARAMETERS_JSON),
        (FILLER_WORDS_FILE, DEFAULT_FILLER_WORDS_JSON),
    ] {
        let path = dir.join(file);
        if path.exists() && !force {
            bail!(
                "{} already exists (use --force to overwrite)",
                path.display()
            );
        }
        fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Created {}", path.display());
    }
    Ok(())
}
