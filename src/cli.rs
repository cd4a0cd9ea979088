use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "speechmap")]
#[command(about = "Speech assessment metrics and scoring engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a session from a JSON file of exercise attempts
    Score {
        /// Session input file (session id, language, three attempts)
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory holding parameters.json / filler_words.json
        /// overrides (defaults to the SPEECHMAP_RESOURCES environment
        /// variable, then the compiled-in defaults)
        #[arg(long, env = "SPEECHMAP_RESOURCES")]
        resources: Option<PathBuf>,
    },
    /// Write the default resource files out for customization
    Init {
        /// Directory to write parameters.json and filler_words.json into
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Overwrite existing resource files
        #[arg(long)]
        force: bool,
    },
}
