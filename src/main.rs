use anyhow::Result;
use clap::Parser;
use speechmap::cli::{Cli, Commands};
use speechmap::commands;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            input,
            output,
            resources,
        } => commands::score::run(commands::score::ScoreConfig {
            input,
            output,
            resources,
        }),
        Commands::Init { dir, force } => commands::init::init_resources(&dir, force),
    }
}
