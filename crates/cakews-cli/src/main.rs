//! cakews: CLI for Cake script workspace projection

use cakews_cli::logging::setup_logging;
use cakews_cli::{commands, Cli, Commands};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Init { path, engine, json } => {
            commands::init::run(&path, &engine.to_config()?, json)?;
        }
        Commands::Contains { path, file, engine } => {
            if !commands::contains::run(&path, &file, &engine.to_config()?)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
