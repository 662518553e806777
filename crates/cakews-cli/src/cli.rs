//! Command line definition shared between main and library

use std::path::PathBuf;

use anyhow::{Context, Result};
use cakews_core::EngineConfig;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cakews")]
#[command(author, version, about = "Cake script workspace projector", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Discover the scripts of a directory and project them into a workspace
    Init {
        /// Directory containing the entry scripts
        path: PathBuf,

        #[command(flatten)]
        engine: EngineArgs,

        /// Print the context and workspace as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a file is part of the scripts reachable from a directory
    Contains {
        /// Directory containing the entry scripts
        path: PathBuf,

        /// File to look for (relative paths are taken from the directory)
        file: PathBuf,

        #[command(flatten)]
        engine: EngineArgs,
    },
}

/// Engine settings accepted by every command
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// JSON file with engine settings
    #[arg(long)]
    pub engine_config: Option<PathBuf>,

    /// Directory of the engine assemblies (overrides the config file)
    #[arg(long)]
    pub assembly_dir: Option<PathBuf>,

    /// Script extension (overrides the config file)
    #[arg(long)]
    pub extension: Option<String>,
}

impl EngineArgs {
    /// Build the engine configuration: defaults, then the config file, then flags
    ///
    /// # Errors
    /// Returns an error if the config file cannot be loaded.
    pub fn to_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.engine_config {
            Some(path) => EngineConfig::from_json_file(path)
                .with_context(|| format!("loading engine config {}", path.display()))?,
            None => EngineConfig::default(),
        };
        if let Some(dir) = &self.assembly_dir {
            config = config.with_assembly_directory(dir.clone());
        }
        if let Some(extension) = &self.extension {
            config = config.with_extension(extension.clone());
        }
        Ok(config)
    }
}
