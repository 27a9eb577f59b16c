//! CLI for the mprep model asset toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mprep_core::config;
use std::path::PathBuf;

use commands::{run_checksum, run_extract, run_fetch, run_verify};

/// Top-level CLI for mprep.
#[derive(Debug, Parser)]
#[command(name = "mprep")]
#[command(about = "mprep: prepare LLM model assets for mobile app bundling", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download the model, tokenizer and config files into the assets directory.
    Fetch {
        /// Project root holding the assets directory (default: current dir).
        #[arg(long)]
        project_root: Option<PathBuf>,
    },

    /// Copy the model weights out of a local Ollama store into the assets directory.
    Extract {
        /// Project root holding the assets directory (default: current dir).
        #[arg(long)]
        project_root: Option<PathBuf>,
    },

    /// Check the asset bundle and companion sources; non-zero exit when incomplete.
    Verify {
        /// Project root holding the assets directory (default: current dir).
        #[arg(long)]
        project_root: Option<PathBuf>,
    },

    /// Compute SHA-256 of a file (e.g. a downloaded model).
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { project_root } => run_fetch(&cfg, &root_or_cwd(project_root)?),
            CliCommand::Extract { project_root } => run_extract(&cfg, &root_or_cwd(project_root)?),
            CliCommand::Verify { project_root } => run_verify(&cfg, &root_or_cwd(project_root)?),
            CliCommand::Checksum { path } => run_checksum(&path),
        }
    }
}

fn root_or_cwd(project_root: Option<PathBuf>) -> Result<PathBuf> {
    match project_root {
        Some(root) => Ok(root),
        None => Ok(std::env::current_dir()?),
    }
}

#[cfg(test)]
mod tests;
