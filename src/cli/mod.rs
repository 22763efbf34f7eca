//! CLI adapter for docdex
//!
//! Provides the command-line interface over the core
//! synchronization engine. This module depends on `core/` but
//! never the other way around.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use crate::core::config::Config;

/// docdex - Document Index Synchronization Engine
///
/// Turns a directory of markdown research notes into a structured
/// JSON index and keeps the primary and mirror copies of that
/// index in sync with the corpus.
#[derive(Parser, Debug)]
#[command(name = "docdex")]
#[command(version)]
#[command(about = "Document index synchronization engine", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rebuild the whole index from the corpus and overwrite
    /// every sink
    Rebuild(commands::RebuildArgs),

    /// Upsert freshly extracted records into the primary sink
    /// (stale records are retained, the mirror is untouched)
    Merge(commands::MergeArgs),

    /// Inspect the sinks: record counts, sizes, divergence
    Status(commands::StatusArgs),

    /// Show current configuration
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  docdex completions bash > ~/.local/share/bash-completion/completions/docdex
    ///   zsh:   docdex completions zsh > ~/.zfunc/_docdex
    ///   fish:  docdex completions fish > ~/.config/fish/completions/docdex.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Handle completions early (doesn't need configuration)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration
    let config = Config::load()?;

    // Execute command
    match cli.command {
        Commands::Rebuild(args) => commands::rebuild::execute(args, config, cli.format),
        Commands::Merge(args) => commands::merge::execute(args, config, cli.format),
        Commands::Status(args) => commands::status::execute(args, config, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, config, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
