//! Show-config command - display the effective configuration

use clap::Args;
use serde::Serialize;

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;

/// Arguments for the show-config command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {}

/// Effective configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub corpus_dir: String,
    pub extension: String,
    pub primary_sink: String,
    pub mirror_sink: String,
    pub summary_policy: String,
}

/// Execute the show-config command
pub fn execute(
    _args: ConfigArgs,
    config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse {
        corpus_dir: config.corpus.dir.display().to_string(),
        extension: config.corpus.extension.clone(),
        primary_sink: config.sinks.primary.display().to_string(),
        mirror_sink: config.sinks.mirror.display().to_string(),
        summary_policy: config.extraction.summary_policy.to_string(),
    };

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label("Configuration"));
            println!("  Corpus: {}", colors::file_path(&response.corpus_dir));
            println!("  Extension: {}", response.extension);
            println!(
                "  Primary sink: {}",
                colors::file_path(&response.primary_sink)
            );
            println!(
                "  Mirror sink: {}",
                colors::file_path(&response.mirror_sink)
            );
            println!("  Summary policy: {}", response.summary_policy);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
