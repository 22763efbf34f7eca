//! Merge command - incremental upsert into the primary sink

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::extract::SummaryPolicy;
use crate::core::sync::Synchronizer;

/// Arguments for the merge command
#[derive(Args, Debug, Default)]
pub struct MergeArgs {
    /// Corpus directory (overrides configuration)
    #[arg(long, short = 'c')]
    pub corpus: Option<PathBuf>,

    /// Primary sink path (overrides configuration)
    #[arg(long)]
    pub primary_sink: Option<PathBuf>,

    /// Recognized document extension, e.g. ".md"
    #[arg(long, short = 'e')]
    pub extension: Option<String>,

    /// Summary extraction policy
    #[arg(long, value_enum)]
    pub summary_policy: Option<SummaryPolicy>,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Merge result response
#[derive(Debug, Serialize)]
pub struct MergeResponse {
    pub corpus: String,
    pub documents_processed: usize,
    pub records_written: usize,
    pub primary_sink: String,
    pub duration_secs: f64,
}

/// Execute the merge command
pub fn execute(
    args: MergeArgs,
    mut config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(corpus) = args.corpus {
        config.corpus.dir = corpus;
    }
    if let Some(primary) = args.primary_sink {
        config.sinks.primary = primary;
    }
    if let Some(extension) = args.extension {
        config.corpus.extension = extension;
    }
    if let Some(policy) = args.summary_policy {
        config.extraction.summary_policy = policy;
    }
    config.validate()?;

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Merging {} into {}...",
            colors::file_path(&config.corpus.dir.display().to_string()),
            colors::file_path(&config.sinks.primary.display().to_string())
        );
    }

    let sync = Synchronizer::new(&config);
    let stats = sync.merge_update()?;

    let response = MergeResponse {
        corpus: config.corpus.dir.display().to_string(),
        documents_processed: stats.documents_processed,
        records_written: stats.records_written,
        primary_sink: config.sinks.primary.display().to_string(),
        duration_secs: stats.duration_ms as f64 / 1000.0,
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} documents; primary sink now holds {} records ({})",
                colors::success("Merged"),
                colors::number(&response.documents_processed.to_string()),
                colors::number(&response.records_written.to_string()),
                colors::number(&format_duration(response.duration_secs))
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
