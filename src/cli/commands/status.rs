//! Status command - inspect sink files and their divergence

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;

use crate::cli::output::{colors, format_bytes, format_relative_time};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::index::Index;

/// Arguments for the status command
#[derive(Args, Debug, Default)]
pub struct StatusArgs {}

/// State of one sink file
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SinkState {
    /// Readable and parseable
    Ok,
    /// File does not exist
    Absent,
    /// File exists but does not parse as an index
    Corrupt,
}

/// Inspection result for one sink
#[derive(Debug, Serialize)]
pub struct SinkStatus {
    pub path: String,
    pub state: SinkState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

/// Status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub primary: SinkStatus,
    pub mirror: SinkStatus,
    /// True when both sinks parse and hold the same filename set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_sync: Option<bool>,
}

fn inspect_sink(path: &Path) -> (SinkStatus, Option<BTreeSet<String>>) {
    if !path.exists() {
        return (
            SinkStatus {
                path: path.display().to_string(),
                state: SinkState::Absent,
                records: None,
                size_bytes: None,
                modified_at: None,
            },
            None,
        );
    }

    let size_bytes = fs::metadata(path).ok().map(|m| m.len());
    let modified_at = fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Utc>::from);

    match Index::load(path) {
        Ok(index) => {
            let filenames: BTreeSet<String> = index
                .records()
                .iter()
                .map(|r| r.filename.clone())
                .collect();
            (
                SinkStatus {
                    path: path.display().to_string(),
                    state: SinkState::Ok,
                    records: Some(index.len()),
                    size_bytes,
                    modified_at,
                },
                Some(filenames),
            )
        }
        Err(_) => (
            SinkStatus {
                path: path.display().to_string(),
                state: SinkState::Corrupt,
                records: None,
                size_bytes,
                modified_at,
            },
            None,
        ),
    }
}

fn print_sink(label: &str, status: &SinkStatus) {
    println!("{}", colors::label(label));
    println!("  Path: {}", colors::file_path(&status.path));
    match status.state {
        SinkState::Ok => {
            println!(
                "  Records: {}",
                colors::number(&status.records.unwrap_or(0).to_string())
            );
            if let Some(size) = status.size_bytes {
                println!("  Size: {}", colors::number(&format_bytes(size)));
            }
            if let Some(modified) = &status.modified_at {
                println!("  Updated: {}", colors::dim(&format_relative_time(modified)));
            }
        }
        SinkState::Absent => println!("  State: {}", colors::dim("absent")),
        SinkState::Corrupt => println!("  State: {}", colors::error("corrupt")),
    }
}

/// Execute the status command
pub fn execute(
    _args: StatusArgs,
    config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let (primary, primary_keys) = inspect_sink(&config.sinks.primary);
    let (mirror, mirror_keys) = inspect_sink(&config.sinks.mirror);

    let in_sync = match (&primary_keys, &mirror_keys) {
        (Some(p), Some(m)) => Some(p == m),
        _ => None,
    };

    let response = StatusResponse {
        primary,
        mirror,
        in_sync,
    };

    match format {
        OutputFormat::Human => {
            print_sink("Primary sink", &response.primary);
            print_sink("Mirror sink", &response.mirror);
            match response.in_sync {
                Some(true) => println!("{}", colors::success("Sinks are in sync")),
                Some(false) => println!(
                    "{}",
                    colors::warning("Sinks have diverged; run a rebuild to reconcile")
                ),
                None => println!("{}", colors::dim("Sync state unknown")),
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
