//! Configuration management for the docdex engine.
//!
//! Loads configuration from TOML files and environment variables
//! with sensible defaults. The corpus and sink paths that the
//! original batch scripts hard-coded as module constants live
//! here instead, as an explicit object handed to the
//! Synchronizer.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{DocdexError, Result};
use crate::core::extract::SummaryPolicy;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub sinks: SinksConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

/// Corpus location and document recognition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Directory holding the source documents
    #[serde(default = "default_corpus_dir")]
    pub dir: PathBuf,

    /// Recognized document extension, leading dot included
    #[serde(default = "default_extension")]
    pub extension: String,
}

/// Sink file locations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SinksConfig {
    /// Primary sink, consumed by the client runtime; the merge
    /// strategy writes only here
    #[serde(default = "default_primary_sink")]
    pub primary: PathBuf,

    /// Mirror sink, consumed by the backend runtime; refreshed
    /// only by full rebuilds
    #[serde(default = "default_mirror_sink")]
    pub mirror: PathBuf,
}

/// Extraction configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExtractionConfig {
    /// Summary policy applied by the record builder
    #[serde(default)]
    pub summary_policy: SummaryPolicy,
}

// Default value functions
fn default_corpus_dir() -> PathBuf {
    PathBuf::from("./notes")
}

fn default_extension() -> String {
    ".md".to_string()
}

fn default_primary_sink() -> PathBuf {
    PathBuf::from("./data/index.json")
}

fn default_mirror_sink() -> PathBuf {
    PathBuf::from("./data/mirror/index.json")
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            dir: default_corpus_dir(),
            extension: default_extension(),
        }
    }
}

impl Default for SinksConfig {
    fn default() -> Self {
        Self {
            primary: default_primary_sink(),
            mirror: default_mirror_sink(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocdexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults.
    ///
    /// File resolution order:
    /// 1. `DOCDEX_CONFIG` env var pointing at a file
    /// 2. XDG config file (`~/.config/docdex/config.toml`)
    /// 3. Legacy `./docdex.toml` in the working directory
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("DOCDEX_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("docdex")
                .join("config.toml");

            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("docdex.toml").exists() {
                Self::from_file("docdex.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(dir) = env::var("DOCDEX_CORPUS_DIR") {
            self.corpus.dir = PathBuf::from(dir);
        }
        if let Ok(extension) = env::var("DOCDEX_EXTENSION") {
            self.corpus.extension = extension;
        }
        if let Ok(primary) = env::var("DOCDEX_PRIMARY_SINK") {
            self.sinks.primary = PathBuf::from(primary);
        }
        if let Ok(mirror) = env::var("DOCDEX_MIRROR_SINK") {
            self.sinks.mirror = PathBuf::from(mirror);
        }
        if let Ok(policy) = env::var("DOCDEX_SUMMARY_POLICY") {
            if let Ok(policy) = policy.parse() {
                self.extraction.summary_policy = policy;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.corpus.extension.is_empty() {
            return Err(DocdexError::ConfigError(
                "Document extension must be non-empty".to_string(),
            ));
        }

        if self.sinks.primary == self.sinks.mirror {
            return Err(DocdexError::ConfigError(
                "Primary and mirror sinks must be distinct paths".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Corpus dir: {:?}", self.corpus.dir);
        tracing::info!("  Extension: {}", self.corpus.extension);
        tracing::info!("  Primary sink: {:?}", self.sinks.primary);
        tracing::info!("  Mirror sink: {:?}", self.sinks.mirror);
        tracing::info!("  Summary policy: {}", self.extraction.summary_policy);
    }
}
