//! Corpus enumeration and document reads.
//!
//! The corpus is a flat directory of text documents. Two listing
//! orders exist because the two build strategies have different
//! ordering contracts: full rebuilds enumerate in filename-sorted
//! order, incremental merges in glob order. Read errors on
//! individual entries are logged and skipped, never fatal.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::core::error::{DocdexError, Result};
use crate::core::types::Document;

/// A readable corpus of text documents
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,

    /// Document extension including the leading dot, e.g. ".md"
    extension: String,
}

impl Corpus {
    /// Create a corpus rooted at `root`, recognizing files with
    /// the given extension. A missing leading dot is tolerated
    /// and normalized.
    pub fn new(root: impl Into<PathBuf>, extension: &str) -> Self {
        let extension = if extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{extension}")
        };

        Self {
            root: root.into(),
            extension,
        }
    }

    /// Root directory of the corpus
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_document(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(&self.extension))
            .unwrap_or(false)
    }

    fn ensure_root(&self) -> Result<()> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(DocdexError::CorpusNotFound(
                self.root.display().to_string(),
            ))
        }
    }

    /// List document paths in filename-sorted order.
    ///
    /// Used by full rebuilds, whose output ordering contract is
    /// "corpus sort order". Only the top level of the corpus
    /// directory is considered.
    pub fn list_sorted(&self) -> Result<Vec<PathBuf>> {
        self.ensure_root()?;

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() && self.is_document(entry.path()) {
                        files.push(entry.path().to_path_buf());
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    // Continue listing despite errors
                }
            }
        }

        Ok(files)
    }

    /// List document paths in glob order.
    ///
    /// Used by incremental merges. Glob order is not guaranteed
    /// to be sorted; the merge output ordering comes from the
    /// existing index, not from this listing.
    pub fn list_glob(&self) -> Result<Vec<PathBuf>> {
        self.ensure_root()?;

        let pattern = format!("{}/*{}", self.root.display(), self.extension);

        let mut files = Vec::new();
        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) => {
                    if path.is_file() {
                        files.push(path);
                    }
                }
                Err(e) => {
                    tracing::warn!("Glob error: {}", e);
                }
            }
        }

        Ok(files)
    }

    /// Read one document. The file name (not the path) becomes
    /// the record identity.
    pub fn read_document(&self, path: &Path) -> Result<Document> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                DocdexError::DocumentRead(format!("Non-UTF-8 filename: {}", path.display()))
            })?
            .to_string();

        let body = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                DocdexError::DocumentRead(format!("Non-UTF-8 content in {}", path.display()))
            } else {
                DocdexError::DocumentRead(format!("Failed to read {}: {e}", path.display()))
            }
        })?;

        Ok(Document { filename, body })
    }
}
