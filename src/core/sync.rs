//! Synchronization strategies.
//!
//! Coordinates the end-to-end batch run for both build
//! strategies:
//!
//! 1. Enumerate the corpus (sorted for rebuilds, glob order for
//!    merges)
//! 2. Read each document and build its record
//! 3. Persist the resulting index to the configured sink(s)
//!
//! A full rebuild overwrites every sink and is the only operation
//! that refreshes the mirror. An incremental merge upserts into
//! the primary sink only, never prunes stale records, and leaves
//! the mirror alone; callers wanting mirror consistency run a
//! rebuild.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::core::config::Config;
use crate::core::corpus::Corpus;
use crate::core::error::{DocdexError, Result};
use crate::core::extract::RecordBuilder;
use crate::core::index::Index;
use crate::core::types::SyncStats;

/// Orchestrates corpus enumeration, record building and sink
/// writes for one run.
pub struct Synchronizer {
    corpus: Corpus,
    builder: RecordBuilder,
    primary_sink: PathBuf,
    mirror_sink: PathBuf,
}

impl Synchronizer {
    /// Create a synchronizer from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            corpus: Corpus::new(&config.corpus.dir, &config.corpus.extension),
            builder: RecordBuilder::new(config.extraction.summary_policy),
            primary_sink: config.sinks.primary.clone(),
            mirror_sink: config.sinks.mirror.clone(),
        }
    }

    /// Primary sink path
    pub fn primary_sink(&self) -> &Path {
        &self.primary_sink
    }

    /// Mirror sink path
    pub fn mirror_sink(&self) -> &Path {
        &self.mirror_sink
    }

    /// Full rebuild: recompute every record and overwrite every
    /// sink.
    ///
    /// Documents are enumerated in filename-sorted order, so the
    /// output is stable for a fixed corpus. After a successful
    /// run all sinks are byte-for-byte identical and exactly
    /// reflect the current corpus.
    pub fn rebuild(&self) -> Result<SyncStats> {
        let start = Instant::now();

        let paths = self.corpus.list_sorted()?;
        tracing::info!(
            "Rebuilding index from {} documents in {:?}",
            paths.len(),
            self.corpus.root()
        );

        let mut index = Index::new();
        let processed = self.ingest(&paths, &mut index);

        let sinks = [&self.primary_sink, &self.mirror_sink];
        for sink in sinks {
            index.write(sink)?;
            tracing::debug!("Wrote {} records to {:?}", index.len(), sink);
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            "Rebuild complete: {} documents, {} sinks in {}ms",
            processed,
            sinks.len(),
            duration_ms
        );

        Ok(SyncStats {
            documents_processed: processed,
            records_written: index.len(),
            sinks_written: sinks.len(),
            duration_ms,
        })
    }

    /// Incremental merge: upsert fresh records into the primary
    /// sink's existing index.
    ///
    /// Stale records (documents deleted from the corpus) are
    /// retained. The mirror sink is never touched and may
    /// diverge from the primary until the next rebuild.
    pub fn merge_update(&self) -> Result<SyncStats> {
        let start = Instant::now();

        let paths = self.corpus.list_glob()?;
        let mut index = self.load_primary()?;
        tracing::info!(
            "Merging {} documents into an index of {} records",
            paths.len(),
            index.len()
        );

        let processed = self.ingest(&paths, &mut index);

        index.write(&self.primary_sink)?;

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            "Merge complete: {} documents, index now holds {} records ({}ms)",
            processed,
            index.len(),
            duration_ms
        );

        Ok(SyncStats {
            documents_processed: processed,
            records_written: index.len(),
            sinks_written: 1,
            duration_ms,
        })
    }

    /// Read and upsert each document, skipping unreadable ones
    /// with a warning. Returns the number processed.
    fn ingest(&self, paths: &[PathBuf], index: &mut Index) -> usize {
        let mut processed = 0;

        for path in paths {
            match self.corpus.read_document(path) {
                Ok(doc) => {
                    index.upsert(self.builder.build(&doc));
                    processed += 1;
                }
                Err(e) => {
                    tracing::warn!("Skipping {:?}: {}", path, e);
                    // Continue processing other documents
                }
            }
        }

        processed
    }

    /// Load the primary sink for a merge. An absent sink or one
    /// that fails to parse degrades to an empty index, which
    /// makes the merge repopulate every currently-present
    /// document; other read failures propagate.
    fn load_primary(&self) -> Result<Index> {
        if !self.primary_sink.exists() {
            tracing::debug!(
                "Primary sink {:?} absent; starting from an empty index",
                self.primary_sink
            );
            return Ok(Index::new());
        }

        match Index::load(&self.primary_sink) {
            Ok(index) => Ok(index),
            Err(DocdexError::SinkParse(msg)) => {
                tracing::warn!(
                    "Discarding unparseable primary sink ({}); \
                     rebuilding all current documents",
                    msg
                );
                Ok(Index::new())
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn test_config(root: &Path) -> Config {
        let mut config = Config::default();
        config.corpus.dir = root.join("notes");
        config.sinks.primary = root.join("data/index.json");
        config.sinks.mirror = root.join("mirror/index.json");
        config
    }

    fn write_corpus(root: &Path, files: &[(&str, &str)]) {
        let notes = root.join("notes");
        fs::create_dir_all(&notes).unwrap();
        for (name, content) in files {
            fs::write(notes.join(name), content).unwrap();
        }
    }

    #[test]
    fn test_rebuild_writes_both_sinks() {
        let dir = TempDir::new().unwrap();
        write_corpus(dir.path(), &[("a.md", "# A\n\nText one. Text two.\n")]);
        let config = test_config(dir.path());

        let stats = Synchronizer::new(&config).rebuild().unwrap();

        assert_eq!(stats.documents_processed, 1);
        assert_eq!(stats.records_written, 1);
        assert_eq!(stats.sinks_written, 2);
        assert!(config.sinks.primary.exists());
        assert!(config.sinks.mirror.exists());
    }

    #[test]
    fn test_rebuild_sorted_record_order() {
        let dir = TempDir::new().unwrap();
        write_corpus(
            dir.path(),
            &[("zeta.md", "z\n"), ("alpha.md", "a\n"), ("mike.md", "m\n")],
        );
        let config = test_config(dir.path());

        Synchronizer::new(&config).rebuild().unwrap();

        let index = Index::load(&config.sinks.primary).unwrap();
        let names: Vec<&str> = index.records().iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["alpha.md", "mike.md", "zeta.md"]);
    }

    #[test]
    fn test_rebuild_missing_corpus_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path()); // notes/ never created

        let result = Synchronizer::new(&config).rebuild();
        assert!(matches!(result, Err(DocdexError::CorpusNotFound(_))));
        assert!(!config.sinks.primary.exists());
    }

    #[test]
    fn test_merge_writes_primary_only() {
        let dir = TempDir::new().unwrap();
        write_corpus(dir.path(), &[("a.md", "# A\n\nBody.\n")]);
        let config = test_config(dir.path());

        let stats = Synchronizer::new(&config).merge_update().unwrap();

        assert_eq!(stats.sinks_written, 1);
        assert!(config.sinks.primary.exists());
        assert!(!config.sinks.mirror.exists());
    }

    #[test]
    fn test_merge_upsert_preserves_position() {
        let dir = TempDir::new().unwrap();
        write_corpus(dir.path(), &[("a.md", "old a\n"), ("b.md", "old b\n")]);
        let config = test_config(dir.path());
        let sync = Synchronizer::new(&config);

        sync.rebuild().unwrap();

        // Update a.md; its record must keep the first position.
        fs::write(dir.path().join("notes/a.md"), "# Fresh A\n\nNew body.\n").unwrap();
        sync.merge_update().unwrap();

        let index = Index::load(&config.sinks.primary).unwrap();
        assert_eq!(index.records()[0].filename, "a.md");
        assert_eq!(index.records()[0].title, "Fresh A");
        assert_eq!(index.records()[1].filename, "b.md");
    }

    #[test]
    fn test_merge_degrades_on_corrupt_primary() {
        let dir = TempDir::new().unwrap();
        write_corpus(dir.path(), &[("a.md", "# A\n\nBody text here.\n")]);
        let config = test_config(dir.path());

        fs::create_dir_all(config.sinks.primary.parent().unwrap()).unwrap();
        fs::write(&config.sinks.primary, "]]]] not json").unwrap();

        let stats = Synchronizer::new(&config).merge_update().unwrap();
        assert_eq!(stats.records_written, 1);

        let index = Index::load(&config.sinks.primary).unwrap();
        assert_eq!(index.records()[0].filename, "a.md");
    }

    #[test]
    fn test_merge_skips_unreadable_document() {
        let dir = TempDir::new().unwrap();
        write_corpus(dir.path(), &[("good.md", "fine\n")]);
        // Invalid UTF-8 payload under the recognized extension.
        fs::write(dir.path().join("notes/bad.md"), [0xff, 0xfe, 0x00, 0x41]).unwrap();
        let config = test_config(dir.path());

        let stats = Synchronizer::new(&config).merge_update().unwrap();

        assert_eq!(stats.documents_processed, 1);
        let index = Index::load(&config.sinks.primary).unwrap();
        assert!(index.get("good.md").is_some());
        assert!(index.get("bad.md").is_none());
    }

    #[test]
    fn test_empty_corpus_rebuild() {
        let dir = TempDir::new().unwrap();
        write_corpus(dir.path(), &[]);
        let config = test_config(dir.path());

        let stats = Synchronizer::new(&config).rebuild().unwrap();
        assert_eq!(stats.documents_processed, 0);
        assert!(Index::load(&config.sinks.primary).unwrap().is_empty());
    }
}
