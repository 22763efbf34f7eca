//! The index: an order-preserving keyed collection of records.
//!
//! Records are keyed by filename. Upserting an existing key
//! replaces the record in place, keeping its position; new keys
//! are appended. That ordering contract is what makes merge
//! output stable across runs, so it is explicit here rather than
//! an accident of a map implementation.
//!
//! Persistence is a pretty-printed JSON array of records, the
//! format both downstream runtimes consume.

use std::fs;
use std::path::Path;

use crate::core::error::{DocdexError, Result};
use crate::core::types::Record;

/// Order-preserving keyed collection of index records
#[derive(Debug, Clone, Default)]
pub struct Index {
    records: Vec<Record>,
}

impl Index {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a record sequence.
    ///
    /// Duplicate filenames collapse via upsert; the last
    /// occurrence wins, holding the first occurrence's position.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.upsert(record);
        }
        index
    }

    /// Insert or replace the record for its filename.
    pub fn upsert(&mut self, record: Record) {
        match self
            .records
            .iter_mut()
            .find(|r| r.filename == record.filename)
        {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
    }

    /// Look up a record by filename
    pub fn get(&self, filename: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.filename == filename)
    }

    /// Records in index order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Load an index from a sink file.
    ///
    /// A file that exists but does not parse as a record sequence
    /// is reported as `SinkParse`, so the caller can decide
    /// whether to degrade to an empty index or abort.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let records: Vec<Record> = serde_json::from_str(&contents)
            .map_err(|e| DocdexError::SinkParse(format!("{}: {e}", path.display())))?;
        Ok(Self::from_records(records))
    }

    /// Write the record sequence to a sink file, creating parent
    /// directories as needed. Overwrites entirely.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(filename: &str, title: &str) -> Record {
        Record {
            title: title.to_string(),
            filename: filename.to_string(),
            summary: format!("Summary of {filename}."),
            content: format!("# {title}\n\nBody of {filename}.\n"),
        }
    }

    #[test]
    fn test_upsert_appends_new_keys_in_order() {
        let mut index = Index::new();
        index.upsert(record("b.md", "B"));
        index.upsert(record("a.md", "A"));
        index.upsert(record("c.md", "C"));

        let names: Vec<&str> = index.records().iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["b.md", "a.md", "c.md"]);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut index = Index::new();
        index.upsert(record("a.md", "A"));
        index.upsert(record("b.md", "B"));
        index.upsert(record("a.md", "A v2"));

        assert_eq!(index.len(), 2);
        assert_eq!(index.records()[0].title, "A v2");
        assert_eq!(index.records()[0].filename, "a.md");
        assert_eq!(index.records()[1].filename, "b.md");
    }

    #[test]
    fn test_one_record_per_filename() {
        let index = Index::from_records(vec![
            record("a.md", "first"),
            record("a.md", "second"),
            record("a.md", "third"),
        ]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("a.md").unwrap().title, "third");
    }

    #[test]
    fn test_write_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let sink = dir.path().join("index.json");

        let mut index = Index::new();
        index.upsert(record("a.md", "Alpha"));
        index.upsert(record("b.md", "Beta"));
        index.write(&sink).unwrap();

        let loaded = Index::load(&sink).unwrap();
        assert_eq!(loaded.records(), index.records());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let sink = dir.path().join("deeply/nested/dirs/index.json");

        Index::new().write(&sink).unwrap();
        assert!(sink.exists());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = Index::load(&dir.path().join("absent.json"));

        assert!(matches!(result, Err(DocdexError::IoError(_))));
    }

    #[test]
    fn test_load_garbage_is_sink_parse() {
        let dir = tempdir().unwrap();
        let sink = dir.path().join("corrupt.json");
        fs::write(&sink, "{not valid json at all").unwrap();

        let result = Index::load(&sink);
        assert!(matches!(result, Err(DocdexError::SinkParse(_))));
    }

    #[test]
    fn test_load_wrong_shape_is_sink_parse() {
        let dir = tempdir().unwrap();
        let sink = dir.path().join("shape.json");
        fs::write(&sink, r#"{"title": "not an array"}"#).unwrap();

        assert!(Index::load(&sink).unwrap_err().is_sink_parse());
    }

    #[test]
    fn test_serialized_field_order() {
        let dir = tempdir().unwrap();
        let sink = dir.path().join("order.json");

        let mut index = Index::new();
        index.upsert(record("a.md", "A"));
        index.write(&sink).unwrap();

        let json = fs::read_to_string(&sink).unwrap();
        let title_pos = json.find("\"title\"").unwrap();
        let filename_pos = json.find("\"filename\"").unwrap();
        let summary_pos = json.find("\"summary\"").unwrap();
        let content_pos = json.find("\"content\"").unwrap();

        assert!(title_pos < filename_pos);
        assert!(filename_pos < summary_pos);
        assert!(summary_pos < content_pos);
    }

    #[test]
    fn test_empty_index_round_trip() {
        let dir = tempdir().unwrap();
        let sink = dir.path().join("empty.json");

        Index::new().write(&sink).unwrap();
        let loaded = Index::load(&sink).unwrap();
        assert!(loaded.is_empty());
    }
}
