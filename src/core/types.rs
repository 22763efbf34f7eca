//! Core data types for the docdex engine.
//!
//! Defines the source document shape, the derived index record,
//! and run statistics.

use serde::{Deserialize, Serialize};

/// A source document read from the corpus.
///
/// Documents are authored entirely outside this system; the
/// filename is the sole stable identity key and must be unique
/// within the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name (not the full path), used as the identity key
    pub filename: String,

    /// Full document text
    pub body: String,
}

/// The structured, derived representation of one document.
///
/// Field order matters: it is the serialized order in the sink
/// files, and downstream consumers read `title` first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Extracted title, or the filename when no heading exists
    pub title: String,

    /// Identity key, copied verbatim from the document
    pub filename: String,

    /// Bounded summary produced by the configured policy
    pub summary: String,

    /// The full original body text, stored verbatim
    pub content: String,
}

/// Statistics from a synchronization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncStats {
    /// Documents successfully read and turned into records
    pub documents_processed: usize,

    /// Records in the index that was written out
    pub records_written: usize,

    /// Number of sink files written
    pub sinks_written: usize,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}
