//! docdex - Document Index Synchronization Engine
//!
//! A batch engine that turns a directory of loosely structured
//! markdown research notes into a structured JSON index (title,
//! summary, full text per document) and keeps two physically
//! separate copies of that index consistent as the corpus
//! evolves.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (adapter-agnostic)
//!   - config, error, types
//!   - extract (title/summary heuristics, record building)
//!   - corpus (document enumeration and reads)
//!   - index (order-preserving keyed records, sink persistence)
//!   - sync (full rebuild and incremental merge strategies)
//!
//! - **cli**: clap adapter (depends on core)
//!   - commands, output formatting
//!
//! # Key Properties
//!
//! - Full rebuild leaves every sink byte-for-byte identical
//! - Incremental merge upserts in place and never prunes stale
//!   records; the mirror sink is refreshed only by rebuilds
//! - Extraction is pure and total: a malformed document degrades
//!   its summary, never the run
//! - UTF-8 safe truncation throughout (character-based, never
//!   byte-based)

// Core domain logic (adapter-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{DocdexError, Result};
pub use core::extract::{RecordBuilder, SummaryPolicy};
pub use core::index::Index;
pub use core::sync::Synchronizer;
pub use core::types::*;
