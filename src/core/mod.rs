//! Core domain logic (adapter-agnostic)
//!
//! Everything the synchronization engine does lives here,
//! independent of how it is invoked.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **extract**: Title/summary heuristics and record building
//! - **corpus**: Document enumeration and reads
//! - **index**: Order-preserving keyed record collection + sinks
//! - **sync**: Rebuild and merge strategies

pub mod config;
pub mod corpus;
pub mod error;
pub mod extract;
pub mod index;
pub mod sync;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{DocdexError, Result};
pub use sync::Synchronizer;
