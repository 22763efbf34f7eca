//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for
//! one subcommand. The `rebuild` and `merge` commands accept the
//! same path overrides so that either strategy can be pointed at
//! an ad-hoc corpus without a config file.

pub mod completions;
pub mod config;
pub mod merge;
pub mod rebuild;
pub mod status;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use merge::MergeArgs;
pub use rebuild::RebuildArgs;
pub use status::StatusArgs;
