//! Metadata extraction from unstructured document text.
//!
//! Turns a raw document body into the structured fields of an
//! index record:
//!
//! - Title: first level-one heading, falling back to the filename
//! - Summary: bounded text via a configurable policy (loose
//!   window scan or structured abstract capture)
//! - Content: the body, verbatim
//!
//! All extractors are pure and total; a malformed document can
//! only ever produce a degraded summary, never an error.

pub mod builder;
pub mod summary;
pub mod title;

pub use builder::RecordBuilder;
pub use summary::{SummaryExtractor, SummaryPolicy};
pub use title::extract_title;
