//! Title extraction.
//!
//! The title of a document is the text of its first level-one
//! heading. Documents without one fall back to their filename.

use once_cell::sync::Lazy;
use regex::Regex;

// A single '#' followed by whitespace and text. Deeper headings
// ("##", "###") start with a second '#' and never match.
static H1_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[ \t]+(.+)$").unwrap());

/// Extract a document title from its body.
///
/// Scans lines in order; the first level-one heading yields its
/// trailing text, trimmed. Returns `fallback` (by convention the
/// document's filename) when no such line exists. Total, never
/// fails.
pub fn extract_title(body: &str, fallback: &str) -> String {
    for line in body.lines() {
        if let Some(caps) = H1_PATTERN.captures(line) {
            return caps[1].trim().to_string();
        }
    }
    fallback.to_string()
}
