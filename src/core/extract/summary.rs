//! Summary extraction policies.
//!
//! Two strategies are supported, selectable by configuration.
//! Both are total: they always return a non-empty string.
//!
//! - **Loose**: trigger-line window scan with a hard character
//!   cap. Fast and forgiving, but can leak markup into the
//!   summary.
//! - **Structured** (default): abstract capture with markup
//!   stripping and sentence-aligned truncation. Preferred for
//!   downstream display and retrieval.
//!
//! # Safety
//!
//! All truncation is character-based, never byte-based, so
//! multi-byte UTF-8 content (emojis, CJK text) can never cause a
//! panic at a cut point.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum summary length in characters for the loose policy
const LOOSE_SUMMARY_LIMIT: usize = 500;

/// Lines scanned from a trigger line (inclusive) by the loose policy
const LOOSE_WINDOW_LINES: usize = 15;

/// Returned by the structured policy when nothing summarizable exists
const NO_SUMMARY: &str = "No summary available.";

// Regex patterns compiled once at startup
static ABSTRACT_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)abstract:?").unwrap());

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());

static HEADING_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#.*$").unwrap());

// Whitespace run following a sentence terminator. The terminator
// stays with the sentence; the whitespace is consumed.
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// A summary extraction strategy.
///
/// Implementations must be total: any input, including the empty
/// string, yields a non-empty summary.
pub trait SummaryExtractor {
    fn summarize(&self, body: &str) -> String;
}

/// Summary policy selected by configuration
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SummaryPolicy {
    /// Trigger-line window scan, 500-character cap
    Loose,
    /// Abstract capture with markup stripping, two-sentence cap
    #[default]
    Structured,
}

impl SummaryPolicy {
    /// Get the extractor implementing this policy
    pub fn extractor(&self) -> &'static dyn SummaryExtractor {
        match self {
            SummaryPolicy::Loose => &LooseSummary,
            SummaryPolicy::Structured => &StructuredSummary,
        }
    }
}

impl std::str::FromStr for SummaryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "loose" => Ok(SummaryPolicy::Loose),
            "structured" => Ok(SummaryPolicy::Structured),
            other => Err(format!(
                "Unknown summary policy '{other}' (expected 'loose' or 'structured')"
            )),
        }
    }
}

impl std::fmt::Display for SummaryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryPolicy::Loose => write!(f, "loose"),
            SummaryPolicy::Structured => write!(f, "structured"),
        }
    }
}

/// Loose heuristic: scan for a trigger line, collect a window of
/// lines after it, cap at 500 characters.
pub struct LooseSummary;

impl SummaryExtractor for LooseSummary {
    fn summarize(&self, body: &str) -> String {
        let lines: Vec<&str> = body.split('\n').collect();

        for (i, line) in lines.iter().enumerate() {
            let lower = line.to_lowercase();
            if !line.contains("Abstract")
                && !lower.contains("objective")
                && !lower.contains("summary")
            {
                continue;
            }

            let end = lines.len().min(i + LOOSE_WINDOW_LINES);
            let window = lines[i..end]
                .iter()
                .map(|l| l.trim())
                .filter(|l| !l.is_empty())
                .collect::<Vec<_>>()
                .join(" ");

            if !window.is_empty() {
                return format!("{}...", truncate_chars(&window, LOOSE_SUMMARY_LIMIT));
            }
        }

        // No trigger line: first 500 characters of the raw body.
        let head: String = body.chars().take(LOOSE_SUMMARY_LIMIT).collect();
        format!("{}...", head.replace('\n', " "))
    }
}

/// Structured heuristic: abstract capture, falling back to the
/// first paragraph with code fences and headings stripped, then a
/// two-sentence cut.
pub struct StructuredSummary;

impl SummaryExtractor for StructuredSummary {
    fn summarize(&self, body: &str) -> String {
        let candidate = abstract_block(body).unwrap_or_else(|| first_paragraph(body));
        let flat = candidate.replace('\n', " ");

        let sentences = split_sentences(&flat);
        if sentences.is_empty() {
            return NO_SUMMARY.to_string();
        }

        sentences[..sentences.len().min(2)].join(" ")
    }
}

/// Capture the text following an "Abstract" marker (optional
/// colon), up to the first blank line or heading line. A blank
/// line directly after the marker means there is no attached
/// text.
fn abstract_block(body: &str) -> Option<String> {
    let marker = ABSTRACT_MARKER.find(body)?;
    let rest = body[marker.end()..].trim_start_matches([' ', '\t']);

    // The abstract may start on the line after the marker, but a
    // blank line ends the capture region before it begins.
    let rest = match rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) {
        Some(next_line) => {
            if next_line.starts_with('\n') || next_line.starts_with("\r\n") {
                return None;
            }
            next_line
        }
        None => rest,
    };

    let stop = ["\n\n", "\n#", "\r\n\r\n"]
        .iter()
        .filter_map(|terminator| rest.find(terminator))
        .min();

    let captured = match stop {
        Some(idx) => &rest[..idx],
        None => rest,
    };

    let captured = captured.trim();
    if captured.is_empty() || captured.starts_with('#') {
        None
    } else {
        Some(captured.to_string())
    }
}

/// First non-empty paragraph of the body, with fenced code blocks
/// and heading lines removed.
fn first_paragraph(body: &str) -> String {
    let without_code = CODE_FENCE.replace_all(body, "");
    let without_headings = HEADING_LINE.replace_all(&without_code, "");

    without_headings
        .split("\n\n")
        .map(str::trim)
        .find(|p| !p.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Split text into sentences at whitespace runs that follow `.`,
/// `!` or `?`. The terminator is kept with its sentence. Empty
/// fragments are dropped.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // The terminator is a single ASCII byte.
        let end = boundary.start() + 1;
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = boundary.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

/// Truncate to at most `max` characters, on a character boundary.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
