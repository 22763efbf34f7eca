//! Record construction.
//!
//! Combines the title and summary extractors with the verbatim
//! body into one index record.

use crate::core::extract::summary::SummaryPolicy;
use crate::core::extract::title::extract_title;
use crate::core::types::{Document, Record};

/// Builds index records from source documents.
///
/// Pure and total: building never fails and has no side effects.
#[derive(Debug, Clone, Copy)]
pub struct RecordBuilder {
    policy: SummaryPolicy,
}

impl RecordBuilder {
    /// Create a builder using the given summary policy
    pub fn new(policy: SummaryPolicy) -> Self {
        Self { policy }
    }

    /// Build the record for one document.
    ///
    /// The filename doubles as the title fallback and is copied
    /// verbatim as the identity key. The body is stored verbatim
    /// as `content`, with no truncation or stripping.
    pub fn build(&self, doc: &Document) -> Record {
        Record {
            title: extract_title(&doc.body, &doc.filename),
            filename: doc.filename.clone(),
            summary: self.policy.extractor().summarize(&doc.body),
            content: doc.body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(filename: &str, body: &str) -> Document {
        Document {
            filename: filename.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_build_record_with_heading() {
        let builder = RecordBuilder::new(SummaryPolicy::Structured);
        let record = builder.build(&doc(
            "sleep.md",
            "# Sleep Study\n\nSleep matters a lot. Here is why. And more.\n",
        ));

        assert_eq!(record.title, "Sleep Study");
        assert_eq!(record.filename, "sleep.md");
        assert_eq!(record.summary, "Sleep matters a lot. Here is why.");
        assert!(record.content.starts_with("# Sleep Study"));
    }

    #[test]
    fn test_build_record_title_falls_back_to_filename() {
        let builder = RecordBuilder::new(SummaryPolicy::Structured);
        let record = builder.build(&doc("untitled.md", "Plain text only.\n"));

        assert_eq!(record.title, "untitled.md");
    }

    #[test]
    fn test_build_record_content_verbatim() {
        let body = "# T\n\n```\ncode\n```\n\ntrailing  spaces  \n";
        let builder = RecordBuilder::new(SummaryPolicy::Loose);
        let record = builder.build(&doc("x.md", body));

        // Summary heuristics never touch the stored content.
        assert_eq!(record.content, body);
    }

    #[test]
    fn test_build_record_respects_policy() {
        let body = "# T\n\nSummary line here.\nSecond line.\n";
        let loose = RecordBuilder::new(SummaryPolicy::Loose).build(&doc("x.md", body));
        let structured = RecordBuilder::new(SummaryPolicy::Structured).build(&doc("x.md", body));

        assert!(loose.summary.ends_with("..."));
        assert_eq!(structured.summary, "Summary line here. Second line.");
    }
}
