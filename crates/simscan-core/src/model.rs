use serde::{Deserialize, Serialize};

/// The document under test. Immutable for the lifetime of one pipeline run.
#[derive(Debug, Clone)]
pub struct Document {
    /// The full text as submitted, never mutated by the pipeline.
    pub raw_text: String,
}

impl Document {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }

    /// `true` when the text is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.raw_text.trim().is_empty()
    }

    /// The first `max_chars` characters of the trimmed text, used as the
    /// discovery query. Counted in chars, so a multi-byte scalar is never
    /// split. This is the only truncation the pipeline ever applies.
    pub fn query_fragment(&self, max_chars: usize) -> String {
        self.raw_text.trim().chars().take(max_chars).collect()
    }
}

/// A discovered URL hypothesized to contain overlapping content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Absolute http(s) URL.
    pub url: String,
    /// 0-based discovery order. Rank order, not a relevance score.
    pub rank: usize,
}

/// A candidate's page rendered as plain text, markup stripped.
///
/// Empty `text` means the fetch failed or yielded nothing usable; such
/// content must never reach the scorer.
#[derive(Debug, Clone)]
pub struct FetchedContent {
    pub source: Candidate,
    pub text: String,
}

impl FetchedContent {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The terminal output of a successful scan. At most one per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// URL of the first candidate that crossed the similarity threshold.
    pub candidate_url: String,
    /// Cosine similarity in [0.0, 1.0] against the original document.
    pub score: f64,
    /// The document text with overlapping tokens wrapped in emphasis markers.
    pub annotated_text: String,
}

/// Exactly one variant per pipeline run; never a partial or multiple result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PipelineOutcome {
    /// The first candidate (in rank order) exceeding the threshold.
    Match(MatchResult),
    /// Discovery returned no candidates at all.
    NoCandidatesFound,
    /// Candidates existed but none crossed the threshold.
    NoSignificantMatch,
    /// The submitted document was empty or whitespace-only.
    InputEmpty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(Document::new("").is_blank());
        assert!(Document::new("  \n\t ").is_blank());
        assert!(!Document::new(" x ").is_blank());
    }

    #[test]
    fn query_fragment_trims_then_truncates() {
        let doc = Document::new("  hello world  ");
        assert_eq!(doc.query_fragment(200), "hello world");
        assert_eq!(doc.query_fragment(5), "hello");
    }

    #[test]
    fn query_fragment_counts_chars_not_bytes() {
        let doc = Document::new("héllo");
        assert_eq!(doc.query_fragment(2), "hé");
    }
}
