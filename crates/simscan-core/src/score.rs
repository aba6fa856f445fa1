/// Vector-space similarity scoring.
///
/// Each (document, candidate) pair forms its own two-document corpus: the
/// vocabulary is the union of both token sets and is rebuilt per pair, since
/// every candidate is compared independently. Term weights are smoothed
/// TF-IDF (raw term count times `ln((1 + n) / (1 + df)) + 1` with n = 2),
/// and the score is the cosine of the two weight vectors.
///
/// Properties the pipeline relies on: symmetric under swapping the inputs,
/// 0.0 when the texts share no tokens, 1.0 when the texts are identical and
/// non-empty. Scale-invariant to document length.
use std::collections::HashMap;

use crate::normalize;

/// Cosine similarity of the TF-IDF vectors of `a` and `b`, in [0.0, 1.0].
///
/// Callers must not pass texts that are empty after normalization (the
/// pipeline filters those out); if one slips through, the score is 0.0
/// rather than a division by zero.
pub fn similarity(a: &str, b: &str) -> f64 {
    let counts_a = term_counts(a);
    let counts_b = term_counts(b);
    if counts_a.is_empty() || counts_b.is_empty() {
        return 0.0;
    }

    // Joint vocabulary with document frequency over the two-document corpus.
    let mut vocabulary: HashMap<&str, usize> = HashMap::new();
    for term in counts_a.keys().chain(counts_b.keys()) {
        *vocabulary.entry(term).or_insert(0) += 1;
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (term, document_frequency) in &vocabulary {
        // Smoothed idf over n = 2 documents: shared terms weigh 1.0,
        // single-document terms ln(3/2) + 1.
        let idf = ((1.0 + 2.0) / (1.0 + *document_frequency as f64)).ln() + 1.0;
        let weight_a = counts_a.get(term).copied().unwrap_or(0) as f64 * idf;
        let weight_b = counts_b.get(term).copied().unwrap_or(0) as f64 * idf;
        dot += weight_a * weight_b;
        norm_a += weight_a * weight_a;
        norm_b += weight_b * weight_b;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
}

/// Raw term counts keyed by exact surface form.
fn term_counts(text: &str) -> HashMap<&str, u32> {
    let mut counts = HashMap::new();
    for token in normalize::tokenize(text) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}
