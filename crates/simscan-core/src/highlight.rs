/// Overlap highlighting.
///
/// Marks every document token that also appears, with the exact same surface
/// form, in the candidate text. The walk is a single pass over the document's
/// maximal non-whitespace runs: a run whose text is in the shared-token set
/// is wrapped in the emphasis markers, everything else, including all
/// whitespace, is copied verbatim. Token boundaries are respected, so a short
/// shared token never matches inside a longer word and a marker inserted
/// earlier can never be re-wrapped by a later one.
///
/// Token definition comes from [`crate::normalize`], the same one the scorer
/// uses; scoring and highlighting always agree on what counts as shared.
use std::collections::HashSet;

use crate::normalize;

/// Opening emphasis marker. The marker text is a rendering concern; which
/// spans are marked is the contract.
pub const MARK_OPEN: &str = "<mark>";
/// Closing emphasis marker.
pub const MARK_CLOSE: &str = "</mark>";

/// Render `document` with every token shared with `candidate_text` wrapped
/// in the emphasis markers. The unmarked portions are byte-identical to the
/// original, so [`strip_marks`] inverts this exactly (provided the document
/// does not itself contain the marker strings).
pub fn annotate(document: &str, candidate_text: &str) -> String {
    let document_tokens = normalize::token_set(document);
    let candidate_tokens = normalize::token_set(candidate_text);
    let shared: HashSet<&str> = document_tokens
        .intersection(&candidate_tokens)
        .copied()
        .collect();

    if shared.is_empty() {
        return document.to_string();
    }

    let mut out = String::with_capacity(document.len() + shared.len() * 16);
    let mut run_start: Option<usize> = None;
    for (i, ch) in document.char_indices() {
        if ch.is_whitespace() {
            if let Some(start) = run_start.take() {
                push_token(&mut out, &document[start..i], &shared);
            }
            out.push(ch);
        } else if run_start.is_none() {
            run_start = Some(i);
        }
    }
    if let Some(start) = run_start {
        push_token(&mut out, &document[start..], &shared);
    }
    out
}

/// Remove all emphasis markers, recovering the original document text.
pub fn strip_marks(annotated: &str) -> String {
    annotated.replace(MARK_OPEN, "").replace(MARK_CLOSE, "")
}

fn push_token(out: &mut String, token: &str, shared: &HashSet<&str>) {
    if shared.contains(token) {
        out.push_str(MARK_OPEN);
        out.push_str(token);
        out.push_str(MARK_CLOSE);
    } else {
        out.push_str(token);
    }
}
