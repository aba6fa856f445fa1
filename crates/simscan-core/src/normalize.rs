/// Text normalization shared by the scorer and the highlighter.
///
/// The token view is deliberately minimal: whitespace-delimited,
/// order-preserving, duplicates retained. No stemming, no case folding, no
/// punctuation stripping. Matches are exact-surface-form only, and both
/// consumers go through this module so they can never disagree on what
/// counts as a shared token.
use std::collections::HashSet;

/// Whitespace-delimited tokens in document order, duplicates retained.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// The set of distinct tokens in a text.
pub fn token_set(text: &str) -> HashSet<&str> {
    tokenize(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace() {
        let tokens: Vec<&str> = tokenize("the\tcat\n sat  down").collect();
        assert_eq!(tokens, vec!["the", "cat", "sat", "down"]);
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let tokens: Vec<&str> = tokenize("a b a a c").collect();
        assert_eq!(tokens, vec!["a", "b", "a", "a", "c"]);
    }

    #[test]
    fn keeps_case_and_punctuation() {
        let tokens: Vec<&str> = tokenize("Cat cat cat.").collect();
        assert_eq!(tokens, vec!["Cat", "cat", "cat."]);
        let set = token_set("Cat cat cat.");
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn empty_and_blank_yield_no_tokens() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("  \n\t ").count(), 0);
    }
}
