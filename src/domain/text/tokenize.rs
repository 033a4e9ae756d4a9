//! Word-level tokenization and normalization

use crate::domain::text::stopwords::is_stopword;
use unicode_segmentation::UnicodeSegmentation;

/// Split text into lowercase word tokens along UAX-29 word boundaries.
/// Contractions ("don't") survive as single tokens, punctuation does not.
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(|word| word.to_lowercase()).collect()
}

/// Tokenize, then keep only purely alphanumeric tokens that are not
/// stopwords. Order and duplicates are preserved; frequency analysis
/// happens downstream. Empty input yields an empty sequence.
pub fn normalize(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|token| token.chars().all(char::is_alphanumeric))
        .filter(|token| !is_stopword(token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        let tokens = tokenize("Hello World! This is a test.");
        assert_eq!(tokens, vec!["hello", "world", "this", "is", "a", "test"]);
    }

    #[test]
    fn test_tokenize_keeps_contractions() {
        let tokens = tokenize("I don't mind");
        assert_eq!(tokens, vec!["i", "don't", "mind"]);
    }

    #[test]
    fn test_normalize_removes_stopwords() {
        let tokens = normalize("The cat sat on the mat");
        assert_eq!(tokens, vec!["cat", "sat", "mat"]);
    }

    #[test]
    fn test_normalize_rejects_non_alphanumeric_tokens() {
        // The contraction survives tokenization but not the alnum filter
        let tokens = normalize("won't stop running");
        assert_eq!(tokens, vec!["stop", "running"]);
    }

    #[test]
    fn test_normalize_keeps_numbers() {
        let tokens = normalize("ran 5 kilometers");
        assert_eq!(tokens, vec!["ran", "5", "kilometers"]);
    }

    #[test]
    fn test_normalize_preserves_order_and_duplicates() {
        let tokens = normalize("run jump run swim run");
        assert_eq!(tokens, vec!["run", "jump", "run", "swim", "run"]);
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \t\n").is_empty());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("Running through the park, feeling great!");
        let again = normalize(&once.join(" "));
        assert_eq!(once, again);
    }

    #[test]
    fn test_normalize_all_stopwords() {
        assert!(normalize("the and is of a the").is_empty());
    }
}
