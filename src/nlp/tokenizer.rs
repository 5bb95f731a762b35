//! Word tokenization
//!
//! Lowercases the input and extracts word tokens on Unicode word
//! boundaries (`\b\w+\b` semantics). No length or stopword filtering
//! happens here; that belongs to the frequency counter.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("static pattern"));

/// Extract lowercase word tokens from `text`, in document order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("Hello World"), vec!["hello", "world"]);
    }

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        assert_eq!(
            tokenize("one, two; three...four"),
            vec!["one", "two", "three", "four"]
        );
    }

    #[test]
    fn test_tokenize_keeps_digits_and_underscores() {
        // \w covers letters, digits, and underscore.
        assert_eq!(tokenize("room_42 opens"), vec!["room_42", "opens"]);
    }

    #[test]
    fn test_tokenize_handles_accented_words() {
        assert_eq!(
            tokenize("El análisis rápido"),
            vec!["el", "análisis", "rápido"]
        );
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t ").is_empty());
    }

    #[test]
    fn test_tokenize_preserves_document_order() {
        assert_eq!(tokenize("b a c a"), vec!["b", "a", "c", "a"]);
    }
}
