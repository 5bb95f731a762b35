//! Sentence splitting
//!
//! Purely structural: splits on runs of `.`, `!`, `?`, trims whitespace,
//! and drops empty fragments. No abbreviation handling or semantic
//! analysis.

/// Split `text` into sentences.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pair original sentences with their translations, index by index,
/// truncated to the shorter of the two lists.
///
/// Translation can merge or split sentences, so the two sides may
/// disagree on length; unmatched tails are dropped.
pub fn pair_sentences<'a>(
    original: &'a [String],
    translated: &'a [String],
) -> impl Iterator<Item = (&'a String, &'a String)> {
    original.iter().zip(translated.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_each_terminator() {
        assert_eq!(
            split_sentences("Hello. World! Foo?"),
            vec!["Hello", "World", "Foo"]
        );
    }

    #[test]
    fn test_runs_of_terminators_yield_no_empty_fragments() {
        assert_eq!(
            split_sentences("Wait... what?! Really??"),
            vec!["Wait", "what", "Really"]
        );
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(
            split_sentences("  first .  second  "),
            vec!["first", "second"]
        );
    }

    #[test]
    fn test_text_without_terminators_is_one_sentence() {
        assert_eq!(split_sentences("no punctuation here"), vec![
            "no punctuation here"
        ]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("...!!!???").is_empty());
    }

    #[test]
    fn test_pairing_truncates_to_shorter_side() {
        let original = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let translated = vec!["x".to_string(), "y".to_string()];
        let pairs: Vec<_> = pair_sentences(&original, &translated).collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], (&"a".to_string(), &"x".to_string()));
    }
}
