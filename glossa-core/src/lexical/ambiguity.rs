//! Polysemous word detection

use super::tokenize;
use crate::lexicon::Lexicon;

/// Ambiguous words from the lexicon that occur in `text`.
///
/// Each word is reported once, in lexicon order.
pub fn find_ambiguous_words(lexicon: &Lexicon, text: &str) -> Vec<String> {
    let tokens = tokenize(text);
    lexicon
        .ambiguous_words()
        .iter()
        .filter(|word| tokens.contains(word))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon;

    #[test]
    fn test_find_ambiguous_words() {
        let lexicon = lexicon::builtin();
        let found = find_ambiguous_words(
            &lexicon,
            "The Spring light fell on the river bank near the bank.",
        );
        assert_eq!(found, vec!["bank", "light", "spring"]);
    }

    #[test]
    fn test_no_ambiguous_words() {
        let lexicon = lexicon::builtin();
        assert!(find_ambiguous_words(&lexicon, "cats sleep").is_empty());
        assert!(find_ambiguous_words(&lexicon, "").is_empty());
    }

    #[test]
    fn test_substrings_do_not_count() {
        let lexicon = lexicon::builtin();
        assert!(find_ambiguous_words(&lexicon, "banking rocks").is_empty());
    }
}
