//! Pronoun detection and a nearest-capitalized-word anaphora heuristic

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::sentence::split_sentences;
use crate::lexicon::Lexicon;

static NON_WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("static pattern is valid"));

/// Antecedent label for pronouns with no candidate
pub const UNKNOWN_ANTECEDENT: &str = "unknown";

/// One pronoun occurrence and the antecedent chosen for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreferenceLink {
    pub pronoun: String,
    pub sentence_index: usize,
    pub word_index: usize,
    pub antecedent: Option<String>,
}

impl CoreferenceLink {
    /// Key unique per occurrence: `pronoun_sentence_word`
    pub fn key(&self) -> String {
        format!("{}_{}_{}", self.pronoun, self.sentence_index, self.word_index)
    }

    /// The antecedent, or [`UNKNOWN_ANTECEDENT`]
    pub fn antecedent_or_unknown(&self) -> &str {
        self.antecedent.as_deref().unwrap_or(UNKNOWN_ANTECEDENT)
    }
}

fn is_candidate(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.is_uppercase() && chars.next().is_some(),
        None => false,
    }
}

/// Resolve each anaphor occurrence to the nearest preceding capitalized
/// word.
///
/// Sentences come from splitting on '.', words from splitting each
/// sentence on whitespace. The search walks backward from the word before
/// the pronoun, then through earlier sentences from their last word. A
/// candidate starts with an uppercase letter and is longer than one
/// character; it is reported with surrounding punctuation trimmed.
pub fn resolve_anaphora(lexicon: &Lexicon, text: &str) -> Vec<CoreferenceLink> {
    let sentences: Vec<Vec<&str>> = split_sentences(text)
        .into_iter()
        .map(|s| s.split_whitespace().collect())
        .collect();

    let mut links = Vec::new();
    for (sentence_index, words) in sentences.iter().enumerate() {
        for (word_index, word) in words.iter().enumerate() {
            let lowered = word.to_lowercase();
            if !lexicon.anaphors().contains(&lowered) {
                continue;
            }

            let preceding = sentences[..sentence_index]
                .iter()
                .rev()
                .flat_map(|earlier| earlier.iter().rev());
            let antecedent = words[..word_index]
                .iter()
                .rev()
                .chain(preceding)
                .find(|w| is_candidate(w))
                .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_string());

            links.push(CoreferenceLink {
                pronoun: lowered,
                sentence_index,
                word_index,
                antecedent,
            });
        }
    }

    log::trace!("resolved {} anaphora occurrences", links.len());
    links
}

/// Pronouns from the lexicon's inventory that occur in `text`, in
/// inventory order
pub fn find_pronouns(lexicon: &Lexicon, text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let words: HashSet<&str> = NON_WORD_RUN.split(&lowered).collect();
    lexicon
        .pronouns()
        .iter()
        .filter(|p| words.contains(p.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon;

    #[test]
    fn test_resolve_within_and_across_sentences() {
        let lexicon = lexicon::builtin();
        let links = resolve_anaphora(
            &lexicon,
            "John bought a car. It was red. Mary saw it and she smiled.",
        );
        assert_eq!(links.len(), 3);

        assert_eq!(links[0].key(), "it_1_0");
        assert_eq!(links[0].antecedent.as_deref(), Some("John"));

        assert_eq!(links[1].key(), "it_2_2");
        assert_eq!(links[1].antecedent.as_deref(), Some("Mary"));

        assert_eq!(links[2].key(), "she_2_4");
        assert_eq!(links[2].antecedent.as_deref(), Some("Mary"));
    }

    #[test]
    fn test_unknown_antecedent() {
        let lexicon = lexicon::builtin();
        let links = resolve_anaphora(&lexicon, "they left early");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].antecedent, None);
        assert_eq!(links[0].antecedent_or_unknown(), "unknown");
    }

    #[test]
    fn test_single_letter_not_candidate() {
        let lexicon = lexicon::builtin();
        let links = resolve_anaphora(&lexicon, "I think that works");
        assert_eq!(links[0].pronoun, "that");
        assert_eq!(links[0].antecedent, None);
    }

    #[test]
    fn test_antecedent_punctuation_trimmed() {
        let lexicon = lexicon::builtin();
        let links = resolve_anaphora(&lexicon, "We met Alice, and she waved");
        assert_eq!(links[0].antecedent.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_pronoun_with_punctuation_not_matched() {
        let lexicon = lexicon::builtin();
        assert!(resolve_anaphora(&lexicon, "Paris, it, is").is_empty());
        assert!(resolve_anaphora(&lexicon, "").is_empty());
    }

    #[test]
    fn test_find_pronouns() {
        let lexicon = lexicon::builtin();
        let found = find_pronouns(&lexicon, "Their dog? It barked at him, and them.");
        assert_eq!(found, vec!["it", "him", "them", "their"]);
        assert!(find_pronouns(&lexicon, "no pronouns here").is_empty());
    }
}
