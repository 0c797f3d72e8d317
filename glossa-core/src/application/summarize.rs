//! Frequency-based extractive summarization

use std::collections::HashMap;

use crate::discourse::split_sentences;
use crate::lexical::tokenize;
use crate::lexicon::Lexicon;

/// Pick the `k` highest-scoring sentences of `text`.
///
/// Sentences are scored by the summed whole-text frequency of their
/// non-stopword tokens. Ties keep the earlier sentence. The chosen
/// sentences are returned in their original order, joined by ". " and
/// closed with a period. When `text` has no more than `k` sentences it is
/// returned unchanged.
pub fn summarize(lexicon: &Lexicon, text: &str, k: usize) -> String {
    let sentences = split_sentences(text);
    if sentences.len() <= k {
        return text.to_string();
    }
    // Zero sentences requested gives an empty summary, not a lone "."
    if k == 0 {
        return String::new();
    }

    let mut frequency: HashMap<String, usize> = HashMap::new();
    for token in tokenize(text) {
        if !lexicon.is_stop_word(&token) {
            *frequency.entry(token).or_insert(0) += 1;
        }
    }

    let mut scored: Vec<(usize, usize)> = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let score = tokenize(sentence)
                .iter()
                .filter(|token| !lexicon.is_stop_word(token))
                .map(|token| frequency.get(token).copied().unwrap_or(0))
                .sum();
            (index, score)
        })
        .collect();

    // Stable, so equal scores keep index order
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(k);
    scored.sort_by_key(|&(index, _)| index);

    log::trace!("summary keeps sentences {:?}", scored);

    let selected: Vec<&str> = scored.iter().map(|&(index, _)| sentences[index]).collect();
    format!("{}.", selected.join(". "))
}
