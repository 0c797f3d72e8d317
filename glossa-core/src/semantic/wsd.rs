//! Word-sense disambiguation by context overlap

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::lexical::tokenize;
use crate::lexicon::Lexicon;

/// Sense label used when no candidate overlaps the context
pub const DEFAULT_SENSE: &str = "default";

/// Sense chosen for one ambiguous word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenseAssignment {
    pub word: String,
    pub sense: String,
}

/// Pick a sense for each ambiguous word that has a sense table.
///
/// Each candidate is scored by how many of its context words occur in
/// `text`. The first candidate with strictly the greatest overlap wins;
/// when every overlap is zero the sense is [`DEFAULT_SENSE`]. Words
/// without a sense table are skipped, repeated words are decided once.
pub fn disambiguate<S: AsRef<str>>(
    lexicon: &Lexicon,
    text: &str,
    ambiguous_words: &[S],
) -> Vec<SenseAssignment> {
    let tokens: HashSet<String> = tokenize(text).into_iter().collect();
    let mut assignments: Vec<SenseAssignment> = Vec::new();

    for word in ambiguous_words {
        let word = word.as_ref();
        if assignments.iter().any(|a| a.word == word) {
            continue;
        }
        let Some(table) = lexicon.sense_table(word) else {
            continue;
        };

        let mut best = DEFAULT_SENSE;
        let mut max_overlap = 0;
        for (label, context) in table.candidates() {
            let overlap = context.iter().filter(|c| tokens.contains(*c)).count();
            if overlap > max_overlap {
                max_overlap = overlap;
                best = label;
            }
        }

        assignments.push(SenseAssignment {
            word: word.to_string(),
            sense: best.to_string(),
        });
    }

    assignments
}
