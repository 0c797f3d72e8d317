//! Deterministic lexical similarity between words

use serde::{Deserialize, Serialize};

/// Number of word pairs reported by [`word_similarity`]
pub const MAX_PAIRS: usize = 3;

/// Similarity score for one unordered word pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordSimilarity {
    pub word1: String,
    pub word2: String,
    /// In `[0, 1]`, 1.0 for identical words
    pub score: f64,
}

/// Levenshtein edit distance over characters
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Single rolling row
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }
    row[b.len()]
}

/// `1 - distance / longer length`; two empty strings are identical
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / longest as f64
}

/// Score the first [`MAX_PAIRS`] pairs `(i, j)` with `i < j`, in nested
/// loop order
pub fn word_similarity<S: AsRef<str>>(words: &[S]) -> Vec<WordSimilarity> {
    let mut pairs = Vec::with_capacity(MAX_PAIRS);

    'outer: for (i, first) in words.iter().enumerate() {
        for second in &words[i + 1..] {
            if pairs.len() == MAX_PAIRS {
                break 'outer;
            }
            let (a, b) = (first.as_ref(), second.as_ref());
            pairs.push(WordSimilarity {
                word1: a.to_string(),
                word2: b.to_string(),
                score: normalized_similarity(a, b),
            });
        }
    }

    pairs
}
