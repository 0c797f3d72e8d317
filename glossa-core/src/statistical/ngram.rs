//! N-gram extraction and counting

use std::collections::HashMap;

/// All contiguous windows of `n` tokens, joined by a single space.
///
/// Empty when `n` is zero or there are fewer than `n` tokens.
pub fn ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<String> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }

    tokens
        .windows(n)
        .map(|window| {
            window
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(" ")
        })
        .collect()
}

/// Frequency of each distinct n-gram, ordered by first occurrence
pub fn ngram_counts<S: AsRef<str>>(ngrams: &[S]) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for gram in ngrams {
        let gram = gram.as_ref();
        match index.get(gram) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(gram, counts.len());
                counts.push((gram.to_string(), 1));
            }
        }
    }

    counts
}
