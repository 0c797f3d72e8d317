//! Tokenization and text normalization

use std::sync::LazyLock;

use regex::Regex;

/// Anything that is neither a word character nor whitespace
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static pattern is valid"));

/// Like `NON_WORD`, but Indic script blocks are always kept
static NON_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\s\x{0900}-\x{097F}\x{0980}-\x{09FF}\x{0B80}-\x{0BFF}\x{0C00}-\x{0C7F}]")
        .expect("static pattern is valid")
});

/// Split text into lower-cased word tokens.
///
/// Characters that are neither word characters nor whitespace become
/// separators. Never fails; empty or punctuation-only input yields an
/// empty vector.
///
/// ```
/// use glossa_core::lexical::tokenize;
///
/// assert_eq!(tokenize("The quick, brown fox!"), vec!["the", "quick", "brown", "fox"]);
/// assert!(tokenize("?!").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_WORD
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Clean text for display: punctuation becomes spaces, whitespace runs
/// collapse to one space, case is preserved.
pub fn preprocess(text: &str) -> String {
    NON_TEXT
        .replace_all(text, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
