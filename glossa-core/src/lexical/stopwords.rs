//! Stopword filtering

use crate::lexicon::Lexicon;

/// Case-insensitive membership test against the lexicon's stopword list
pub fn is_stop_word(lexicon: &Lexicon, token: &str) -> bool {
    lexicon.is_stop_word(token)
}

/// Drop stopwords, keeping the remaining tokens in order
pub fn filter_stopwords<S: AsRef<str>>(lexicon: &Lexicon, tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .filter(|token| !lexicon.is_stop_word(token))
        .map(str::to_owned)
        .collect()
}
