//! Lexical layer: tokenization, stemming, stopwords and script detection

mod ambiguity;
mod language;
mod stemmer;
mod stopwords;
mod tokenizer;

pub use ambiguity::find_ambiguous_words;
pub use language::{detect_language, language_distribution, LanguageCode, ScriptShare};
pub use stemmer::stem;
pub use stopwords::{filter_stopwords, is_stop_word};
pub use tokenizer::{preprocess, tokenize};
