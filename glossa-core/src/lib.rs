//! Heuristic text analysis toolkit
//!
//! A flat toolbox of small, deterministic analyzers grouped by layer:
//!
//! - **lexical**: tokenization, stemming, stopwords, script detection
//! - **statistical**: n-grams and a perplexity heuristic
//! - **syntax**: rule-based POS tagging, phrase chunking, parse trees
//! - **semantic**: named entities, word senses, word similarity
//! - **discourse**: anaphora resolution and coherence
//! - **application**: sentiment, summarization, QA and document search
//!
//! Every analysis is total: empty or odd input gives an empty or neutral
//! result, never an error. Fixed word lists and patterns come from a
//! [`Lexicon`]; the built-in English one is embedded in the crate.
//!
//! # Example
//!
//! ```rust
//! use glossa_core::Analyzer;
//! use glossa_core::application::QuestionType;
//!
//! let analyzer = Analyzer::new();
//!
//! let tokens = analyzer.tokenize("The quick, brown fox!");
//! assert_eq!(tokens, vec!["the", "quick", "brown", "fox"]);
//!
//! let kind = analyzer.question_type("Where is the office?");
//! assert_eq!(kind, QuestionType::Where);
//! assert_eq!(kind.to_string(), "WHERE (Location)");
//! ```

pub mod analyzer;
pub mod application;
pub mod discourse;
pub mod error;
pub mod lexical;
pub mod lexicon;
pub mod report;
pub mod semantic;
pub mod statistical;
pub mod syntax;

pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use error::{Error, Result};
pub use lexical::LanguageCode;
pub use lexicon::{Lexicon, LexiconConfig};
