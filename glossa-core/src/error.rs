//! Error types for glossa-core
//!
//! The analyzers themselves are total and never fail. Errors only arise
//! while loading or compiling a lexicon.

use thiserror::Error;

/// Error type for lexicon loading and analyzer construction
#[derive(Debug, Error)]
pub enum Error {
    /// Lexicon file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Lexicon file is not valid TOML or does not match the schema
    #[error("Lexicon parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A pattern in the lexicon failed to compile
    #[error("Invalid pattern for {name}: {source}")]
    InvalidPattern {
        /// Which table entry the pattern belongs to
        name: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// The lexicon parsed but violates a structural rule
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),
}

/// Result type for glossa-core operations
pub type Result<T> = std::result::Result<T, Error>;
