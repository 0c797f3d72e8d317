//! Composite reports built from several analyzers

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::application::Sentiment;
use crate::lexical::{LanguageCode, ScriptShare};
use crate::semantic::EntityMentions;

/// Foundation analysis of raw text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextProfile {
    pub language: LanguageCode,
    /// Whitespace-separated words
    pub word_count: usize,
    pub char_count: usize,
    pub ambiguous_words: Vec<String>,
    pub preprocessed: String,
    pub distribution: Vec<ScriptShare>,
}

/// Token-level statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordStatistics {
    pub total_tokens: usize,
    pub unique_words: usize,
    /// Mean length in characters, 0.0 without tokens
    pub average_word_length: f64,
}

impl WordStatistics {
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let unique: HashSet<&str> = tokens.iter().map(AsRef::as_ref).collect();
        let total_chars: usize = tokens.iter().map(|t| t.as_ref().chars().count()).sum();
        let average_word_length = if tokens.is_empty() {
            0.0
        } else {
            total_chars as f64 / tokens.len() as f64
        };

        Self {
            total_tokens: tokens.len(),
            unique_words: unique.len(),
            average_word_length,
        }
    }
}

/// Bigram and trigram model of a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramReport {
    pub bigrams: Vec<String>,
    pub trigrams: Vec<String>,
    /// Counts ordered by first occurrence
    pub bigram_counts: Vec<(String, usize)>,
    pub trigram_counts: Vec<(String, usize)>,
    pub vocabulary_size: usize,
}

impl NgramReport {
    pub fn unique_bigrams(&self) -> usize {
        self.bigram_counts.len()
    }

    pub fn unique_trigrams(&self) -> usize {
        self.trigram_counts.len()
    }
}

/// Comprehensive analysis of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentOverview {
    pub language: LanguageCode,
    pub word_count: usize,
    pub sentiment: Sentiment,
    pub entity_count: usize,
    pub entities: EntityMentions,
    pub summary: String,
}
