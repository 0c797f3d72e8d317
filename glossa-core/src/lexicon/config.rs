//! Configuration structures and validation
//!
//! This module defines the TOML schema for a lexicon. Ordered tables are
//! arrays so that tie-breaking follows file order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::syntax::Tag;

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: Metadata,
    pub stopwords: Stopwords,
    pub pos: PosRules,
    #[serde(default)]
    pub ambiguity: Ambiguity,
    #[serde(default)]
    pub senses: Vec<SenseEntry>,
    pub entities: Entities,
    pub sentiment: Sentiment,
    pub discourse: Discourse,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Stopword list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stopwords {
    pub words: Vec<String>,
}

/// Ordered part-of-speech rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosRules {
    pub rules: Vec<PosRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosRule {
    pub tag: String,
    pub pattern: String,
}

/// Polysemous words reported by ambiguity detection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ambiguity {
    pub words: Vec<String>,
}

/// Sense inventory for one ambiguous word
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SenseEntry {
    pub word: String,
    pub candidates: Vec<SenseCandidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SenseCandidate {
    pub label: String,
    pub context: Vec<String>,
}

/// Named-entity patterns and gazetteers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entities {
    pub person_pattern: String,
    pub organization_pattern: String,
    pub date_pattern: String,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub organizations: Vec<String>,
}

/// Emotion word lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentiment {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Pronoun lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discourse {
    pub anaphors: Vec<String>,
    #[serde(default)]
    pub pronouns: Vec<String>,
}

impl LexiconConfig {
    /// Parse a configuration from TOML text without validating it
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Serialize the configuration back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::InvalidLexicon(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(Error::InvalidLexicon(
                "metadata.code must not be empty".to_string(),
            ));
        }

        if self.stopwords.words.is_empty() {
            return Err(Error::InvalidLexicon(
                "No stopwords defined".to_string(),
            ));
        }

        if self.pos.rules.is_empty() {
            return Err(Error::InvalidLexicon("No POS rules defined".to_string()));
        }

        for rule in &self.pos.rules {
            rule.tag.parse::<Tag>().map_err(Error::InvalidLexicon)?;
        }

        let mut seen = HashSet::new();
        for entry in &self.senses {
            if entry.candidates.is_empty() {
                return Err(Error::InvalidLexicon(format!(
                    "Sense entry '{}' has no candidates",
                    entry.word
                )));
            }
            if !seen.insert(entry.word.to_lowercase()) {
                return Err(Error::InvalidLexicon(format!(
                    "Duplicate sense entry '{}'",
                    entry.word
                )));
            }
        }

        if self.discourse.anaphors.is_empty() {
            return Err(Error::InvalidLexicon(
                "No anaphors defined".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUILTIN: &str = include_str!("../../configs/english.toml");

    #[test]
    fn test_builtin_parses_and_validates() {
        let config = LexiconConfig::from_toml_str(BUILTIN).unwrap();
        assert_eq!(config.metadata.code, "en");
        assert_eq!(config.pos.rules.len(), 8);
        assert_eq!(config.senses.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sense_order_is_preserved() {
        let config = LexiconConfig::from_toml_str(BUILTIN).unwrap();
        let words: Vec<_> = config.senses.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["bank", "bark", "bat"]);
        assert_eq!(config.senses[0].candidates[0].label, "financial_institution");
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let mut config = LexiconConfig::from_toml_str(BUILTIN).unwrap();
        config.pos.rules[0].tag = "XYZ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("XYZ"));
    }

    #[test]
    fn test_empty_code_rejected() {
        let mut config = LexiconConfig::from_toml_str(BUILTIN).unwrap();
        config.metadata.code = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_sense_rejected() {
        let mut config = LexiconConfig::from_toml_str(BUILTIN).unwrap();
        let first = config.senses[0].clone();
        config.senses.push(first);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip_keeps_rules() {
        let config = LexiconConfig::from_toml_str(BUILTIN).unwrap();
        let text = config.to_toml_string().unwrap();
        let reparsed = LexiconConfig::from_toml_str(&text).unwrap();
        assert_eq!(reparsed.pos.rules.len(), config.pos.rules.len());
        assert_eq!(reparsed.entities.date_pattern, config.entities.date_pattern);
    }
}
