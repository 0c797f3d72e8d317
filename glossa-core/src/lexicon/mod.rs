//! Lexicon: the fixed word lists and patterns every analyzer consults
//!
//! A lexicon is described by a TOML file ([`LexiconConfig`]) and compiled
//! once into lookup tables. The built-in English lexicon is embedded in the
//! library and shared behind an `Arc`.

pub mod config;
mod loader;

use std::collections::HashSet;
use std::path::Path;

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};
use crate::syntax::Tag;

pub use config::LexiconConfig;
pub use loader::{builtin, builtin_source};

/// Candidate senses of one ambiguous word, in table order
#[derive(Debug, Clone)]
pub struct SenseTable {
    word: String,
    candidates: Vec<(String, Vec<String>)>,
}

impl SenseTable {
    /// The ambiguous word this table describes
    pub fn word(&self) -> &str {
        &self.word
    }

    /// `(label, context words)` pairs in table order
    pub fn candidates(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.candidates
            .iter()
            .map(|(label, context)| (label.as_str(), context.as_slice()))
    }
}

/// Compiled lexicon tables
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,
    stopwords: HashSet<String>,
    pos_rules: Vec<(Tag, Regex)>,
    ambiguous: Vec<String>,
    senses: Vec<SenseTable>,
    person: Regex,
    organization: Regex,
    date: Regex,
    locations: Vec<String>,
    organizations: Vec<String>,
    positive: HashSet<String>,
    negative: HashSet<String>,
    anaphors: Vec<String>,
    pronouns: Vec<String>,
}

impl Lexicon {
    /// Create from configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        config.validate()?;

        let pos_rules = config
            .pos
            .rules
            .iter()
            .map(|rule| {
                let tag = rule.tag.parse::<Tag>().map_err(Error::InvalidLexicon)?;
                let regex = RegexBuilder::new(&rule.pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| Error::InvalidPattern {
                        name: format!("pos rule {tag}"),
                        source,
                    })?;
                Ok((tag, regex))
            })
            .collect::<Result<Vec<_>>>()?;

        let senses = config
            .senses
            .iter()
            .map(|entry| SenseTable {
                word: entry.word.to_lowercase(),
                candidates: entry
                    .candidates
                    .iter()
                    .map(|c| (c.label.clone(), lowercase_all(&c.context)))
                    .collect(),
            })
            .collect();

        let lexicon = Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            stopwords: lowercase_all(&config.stopwords.words).into_iter().collect(),
            pos_rules,
            ambiguous: lowercase_all(&config.ambiguity.words),
            senses,
            person: compile("entities.person_pattern", &config.entities.person_pattern)?,
            organization: compile(
                "entities.organization_pattern",
                &config.entities.organization_pattern,
            )?,
            date: compile("entities.date_pattern", &config.entities.date_pattern)?,
            locations: config.entities.locations.clone(),
            organizations: config.entities.organizations.clone(),
            positive: lowercase_all(&config.sentiment.positive).into_iter().collect(),
            negative: lowercase_all(&config.sentiment.negative).into_iter().collect(),
            anaphors: lowercase_all(&config.discourse.anaphors),
            pronouns: lowercase_all(&config.discourse.pronouns),
        };

        log::debug!(
            "compiled lexicon '{}' ({} stopwords, {} POS rules, {} sense tables)",
            lexicon.code,
            lexicon.stopwords.len(),
            lexicon.pos_rules.len(),
            lexicon.senses.len()
        );

        Ok(lexicon)
    }

    /// Parse, validate and compile a lexicon from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::from_config(&LexiconConfig::from_toml_str(source)?)
    }

    /// Load a lexicon from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading lexicon from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Lexicon language code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Lexicon display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive stopword test
    pub fn is_stop_word(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.stopwords.contains(&word.to_lowercase())
        } else {
            self.stopwords.contains(word)
        }
    }

    pub(crate) fn pos_rules(&self) -> &[(Tag, Regex)] {
        &self.pos_rules
    }

    /// Polysemous words, in table order
    pub fn ambiguous_words(&self) -> &[String] {
        &self.ambiguous
    }

    /// Sense table for `word`, if one is defined
    pub fn sense_table(&self, word: &str) -> Option<&SenseTable> {
        self.senses.iter().find(|table| table.word == word)
    }

    pub(crate) fn person_pattern(&self) -> &Regex {
        &self.person
    }

    pub(crate) fn organization_pattern(&self) -> &Regex {
        &self.organization
    }

    pub(crate) fn date_pattern(&self) -> &Regex {
        &self.date
    }

    /// Location gazetteer
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Organization gazetteer
    pub fn organizations(&self) -> &[String] {
        &self.organizations
    }

    pub(crate) fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    pub(crate) fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }

    /// Pronouns that trigger antecedent search
    pub fn anaphors(&self) -> &[String] {
        &self.anaphors
    }

    /// Pronoun inventory reported by pronoun detection
    pub fn pronouns(&self) -> &[String] {
        &self.pronouns
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        name: name.to_string(),
        source,
    })
}

fn lowercase_all(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}
