//! Configuration module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Lexicon configuration
    #[serde(default)]
    pub lexicon: LexiconSource,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;
        let config = toml::from_str(&source)
            .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e.message())))?;
        log::debug!("loaded CLI configuration from {}", path.display());
        Ok(config)
    }

    /// Serialize to TOML, used as a starting template
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Analysis-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Sentences kept by `summarize` and `overview`
    pub summary_sentences: usize,

    /// Bigrams listed by `ngrams`
    pub ngram_top: usize,

    /// Trigrams listed by `ngrams`
    pub trigram_top: usize,

    /// Tokens shown by `tokens` in text and markdown output
    pub token_preview: usize,

    /// Stems and filtered words shown by `tokens`
    pub stem_preview: usize,

    /// Document count above which `search` shows a progress bar
    pub progress_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            summary_sentences: 2,
            ngram_top: 10,
            trigram_top: 8,
            token_preview: 20,
            stem_preview: 15,
            progress_threshold: 20,
        }
    }
}

/// Where the lexicon comes from
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct LexiconSource {
    /// Lexicon TOML file; the built-in English lexicon when unset
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
        assert_eq!(config.analysis.summary_sentences, 2);
        assert_eq!(config.analysis.ngram_top, 10);
        assert!(config.lexicon.path.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[analysis]\nsummary_sentences = 3\n\n[output]\ndefault_format = \"json\"").unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.analysis.summary_sentences, 3);
        assert_eq!(config.analysis.token_preview, 20);
        assert_eq!(config.output.default_format, "json");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/glossa.toml")).unwrap_err();
        assert!(err.to_string().starts_with("File not found"));
    }

    #[test]
    fn test_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[analysis]\nsummary_sentences = \"two\"").unwrap();
        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_template_round_trip() {
        let text = CliConfig::default().to_toml_string().unwrap();
        let parsed: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, CliConfig::default());
    }
}
