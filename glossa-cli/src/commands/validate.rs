//! Validate command implementation

use anyhow::Result;
use clap::Args;
use glossa_core::{Lexicon, LexiconConfig};
use serde_json::json;
use std::path::PathBuf;

use crate::input::FileReader;
use crate::output::{Body, Report};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Lexicon file to validate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl ValidateArgs {
    /// Parse, validate and compile the lexicon; report its table sizes
    pub fn execute(&self) -> Result<Report> {
        log::info!("validating lexicon {}", self.file.display());
        let source = FileReader::read_text(&self.file)?;

        let config = LexiconConfig::from_toml_str(&source)
            .and_then(|config| Lexicon::from_config(&config).map(|_| config))
            .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

        let tables = [
            ("Stopwords", config.stopwords.words.len()),
            ("POS rules", config.pos.rules.len()),
            ("Ambiguous words", config.ambiguity.words.len()),
            ("Sense tables", config.senses.len()),
            ("Locations", config.entities.locations.len()),
            ("Organizations", config.entities.organizations.len()),
            ("Positive words", config.sentiment.positive.len()),
            ("Negative words", config.sentiment.negative.len()),
            ("Anaphors", config.discourse.anaphors.len()),
            ("Pronouns", config.discourse.pronouns.len()),
        ];

        let data = json!({
            "valid": true,
            "file": self.file.display().to_string(),
            "code": config.metadata.code,
            "name": config.metadata.name,
            "tables": tables
                .iter()
                .map(|(name, count)| json!({ "table": name, "entries": count }))
                .collect::<Vec<_>>(),
        });

        Ok(Report::new("Lexicon is valid", data)
            .section(
                "Metadata",
                Body::pairs([
                    ("File", self.file.display().to_string()),
                    ("Language code", config.metadata.code.clone()),
                    ("Language name", config.metadata.name.clone()),
                ]),
            )
            .section("Tables", Body::pairs(tables)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_builtin_template() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(glossa_core::lexicon::builtin_source().as_bytes())
            .unwrap();

        let report = ValidateArgs {
            file: file.path().to_path_buf(),
        }
        .execute()
        .unwrap();
        assert_eq!(report.data["code"], "en");
        assert_eq!(report.data["tables"][1]["entries"], 8);
    }

    #[test]
    fn test_validate_bad_regex() {
        let source = glossa_core::lexicon::builtin_source()
            .replace("organization_pattern = '", "organization_pattern = '(");
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(source.as_bytes()).unwrap();

        let err = ValidateArgs {
            file: file.path().to_path_buf(),
        }
        .execute()
        .unwrap_err();
        assert!(err.to_string().starts_with("Validation failed"));
    }

    #[test]
    fn test_validate_missing_file() {
        let err = ValidateArgs {
            file: PathBuf::from("/nonexistent/lexicon.toml"),
        }
        .execute()
        .unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
