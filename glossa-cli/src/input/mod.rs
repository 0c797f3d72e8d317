//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::error::CliError;

/// Where the text to analyze comes from
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Text to analyze (read from stdin when neither TEXT nor --input is given)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Inline text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            input: None,
        }
    }

    /// Resolve the input to text. Blank input is an error.
    pub fn read(&self) -> Result<String> {
        let text = match (&self.text, &self.input) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => {
                if !path.exists() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                FileReader::read_text(path)?
            }
            (None, None) => {
                log::debug!("reading text from stdin");
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read from stdin")?;
                buffer
            }
        };

        if text.trim().is_empty() {
            return Err(CliError::EmptyInput.into());
        }
        Ok(text)
    }
}
