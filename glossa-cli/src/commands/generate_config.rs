//! Generate config command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use glossa_core::lexicon::builtin_source;
use glossa_core::LexiconConfig;
use std::fs;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Which template to write
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigKind {
    /// Lexicon tables, starting from the built-in English lexicon
    Lexicon,
    /// CLI settings (output format, preview sizes, lexicon path)
    Cli,
}

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Template kind
    #[arg(long, value_enum, default_value = "lexicon")]
    pub kind: ConfigKind,

    /// Language code written into a lexicon template
    #[arg(long, value_name = "CODE")]
    pub code: Option<String>,

    /// Language name written into a lexicon template
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        if self.file.exists() && !self.force {
            anyhow::bail!(
                "{} already exists; use --force to overwrite",
                self.file.display()
            );
        }

        let template = self.generate_template()?;
        fs::write(&self.file, template)
            .with_context(|| format!("Failed to write to {}", self.file.display()))?;
        log::info!("wrote {:?} template to {}", self.kind, self.file.display());

        if !quiet {
            println!("✓ Configuration template written to {}", self.file.display());
            println!();
            println!("Next steps:");
            match self.kind {
                ConfigKind::Lexicon => {
                    println!("1. Edit the word lists and patterns");
                    println!("2. Validate: glossa validate {}", self.file.display());
                    println!(
                        "3. Use it: glossa --lexicon {} sentiment \"...\"",
                        self.file.display()
                    );
                }
                ConfigKind::Cli => {
                    println!("1. Adjust the settings");
                    println!(
                        "2. Use it: glossa --config {} overview -i input.txt",
                        self.file.display()
                    );
                }
            }
        }
        Ok(())
    }

    /// Template content for the selected kind
    fn generate_template(&self) -> Result<String> {
        match self.kind {
            ConfigKind::Cli => {
                let body = CliConfig::default().to_toml_string()?;
                Ok(format!("# glossa CLI configuration\n\n{}", body))
            }
            ConfigKind::Lexicon if self.code.is_none() && self.name.is_none() => {
                Ok(builtin_source().to_string())
            }
            ConfigKind::Lexicon => {
                let mut config = LexiconConfig::from_toml_str(builtin_source())?;
                if let Some(code) = &self.code {
                    config.metadata.code = code.clone();
                }
                if let Some(name) = &self.name {
                    config.metadata.name = name.clone();
                }
                Ok(config.to_toml_string()?)
            }
        }
    }
}
