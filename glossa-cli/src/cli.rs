//! Command line argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Commands;
use crate::output::OutputFormat;

/// glossa - heuristic text analysis from the command line
#[derive(Debug, Parser)]
#[command(name = "glossa")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// CLI configuration file
    #[arg(long, value_name = "FILE", env = "GLOSSA_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Lexicon TOML file (default: built-in English lexicon)
    #[arg(long, value_name = "FILE", env = "GLOSSA_LEXICON", global = true)]
    pub lexicon: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter for the verbosity count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
