//! glossa CLI library
//!
//! This library provides the command-line interface for the glossa text
//! analysis toolkit: argument parsing, input handling, and rendering of
//! analysis results as text, JSON or Markdown.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

use cli::Cli;
use config::CliConfig;
use output::OutputFormat;

/// Run a parsed command line
pub fn run(cli: Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    let format = match cli.format {
        Some(format) => format,
        None => OutputFormat::from_name(&config.output.default_format).ok_or_else(|| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
        })?,
    };
    let pretty_json = config.output.pretty_json;

    log::info!("running {}", cli.command.name());
    log::debug!("output format {:?}, config {:?}", format, config);

    let report = cli
        .command
        .execute(config, cli.lexicon.as_deref(), cli.quiet)?;

    if let Some(report) = report {
        let writer = output::open_writer(cli.output.as_deref())?;
        let mut formatter = output::create_formatter(format, writer, pretty_json);
        formatter.format_report(&report)?;
        formatter.finish()?;
    }
    Ok(())
}
