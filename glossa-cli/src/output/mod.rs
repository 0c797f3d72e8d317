//! Output formatting module
//!
//! Commands describe their result as a [`Report`]: titled sections for
//! humans plus a JSON value for machines. Formatters decide which half to
//! render.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single report
    fn format_report(&mut self, report: &Report) -> Result<()>;

    /// Finalize output (e.g., write a footer, flush)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable sections
    Text,
    /// The analysis result as JSON
    Json,
    /// Markdown document
    Markdown,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [Self::Text, Self::Json, Self::Markdown];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Markdown => "markdown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Text => "Plain text sections (default)",
            Self::Json => "Machine readable JSON document",
            Self::Markdown => "Markdown with headings and tables",
        }
    }

    /// Parse a configured format name, `None` when unknown
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Result of one command
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub sections: Vec<Section>,
    /// Structured result written by the JSON formatter
    pub data: Value,
}

impl Report {
    pub fn new(title: impl Into<String>, data: Value) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
            data,
        }
    }

    /// Append a section
    pub fn section(mut self, heading: impl Into<String>, body: Body) -> Self {
        self.sections.push(Section {
            heading: heading.into(),
            body,
        });
        self
    }
}

#[derive(Debug, Clone)]
pub struct Section {
    pub heading: String,
    pub body: Body,
}

/// Section content
#[derive(Debug, Clone)]
pub enum Body {
    /// Label and value rows
    KeyValues(Vec<(String, String)>),
    /// Bullet items; empty lists render as "(none)"
    List(Vec<String>),
    /// Preformatted text, printed verbatim
    Text(String),
}

impl Body {
    /// Build key-value rows from anything displayable
    pub fn pairs<K, V, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        Body::KeyValues(
            rows.into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }

    pub fn list<T: ToString>(items: impl IntoIterator<Item = T>) -> Self {
        Body::List(items.into_iter().map(|item| item.to_string()).collect())
    }
}

/// Open the destination: the given file, or stdout
pub fn open_writer(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            log::debug!("writing output to {}", path.display());
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_name("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name(" Markdown "), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::from_name("xml"), None);
    }

    #[test]
    fn test_report_builder() {
        let report = Report::new("Tokens", json!({"count": 2}))
            .section("Stats", Body::pairs([("Count", 2)]))
            .section("Tokens", Body::list(["a", "b"]));

        assert_eq!(report.sections.len(), 2);
        match &report.sections[0].body {
            Body::KeyValues(rows) => assert_eq!(rows[0], ("Count".to_string(), "2".to_string())),
            other => panic!("unexpected body: {other:?}"),
        }
    }
}
