//! Plain text output formatter

use super::{Body, OutputFormatter, Report};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs sections separated by blank lines
pub struct TextFormatter<W: Write> {
    writer: W,
    reports: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, reports: 0 }
    }

    fn write_body(&mut self, body: &Body) -> Result<()> {
        match body {
            Body::KeyValues(rows) => {
                let width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
                for (key, value) in rows {
                    let label = format!("{key}:");
                    writeln!(self.writer, "  {:<width$}  {}", label, value, width = width + 1)?;
                }
            }
            Body::List(items) if items.is_empty() => writeln!(self.writer, "  (none)")?,
            Body::List(items) => {
                for item in items {
                    writeln!(self.writer, "  - {}", item)?;
                }
            }
            Body::Text(text) => {
                for line in text.lines() {
                    writeln!(self.writer, "  {}", line)?;
                }
            }
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        if self.reports > 0 {
            writeln!(self.writer)?;
        }
        self.reports += 1;

        writeln!(self.writer, "{}", report.title)?;
        writeln!(self.writer, "{}", "=".repeat(report.title.chars().count()))?;
        for section in &report.sections {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", section.heading)?;
            self.write_body(&section.body)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
