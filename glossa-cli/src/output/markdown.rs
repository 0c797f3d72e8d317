//! Markdown output formatter

use super::{Body, OutputFormatter, Report};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - one heading per report, tables for key-value rows
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    report_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            report_count: 0,
        }
    }

    fn write_body(&mut self, body: &Body) -> Result<()> {
        match body {
            Body::KeyValues(rows) => {
                writeln!(self.writer, "| Field | Value |")?;
                writeln!(self.writer, "|---|---|")?;
                for (key, value) in rows {
                    writeln!(self.writer, "| {} | {} |", escape_cell(key), escape_cell(value))?;
                }
            }
            Body::List(items) if items.is_empty() => writeln!(self.writer, "*(none)*")?,
            Body::List(items) => {
                for item in items {
                    writeln!(self.writer, "- {}", item)?;
                }
            }
            Body::Text(text) => {
                writeln!(self.writer, "```")?;
                write!(self.writer, "{}", text)?;
                if !text.ends_with('\n') {
                    writeln!(self.writer)?;
                }
                writeln!(self.writer, "```")?;
            }
        }
        Ok(())
    }
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        if self.report_count > 0 {
            writeln!(self.writer)?;
        }
        self.report_count += 1;

        writeln!(self.writer, "# {}", report.title)?;
        for section in &report.sections {
            writeln!(self.writer)?;
            writeln!(self.writer, "## {}", section.heading)?;
            writeln!(self.writer)?;
            self.write_body(&section.body)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Generated by glossa {}*", env!("CARGO_PKG_VERSION"))?;
        self.writer.flush()?;
        Ok(())
    }
}
