//! JSON output formatter

use super::{OutputFormatter, Report};
use anyhow::Result;
use serde_json::Value;
use std::io::Write;

/// JSON formatter - outputs the structured result of each report.
///
/// A single report is written as one document; several are collected into
/// an array.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<Value>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        self.documents.push(report.data.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let output = if self.documents.len() == 1 {
            self.documents.remove(0)
        } else {
            Value::Array(std::mem::take(&mut self.documents))
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &output)?;
        } else {
            serde_json::to_writer(&mut self.writer, &output)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_document() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter
                .format_report(&Report::new("Sentiment", json!({"label": "positive"})))
                .unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "{\"label\":\"positive\"}\n");
    }

    #[test]
    fn test_multiple_documents_become_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, true);
            formatter.format_report(&Report::new("a", json!(1))).unwrap();
            formatter.format_report(&Report::new("b", json!(2))).unwrap();
            formatter.finish().unwrap();
        }
        let parsed: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, json!([1, 2]));
    }
}
