//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for document loading
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for `total` documents
    pub fn init_documents(&mut self, total: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} documents {msg}",
        ) {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Update progress for a loaded document
    pub fn document_loaded(&self, name: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Loaded: {}", name));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_draws_nothing() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_documents(10);
        assert!(!reporter.is_active());
        reporter.document_loaded("a.txt");
        reporter.finish();
    }

    #[test]
    fn test_active_reporter() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_documents(2);
        assert!(reporter.is_active());
        reporter.document_loaded("a.txt");
        reporter.document_loaded("b.txt");
        reporter.finish();
    }
}
