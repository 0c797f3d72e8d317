//! Statistical commands: `ngrams` and `perplexity`

use anyhow::Result;
use clap::Args;
use serde_json::json;

use super::Context;
use crate::input::InputArgs;
use crate::output::{Body, Report};

/// Arguments for the ngrams command
#[derive(Debug, Args)]
pub struct NgramsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Bigrams and trigrams listed (default: from config)
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

impl NgramsArgs {
    pub fn execute(&self, ctx: &Context) -> Result<Report> {
        let text = self.input.read()?;
        let report = ctx.analyzer.ngram_report(&text);
        let analysis = &ctx.config.analysis;
        let bigram_top = self.top.unwrap_or(analysis.ngram_top);
        let trigram_top = self.top.unwrap_or(analysis.trigram_top);

        let counted = |counts: &[(String, usize)], top: usize| {
            Body::list(
                counts
                    .iter()
                    .take(top)
                    .map(|(ngram, count)| format!("\"{}\" ({})", ngram, count)),
            )
        };

        let statistics = Body::pairs([
            ("Unique bigrams", report.unique_bigrams()),
            ("Unique trigrams", report.unique_trigrams()),
            ("Vocabulary size", report.vocabulary_size),
        ]);

        Ok(Report::new("N-gram Analysis", json!(report))
            .section(
                format!("Bigrams ({} total)", report.bigrams.len()),
                counted(&report.bigram_counts, bigram_top),
            )
            .section(
                format!("Trigrams ({} total)", report.trigrams.len()),
                counted(&report.trigram_counts, trigram_top),
            )
            .section("Statistics", statistics))
    }
}

/// Perplexity estimate with its quality band
pub fn perplexity(ctx: &Context, input: &InputArgs) -> Result<Report> {
    let text = input.read()?;
    let report = ctx.analyzer.perplexity(&text);

    let data = json!({
        "perplexity": report.perplexity,
        "entropy": report.entropy,
        "quality": report.quality,
        "interpretation": report.quality.interpretation(),
    });

    Ok(Report::new("Perplexity Analysis", data)
        .section(
            "Metrics",
            Body::pairs([
                ("Perplexity", format!("{:.2}", report.perplexity)),
                ("Entropy", format!("{:.2} bits", report.entropy)),
                ("Model quality", report.quality.to_string()),
            ]),
        )
        .section(
            "Interpretation",
            Body::Text(report.quality.interpretation().to_string()),
        ))
}
