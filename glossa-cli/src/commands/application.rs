//! Application commands: `sentiment`, `summarize`, `ask`, `search` and
//! `overview`

use anyhow::Result;
use clap::Args;
use glossa_core::discourse::split_sentences;
use glossa_core::semantic::EntityMentions;
use serde_json::json;

use super::Context;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, InputArgs};
use crate::output::{Body, Report};
use crate::progress::ProgressReporter;

/// Sentiment verdict with the words behind it
pub fn sentiment(ctx: &Context, input: &InputArgs) -> Result<Report> {
    let text = input.read()?;
    let sentiment = ctx.analyzer.sentiment(&text);
    let words = ctx.analyzer.emotional_words(&text);

    Ok(Report::new(
        "Sentiment Analysis",
        json!({ "sentiment": sentiment, "emotional_words": words }),
    )
    .section(
        "Overall sentiment",
        Body::pairs([
            ("Label", sentiment.label.to_string()),
            ("Score", format!("{:.2}", sentiment.score)),
            ("Confidence", format!("{:.1}%", sentiment.confidence * 100.0)),
        ]),
    )
    .section("Positive words", Body::list(&words.positive))
    .section("Negative words", Body::list(&words.negative)))
}

/// Arguments for the summarize command
#[derive(Debug, Args)]
pub struct SummarizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Sentences to keep (default: from config)
    #[arg(short = 'k', long, value_name = "N")]
    pub sentences: Option<usize>,
}

impl SummarizeArgs {
    pub fn execute(&self, ctx: &Context) -> Result<Report> {
        let text = self.input.read()?;
        let k = self.sentences.unwrap_or(ctx.analyzer.summary_sentences());
        let summary = ctx.analyzer.summarize(&text, k);
        let original_sentences = split_sentences(&text).len();

        let original_chars = text.chars().count();
        let summary_chars = summary.chars().count();
        let compression = if original_chars == 0 {
            0.0
        } else {
            (1.0 - summary_chars as f64 / original_chars as f64) * 100.0
        };

        let data = json!({
            "summary": summary,
            "sentences": k,
            "original_sentences": original_sentences,
            "original_chars": original_chars,
            "summary_chars": summary_chars,
        });

        Ok(Report::new("Text Summarization", data)
            .section("Summary", Body::Text(summary.clone()))
            .section(
                "Statistics",
                Body::pairs([
                    ("Original", format!("{} chars", original_chars)),
                    ("Summary", format!("{} chars", summary_chars)),
                    ("Compression", format!("{:.1}%", compression)),
                    (
                        "Sentences",
                        format!("{} -> {}", original_sentences, k.min(original_sentences)),
                    ),
                ]),
            ))
    }
}

/// Arguments for the ask command
#[derive(Debug, Args)]
pub struct AskArgs {
    /// Question to answer
    #[arg(value_name = "QUESTION")]
    pub question: String,

    /// Context the answer is drawn from
    #[command(flatten)]
    pub context: InputArgs,
}

impl AskArgs {
    pub fn execute(&self, ctx: &Context) -> Result<Report> {
        if self.question.trim().is_empty() {
            return Err(CliError::EmptyQuestion.into());
        }
        let context = self.context.read()?;
        let question_type = ctx.analyzer.question_type(&self.question);
        let answer = ctx.analyzer.answer(&self.question, &context);
        log::debug!("question classified as {:?}", question_type);

        Ok(Report::new(
            "Question Answering",
            json!({
                "question": self.question,
                "question_type": question_type,
                "answer": answer,
            }),
        )
        .section(
            "Question",
            Body::pairs([
                ("Question", self.question.clone()),
                ("Type", question_type.to_string()),
            ]),
        )
        .section("Answer", Body::Text(answer.clone())))
    }
}

/// Arguments for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search query
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Document files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", num_args = 1..)]
    pub documents: Vec<String>,

    /// Inline document text (repeatable)
    #[arg(long = "doc", value_name = "TEXT")]
    pub docs: Vec<String>,
}

impl SearchArgs {
    /// Inline documents first, then files in path order
    fn load_documents(&self, ctx: &Context) -> Result<Vec<(String, String)>> {
        let mut documents: Vec<(String, String)> = self
            .docs
            .iter()
            .enumerate()
            .map(|(i, text)| (format!("doc {}", i + 1), text.clone()))
            .collect();

        if !self.documents.is_empty() {
            let paths = resolve_patterns(&self.documents)?;
            let mut progress = ProgressReporter::new(ctx.quiet);
            if paths.len() > ctx.config.analysis.progress_threshold {
                progress.init_documents(paths.len() as u64);
            }

            for path in &paths {
                let text = FileReader::read_text(path)?;
                progress.document_loaded(&path.display().to_string());
                documents.push((path.display().to_string(), text));
            }
            progress.finish();
        }

        if documents.is_empty() {
            anyhow::bail!("No documents to search; use --documents or --doc");
        }
        log::info!("searching {} documents", documents.len());
        Ok(documents)
    }

    pub fn execute(&self, ctx: &Context) -> Result<Report> {
        if self.query.trim().is_empty() {
            return Err(CliError::EmptyQuery.into());
        }
        let documents = self.load_documents(ctx)?;
        let texts: Vec<&str> = documents.iter().map(|(_, text)| text.as_str()).collect();
        let hits = ctx.analyzer.search(&self.query, &texts);

        let results: Vec<_> = hits
            .iter()
            .map(|hit| {
                json!({
                    "index": hit.index,
                    "source": documents[hit.index].0,
                    "score": hit.score,
                    "document": hit.document,
                })
            })
            .collect();

        let listing = Body::list(hits.iter().map(|hit| {
            format!(
                "{} - relevance {:.1}%: {}",
                documents[hit.index].0,
                hit.score * 100.0,
                excerpt(hit.document, 80)
            )
        }));

        Ok(Report::new(
            "Document Search",
            json!({
                "query": self.query,
                "documents": documents.len(),
                "results": results,
            }),
        )
        .section(
            "Query",
            Body::pairs([
                ("Query", format!("\"{}\"", self.query)),
                ("Documents searched", documents.len().to_string()),
                ("Matches", hits.len().to_string()),
            ]),
        )
        .section("Results", listing))
    }
}

/// First `max` characters of a document on one line
fn excerpt(document: &str, max: usize) -> String {
    let flat = document.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        flat
    } else {
        let cut: String = flat.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    }
}

/// Language, size, sentiment, entities and summary of one document
pub fn overview(ctx: &Context, input: &InputArgs) -> Result<Report> {
    let text = input.read()?;
    let overview = ctx.analyzer.overview(&text);

    Ok(Report::new("Comprehensive Analysis", json!(overview))
        .section(
            "Document overview",
            Body::pairs([
                ("Language", overview.language.name().to_string()),
                ("Words", overview.word_count.to_string()),
                ("Sentiment", overview.sentiment.label.to_string()),
                ("Entities", overview.entity_count.to_string()),
            ]),
        )
        .section("Key summary", Body::Text(overview.summary.clone()))
        .section(
            "Sentiment",
            Body::pairs([
                ("Score", format!("{:.2}", overview.sentiment.score)),
                (
                    "Confidence",
                    format!("{:.1}%", overview.sentiment.confidence * 100.0),
                ),
            ]),
        )
        .section("Key entities", entity_lines(&overview.entities)))
}

fn entity_lines(entities: &EntityMentions) -> Body {
    Body::list(
        entities
            .iter()
            .filter(|(_, found)| !found.is_empty())
            .map(|(kind, found)| format!("{}: {}", kind, found.join(", "))),
    )
}
