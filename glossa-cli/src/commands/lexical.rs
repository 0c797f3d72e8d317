//! Lexical commands: `profile` and `tokens`

use anyhow::Result;
use serde_json::json;

use super::Context;
use crate::input::InputArgs;
use crate::output::{Body, Report};

/// Foundation profile of the text
pub fn profile(ctx: &Context, input: &InputArgs) -> Result<Report> {
    let text = input.read()?;
    let profile = ctx.analyzer.profile(&text);
    let stats = ctx.analyzer.word_statistics(&text);
    log::debug!("profiled {} chars", profile.char_count);

    let overview = Body::pairs([
        (
            "Language",
            format!("{} ({})", profile.language.name(), profile.language.code()),
        ),
        ("Words", profile.word_count.to_string()),
        ("Characters", profile.char_count.to_string()),
        ("Unique words", stats.unique_words.to_string()),
        (
            "Average word length",
            format!("{:.1}", stats.average_word_length),
        ),
    ]);
    let distribution = Body::list(profile.distribution.iter().map(|share| {
        format!(
            "{} ({}): {:.1}%",
            share.language.name(),
            share.language.script(),
            share.percentage
        )
    }));

    Ok(Report::new(
        "Text Profile",
        json!({ "profile": profile, "statistics": stats }),
    )
    .section("Overview", overview)
    .section("Script distribution", distribution)
    .section("Ambiguous words", Body::list(&profile.ambiguous_words))
    .section("Preprocessed text", Body::Text(profile.preprocessed.clone())))
}

/// Tokens, stems and the stopword-filtered sequence
pub fn tokens(ctx: &Context, input: &InputArgs) -> Result<Report> {
    let text = input.read()?;
    let analyzer = &ctx.analyzer;
    let preview = &ctx.config.analysis;

    let tokens = analyzer.tokenize(&text);
    let stems: Vec<String> = tokens.iter().map(|token| analyzer.stem(token)).collect();
    let filtered = analyzer.filter_stopwords(&tokens);
    let stats = analyzer.word_statistics(&text);

    let data = json!({
        "tokens": tokens,
        "stems": stems,
        "filtered": filtered,
        "statistics": stats,
    });

    Ok(Report::new("Word-Level Analysis", data)
        .section(
            format!("Tokens ({} total)", tokens.len()),
            Body::List(preview_of(&tokens, preview.token_preview)),
        )
        .section(
            "Stems",
            Body::List(preview_of(&stems, preview.stem_preview)),
        )
        .section(
            format!("After stopword removal ({} words)", filtered.len()),
            Body::List(preview_of(&filtered, preview.stem_preview)),
        )
        .section(
            "Statistics",
            Body::pairs([
                ("Total tokens", stats.total_tokens.to_string()),
                ("Unique words", stats.unique_words.to_string()),
                (
                    "Average word length",
                    format!("{:.1}", stats.average_word_length),
                ),
            ]),
        ))
}

/// The first `limit` items, with a trailing "..." when some were cut
pub(crate) fn preview_of(items: &[String], limit: usize) -> Vec<String> {
    let mut shown: Vec<String> = items.iter().take(limit).cloned().collect();
    if items.len() > limit {
        shown.push("...".to_string());
    }
    shown
}
