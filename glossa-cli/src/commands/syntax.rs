//! Syntactic commands: `tag` and `tree`

use anyhow::Result;
use glossa_core::syntax::Tag;
use serde_json::json;

use super::Context;
use crate::input::InputArgs;
use crate::output::{Body, Report};

/// POS tags, phrases and tag counts
pub fn tag(ctx: &Context, input: &InputArgs) -> Result<Report> {
    let text = input.read()?;
    let tagged = ctx.analyzer.pos_tag(&text);
    let phrases = ctx.analyzer.phrases(&text);

    let count = |tag: Tag| tagged.iter().filter(|t| t.tag == tag).count();
    let statistics = Body::pairs([
        ("Nouns", count(Tag::NN)),
        ("Verbs", count(Tag::VB)),
        ("Adjectives", count(Tag::JJ)),
        ("Phrases", phrases.len()),
    ]);

    let tags = Body::list(
        tagged
            .iter()
            .map(|t| format!("{}/{}", t.token, t.tag)),
    );
    let phrase_list = Body::list(
        phrases
            .iter()
            .map(|p| format!("{}: {}", p.kind, p.words.join(" "))),
    );

    Ok(
        Report::new("Syntax Analysis", json!({ "tags": tagged, "phrases": phrases }))
            .section("POS tags", tags)
            .section("Phrases", phrase_list)
            .section("Statistics", statistics),
    )
}

/// Constituency tree rendered from the phrases
pub fn tree(ctx: &Context, input: &InputArgs) -> Result<Report> {
    let text = input.read()?;
    let phrases = ctx.analyzer.phrases(&text);
    let tree = glossa_core::syntax::render_parse_tree(&phrases);

    Ok(
        Report::new("Parse Tree", json!({ "tree": tree, "phrases": phrases }))
            .section("Constituency parse tree", Body::Text(tree.clone())),
    )
}
