//! Discourse commands: `anaphora` and `coherence`

use anyhow::Result;
use glossa_core::discourse::split_sentences;
use serde_json::{json, Map, Value};

use super::Context;
use crate::input::InputArgs;
use crate::output::{Body, Report};

/// Pronouns and the antecedent chosen for each occurrence
pub fn anaphora(ctx: &Context, input: &InputArgs) -> Result<Report> {
    let text = input.read()?;
    let pronouns = ctx.analyzer.pronouns(&text);
    let links = ctx.analyzer.anaphora(&text);

    // occurrence key -> antecedent, "unknown" when none was found
    let resolutions: Map<String, Value> = links
        .iter()
        .map(|link| (link.key(), Value::from(link.antecedent_or_unknown())))
        .collect();

    let resolution_body = if links.is_empty() {
        Body::Text("No anaphoric references found to resolve.".to_string())
    } else {
        Body::list(links.iter().map(|link| {
            format!(
                "\"{}\" (sentence {}, word {}) -> \"{}\"",
                link.pronoun,
                link.sentence_index + 1,
                link.word_index + 1,
                link.antecedent_or_unknown()
            )
        }))
    };

    Ok(Report::new(
        "Reference Resolution",
        json!({ "pronouns": pronouns, "links": links, "resolutions": resolutions }),
    )
    .section("Pronouns detected", Body::list(&pronouns))
    .section("Reference resolutions", resolution_body))
}

/// Coherence score with its quality band
pub fn coherence(ctx: &Context, input: &InputArgs) -> Result<Report> {
    let text = input.read()?;
    let coherence = ctx.analyzer.coherence(&text);
    let sentence_count = split_sentences(&text).len();
    let quality = coherence.quality();

    let data = json!({
        "score": coherence.score,
        "lexical_cohesion": coherence.lexical_cohesion,
        "quality": quality,
        "sentences": sentence_count,
        "interpretation": quality.interpretation(),
    });

    Ok(Report::new("Coherence Analysis", data)
        .section(
            "Assessment",
            Body::pairs([
                ("Score", format!("{:.1}%", coherence.score * 100.0)),
                ("Quality", quality.to_string()),
                ("Sentences", sentence_count.to_string()),
                (
                    "Lexical cohesion",
                    format!(
                        "{:.2} - {}",
                        coherence.lexical_cohesion,
                        coherence.cohesion_description()
                    ),
                ),
            ]),
        )
        .section(
            "Interpretation",
            Body::Text(quality.interpretation().to_string()),
        ))
}
