//! Semantic commands: `entities` and `senses`

use anyhow::Result;
use glossa_core::semantic::EntityType;
use serde_json::json;

use super::Context;
use crate::input::InputArgs;
use crate::output::{Body, Report};

/// Named entities grouped by category
pub fn entities(ctx: &Context, input: &InputArgs) -> Result<Report> {
    let text = input.read()?;
    let mentions = ctx.analyzer.entities(&text);
    log::debug!("found {} entity mentions", mentions.total());

    let counts = Body::pairs(
        EntityType::ALL
            .iter()
            .map(|kind| (kind.label(), mentions.get(*kind).len())),
    );

    let mut report = Report::new(
        format!("Named Entities ({} found)", mentions.total()),
        json!(mentions),
    )
    .section("Summary", counts);
    for (kind, found) in mentions.iter() {
        report = report.section(kind.label(), Body::list(found));
    }
    Ok(report)
}

/// Senses of the ambiguous words, plus their pairwise similarity
pub fn senses(ctx: &Context, input: &InputArgs) -> Result<Report> {
    let text = input.read()?;
    let senses = ctx.analyzer.senses(&text);
    let similarity = ctx.analyzer.word_similarity(&text);

    let sense_body = if senses.is_empty() {
        Body::Text("No ambiguous words found that require disambiguation.".to_string())
    } else {
        Body::pairs(senses.iter().map(|s| (s.word.as_str(), s.sense.as_str())))
    };
    let similarity_body = if similarity.is_empty() {
        Body::Text("No similar words found for comparison.".to_string())
    } else {
        Body::list(
            similarity
                .iter()
                .map(|s| format!("{} <-> {}: {:.2}", s.word1, s.word2, s.score)),
        )
    };

    Ok(Report::new(
        "Word Sense Disambiguation",
        json!({ "senses": senses, "similarity": similarity }),
    )
    .section("Disambiguated words", sense_body)
    .section("Word similarity", similarity_body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;

    fn context() -> Context {
        Context::new(CliConfig::default(), None, true).unwrap()
    }

    #[test]
    fn test_entities_report() {
        let report = entities(
            &context(),
            &InputArgs::from_text("John Smith met Google staff in London in March 2024."),
        )
        .unwrap();
        assert_eq!(report.data["PERSON"][0], "John Smith");
        assert_eq!(report.data["LOCATION"][0], "London");
        assert_eq!(report.data["ORGANIZATION"][0], "Google");
        assert_eq!(report.data["DATE"][0], "March");
        assert_eq!(report.data["DATE"][1], "2024");
        // summary plus one section per category
        assert_eq!(report.sections.len(), 5);
    }

    #[test]
    fn test_senses_report() {
        let report = senses(
            &context(),
            &InputArgs::from_text("I deposited money at the bank."),
        )
        .unwrap();
        assert_eq!(report.data["senses"][0]["word"], "bank");
        assert_eq!(report.data["senses"][0]["sense"], "financial_institution");
        assert!(report.data["similarity"].as_array().unwrap().is_empty());
    }
}
