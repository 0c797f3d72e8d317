//! List command implementation

use glossa_core::syntax::Tag;
use glossa_core::LanguageCode;
use serde_json::json;

use super::ListCommands;
use crate::output::{Body, OutputFormat, Report};

/// Describe the requested components
pub fn execute(subcommand: ListCommands) -> Report {
    match subcommand {
        ListCommands::Formats => {
            let formats = OutputFormat::ALL;
            Report::new(
                "Output formats",
                json!(formats
                    .iter()
                    .map(|f| json!({ "name": f.name(), "description": f.description() }))
                    .collect::<Vec<_>>()),
            )
            .section(
                "Formats",
                Body::pairs(formats.iter().map(|f| (f.name(), f.description()))),
            )
        }
        ListCommands::Languages => Report::new(
            "Detectable languages",
            json!(LanguageCode::ALL
                .iter()
                .map(|l| json!({ "code": l, "name": l.name(), "script": l.script() }))
                .collect::<Vec<_>>()),
        )
        .section(
            "Languages",
            Body::pairs(
                LanguageCode::ALL
                    .iter()
                    .map(|l| (l.code(), format!("{} ({} script)", l.name(), l.script()))),
            ),
        ),
        ListCommands::Tags => Report::new(
            "Part-of-speech tags",
            json!(Tag::ALL
                .iter()
                .map(|t| json!({ "tag": t, "description": t.description() }))
                .collect::<Vec<_>>()),
        )
        .section(
            "Tags",
            Body::pairs(Tag::ALL.iter().map(|t| (t.as_str(), t.description()))),
        ),
    }
}
