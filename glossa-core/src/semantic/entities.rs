//! Named-entity extraction
//!
//! Four independent rules, one per category. A mention may appear in more
//! than one category; categories never exclude each other.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexicon::Lexicon;

/// Entity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityType {
    Person,
    Location,
    Organization,
    Date,
}

impl EntityType {
    pub const ALL: [EntityType; 4] = [
        EntityType::Person,
        EntityType::Location,
        EntityType::Organization,
        EntityType::Date,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EntityType::Person => "PERSON",
            EntityType::Location => "LOCATION",
            EntityType::Organization => "ORGANIZATION",
            EntityType::Date => "DATE",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Deduplicated mentions per category, in order of discovery
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMentions {
    #[serde(rename = "PERSON")]
    pub person: Vec<String>,
    #[serde(rename = "LOCATION")]
    pub location: Vec<String>,
    #[serde(rename = "ORGANIZATION")]
    pub organization: Vec<String>,
    #[serde(rename = "DATE")]
    pub date: Vec<String>,
}

impl EntityMentions {
    /// Mentions of one category
    pub fn get(&self, kind: EntityType) -> &[String] {
        match kind {
            EntityType::Person => &self.person,
            EntityType::Location => &self.location,
            EntityType::Organization => &self.organization,
            EntityType::Date => &self.date,
        }
    }

    fn get_mut(&mut self, kind: EntityType) -> &mut Vec<String> {
        match kind {
            EntityType::Person => &mut self.person,
            EntityType::Location => &mut self.location,
            EntityType::Organization => &mut self.organization,
            EntityType::Date => &mut self.date,
        }
    }

    fn insert(&mut self, kind: EntityType, mention: &str) {
        let list = self.get_mut(kind);
        if !list.iter().any(|m| m == mention) {
            list.push(mention.to_string());
        }
    }

    /// Categories with their mentions, in fixed category order
    pub fn iter(&self) -> impl Iterator<Item = (EntityType, &[String])> {
        EntityType::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Total number of mentions across all categories
    pub fn total(&self) -> usize {
        self.iter().map(|(_, mentions)| mentions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Extract entity mentions from raw (not tokenized) text.
///
/// - PERSON: two adjacent capitalized words
/// - LOCATION: gazetteer entries contained in the text
/// - ORGANIZATION: gazetteer entries contained in the text, then
///   `Name Inc.`/`Corp.`/`Ltd.` suffix matches
/// - DATE: numeric dates, four-digit years and month names
pub fn extract_entities(lexicon: &Lexicon, text: &str) -> EntityMentions {
    let mut mentions = EntityMentions::default();

    for m in lexicon.person_pattern().find_iter(text) {
        mentions.insert(EntityType::Person, m.as_str());
    }

    for location in lexicon.locations() {
        if text.contains(location.as_str()) {
            mentions.insert(EntityType::Location, location);
        }
    }

    for organization in lexicon.organizations() {
        if text.contains(organization.as_str()) {
            mentions.insert(EntityType::Organization, organization);
        }
    }
    for m in lexicon.organization_pattern().find_iter(text) {
        mentions.insert(EntityType::Organization, m.as_str());
    }

    for m in lexicon.date_pattern().find_iter(text) {
        mentions.insert(EntityType::Date, m.as_str());
    }

    mentions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon;

    const NEWS: &str = "Apple Inc. CEO Tim Cook met with President Biden at the White House in Washington D.C. on January 15, 2024.";

    #[test]
    fn test_news_sentence() {
        let lexicon = lexicon::builtin();
        let entities = extract_entities(&lexicon, NEWS);
        assert_eq!(
            entities.person,
            vec!["Apple Inc", "Tim Cook", "President Biden", "White House"]
        );
        assert_eq!(entities.location, vec!["Washington"]);
        assert_eq!(entities.organization, vec!["Apple", "Apple Inc."]);
        assert_eq!(entities.date, vec!["January", "2024"]);
        assert_eq!(entities.total(), 9);
    }

    #[test]
    fn test_dedupe_within_category() {
        let lexicon = lexicon::builtin();
        let entities = extract_entities(&lexicon, "Ada Lovelace met Ada Lovelace in 1843 and 1843.");
        assert_eq!(entities.person, vec!["Ada Lovelace"]);
        assert_eq!(entities.date, vec!["1843"]);
    }

    #[test]
    fn test_numeric_dates() {
        let lexicon = lexicon::builtin();
        let entities = extract_entities(&lexicon, "Due 12/05/2023 or 1-2-24.");
        assert_eq!(entities.date, vec!["12/05/2023", "1-2-24"]);
    }

    #[test]
    fn test_substring_gazetteer_match() {
        let lexicon = lexicon::builtin();
        let entities = extract_entities(&lexicon, "Indiana is not a country");
        // gazetteer matching is plain containment
        assert_eq!(entities.location, vec!["India"]);
    }

    #[test]
    fn test_empty_text() {
        let lexicon = lexicon::builtin();
        let entities = extract_entities(&lexicon, "");
        assert!(entities.is_empty());
        assert_eq!(entities.iter().count(), 4);
    }

    #[test]
    fn test_serialized_keys() {
        let lexicon = lexicon::builtin();
        let entities = extract_entities(&lexicon, "NASA launched in 1958.");
        let json = serde_json::to_value(&entities).unwrap();
        assert_eq!(json["ORGANIZATION"][0], "NASA");
        assert_eq!(json["DATE"][0], "1958");
    }
}
