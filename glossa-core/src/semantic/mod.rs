//! Semantic layer: entities, word senses and word similarity

mod entities;
mod similarity;
mod wsd;

pub use entities::{extract_entities, EntityMentions, EntityType};
pub use similarity::{levenshtein_distance, normalized_similarity, word_similarity, WordSimilarity};
pub use wsd::{disambiguate, SenseAssignment, DEFAULT_SENSE};
