//! Discourse layer: sentence segmentation, anaphora and coherence

mod anaphora;
mod coherence;
mod sentence;

pub use anaphora::{find_pronouns, resolve_anaphora, CoreferenceLink, UNKNOWN_ANTECEDENT};
pub use coherence::{coherence_score, Coherence, CoherenceQuality};
pub use sentence::split_sentences;
