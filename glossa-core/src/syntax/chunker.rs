//! Phrase chunking as a three-state automaton
//!
//! States are [`ChunkState::None`], [`ChunkState::InNp`] and
//! [`ChunkState::InVp`]. Each tag is classified as noun-phrase material
//! (DT, JJ, NN), verb-phrase material (VB, RB) or a breaker (anything
//! else), and [`transition`] maps `(state, class)` to the next state plus
//! the action to take on the current phrase.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::pos::{Tag, TaggedToken};

/// Constituent type of a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhraseKind {
    #[serde(rename = "NP")]
    Np,
    #[serde(rename = "VP")]
    Vp,
}

impl fmt::Display for PhraseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhraseKind::Np => f.write_str("NP"),
            PhraseKind::Vp => f.write_str("VP"),
        }
    }
}

/// Maximal run of tokens forming one constituent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub kind: PhraseKind,
    pub words: Vec<String>,
}

/// Automaton state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkState {
    None,
    InNp,
    InVp,
}

/// What a tag contributes to chunking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    Noun,
    Verb,
    Breaker,
}

impl TagClass {
    pub fn of(tag: Tag) -> Self {
        match tag {
            Tag::DT | Tag::JJ | Tag::NN => TagClass::Noun,
            Tag::VB | Tag::RB => TagClass::Verb,
            Tag::IN | Tag::CC | Tag::PRP => TagClass::Breaker,
        }
    }
}

/// Effect of one transition on the phrase being built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append the word to the open phrase
    Extend,
    /// Emit the open phrase, if any, and start a new one with the word
    Open(PhraseKind),
    /// Emit the open phrase, if any, and drop the word
    Close,
}

/// Transition table
pub fn transition(state: ChunkState, class: TagClass) -> (ChunkState, Action) {
    match (state, class) {
        (ChunkState::InNp, TagClass::Noun) => (ChunkState::InNp, Action::Extend),
        (ChunkState::InVp, TagClass::Verb) => (ChunkState::InVp, Action::Extend),
        (_, TagClass::Noun) => (ChunkState::InNp, Action::Open(PhraseKind::Np)),
        (_, TagClass::Verb) => (ChunkState::InVp, Action::Open(PhraseKind::Vp)),
        (_, TagClass::Breaker) => (ChunkState::None, Action::Close),
    }
}

/// Group tagged tokens into NP and VP phrases.
///
/// Tokens whose tags break phrases (IN, CC, PRP) belong to no phrase.
pub fn chunk_phrases(tagged: &[TaggedToken]) -> Vec<Phrase> {
    let mut phrases = Vec::new();
    let mut state = ChunkState::None;
    let mut current: Option<Phrase> = None;

    for item in tagged {
        let (next, action) = transition(state, TagClass::of(item.tag));
        match action {
            Action::Extend => {
                if let Some(phrase) = current.as_mut() {
                    phrase.words.push(item.token.clone());
                }
            }
            Action::Open(kind) => {
                phrases.extend(current.take());
                current = Some(Phrase {
                    kind,
                    words: vec![item.token.clone()],
                });
            }
            Action::Close => phrases.extend(current.take()),
        }
        state = next;
    }

    phrases.extend(current);
    phrases
}
