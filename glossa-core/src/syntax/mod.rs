//! Syntactic layer: POS tagging, phrase chunking and tree rendering

mod chunker;
mod pos;
mod tree;

pub use chunker::{chunk_phrases, transition, Action, ChunkState, Phrase, PhraseKind, TagClass};
pub use pos::{pos_tag, PosTagger, Tag, TaggedToken};
pub use tree::render_parse_tree;
