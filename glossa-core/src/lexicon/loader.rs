//! Lexicon loader
//!
//! Manages the embedded English lexicon with one-time initialization.

use std::sync::{Arc, OnceLock};

use super::Lexicon;

const EMBEDDED_ENGLISH: &str = include_str!("../../configs/english.toml");

/// Embedded lexicon, compiled on first access
static EMBEDDED: OnceLock<Arc<Lexicon>> = OnceLock::new();

/// The built-in English lexicon
pub fn builtin() -> Arc<Lexicon> {
    EMBEDDED
        .get_or_init(|| {
            log::debug!("initializing embedded English lexicon");
            let lexicon = Lexicon::from_toml_str(EMBEDDED_ENGLISH)
                .expect("embedded English lexicon must be valid");
            Arc::new(lexicon)
        })
        .clone()
}

/// TOML source of the built-in lexicon, usable as an editable template
pub fn builtin_source() -> &'static str {
    EMBEDDED_ENGLISH
}
