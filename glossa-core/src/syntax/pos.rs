//! Rule-based part-of-speech tagging

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::lexicon::Lexicon;

/// Closed part-of-speech tag set
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// Determiner
    DT,
    /// Noun
    NN,
    /// Verb
    VB,
    /// Adjective
    JJ,
    /// Preposition
    IN,
    /// Adverb
    RB,
    /// Coordinating conjunction
    CC,
    /// Personal pronoun
    PRP,
}

impl Tag {
    pub const ALL: [Tag; 8] = [
        Tag::DT,
        Tag::NN,
        Tag::VB,
        Tag::JJ,
        Tag::IN,
        Tag::RB,
        Tag::CC,
        Tag::PRP,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::DT => "DT",
            Tag::NN => "NN",
            Tag::VB => "VB",
            Tag::JJ => "JJ",
            Tag::IN => "IN",
            Tag::RB => "RB",
            Tag::CC => "CC",
            Tag::PRP => "PRP",
        }
    }

    /// Human-readable category name
    pub fn description(&self) -> &'static str {
        match self {
            Tag::DT => "Determiner",
            Tag::NN => "Noun",
            Tag::VB => "Verb",
            Tag::JJ => "Adjective",
            Tag::IN => "Preposition",
            Tag::RB => "Adverb",
            Tag::CC => "Conjunction",
            Tag::PRP => "Pronoun",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown POS tag '{s}'"))
    }
}

/// A token with its assigned tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: String,
    pub tag: Tag,
}

/// Tags tokens with the lexicon's ordered pattern table
#[derive(Debug, Clone, Copy)]
pub struct PosTagger<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> PosTagger<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Tag of the first rule matching `token`, or NN when none does
    pub fn tag(&self, token: &str) -> Tag {
        self.lexicon
            .pos_rules()
            .iter()
            .find(|(_, pattern)| pattern.is_match(token))
            .map(|(tag, _)| *tag)
            .unwrap_or(Tag::NN)
    }

    /// Exactly one tag per token, in input order
    pub fn tag_all<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<TaggedToken> {
        tokens
            .iter()
            .map(|token| {
                let token = token.as_ref();
                TaggedToken {
                    token: token.to_string(),
                    tag: self.tag(token),
                }
            })
            .collect()
    }
}

/// Tag a token sequence with `lexicon`'s rules
pub fn pos_tag<S: AsRef<str>>(lexicon: &Lexicon, tokens: &[S]) -> Vec<TaggedToken> {
    PosTagger::new(lexicon).tag_all(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{self, Lexicon};

    #[test]
    fn test_tag_parse_and_display() {
        assert_eq!("PRP".parse::<Tag>(), Ok(Tag::PRP));
        assert_eq!("jj".parse::<Tag>(), Ok(Tag::JJ));
        assert!("XX".parse::<Tag>().unwrap_err().contains("XX"));
        assert_eq!(Tag::IN.to_string(), "IN");
    }

    #[test]
    fn test_builtin_rule_order() {
        let lexicon = lexicon::builtin();
        let tagger = PosTagger::new(&lexicon);
        assert_eq!(tagger.tag("the"), Tag::DT);
        // the NN rule precedes VB, so alphabetic tokens never reach it
        assert_eq!(tagger.tag("is"), Tag::NN);
        assert_eq!(tagger.tag("quickly"), Tag::NN);
    }

    #[test]
    fn test_default_is_noun() {
        let lexicon = lexicon::builtin();
        let tagger = PosTagger::new(&lexicon);
        assert_eq!(tagger.tag("2024"), Tag::NN);
        assert_eq!(tagger.tag("room_42"), Tag::NN);
    }

    #[test]
    fn test_one_tag_per_token() {
        let lexicon = lexicon::builtin();
        let tokens = ["the", "cat", "sat", "the"];
        let tagged = pos_tag(&lexicon, &tokens);
        assert_eq!(tagged.len(), 4);
        assert_eq!(tagged[0].tag, Tag::DT);
        assert_eq!(tagged[3].token, "the");
    }

    #[test]
    fn test_reordered_rules_reach_later_tags() {
        let source = lexicon::builtin_source().replace(
            "    { tag = \"NN\", pattern = '^[a-z]+$' },\n",
            "",
        );
        let source = source.replace(
            "    { tag = \"PRP\", pattern = '^(i|you|he|she|it|we|they|me|him|her|us|them)$' },\n",
            "    { tag = \"PRP\", pattern = '^(i|you|he|she|it|we|they|me|him|her|us|them)$' },\n    { tag = \"NN\", pattern = '^[a-z]+$' },\n",
        );
        let lexicon = Lexicon::from_toml_str(&source).unwrap();
        let tagger = PosTagger::new(&lexicon);
        assert_eq!(tagger.tag("is"), Tag::VB);
        assert_eq!(tagger.tag("Very"), Tag::RB);
        assert_eq!(tagger.tag("and"), Tag::CC);
        assert_eq!(tagger.tag("they"), Tag::PRP);
        assert_eq!(tagger.tag("cat"), Tag::NN);
    }
}
