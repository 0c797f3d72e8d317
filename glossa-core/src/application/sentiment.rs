//! Lexicon-based sentiment scoring

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexical::tokenize;
use crate::lexicon::Lexicon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => f.write_str("positive"),
            SentimentLabel::Negative => f.write_str("negative"),
            SentimentLabel::Neutral => f.write_str("neutral"),
        }
    }
}

/// Sentiment verdict
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    /// Signed, in `[-1, 1]`
    pub score: f64,
    /// In `[0, 1]`
    pub confidence: f64,
}

impl Sentiment {
    /// Verdict for text with no emotion words at all
    pub const NEUTRAL_DEFAULT: Sentiment = Sentiment {
        label: SentimentLabel::Neutral,
        score: 0.0,
        confidence: 0.5,
    };
}

/// Emotion words found in a text, in token order with duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionalWords {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Positive and negative tokens of `text`.
///
/// The two lists are matched independently; a token listed in both is
/// counted once on each side.
pub fn find_emotional_words(lexicon: &Lexicon, text: &str) -> EmotionalWords {
    let mut words = EmotionalWords::default();
    for token in tokenize(text) {
        if lexicon.is_negative(&token) {
            words.negative.push(token.clone());
        }
        if lexicon.is_positive(&token) {
            words.positive.push(token);
        }
    }
    words
}

/// Score sentiment from counts of positive and negative tokens.
///
/// With no emotion words the result is [`Sentiment::NEUTRAL_DEFAULT`].
/// Otherwise the label follows the strictly larger ratio, the score is
/// the signed ratio difference and the confidence its magnitude. Equal
/// counts give a neutral verdict with score and confidence 0.
pub fn sentiment_score(lexicon: &Lexicon, text: &str) -> Sentiment {
    let words = find_emotional_words(lexicon, text);
    let positive = words.positive.len();
    let negative = words.negative.len();
    let total = positive + negative;

    if total == 0 {
        return Sentiment::NEUTRAL_DEFAULT;
    }

    let positive_ratio = positive as f64 / total as f64;
    let negative_ratio = negative as f64 / total as f64;

    let (label, score) = if positive_ratio > negative_ratio {
        (SentimentLabel::Positive, positive_ratio - negative_ratio)
    } else if negative_ratio > positive_ratio {
        (SentimentLabel::Negative, -(negative_ratio - positive_ratio))
    } else {
        (SentimentLabel::Neutral, 0.0)
    };

    Sentiment {
        label,
        score,
        confidence: score.abs(),
    }
}
