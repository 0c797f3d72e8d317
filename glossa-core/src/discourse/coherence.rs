//! Lexical coherence between adjacent sentences

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::lexical::tokenize;

/// Coherence of a text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coherence {
    /// `min(1, 2 * lexical_cohesion)`
    pub score: f64,
    /// Mean Jaccard overlap of adjacent sentence token sets
    pub lexical_cohesion: f64,
}

impl Coherence {
    pub fn quality(&self) -> CoherenceQuality {
        CoherenceQuality::from_score(self.score)
    }

    /// Strength of the lexical links between sentences
    pub fn cohesion_description(&self) -> &'static str {
        if self.lexical_cohesion > 0.4 {
            "Strong lexical connections between sentences"
        } else if self.lexical_cohesion > 0.2 {
            "Moderate lexical connections between sentences"
        } else {
            "Weak lexical connections between sentences"
        }
    }
}

/// Coherence band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoherenceQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl CoherenceQuality {
    /// Above 0.7, 0.5 and 0.3 respectively
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            CoherenceQuality::Excellent
        } else if score > 0.5 {
            CoherenceQuality::Good
        } else if score > 0.3 {
            CoherenceQuality::Fair
        } else {
            CoherenceQuality::Poor
        }
    }

    pub fn interpretation(&self) -> &'static str {
        match self {
            CoherenceQuality::Excellent => {
                "The text flows very well with strong logical connections between ideas."
            }
            CoherenceQuality::Good => {
                "The text has good coherence with clear relationships between sentences."
            }
            CoherenceQuality::Fair => {
                "The text has moderate coherence but could benefit from stronger connections."
            }
            CoherenceQuality::Poor => {
                "The text lacks coherence and would benefit from better organization and linking."
            }
        }
    }
}

impl fmt::Display for CoherenceQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CoherenceQuality::Excellent => "Excellent",
            CoherenceQuality::Good => "Good",
            CoherenceQuality::Fair => "Fair",
            CoherenceQuality::Poor => "Poor",
        };
        f.write_str(label)
    }
}

/// Score how strongly adjacent sentences share vocabulary.
///
/// Texts with fewer than two non-blank sentences are maximally coherent
/// (1.0, 1.0). Pairs whose token sets are both empty are not counted.
pub fn coherence_score(text: &str) -> Coherence {
    let sentences: Vec<&str> = text.split('.').filter(|s| !s.trim().is_empty()).collect();
    if sentences.len() < 2 {
        return Coherence {
            score: 1.0,
            lexical_cohesion: 1.0,
        };
    }

    let sets: Vec<HashSet<String>> = sentences
        .iter()
        .map(|s| tokenize(s).into_iter().collect())
        .collect();

    let mut total = 0.0;
    let mut comparisons = 0usize;
    for pair in sets.windows(2) {
        let union = pair[0].union(&pair[1]).count();
        if union > 0 {
            let intersection = pair[0].intersection(&pair[1]).count();
            total += intersection as f64 / union as f64;
            comparisons += 1;
        }
    }

    let lexical_cohesion = if comparisons > 0 {
        total / comparisons as f64
    } else {
        0.0
    };

    Coherence {
        score: (lexical_cohesion * 2.0).min(1.0),
        lexical_cohesion,
    }
}
