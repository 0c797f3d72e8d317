//! Heuristic perplexity estimate
//!
//! This is not a language-model perplexity. With no trained probabilities
//! the estimate is `v ^ (n / v)` where `n` is the token count and `v` the
//! vocabulary size, which grows with both length and lexical variety.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Quality band of a perplexity value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ModelQuality {
    /// Band for a perplexity value: below 50, 100 and 200 respectively
    pub fn from_perplexity(perplexity: f64) -> Self {
        if perplexity < 50.0 {
            ModelQuality::Excellent
        } else if perplexity < 100.0 {
            ModelQuality::Good
        } else if perplexity < 200.0 {
            ModelQuality::Fair
        } else {
            ModelQuality::Poor
        }
    }

    /// One-line reading of the band
    pub fn interpretation(&self) -> &'static str {
        match self {
            ModelQuality::Excellent => "Very predictable text with consistent patterns.",
            ModelQuality::Good => "Moderately predictable text with some variation.",
            ModelQuality::Fair => "Somewhat unpredictable text with diverse vocabulary.",
            ModelQuality::Poor => "Highly unpredictable text with very diverse vocabulary.",
        }
    }
}

impl fmt::Display for ModelQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ModelQuality::Excellent => "Excellent",
            ModelQuality::Good => "Good",
            ModelQuality::Fair => "Fair",
            ModelQuality::Poor => "Poor",
        };
        f.write_str(label)
    }
}

/// Perplexity estimate with derived entropy and band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerplexityReport {
    pub perplexity: f64,
    /// Bits, `log2(perplexity)`
    pub entropy: f64,
    pub quality: ModelQuality,
}

/// Estimate perplexity of a token sequence.
///
/// An empty sequence yields perplexity 1.0 and entropy 0.0. Entropy is
/// computed as `(n / v) * log2(v)`, which stays finite even when the
/// perplexity itself overflows to infinity.
pub fn perplexity<S: AsRef<str>>(tokens: &[S]) -> PerplexityReport {
    let vocabulary: HashSet<&str> = tokens.iter().map(AsRef::as_ref).collect();
    let n = tokens.len() as f64;
    let v = vocabulary.len() as f64;

    let (perplexity, entropy) = if vocabulary.is_empty() {
        (1.0, 0.0)
    } else {
        let exponent = n / v;
        (v.powf(exponent), exponent * v.log2())
    };

    PerplexityReport {
        perplexity,
        entropy,
        quality: ModelQuality::from_perplexity(perplexity),
    }
}
