//! Script-based language detection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages recognised by script detection, in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Hi,
    Ta,
    Te,
    Bn,
}

impl LanguageCode {
    /// All languages in detection order. The first entry wins ties.
    pub const ALL: [LanguageCode; 5] = [
        LanguageCode::En,
        LanguageCode::Hi,
        LanguageCode::Ta,
        LanguageCode::Te,
        LanguageCode::Bn,
    ];

    /// Two-letter language code
    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Hi => "hi",
            LanguageCode::Ta => "ta",
            LanguageCode::Te => "te",
            LanguageCode::Bn => "bn",
        }
    }

    /// English name of the language
    pub fn name(&self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Hi => "Hindi",
            LanguageCode::Ta => "Tamil",
            LanguageCode::Te => "Telugu",
            LanguageCode::Bn => "Bengali",
        }
    }

    /// Script the language is detected by
    pub fn script(&self) -> &'static str {
        match self {
            LanguageCode::En => "Latin",
            LanguageCode::Hi => "Devanagari",
            LanguageCode::Ta => "Tamil",
            LanguageCode::Te => "Telugu",
            LanguageCode::Bn => "Bengali",
        }
    }

    /// Whether `c` belongs to this language's script
    pub fn matches(&self, c: char) -> bool {
        match self {
            LanguageCode::En => c.is_ascii_alphabetic(),
            LanguageCode::Hi => ('\u{0900}'..='\u{097F}').contains(&c),
            LanguageCode::Bn => ('\u{0980}'..='\u{09FF}').contains(&c),
            LanguageCode::Ta => ('\u{0B80}'..='\u{0BFF}').contains(&c),
            LanguageCode::Te => ('\u{0C00}'..='\u{0C7F}').contains(&c),
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Share of the input written in one script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptShare {
    pub language: LanguageCode,
    /// Number of characters matched by the script
    pub count: usize,
    /// Percentage of all characters, rounded to one decimal place
    pub percentage: f64,
}

fn script_counts(text: &str) -> [usize; 5] {
    let mut counts = [0usize; 5];
    for c in text.chars() {
        for (slot, language) in counts.iter_mut().zip(LanguageCode::ALL.iter()) {
            if language.matches(c) {
                *slot += 1;
            }
        }
    }
    counts
}

/// Detect the dominant script of `text`.
///
/// Returns the language with the most matching characters. Ties go to the
/// language listed first in [`LanguageCode::ALL`]; text without any
/// matching character is reported as English.
pub fn detect_language(text: &str) -> LanguageCode {
    let counts = script_counts(text);

    let mut best = LanguageCode::En;
    let mut best_count = 0;
    for (language, &count) in LanguageCode::ALL.iter().zip(counts.iter()) {
        if count > best_count {
            best = *language;
            best_count = count;
        }
    }
    best
}

/// Per-script character shares, in detection order.
///
/// Percentages are taken over the total character count of `text`
/// (whitespace and punctuation included). Scripts with no match are
/// omitted.
pub fn language_distribution(text: &str) -> Vec<ScriptShare> {
    let total = text.chars().count();
    if total == 0 {
        return Vec::new();
    }

    LanguageCode::ALL
        .iter()
        .zip(script_counts(text))
        .filter(|(_, count)| *count > 0)
        .map(|(language, count)| ScriptShare {
            language: *language,
            count,
            percentage: (count as f64 / total as f64 * 1000.0).round() / 10.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_english() {
        assert_eq!(detect_language("Hello world"), LanguageCode::En);
    }

    #[test]
    fn test_detect_hindi() {
        assert_eq!(detect_language("नमस्ते दुनिया"), LanguageCode::Hi);
    }

    #[test]
    fn test_detect_tamil_telugu_bengali() {
        assert_eq!(detect_language("வணக்கம்"), LanguageCode::Ta);
        assert_eq!(detect_language("నమస్కారం"), LanguageCode::Te);
        assert_eq!(detect_language("নমস্কার"), LanguageCode::Bn);
    }

    #[test]
    fn test_empty_defaults_to_english() {
        assert_eq!(detect_language(""), LanguageCode::En);
        assert_eq!(detect_language("1234 !?"), LanguageCode::En);
    }

    #[test]
    fn test_tie_goes_to_first_language() {
        // two Latin letters, two Devanagari characters
        assert_eq!(detect_language("ab कख"), LanguageCode::En);
    }

    #[test]
    fn test_distribution() {
        let shares = language_distribution("abc कख");
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].language, LanguageCode::En);
        assert_eq!(shares[0].count, 3);
        assert_eq!(shares[0].percentage, 50.0);
        assert_eq!(shares[1].language, LanguageCode::Hi);
        assert_eq!(shares[1].percentage, 33.3);
    }

    #[test]
    fn test_distribution_empty() {
        assert!(language_distribution("").is_empty());
        assert!(language_distribution("123").is_empty());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&LanguageCode::Ta).unwrap();
        assert_eq!(json, "\"ta\"");
    }
}
