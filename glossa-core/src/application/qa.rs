//! Keyword-overlap question answering

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexical::tokenize;
use crate::lexicon::Lexicon;

/// Answer returned when no sentence shares a keyword with the question
pub const NO_ANSWER: &str = "I couldn't find a relevant answer in the provided context.";

/// The context sentence sharing the most question keywords.
///
/// Keywords are the question's non-stopword tokens, counted with
/// multiplicity. The first sentence with the strictly highest count wins.
pub fn answer_question(lexicon: &Lexicon, question: &str, context: &str) -> String {
    let keywords: Vec<String> = tokenize(question)
        .into_iter()
        .filter(|word| !lexicon.is_stop_word(word))
        .collect();

    let mut best: Option<&str> = None;
    let mut max_overlap = 0;
    for sentence in context.split('.').filter(|s| !s.trim().is_empty()) {
        let words = tokenize(sentence);
        let overlap = keywords.iter().filter(|k| words.contains(k)).count();
        if overlap > max_overlap {
            max_overlap = overlap;
            best = Some(sentence.trim());
        }
    }

    best.map_or_else(|| NO_ANSWER.to_string(), str::to_string)
}

/// Coarse question category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    What,
    Who,
    When,
    Where,
    Why,
    How,
    General,
}

impl QuestionType {
    /// Categories tested in order by [`identify_question_type`]
    const KEYWORDS: [(&'static str, QuestionType); 6] = [
        ("what", QuestionType::What),
        ("who", QuestionType::Who),
        ("when", QuestionType::When),
        ("where", QuestionType::Where),
        ("why", QuestionType::Why),
        ("how", QuestionType::How),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::What => "WHAT (Definition/Description)",
            QuestionType::Who => "WHO (Person)",
            QuestionType::When => "WHEN (Time)",
            QuestionType::Where => "WHERE (Location)",
            QuestionType::Why => "WHY (Reason)",
            QuestionType::How => "HOW (Method/Process)",
            QuestionType::General => "GENERAL (Other)",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a question by the first interrogative it contains.
///
/// This is a case-insensitive substring test, so "somewhat" counts as
/// WHAT and "show" as HOW.
pub fn identify_question_type(question: &str) -> QuestionType {
    let lowered = question.to_lowercase();
    QuestionType::KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map_or(QuestionType::General, |(_, kind)| *kind)
}
