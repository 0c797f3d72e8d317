//! Application layer: sentiment, summarization, QA and search

mod qa;
mod search;
mod sentiment;
mod summarize;

pub use qa::{answer_question, identify_question_type, QuestionType, NO_ANSWER};
pub use search::{search_documents, SearchHit};
pub use sentiment::{find_emotional_words, sentiment_score, EmotionalWords, Sentiment, SentimentLabel};
pub use summarize::summarize;
