//! Analyzer facade over every layer, bound to one lexicon

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::{self, EmotionalWords, QuestionType, SearchHit, Sentiment};
use crate::discourse::{self, Coherence, CoreferenceLink};
use crate::error::Result;
use crate::lexical::{self, LanguageCode, ScriptShare};
use crate::lexicon::{self, Lexicon};
use crate::report::{DocumentOverview, NgramReport, TextProfile, WordStatistics};
use crate::semantic::{self, EntityMentions, SenseAssignment, WordSimilarity};
use crate::statistical::{self, PerplexityReport};
use crate::syntax::{self, Phrase, TaggedToken};

/// Default number of sentences kept by [`Analyzer::summarize_default`]
pub const DEFAULT_SUMMARY_SENTENCES: usize = 2;

/// Runs every analysis against a shared lexicon.
///
/// Cloning is cheap; the lexicon is behind an `Arc`.
///
/// ```
/// use glossa_core::Analyzer;
///
/// let analyzer = Analyzer::new();
/// let sentiment = analyzer.sentiment("This is amazing and wonderful!");
/// assert_eq!(sentiment.score, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    lexicon: Arc<Lexicon>,
    summary_sentences: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Analyzer over the built-in English lexicon
    pub fn new() -> Self {
        Self::with_lexicon(lexicon::builtin())
    }

    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
        }
    }

    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn summary_sentences(&self) -> usize {
        self.summary_sentences
    }

    // Lexical layer

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        lexical::tokenize(text)
    }

    pub fn stem(&self, token: &str) -> String {
        lexical::stem(token)
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        lexical::is_stop_word(&self.lexicon, token)
    }

    pub fn filter_stopwords<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        lexical::filter_stopwords(&self.lexicon, tokens)
    }

    pub fn detect_language(&self, text: &str) -> LanguageCode {
        lexical::detect_language(text)
    }

    pub fn language_distribution(&self, text: &str) -> Vec<ScriptShare> {
        lexical::language_distribution(text)
    }

    pub fn ambiguous_words(&self, text: &str) -> Vec<String> {
        lexical::find_ambiguous_words(&self.lexicon, text)
    }

    /// Foundation profile of raw text
    pub fn profile(&self, text: &str) -> TextProfile {
        TextProfile {
            language: lexical::detect_language(text),
            word_count: text.split_whitespace().count(),
            char_count: text.chars().count(),
            ambiguous_words: self.ambiguous_words(text),
            preprocessed: lexical::preprocess(text),
            distribution: lexical::language_distribution(text),
        }
    }

    pub fn word_statistics(&self, text: &str) -> WordStatistics {
        WordStatistics::from_tokens(&lexical::tokenize(text))
    }

    // Statistical layer

    pub fn ngram_report(&self, text: &str) -> NgramReport {
        let tokens = lexical::tokenize(text);
        let bigrams = statistical::ngrams(&tokens, 2);
        let trigrams = statistical::ngrams(&tokens, 3);
        let bigram_counts = statistical::ngram_counts(&bigrams);
        let trigram_counts = statistical::ngram_counts(&trigrams);
        let vocabulary_size = WordStatistics::from_tokens(&tokens).unique_words;

        NgramReport {
            bigrams,
            trigrams,
            bigram_counts,
            trigram_counts,
            vocabulary_size,
        }
    }

    pub fn perplexity(&self, text: &str) -> PerplexityReport {
        statistical::perplexity(&lexical::tokenize(text))
    }

    // Syntactic layer

    pub fn pos_tag(&self, text: &str) -> Vec<TaggedToken> {
        syntax::pos_tag(&self.lexicon, &lexical::tokenize(text))
    }

    pub fn phrases(&self, text: &str) -> Vec<Phrase> {
        syntax::chunk_phrases(&self.pos_tag(text))
    }

    pub fn parse_tree(&self, text: &str) -> String {
        syntax::render_parse_tree(&self.phrases(text))
    }

    // Semantic layer

    pub fn entities(&self, text: &str) -> EntityMentions {
        semantic::extract_entities(&self.lexicon, text)
    }

    /// Senses of the ambiguous words found in `text`
    pub fn senses(&self, text: &str) -> Vec<SenseAssignment> {
        let ambiguous = self.ambiguous_words(text);
        semantic::disambiguate(&self.lexicon, text, &ambiguous)
    }

    /// Similarity between the ambiguous words found in `text`
    pub fn word_similarity(&self, text: &str) -> Vec<WordSimilarity> {
        semantic::word_similarity(&self.ambiguous_words(text))
    }

    // Discourse layer

    pub fn anaphora(&self, text: &str) -> Vec<CoreferenceLink> {
        discourse::resolve_anaphora(&self.lexicon, text)
    }

    pub fn pronouns(&self, text: &str) -> Vec<String> {
        discourse::find_pronouns(&self.lexicon, text)
    }

    pub fn coherence(&self, text: &str) -> Coherence {
        discourse::coherence_score(text)
    }

    // Application layer

    pub fn sentiment(&self, text: &str) -> Sentiment {
        application::sentiment_score(&self.lexicon, text)
    }

    pub fn emotional_words(&self, text: &str) -> EmotionalWords {
        application::find_emotional_words(&self.lexicon, text)
    }

    pub fn summarize(&self, text: &str, k: usize) -> String {
        application::summarize(&self.lexicon, text, k)
    }

    /// Summary with the configured sentence count
    pub fn summarize_default(&self, text: &str) -> String {
        self.summarize(text, self.summary_sentences)
    }

    pub fn answer(&self, question: &str, context: &str) -> String {
        application::answer_question(&self.lexicon, question, context)
    }

    pub fn question_type(&self, question: &str) -> QuestionType {
        application::identify_question_type(question)
    }

    pub fn search<'a, S: AsRef<str> + Sync>(
        &self,
        query: &str,
        documents: &'a [S],
    ) -> Vec<SearchHit<'a>> {
        application::search_documents(query, documents)
    }

    /// Comprehensive overview: language, size, sentiment, entities and a
    /// summary
    pub fn overview(&self, text: &str) -> DocumentOverview {
        let entities = self.entities(text);
        DocumentOverview {
            language: lexical::detect_language(text),
            word_count: text.split_whitespace().count(),
            sentiment: self.sentiment(text),
            entity_count: entities.total(),
            entities,
            summary: self.summarize_default(text),
        }
    }
}

/// Builder for [`Analyzer`]
#[derive(Debug, Default)]
pub struct AnalyzerBuilder {
    lexicon: Option<Arc<Lexicon>>,
    lexicon_file: Option<PathBuf>,
    summary_sentences: Option<usize>,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an already compiled lexicon
    pub fn lexicon(mut self, lexicon: Arc<Lexicon>) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Load the lexicon from a TOML file at build time. Takes precedence
    /// over [`AnalyzerBuilder::lexicon`].
    pub fn lexicon_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.lexicon_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sentences kept by [`Analyzer::summarize_default`]
    pub fn summary_sentences(mut self, k: usize) -> Self {
        self.summary_sentences = Some(k);
        self
    }

    pub fn build(self) -> Result<Analyzer> {
        let lexicon = match (self.lexicon_file, self.lexicon) {
            (Some(path), _) => Arc::new(Lexicon::from_file(path)?),
            (None, Some(lexicon)) => lexicon,
            (None, None) => lexicon::builtin(),
        };

        let mut analyzer = Analyzer::with_lexicon(lexicon);
        if let Some(k) = self.summary_sentences {
            analyzer.summary_sentences = k;
        }

        log::debug!(
            "built analyzer with lexicon '{}', summary of {} sentences",
            analyzer.lexicon.code(),
            analyzer.summary_sentences
        );
        Ok(analyzer)
    }
}
