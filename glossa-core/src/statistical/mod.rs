//! Statistical layer: n-gram models and the perplexity heuristic

mod ngram;
mod perplexity;

pub use ngram::{ngram_counts, ngrams};
pub use perplexity::{perplexity, ModelQuality, PerplexityReport};
