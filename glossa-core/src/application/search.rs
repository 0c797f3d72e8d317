//! Term-frequency document ranking

use serde::Serialize;

use crate::lexical::tokenize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A matching document and its relevance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit<'a> {
    /// Position in the input document list
    pub index: usize,
    pub document: &'a str,
    pub score: f64,
}

fn score_document(query: &[String], document: &str) -> f64 {
    if document.trim().is_empty() {
        return 0.0;
    }
    let words = tokenize(document);
    let matches: usize = query
        .iter()
        .map(|q| words.iter().filter(|w| *w == q).count())
        .sum();
    matches as f64 / query.len().max(1) as f64
}

/// Rank documents against `query`.
///
/// A document scores the number of its tokens equal to each query token,
/// summed over query tokens and divided by the query length. Blank and
/// zero-scoring documents are dropped. Hits are sorted by descending
/// score; equal scores keep input order.
pub fn search_documents<'a, S: AsRef<str> + Sync>(
    query: &str,
    documents: &'a [S],
) -> Vec<SearchHit<'a>> {
    let query = tokenize(query);

    #[cfg(feature = "parallel")]
    let scores: Vec<f64> = documents
        .par_iter()
        .map(|doc| score_document(&query, doc.as_ref()))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let scores: Vec<f64> = documents
        .iter()
        .map(|doc| score_document(&query, doc.as_ref()))
        .collect();

    let mut hits: Vec<SearchHit<'a>> = documents
        .iter()
        .zip(scores)
        .enumerate()
        .filter(|(_, (_, score))| *score > 0.0)
        .map(|(index, (doc, score))| SearchHit {
            index,
            document: doc.as_ref(),
            score,
        })
        .collect();

    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits
}
