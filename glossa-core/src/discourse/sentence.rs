//! Naive sentence segmentation on '.'

/// Split on '.', trim each piece and drop the empty ones
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
