//! Article text to paragraphs of sentences.

/// Splits `article` into paragraphs (non-empty lines) of sentences
/// (`.`-separated, trimmed, non-empty). Paragraphs without sentences are dropped.
pub fn content_to_sentences(article: &str) -> Vec<Vec<String>> {
    article
        .lines()
        .map(paragraph_sentences)
        .filter(|sentences| !sentences.is_empty())
        .collect()
}

/// Sentences of a single paragraph.
pub fn paragraph_sentences(paragraph: &str) -> Vec<String> {
    paragraph
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Character count used for length weighting.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
