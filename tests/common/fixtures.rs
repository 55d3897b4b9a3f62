//! Shared corpus and embedding fixtures.
//!
//! Vectors live in four dimensions: one axis per leaning plus a spare axis
//! used to place article sentences at a chosen distance from the reference.

use std::sync::Arc;

use slant::{MockEmbedder, MockSentiment, ReferenceCorpus};

pub const LIBERAL: &str = "We must expand public healthcare for every family";
pub const CONSERVATIVE: &str = "Lower taxes let families keep what they earn";
pub const NEUTRAL: &str = "The council meets every second Tuesday";

/// Close to the liberal reference (similarity 0.9).
pub const LIBERAL_LEANING: &str = "Healthcare is a right for all";
/// Weakly similar to the conservative reference (similarity 0.2).
pub const WEAK_CONSERVATIVE: &str = "The new tax plan has some problems";

pub const DIM: usize = 4;

pub fn reference_corpus() -> Arc<ReferenceCorpus> {
    Arc::new(ReferenceCorpus::from_partitions(
        [LIBERAL],
        [CONSERVATIVE],
        [NEUTRAL],
    ))
}

pub fn mock_embedder() -> MockEmbedder {
    MockEmbedder::new(DIM)
        .with_vector(LIBERAL, vec![1.0, 0.0, 0.0, 0.0])
        .with_vector(CONSERVATIVE, vec![0.0, 1.0, 0.0, 0.0])
        .with_vector(NEUTRAL, vec![0.0, 0.0, 1.0, 0.0])
        .with_vector(LIBERAL_LEANING, vec![0.9, 0.0, 0.435_89, 0.0])
        .with_vector(WEAK_CONSERVATIVE, vec![0.0, 0.2, 0.0, 0.979_8])
}

pub fn mock_sentiment() -> MockSentiment {
    MockSentiment::new()
        .with_score(LIBERAL_LEANING, 0.6)
        .with_score(WEAK_CONSERVATIVE, -0.1)
}

/// Two-paragraph article: one liberal-leaning sentence, one weak conservative match.
pub fn two_sentence_article() -> String {
    format!("{LIBERAL_LEANING}.\n{WEAK_CONSERVATIVE}.")
}

/// JSON corpus file contents with `per_leaning` sentences per partition.
pub fn corpus_json(per_leaning: usize) -> serde_json::Value {
    let partition = |prefix: &str| -> Vec<String> {
        (0..per_leaning)
            .map(|i| format!("{prefix} sentence number {i}"))
            .collect()
    };
    serde_json::json!({
        "liberal": partition("liberal"),
        "conservative": partition("conservative"),
        "neutral": partition("neutral"),
    })
}
