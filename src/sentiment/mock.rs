use std::collections::HashMap;

use parking_lot::RwLock;

use super::{SentimentError, SentimentScorer};

/// Test scorer returning fixed polarities (default `0.0` for unknown sentences).
#[derive(Debug, Default)]
pub struct MockSentiment {
    scores: RwLock<HashMap<String, f32>>,
    failing: RwLock<Option<String>>,
}

impl MockSentiment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(self, sentence: &str, polarity: f32) -> Self {
        self.scores.write().insert(sentence.to_string(), polarity);
        self
    }

    /// Makes scoring `sentence` fail.
    pub fn with_failure(self, sentence: &str) -> Self {
        *self.failing.write() = Some(sentence.to_string());
        self
    }
}

impl SentimentScorer for MockSentiment {
    fn polarity(&self, sentence: &str) -> Result<f32, SentimentError> {
        if self.failing.read().as_deref() == Some(sentence) {
            return Err(SentimentError::ScoringFailed {
                reason: format!("mock failure for {sentence:?}"),
            });
        }
        Ok(self.scores.read().get(sentence).copied().unwrap_or(0.0))
    }
}
