//! Sentence sentiment polarity.
//!
//! The engine only consumes [`SentimentScorer::polarity`], a compound score in
//! `[-1.0, 1.0]`. [`LexiconSentiment`] is the built-in scorer.

mod error;
pub mod lexicon;
#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::SentimentError;
pub use lexicon::LexiconSentiment;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSentiment;

/// Compound sentiment scorer.
pub trait SentimentScorer: Send + Sync {
    /// Returns the polarity of `sentence` in `[-1.0, 1.0]`.
    fn polarity(&self, sentence: &str) -> Result<f32, SentimentError>;
}

impl<S: SentimentScorer> SentimentScorer for std::sync::Arc<S> {
    fn polarity(&self, sentence: &str) -> Result<f32, SentimentError> {
        (**self).polarity(sentence)
    }
}

/// Checks that a scorer's output is a finite value in `[-1.0, 1.0]`.
pub fn validate_polarity(value: f32) -> Result<f32, SentimentError> {
    if value.is_finite() && (-1.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SentimentError::OutOfRange { value })
    }
}
