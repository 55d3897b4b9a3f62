use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("sentiment scoring failed: {reason}")]
    ScoringFailed { reason: String },

    #[error("polarity {value} outside [-1, 1]")]
    OutOfRange { value: f32 },
}
