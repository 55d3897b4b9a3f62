use std::path::PathBuf;
use thiserror::Error;

use crate::corpus::CorpusError;
use crate::embedding::EmbeddingError;
use crate::search::SearchError;
use crate::sentiment::SentimentError;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("insufficient training data: {samples} samples, need at least {required}")]
    InsufficientData { samples: usize, required: usize },

    #[error("training data covers {found} class(es), need at least 2")]
    InsufficientClasses { found: usize },

    #[error("training sample {index} has non-finite features")]
    InvalidFeatures { index: usize },

    #[error("training did not converge: {reason}")]
    NotConverged { reason: String },

    #[error("classifier produced unknown class label {label}")]
    UnknownClass { label: u8 },

    #[error("unsupported classifier format version {found}")]
    UnsupportedVersion { found: u32 },

    #[error("failed to access classifier file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse classifier file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize classifier: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("embedding failed during training: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("sentiment scoring failed during training: {0}")]
    Sentiment(#[from] SentimentError),

    #[error("neighbor search failed during training: {0}")]
    Search(#[from] SearchError),

    #[error("corpus lookup failed during training: {0}")]
    Corpus(#[from] CorpusError),
}
