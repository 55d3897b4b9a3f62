use thiserror::Error;

use crate::corpus::CorpusError;
use crate::embedding::EmbeddingError;
use crate::search::SearchError;
use crate::sentiment::SentimentError;

/// Everything that can abort scoring a sentence, paragraph or article.
///
/// A failure on any sentence aborts the whole paragraph or article.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// A neighbor sentence has no label in the reference corpus.
    #[error("sentence has no label in the reference corpus: {sentence:?}")]
    UnknownSentence { sentence: String },

    #[error(
        "no admissible neighbor for index {index} among {k} candidates ({blacklisted} blacklisted)"
    )]
    NoAdmissibleNeighbor {
        index: usize,
        k: usize,
        blacklisted: usize,
    },

    #[error("embedder failure: {0}")]
    EmbedderFailure(#[from] EmbeddingError),

    #[error("sentiment scorer failure: {0}")]
    SentimentScorerFailure(#[from] SentimentError),

    /// Classifier fusion was requested but no usable model is available.
    #[error("classifier unavailable: {reason}")]
    ClassifierUnavailable { reason: String },

    #[error("article contains no sentences")]
    EmptyArticle,

    #[error("corpus error: {0}")]
    Corpus(CorpusError),

    #[error("neighbor search error: {0}")]
    Search(SearchError),
}

impl From<CorpusError> for ScoringError {
    fn from(err: CorpusError) -> Self {
        match err {
            CorpusError::UnknownSentence { sentence } => Self::UnknownSentence { sentence },
            other => Self::Corpus(other),
        }
    }
}

impl From<SearchError> for ScoringError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::NoAdmissibleNeighbor {
                index,
                k,
                blacklisted,
            } => Self::NoAdmissibleNeighbor {
                index,
                k,
                blacklisted,
            },
            other => Self::Search(other),
        }
    }
}

impl ScoringError {
    /// Whether the error was caused by the caller's input rather than the engine.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::EmptyArticle)
    }
}
