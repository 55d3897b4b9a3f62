use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("sentence not present in reference corpus: {sentence:?}")]
    UnknownSentence { sentence: String },

    #[error("failed to read corpus file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse corpus file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize corpus: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("reference corpus is empty")]
    Empty,
}
