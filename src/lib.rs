//! Slant library crate (used by the server binary and integration tests).
//!
//! Scores the political leaning of text by matching each sentence against a
//! labeled reference corpus, fusing the match with sentiment polarity, and
//! rolling sentence intensities up to paragraph and article level.
//!
//! # Public API Surface
//!
//! ## Engine
//! - [`BiasAnalyzer`] - sentence, paragraph and article scoring
//! - [`ReferenceCorpus`], [`WorkingCorpus`] - labeled data and per-call search space
//! - [`find_best_admissible`] - neighbor search with self-exclusion
//! - [`FusionStrategy`], [`fuse`] - signal fusion
//! - [`LeaningClassifier`], [`ClassifierTrainer`] - optional classifier path
//!
//! ## Collaborators
//! - [`Embedder`] with [`TeiEmbedder`] and [`StubEmbedder`]
//! - [`SentimentScorer`] with [`LexiconSentiment`]
//!
//! ## Serving
//! - [`ResultCache`] - per-source result cache
//! - [`gateway`] - Axum router and scoring backends
//! - [`Config`] - environment configuration
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod analyzer;
pub mod cache;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod embedding;
pub mod gateway;
pub mod hashing;
pub mod scoring;
pub mod search;
pub mod sentiment;

pub use analyzer::{
    AggregateScore, ArticleBias, BiasAnalyzer, ParagraphBias, SentenceBias, content_to_sentences,
};
pub use cache::{CacheStatus, ResultCache, SLANT_STATUS_HEADER};
pub use classifier::{ClassifierError, ClassifierTrainer, LeaningClassifier, TrainingParams};
pub use config::{Config, ConfigError, ScorerMode};
pub use constants::{
    MAGNITUDE_CAP, SEMANTIC_THRESHOLD, SENTIMENT_THRESHOLD, TRAINING_NEIGHBORS,
    scoring_neighbor_bound,
};
pub use corpus::{CorpusError, LabeledSentence, Leaning, ReferenceCorpus, WorkingCorpus};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use embedding::{Embedder, EmbeddingError, StubEmbedder, TeiConfig, TeiEmbedder};
pub use hashing::{hash_source_id, hash_to_u64};
pub use scoring::{BiasScore, FusionStrategy, ScoringError, fuse, fuse_with_direction};
pub use search::{Neighbor, SearchError, find_best_admissible};
#[cfg(any(test, feature = "mock"))]
pub use sentiment::MockSentiment;
pub use sentiment::{LexiconSentiment, SentimentError, SentimentScorer};
