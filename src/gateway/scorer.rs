//! Scoring backends behind `/score`.

use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;

use super::error::GatewayError;
use crate::analyzer::BiasAnalyzer;
use crate::cache::{CacheStatus, ResultCache};
use crate::embedding::Embedder;
use crate::sentiment::SentimentScorer;

/// How a score was produced. Reported in the status header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreStatus {
    Cached(CacheStatus),
    Random,
}

impl ScoreStatus {
    pub fn as_header_value(&self) -> &'static str {
        match self {
            ScoreStatus::Cached(status) => status.as_header_value(),
            ScoreStatus::Random => "RANDOM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreOutcome {
    pub score: f32,
    pub status: ScoreStatus,
}

/// Produces an article bias score for the HTTP layer.
#[async_trait]
pub trait ArticleScorer: Send + Sync {
    async fn score(&self, source_id: &str, text: &str) -> Result<ScoreOutcome, GatewayError>;

    fn name(&self) -> &'static str;
}

/// Uniform placeholder score in `(-1, 1)`.
pub fn random_score() -> f32 {
    let mut rng = rand::rng();
    let magnitude: f32 = rng.random();
    if rng.random_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

/// Ignores the article and returns [`random_score`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomScorer;

#[async_trait]
impl ArticleScorer for RandomScorer {
    async fn score(&self, _source_id: &str, _text: &str) -> Result<ScoreOutcome, GatewayError> {
        Ok(ScoreOutcome {
            score: random_score(),
            status: ScoreStatus::Random,
        })
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Full analysis with results cached per source id.
pub struct AnalyzerScorer<E, S> {
    analyzer: Arc<BiasAnalyzer<E, S>>,
    cache: ResultCache,
}

impl<E, S> AnalyzerScorer<E, S> {
    pub fn new(analyzer: Arc<BiasAnalyzer<E, S>>, cache: ResultCache) -> Self {
        Self { analyzer, cache }
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }
}

#[async_trait]
impl<E, S> ArticleScorer for AnalyzerScorer<E, S>
where
    E: Embedder + 'static,
    S: SentimentScorer + 'static,
{
    async fn score(&self, source_id: &str, text: &str) -> Result<ScoreOutcome, GatewayError> {
        let (article, status) = self
            .cache
            .get_or_compute(source_id, self.analyzer.score_article(text))
            .await?;

        Ok(ScoreOutcome {
            score: article.mean,
            status: ScoreStatus::Cached(status),
        })
    }

    fn name(&self) -> &'static str {
        "analyzer"
    }
}
