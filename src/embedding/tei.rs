//! HTTP client for a text-embeddings-inference (`POST /embed`) server.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use super::{Embedder, EmbeddingError};
use crate::constants::EMBED_BATCH_SIZE;

/// Configuration for [`TeiEmbedder`].
#[derive(Debug, Clone)]
pub struct TeiConfig {
    /// Server base URL, e.g. `http://localhost:8081`.
    pub base_url: String,
    /// Max inputs per request. Default: [`EMBED_BATCH_SIZE`].
    pub batch_size: usize,
    /// Per-request timeout. Default: 60s.
    pub timeout: Duration,
}

impl TeiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            batch_size: EMBED_BATCH_SIZE,
            timeout: Duration::from_secs(60),
        }
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.base_url.trim().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "base_url is required".to_string(),
            });
        }
        if self.batch_size == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "batch_size must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    inputs: &'a [&'a str],
}

/// Remote embedder. One [`Embedder::encode`] call may issue several HTTP
/// requests of at most `batch_size` inputs each.
#[derive(Debug, Clone)]
pub struct TeiEmbedder {
    client: reqwest::Client,
    url: String,
    batch_size: usize,
}

impl TeiEmbedder {
    pub fn new(config: TeiConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EmbeddingError::InvalidConfig {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            url: format!("{}/embed", config.base_url.trim_end_matches('/')),
            batch_size: config.batch_size,
        })
    }

    /// Returns the full `/embed` endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Embedder for TeiEmbedder {
    async fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let mut all_embeddings = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(self.batch_size) {
            debug!(url = %self.url, inputs = chunk.len(), "Requesting embeddings");

            let response = self
                .client
                .post(&self.url)
                .json(&EmbedRequest { inputs: chunk })
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(EmbeddingError::BadStatus {
                    status: response.status().as_u16(),
                });
            }

            let embeddings: Vec<Vec<f32>> =
                response
                    .json()
                    .await
                    .map_err(|e| EmbeddingError::InvalidResponse {
                        reason: e.to_string(),
                    })?;

            if embeddings.len() != chunk.len() {
                return Err(EmbeddingError::CountMismatch {
                    expected: chunk.len(),
                    actual: embeddings.len(),
                });
            }

            all_embeddings.extend(embeddings);
        }

        Ok(all_embeddings)
    }
}
