//! Deterministic stub embedder (no model files, testing/integration only).

use tracing::debug;

use super::{Embedder, EmbeddingError, normalize};
use crate::constants::DEFAULT_EMBEDDING_DIM;
use crate::hashing::hash_to_u64;

/// Embedder that derives a unit vector from a hash of the text.
///
/// Identical texts map to identical vectors; different texts are nearly
/// orthogonal. Useful for wiring the pipeline without an embedding server.
#[derive(Debug, Clone)]
pub struct StubEmbedder {
    embedding_dim: usize,
}

impl StubEmbedder {
    /// Creates a stub with [`DEFAULT_EMBEDDING_DIM`] dimensions.
    pub fn new() -> Self {
        Self::with_dim(DEFAULT_EMBEDDING_DIM)
    }

    pub fn with_dim(embedding_dim: usize) -> Self {
        Self { embedding_dim }
    }

    pub fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    /// Generates the embedding for a single string.
    pub fn embed(&self, text: &str) -> Vec<f32> {
        hash_embedding(text, self.embedding_dim)
    }
}

impl Default for StubEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl Embedder for StubEmbedder {
    async fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be non-zero".to_string(),
            });
        }

        debug!(
            count = texts.len(),
            dim = self.embedding_dim,
            "Generating stub embeddings"
        );
        Ok(texts.iter().map(|text| self.embed(text)).collect())
    }

    fn is_stub(&self) -> bool {
        true
    }
}

/// Hash-seeded LCG vector, normalized to unit length.
pub(crate) fn hash_embedding(text: &str, dim: usize) -> Vec<f32> {
    let mut state = hash_to_u64(text.as_bytes());
    let mut embedding = Vec::with_capacity(dim);

    for _ in 0..dim {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
        embedding.push(value);
    }

    normalize(&mut embedding);
    embedding
}
