use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::RwLock;

use super::stub::hash_embedding;
use super::{Embedder, EmbeddingError};

/// Test embedder with caller-chosen vectors.
///
/// Texts without a registered vector fall back to the stub hash embedding.
/// Every [`Embedder::encode`] call is counted, including failed ones.
#[derive(Debug)]
pub struct MockEmbedder {
    dim: usize,
    vectors: RwLock<HashMap<String, Vec<f32>>>,
    calls: AtomicUsize,
    fail: AtomicBool,
}

impl MockEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            vectors: RwLock::new(HashMap::new()),
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        }
    }

    /// Registers a fixed vector for `text` (builder style).
    pub fn with_vector(self, text: &str, vector: Vec<f32>) -> Self {
        self.set_vector(text, vector);
        self
    }

    pub fn set_vector(&self, text: &str, vector: Vec<f32>) {
        assert_eq!(vector.len(), self.dim, "mock vector has wrong dimension");
        self.vectors.write().insert(text.to_string(), vector);
    }

    /// Makes subsequent calls fail with [`EmbeddingError::InferenceFailed`].
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Number of `encode` invocations so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Embedder for MockEmbedder {
    async fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail.load(Ordering::SeqCst) {
            return Err(EmbeddingError::InferenceFailed {
                reason: "mock embedder configured to fail".to_string(),
            });
        }

        let vectors = self.vectors.read();
        Ok(texts
            .iter()
            .map(|text| {
                vectors
                    .get(*text)
                    .cloned()
                    .unwrap_or_else(|| hash_embedding(text, self.dim))
            })
            .collect())
    }

    fn is_stub(&self) -> bool {
        true
    }
}
