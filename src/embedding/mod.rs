//! Sentence embedding backends.
//!
//! Everything downstream consumes the [`Embedder`] trait. The engine calls
//! [`Embedder::encode`] exactly once per scoring call, over the whole working
//! corpus, so implementations should batch.
//!
//! - [`TeiEmbedder`] talks to a text-embeddings-inference style HTTP server.
//! - [`StubEmbedder`] produces deterministic hash-seeded vectors (no model needed).
//! - `MockEmbedder` (behind `mock`) serves fixed vectors and counts calls.
//! - [`EmbedderBackend`] selects TEI or stub at startup.

pub mod backend;
mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod stub;
pub mod tei;


pub use backend::EmbedderBackend;
pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
pub use stub::StubEmbedder;
pub use tei::{TeiConfig, TeiEmbedder};

/// Batched sentence encoder.
pub trait Embedder: Send + Sync {
    /// Encodes `texts` into vectors aligned by index.
    fn encode(
        &self,
        texts: &[&str],
    ) -> impl std::future::Future<Output = Result<Vec<Vec<f32>>, EmbeddingError>> + Send;

    /// Returns `true` for embedders that do not run a real model.
    fn is_stub(&self) -> bool {
        false
    }
}

impl<E: Embedder> Embedder for std::sync::Arc<E> {
    fn encode(
        &self,
        texts: &[&str],
    ) -> impl std::future::Future<Output = Result<Vec<Vec<f32>>, EmbeddingError>> + Send {
        (**self).encode(texts)
    }

    fn is_stub(&self) -> bool {
        (**self).is_stub()
    }
}

/// Scales `embedding` to unit length in place (zero vectors are left untouched).
pub fn normalize(embedding: &mut [f32]) {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in embedding.iter_mut() {
            *x /= norm;
        }
    }
}
