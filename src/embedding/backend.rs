use tracing::{info, warn};

use super::{Embedder, EmbeddingError, StubEmbedder, TeiConfig, TeiEmbedder};

/// Embedder picked at startup: a TEI server when a URL is configured,
/// otherwise the deterministic stub.
#[derive(Debug)]
pub enum EmbedderBackend {
    Tei(TeiEmbedder),
    Stub(StubEmbedder),
}

impl EmbedderBackend {
    pub fn from_url(url: Option<&str>) -> Result<Self, EmbeddingError> {
        match url {
            Some(url) => {
                let embedder = TeiEmbedder::new(TeiConfig::new(url))?;
                info!(url = embedder.url(), "Using TEI embedder");
                Ok(Self::Tei(embedder))
            }
            None => {
                warn!("No SLANT_EMBEDDER_URL configured, running embedder in stub mode");
                Ok(Self::Stub(StubEmbedder::new()))
            }
        }
    }
}

impl Embedder for EmbedderBackend {
    async fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        match self {
            Self::Tei(embedder) => embedder.encode(texts).await,
            Self::Stub(embedder) => embedder.encode(texts).await,
        }
    }

    fn is_stub(&self) -> bool {
        matches!(self, Self::Stub(_))
    }
}
