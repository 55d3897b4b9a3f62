//! Test server harness.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use slant::analyzer::BiasAnalyzer;
use slant::cache::ResultCache;
use slant::embedding::MockEmbedder;
use slant::gateway::{
    AnalyzerScorer, ArticleScorer, HandlerState, RandomScorer, create_router_with_state,
};
use slant::scoring::FusionStrategy;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::fixtures;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

pub struct TestServer {
    pub addr: SocketAddr,
    /// Shared with the analyzer so tests can count encode calls.
    pub embedder: Option<Arc<MockEmbedder>>,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
}

/// Serves the fixture corpus through the full analyzer with mock collaborators.
pub async fn spawn_analyzer_server(
    strategy: FusionStrategy,
) -> Result<TestServer, ServerStartupError> {
    let embedder = Arc::new(fixtures::mock_embedder());
    let analyzer = BiasAnalyzer::new(
        fixtures::reference_corpus(),
        Arc::clone(&embedder),
        fixtures::mock_sentiment(),
    )
    .with_strategy(strategy);
    let scorer: Arc<dyn ArticleScorer> =
        Arc::new(AnalyzerScorer::new(Arc::new(analyzer), ResultCache::new()));

    spawn_with_scorer(scorer, Some(embedder)).await
}

/// Serves placeholder scores only.
pub async fn spawn_random_server() -> Result<TestServer, ServerStartupError> {
    spawn_with_scorer(Arc::new(RandomScorer), None).await
}

async fn spawn_with_scorer(
    scorer: Arc<dyn ArticleScorer>,
    embedder: Option<Arc<MockEmbedder>>,
) -> Result<TestServer, ServerStartupError> {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let local_addr = listener.local_addr()?;

    let app = create_router_with_state(HandlerState::new(scorer));
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        embedder,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
