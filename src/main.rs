//! Slant HTTP server entrypoint.
//!
//! `slant` serves the scoring API. `slant --train-classifier` fits the leaning
//! classifier on the configured corpus and writes it to
//! `SLANT_CLASSIFIER_PATH`. `slant --health-check` probes a running server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use slant::analyzer::BiasAnalyzer;
use slant::cache::ResultCache;
use slant::classifier::ClassifierTrainer;
use slant::config::{Config, ScorerMode};
use slant::corpus::ReferenceCorpus;
use slant::embedding::EmbedderBackend;
use slant::gateway::{
    AnalyzerScorer, ArticleScorer, HandlerState, RandomScorer, create_router_with_state,
};
use slant::scoring::FusionStrategy;
use slant::sentiment::LexiconSentiment;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    if std::env::args().any(|arg| arg == "--train-classifier") {
        return train_classifier(&config).await;
    }

    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        scorer = config.scorer.as_str(),
        "Slant starting"
    );

    let scorer = build_scorer(&config)?;
    let app = create_router_with_state(HandlerState::new(scorer));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Slant shutdown complete");
    Ok(())
}

fn build_scorer(config: &Config) -> anyhow::Result<Arc<dyn ArticleScorer>> {
    if config.scorer == ScorerMode::Random {
        tracing::warn!("SLANT_SCORER=random, serving placeholder scores");
        return Ok(Arc::new(RandomScorer));
    }

    let corpus = Arc::new(ReferenceCorpus::load(&config.corpus_path)?);
    let embedder = EmbedderBackend::from_url(config.embedder_url.as_deref())?;
    let strategy =
        FusionStrategy::load(config.use_classifier, config.classifier_path.as_deref())?;

    tracing::info!(
        corpus = corpus.len(),
        fusion = strategy.name(),
        "Bias analyzer ready"
    );
    let analyzer =
        BiasAnalyzer::new(corpus, embedder, LexiconSentiment::new()).with_strategy(strategy);

    let cache = match config.cache_capacity {
        Some(capacity) => ResultCache::with_capacity(capacity),
        None => ResultCache::new(),
    };

    Ok(Arc::new(AnalyzerScorer::new(Arc::new(analyzer), cache)))
}

async fn train_classifier(config: &Config) -> anyhow::Result<()> {
    let output = config.validate_for_training()?;

    let corpus = ReferenceCorpus::load(&config.corpus_path)?;
    let embedder = EmbedderBackend::from_url(config.embedder_url.as_deref())?;
    let sentiment = LexiconSentiment::new();

    let outcome = ClassifierTrainer::new(&corpus, &embedder, &sentiment)
        .train()
        .await?;
    outcome.classifier.save(output)?;

    tracing::info!(
        path = %output.display(),
        samples = outcome.samples.len(),
        accuracy = outcome.accuracy,
        "Classifier written"
    );
    Ok(())
}

async fn run_health_check() -> i32 {
    let port = std::env::var(Config::ENV_PORT)
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(Config::default().port);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(client) = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    else {
        return 1;
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
