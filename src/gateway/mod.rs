//! HTTP gateway (Axum) for article scoring.
//!
//! Routes:
//! - `GET /` welcome text
//! - `GET /healthz` liveness
//! - `POST /score` article score, with the `X-Slant-Status` header
//! - `GET|POST /random_score` placeholder score

pub mod error;
pub mod handler;
pub mod scorer;
pub mod state;


use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{index_handler, random_score_handler, score_handler};
pub use scorer::{AnalyzerScorer, ArticleScorer, RandomScorer, ScoreOutcome, ScoreStatus};
pub use state::HandlerState;

use crate::cache::{SLANT_STATUS_HEADER, SLANT_STATUS_HEALTHY};

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/healthz", get(health_handler))
        .route("/score", post(score_handler))
        .route(
            "/random_score",
            get(random_score_handler).post(random_score_handler),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        SLANT_STATUS_HEADER,
        HeaderValue::from_static(SLANT_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse {
            status: SLANT_STATUS_HEALTHY,
        }),
    )
        .into_response()
}
