use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::error::GatewayError;
use super::scorer::{ScoreOutcome, random_score};
use super::state::HandlerState;
use crate::cache::SLANT_STATUS_HEADER;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Slant index. Access the score API by sending a POST to the /score endpoint.";

/// Body of `POST /score`.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    /// Cache key, usually the article URL. Defaults to the text itself.
    #[serde(default, alias = "url")]
    pub source_id: Option<String>,
    #[serde(alias = "article")]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: f32,
}

#[instrument]
pub async fn index_handler() -> &'static str {
    WELCOME_MESSAGE
}

#[instrument(skip(state, request), fields(scorer = state.scorer.name()))]
pub async fn score_handler(
    State(state): State<HandlerState>,
    Json(request): Json<serde_json::Value>,
) -> Result<Response, GatewayError> {
    let request: ScoreRequest = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))?;

    if request.text.trim().is_empty() {
        return Err(GatewayError::InvalidRequest("article text is empty".to_string()));
    }

    let source_id = request
        .source_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .unwrap_or(&request.text);

    debug!(source_id, text_len = request.text.len(), "Scoring article");
    let outcome = state.scorer.score(source_id, &request.text).await?;
    info!(
        score = outcome.score,
        status = outcome.status.as_header_value(),
        "Article score served"
    );

    Ok(make_response(outcome))
}

#[instrument]
pub async fn random_score_handler() -> Json<ScoreResponse> {
    Json(ScoreResponse {
        score: random_score(),
    })
}

pub(crate) fn make_response(outcome: ScoreOutcome) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        SLANT_STATUS_HEADER,
        HeaderValue::from_static(outcome.status.as_header_value()),
    );

    (
        StatusCode::OK,
        headers,
        Json(ScoreResponse {
            score: outcome.score,
        }),
    )
        .into_response()
}
