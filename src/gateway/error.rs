use std::sync::Arc;

use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::cache::SLANT_STATUS_HEADER;
use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("scoring failed: {0}")]
    ScoringFailed(Arc<ScoringError>),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl From<ScoringError> for GatewayError {
    fn from(err: ScoringError) -> Self {
        GatewayError::ScoringFailed(Arc::new(err))
    }
}

impl From<Arc<ScoringError>> for GatewayError {
    fn from(err: Arc<ScoringError>) -> Self {
        GatewayError::ScoringFailed(err)
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, slant_status) = match &self {
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::ScoringFailed(err) if err.is_invalid_input() => {
                (StatusCode::BAD_REQUEST, "invalid_article")
            }
            GatewayError::ScoringFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, "scoring_error"),
            GatewayError::InternalError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        let mut headers = HeaderMap::new();
        headers.insert(SLANT_STATUS_HEADER, HeaderValue::from_static(slant_status));

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
