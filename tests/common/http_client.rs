//! HTTP client helpers for tests.

use serde::Deserialize;
use slant::SLANT_STATUS_HEADER;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    /// POSTs `body` to `/score`. Returns the score and the status header.
    pub async fn score(
        &self,
        body: serde_json::Value,
    ) -> Result<(ScoreResponse, String), TestClientError> {
        let resp = self.client.post(self.url("/score")).json(&body).send().await?;
        let status_header = status_header(&resp);

        match resp.status().as_u16() {
            200 => Ok((resp.json().await?, status_header)),
            400 | 422 => Err(TestClientError::BadRequest(status_header, resp.text().await?)),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(TestClientError::UnexpectedStatus(status, body))
            }
        }
    }

    pub async fn random_score(&self) -> Result<ScoreResponse, TestClientError> {
        let resp = self.client.get(self.url("/random_score")).send().await?;
        Self::json_or_status(resp).await
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url("/healthz")).send().await?;
        Self::json_or_status(resp).await
    }

    pub async fn index(&self) -> Result<String, TestClientError> {
        let resp = self.client.get(self.url("/")).send().await?;
        Ok(resp.error_for_status()?.text().await?)
    }

    async fn json_or_status<T: for<'de> Deserialize<'de>>(
        resp: reqwest::Response,
    ) -> Result<T, TestClientError> {
        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }
}

fn status_header(resp: &reqwest::Response) -> String {
    resp.headers()
        .get(SLANT_STATUS_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreResponse {
    pub score: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0} - Body: {1}")]
    UnexpectedStatus(u16, String),

    #[error("Bad request ({0}): {1}")]
    BadRequest(String, String),
}
