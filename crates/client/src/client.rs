//! Status endpoint client — one time-windowed GET per poll cycle.
//!
//! The client performs no retries and no pagination; retry policy belongs to
//! the watcher. Every request carries an explicit timeout so a stalled server
//! surfaces as a `Transport` error instead of a hang.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use reviewwatch_common::error::AppError;

/// Request timeout for the status endpoint.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of raw status payloads. Implemented by the HTTP client in
/// production and by scripted fakes in tests.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch the raw status payload for submissions since `window_start`.
    async fn fetch(&self, window_start: DateTime<Utc>) -> Result<serde_json::Value, AppError>;
}

/// HTTP client for the Practicum homework status endpoint.
pub struct PracticumClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: String, token: String) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            endpoint,
            token,
        })
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    /// GET `<endpoint>?from_date=<unix seconds>` with `Authorization: OAuth <token>`.
    ///
    /// Failure mapping: connect/timeout/body errors → `Transport`, non-2xx →
    /// `HttpStatus`, a 2xx body that is not JSON → `WrongShape`.
    async fn fetch(&self, window_start: DateTime<Utc>) -> Result<serde_json::Value, AppError> {
        let response = self
            .http
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", window_start.timestamp())])
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("status endpoint request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(format!("failed to read response body: {e}")))?;
        let payload: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| AppError::WrongShape(format!("response body is not JSON: {e}")))?;

        tracing::debug!(from_date = window_start.timestamp(), "Status endpoint answered");
        Ok(payload)
    }
}
