//! # FX Quote Client SDK
//!
//! A typed Rust client for the FX quote API.

use fxquote_types::{HealthResponse, QuoteResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// FX quote API client.
pub struct FxClient {
    base_url: String,
    http: Client,
}

impl FxClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.get("/health", &[]).await
    }

    /// Fetches the `base -> target` rate.
    ///
    /// An unavailable rate is not an error: it comes back with `rate: None`.
    /// With `debug` the response also names the source or lists the
    /// per-provider failures.
    pub async fn quote(
        &self,
        base: &str,
        target: &str,
        debug: bool,
    ) -> Result<QuoteResponse, ClientError> {
        let mut query = vec![("from", base), ("to", target)];
        if debug {
            query.push(("debug", "1"));
        }
        self.get("/api/quote", &query).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
