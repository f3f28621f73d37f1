//! reqwest-backed JSON transport.

use fxquote_types::{JsonTransport, ProviderError};
use reqwest::Client;

/// Production transport for the provider adapters.
///
/// Dropping the future returned by [`JsonTransport::get_json`] aborts the
/// underlying request, so a caller-side timeout fully cancels the call.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the default client configuration.
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("fxquote/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl JsonTransport for ReqwestTransport {
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, ProviderError> {
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                ProviderError::Network(format!("connection failed: {}", e))
            } else {
                ProviderError::Network(format!("request failed: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(format!("failed to read response body: {}", e)))?;

        Ok(serde_json::from_str(&body)?)
    }
}
