//! Outbound JSON transport port.

use crate::error::ProviderError;

/// Issues a `GET` and decodes the body as JSON.
///
/// Non-2xx statuses must map to [`ProviderError::Status`] and undecodable
/// bodies to [`ProviderError::Malformed`].
#[async_trait::async_trait]
pub trait JsonTransport: Send + Sync {
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, ProviderError>;
}
