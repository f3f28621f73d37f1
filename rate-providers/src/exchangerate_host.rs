//! Convert-style quotes from exchangerate.host.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use fxquote_types::{JsonTransport, ProviderError, QuoteProvider, QuoteRequest, QuoteResult, Rate};

pub(crate) const DEFAULT_URL: &str = "https://api.exchangerate.host";

/// `GET /convert?from=B&to=T` -> `{ "result": n, "date": "..." }`
#[derive(Debug, Deserialize)]
struct ConvertResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    error: Option<Value>,
}

impl ConvertResponse {
    /// The upstream's own error report, if it flagged the call as failed.
    fn upstream_error(&self) -> Option<String> {
        if self.success != Some(false) {
            return None;
        }
        let detail = self.error.as_ref().map(|err| {
            err.get("info")
                .or_else(|| err.get("type"))
                .and_then(Value::as_str)
                .map(String::from)
                .unwrap_or_else(|| err.to_string())
        });
        Some(detail.unwrap_or_else(|| "request unsuccessful".to_string()))
    }
}

/// Convert-style adapter; covers every base currency.
pub struct ExchangeRateHostProvider {
    base_url: String,
    access_key: Option<String>,
    transport: Arc<dyn JsonTransport>,
}

impl ExchangeRateHostProvider {
    pub fn new(base_url: &str, transport: Arc<dyn JsonTransport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_key: None,
            transport,
        }
    }

    /// Sets the `access_key` query parameter sent with every call.
    pub fn with_access_key(mut self, access_key: Option<String>) -> Self {
        self.access_key = access_key.filter(|k| !k.trim().is_empty());
        self
    }
}

#[async_trait::async_trait]
impl QuoteProvider for ExchangeRateHostProvider {
    fn name(&self) -> &str {
        "exchangerate-host"
    }

    async fn fetch(&self, req: &QuoteRequest) -> Result<Option<QuoteResult>, ProviderError> {
        let url = format!("{}/convert", self.base_url);
        let mut query = vec![("from", req.base.as_str()), ("to", req.target.as_str())];
        if let Some(key) = &self.access_key {
            query.push(("access_key", key.as_str()));
        }

        let body = self.transport.get_json(&url, &query).await?;
        let converted: ConvertResponse = serde_json::from_value(body)?;

        if let Some(detail) = converted.upstream_error() {
            return Err(ProviderError::Upstream(detail));
        }

        let rate = converted.result.as_ref().and_then(Value::as_f64).and_then(Rate::new);

        Ok(rate.map(|rate| QuoteResult::new(rate, converted.date.unwrap_or_default(), self.name())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockTransport;
    use serde_json::json;

    const URL: &str = "https://exhost.test/convert";

    fn provider(transport: Arc<MockTransport>) -> ExchangeRateHostProvider {
        ExchangeRateHostProvider::new("https://exhost.test", transport)
    }

    #[tokio::test]
    async fn test_convert_quote_for_any_base() {
        let transport = Arc::new(MockTransport::new().respond(
            URL,
            json!({ "success": true, "query": { "from": "COP", "to": "USD", "amount": 1 }, "result": 0.00025, "date": "2025-10-20" }),
        ));
        let req = QuoteRequest::parse("COP", "USD").unwrap();
        let p = provider(transport);

        assert!(p.covers(&req.base));
        let result = p.fetch(&req).await.unwrap().unwrap();
        assert_eq!(result.rate.value(), 0.00025);
        assert_eq!(result.date, "2025-10-20");
        assert_eq!(result.source, "exchangerate-host");
    }

    #[tokio::test]
    async fn test_null_result_is_no_result() {
        let transport = Arc::new(
            MockTransport::new().respond(URL, json!({ "result": null, "date": "2025-10-20" })),
        );
        let req = QuoteRequest::parse("COP", "XXX").unwrap();

        assert_eq!(provider(transport).fetch(&req).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unsuccessful_payload_is_upstream_error() {
        let transport = Arc::new(MockTransport::new().respond(
            URL,
            json!({ "success": false, "error": { "code": 101, "type": "missing_access_key", "info": "You have not supplied an API Access Key." } }),
        ));
        let req = QuoteRequest::parse("USD", "JPY").unwrap();

        let err = provider(transport).fetch(&req).await.unwrap_err();
        assert_eq!(
            err,
            ProviderError::Upstream("You have not supplied an API Access Key.".to_string())
        );
    }

    #[tokio::test]
    async fn test_access_key_is_sent_when_configured() {
        let transport = Arc::new(MockTransport::new().respond(URL, json!({ "result": 1.1 })));
        let req = QuoteRequest::parse("EUR", "USD").unwrap();

        provider(transport.clone())
            .with_access_key(Some("secret".into()))
            .fetch(&req)
            .await
            .unwrap();

        let calls = transport.calls();
        assert!(
            calls[0]
                .query
                .contains(&("access_key".to_string(), "secret".to_string()))
        );
    }

    #[tokio::test]
    async fn test_blank_access_key_is_ignored() {
        let transport = Arc::new(MockTransport::new().respond(URL, json!({ "result": 1.1 })));
        let req = QuoteRequest::parse("EUR", "USD").unwrap();

        provider(transport.clone())
            .with_access_key(Some("  ".into()))
            .fetch(&req)
            .await
            .unwrap();

        assert_eq!(transport.calls()[0].query.len(), 2);
    }
}
