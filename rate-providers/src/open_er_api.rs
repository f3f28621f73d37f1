//! Pivot-board quotes from open.er-api.com.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use serde_json::Value;

use fxquote_types::{
    CurrencyCode, JsonTransport, ProviderError, QuoteProvider, QuoteRequest, QuoteResult,
};

use crate::pivot::cross_rate;

pub(crate) const DEFAULT_URL: &str = "https://open.er-api.com";

/// `GET /v6/latest/{PIVOT}` -> `{ "result": "success", "rates": {...}, "time_last_update_utc": "..." }`
#[derive(Debug, Deserialize)]
struct BoardResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(default, rename = "error-type")]
    error_type: Option<String>,
    #[serde(default)]
    rates: HashMap<String, Value>,
    #[serde(default)]
    time_last_update_utc: Option<String>,
    #[serde(default)]
    time_last_update_unix: Option<i64>,
}

impl BoardResponse {
    /// Board date as `YYYY-MM-DD`, or empty when the upstream gives none.
    fn date(&self) -> String {
        let from_utc = self
            .time_last_update_utc
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc2822(s).ok())
            .map(|dt| dt.date_naive());
        let from_unix = || {
            self.time_last_update_unix
                .and_then(|secs| DateTime::from_timestamp(secs, 0))
                .map(|dt| dt.date_naive())
        };

        from_utc
            .or_else(from_unix)
            .map(|d: NaiveDate| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// Board adapter: one call fetches every rate against the pivot.
pub struct OpenErApiProvider {
    base_url: String,
    pivot: CurrencyCode,
    transport: Arc<dyn JsonTransport>,
}

impl OpenErApiProvider {
    pub fn new(base_url: &str, pivot: CurrencyCode, transport: Arc<dyn JsonTransport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            pivot,
            transport,
        }
    }
}

#[async_trait::async_trait]
impl QuoteProvider for OpenErApiProvider {
    fn name(&self) -> &str {
        "open-er-api"
    }

    async fn fetch(&self, req: &QuoteRequest) -> Result<Option<QuoteResult>, ProviderError> {
        let url = format!("{}/v6/latest/{}", self.base_url, self.pivot);
        let body = self.transport.get_json(&url, &[]).await?;
        let board: BoardResponse = serde_json::from_value(body)?;

        if board.result.as_deref() == Some("error") {
            return Err(ProviderError::Upstream(
                board.error_type.unwrap_or_else(|| "unknown".to_string()),
            ));
        }

        let rate = cross_rate(&self.pivot, req, |code| {
            board.rates.get(code).and_then(Value::as_f64)
        });

        Ok(rate.map(|rate| QuoteResult::new(rate, board.date(), self.name())))
    }
}
