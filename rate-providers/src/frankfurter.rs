//! Direct-pair quotes from the Frankfurter API.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use fxquote_types::{
    CurrencyCode, JsonTransport, ProviderError, QuoteProvider, QuoteRequest, QuoteResult, Rate,
};

pub(crate) const DEFAULT_URL: &str = "https://api.frankfurter.app";

/// Base currencies the Frankfurter API quotes.
pub const FRANKFURTER_BASES: &[&str] = &[
    "USD", "JPY", "EUR", "GBP", "AUD", "CAD", "CHF", "CNY", "KRW", "MXN", //
    "BRL", "INR", "SGD", "HKD", "TWD", "THB", "SEK", "NOK", "DKK", "ZAR", //
    "PLN", "CZK", "HUF", "RON", "TRY", "IDR", "ILS", "PHP", "MYR", "NZD",
];

/// `GET /latest?from=B&to=T` -> `{ "rates": { "T": n }, "date": "..." }`
#[derive(Debug, Deserialize)]
struct LatestResponse {
    #[serde(default)]
    rates: HashMap<String, Value>,
    #[serde(default)]
    date: Option<String>,
}

/// Direct-pair adapter; only called for bases in its coverage set.
pub struct FrankfurterProvider {
    base_url: String,
    coverage: HashSet<String>,
    transport: Arc<dyn JsonTransport>,
}

impl FrankfurterProvider {
    pub fn new(base_url: &str, transport: Arc<dyn JsonTransport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            coverage: FRANKFURTER_BASES.iter().map(|c| c.to_string()).collect(),
            transport,
        }
    }

    /// Replaces the supported base currency set.
    pub fn with_coverage<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.coverage = codes
            .into_iter()
            .map(|c| c.as_ref().trim().to_ascii_uppercase())
            .collect();
        self
    }
}

#[async_trait::async_trait]
impl QuoteProvider for FrankfurterProvider {
    fn name(&self) -> &str {
        "frankfurter"
    }

    fn covers(&self, base: &CurrencyCode) -> bool {
        self.coverage.contains(base.as_str())
    }

    async fn fetch(&self, req: &QuoteRequest) -> Result<Option<QuoteResult>, ProviderError> {
        let url = format!("{}/latest", self.base_url);
        let body = self
            .transport
            .get_json(
                &url,
                &[("from", req.base.as_str()), ("to", req.target.as_str())],
            )
            .await?;

        let latest: LatestResponse = serde_json::from_value(body)?;
        let rate = latest
            .rates
            .get(req.target.as_str())
            .and_then(Value::as_f64)
            .and_then(Rate::new);

        Ok(rate.map(|rate| QuoteResult::new(rate, latest.date.unwrap_or_default(), self.name())))
    }
}
