//! Hardcoded USD board for development and offline testing.
//!
//! Select it with `FX_PROVIDERS=static` to run the service without network
//! access. Rates are indicative only.

use std::collections::HashMap;

use chrono::Utc;

use fxquote_types::{CurrencyCode, ProviderError, QuoteProvider, QuoteRequest, QuoteResult};

use crate::pivot::cross_rate;

/// Units of each currency per one US dollar.
const USD_BOARD: &[(&str, f64)] = &[
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("JPY", 149.5),
    ("INR", 83.12),
    ("CHF", 0.88),
    ("CAD", 1.37),
    ("AUD", 1.53),
    ("NZD", 1.68),
    ("CNY", 7.24),
    ("HKD", 7.8),
    ("SGD", 1.35),
    ("KRW", 1380.0),
    ("MXN", 18.2),
    ("BRL", 5.6),
    ("COP", 4000.0),
];

/// In-memory pivot board; never performs I/O.
pub struct StaticBoardProvider {
    pivot: CurrencyCode,
    rates: HashMap<String, f64>,
}

impl StaticBoardProvider {
    /// Creates a board of `rates` quoted as units per one `pivot`.
    pub fn new<I>(pivot: CurrencyCode, rates: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        Self {
            pivot,
            rates: rates.into_iter().collect(),
        }
    }
}

impl Default for StaticBoardProvider {
    fn default() -> Self {
        Self::new(
            CurrencyCode::usd(),
            USD_BOARD.iter().map(|(code, rate)| (code.to_string(), *rate)),
        )
    }
}

#[async_trait::async_trait]
impl QuoteProvider for StaticBoardProvider {
    fn name(&self) -> &str {
        "static"
    }

    fn covers(&self, base: &CurrencyCode) -> bool {
        *base == self.pivot || self.rates.contains_key(base.as_str())
    }

    async fn fetch(&self, req: &QuoteRequest) -> Result<Option<QuoteResult>, ProviderError> {
        let rate = cross_rate(&self.pivot, req, |code| self.rates.get(code).copied());
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();

        Ok(rate.map(|rate| QuoteResult::new(rate, today, self.name())))
    }
}
