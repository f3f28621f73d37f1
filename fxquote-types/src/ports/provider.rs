//! Quote provider port.
//!
//! One implementation per upstream rate service. Implementations can be
//! HTTP adapters, fixed in-memory boards, test doubles, etc.

use crate::domain::{CurrencyCode, QuoteRequest, QuoteResult};
use crate::error::ProviderError;

/// Port trait for a single rate-quote provider.
///
/// Implementations are stateless apart from read-only configuration, so a
/// single instance can serve concurrent requests.
#[async_trait::async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Stable identifier, reported as `source` in debug responses.
    fn name(&self) -> &str;

    /// Coverage predicate, consulted before any network I/O.
    ///
    /// Returning `false` makes the chain skip this provider for `base`.
    fn covers(&self, _base: &CurrencyCode) -> bool {
        true
    }

    /// Fetches the `base -> target` rate.
    ///
    /// `Ok(None)` means the provider answered but had no usable number for
    /// the pair; `Err` means the call itself failed.
    async fn fetch(&self, req: &QuoteRequest) -> Result<Option<QuoteResult>, ProviderError>;
}
