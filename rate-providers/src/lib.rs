//! Exchange Rate Provider Adapters
//!
//! One adapter per upstream rate service, each mapping that service's JSON
//! shape into a normalized [`QuoteResult`](fxquote_types::QuoteResult) or a
//! "no data" signal:
//!
//! - [`FrankfurterProvider`] - direct-pair quotes, restricted to a fixed set
//!   of supported base currencies
//! - [`ExchangeRateHostProvider`] - convert-style quotes, any base
//! - [`OpenErApiProvider`] - a board of rates against one pivot currency
//! - [`StaticBoardProvider`] - an in-memory pivot board for offline development
//!
//! Adapters talk to the network through the
//! [`JsonTransport`](fxquote_types::JsonTransport) port; [`ReqwestTransport`]
//! is the production implementation.
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//! use rate_providers::{ProviderSettings, ReqwestTransport, build_providers};
//!
//! let transport = Arc::new(ReqwestTransport::new());
//! let names = rate_providers::parse_provider_list("frankfurter,open-er-api");
//! let providers = build_providers(names.as_slice(), &ProviderSettings::default(), transport).unwrap();
//! assert_eq!(providers.len(), 2);
//! ```

mod exchangerate_host;
mod frankfurter;
mod open_er_api;
mod pivot;
mod static_board;
mod transport;

#[cfg(test)]
mod test_support;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use fxquote_types::{CurrencyCode, JsonTransport, QuoteProvider};

pub use exchangerate_host::ExchangeRateHostProvider;
pub use frankfurter::{FRANKFURTER_BASES, FrankfurterProvider};
pub use open_er_api::OpenErApiProvider;
pub use static_board::StaticBoardProvider;
pub use transport::ReqwestTransport;

/// Direct chain used when nothing is configured.
pub const DEFAULT_PROVIDERS: &[&str] = &["frankfurter", "exchangerate-host", "open-er-api"];

/// Inverse chain used when nothing is configured.
pub const DEFAULT_INVERSE_PROVIDERS: &[&str] = &["frankfurter"];

/// Error raised while assembling a provider chain.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
}

/// The provider adapters this crate knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Frankfurter,
    ExchangeRateHost,
    OpenErApi,
    Static,
}

impl ProviderKind {
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::Frankfurter => "frankfurter",
            ProviderKind::ExchangeRateHost => "exchangerate-host",
            ProviderKind::OpenErApi => "open-er-api",
            ProviderKind::Static => "static",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProviderKind {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frankfurter" => Ok(ProviderKind::Frankfurter),
            "exchangerate-host" | "exchangerate.host" | "exhost" => {
                Ok(ProviderKind::ExchangeRateHost)
            }
            "open-er-api" | "open.er-api" | "open-er" => Ok(ProviderKind::OpenErApi),
            "static" => Ok(ProviderKind::Static),
            _ => Err(BuildError::UnknownProvider(s.trim().to_string())),
        }
    }
}

/// Upstream endpoints and credentials for the HTTP adapters.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub frankfurter_url: String,
    pub exchangerate_host_url: String,
    pub exchangerate_host_access_key: Option<String>,
    pub open_er_api_url: String,
    /// Pivot currency of the board providers.
    pub pivot: CurrencyCode,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            frankfurter_url: frankfurter::DEFAULT_URL.to_string(),
            exchangerate_host_url: exchangerate_host::DEFAULT_URL.to_string(),
            exchangerate_host_access_key: None,
            open_er_api_url: open_er_api::DEFAULT_URL.to_string(),
            pivot: pivot::default_pivot(),
        }
    }
}

/// Splits a comma separated provider list, dropping blank entries.
pub fn parse_provider_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Builds one adapter.
pub fn build_provider(
    kind: ProviderKind,
    settings: &ProviderSettings,
    transport: Arc<dyn JsonTransport>,
) -> Arc<dyn QuoteProvider> {
    match kind {
        ProviderKind::Frankfurter => Arc::new(FrankfurterProvider::new(
            &settings.frankfurter_url,
            transport,
        )),
        ProviderKind::ExchangeRateHost => Arc::new(
            ExchangeRateHostProvider::new(&settings.exchangerate_host_url, transport)
                .with_access_key(settings.exchangerate_host_access_key.clone()),
        ),
        ProviderKind::OpenErApi => Arc::new(OpenErApiProvider::new(
            &settings.open_er_api_url,
            settings.pivot.clone(),
            transport,
        )),
        ProviderKind::Static => Arc::new(StaticBoardProvider::default()),
    }
}

/// Builds an ordered adapter list from provider names.
///
/// Order is preserved; it is the priority order of the resolution chain.
pub fn build_providers<S: AsRef<str>>(
    names: &[S],
    settings: &ProviderSettings,
    transport: Arc<dyn JsonTransport>,
) -> Result<Vec<Arc<dyn QuoteProvider>>, BuildError> {
    names
        .iter()
        .map(|name| -> Result<Arc<dyn QuoteProvider>, BuildError> {
            let kind: ProviderKind = name.as_ref().parse()?;
            tracing::debug!(provider = %kind, "registering quote provider");
            Ok(build_provider(kind, settings, transport.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockTransport;

    #[test]
    fn test_parse_provider_list() {
        assert_eq!(
            parse_provider_list(" frankfurter, ,open-er-api,"),
            vec!["frankfurter".to_string(), "open-er-api".to_string()]
        );
        assert!(parse_provider_list("").is_empty());
    }

    #[test]
    fn test_provider_kind_aliases() {
        assert_eq!(
            "exchangerate.host".parse::<ProviderKind>().unwrap(),
            ProviderKind::ExchangeRateHost
        );
        assert_eq!(
            "Open.ER-API".parse::<ProviderKind>().unwrap(),
            ProviderKind::OpenErApi
        );
        assert!(matches!(
            "ecb".parse::<ProviderKind>(),
            Err(BuildError::UnknownProvider(name)) if name == "ecb"
        ));
    }

    #[test]
    fn test_build_providers_preserves_order() {
        let transport = Arc::new(MockTransport::new());
        let providers =
            build_providers(DEFAULT_PROVIDERS, &ProviderSettings::default(), transport).unwrap();

        let names: Vec<&str> = providers.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["frankfurter", "exchangerate-host", "open-er-api"]);
    }

    #[test]
    fn test_build_providers_rejects_unknown_name() {
        let transport = Arc::new(MockTransport::new());
        let result = build_providers(
            &["frankfurter", "bogus"],
            &ProviderSettings::default(),
            transport,
        );
        assert!(matches!(result, Err(BuildError::UnknownProvider(_))));
    }
}
