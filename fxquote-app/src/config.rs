//! Configuration loading from environment.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use fxquote_hex::DEFAULT_PROVIDER_TIMEOUT;
use fxquote_hex::inbound::DEFAULT_CACHE_MAX_AGE;
use fxquote_types::CurrencyCode;
use rate_providers::{
    DEFAULT_INVERSE_PROVIDERS, DEFAULT_PROVIDERS, ProviderSettings, parse_provider_list,
};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Deadline for each individual provider call.
    pub provider_timeout: Duration,
    /// Direct chain, in priority order.
    pub providers: Vec<String>,
    /// Inverse chain; empty disables the inverse pass.
    pub inverse_providers: Vec<String>,
    pub cache_max_age: u64,
    pub provider_settings: ProviderSettings,
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = parse_or(&non_blank, "PORT", 3000u16)?;
        let timeout_ms = parse_or(
            &non_blank,
            "FX_PROVIDER_TIMEOUT_MS",
            DEFAULT_PROVIDER_TIMEOUT.as_millis() as u64,
        )?;
        let cache_max_age = parse_or(&non_blank, "FX_CACHE_MAX_AGE", DEFAULT_CACHE_MAX_AGE)?;

        let providers = non_blank("FX_PROVIDERS")
            .map(|raw| parse_provider_list(&raw))
            .unwrap_or_else(|| to_owned(DEFAULT_PROVIDERS));

        // Unset means the default chain; set but empty turns inversion off
        let inverse_providers = lookup("FX_INVERSE_PROVIDERS")
            .map(|raw| parse_provider_list(&raw))
            .unwrap_or_else(|| to_owned(DEFAULT_INVERSE_PROVIDERS));

        let mut provider_settings = ProviderSettings::default();
        if let Some(url) = non_blank("FRANKFURTER_URL") {
            provider_settings.frankfurter_url = url;
        }
        if let Some(url) = non_blank("EXCHANGERATE_HOST_URL") {
            provider_settings.exchangerate_host_url = url;
        }
        if let Some(url) = non_blank("OPEN_ER_API_URL") {
            provider_settings.open_er_api_url = url;
        }
        provider_settings.exchangerate_host_access_key = non_blank("EXCHANGERATE_HOST_ACCESS_KEY");
        if let Some(pivot) = non_blank("FX_PIVOT") {
            provider_settings.pivot =
                CurrencyCode::parse(&pivot).with_context(|| format!("FX_PIVOT={pivot}"))?;
        }

        if timeout_ms == 0 {
            anyhow::bail!("FX_PROVIDER_TIMEOUT_MS must be greater than zero");
        }
        if providers.is_empty() {
            anyhow::bail!("FX_PROVIDERS does not name any provider");
        }

        Ok(Self {
            port,
            provider_timeout: Duration::from_millis(timeout_ms),
            providers,
            inverse_providers,
            cache_max_age,
            provider_settings,
            otlp_endpoint: non_blank("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {key}: {raw:?}")),
        None => Ok(default),
    }
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.provider_timeout, Duration::from_secs(8));
        assert_eq!(
            config.providers,
            vec!["frankfurter", "exchangerate-host", "open-er-api"]
        );
        assert_eq!(config.inverse_providers, vec!["frankfurter"]);
        assert_eq!(config.cache_max_age, 60);
        assert_eq!(config.provider_settings.pivot, CurrencyCode::usd());
        assert!(config.otlp_endpoint.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("PORT", "8080"),
            ("FX_PROVIDER_TIMEOUT_MS", "2500"),
            ("FX_PROVIDERS", "open-er-api, static"),
            ("FX_CACHE_MAX_AGE", "30"),
            ("FRANKFURTER_URL", "http://localhost:9000"),
            ("EXCHANGERATE_HOST_ACCESS_KEY", "k"),
            ("FX_PIVOT", "eur"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.provider_timeout, Duration::from_millis(2500));
        assert_eq!(config.providers, vec!["open-er-api", "static"]);
        assert_eq!(config.cache_max_age, 30);
        assert_eq!(config.provider_settings.frankfurter_url, "http://localhost:9000");
        assert_eq!(
            config.provider_settings.exchangerate_host_access_key.as_deref(),
            Some("k")
        );
        assert_eq!(config.provider_settings.pivot.as_str(), "EUR");
    }

    #[test]
    fn test_empty_inverse_list_disables_inversion() {
        let config = config(&[("FX_INVERSE_PROVIDERS", "")]).unwrap();
        assert!(config.inverse_providers.is_empty());
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(config(&[("PORT", "http")]).is_err());
        assert!(config(&[("FX_PROVIDER_TIMEOUT_MS", "-1")]).is_err());
        assert!(config(&[("FX_PROVIDER_TIMEOUT_MS", "0")]).is_err());
        assert!(config(&[("FX_PIVOT", "U5D")]).is_err());
        assert!(config(&[("FX_PROVIDERS", " , ")]).is_err());
    }
}
