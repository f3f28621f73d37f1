//! FX Quote CLI
//!
//! Command-line interface for the FX quote service: query a running server,
//! or run the provider chain in-process without one.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use fxquote_client::FxClient;
use fxquote_hex::QuoteService;
use fxquote_types::{CurrencyCode, QuoteRequest, QuoteResponse};
use rate_providers::{ProviderSettings, ReqwestTransport, build_providers, parse_provider_list};

#[derive(Parser)]
#[command(name = "fxq")]
#[command(author, version, about = "FX quote CLI", long_about = None)]
struct Cli {
    /// Base URL of the FX quote API
    #[arg(long, env = "FXQUOTE_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the API for a rate
    Quote {
        /// Base currency (e.g. USD)
        base: String,
        /// Target currency (e.g. JPY)
        target: String,
        /// Include the source provider or per-provider errors
        #[arg(long)]
        debug: bool,
    },
    /// Resolve a rate locally by walking the provider chain
    Resolve {
        /// Base currency (e.g. USD)
        base: String,
        /// Target currency (e.g. JPY)
        target: String,
        #[command(flatten)]
        chain: ChainArgs,
    },
    /// Check API health
    Health,
}

#[derive(Args)]
struct ChainArgs {
    /// Direct providers, in priority order (comma-separated)
    #[arg(
        long,
        env = "FX_PROVIDERS",
        default_value = "frankfurter,exchangerate-host,open-er-api"
    )]
    providers: String,

    /// Providers asked for the reverse pair (empty disables inversion)
    #[arg(long, env = "FX_INVERSE_PROVIDERS", default_value = "frankfurter")]
    inverse_providers: String,

    /// Per-provider deadline in milliseconds
    #[arg(
        long,
        env = "FX_PROVIDER_TIMEOUT_MS",
        default_value_t = 8000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_ms: u64,

    #[arg(long, env = "FRANKFURTER_URL")]
    frankfurter_url: Option<String>,

    #[arg(long, env = "EXCHANGERATE_HOST_URL")]
    exchangerate_host_url: Option<String>,

    #[arg(long, env = "EXCHANGERATE_HOST_ACCESS_KEY", hide_env_values = true)]
    exchangerate_host_access_key: Option<String>,

    #[arg(long, env = "OPEN_ER_API_URL")]
    open_er_api_url: Option<String>,

    /// Pivot currency of board providers
    #[arg(long, env = "FX_PIVOT", default_value = "USD")]
    pivot: String,
}

impl ChainArgs {
    fn settings(&self) -> Result<ProviderSettings> {
        let mut settings = ProviderSettings::default();
        if let Some(url) = &self.frankfurter_url {
            settings.frankfurter_url = url.clone();
        }
        if let Some(url) = &self.exchangerate_host_url {
            settings.exchangerate_host_url = url.clone();
        }
        if let Some(url) = &self.open_er_api_url {
            settings.open_er_api_url = url.clone();
        }
        settings.exchangerate_host_access_key = self.exchangerate_host_access_key.clone();
        settings.pivot = CurrencyCode::parse(&self.pivot)?;
        Ok(settings)
    }

    fn service(&self) -> Result<QuoteService> {
        let settings = self.settings()?;
        let transport = Arc::new(ReqwestTransport::new());

        let direct = build_providers(
            parse_provider_list(&self.providers).as_slice(),
            &settings,
            transport.clone(),
        )?;
        let inverse = build_providers(
            parse_provider_list(&self.inverse_providers).as_slice(),
            &settings,
            transport,
        )?;

        Ok(QuoteService::new(direct)
            .with_inverse(inverse)
            .with_timeout(Duration::from_millis(self.timeout_ms)))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Health => {
            let client = FxClient::new(&cli.api_url);
            match client.health().await {
                Ok(health) => println!("✓ API is {}", health.status),
                Err(err) => {
                    println!("✗ API is not healthy: {}", err);
                    std::process::exit(1);
                }
            }
        }

        Commands::Quote {
            base,
            target,
            debug,
        } => {
            let client = FxClient::new(&cli.api_url);
            let quote = client.quote(&base, &target, debug).await?;
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }

        Commands::Resolve {
            base,
            target,
            chain,
        } => {
            let req = QuoteRequest::parse(&base, &target)?;
            let resolution = chain.service()?.resolve(&req).await;

            let mut output = serde_json::to_value(QuoteResponse::from_resolution(&resolution, true))?;
            output["attempts"] = resolution
                .attempts
                .iter()
                .map(ToString::to_string)
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_args(extra: &[&str]) -> Result<Cli, clap::Error> {
        let mut args = vec!["fxq", "resolve", "USD", "JPY"];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args)
    }

    #[test]
    fn test_resolve_timeout_must_be_positive() {
        assert!(resolve_args(&["--timeout-ms", "0"]).is_err());

        let cli = resolve_args(&["--timeout-ms", "2500"]).unwrap();
        match cli.command {
            Commands::Resolve { chain, .. } => assert_eq!(chain.timeout_ms, 2500),
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn test_resolve_builds_requested_chain() {
        let cli = resolve_args(&["--providers", "static", "--inverse-providers", "static"]).unwrap();
        let Commands::Resolve { chain, .. } = cli.command else {
            panic!("expected resolve");
        };

        let service = chain.service().unwrap();
        assert_eq!(service.chain(), (vec!["static"], vec!["static"]));
    }
}
