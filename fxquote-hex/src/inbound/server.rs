//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{Router, http::Method, routing::get};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{self, AppState};
use crate::QuoteService;

/// Default `max-age` for successful quotes, in seconds.
pub const DEFAULT_CACHE_MAX_AGE: u64 = 60;

/// HTTP Server for the quote API.
pub struct HttpServer {
    state: Arc<AppState>,
}

impl HttpServer {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: QuoteService) -> Self {
        Self::with_cache_max_age(service, DEFAULT_CACHE_MAX_AGE)
    }

    /// Creates a new HTTP server advertising `max_age_secs` on successful quotes.
    pub fn with_cache_max_age(service: QuoteService, max_age_secs: u64) -> Self {
        Self {
            state: Arc::new(AppState {
                service,
                cache_control: handlers::cache_control(max_age_secs),
            }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Uses the globally set MeterProvider; a no-op until one is installed
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        let cors = CorsLayer::new()
            .allow_methods([Method::GET])
            .allow_origin(Any);

        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/quote", get(handlers::quote))
            .route("/quote", get(handlers::quote))
            .route("/api-docs/openapi.json", get(handlers::openapi_json))
            .layer(metrics)
            .layer(CatchPanicLayer::custom(handlers::panic_response))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        let (direct, inverse) = self.state.service.chain();
        tracing::info!(
            ?direct,
            ?inverse,
            timeout_ms = self.state.service.timeout().as_millis() as u64,
            "Server listening on {}",
            listener.local_addr()?
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
