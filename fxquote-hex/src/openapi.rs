//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use fxquote_types::dto::{ErrorResponse, HealthResponse, QuoteQuery, QuoteResponse};
use utoipa::OpenApi;

// Documentation-only path functions; the real handlers live in `inbound::handlers`

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
async fn health() {}

/// Resolve the rate for one currency pair
///
/// Providers are tried in order until one returns a rate; if none does, the
/// reverse pair is tried and inverted. An unavailable rate is reported as
/// `rate: null`, not as an error status.
#[utoipa::path(
    get,
    path = "/api/quote",
    tag = "quotes",
    params(QuoteQuery),
    responses(
        (status = 200, description = "Rate found, or `rate: null` when no provider had one", body = QuoteResponse,
            example = json!({"rate": 149.5, "date": "2025-10-20"})),
        (status = 400, description = "Missing or invalid currency code", body = ErrorResponse,
            example = json!({"error": "missing base/target"})),
        (status = 500, description = "Internal error", body = ErrorResponse,
            example = json!({"error": "internal error"}))
    )
)]
async fn quote() {}

/// OpenAPI documentation for the FX quote API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "FX Quote Service API",
        version = "1.0.0",
        description = "Resolves a foreign-exchange rate for a currency pair by consulting upstream providers in priority order.\n\nPass `debug=1` to see which provider answered, or why none did.",
        license(name = "MIT"),
    ),
    paths(health, quote),
    components(schemas(QuoteResponse, ErrorResponse, HealthResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "quotes", description = "Exchange rate resolution"),
    )
)]
pub struct ApiDoc;
