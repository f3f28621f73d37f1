//! HTTP request handlers.

use std::any::Any;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use fxquote_types::{
    AppError, DomainError, ErrorResponse, HealthResponse, QuoteQuery, QuoteRequest, QuoteResponse,
};

use crate::QuoteService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState {
    pub service: QuoteService,
    /// `Cache-Control` value attached to successful quotes.
    pub cache_control: HeaderValue,
}

/// `public, max-age=N, s-maxage=N, stale-while-revalidate=5N`
pub fn cache_control(max_age_secs: u64) -> HeaderValue {
    let value = format!(
        "public, max-age={n}, s-maxage={n}, stale-while-revalidate={swr}",
        n = max_age_secs,
        swr = max_age_secs.saturating_mul(5)
    );
    HeaderValue::from_str(&value).unwrap_or(HeaderValue::from_static("no-store"))
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".into(),
    })
}

/// Resolve one currency pair.
#[tracing::instrument(skip_all, fields(pair = tracing::field::Empty))]
pub async fn quote(
    State(state): State<Arc<AppState>>,
    query: Result<Query<QuoteQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let (Some(base), Some(target)) = (query.base_code(), query.target_code()) else {
        return Err(AppError::BadRequest("missing base/target".into()).into());
    };
    let req = QuoteRequest::parse(base, target)?;
    tracing::Span::current().record("pair", tracing::field::display(&req));

    let resolution = state.service.resolve(&req).await;
    let body = QuoteResponse::from_resolution(&resolution, query.is_debug());

    let cache = if body.is_available() {
        state.cache_control.clone()
    } else {
        tracing::info!(pair = %req, attempts = resolution.attempts.len(), "rate unavailable");
        HeaderValue::from_static("no-store")
    };

    Ok(([(header::CACHE_CONTROL, cache)], Json(body)).into_response())
}

/// Serves the generated OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Body for a request whose handler panicked.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());

    ApiError(AppError::Internal(detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_control_value() {
        assert_eq!(
            cache_control(60),
            "public, max-age=60, s-maxage=60, stale-while-revalidate=300"
        );
    }

    #[test]
    fn test_panic_payload_is_not_disclosed() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
