//! Error types for the quote service.

use std::time::Duration;

/// Domain-level errors (invalid input values).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("currency code cannot be empty")]
    EmptyCurrencyCode,

    #[error("invalid currency code: {0}")]
    InvalidCurrencyCode(String),
}

/// A failure of one upstream provider call.
///
/// Always recovered inside the resolution chain by moving on to the next
/// provider; never surfaced to API callers except as debug diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("timeout after {}ms", .0.as_millis())]
    Timeout(Duration),
}

impl ProviderError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ProviderError::Timeout(_))
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Malformed(err.to_string())
    }
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes. An exhausted chain is NOT an error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
