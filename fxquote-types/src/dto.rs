//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Resolution;

// ─────────────────────────────────────────────────────────────────────────────
// Quote DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query string of the quote endpoint.
///
/// `from`/`base` and `to`/`target` are synonyms; `from` and `to` win when
/// both spellings are given. Blank values count as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuoteQuery {
    /// Base currency (synonym: `base`)
    #[param(example = "USD")]
    pub from: Option<String>,
    /// Base currency (synonym: `from`)
    pub base: Option<String>,
    /// Target currency (synonym: `target`)
    #[param(example = "JPY")]
    pub to: Option<String>,
    /// Target currency (synonym: `to`)
    pub target: Option<String>,
    /// `1` discloses the provider source and per-provider errors
    pub debug: Option<String>,
}

impl QuoteQuery {
    pub fn base_code(&self) -> Option<&str> {
        first_present(&self.from, &self.base)
    }

    pub fn target_code(&self) -> Option<&str> {
        first_present(&self.to, &self.target)
    }

    pub fn is_debug(&self) -> bool {
        self.debug.as_deref() == Some("1")
    }
}

fn first_present<'a>(primary: &'a Option<String>, synonym: &'a Option<String>) -> Option<&'a str> {
    [primary, synonym]
        .into_iter()
        .filter_map(|v| v.as_deref())
        .map(str::trim)
        .find(|v| !v.is_empty())
}

/// Quote response body.
///
/// `rate` is `null` (and `date` empty) when no provider produced data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuoteResponse {
    /// Units of target per one unit of base
    #[schema(example = 149.5)]
    pub rate: Option<f64>,
    /// Quote date, `YYYY-MM-DD` or empty
    #[schema(example = "2025-10-20")]
    pub date: String,
    /// Provider that produced the rate (debug only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "frankfurter")]
    pub source: Option<String>,
    /// Per-provider failures (debug only, unavailable rates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl QuoteResponse {
    /// Shapes a resolution for the wire, disclosing diagnostics only in debug mode.
    pub fn from_resolution(resolution: &Resolution, debug: bool) -> Self {
        match &resolution.quote {
            Some(quote) => Self {
                rate: Some(quote.rate.value()),
                date: quote.date.clone(),
                source: debug.then(|| quote.source.clone()),
                errors: None,
            },
            None => Self {
                rate: None,
                date: String::new(),
                source: None,
                errors: debug.then(|| resolution.errors()),
            },
        }
    }

    pub fn is_available(&self) -> bool {
        self.rate.is_some()
    }
}

/// Error body for 4xx / 5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "missing base/target")]
    pub error: String,
}

/// Health check body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}
