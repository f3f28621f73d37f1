//! Cross rates from a single-pivot rate board.

use fxquote_types::{CurrencyCode, QuoteRequest, Rate};

pub(crate) fn default_pivot() -> CurrencyCode {
    CurrencyCode::usd()
}

/// Derives `base -> target` from a board quoted as "units per one `pivot`".
///
/// The pivot's own leg is always 1, whether or not the board lists it.
/// A missing, non-numeric or non-positive leg yields `None`.
pub(crate) fn cross_rate<F>(pivot: &CurrencyCode, req: &QuoteRequest, lookup: F) -> Option<Rate>
where
    F: Fn(&str) -> Option<f64>,
{
    let leg = |code: &CurrencyCode| {
        if code == pivot {
            Some(1.0)
        } else {
            lookup(code.as_str())
        }
    };

    Rate::cross(leg(&req.target)?, leg(&req.base)?)
}
