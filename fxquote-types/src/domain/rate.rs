//! Validated exchange rates and normalized quote results.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Relative tolerance for rates derived by inversion or pivot division.
///
/// `1/x` and `a/b` each round once, so derived rates are compared against
/// direct quotes with this tolerance rather than exactly.
pub const INVERSION_TOLERANCE: f64 = 1e-9;

/// A strictly positive, finite exchange rate.
///
/// There is no way to build a `Rate` of zero, a negative value or NaN;
/// "no usable number" is always represented as `None` by the constructors.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Rate(f64);

impl Rate {
    pub const ONE: Rate = Rate(1.0);

    /// Accepts `value` only if it is finite and greater than zero.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// `1 / rate`, rejected if the result overflows to infinity.
    pub fn inverse(self) -> Option<Self> {
        Self::new(1.0 / self.0)
    }

    /// `numerator / denominator` for two rates quoted against a common pivot.
    pub fn cross(numerator: f64, denominator: f64) -> Option<Self> {
        let numerator = Self::new(numerator)?;
        let denominator = Self::new(denominator)?;
        Self::new(numerator.0 / denominator.0)
    }

    /// Relative comparison: `|a - b| <= tolerance * max(|a|, |b|)`.
    pub fn approx_eq(self, other: Rate, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance * self.0.max(other.0)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A normalized quote accepted from exactly one provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResult {
    pub rate: Rate,
    /// `YYYY-MM-DD` when the provider reports one, otherwise empty.
    pub date: String,
    /// Provider identifier, only disclosed in debug responses.
    pub source: String,
}

impl QuoteResult {
    pub fn new(rate: Rate, date: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            rate,
            date: date.into(),
            source: source.into(),
        }
    }

    /// The `base == target` result: rate 1 dated `today`.
    pub fn identity(today: NaiveDate) -> Self {
        Self::new(Rate::ONE, today.format("%Y-%m-%d").to_string(), "identity")
    }

    /// Converts a `target->base` quote into the `base->target` one.
    ///
    /// Keeps the reverse quote's date; the source is tagged `:inverse`.
    pub fn inverted(self) -> Option<Self> {
        Some(Self {
            rate: self.rate.inverse()?,
            date: self.date,
            source: format!("{}:inverse", self.source),
        })
    }
}
