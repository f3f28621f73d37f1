//! Currency codes and quote requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// An uppercase, ISO-4217-like currency identifier.
///
/// Codes are normalized (trimmed, uppercased) on construction but are NOT
/// checked against a master list: an unknown code is passed through to the
/// providers and simply fails to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parses and normalizes a raw code.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyCurrencyCode);
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidCurrencyCode(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// US dollar, the default pivot of board providers.
    pub fn usd() -> Self {
        Self("USD".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

/// A request for the rate of one `base` unit expressed in `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuoteRequest {
    pub base: CurrencyCode,
    pub target: CurrencyCode,
}

impl QuoteRequest {
    pub fn new(base: CurrencyCode, target: CurrencyCode) -> Self {
        Self { base, target }
    }

    /// Parses both codes from raw strings.
    pub fn parse(base: &str, target: &str) -> Result<Self, DomainError> {
        Ok(Self::new(base.parse()?, target.parse()?))
    }

    /// True when `base == target`; such pairs never need a provider.
    pub fn is_identity(&self) -> bool {
        self.base == self.target
    }

    /// The reverse pair, used by inverse-direction lookups.
    pub fn inverted(&self) -> Self {
        Self {
            base: self.target.clone(),
            target: self.base.clone(),
        }
    }
}

impl fmt::Display for QuoteRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.base, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_trimmed_and_uppercased() {
        let code = CurrencyCode::parse("  usd ").unwrap();
        assert_eq!(code.as_str(), "USD");
    }

    #[test]
    fn test_unknown_code_passes_through() {
        let code: CurrencyCode = "xyz".parse().unwrap();
        assert_eq!(code.to_string(), "XYZ");
    }

    #[test]
    fn test_empty_code_fails() {
        assert!(matches!(
            CurrencyCode::parse("   "),
            Err(DomainError::EmptyCurrencyCode)
        ));
    }

    #[test]
    fn test_non_alphabetic_code_fails() {
        assert!(matches!(
            CurrencyCode::parse("US/D"),
            Err(DomainError::InvalidCurrencyCode(_))
        ));
    }

    #[test]
    fn test_identity_and_inversion() {
        let req = QuoteRequest::parse("usd", "JPY").unwrap();
        assert!(!req.is_identity());

        let inverted = req.inverted();
        assert_eq!(inverted.base.as_str(), "JPY");
        assert_eq!(inverted.target.as_str(), "USD");

        assert!(QuoteRequest::parse("eur", "EUR").unwrap().is_identity());
    }
}
