//! Outcome of running a request through the provider chain.

use serde::Serialize;
use std::fmt;

use super::rate::QuoteResult;
use crate::error::ProviderError;

/// Which way a provider was asked for the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `base -> target` as requested.
    Direct,
    /// `target -> base`, then inverted.
    Inverse,
}

/// What happened when one provider was consulted.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    /// Coverage predicate excluded the base currency; no request was made.
    Skipped,
    /// The provider answered but had no usable number for the pair.
    NoData,
    /// Network failure, bad status, malformed body or timeout.
    Failed(ProviderError),
    /// This attempt produced the returned quote.
    Accepted,
}

/// Diagnostic record of a single provider attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub provider: String,
    pub direction: Direction,
    pub outcome: AttemptOutcome,
}

impl Attempt {
    /// True if the attempt reached the provider (it was not skipped).
    pub fn was_invoked(&self) -> bool {
        !matches!(self.outcome, AttemptOutcome::Skipped)
    }
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Direct => write!(f, "{}", self.provider)?,
            Direction::Inverse => write!(f, "{}:inverse", self.provider)?,
        }
        match &self.outcome {
            AttemptOutcome::Skipped => f.write_str(": skipped"),
            AttemptOutcome::NoData => f.write_str(": no data"),
            AttemptOutcome::Failed(err) => write!(f, ": {}", err),
            AttemptOutcome::Accepted => f.write_str(": accepted"),
        }
    }
}

/// Result of one resolution: at most one quote plus the attempts made.
///
/// `quote == None` is the exhausted-chain outcome. It is a normal value,
/// not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub quote: Option<QuoteResult>,
    pub attempts: Vec<Attempt>,
}

impl Resolution {
    /// A resolution that needed no provider at all.
    pub fn immediate(quote: QuoteResult) -> Self {
        Self {
            quote: Some(quote),
            attempts: Vec::new(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.quote.is_none()
    }

    /// Number of attempts that actually invoked a provider.
    pub fn invocations(&self) -> usize {
        self.attempts.iter().filter(|a| a.was_invoked()).count()
    }

    /// `"<provider>: <reason>"` for every failed attempt, in chain order.
    pub fn errors(&self) -> Vec<String> {
        self.attempts
            .iter()
            .filter(|a| matches!(a.outcome, AttemptOutcome::Failed(_)))
            .map(ToString::to_string)
            .collect()
    }
}
