//! Quote Resolution Service
//!
//! Walks an ordered provider chain until one provider returns a usable rate.
//! Contains NO transport logic - providers are injected through the
//! `QuoteProvider` port.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use fxquote_types::{
    Attempt, AttemptOutcome, Direction, QuoteProvider, QuoteRequest, QuoteResult, Resolution,
};

use crate::guard;

/// Deadline applied to each provider call unless configured otherwise.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(8);

/// Application service for quote resolution.
///
/// Providers are consulted strictly in order, one at a time:
/// 1. direct providers for `base -> target`;
/// 2. if none produced a rate, inverse providers for `target -> base`,
///    whose rate is inverted.
///
/// The first accepted quote wins; quotes are never merged or averaged.
/// Provider failures and timeouts only advance the chain; a provider that
/// failed on the direct pass is skipped on the inverse pass.
#[derive(Clone)]
pub struct QuoteService {
    direct: Vec<Arc<dyn QuoteProvider>>,
    inverse: Vec<Arc<dyn QuoteProvider>>,
    timeout: Duration,
}

impl QuoteService {
    /// Creates a service over the given direct provider chain.
    pub fn new(direct: Vec<Arc<dyn QuoteProvider>>) -> Self {
        Self {
            direct,
            inverse: Vec::new(),
            timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    /// Sets the providers tried in the reverse direction once the direct chain is exhausted.
    pub fn with_inverse(mut self, inverse: Vec<Arc<dyn QuoteProvider>>) -> Self {
        self.inverse = inverse;
        self
    }

    /// Sets the per-provider deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Names of the direct and inverse chains, in priority order.
    pub fn chain(&self) -> (Vec<&str>, Vec<&str>) {
        (
            self.direct.iter().map(|p| p.name()).collect(),
            self.inverse.iter().map(|p| p.name()).collect(),
        )
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Resolution
    // ─────────────────────────────────────────────────────────────────────────────

    /// Resolves one quote request. Never fails: an exhausted chain is a
    /// `Resolution` without a quote.
    #[tracing::instrument(skip(self, req), fields(pair = %req))]
    pub async fn resolve(&self, req: &QuoteRequest) -> Resolution {
        if req.is_identity() {
            return Resolution::immediate(QuoteResult::identity(Utc::now().date_naive()));
        }

        let mut attempts = Vec::new();

        if let Some(quote) = self
            .walk(&self.direct, req, Direction::Direct, &mut attempts)
            .await
        {
            return Resolution {
                quote: Some(quote),
                attempts,
            };
        }

        let reversed = req.inverted();
        if let Some(quote) = self
            .walk(&self.inverse, &reversed, Direction::Inverse, &mut attempts)
            .await
        {
            return Resolution {
                quote: Some(quote),
                attempts,
            };
        }

        tracing::warn!(attempts = attempts.len(), "no provider produced a rate");
        Resolution {
            quote: None,
            attempts,
        }
    }

    async fn walk(
        &self,
        providers: &[Arc<dyn QuoteProvider>],
        req: &QuoteRequest,
        direction: Direction,
        attempts: &mut Vec<Attempt>,
    ) -> Option<QuoteResult> {
        for provider in providers {
            // A provider that already failed this request is not asked again
            if direction == Direction::Inverse && failed_directly(attempts, provider.name()) {
                tracing::debug!(provider = provider.name(), "failed on direct pass, skipping inverse");
                attempts.push(Attempt {
                    provider: provider.name().to_string(),
                    direction,
                    outcome: AttemptOutcome::Skipped,
                });
                continue;
            }

            let (outcome, quote) = self.consult(provider.as_ref(), req, direction).await;
            attempts.push(Attempt {
                provider: provider.name().to_string(),
                direction,
                outcome,
            });
            if quote.is_some() {
                return quote;
            }
        }
        None
    }

    async fn consult(
        &self,
        provider: &dyn QuoteProvider,
        req: &QuoteRequest,
        direction: Direction,
    ) -> (AttemptOutcome, Option<QuoteResult>) {
        let name = provider.name();

        if !provider.covers(&req.base) {
            tracing::debug!(provider = name, ?direction, base = %req.base, "base not covered, skipping");
            return (AttemptOutcome::Skipped, None);
        }

        let quote = match guard::attempt(provider, req, self.timeout).await {
            Ok(Some(quote)) => quote,
            Ok(None) => {
                tracing::debug!(provider = name, ?direction, "provider had no rate");
                return (AttemptOutcome::NoData, None);
            }
            Err(err) => {
                tracing::warn!(provider = name, ?direction, error = %err, "provider failed");
                return (AttemptOutcome::Failed(err), None);
            }
        };

        let quote = match direction {
            Direction::Direct => Some(quote),
            Direction::Inverse => quote.inverted(),
        };

        match quote {
            Some(quote) => {
                tracing::debug!(provider = name, ?direction, rate = %quote.rate, "quote accepted");
                (AttemptOutcome::Accepted, Some(quote))
            }
            None => (AttemptOutcome::NoData, None),
        }
    }
}

fn failed_directly(attempts: &[Attempt], name: &str) -> bool {
    attempts.iter().any(|a| {
        a.direction == Direction::Direct
            && a.provider == name
            && matches!(a.outcome, AttemptOutcome::Failed(_))
    })
}
