//! Deadline guard for a single provider call.

use std::future::Future;
use std::time::Duration;

use fxquote_types::{ProviderError, QuoteProvider, QuoteRequest, QuoteResult};

/// Runs `call` with a deadline.
///
/// On expiry the future is dropped, which cancels any in-flight I/O it owns;
/// nothing from the abandoned call can complete afterwards.
pub async fn with_deadline<T, F>(limit: Duration, call: F) -> Result<T, ProviderError>
where
    F: Future<Output = Result<T, ProviderError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(ProviderError::Timeout(limit)),
    }
}

/// One guarded `fetch` against `provider`.
pub async fn attempt(
    provider: &dyn QuoteProvider,
    req: &QuoteRequest,
    limit: Duration,
) -> Result<Option<QuoteResult>, ProviderError> {
    with_deadline(limit, provider.fetch(req)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_expired_call_becomes_timeout_error() {
        let limit = Duration::from_secs(8);
        let result: Result<(), _> = with_deadline(limit, async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        })
        .await;

        assert_eq!(result, Err(ProviderError::Timeout(limit)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_call_passes_through() {
        let result = with_deadline(Duration::from_secs(8), async {
            Err::<(), _>(ProviderError::Status(500))
        })
        .await;

        assert_eq!(result, Err(ProviderError::Status(500)));
    }
}
