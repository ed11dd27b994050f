//! Retry wrapper for transient provider failures.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use pantheon_core::error::ProviderError;
use pantheon_core::traits::{GenerateRequest, GenerateResponse, LlmProvider, ModelInfo};

const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// Wraps a provider and retries transient errors with exponential backoff.
///
/// Authentication and model-not-found errors are returned immediately. A
/// rate-limit response replaces the next wait with its `retry-after` hint,
/// capped like every other wait.
pub struct RetryingProvider {
    inner: Arc<dyn LlmProvider>,
    max_retries: u32,
    retry_delay: Duration,
}

impl RetryingProvider {
    pub fn new(inner: Arc<dyn LlmProvider>, max_retries: u32, retry_delay: Duration) -> Self {
        Self {
            inner,
            max_retries,
            retry_delay,
        }
    }
}

#[async_trait]
impl LlmProvider for RetryingProvider {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
        let mut delay = self.retry_delay;
        let mut attempt = 0;

        loop {
            let err = match self.inner.generate(request).await {
                Ok(response) => return Ok(response),
                Err(e) => e,
            };

            let provider_err = err.downcast_ref::<ProviderError>();
            if provider_err.is_some_and(ProviderError::is_permanent) || attempt >= self.max_retries {
                return Err(err);
            }
            if let Some(ms) = provider_err.and_then(ProviderError::retry_after_ms) {
                delay = Duration::from_millis(ms).min(MAX_BACKOFF);
            }

            attempt += 1;
            tracing::warn!(
                provider = self.inner.name(),
                attempt,
                delay_ms = delay.as_millis() as u64,
                "generation failed, retrying: {err}"
            );
            tokio::time::sleep(delay).await;
            delay = delay.saturating_mul(2).min(MAX_BACKOFF);
        }
    }

    fn available_models(&self) -> Vec<ModelInfo> {
        self.inner.available_models()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    use pantheon_core::traits::TokenUsage;

    /// Fails with the given error for the first `failures` calls.
    struct Flaky {
        failures: u32,
        error: fn() -> ProviderError,
        calls: AtomicU32,
    }

    impl Flaky {
        fn new(failures: u32, error: fn() -> ProviderError) -> Arc<Self> {
            Arc::new(Self {
                failures,
                error,
                calls: AtomicU32::new(0),
            })
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmProvider for Flaky {
        fn name(&self) -> &str {
            "flaky"
        }

        async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                return Err((self.error)().into());
            }
            Ok(GenerateResponse {
                content: "ok".into(),
                model: request.model.clone(),
                token_usage: TokenUsage::default(),
                latency_ms: 0,
            })
        }

        fn available_models(&self) -> Vec<ModelInfo> {
            vec![]
        }
    }

    fn request() -> GenerateRequest {
        GenerateRequest {
            model: "m".into(),
            prompt: "p".into(),
            system_prompt: None,
            max_tokens: 10,
            temperature: 0.0,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn transient_errors_are_retried() {
        let inner = Flaky::new(2, || ProviderError::Timeout(30));
        let provider = RetryingProvider::new(inner.clone(), 3, Duration::from_millis(100));

        let response = provider.generate(&request()).await.unwrap();
        assert_eq!(response.content, "ok");
        assert_eq!(inner.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_max_retries() {
        let inner = Flaky::new(10, || ProviderError::NetworkError("reset".into()));
        let provider = RetryingProvider::new(inner.clone(), 2, Duration::from_millis(100));

        let err = provider.generate(&request()).await.unwrap_err();
        assert!(err.to_string().contains("reset"));
        assert_eq!(inner.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn permanent_errors_are_not_retried() {
        let inner = Flaky::new(10, || ProviderError::AuthenticationFailed("bad key".into()));
        let provider = RetryingProvider::new(inner.clone(), 3, Duration::from_millis(100));

        assert!(provider.generate(&request()).await.is_err());
        assert_eq!(inner.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn rate_limit_hint_sets_the_wait() {
        let inner = Flaky::new(1, || ProviderError::RateLimited {
            retry_after_ms: 7000,
        });
        let provider = RetryingProvider::new(inner.clone(), 1, Duration::from_millis(10));

        let start = tokio::time::Instant::now();
        provider.generate(&request()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(7000));
        assert_eq!(inner.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn huge_rate_limit_hint_is_capped() {
        let inner = Flaky::new(1, || ProviderError::RateLimited {
            retry_after_ms: u64::MAX,
        });
        let provider = RetryingProvider::new(inner.clone(), 1, Duration::from_millis(10));

        let start = tokio::time::Instant::now();
        provider.generate(&request()).await.unwrap();
        assert!(start.elapsed() <= MAX_BACKOFF + Duration::from_secs(1));
        assert_eq!(inner.calls(), 2);
    }

    #[test]
    fn delegates_name() {
        let provider = RetryingProvider::new(
            Flaky::new(0, || ProviderError::Timeout(1)),
            0,
            Duration::ZERO,
        );
        assert_eq!(provider.name(), "flaky");
    }
}
