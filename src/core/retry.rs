// Bounded retry for calls to flaky upstream services.
//
// Only failures the caller classifies as transient are retried. Everything else
// is returned on the first attempt.

use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each subsequent retry.
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// A single attempt, no retries.
    pub fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    pub fn delay_for(&self, retry: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(retry))
    }

    /// Runs `op` until it succeeds, fails permanently, or the budget runs out.
    pub async fn run<T, E, F, Fut>(
        &self,
        label: &str,
        is_transient: impl Fn(&E) -> bool,
        mut op: F,
    ) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let mut retry = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if retry < self.max_retries && is_transient(&e) => {
                    let delay = self.delay_for(retry);
                    tracing::warn!(
                        attempt = retry + 1,
                        max_retries = self.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "{} failed transiently: {}",
                        label,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    retry += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(2, Duration::from_millis(500))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug)]
    enum FakeError {
        Transient,
        Permanent,
    }

    impl std::fmt::Display for FakeError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self)
        }
    }

    fn transient(e: &FakeError) -> bool {
        matches!(e, FakeError::Transient)
    }

    #[test]
    fn test_delay_doubles() {
        let policy = RetryPolicy::new(3, Duration::from_millis(100));
        assert_eq!(policy.delay_for(0), Duration::from_millis(100));
        assert_eq!(policy.delay_for(1), Duration::from_millis(200));
        assert_eq!(policy.delay_for(2), Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_retries_transient_until_success() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let policy = RetryPolicy::new(2, Duration::ZERO);

        let result = policy
            .run("op", transient, || async move {
                if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(FakeError::Transient)
                } else {
                    Ok(7)
                }
            })
            .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_budget() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let policy = RetryPolicy::new(2, Duration::ZERO);

        let result: Result<(), _> = policy
            .run("op", transient, || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(FakeError::Transient)
            })
            .await;

        assert!(matches!(result, Err(FakeError::Transient)));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_permanent_error_not_retried() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let policy = RetryPolicy::new(5, Duration::ZERO);

        let result: Result<(), _> = policy
            .run("op", transient, || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(FakeError::Permanent)
            })
            .await;

        assert!(matches!(result, Err(FakeError::Permanent)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
