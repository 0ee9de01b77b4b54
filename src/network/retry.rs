//! Retry logic with exponential backoff
//!
//! Only used for read-only RPC queries. Transactions are never retried.

use std::time::Duration;
use anyhow::Result;
use tracing::warn;
use crate::errors::{DeployError, DeployResult};

#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub exponential_base: f64,
}

/// Grows `current` by the base with +/-5% jitter, then caps at `max_delay_ms`.
fn next_delay(current: u64, config: &RetryConfig) -> u64 {
    let grown = current as f64 * config.exponential_base;
    let jitter = grown * 0.1 * (rand::random::<f64>() - 0.5);
    let delay = (grown + jitter).max(0.0) as u64;
    delay.min(config.max_delay_ms)
}

pub async fn retry_with_backoff<F, Fut, T>(
    operation: F,
    config: &RetryConfig,
    context: &str,
) -> DeployResult<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut attempt = 0;
    let mut delay = config.initial_delay_ms;

    loop {
        attempt += 1;

        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) if attempt >= config.max_attempts.max(1) => {
                return Err(DeployError::Network {
                    message: format!("{} failed after {} attempts", context, attempt),
                    source: Some(e),
                    retry_count: attempt,
                });
            }
            Err(e) => {
                warn!(
                    "Attempt {}/{} failed for {}: {}. Retrying in {}ms...",
                    attempt, config.max_attempts, context, e, delay
                );

                tokio::time::sleep(Duration::from_millis(delay)).await;

                delay = next_delay(delay, config);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast() -> RetryConfig {
        RetryConfig {
            max_attempts: 3,
            initial_delay_ms: 1,
            max_delay_ms: 2,
            exponential_base: 2.0,
        }
    }

    #[test]
    fn delay_never_exceeds_cap() {
        let config = RetryConfig {
            max_attempts: 10,
            initial_delay_ms: 500,
            max_delay_ms: 10_000,
            exponential_base: 2.0,
        };
        let mut delay = config.initial_delay_ms;
        for _ in 0..50 {
            delay = next_delay(delay, &config);
            assert!(delay <= config.max_delay_ms, "delay {delay} above cap");
        }
        assert!(delay >= 9_500, "delay {delay} should settle near the cap");
    }

    #[test]
    fn jitter_stays_within_five_percent() {
        let config = RetryConfig {
            max_attempts: 3,
            initial_delay_ms: 1_000,
            max_delay_ms: u64::MAX,
            exponential_base: 2.0,
        };
        for _ in 0..200 {
            let delay = next_delay(1_000, &config);
            assert!((1_900..=2_100).contains(&delay), "delay {delay} outside jitter band");
        }
    }

    #[tokio::test]
    async fn succeeds_after_transient_failures() {
        let calls = AtomicU32::new(0);
        let result = retry_with_backoff(
            || async {
                if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(anyhow::anyhow!("connection refused"))
                } else {
                    Ok(97u64)
                }
            },
            &fast(),
            "chain id lookup",
        )
        .await
        .unwrap();

        assert_eq!(result, 97);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let err = retry_with_backoff(
            || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<u64, _>(anyhow::anyhow!("timeout"))
            },
            &fast(),
            "chain id lookup",
        )
        .await
        .unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        match err {
            DeployError::Network { retry_count, message, .. } => {
                assert_eq!(retry_count, 3);
                assert!(message.contains("chain id lookup"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
