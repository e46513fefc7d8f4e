//! Retry for transient remote errors.
//!
//! Hosted libSQL occasionally answers with lock or node-recycling errors
//! that clear within seconds. Local files never produce them, so the store
//! only routes remote calls through [`with_retry`].

use std::future::Future;
use std::time::Duration;

/// Backoff settings for transient remote errors.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub base_delay: Duration,
    /// Backoff is capped here.
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(2),
        }
    }
}

/// Narrow match on infrastructure errors. SQL and constraint errors are
/// never retried.
pub fn is_transient(e: &libsql::Error) -> bool {
    let msg = e.to_string().to_ascii_lowercase();
    msg.contains("unable to acquire shared lock")
        || msg.contains("deletion must be in progress")
        || msg.contains("database table is locked")
        || msg.contains("connection reset")
}

/// Run `op` until it succeeds, fails with a non-transient error, or runs
/// out of attempts.
///
/// # Errors
///
/// Returns the last error from `op`.
pub async fn with_retry<T, F, Fut>(config: &RetryConfig, mut op: F) -> Result<T, libsql::Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, libsql::Error>>,
{
    let mut delay = config.base_delay;
    let mut attempt = 1;
    loop {
        match op().await {
            Err(e) if is_transient(&e) && attempt < config.max_attempts => {
                tracing::warn!(attempt, max = config.max_attempts, ?delay, error = %e, "transient store error, retrying");
                tokio::time::sleep(delay).await;
                delay = std::cmp::min(delay * 2, config.max_delay);
                attempt += 1;
            }
            other => return other,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn fast() -> RetryConfig {
        RetryConfig {
            max_attempts: 3,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(2),
        }
    }

    #[tokio::test]
    async fn retries_transient_then_succeeds() {
        let calls = &AtomicU32::new(0);
        let result = with_retry(&fast(), || async move {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(libsql::Error::Misuse("unable to acquire shared lock".into()))
            } else {
                Ok(7)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn does_not_retry_other_errors() {
        let calls = &AtomicU32::new(0);
        let result: Result<(), _> = with_retry(&fast(), || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(libsql::Error::Misuse("no such table: items".into()))
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let calls = &AtomicU32::new(0);
        let result: Result<(), _> = with_retry(&fast(), || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(libsql::Error::Misuse("database table is locked".into()))
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
