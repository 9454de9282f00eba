use std::future::Future;
use std::time::Duration;
use crate::errors::{SdgError, SdgResult};
use crate::structs::config::retry_config::RetryConfig;

/// Retry an operation with bounded exponential backoff while the predicate allows it.
pub async fn retry_with_backoff<T, F, Fut, R>(
    config: &RetryConfig,
    mut action: F,
    mut should_retry: R,
) -> SdgResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = SdgResult<T>>,
    R: FnMut(&SdgError) -> bool,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0usize;
    loop {
        attempt += 1;
        match action().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt >= max_attempts || !should_retry(&err) {
                    return Err(err);
                }
                let delay = backoff_delay(config.base_delay(), config.max_delay(), attempt);
                log::warn!("⚠️ Attempt {attempt}/{max_attempts} failed: {err}; retrying in {}ms", delay.as_millis());
                tokio::time::sleep(delay).await;
            }
        }
    }
}

pub fn backoff_delay(base: Duration, max: Duration, attempt: usize) -> Duration {
    let exponent = u32::try_from(attempt.saturating_sub(1)).unwrap_or(u32::MAX).min(16);
    base.saturating_mul(1u32 << exponent).min(max)
}
