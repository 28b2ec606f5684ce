// Opt-in retry policy for transient upstream failures
// Author: kelexine (https://github.com/kelexine)

use crate::error::Result;
use backoff::{backoff::Backoff, ExponentialBackoff};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Parse Google's retryDelay hint out of an error payload.
/// Returns the delay, capped at 60 seconds.
pub fn parse_retry_delay(error: &Value) -> Option<Duration> {
    // Navigate: error.details[] -> find RetryInfo -> retryDelay
    let details = error.get("error")?.get("details")?.as_array()?;

    details
        .iter()
        .filter(|detail| {
            detail.get("@type").and_then(Value::as_str)
                == Some("type.googleapis.com/google.rpc.RetryInfo")
        })
        .find_map(|detail| detail.get("retryDelay").and_then(Value::as_str))
        .and_then(parse_duration_string)
}

/// Parse duration strings like "0.457639761s", "40s", "1.5s"
/// Returns duration, capped at 60 seconds
fn parse_duration_string(duration_str: &str) -> Option<Duration> {
    let seconds: f64 = duration_str.strip_suffix('s')?.parse().ok()?;
    let capped_seconds = seconds.clamp(0.0, 60.0);
    Some(Duration::from_millis((capped_seconds * 1000.0) as u64))
}

/// Create exponential backoff configuration for retries
pub fn create_backoff() -> ExponentialBackoff {
    ExponentialBackoff {
        current_interval: Duration::from_millis(250),
        initial_interval: Duration::from_millis(250),
        randomization_factor: 0.3,
        multiplier: 2.0,
        max_interval: Duration::from_secs(5),
        max_elapsed_time: Some(Duration::from_secs(30)),
        ..Default::default()
    }
}

/// Run `operation`, retrying up to `max_retries` extra times while it fails
/// with a transient upstream error.
///
/// - `max_retries == 0` calls the operation exactly once.
/// - Auth and input failures are returned immediately.
/// - A Google `retryDelay` hint in the error detail takes precedence over
///   the exponential backoff schedule.
pub async fn with_retry<F, Fut, T>(operation_name: &str, max_retries: u32, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut backoff = create_backoff();
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;

        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    debug!("{} succeeded on attempt {}", operation_name, attempt);
                }
                return Ok(result);
            }
            Err(err) => {
                if !err.is_transient() || attempt > max_retries {
                    return Err(err);
                }

                let delay = match err.detail().and_then(parse_retry_delay) {
                    Some(hint) => hint,
                    None => match backoff.next_backoff() {
                        Some(delay) => delay,
                        None => return Err(err),
                    },
                };

                warn!(
                    "{} failed (attempt {}/{}): {}; retrying after {}ms",
                    operation_name,
                    attempt,
                    max_retries + 1,
                    err,
                    delay.as_millis()
                );

                tokio::time::sleep(delay).await;
            }
        }
    }
}
