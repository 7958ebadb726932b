//! Delay and timeout.

use std::future::Future;
use std::time::Duration;

use tracing::debug;
use trove_foundation::{Error, Result};

/// Sleeps for `duration`.
pub async fn delay(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Awaits `future`, giving up after `after`.
///
/// On expiry the inner future is dropped, which cancels it at its current
/// suspension point.
///
/// # Errors
///
/// Returns [`ErrorKind::Timeout`](trove_foundation::ErrorKind::Timeout) if
/// `future` does not complete in time.
pub async fn timeout<F: Future>(future: F, after: Duration) -> Result<F::Output> {
    tokio::time::timeout(after, future).await.map_err(|_| {
        debug!(after_ms = after.as_millis(), "timeout fired");
        Error::timeout(after)
    })
}
