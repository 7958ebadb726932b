//! Integration tests composing the async combinators

use std::cell::Cell;
use std::time::Duration;

use trove_async::{RetryConfig, batch, delay, retry, timeout, try_batch};
use trove_foundation::{Error, ErrorKind};

#[tokio::test(start_paused = true)]
async fn retry_around_a_timeout() {
    let attempts = Cell::new(0u32);
    let config = RetryConfig::default().with_initial_delay(Duration::from_millis(10));

    let result = retry(&config, || {
        attempts.set(attempts.get() + 1);
        let slow = attempts.get() < 3;
        timeout(
            async move {
                if slow {
                    delay(Duration::from_secs(1)).await;
                }
                "done"
            },
            Duration::from_millis(100),
        )
    })
    .await;

    assert_eq!(result.unwrap(), "done");
    assert_eq!(attempts.get(), 3);
}

#[tokio::test(start_paused = true)]
async fn exhausted_retry_returns_timeout() {
    let config = RetryConfig::no_delay().with_max_attempts(2);
    let result: Result<(), Error> = retry(&config, || {
        timeout(delay(Duration::from_secs(1)), Duration::from_millis(5))
    })
    .await;
    assert!(matches!(result.unwrap_err().kind, ErrorKind::Timeout(_)));
}

#[tokio::test(start_paused = true)]
async fn batch_of_timeouts_keeps_order() {
    let results = batch(
        [300u64, 50, 10].map(|ms| timeout(delay(Duration::from_millis(ms)), Duration::from_millis(100))),
        2,
    )
    .await;
    let timed_out: Vec<bool> = results.iter().map(Result::is_err).collect();
    assert_eq!(timed_out, [true, false, false]);
}

#[tokio::test(start_paused = true)]
async fn try_batch_short_circuits_on_timeout() {
    let result = try_batch(
        [10u64, 500, 10].map(|ms| async move {
            timeout(delay(Duration::from_millis(ms)), Duration::from_millis(100)).await?;
            Ok::<_, Error>(ms)
        }),
        3,
    )
    .await;
    assert!(result.is_err());
}
