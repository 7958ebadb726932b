//! Bounded-concurrency execution.
//!
//! At most `limit` futures are polled at once. Results are written to the
//! slot of their input position, so output order matches input order no
//! matter which future finishes first.

use std::future::Future;
use std::pin::pin;

use futures::stream::{self, StreamExt};
use tracing::debug;

/// Runs every future with at most `limit` in flight. A `limit` of zero is
/// treated as one.
pub async fn batch<I, F, T>(futures: I, limit: usize) -> Vec<T>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = T>,
{
    let futures: Vec<F> = futures.into_iter().collect();
    let limit = limit.max(1);
    debug!(size = futures.len(), limit, "batch start");

    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(futures.len()).collect();
    let mut running = pin!(
        stream::iter(futures.into_iter().enumerate())
            .map(|(index, future)| async move { (index, future.await) })
            .buffer_unordered(limit)
    );

    while let Some((index, output)) = running.next().await {
        slots[index] = Some(output);
    }
    slots.into_iter().flatten().collect()
}

/// Like [`batch`], but stops at the first error. Futures still in flight
/// are dropped.
///
/// # Errors
///
/// Returns the first error to complete.
pub async fn try_batch<I, F, T, E>(futures: I, limit: usize) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    let futures: Vec<F> = futures.into_iter().collect();
    let limit = limit.max(1);
    debug!(size = futures.len(), limit, "batch start");

    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(futures.len()).collect();
    let mut running = pin!(
        stream::iter(futures.into_iter().enumerate())
            .map(|(index, future)| async move { (index, future.await) })
            .buffer_unordered(limit)
    );

    while let Some((index, output)) = running.next().await {
        slots[index] = Some(output?);
    }
    Ok(slots.into_iter().flatten().collect())
}
