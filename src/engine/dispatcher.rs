// * Bounded Task Dispatcher
// * Runs one spawned task per item with at most `concurrency` in flight.
// * A panicking task is logged and dropped; the rest of the stage carries on.

use futures::stream::{self, StreamExt};
use std::future::Future;
use std::num::NonZeroUsize;
use tracing::error;

use crate::config::constants::FALLBACK_CONCURRENCY;

// * Worker count matching the host's available parallelism
pub fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(FALLBACK_CONCURRENCY)
}

/// Fans `job` out over `items` and waits for every task to finish.
///
/// Results arrive in completion order. Returning from this function is the
/// barrier between pipeline stages.
pub async fn dispatch<I, F, Fut, T>(stage: &'static str, items: I, concurrency: usize, job: F) -> Vec<T>
where
    I: IntoIterator,
    F: Fn(I::Item) -> Fut,
    Fut: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    stream::iter(items)
        .map(|item| tokio::spawn(job(item)))
        .buffer_unordered(concurrency.max(1))
        .filter_map(|joined| async move {
            match joined {
                Ok(value) => Some(value),
                Err(e) => {
                    error!(stage = stage, error = %e, "Worker task crashed");
                    None
                }
            }
        })
        .collect()
        .await
}
