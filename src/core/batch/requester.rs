//! Partitioning and sequential batch execution

use super::types::BatchResult;
use crate::utils::error::Result;
use futures::stream::{self, Stream, StreamExt};
use std::future::Future;
use std::time::Instant;
use tracing::debug;

/// Split `items` into consecutive groups of at most `batch_size`
///
/// A batch size of 0 is treated as 1. Each call starts a fresh partition.
pub fn partition<T>(items: &[T], batch_size: usize) -> std::slice::Chunks<'_, T> {
    items.chunks(batch_size.max(1))
}

/// Look up `items` in batches, one batch at a time
///
/// The returned stream is lazy: `lookup` is only invoked for a batch when the
/// stream is polled for it, and the next batch is not started until the
/// previous one has resolved.
pub fn fetch_batches<'a, T, R, F, Fut>(
    items: &'a [T],
    batch_size: usize,
    mut lookup: F,
) -> impl Stream<Item = BatchResult<'a, T, R>> + 'a
where
    T: 'a,
    R: 'a,
    F: FnMut(&'a [T]) -> Fut + 'a,
    Fut: Future<Output = Result<R>> + 'a,
{
    stream::iter(partition(items, batch_size).enumerate()).then(move |(index, batch)| {
        debug!("Requesting batch {} ({} items)", index, batch.len());
        let start = Instant::now();
        let pending = lookup(batch);
        async move {
            let result = pending.await;
            BatchResult {
                index,
                items: batch,
                result,
                duration: start.elapsed(),
            }
        }
    })
}
