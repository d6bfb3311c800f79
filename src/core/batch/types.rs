//! Batch result types

use crate::utils::error::Result;
use std::time::Duration;

/// Outcome of looking up one batch
#[derive(Debug)]
pub struct BatchResult<'a, T, R> {
    /// Position of the batch in the partition, starting at 0
    pub index: usize,
    /// Items that were sent in this batch
    pub items: &'a [T],
    pub result: Result<R>,
    /// Time spent waiting on the lookup
    pub duration: Duration,
}

impl<T, R> BatchResult<'_, T, R> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
