//! Batched vendor lookups
//!
//! Identifiers are split into consecutive groups no larger than the vendor's
//! batch ceiling and looked up one group at a time. A failed group does not
//! stop the groups after it.

mod requester;
mod types;


pub use requester::{fetch_batches, partition};
pub use types::BatchResult;
