//! Error handling for warranty-sync
//!
//! This module defines all error types used throughout the sync pipeline.

mod helpers;
mod types;

pub use types::{LookupErrorKind, Result, SyncError};
