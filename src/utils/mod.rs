//! Utility modules for warranty-sync
//!
//! - **error**: Error types and the crate `Result` alias
//! - **logging**: tracing subscriber setup
//! - **net**: HTTP client construction

pub mod error;
pub mod logging;
pub mod net;

pub use error::{LookupErrorKind, Result, SyncError};
pub use net::{ClientUtils, HttpClientConfig};
