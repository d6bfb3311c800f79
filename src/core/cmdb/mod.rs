//! CMDB access
//!
//! `CmdbClient` is the seam between the pipelines and the configuration
//! management database. `ServiceNowClient` implements it against the
//! ServiceNow Table API; `CmdbWriter` layers outcome handling and mirror
//! updates on top of any client.

pub mod client;
pub mod query;
pub mod servicenow;
pub mod writer;

pub use client::{CmdbClient, KeyKind, LookupKey};
pub use query::CmdbQuery;
pub use servicenow::ServiceNowClient;
pub use writer::{CmdbWriter, WriteOutcome};
