//! Configuration data models
//!
//! This module defines all configuration structures used by the sync pipelines.

pub mod cmdb;
pub mod runtime;
pub mod sync;
pub mod vendor;

// Re-export all configuration types
pub use cmdb::*;
pub use runtime::*;
pub use sync::*;
pub use vendor::*;

/// Default CMDB table path, relative to `/api/now`
pub fn default_table_path() -> String {
    "/table/cmdb_ci".to_string()
}

/// Default page size for CMDB record fetches
pub fn default_page_size() -> u32 {
    1000
}

pub fn default_true() -> bool {
    true
}

pub fn default_user_agent() -> String {
    format!("warranty-sync/{}", env!("CARGO_PKG_VERSION"))
}

pub fn default_log_level() -> String {
    "info".to_string()
}
