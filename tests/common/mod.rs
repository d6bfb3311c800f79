//! Common test utilities for warranty-sync
//!
//! - `cmdb`: in-memory CMDB
//! - `fixtures`: record and config factories
//! - `vendors`: scripted vendor APIs

pub mod fixtures;
pub mod vendors;

pub use cmdb::InMemoryCmdb;
pub use fixtures::{AssetFactory, date};
pub use vendors::{ScriptedCisco, ScriptedDell};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
