//! Network and Client utilities
//!
//! This module provides HTTP client construction shared by the CMDB and
//! vendor clients.

pub mod client;

// Re-export commonly used types and functions
pub use client::{ClientUtils, HttpClientConfig};
