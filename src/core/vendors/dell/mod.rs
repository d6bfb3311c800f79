//! Dell TechDirect warranty API

mod client;
mod models;
mod source;

pub use client::{DellApi, DellClient};
pub use models::{DellAsset, Entitlement};
pub use source::DellWarrantySource;
