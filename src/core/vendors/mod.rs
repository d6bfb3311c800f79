//! Vendor warranty APIs
//!
//! Each vendor has a raw API trait (`CiscoApi`, `DellApi`) mirroring its HTTP
//! endpoints, an HTTP implementation, and a [`WarrantySource`] adapter that
//! turns raw responses into per-identifier [`WarrantyLookupResult`]s.

pub mod auth;
pub mod cisco;
pub mod dell;

pub use auth::{AccessToken, ClientCredentials, OAuthSession};
pub use cisco::{CiscoApi, CiscoClient, CiscoWarrantySource};
pub use dell::{DellApi, DellClient, DellWarrantySource};

use crate::core::models::{NormalizedIdentifier, VendorFamily, WarrantyLookupResult};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Batch lookup of authoritative warranty data
#[async_trait]
pub trait WarrantySource: Send + Sync {
    fn family(&self) -> VendorFamily;

    /// Largest batch the vendor accepts
    fn batch_size(&self) -> usize;

    /// Look up one batch
    ///
    /// An `Err` fails the whole batch. Per-identifier problems are reported
    /// through [`WarrantyLookupResult::error`]. Results may name identifiers
    /// that were not requested.
    async fn lookup(&self, batch: &[NormalizedIdentifier]) -> Result<Vec<WarrantyLookupResult>>;
}
