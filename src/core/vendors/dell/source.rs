//! Converts Dell entitlements into lookup results

use super::client::DellApi;
use crate::core::models::{NormalizedIdentifier, VendorFamily, WarrantyLookupResult};
use crate::core::vendors::WarrantySource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::debug;

/// Dell [`WarrantySource`] over any [`DellApi`]
pub struct DellWarrantySource<A> {
    api: A,
    batch_size: usize,
    /// Unmatched service tags that are expected and skipped silently
    ignored_service_tags: HashSet<String>,
}

impl<A: DellApi> DellWarrantySource<A> {
    pub fn new<I, S>(api: A, batch_size: usize, ignored_service_tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            api,
            batch_size,
            ignored_service_tags: ignored_service_tags.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl<A: DellApi> WarrantySource for DellWarrantySource<A> {
    fn family(&self) -> VendorFamily {
        VendorFamily::Dell
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }

    async fn lookup(&self, batch: &[NormalizedIdentifier]) -> Result<Vec<WarrantyLookupResult>> {
        let assets = self.api.asset_entitlements(batch).await?;

        Ok(assets
            .iter()
            .filter(|asset| {
                let ignored = asset.is_unmatched()
                    && self.ignored_service_tags.contains(&asset.service_tag);
                if ignored {
                    debug!("Skipping ignored service tag {}", asset.service_tag);
                }
                !ignored
            })
            .map(|asset| asset.to_lookup_result())
            .collect())
    }
}
