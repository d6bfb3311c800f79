//! Merges Cisco warranty and EOX answers into lookup results

use super::client::CiscoApi;
use crate::core::models::{NormalizedIdentifier, VendorFamily, WarrantyLookupResult};
use crate::core::vendors::WarrantySource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Cisco [`WarrantySource`] over any [`CiscoApi`]
pub struct CiscoWarrantySource<A> {
    api: A,
    batch_size: usize,
}

impl<A: CiscoApi> CiscoWarrantySource<A> {
    pub fn new(api: A, batch_size: usize) -> Self {
        Self { api, batch_size }
    }
}

#[async_trait]
impl<A: CiscoApi> WarrantySource for CiscoWarrantySource<A> {
    fn family(&self) -> VendorFamily {
        VendorFamily::Cisco
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }

    async fn lookup(&self, batch: &[NormalizedIdentifier]) -> Result<Vec<WarrantyLookupResult>> {
        let summary = self.api.coverage_summary(batch).await?;

        // an EOX failure only costs this batch its end-of-life data
        let eox = self.api.eox_by_serial(batch).await;
        let mut end_of_life = match eox.and_then(|eox| eox.end_of_life_by_serial()) {
            Ok(map) => map,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warn!("End-of-life lookup failed, leaving end-of-life untouched: {}", e);
                HashMap::new()
            }
        };

        let mut results: Vec<WarrantyLookupResult> = summary
            .serial_numbers
            .iter()
            .map(|coverage| {
                let result = coverage.to_lookup_result();
                match end_of_life.remove(&coverage.sr_no) {
                    Some(eol) => result.with_end_of_life(eol),
                    None => result,
                }
            })
            .collect();

        // requested serials the warranty summary skipped still get their end-of-life
        for id in batch {
            if let Some(eol) = end_of_life.remove(id.as_str()) {
                debug!("End-of-life record for {} has no warranty summary", id);
                results.push(WarrantyLookupResult::end_of_life_only(id.as_str(), eol));
            }
        }
        for serial in end_of_life.keys() {
            debug!("Ignoring end-of-life record for unrequested serial {}", serial);
        }

        Ok(results)
    }
}
