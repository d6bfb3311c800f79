//! Scripted vendor APIs
//!
//! Both fakes answer from a table keyed by identifier and record every batch
//! they were asked for. They are cheap to clone; clones share state, so a
//! test can keep one handle and give the other to a pipeline.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use warranty_sync::core::models::NormalizedIdentifier;
use warranty_sync::core::vendors::cisco::{
    CoverageSummary, CoverageSummaryResponse, EoxDate, EoxRecord, EoxResponse,
};
use warranty_sync::core::vendors::dell::{DellAsset, Entitlement};
use warranty_sync::core::vendors::{CiscoApi, DellApi};
use warranty_sync::{Result, SyncError};

fn ids(batch: &[NormalizedIdentifier]) -> Vec<String> {
    batch.iter().map(|id| id.to_string()).collect()
}

#[derive(Default)]
struct CiscoScript {
    coverage: HashMap<String, CoverageSummary>,
    end_of_life: HashMap<String, String>,
    extra_coverage: Vec<CoverageSummary>,
    failing_serial: Option<String>,
    eox_without_records: bool,
    reject_token: bool,
    batches: Vec<Vec<String>>,
}

/// Scripted Cisco warranty summary and EOX endpoints
#[derive(Clone, Default)]
pub struct ScriptedCisco {
    script: Arc<Mutex<CiscoScript>>,
}

impl ScriptedCisco {
    pub fn new() -> Self {
        Self::default()
    }

    fn edit(self, f: impl FnOnce(&mut CiscoScript)) -> Self {
        f(&mut self.script.lock().unwrap());
        self
    }

    /// Warranty summary for `serial`; an empty `end_date` means none on file
    pub fn coverage(self, serial: &str, end_date: &str, covered: bool) -> Self {
        let summary = CoverageSummary {
            sr_no: serial.to_string(),
            warranty_end_date: end_date.to_string(),
            is_covered: if covered { "YES" } else { "NO" }.to_string(),
            error_response: None,
        };
        self.edit(|s| {
            s.coverage.insert(serial.to_string(), summary);
        })
    }

    /// Error marker for `serial`
    pub fn error_marker(self, serial: &str) -> Self {
        let summary = error_summary(serial);
        self.edit(|s| {
            s.coverage.insert(serial.to_string(), summary);
        })
    }

    /// Error marker for an identifier nobody asked about
    pub fn unsolicited_error(self, serial: &str) -> Self {
        let summary = error_summary(serial);
        self.edit(|s| s.extra_coverage.push(summary))
    }

    /// EOX record for `serial`; an empty date means no last date of support
    pub fn end_of_life(self, serial: &str, last_date: &str) -> Self {
        self.edit(|s| {
            s.end_of_life
                .insert(serial.to_string(), last_date.to_string());
        })
    }

    /// Warranty summary for any batch containing `serial` fails
    pub fn failing_batch_with(self, serial: &str) -> Self {
        self.edit(|s| s.failing_serial = Some(serial.to_string()))
    }

    /// EOX answers without an `EOXRecord` list
    pub fn eox_without_records(self) -> Self {
        self.edit(|s| s.eox_without_records = true)
    }

    /// Every call fails as if the token was revoked
    pub fn rejecting_token(self) -> Self {
        self.edit(|s| s.reject_token = true)
    }

    /// Batches requested from the warranty summary endpoint
    pub fn batches(&self) -> Vec<Vec<String>> {
        self.script.lock().unwrap().batches.clone()
    }
}

fn error_summary(serial: &str) -> CoverageSummary {
    CoverageSummary {
        sr_no: serial.to_string(),
        warranty_end_date: String::new(),
        is_covered: String::new(),
        error_response: Some(serde_json::json!({"APIError": "SN Not Found"})),
    }
}

#[async_trait]
impl CiscoApi for ScriptedCisco {
    async fn coverage_summary(
        &self,
        serials: &[NormalizedIdentifier],
    ) -> Result<CoverageSummaryResponse> {
        let mut script = self.script.lock().unwrap();
        let requested = ids(serials);
        script.batches.push(requested.clone());

        if script.reject_token {
            return Err(SyncError::auth("cisco", "API returned 401 Unauthorized"));
        }
        if let Some(failing) = &script.failing_serial {
            if requested.contains(failing) {
                return Err(SyncError::vendor_batch("cisco", "Malformed response"));
            }
        }

        let mut serial_numbers: Vec<CoverageSummary> = requested
            .iter()
            .filter_map(|serial| script.coverage.get(serial).cloned())
            .collect();
        serial_numbers.extend(script.extra_coverage.drain(..));
        Ok(CoverageSummaryResponse { serial_numbers })
    }

    async fn eox_by_serial(&self, serials: &[NormalizedIdentifier]) -> Result<EoxResponse> {
        let script = self.script.lock().unwrap();
        if script.eox_without_records {
            return Ok(EoxResponse { records: None });
        }

        let records = ids(serials)
            .into_iter()
            .filter_map(|serial| {
                script.end_of_life.get(&serial).map(|value| EoxRecord {
                    input_value: serial.clone(),
                    last_date_of_support: EoxDate {
                        value: value.clone(),
                    },
                })
            })
            .collect();
        Ok(EoxResponse {
            records: Some(records),
        })
    }
}

#[derive(Default)]
struct DellScript {
    entitlements: HashMap<String, Vec<String>>,
    batches: Vec<Vec<String>>,
}

/// Scripted Dell asset-entitlements endpoint
///
/// Service tags without scripted entitlements come back with a null id.
#[derive(Clone, Default)]
pub struct ScriptedDell {
    script: Arc<Mutex<DellScript>>,
}

impl ScriptedDell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entitlements for `service_tag`, given as end dates in order
    pub fn entitlements(self, service_tag: &str, end_dates: &[&str]) -> Self {
        self.script.lock().unwrap().entitlements.insert(
            service_tag.to_string(),
            end_dates.iter().map(|d| d.to_string()).collect(),
        );
        self
    }

    pub fn batches(&self) -> Vec<Vec<String>> {
        self.script.lock().unwrap().batches.clone()
    }
}

#[async_trait]
impl DellApi for ScriptedDell {
    async fn asset_entitlements(
        &self,
        service_tags: &[NormalizedIdentifier],
    ) -> Result<Vec<DellAsset>> {
        let mut script = self.script.lock().unwrap();
        let requested = ids(service_tags);
        script.batches.push(requested.clone());

        Ok(requested
            .into_iter()
            .map(|tag| match script.entitlements.get(&tag) {
                Some(end_dates) => DellAsset {
                    id: Some(serde_json::json!(1000)),
                    service_tag: tag,
                    entitlements: end_dates
                        .iter()
                        .map(|end_date| Entitlement {
                            end_date: end_date.clone(),
                        })
                        .collect(),
                },
                None => DellAsset {
                    id: None,
                    service_tag: tag,
                    entitlements: Vec::new(),
                },
            })
            .collect())
    }
}
