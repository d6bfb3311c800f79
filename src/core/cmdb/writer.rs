//! Applies patches to the CMDB and keeps the in-memory mirror in step

use crate::core::cmdb::client::{CmdbClient, KeyKind, LookupKey};
use crate::core::models::{AssetRecord, CmdbField, FieldPatch, FieldValue, NormalizedIdentifier};
use crate::core::reconcile::Reconciliation;
use crate::utils::error::{Result, SyncError};
use std::sync::Arc;
use tracing::{info, warn};

/// Result of one write attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Applied,
    /// Empty patch, nothing sent
    SkippedEmpty,
    /// More than one row matched the lookup key
    AmbiguousMatch,
    NotFound,
}

/// CMDB writer over any [`CmdbClient`]
#[derive(Clone)]
pub struct CmdbWriter {
    client: Arc<dyn CmdbClient>,
}

impl CmdbWriter {
    pub fn new(client: Arc<dyn CmdbClient>) -> Self {
        Self { client }
    }

    /// Send `patch` to the row matched by `key`
    ///
    /// Ambiguous and missing rows are outcomes, not errors. Transport and
    /// status failures are returned as errors.
    pub async fn apply_patch(&self, key: &LookupKey, patch: &FieldPatch) -> Result<WriteOutcome> {
        if patch.is_empty() {
            return Ok(WriteOutcome::SkippedEmpty);
        }

        match self.client.update_record(key, patch).await {
            Ok(()) => Ok(WriteOutcome::Applied),
            Err(SyncError::CmdbAmbiguous { .. }) => Ok(WriteOutcome::AmbiguousMatch),
            Err(SyncError::CmdbNotFound(_)) => Ok(WriteOutcome::NotFound),
            Err(e) => Err(e),
        }
    }

    /// Write `patch` for `record` and mirror it on success
    pub async fn write(
        &self,
        record: &mut AssetRecord,
        kind: KeyKind,
        patch: &FieldPatch,
    ) -> Result<WriteOutcome> {
        let key = LookupKey::for_record(kind, record);
        let outcome = self.apply_patch(&key, patch).await?;

        match outcome {
            WriteOutcome::Applied => {
                info!(
                    name = %record.name,
                    serial_number = %record.serial_number,
                    "Updated {}",
                    patch
                );
                record.apply(patch);
            }
            WriteOutcome::AmbiguousMatch => warn!(
                name = %record.name,
                serial_number = %record.serial_number,
                asset_tag = %record.asset_tag,
                "Record has duplicates in the CMDB and can not be updated"
            ),
            WriteOutcome::NotFound => warn!(
                name = %record.name,
                serial_number = %record.serial_number,
                asset_tag = %record.asset_tag,
                "Record could not be found in the CMDB"
            ),
            WriteOutcome::SkippedEmpty => {}
        }

        Ok(outcome)
    }

    /// Replace an unusable serial number with the normalized asset tag
    pub async fn correct_identifier(
        &self,
        record: &mut AssetRecord,
        identifier: &NormalizedIdentifier,
    ) -> Result<WriteOutcome> {
        info!(
            name = %record.name,
            serial_number = %record.serial_number,
            "Correcting serial number to '{}'",
            identifier
        );
        let patch = FieldPatch::new().with(
            CmdbField::SerialNumber,
            FieldValue::Text(identifier.to_string()),
        );
        self.write(record, KeyKind::NameAndAssetTag, &patch).await
    }

    /// Apply a reconciliation, choosing the key from its kind
    pub async fn apply_reconciliation(
        &self,
        record: &mut AssetRecord,
        reconciliation: &Reconciliation,
    ) -> Result<WriteOutcome> {
        match reconciliation {
            Reconciliation::Update(patch) => self.write(record, KeyKind::NameAndSerial, patch).await,
            Reconciliation::Invalidate { patch, reason } => {
                if !patch.is_empty() {
                    warn!(
                        name = %record.name,
                        serial_number = %record.serial_number,
                        sys_id = %record.sys_id,
                        "Marking warranty data invalid: {}",
                        reason
                    );
                }
                self.write(record, KeyKind::SystemId, patch).await
            }
        }
    }
}
