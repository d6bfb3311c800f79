//! Pipeline sequencing

use super::stats::{RunSummary, WriteKind};
use crate::core::batch::fetch_batches;
use crate::core::cmdb::{CmdbClient, CmdbQuery, CmdbWriter, WriteOutcome};
use crate::core::dedup::{IdentifierCorrection, IdentifierIndex, IndexBuild, build_index};
use crate::core::identifier::{IdentifierRules, NO_USABLE_IDENTIFIER};
use crate::core::models::WarrantyLookupResult;
use crate::core::reconcile::{Reconciliation, invalidate, reconcile};
use crate::core::vendors::WarrantySource;
use crate::utils::error::Result;
use futures::StreamExt;
use std::fmt;
use std::pin::pin;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Fetch,
    NormalizeDedupe,
    BatchLookup,
    ReconcileWrite,
    Done,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::Fetch => write!(f, "fetch"),
            PipelineStage::NormalizeDedupe => write!(f, "normalize+dedupe"),
            PipelineStage::BatchLookup => write!(f, "batch lookup"),
            PipelineStage::ReconcileWrite => write!(f, "reconcile+write"),
            PipelineStage::Done => write!(f, "done"),
        }
    }
}

/// Reconciles one vendor family's CMDB records against a [`WarrantySource`]
pub struct SyncPipeline<S> {
    source: S,
    cmdb: Arc<dyn CmdbClient>,
    writer: CmdbWriter,
    manufacturers: Vec<String>,
}

impl<S: WarrantySource> SyncPipeline<S> {
    pub fn new(source: S, cmdb: Arc<dyn CmdbClient>, manufacturers: Vec<String>) -> Self {
        let writer = CmdbWriter::new(cmdb.clone());
        Self {
            source,
            cmdb,
            writer,
            manufacturers,
        }
    }

    /// Records of this vendor's manufacturers, ordered by name
    ///
    /// `sys_id` breaks ties so offset paging sees a stable order.
    pub fn query(&self) -> CmdbQuery {
        CmdbQuery::new()
            .contains_any("manufacturer", &self.manufacturers)
            .order_by("name")
            .order_by("sys_id")
    }

    fn enter(&self, stage: PipelineStage) {
        debug!(vendor = %self.source.family(), "Entering {} stage", stage);
    }

    /// Run the pipeline to completion
    ///
    /// Fails only when the records cannot be fetched or the vendor rejects
    /// our credentials.
    pub async fn run(&self) -> Result<RunSummary> {
        let family = self.source.family();
        let mut summary = RunSummary::new(family);

        self.enter(PipelineStage::Fetch);
        let records = self.cmdb.fetch_records(&self.query()).await?;
        summary.fetched = records.len();

        self.enter(PipelineStage::NormalizeDedupe);
        let IndexBuild {
            mut index,
            counts,
            corrections,
            invalid,
        } = build_index(&records, &IdentifierRules::for_family(family));
        summary.record_dedup(&counts);
        info!("Found {} valid {} records", counts.valid, family);
        info!("{} {} records had no usable identifier", counts.no_id, family);
        info!("{} duplicate {} identifiers dropped", counts.collisions, family);

        for correction in corrections {
            self.apply_correction(&mut index, &mut summary, correction)
                .await?;
        }
        for mut record in invalid {
            warn!(
                name = %record.name,
                serial_number = %record.serial_number,
                asset_tag = %record.asset_tag,
                "Record has no usable identifier"
            );
            let reconciliation = invalidate(&record, NO_USABLE_IDENTIFIER);
            let outcome = self
                .writer
                .apply_reconciliation(&mut record, &reconciliation)
                .await;
            settle(&mut summary, WriteKind::Invalidation, outcome)?;
        }

        self.enter(PipelineStage::BatchLookup);
        let ids = index.identifiers().to_vec();
        let source = &self.source;
        let mut batches = pin!(fetch_batches(&ids, source.batch_size(), move |batch| {
            source.lookup(batch)
        }));

        while let Some(batch) = batches.next().await {
            let results = match batch.result {
                Ok(results) => {
                    debug!(
                        "Batch {} returned {} results in {:?}",
                        batch.index,
                        results.len(),
                        batch.duration
                    );
                    summary.batches_ok += 1;
                    results
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!(
                        "Skipping batch {} ({} identifiers): {}",
                        batch.index,
                        batch.items.len(),
                        e
                    );
                    summary.batches_failed += 1;
                    continue;
                }
            };

            self.enter(PipelineStage::ReconcileWrite);
            for result in &results {
                self.apply_result(&mut index, &mut summary, result).await?;
            }
        }

        self.enter(PipelineStage::Done);
        info!("{}", summary);
        Ok(summary)
    }

    async fn apply_correction(
        &self,
        index: &mut IdentifierIndex,
        summary: &mut RunSummary,
        correction: IdentifierCorrection,
    ) -> Result<()> {
        let IdentifierCorrection {
            mut record,
            identifier,
            indexed,
        } = correction;

        // keep the indexed mirror in step when the corrected record is the indexed one
        let mirror = if indexed {
            index.get_mut(identifier.as_str())
        } else {
            None
        };
        let outcome = match mirror {
            Some(mirror) => self.writer.correct_identifier(mirror, &identifier).await,
            None => self.writer.correct_identifier(&mut record, &identifier).await,
        };
        settle(summary, WriteKind::Correction, outcome)
    }

    async fn apply_result(
        &self,
        index: &mut IdentifierIndex,
        summary: &mut RunSummary,
        result: &WarrantyLookupResult,
    ) -> Result<()> {
        let Some(record) = index.get_mut(&result.identifier) else {
            summary.anomalies += 1;
            match &result.error {
                Some(kind) => warn!(
                    identifier = %result.identifier,
                    "{} for an identifier that is not in the CMDB", kind
                ),
                None => warn!(
                    identifier = %result.identifier,
                    "Vendor returned an identifier that is not in the CMDB"
                ),
            }
            return Ok(());
        };

        let reconciliation = reconcile(self.source.family(), result, record);
        let kind = match reconciliation {
            Reconciliation::Update(_) => WriteKind::Update,
            Reconciliation::Invalidate { .. } => WriteKind::Invalidation,
        };
        let outcome = self
            .writer
            .apply_reconciliation(record, &reconciliation)
            .await;
        settle(summary, kind, outcome)
    }
}

/// Count a write; only fatal errors propagate
fn settle(summary: &mut RunSummary, kind: WriteKind, outcome: Result<WriteOutcome>) -> Result<()> {
    match outcome {
        Ok(outcome) => {
            summary.record_write(kind, outcome);
            Ok(())
        }
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            error!("CMDB write failed: {}", e);
            summary.write_errors += 1;
            Ok(())
        }
    }
}
