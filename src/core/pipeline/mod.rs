//! Vendor pipelines
//!
//! A pipeline runs `Fetch -> Normalize+Dedupe -> BatchLookup ->
//! Reconcile+Write -> Done` for one vendor family. Only setup failures (token
//! acquisition, the initial record fetch) end a run early; everything after
//! that is counted in the [`RunSummary`].

mod orchestrator;
mod stats;


pub use orchestrator::{PipelineStage, SyncPipeline};
pub use stats::{RunSummary, SyncReport, VendorRun, WriteKind};
