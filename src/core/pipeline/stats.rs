//! Per-run counters

use crate::core::cmdb::WriteOutcome;
use crate::core::dedup::DedupCounts;
use crate::core::models::VendorFamily;
use serde::Serialize;
use std::fmt;

/// Why a write was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    Correction,
    Update,
    Invalidation,
}

/// Counters for one vendor pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub family: VendorFamily,
    /// Records returned by the CMDB
    pub fetched: usize,
    /// Records indexed under a usable identifier
    pub valid: usize,
    pub no_identifier: usize,
    pub duplicates: usize,
    pub corrections: usize,
    pub batches_ok: usize,
    pub batches_failed: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub invalidated: usize,
    pub ambiguous: usize,
    pub not_found: usize,
    pub write_errors: usize,
    /// Vendor results for identifiers that are not in the index
    pub anomalies: usize,
}

impl RunSummary {
    pub fn new(family: VendorFamily) -> Self {
        Self {
            family,
            fetched: 0,
            valid: 0,
            no_identifier: 0,
            duplicates: 0,
            corrections: 0,
            batches_ok: 0,
            batches_failed: 0,
            updated: 0,
            unchanged: 0,
            invalidated: 0,
            ambiguous: 0,
            not_found: 0,
            write_errors: 0,
            anomalies: 0,
        }
    }

    pub fn record_dedup(&mut self, counts: &DedupCounts) {
        self.valid = counts.valid;
        self.no_identifier = counts.no_id;
        self.duplicates = counts.collisions;
    }

    pub fn record_write(&mut self, kind: WriteKind, outcome: WriteOutcome) {
        match (outcome, kind) {
            (WriteOutcome::Applied, WriteKind::Correction) => self.corrections += 1,
            (WriteOutcome::Applied, WriteKind::Update) => self.updated += 1,
            (WriteOutcome::Applied, WriteKind::Invalidation) => self.invalidated += 1,
            (WriteOutcome::SkippedEmpty, _) => self.unchanged += 1,
            (WriteOutcome::AmbiguousMatch, _) => self.ambiguous += 1,
            (WriteOutcome::NotFound, _) => self.not_found += 1,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} fetched, {} valid, {} without identifier, {} duplicates, \
             {} corrected, {} updated, {} unchanged, {} invalidated, \
             {} ambiguous, {} not found, {} write errors, {} anomalies, \
             {}/{} batches ok",
            self.family,
            self.fetched,
            self.valid,
            self.no_identifier,
            self.duplicates,
            self.corrections,
            self.updated,
            self.unchanged,
            self.invalidated,
            self.ambiguous,
            self.not_found,
            self.write_errors,
            self.anomalies,
            self.batches_ok,
            self.batches_ok + self.batches_failed
        )
    }
}

/// Outcome of one vendor pipeline
#[derive(Debug)]
pub struct VendorRun {
    pub family: VendorFamily,
    pub result: crate::utils::error::Result<RunSummary>,
}

/// Outcome of every enabled pipeline, in run order
#[derive(Debug, Default)]
pub struct SyncReport {
    pub runs: Vec<VendorRun>,
}

impl SyncReport {
    /// Whether every pipeline ran to completion
    pub fn is_success(&self) -> bool {
        self.runs.iter().all(|run| run.result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &VendorRun> {
        self.runs.iter().filter(|run| run.result.is_err())
    }
}
