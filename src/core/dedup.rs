//! Record deduplication
//!
//! Builds the identifier index for one pipeline run. Building is pure: the
//! serial number corrections and invalidations it discovers are returned as
//! pending actions for the orchestrator to apply.

use crate::core::identifier::{IdentifierRules, normalize};
use crate::core::models::{AssetRecord, NormalizedIdentifier};
use std::collections::HashMap;

/// Normalized identifier to CMDB record, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct IdentifierIndex {
    order: Vec<NormalizedIdentifier>,
    records: HashMap<NormalizedIdentifier, AssetRecord>,
}

impl IdentifierIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the identifier is already present; returns whether it was inserted
    pub fn insert_if_absent(&mut self, id: NormalizedIdentifier, record: AssetRecord) -> bool {
        if self.records.contains_key(&id) {
            return false;
        }
        self.order.push(id.clone());
        self.records.insert(id, record);
        true
    }

    pub fn get(&self, id: &str) -> Option<&AssetRecord> {
        self.records.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut AssetRecord> {
        self.records.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Identifiers in insertion order
    pub fn identifiers(&self) -> &[NormalizedIdentifier] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NormalizedIdentifier, &AssetRecord)> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id).map(|record| (id, record)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Counters reported at the end of the fetch phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupCounts {
    pub valid: usize,
    pub no_id: usize,
    pub collisions: usize,
}

/// Serial number correction to write before reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierCorrection {
    pub record: AssetRecord,
    pub identifier: NormalizedIdentifier,
    /// Whether this record is the one stored in the index
    pub indexed: bool,
}

/// Output of [`build_index`]
#[derive(Debug, Clone, Default)]
pub struct IndexBuild {
    pub index: IdentifierIndex,
    pub counts: DedupCounts,
    pub corrections: Vec<IdentifierCorrection>,
    /// Records with no usable identifier, to be flagged invalid
    pub invalid: Vec<AssetRecord>,
}

/// Normalize every record and index it under its identifier
///
/// The first record seen for an identifier wins. Corrections are collected
/// before the collision check, so a duplicate found through its asset tag is
/// still corrected.
pub fn build_index(records: &[AssetRecord], rules: &IdentifierRules) -> IndexBuild {
    let mut build = IndexBuild::default();

    for record in records {
        let normalized = match normalize(&record.serial_number, &record.asset_tag, rules) {
            Ok(normalized) => normalized,
            Err(_) => {
                build.counts.no_id += 1;
                build.invalid.push(record.clone());
                continue;
            }
        };

        let needs_correction = normalized.needs_correction();
        let inserted = build
            .index
            .insert_if_absent(normalized.identifier.clone(), record.clone());

        if needs_correction {
            build.corrections.push(IdentifierCorrection {
                record: record.clone(),
                identifier: normalized.identifier,
                indexed: inserted,
            });
        }

        if inserted {
            build.counts.valid += 1;
        } else {
            build.counts.collisions += 1;
        }
    }

    build
}
